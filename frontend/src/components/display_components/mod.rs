//! Sections of the display page.

use std::rc::Rc;

use common::article::UploadResponse;
use dioxus::prelude::*;

pub mod article_body;
pub mod article_header;
pub mod display_settings;
pub mod keyword_tags;
pub mod output_box;
pub mod reference_list;
pub mod summary_panel;
pub mod tables_panel;
pub mod word_cloud;

/// The article being displayed, shared by every section.
#[derive(Clone)]
pub struct DisplayedArticle {
    pub response: Rc<UploadResponse>,
    /// Reference id last picked from an in-text marker.
    pub focused_reference: Signal<Option<String>>,
}

pub fn use_displayed_article() -> DisplayedArticle {
    use_context::<DisplayedArticle>()
}
