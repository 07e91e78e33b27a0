//! `/display`: the parsed article next to the PDF.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::components::display_components::DisplayedArticle;
use crate::components::display_components::article_body::{AbstractBox, ImradSections};
use crate::components::display_components::article_header::ArticleHeader;
use crate::components::display_components::display_settings::DisplaySettings;
use crate::components::display_components::keyword_tags::KeywordTags;
use crate::components::display_components::reference_list::ReferenceListBox;
use crate::components::display_components::summary_panel::SummaryBox;
use crate::components::display_components::tables_panel::TablesBox;
use crate::components::display_components::word_cloud::{KeyPhrasesBox, WordCloudBox};
use crate::components::error_boundary::ComponentErrorBoundary;
use crate::components::notifications::blocking_alert;
use crate::components::pdf_viewer::PdfViewer;
use crate::data_definitions::article_session::{ArticleSession, ArticleSessionStore};
use crate::data_definitions::display_options::DisplayOptions;
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

#[component]
pub fn DisplayPage(options: UrlParam<DisplayOptions>) -> Element {
    let sessions = use_context::<ArticleSessionStore>();
    let session = sessions.current();

    // nothing uploaded in this tab (e.g. after a reload): start over
    use_effect(move || {
        if sessions.current().is_none() {
            tracing::info!("No article loaded, back to upload");
            navigator().replace(Route::UploadPage {});
        }
    });

    rsx! {
        Title { "Display" }
        if let Some(session) = session {
            DisplayedSession { key: "{session.generation}", session: session.clone(), options: options.0 }
        }
    }
}

#[component]
fn DisplayedSession(session: ArticleSession, options: DisplayOptions) -> Element {
    let mut sessions = use_context::<ArticleSessionStore>();
    let focused_reference = use_signal(|| None::<String>);
    let article = use_context_provider(|| DisplayedArticle { response: session.response.clone(), focused_reference });

    let set_options = move |options: DisplayOptions| {
        navigator().replace(Route::DisplayPage { options: options.into() });
    };

    // decode and render failures end the session
    let on_pdf_failure = move |message: String| {
        blocking_alert(&format!("Could not display the PDF. {message}"));
        sessions.clear();
        navigator().replace(Route::UploadPage {});
    };

    let keywords = article.response.article.keywords.clone();

    rsx! {
        div {
            class: "display-page",
            DisplaySettings { options, on_change: set_options }
            div {
                id: "output-main",
                class: if options.show_pdf { "output-main two-columns" } else { "output-main" },
                div {
                    id: "pdf-renderer",
                    style: if options.show_pdf { "display: block;" } else { "display: none;" },
                    h2 { "{session.file_name}" }
                    PdfViewer {
                        pdf_bytes: session.pdf_bytes.clone(),
                        generation: session.generation,
                        on_failure: on_pdf_failure,
                    }
                }
                div {
                    id: "summary-info",
                    class: "summary-boxes",
                    ComponentErrorBoundary {
                        ArticleHeader {}
                        KeywordTags { keywords }
                        AbstractBox {}
                        SummaryBox { percent: options.summary_percent }
                        WordCloudBox {}
                        KeyPhrasesBox {}
                        ImradSections {}
                        if options.show_tables {
                            TablesBox {}
                        }
                        ReferenceListBox {}
                    }
                }
            }
        }
    }
}
