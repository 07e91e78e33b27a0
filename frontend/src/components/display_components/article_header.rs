//! Title, authors and the author dialog.

use common::author::{AuthorDetails, citation_name};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use super::use_displayed_article;

#[component]
pub fn ArticleHeader() -> Element {
    let article = use_displayed_article();
    let bibliography = &article.response.article.bibliography;
    let mut selected_author = use_signal(|| None::<AuthorDetails>);

    let authors: Vec<(String, AuthorDetails)> = bibliography
        .authors
        .iter()
        .map(|author| (citation_name(&author.person_name), AuthorDetails::from_author(author)))
        .filter(|(name, _)| !name.is_empty())
        .collect();
    let author_count = authors.len();

    rsx! {
        div {
            id: "title-output",
            class: "article-header",
            h1 { id: "title-return-display", "{bibliography.title}" }
            div {
                id: "authors-return-display",
                class: "author-row",
                for (index, (name, details)) in authors.into_iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "author-link",
                        onclick: move |_| selected_author.set(Some(details.clone())),
                        "{name}"
                    }
                    if index + 1 < author_count {
                        span { class: "author-divider", "|" }
                    }
                }
            }
        }
        if let Some(details) = selected_author() {
            AuthorDialog { details, on_close: move |_| selected_author.set(None) }
        }
    }
}

#[component]
fn AuthorDialog(details: AuthorDetails, on_close: Callback<()>) -> Element {
    rsx! {
        div {
            id: "author-modal",
            class: "modal-backdrop",
            onclick: move |_| on_close(()),
            div {
                id: "modal-content",
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |e| e.stop_propagation(),
                button {
                    class: "icon-button close",
                    title: "Close",
                    onclick: move |_| on_close(()),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
                h3 { "{details.full_name}" }
                for (index, affiliation) in details.affiliations.iter().enumerate() {
                    p {
                        key: "{index}",
                        class: "affiliation",
                        for part in affiliation.iter() {
                            span { "{part}" }
                            br {}
                        }
                    }
                }
                if let (Some(email), Some(mailto)) = (details.email.clone(), details.mailto()) {
                    a { href: "{mailto}", "{email}" }
                }
            }
        }
    }
}
