//! MLA-8 formatted reference list.

use common::citation::{ReferenceEntry, reference_list};
use dioxus::prelude::*;

use super::output_box::OutputBox;
use super::use_displayed_article;

#[component]
pub fn ReferenceListBox() -> Element {
    let article = use_displayed_article();
    let entries = reference_list(&article.response.article.citations);
    let focused_reference = article.focused_reference;
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        OutputBox {
            id: "references-output",
            title: "REFERENCES",
            ol {
                id: "references-return-display",
                for entry in entries {
                    ReferenceItem {
                        key: "{entry.ref_id}",
                        focused: focused_reference.read().as_deref() == Some(entry.ref_id.as_str()),
                        entry: entry.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ReferenceItem(entry: ReferenceEntry, focused: bool) -> Element {
    rsx! {
        li {
            id: "{entry.ref_id}",
            class: if focused { "reference focused" } else { "reference" },
            p {
                span {
                    "{entry.entry.lead}"
                    if !entry.entry.journal.is_empty() {
                        " "
                        i { "{entry.entry.journal}" }
                    }
                    if !entry.entry.tail.is_empty() {
                        " {entry.entry.tail}"
                    }
                }
                if let Some(target) = entry.target.as_ref() {
                    " "
                    a { href: "{target}", target: "_blank", rel: "noopener", "{target}" }
                }
            }
            if !entry.ids.is_empty() {
                p {
                    class: "reference-ids",
                    for link in entry.ids.iter() {
                        a {
                            key: "{link.url}",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener",
                            title: "{link.kind.label()}",
                            "{link.kind.label()}: {link.id}"
                        }
                    }
                }
            }
            a {
                class: "scholar-link",
                href: "{entry.google_scholar_url}",
                target: "_blank",
                rel: "noopener",
                "Google Scholar"
            }
        }
    }
}
