//! Abstract and IMRAD sections with clickable reference markers.

use common::article::{RefText, Section};
use common::sections::{TextSegment, imrad_sections, split_ref_text};
use dioxus::prelude::*;

use super::output_box::OutputBox;
use super::use_displayed_article;

#[component]
pub fn AbstractBox() -> Element {
    let article = use_displayed_article();
    let Some(abstract_section) = article.response.article.r#abstract.clone() else {
        return rsx! {};
    };
    if abstract_section.paragraphs.is_empty() {
        return rsx! {};
    }
    rsx! {
        OutputBox {
            id: "abstract-output",
            title: "ABSTRACT",
            div {
                id: "abstract-return-display",
                for (index, paragraph) in abstract_section.paragraphs.into_iter().enumerate() {
                    RefParagraph { key: "{index}", paragraph }
                }
            }
        }
    }
}

#[component]
pub fn ImradSections() -> Element {
    let article = use_displayed_article();
    let groups: Vec<(String, String, Vec<Section>)> = imrad_sections(&article.response.article.sections)
        .into_iter()
        .map(|(kind, sections)| {
            let id = format!("{}-output", kind.heading().to_lowercase());
            (id, kind.heading().to_uppercase(), sections.into_iter().cloned().collect())
        })
        .collect();

    rsx! {
        for (id, title, sections) in groups {
            OutputBox {
                key: "{id}",
                id: id.clone(),
                title,
                open: false,
                for (section_index, section) in sections.into_iter().enumerate() {
                    div {
                        key: "{section_index}",
                        class: "article-section",
                        for (index, paragraph) in section.paragraphs.into_iter().enumerate() {
                            RefParagraph { key: "{index}", paragraph }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RefParagraph(paragraph: RefText) -> Element {
    rsx! {
        p {
            for (index, segment) in split_ref_text(&paragraph).into_iter().enumerate() {
                {
                    match segment {
                        TextSegment::Plain(text) => rsx! { span { key: "{index}", "{text}" } },
                        TextSegment::Reference { text, target } => rsx! { RefMarker { key: "{index}", text, target } },
                    }
                }
            }
        }
    }
}

/// In-text citation; jumps to and highlights its reference.
#[component]
fn RefMarker(text: String, target: String) -> Element {
    let mut focused_reference = use_displayed_article().focused_reference;
    let href = format!("#{target}");

    rsx! {
        a {
            class: "ref-marker",
            href: "{href}",
            onclick: move |_| focused_reference.set(Some(target.clone())),
            "{text}"
        }
    }
}
