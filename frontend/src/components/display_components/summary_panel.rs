use common::summary::summary_sentences;
use dioxus::prelude::*;

use super::output_box::OutputBox;
use super::use_displayed_article;

#[component]
pub fn SummaryBox(percent: u8) -> Element {
    let article = use_displayed_article();
    let sentences = summary_sentences(&article.response.summary, percent).join(" ");

    rsx! {
        OutputBox {
            id: "summary-output",
            title: "SUMMARY",
            p {
                id: "summary-return-display",
                if sentences.is_empty() {
                    em { "No summary at this size." }
                } else {
                    "{sentences}"
                }
            }
        }
    }
}
