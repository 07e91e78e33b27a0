use common::summary::{TagVariant, keyword_variant};
use dioxus::prelude::*;

#[component]
pub fn KeywordTags(keywords: Vec<String>) -> Element {
    if keywords.is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "key-words",
            class: "tag-row",
            for (index, keyword) in keywords.iter().enumerate() {
                span {
                    key: "{index}",
                    class: match keyword_variant(index) {
                        TagVariant::Primary => "tag tag-primary",
                        TagVariant::Neutral => "tag tag-neutral",
                    },
                    "{keyword}"
                }
            }
        }
    }
}
