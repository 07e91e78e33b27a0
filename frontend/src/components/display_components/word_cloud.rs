//! Most common words as a cloud, and the ranked key phrases.

use common::summary::word_cloud;
use dioxus::prelude::*;

use super::output_box::OutputBox;
use super::use_displayed_article;

const TOP_WORDS: usize = 10;
const TOP_PHRASES: usize = 10;

#[component]
pub fn WordCloudBox() -> Element {
    let article = use_displayed_article();
    let words = word_cloud(&article.response.common_words, TOP_WORDS);
    if words.is_empty() {
        return rsx! {};
    }

    rsx! {
        OutputBox {
            id: "common-words-output",
            title: "TOP {TOP_WORDS} WORDS",
            div {
                id: "word-cloud-return-display",
                class: "word-cloud",
                for word in words {
                    span {
                        key: "{word.word}",
                        style: "font-size: {word.font_px}px;",
                        title: "{word.count}",
                        "{word.word}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn KeyPhrasesBox() -> Element {
    let article = use_displayed_article();
    let phrases: Vec<String> = article
        .response
        .phrase_ranks
        .iter()
        .take(TOP_PHRASES)
        .map(|(phrase, _)| phrase.clone())
        .collect();
    if phrases.is_empty() {
        return rsx! {};
    }

    rsx! {
        OutputBox {
            id: "key-phrases-output",
            title: "KEY PHRASES",
            open: false,
            ol {
                for (index, phrase) in phrases.into_iter().enumerate() {
                    li { key: "{index}", "{phrase}" }
                }
            }
        }
    }
}
