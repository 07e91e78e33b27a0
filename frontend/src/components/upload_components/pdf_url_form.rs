//! Checks a PDF link with the parsing API.

use common::pdf_file::looks_like_pdf_url;
use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::summarease_api::{user_facing_message, validate_pdf_url};
use crate::components::notifications::{toast_error, toast_info};

const NOT_A_PDF_LINK: &str = "Please enter an http(s) link ending in .pdf";

#[component]
pub fn PdfUrlForm() -> Element {
    let mut url = use_signal(String::new);
    let mut checking = use_signal(|| false);
    let mut inline_error = use_signal(|| None::<&'static str>);

    let mut check = move |_: ()| {
        let candidate = url.read().trim().to_string();
        if !looks_like_pdf_url(&candidate) {
            inline_error.set(Some(NOT_A_PDF_LINK));
            return;
        }
        inline_error.set(None);
        checking.set(true);
        spawn(async move {
            match validate_pdf_url(candidate.clone()).await {
                Ok(true) => toast_info("Link accepted", &candidate),
                Ok(false) => inline_error.set(Some(NOT_A_PDF_LINK)),
                Err(e) => {
                    tracing::error!("validate_pdf_url failed: {:#?}", e);
                    toast_error("Link rejected", &user_facing_message(&e));
                    url.set(String::new());
                }
            }
            checking.set(false);
        });
    };

    rsx! {
        form {
            class: "url-form",
            onsubmit: move |e| {
                e.prevent_default();
                check(());
            },
            label {
                r#for: "pdfpicker-url",
                "URL: "
            }
            input {
                id: "pdfpicker-url",
                r#type: "url",
                placeholder: "https://example.org/paper.pdf",
                value: "{url}",
                disabled: checking(),
                oninput: move |e| url.set(e.value()),
            }
            input {
                id: "url-input",
                r#type: "submit",
                value: if checking() { "Checking..." } else { "Upload URL" },
                disabled: checking(),
            }
            if let Some(message) = inline_error() {
                p { class: "inline-error", "{message}" }
            }
        }
    }
}
