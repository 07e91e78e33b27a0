//! `/`: pick a PDF, upload it, move on to the display page.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use crate::api::summarease_api::{upload_pdf, user_facing_message};
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::notifications::toast_error;
use crate::components::upload_components::pdf_drop_zone::{PdfDropZone, PickedFile};
use crate::components::upload_components::pdf_url_form::PdfUrlForm;
use crate::data_definitions::article_session::ArticleSessionStore;
use crate::routes::Route;

#[component]
pub fn UploadPage() -> Element {
    let mut sessions = use_context::<ArticleSessionStore>();
    let mut picked = use_signal(|| PickedFile::Nothing);
    let mut uploading = use_signal(|| false);

    let mut upload = move |_: ()| {
        let PickedFile::Accepted(file) = picked() else {
            return;
        };
        uploading.set(true);
        spawn(async move {
            let file_name = file.file_name.clone();
            let pdf_bytes = file.bytes.clone();
            match upload_pdf(file).await {
                Ok(response) => {
                    tracing::info!("Uploaded {}: {:?}", file_name, response.article.bibliography.title);
                    sessions.store(file_name, pdf_bytes, response);
                    navigator().push(Route::display_page());
                }
                Err(e) => {
                    tracing::error!("upload_pdf failed: {:#?}", e);
                    toast_error("Upload failed", &user_facing_message(&e));
                    picked.set(PickedFile::Nothing);
                }
            }
            uploading.set(false);
        });
    };

    let can_upload = matches!(*picked.read(), PickedFile::Accepted(_)) && !uploading();

    rsx! {
        Title { "Upload" }
        div {
            class: "upload-page",
            h1 { "Content Visualisation" }
            form {
                id: "upload-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    upload(());
                },
                PdfDropZone { picked, disabled: uploading() }
                div {
                    class: "buttons",
                    input {
                        r#type: "submit",
                        name: "submit-upload",
                        value: "Upload",
                        disabled: !can_upload,
                    }
                }
            }
            if uploading() {
                LoadingIndicator { label: "Parsing the article..." }
            }
            PdfUrlForm {}
        }
    }
}
