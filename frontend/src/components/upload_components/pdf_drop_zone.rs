//! Drop zone and hidden file input for picking a PDF.

use common::pdf_file::{FileCandidate, UploadedPdf, check_pdf};
use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_file_icons::MdCloudUpload;

pub const DROP_PROMPT: &str = "Drop your .pdf files here!";

/// What the drop zone currently knows about the user's pick.
#[derive(Clone, Debug, PartialEq)]
pub enum PickedFile {
    Nothing,
    Rejected(String),
    Accepted(UploadedPdf),
}

impl PickedFile {
    pub fn drop_text(&self) -> String {
        match self {
            PickedFile::Nothing => DROP_PROMPT.to_string(),
            PickedFile::Rejected(reason) => reason.clone(),
            PickedFile::Accepted(file) => format!("File accepted: {}", file.file_name),
        }
    }
}

async fn pick(files: Vec<FileData>) -> PickedFile {
    let Some(file) = files.into_iter().next() else {
        return PickedFile::Nothing;
    };
    let candidate = FileCandidate {
        mime_type: file.content_type().unwrap_or_default(),
        name: file.name(),
        size: file.size(),
    };
    if let Err(rejection) = check_pdf(&candidate) {
        tracing::info!("Rejected {:?} ({}): {}", candidate.name, candidate.mime_type, rejection);
        return PickedFile::Rejected(rejection.to_string());
    }
    match file.read_bytes().await {
        Ok(bytes) => PickedFile::Accepted(UploadedPdf::new(candidate.name, candidate.mime_type, bytes.to_vec())),
        Err(e) => {
            tracing::error!("Failed to read {:?}: {}", candidate.name, e);
            PickedFile::Rejected(format!("Could not read {}", candidate.name))
        }
    }
}

#[component]
pub fn PdfDropZone(mut picked: Signal<PickedFile>, disabled: ReadSignal<bool>) -> Element {
    let mut dragging = use_signal(|| false);

    let accept = move |files: Vec<FileData>| {
        if disabled() {
            return;
        }
        spawn(async move {
            let result = pick(files).await;
            picked.set(result);
        });
    };

    rsx! {
        div {
            id: "drop-zone",
            class: if dragging() { "drop-zone dragging" } else { "drop-zone" },
            ondragover: move |e| {
                e.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| dragging.set(false),
            ondrop: move |e| {
                e.prevent_default();
                dragging.set(false);
                accept(e.files());
            },

            label {
                id: "drop-text",
                r#for: "pdfpicker-file",
                Icon { icon: MdCloudUpload, style: "width: 48px; height: 48px;" }
                span { "{picked.read().drop_text()}" }
            }
            input {
                id: "pdfpicker-file",
                name: "file",
                r#type: "file",
                accept: ".pdf,application/pdf",
                style: "display: none",
                disabled: disabled(),
                onchange: move |e| accept(e.files()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::pdf_file::FileRejection;

    #[test]
    fn drop_text_follows_the_pick() {
        assert_eq!(PickedFile::Nothing.drop_text(), DROP_PROMPT);
        assert_eq!(
            PickedFile::Rejected(FileRejection::NotPdf.to_string()).drop_text(),
            "File Rejected: Please add .pdf file type"
        );
        let accepted = PickedFile::Accepted(UploadedPdf::new("paper.PDF", "", vec![1]));
        assert_eq!(accepted.drop_text(), "File accepted: paper.PDF");
    }
}
