use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        Title { "404" }
        div {
            class: "not-found-page",
            h1 { "404" }
            p { "Nothing lives at {path}." }
            Link { to: Route::UploadPage {}, "Back to upload" }
        }
    }
}
