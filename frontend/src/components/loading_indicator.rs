use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(label: Option<String>) -> Element {
    let label = label.unwrap_or("Loading...".to_string());
    rsx! {
        div {
            class: "loading-indicator",
            role: "status",
            span { class: "spinner" }
            "{label}"
        }
    }
}
