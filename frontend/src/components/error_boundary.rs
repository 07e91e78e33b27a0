//! Error boundary component for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Error caught by {}: {:#?}", boundary_name, err);
                rsx! {
                    div {
                        class: "error-panel",
                        h1 { "Something went wrong" }
                        p { "Boundary: {boundary_name}" }
                        Link {
                            to: Route::UploadPage {},
                            "Return to Upload Page"
                        }
                        pre { "{err:#?}" }
                    }
                }
            },
            children
        }
    }
}

/// Keeps a failing section from taking the rest of the page down.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "secondary-button",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "error-panel compact",
            h2 { "Could not show this section" }
            pre { "{error_txt}" }
            {children}
        }
    }
}
