//! Toolbar above the page canvas.

use common::pdf_view_state::{PdfViewState, RenderRequest};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdZoomIn, MdZoomOut};
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};
use dioxus_free_icons::{Icon, IconShape};

use super::apply;

#[component]
pub(super) fn ViewerControls(view_state: Signal<Option<PdfViewState>>, draw: Callback<RenderRequest>) -> Element {
    let current_page = use_memo(move || view_state.read().as_ref().map(|state| state.current_page()).unwrap_or(1));
    let total_pages = use_memo(move || view_state.read().as_ref().map(|state| state.total_pages()).unwrap_or(1));
    let can_go_previous = use_memo(move || view_state.read().as_ref().is_some_and(|state| state.can_go_previous()));
    let can_go_next = use_memo(move || view_state.read().as_ref().is_some_and(|state| state.can_go_next()));
    let can_zoom_in = use_memo(move || view_state.read().as_ref().is_some_and(|state| state.can_zoom_in()));
    let can_zoom_out = use_memo(move || view_state.read().as_ref().is_some_and(|state| state.can_zoom_out()));
    let zoom_label = use_memo(move || view_state.read().as_ref().map(|state| state.zoom_label()).unwrap_or_default());

    rsx! {
        div {
            class: "viewer-controls",
            NavigationButton {
                id: "go_previous",
                icon: MdChevronLeft,
                label: "Previous Page",
                disabled: !can_go_previous(),
                onclick: move |_| apply(view_state, draw, PdfViewState::prev),
            }
            PageInput { view_state, draw, current_page, total_pages }
            NavigationButton {
                id: "go_next",
                icon: MdChevronRight,
                label: "Next Page",
                disabled: !can_go_next(),
                onclick: move |_| apply(view_state, draw, PdfViewState::next),
            }

            div { style: "flex-grow: 1;" }

            NavigationButton {
                id: "zoom_out",
                icon: MdZoomOut,
                label: "Zoom Out",
                disabled: !can_zoom_out(),
                onclick: move |_| apply(view_state, draw, PdfViewState::zoom_out),
            }
            span { id: "zoom_label", class: "zoom-label", "{zoom_label}" }
            NavigationButton {
                id: "zoom_in",
                icon: MdZoomIn,
                label: "Zoom In",
                disabled: !can_zoom_in(),
                onclick: move |_| apply(view_state, draw, PdfViewState::zoom_in),
            }
        }
    }
}

/// Page number field. Anything that is not a page of the document puts the
/// current page back.
#[component]
fn PageInput(
    mut view_state: Signal<Option<PdfViewState>>,
    draw: Callback<RenderRequest>,
    current_page: ReadSignal<u32>,
    total_pages: ReadSignal<u32>,
) -> Element {
    let mut text = use_signal(|| current_page().to_string());
    use_effect(move || text.set(current_page().to_string()));

    rsx! {
        label {
            class: "page-counter",
            input {
                id: "current_page",
                r#type: "number",
                min: "1",
                max: "{total_pages}",
                value: "{text}",
                oninput: move |e| text.set(e.value()),
                onchange: move |e| {
                    let Ok(page) = e.value().trim().parse::<u32>() else {
                        text.set(current_page().to_string());
                        return;
                    };
                    let outcome = view_state.write().as_mut().map(|state| state.jump_to(page));
                    match outcome {
                        Some(Ok(Some(request))) => draw.call(request),
                        Some(Ok(None)) => {}
                        Some(Err(e)) => {
                            dioxus::logger::tracing::info!("Ignoring page jump: {}", e);
                            text.set(current_page().to_string());
                        }
                        None => {}
                    }
                },
            }
            span { class: "page-total", "/ {total_pages}" }
        }
    }
}

#[component]
fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(
    id: String,
    icon: I,
    label: String,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    rsx! {
        button {
            id: "{id}",
            class: "icon-button",
            title: "{label}",
            aria_label: "{label}",
            disabled: disabled(),
            onclick: move |_| {
                if !disabled() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 26px; height: 26px;" }
        }
    }
}
