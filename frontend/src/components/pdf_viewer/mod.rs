//! Canvas viewer for the uploaded PDF.
//!
//! The viewer owns one [`PdfViewState`] and one decoded document per session. Every
//! state change that asks for a draw goes through `draw`, which keeps drawing until
//! the state reports nothing pending.

mod viewer_controls;

use std::rc::Rc;

use common::pdf_view_state::{PdfViewState, RenderRequest};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::loading_indicator::LoadingIndicator;
use crate::data_definitions::article_session::PdfBytes;
use crate::pdfjs::{PdfDocumentHandle, PdfJsError};
use viewer_controls::ViewerControls;

pub const CANVAS_ID: &str = "pdf-page-canvas";
const RESIZE_SETTLE_MS: u32 = 150;

fn device_pixel_ratio() -> f64 {
    web_sys::window().map(|window| window.device_pixel_ratio()).unwrap_or(1.0)
}

/// Runs `op` on the state and draws whatever it asks for.
fn apply(
    mut view_state: Signal<Option<PdfViewState>>,
    draw: Callback<RenderRequest>,
    op: impl FnOnce(&mut PdfViewState) -> Option<RenderRequest>,
) {
    let request = view_state.write().as_mut().and_then(op);
    if let Some(request) = request {
        draw.call(request);
    }
}

#[component]
pub fn PdfViewer(pdf_bytes: ReadSignal<PdfBytes>, generation: ReadSignal<u64>, on_failure: Callback<String>) -> Element {
    let mut view_state = use_signal(|| None::<PdfViewState>);
    let mut document = use_signal(|| None::<Rc<PdfDocumentHandle>>);
    let mut container_width = use_signal(|| 0.0_f64);

    let fail = use_callback(move |error: PdfJsError| {
        tracing::error!("PDF viewer: {}", error);
        on_failure.call(error.to_string());
    });

    let draw = use_callback(move |first: RenderRequest| {
        spawn(async move {
            let mut request = first;
            loop {
                let Some(doc) = document.peek().clone() else {
                    return;
                };
                // the document was replaced while this request waited
                if doc.generation() != request.generation {
                    return;
                }
                let width = *container_width.peek();
                if let Err(e) = doc.render_page(request.page, request.zoom, width, device_pixel_ratio(), CANVAS_ID).await {
                    fail.call(e);
                    return;
                }
                let next = view_state.write().as_mut().and_then(|state| state.render_complete(&request));
                match next {
                    Some(next) => request = next,
                    None => return,
                }
            }
        });
    });

    // effects never run during server rendering, so pdf.js is only touched in the browser
    use_effect(move || {
        let bytes = pdf_bytes();
        let generation = generation();
        spawn(async move {
            view_state.set(None);
            document.set(None);
            tracing::info!("Loading PDF ({} bytes, generation {})", bytes.as_slice().len(), generation);
            let handle = match PdfDocumentHandle::load(bytes.as_slice(), generation).await {
                Ok(handle) => handle,
                Err(e) => return fail.call(e),
            };
            match PdfViewState::load(generation, handle.page_count()) {
                Ok((state, first)) => {
                    tracing::info!("PDF has {} pages", state.total_pages());
                    document.set(Some(Rc::new(handle)));
                    view_state.set(Some(state));
                    draw.call(first);
                }
                Err(e) => fail.call(PdfJsError { action: "read the PDF", message: e.to_string() }),
            }
        });
    });

    let loaded = view_state.read().is_some();

    rsx! {
        div {
            class: "pdf-viewer",
            if loaded {
                ViewerControls { view_state, draw }
            } else {
                LoadingIndicator { label: "Opening PDF..." }
            }
            div {
                id: "canvas_container",
                tabindex: "0",
                onresize: move |e| {
                    // the content box excludes borders and scrollbars, so a fitted page never widens it
                    let Ok(size) = e.data().get_content_box_size() else {
                        tracing::error!("Failed to get content box size: {:#?}", e.data());
                        return;
                    };
                    let width = size.width;
                    if (width - *container_width.peek()).abs() < 0.5 {
                        return;
                    }
                    container_width.set(width);
                    // redraw once the size stops changing
                    spawn(async move {
                        TimeoutFuture::new(RESIZE_SETTLE_MS).await;
                        if (*container_width.peek() - width).abs() < 0.5 {
                            apply(view_state, draw, PdfViewState::redraw);
                        }
                    });
                },
                onkeydown: move |e| {
                    let offset = match e.key() {
                        Key::PageDown | Key::ArrowDown | Key::ArrowRight => 1,
                        Key::PageUp | Key::ArrowUp | Key::ArrowLeft => -1,
                        _ => return,
                    };
                    e.prevent_default();
                    apply(view_state, draw, |state| state.scroll(offset));
                },
                canvas { id: CANVAS_ID }
            }
        }
    }
}
