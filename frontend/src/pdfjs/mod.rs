//! Bindings to the pdf.js wrapper in `js/pdfjs_bridge.js`.

// the generated import glue contains unsafe blocks
#![allow(unsafe_code)]

use common::page_viewport::{PageSize, PageViewport};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/pdfjs_bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn load_pdf_document(bytes: &[u8]) -> Result<JsValue, JsValue>;

    fn pdf_page_count(doc: &JsValue) -> u32;

    #[wasm_bindgen(catch)]
    async fn pdf_page_size(doc: &JsValue, page: u32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn render_pdf_page(doc: &JsValue, page: u32, canvas_id: &str, viewport: JsValue) -> Result<JsValue, JsValue>;

    fn destroy_pdf_document(doc: &JsValue);
}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfJsError {
    pub action: &'static str,
    pub message: String,
}

impl PdfJsError {
    // the bridge rethrows every failure as a plain string
    fn from_js(action: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self { action, message }
    }
}

impl std::fmt::Display for PdfJsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to {}: {}", self.action, self.message)
    }
}

impl std::error::Error for PdfJsError {}

#[derive(Serialize)]
struct CanvasDraw {
    scale: f64,
    css_width: u32,
    css_height: u32,
    bitmap_width: u32,
    bitmap_height: u32,
    transform: Option<[f64; 6]>,
}

impl From<PageViewport> for CanvasDraw {
    fn from(viewport: PageViewport) -> Self {
        Self {
            scale: viewport.scale,
            css_width: viewport.css_width,
            css_height: viewport.css_height,
            bitmap_width: viewport.bitmap_width,
            bitmap_height: viewport.bitmap_height,
            transform: viewport.transform(),
        }
    }
}

/// A decoded document; released in pdf.js when dropped.
#[derive(Debug)]
pub struct PdfDocumentHandle {
    doc: JsValue,
    generation: u64,
    page_count: u32,
}

impl PdfDocumentHandle {
    pub async fn load(bytes: &[u8], generation: u64) -> Result<Self, PdfJsError> {
        let doc = load_pdf_document(bytes)
            .await
            .map_err(|e| PdfJsError::from_js("read the PDF", e))?;
        let page_count = pdf_page_count(&doc);
        Ok(Self { doc, generation, page_count })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    pub async fn page_size(&self, page: u32) -> Result<PageSize, PdfJsError> {
        let size = pdf_page_size(&self.doc, page)
            .await
            .map_err(|e| PdfJsError::from_js("measure the page", e))?;
        serde_wasm_bindgen::from_value(size).map_err(|e| PdfJsError { action: "measure the page", message: e.to_string() })
    }

    /// Draws `page` into the canvas with id `canvas_id`, fitted to `container_width`.
    pub async fn render_page(
        &self,
        page: u32,
        zoom: f64,
        container_width: f64,
        device_pixel_ratio: f64,
        canvas_id: &str,
    ) -> Result<PageViewport, PdfJsError> {
        let size = self.page_size(page).await?;
        let viewport = PageViewport::fit_to_width(container_width, size, zoom, device_pixel_ratio);
        let draw = serde_wasm_bindgen::to_value(&CanvasDraw::from(viewport)).map_err(|e| PdfJsError { action: "render the page", message: e.to_string() })?;
        render_pdf_page(&self.doc, page, canvas_id, draw)
            .await
            .map_err(|e| PdfJsError::from_js("render the page", e))?;
        Ok(viewport)
    }
}

impl Drop for PdfDocumentHandle {
    fn drop(&mut self) {
        destroy_pdf_document(&self.doc);
    }
}
