//! Canvas geometry for drawing one PDF page.

use serde::{Deserialize, Serialize};

/// Intrinsic page size at scale 1, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

/// Sizes handed to the canvas for a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageViewport {
    /// Scale passed to the PDF renderer.
    pub scale: f64,
    /// Bitmap multiplier for high-DPI screens.
    pub output_scale: f64,
    pub css_width: u32,
    pub css_height: u32,
    pub bitmap_width: u32,
    pub bitmap_height: u32,
}

impl PageViewport {
    /// Fits the page to the container width, then applies `zoom`.
    ///
    /// The bitmap is `output_scale` times larger than the CSS box so the element keeps
    /// its visible size on high-DPI screens. Degenerate widths fall back to `zoom`.
    pub fn fit_to_width(container_width: f64, page: PageSize, zoom: f64, device_pixel_ratio: f64) -> Self {
        let fit = if container_width.is_finite() && container_width > 0.0 && page.width.is_finite() && page.width > 0.0 {
            container_width / page.width
        } else {
            1.0
        };
        let scale = fit * zoom;
        let output_scale = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
        let width = (page.width.max(0.0)) * scale;
        let height = (page.height.max(0.0)) * scale;
        Self {
            scale,
            output_scale,
            css_width: width.floor() as u32,
            css_height: height.floor() as u32,
            bitmap_width: (width * output_scale).floor() as u32,
            bitmap_height: (height * output_scale).floor() as u32,
        }
    }

    /// Canvas transform for the renderer, `None` at 1:1.
    pub fn transform(&self) -> Option<[f64; 6]> {
        if self.output_scale == 1.0 {
            return None;
        }
        Some([self.output_scale, 0.0, 0.0, self.output_scale, 0.0, 0.0])
    }
}
