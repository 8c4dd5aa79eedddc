//! First-page previews.
//!
//! The view asks a [`PreviewRenderer`] for one preview per tile. The default
//! [`PageOutlineRenderer`] decodes the document with lopdf and reports the
//! scaled outline of the first page; a rasterizing backend can be plugged in
//! through the same trait.

use lopdf::Document;
use serde::{Deserialize, Serialize};

use crate::utils::{inherited_page_attribute, rectangle_size};

/// US Letter, used when a page declares no usable MediaBox.
const DEFAULT_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

/// A rendered first-page preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    /// Preview width in pixels.
    pub width: u32,
    /// Preview height in pixels.
    pub height: u32,
    /// Number of pages in the document.
    pub page_count: usize,
    /// Raster data, if the renderer produces pixels.
    #[serde(skip)]
    pub pixels: Option<Vec<u8>>,
}

/// Why a preview could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewError(pub String);

impl std::fmt::Display for PreviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PreviewError {}

/// Renders the first page of a PDF at a reduced scale.
pub trait PreviewRenderer {
    /// Render the first page of `bytes` scaled by `scale`.
    fn render_first_page(&self, bytes: &[u8], scale: f32) -> Result<Preview, PreviewError>;
}

impl<R: PreviewRenderer + ?Sized> PreviewRenderer for Box<R> {
    fn render_first_page(&self, bytes: &[u8], scale: f32) -> Result<Preview, PreviewError> {
        (**self).render_first_page(bytes, scale)
    }
}

/// Preview renderer that measures the first page without rasterizing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOutlineRenderer;

impl PageOutlineRenderer {
    /// Create a new outline renderer.
    pub fn new() -> Self {
        Self
    }
}

impl PreviewRenderer for PageOutlineRenderer {
    fn render_first_page(&self, bytes: &[u8], scale: f32) -> Result<Preview, PreviewError> {
        let doc = Document::load_mem(bytes).map_err(|e| PreviewError(e.to_string()))?;

        let pages = doc.get_pages();
        let (_, &first_page) = pages
            .iter()
            .next()
            .ok_or_else(|| PreviewError("document has no pages".to_string()))?;

        let (mut width, mut height) = inherited_page_attribute(&doc, first_page, b"MediaBox")
            .and_then(|rect| rectangle_size(&doc, &rect))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let rotation = inherited_page_attribute(&doc, first_page, b"Rotate")
            .and_then(|r| r.as_i64().ok())
            .unwrap_or(0);
        if rotation.rem_euclid(180) == 90 {
            std::mem::swap(&mut width, &mut height);
        }

        Ok(Preview {
            width: (width * scale).round().max(1.0) as u32,
            height: (height * scale).round().max(1.0) as u32,
            page_count: pages.len(),
            pixels: None,
        })
    }
}
