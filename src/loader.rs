//! CDN URL builders.
//!
//! The image primitive asks a loader for a URL at each candidate width. Both
//! loaders emit the same shape:
//!
//! ```text
//! {base_url}{src}?format=webp&w={width}&q={quality}
//! ```
//!
//! [`CdnLoader`] passes the requested width through; [`MobileLoader`] pins it
//! to [`MOBILE_WIDTH`] so phones always fetch one small rendition.

/// Quality used when the caller gives none.
pub const DEFAULT_QUALITY: u32 = 90;
/// Width requested by the mobile loader regardless of layout.
pub const MOBILE_WIDTH: u32 = 640;

/// Arguments the image primitive passes to a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderProps<'a> {
    pub src: &'a str,
    pub width: u32,
    pub quality: Option<u32>,
}

pub trait ImageLoader {
    /// Fully qualified URL for one rendition.
    fn url(&self, props: &LoaderProps<'_>) -> String;

    /// Width every URL uses, if the loader ignores the requested one.
    fn fixed_width(&self) -> Option<u32> {
        None
    }
}

fn cdn_url(base_url: &str, src: &str, width: u32, quality: Option<u32>) -> String {
    format!(
        "{base_url}{src}?format=webp&w={width}&q={}",
        quality.unwrap_or(DEFAULT_QUALITY)
    )
}

/// Width-driven loader for responsive layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdnLoader<'a> {
    pub base_url: &'a str,
}

impl<'a> CdnLoader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }
}

impl ImageLoader for CdnLoader<'_> {
    fn url(&self, props: &LoaderProps<'_>) -> String {
        cdn_url(self.base_url, props.src, props.width, props.quality)
    }
}

/// Fixed-width loader for the mobile layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobileLoader<'a> {
    pub base_url: &'a str,
}

impl<'a> MobileLoader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }
}

impl ImageLoader for MobileLoader<'_> {
    fn url(&self, props: &LoaderProps<'_>) -> String {
        cdn_url(self.base_url, props.src, MOBILE_WIDTH, props.quality)
    }

    fn fixed_width(&self) -> Option<u32> {
        Some(MOBILE_WIDTH)
    }
}
