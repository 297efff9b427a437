//! The header emblem and the contract for obtaining it.

use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// A decoded bitmap ready to be placed on a surface.
///
/// `rgb` holds `width * height * 3` bytes; `alpha`, when present, holds one
/// byte per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_alpha", &self.alpha.is_some())
            .finish()
    }
}

impl RasterImage {
    /// Builds an opaque image of a single colour.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = (width * height) as usize;
        Self {
            width,
            height,
            rgb: rgb.iter().copied().cycle().take(pixels * 3).collect(),
            alpha: None,
        }
    }
}

pub type IconFuture<'a> = Pin<Box<dyn Future<Output = Option<Arc<RasterImage>>> + Send + 'a>>;

/// Fetch-or-reuse access to the header icon.
///
/// Implementations may load lazily and memoize for the rest of the process.
/// `None` means the icon is unavailable; the header then renders without a
/// bitmap.
pub trait IconSource: Send + Sync + Debug {
    fn fetch(&self) -> IconFuture<'_>;
}

/// Never provides an icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcon;

impl IconSource for NoIcon {
    fn fetch(&self) -> IconFuture<'_> {
        Box::pin(async { None })
    }
}

/// Hands out a pre-resolved icon.
#[derive(Debug, Clone)]
pub struct StaticIcon(pub Arc<RasterImage>);

impl IconSource for StaticIcon {
    fn fetch(&self) -> IconFuture<'_> {
        let icon = self.0.clone();
        Box::pin(async move { Some(icon) })
    }
}
