//! The header emblem, loaded on first use and kept for the process lifetime.

use image::imageops::FilterType;
use resolutio_traits::{IconFuture, IconSource, RasterImage, ResourceError, ResourceProvider};
use std::fmt;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Edge length in pixels the emblem is scaled to before embedding.
pub const DEFAULT_ICON_SIZE: u32 = 64;

const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// `true` when the extension of `path` names a decodable raster format.
pub fn is_supported_image(path: &str) -> bool {
    path.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Decodes `bytes` and stretches the result to `size`×`size` pixels.
pub fn decode_icon(bytes: &[u8], size: u32) -> Result<RasterImage, ResourceError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ResourceError::InvalidFormat(e.to_string()))?;
    let scaled = decoded.resize_exact(size, size, FilterType::Triangle).to_rgba8();

    let (width, height) = scaled.dimensions();
    let pixels = (width * height) as usize;
    let mut rgb = Vec::with_capacity(pixels * 3);
    let mut alpha = Vec::with_capacity(pixels);
    for pixel in scaled.pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }

    let opaque = alpha.iter().all(|&a| a == u8::MAX);
    Ok(RasterImage {
        width,
        height,
        rgb,
        alpha: (!opaque).then_some(alpha),
    })
}

/// Fetch-or-reuse emblem backed by a [`ResourceProvider`].
///
/// The first `fetch` loads and decodes the asset; every later call returns
/// the same result, including a failed one. Concurrent first calls share a
/// single load.
pub struct MemoizedIcon {
    provider: Arc<dyn ResourceProvider>,
    path: String,
    size: u32,
    cell: OnceCell<Option<Arc<RasterImage>>>,
}

impl fmt::Debug for MemoizedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoizedIcon")
            .field("provider", &self.provider.name())
            .field("path", &self.path)
            .field("loaded", &self.cell.initialized())
            .finish()
    }
}

impl MemoizedIcon {
    pub fn new(provider: Arc<dyn ResourceProvider>, path: impl Into<String>) -> Self {
        Self {
            provider,
            path: path.into(),
            size: DEFAULT_ICON_SIZE,
            cell: OnceCell::new(),
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    fn load(&self) -> Result<RasterImage, ResourceError> {
        if !is_supported_image(&self.path) {
            return Err(ResourceError::InvalidFormat(format!(
                "Unsupported image type: {}",
                self.path
            )));
        }
        let bytes = self.provider.load(&self.path)?;
        decode_icon(&bytes, self.size)
    }
}

impl IconSource for MemoizedIcon {
    fn fetch(&self) -> IconFuture<'_> {
        Box::pin(async move {
            self.cell
                .get_or_init(|| async {
                    match self.load() {
                        Ok(icon) => {
                            log::info!("Loaded emblem '{}' via {}", self.path, self.provider.name());
                            Some(Arc::new(icon))
                        }
                        Err(e) => {
                            log::warn!("Emblem '{}' unavailable, rendering without it: {}", self.path, e);
                            None
                        }
                    }
                })
                .await
                .clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resolutio_traits::{InMemoryResourceProvider, SharedResourceData};
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn png(width: u32, height: u32, alpha: u8) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([0, 90, 200, alpha]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[derive(Debug)]
    struct CountingProvider {
        inner: InMemoryResourceProvider,
        loads: AtomicUsize,
    }

    impl ResourceProvider for CountingProvider {
        fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(path)
        }

        fn exists(&self, path: &str) -> bool {
            self.inner.exists(path)
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_image("/Spun.png"));
        assert!(is_supported_image("logo.JPEG"));
        assert!(!is_supported_image("logo.svg"));
        assert!(!is_supported_image("logo"));
    }

    #[test]
    fn test_decode_scales_to_square() {
        let icon = decode_icon(&png(128, 32, 255), 64).unwrap();
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(icon.rgb.len(), 64 * 64 * 3);
        assert!(icon.alpha.is_none());
        assert_eq!(&icon.rgb[..3], &[0, 90, 200]);
    }

    #[test]
    fn test_decode_keeps_transparency() {
        let icon = decode_icon(&png(8, 8, 128), 4).unwrap();
        assert_eq!(icon.alpha.as_ref().map(Vec::len), Some(16));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_icon(b"not an image", 64),
            Err(ResourceError::InvalidFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_icon_is_loaded_once() {
        let inner = InMemoryResourceProvider::new();
        inner.add("Spun.png", png(16, 16, 255)).unwrap();
        let provider = Arc::new(CountingProvider {
            inner,
            loads: AtomicUsize::new(0),
        });

        let icon = MemoizedIcon::new(provider.clone(), "Spun.png");
        assert!(!icon.is_loaded());
        let first = icon.fetch().await;
        let second = icon.fetch().await;

        assert!(first.is_some());
        assert!(icon.is_loaded());
        assert_eq!(provider.loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(first.as_ref().unwrap(), second.as_ref().unwrap()));
    }

    #[tokio::test]
    async fn test_missing_icon_is_remembered_as_absent() {
        let _ = env_logger::builder().is_test(true).try_init();
        let provider = Arc::new(CountingProvider {
            inner: InMemoryResourceProvider::new(),
            loads: AtomicUsize::new(0),
        });

        let icon = MemoizedIcon::new(provider.clone(), "Spun.png");
        assert!(icon.fetch().await.is_none());
        assert!(icon.fetch().await.is_none());
        assert_eq!(provider.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unsupported_type_is_not_loaded() {
        let provider = Arc::new(CountingProvider {
            inner: InMemoryResourceProvider::new(),
            loads: AtomicUsize::new(0),
        });
        let icon = MemoizedIcon::new(provider.clone(), "emblem.svg");
        assert!(icon.fetch().await.is_none());
        assert_eq!(provider.loads.load(Ordering::SeqCst), 0);
    }
}
