//! Asset providers and the emblem cache.
//!
//! - [`FilesystemResourceProvider`]: assets below a base directory
//! - [`MemoizedIcon`]: loads, decodes and scales the emblem once per process
//!
//! The in-memory provider from `resolutio-traits` is re-exported for
//! convenience.

mod filesystem;
mod icon;

pub use filesystem::FilesystemResourceProvider;
pub use icon::{DEFAULT_ICON_SIZE, MemoizedIcon, decode_icon, is_supported_image};

pub use resolutio_traits::InMemoryResourceProvider;
