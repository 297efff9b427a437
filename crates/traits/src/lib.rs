pub mod icon;
pub mod numbering;
pub mod resource;
pub mod surface;

pub use icon::{IconFuture, IconSource, NoIcon, RasterImage, StaticIcon};
pub use numbering::{DocumentNumberSource, FixedDocumentNumber};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use surface::{Surface, SurfaceError};
