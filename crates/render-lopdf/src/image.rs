//! Image XObjects for placed bitmaps.

use crate::error::RenderError;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use resolutio_traits::{RasterImage, SurfaceError};
use std::io::Write;

pub(crate) fn validate(image: &RasterImage) -> Result<(), SurfaceError> {
    let pixels = image.width as usize * image.height as usize;
    if pixels == 0 {
        return Err(SurfaceError::Image("image has no pixels".into()));
    }
    if image.rgb.len() != pixels * 3 {
        return Err(SurfaceError::Image(format!(
            "expected {} RGB bytes for {}x{}, got {}",
            pixels * 3,
            image.width,
            image.height,
            image.rgb.len()
        )));
    }
    if let Some(alpha) = &image.alpha
        && alpha.len() != pixels
    {
        return Err(SurfaceError::Image(format!(
            "expected {} alpha bytes, got {}",
            pixels,
            alpha.len()
        )));
    }
    Ok(())
}

/// Zlib-compresses a stream body for `FlateDecode`.
pub(crate) fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn image_stream(width: u32, height: u32, color_space: &str, data: &[u8]) -> Result<Stream, RenderError> {
    let dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => width as i64,
        "Height" => height as i64,
        "ColorSpace" => color_space,
        "BitsPerComponent" => 8,
        "Filter" => "FlateDecode",
    };
    let encoded = deflate(data).map_err(|e| RenderError::Image(format!("{color_space} {width}x{height}: {e}")))?;
    Ok(Stream::new(dict, encoded))
}

/// Adds `image` to `document`, with a soft mask when it carries alpha.
pub(crate) fn add_image_xobject(document: &mut Document, image: &RasterImage) -> Result<ObjectId, RenderError> {
    let mut stream = image_stream(image.width, image.height, "DeviceRGB", &image.rgb)?;

    if let Some(alpha) = &image.alpha {
        let mask = image_stream(image.width, image.height, "DeviceGray", alpha)?;
        let mask_id = document.add_object(mask);
        stream.dict.set("SMask", Object::Reference(mask_id));
    }

    Ok(document.add_object(stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sizes() {
        assert!(validate(&RasterImage::solid(2, 3, [1, 2, 3])).is_ok());

        let mut broken = RasterImage::solid(2, 2, [0, 0, 0]);
        broken.rgb.pop();
        assert!(validate(&broken).is_err());

        let mut alpha = RasterImage::solid(2, 2, [0, 0, 0]);
        alpha.alpha = Some(vec![255; 3]);
        assert!(validate(&alpha).is_err());

        assert!(validate(&RasterImage::solid(0, 4, [0, 0, 0])).is_err());
    }

    #[test]
    fn test_soft_mask_is_attached() -> Result<(), RenderError> {
        let mut document = Document::with_version("1.7");
        let mut image = RasterImage::solid(2, 2, [10, 20, 30]);
        image.alpha = Some(vec![0, 128, 255, 255]);

        let id = add_image_xobject(&mut document, &image)?;
        let stream = document.get_object(id)?.as_stream()?;
        assert!(stream.dict.get(b"SMask").is_ok());
        assert_eq!(stream.dict.get(b"Width")?.as_i64()?, 2);
        assert_eq!(stream.decompressed_content()?, vec![10, 20, 30].repeat(4));
        Ok(())
    }
}
