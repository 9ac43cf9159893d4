use std::io::Cursor;

use image::{ColorType, ExtendedColorType, ImageDecoder, ImageFormat, ImageReader};

use crate::error::{Error, Result};

/// Header-level metadata of a thumbnail image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub color_mode: String,
}

impl ImageInfo {
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Extracts [`ImageInfo`] from encoded image bytes.
pub trait ImageProbe {
    fn probe(&self, bytes: &[u8]) -> Result<ImageInfo>;
}

/// Probe backed by the `image` crate decoders.
///
/// Only the header is parsed; pixel data is never decoded.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderProbe;

impl ImageProbe for HeaderProbe {
    fn probe(&self, bytes: &[u8]) -> Result<ImageInfo> {
        let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
        let format = reader.format().ok_or(Error::UnknownImageFormat)?;
        let decoder = reader.into_decoder()?;
        let (width, height) = decoder.dimensions();

        let mode = match format {
            ImageFormat::Png => png_mode(bytes),
            ImageFormat::Gif => Some("P"),
            _ => None,
        }
        .unwrap_or_else(|| color_mode(decoder.original_color_type(), decoder.color_type()));

        Ok(ImageInfo {
            width,
            height,
            format: format_name(format),
            color_mode: mode.to_owned(),
        })
    }
}

fn format_name(format: ImageFormat) -> String {
    let name = match format {
        ImageFormat::Png => "PNG",
        ImageFormat::Jpeg => "JPEG",
        ImageFormat::Gif => "GIF",
        ImageFormat::WebP => "WEBP",
        ImageFormat::Bmp => "BMP",
        ImageFormat::Tiff => "TIFF",
        ImageFormat::Ico => "ICO",
        ImageFormat::Tga => "TGA",
        other => {
            return other
                .extensions_str()
                .first()
                .map(|ext| ext.to_ascii_uppercase())
                .unwrap_or_else(|| format!("{other:?}").to_ascii_uppercase());
        }
    };
    name.to_owned()
}

/// Mode from the IHDR chunk. The decoder reports palette images in their
/// expanded form, so the stored color type is read directly.
fn png_mode(bytes: &[u8]) -> Option<&'static str> {
    let header = bytes.get(..26)?;
    if &header[12..16] != b"IHDR" {
        return None;
    }

    let (depth, color_type) = (header[24], header[25]);
    let mode = match (color_type, depth) {
        (0, 1) => "1",
        (0, 16) => "I;16",
        (0, _) => "L",
        (2, _) => "RGB",
        (3, _) => "P",
        (4, _) => "LA",
        (6, _) => "RGBA",
        _ => return None,
    };
    Some(mode)
}

/// Mode names follow the conventional short identifiers (`L`, `RGB`, `CMYK`, ...).
fn color_mode(original: ExtendedColorType, decoded: ColorType) -> &'static str {
    match original {
        ExtendedColorType::L1 => "1",
        ExtendedColorType::L2 | ExtendedColorType::L4 | ExtendedColorType::L8 => "L",
        ExtendedColorType::La1
        | ExtendedColorType::La2
        | ExtendedColorType::La4
        | ExtendedColorType::La8
        | ExtendedColorType::La16 => "LA",
        ExtendedColorType::L16 => "I;16",
        ExtendedColorType::Rgb1
        | ExtendedColorType::Rgb2
        | ExtendedColorType::Rgb4
        | ExtendedColorType::Rgb8
        | ExtendedColorType::Rgb16
        | ExtendedColorType::Rgb32F => "RGB",
        ExtendedColorType::Rgba1
        | ExtendedColorType::Rgba2
        | ExtendedColorType::Rgba4
        | ExtendedColorType::Rgba8
        | ExtendedColorType::Rgba16
        | ExtendedColorType::Rgba32F => "RGBA",
        ExtendedColorType::Cmyk8 => "CMYK",
        _ => decoded_mode(decoded),
    }
}

fn decoded_mode(decoded: ColorType) -> &'static str {
    match decoded {
        ColorType::L8 => "L",
        ColorType::L16 => "I;16",
        ColorType::La8 | ColorType::La16 => "LA",
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => "RGB",
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => "RGBA",
        _ => "UNKNOWN",
    }
}

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, ImageBuffer, Luma, RgbImage, RgbaImage};

    use super::*;

    fn encode(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn probe_rgb_png() {
        let bytes = encode(
            DynamicImage::ImageRgb8(RgbImage::new(64, 64)),
            ImageFormat::Png,
        );
        let info = HeaderProbe.probe(&bytes).unwrap();
        assert_eq!(
            info,
            ImageInfo {
                width: 64,
                height: 64,
                format: "PNG".into(),
                color_mode: "RGB".into(),
            }
        );
    }

    #[test]
    fn probe_rgba_png() {
        let bytes = encode(
            DynamicImage::ImageRgba8(RgbaImage::new(12, 7)),
            ImageFormat::Png,
        );
        let info = HeaderProbe.probe(&bytes).unwrap();
        assert_eq!((info.width, info.height), (12, 7));
        assert_eq!(info.color_mode, "RGBA");
    }

    #[test]
    fn probe_gray_png() {
        let bytes = encode(
            DynamicImage::ImageLuma8(GrayImage::new(3, 5)),
            ImageFormat::Png,
        );
        let info = HeaderProbe.probe(&bytes).unwrap();
        assert_eq!(info.color_mode, "L");
    }

    #[test]
    fn probe_jpeg() {
        let bytes = encode(
            DynamicImage::ImageRgb8(RgbImage::new(40, 30)),
            ImageFormat::Jpeg,
        );
        let info = HeaderProbe.probe(&bytes).unwrap();
        assert_eq!(info.format, "JPEG");
        assert_eq!((info.width, info.height), (40, 30));
    }

    #[test]
    fn probe_gif() {
        let bytes = encode(
            DynamicImage::ImageRgba8(RgbaImage::new(16, 9)),
            ImageFormat::Gif,
        );
        let info = HeaderProbe.probe(&bytes).unwrap();
        assert_eq!(info.format, "GIF");
        assert_eq!((info.width, info.height), (16, 9));
        assert_eq!(info.color_mode, "P");
    }

    #[test]
    fn probe_indexed_png() {
        let info = HeaderProbe
            .probe(include_bytes!("../tests/fixtures/indexed.png"))
            .unwrap();
        assert_eq!((info.width, info.height), (2, 3));
        assert_eq!(info.color_mode, "P");
    }

    #[test]
    fn probe_bilevel_png() {
        let info = HeaderProbe
            .probe(include_bytes!("../tests/fixtures/bilevel.png"))
            .unwrap();
        assert_eq!((info.width, info.height), (8, 2));
        assert_eq!(info.color_mode, "1");
    }

    #[test]
    fn probe_gray16_png() {
        let image: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(4, 4);
        let bytes = encode(DynamicImage::ImageLuma16(image), ImageFormat::Png);
        assert_eq!(HeaderProbe.probe(&bytes).unwrap().color_mode, "I;16");
    }

    #[test]
    fn png_mode_reads_ihdr() {
        let indexed = include_bytes!("../tests/fixtures/indexed.png");
        assert_eq!(png_mode(indexed), Some("P"));
        assert_eq!(png_mode(&indexed[..20]), None);
        assert_eq!(png_mode(b"not a png at all, not even close"), None);
    }

    #[test]
    fn unknown_bytes_fail() {
        let err = HeaderProbe.probe(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::UnknownImageFormat));
    }

    #[test]
    fn truncated_header_fails() {
        let bytes = encode(
            DynamicImage::ImageRgb8(RgbImage::new(8, 8)),
            ImageFormat::Png,
        );
        assert!(HeaderProbe.probe(&bytes[..12]).is_err());
    }

    #[test]
    fn empty_input_fails() {
        assert!(HeaderProbe.probe(&[]).is_err());
    }

    #[test]
    fn pixel_count_does_not_overflow() {
        let info = ImageInfo {
            width: u32::MAX,
            height: u32::MAX,
            format: "PNG".into(),
            color_mode: "RGB".into(),
        };
        assert_eq!(info.pixel_count(), u64::from(u32::MAX) * u64::from(u32::MAX));
    }
}
