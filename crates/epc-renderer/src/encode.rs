//! Encoding rendered diagrams to output formats.
//!
//! - **PNG, BMP, TIFF**: lossless RGBA, quality is ignored.
//! - **JPEG**: alpha is composited onto white (JPEG has no transparency).
//! - **GIF**: palette quantization, quality trades speed for accuracy.
//! - **WebP**: lossy at the requested quality, lossless at 100.
//! - **data-url**: a PNG wrapped as `data:image/png;base64,...`.

use base64::Engine;
use epc_common::{EncodeOptions, EpcError, EpcResult, OutputFormat};
use image::codecs::bmp::BmpEncoder;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tiff::TiffEncoder;
use image::{ColorType, DynamicImage, ImageEncoder, Rgba, RgbaImage};
use std::io::Cursor;

/// Slowest (best) and fastest NeuQuant sampling speeds accepted by the GIF encoder.
const GIF_SPEED_RANGE: (u8, u8) = (1, 30);

/// Encode an image with the given options.
pub fn encode(image: &RgbaImage, options: &EncodeOptions) -> EpcResult<Vec<u8>> {
    let quality = options.quality.min(100);
    match options.format {
        OutputFormat::Png => encode_png(image),
        OutputFormat::Jpeg => encode_jpeg(image, quality),
        OutputFormat::Gif => encode_gif(image, quality),
        OutputFormat::Bmp => encode_bmp(image),
        OutputFormat::Tiff => encode_tiff(image),
        OutputFormat::WebP => Ok(encode_webp(image, quality)),
        OutputFormat::DataUrl => encode_data_url(image),
    }
}

fn encode_png(image: &RgbaImage) -> EpcResult<Vec<u8>> {
    let mut data = Vec::new();
    PngEncoder::new(&mut data)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(|e| EpcError::Encode(format!("Failed to encode PNG: {}", e)))?;
    Ok(data)
}

fn encode_jpeg(image: &RgbaImage, quality: u8) -> EpcResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(flatten_onto_white(image)).to_rgb8();

    let mut data = Vec::new();
    // JPEG quality 0 is rejected by the encoder
    let mut encoder = JpegEncoder::new_with_quality(&mut data, quality.max(1));
    encoder
        .encode(&rgb, rgb.width(), rgb.height(), ColorType::Rgb8)
        .map_err(|e| EpcError::Encode(format!("Failed to encode JPEG: {}", e)))?;
    Ok(data)
}

fn encode_gif(image: &RgbaImage, quality: u8) -> EpcResult<Vec<u8>> {
    let mut data = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut data, gif_speed(quality) as i32);
        encoder
            .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
            .map_err(|e| EpcError::Encode(format!("Failed to encode GIF: {}", e)))?;
    }
    Ok(data)
}

fn encode_bmp(image: &RgbaImage) -> EpcResult<Vec<u8>> {
    let mut data = Vec::new();
    BmpEncoder::new(&mut data)
        .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(|e| EpcError::Encode(format!("Failed to encode BMP: {}", e)))?;
    Ok(data)
}

fn encode_tiff(image: &RgbaImage) -> EpcResult<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    TiffEncoder::new(&mut cursor)
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(|e| EpcError::Encode(format!("Failed to encode TIFF: {}", e)))?;
    Ok(cursor.into_inner())
}

fn encode_webp(image: &RgbaImage, quality: u8) -> Vec<u8> {
    let encoder = webp::Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    let webp_data = if quality >= 100 {
        encoder.encode_lossless()
    } else {
        encoder.encode(quality as f32)
    };
    webp_data.to_vec()
}

fn encode_data_url(image: &RgbaImage) -> EpcResult<Vec<u8>> {
    let png = encode_png(image)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(png);
    Ok(format!("data:{};base64,{}", OutputFormat::Png.mime_type(), encoded).into_bytes())
}

/// Map 0-100 quality onto the GIF encoder's speed: higher quality, slower.
fn gif_speed(quality: u8) -> u8 {
    let (slowest, fastest) = GIF_SPEED_RANGE;
    let span = (fastest - slowest) as u32;
    fastest - (quality.min(100) as u32 * span / 100) as u8
}

/// Composite the image onto an opaque white background.
fn flatten_onto_white(image: &RgbaImage) -> RgbaImage {
    let mut flat = image.clone();
    for pixel in flat.pixels_mut() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let blend = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
        *pixel = Rgba([blend(r), blend(g), blend(b), 255]);
    }
    flat
}
