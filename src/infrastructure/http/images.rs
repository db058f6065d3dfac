// SPDX-License-Identifier: MPL-2.0
//! Gallery image download and decoding.
//!
//! Images are decoded to RGBA off the UI thread so the view only ever hands
//! ready pixels to Iced.

use crate::application::port::FetchError;

/// Largest accepted image body.
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

/// Decoded RGBA8 pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Decodes an encoded image (JPEG, PNG, WebP, GIF, BMP) into RGBA8.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the bytes are not a supported image.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, FetchError> {
    let image = image_rs::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    let rgba = image.to_rgba8();
    Ok(DecodedImage {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// Downloads `url` and decodes it on the blocking pool.
///
/// # Errors
///
/// Network failures, non-2xx answers, oversized bodies and undecodable data
/// are all reported as a [`FetchError`].
pub async fn fetch_and_decode(
    client: reqwest::Client,
    url: String,
) -> Result<DecodedImage, FetchError> {
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }
    if response
        .content_length()
        .is_some_and(|len| len > MAX_IMAGE_BYTES as u64)
    {
        return Err(FetchError::Decode(format!("image larger than {MAX_IMAGE_BYTES} bytes")));
    }

    let bytes = response.bytes().await?;
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(FetchError::Decode(format!("image larger than {MAX_IMAGE_BYTES} bytes")));
    }

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let mut bytes = Vec::new();
        let image = image_rs::RgbaImage::from_pixel(2, 3, image_rs::Rgba([10, 20, 30, 255]));
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decode_png_to_rgba() {
        let decoded = decode(&tiny_png()).expect("decodable");
        assert_eq!((decoded.width, decoded.height), (2, 3));
        assert_eq!(decoded.rgba.len(), 2 * 3 * 4);
        assert_eq!(&decoded.rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(matches!(decode(b"not an image"), Err(FetchError::Decode(_))));
    }
}
