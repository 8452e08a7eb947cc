//! Texture Upload
//!
//! Takes pixel data that an external collaborator has already decoded
//! and turns it into a GL texture object with a full mipmap chain. The
//! core never decodes compressed images and never keeps decoded pixels
//! around after the upload.

use crate::device::GlApi;
use crate::errors::{RenderError, Result};

/// Decoded RGBA8 pixel data, tightly packed row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Wraps decoded pixels. `pixels` must hold exactly
    /// `width * height * 4` bytes.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::ImageData {
                reason: format!(
                    "{}x{} RGBA image needs {expected} bytes, got {}",
                    width,
                    height,
                    pixels.len()
                ),
            });
        }
        Ok(Self { width, height, pixels })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Uploads a decoded image into a new texture object, generates its
/// mipmaps and unbinds it again; no bound state leaks past this call.
pub fn upload<D: GlApi>(device: &D, image: &Image) -> Result<D::Texture> {
    let Some(texture) = device.create_texture() else {
        return Err(RenderError::TextureUpload);
    };

    device.bind_texture(0, Some(texture));
    device.set_texture_filters();
    device.upload_texture_rgba(image.width() as i32, image.height() as i32, image.pixels());
    device.generate_mipmaps();
    device.bind_texture(0, None);

    log::debug!("uploaded {}x{} texture", image.width(), image.height());
    Ok(texture)
}
