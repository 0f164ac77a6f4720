//! Image encryption demo
//!
//! Loads an image, flattens it to raw RGB8 pixel bytes and runs them through
//! AES-256-CFB with a fresh random key and IV. Because CFB keeps the length
//! unchanged, the ciphertext can be saved as an image of the original size.

pub mod aes_cfb;

pub use aes_cfb::AesCfb;

use aes_cfb::AES_BLOCK_SIZE;
use crate::config::{files, BenchConfig};
use crate::error::{ImageError, ImageResult};
use image::{DynamicImage, RgbImage};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use zeroize::Zeroizing;

/// Channels per pixel after RGB conversion
pub const RGB_CHANNELS: usize = 3;

/// Encrypted pixel data with the geometry needed to rebuild the image
#[derive(Clone)]
pub struct EncryptedImage {
    /// AES-CFB ciphertext of the RGB8 pixel bytes
    pub ciphertext: Vec<u8>,
    /// IV used for encryption
    pub iv: [u8; AES_BLOCK_SIZE],
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl EncryptedImage {
    /// Byte length of an RGB8 buffer with this geometry
    pub fn expected_len(&self) -> usize {
        rgb_len(self.width, self.height)
    }

    /// View the ciphertext as RGB pixels
    pub fn to_image(&self) -> ImageResult<RgbImage> {
        rgb_from_bytes(self.width, self.height, self.ciphertext.clone())
    }
}

impl std::fmt::Debug for EncryptedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptedImage")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("iv", &hex::encode(self.iv))
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

fn rgb_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * RGB_CHANNELS
}

fn rgb_from_bytes(width: u32, height: u32, bytes: Vec<u8>) -> ImageResult<RgbImage> {
    let expected = rgb_len(width, height);
    let actual = bytes.len();
    if actual != expected {
        return Err(ImageError::DimensionMismatch { expected, actual });
    }
    RgbImage::from_raw(width, height, bytes)
        .ok_or(ImageError::DimensionMismatch { expected, actual })
}

/// Open and decode an image file
pub fn load_image(path: &Path) -> ImageResult<DynamicImage> {
    if !path.exists() {
        return Err(ImageError::NotFound {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|e| ImageError::DecodeFailed {
        reason: format!("{}: {}", path.display(), e),
    })
}

/// Write an RGB image; the format follows the file extension
pub fn save_image(image: &RgbImage, path: &Path) -> ImageResult<()> {
    image.save(path).map_err(|e| ImageError::SaveFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Encrypt the RGB8 pixel bytes of `image` under `key` with a random IV
pub fn encrypt_image(image: &DynamicImage, key: &[u8]) -> ImageResult<EncryptedImage> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let iv = aes_cfb::key_utils::generate_iv();
    let ciphertext = AesCfb::encrypt(rgb.as_raw(), key, &iv)?;
    debug!(width, height, bytes = ciphertext.len(), "Encrypted image pixels");

    Ok(EncryptedImage {
        ciphertext,
        iv,
        width,
        height,
    })
}

/// Decrypt pixel bytes and rebuild the RGB image
pub fn decrypt_image(encrypted: &EncryptedImage, key: &[u8]) -> ImageResult<RgbImage> {
    let pixels = AesCfb::decrypt(&encrypted.ciphertext, key, &encrypted.iv)?;
    rgb_from_bytes(encrypted.width, encrypted.height, pixels)
}

/// Paths written by the demo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDemoOutput {
    /// Ciphertext rendered as an image
    pub encrypted_path: PathBuf,
    /// Decrypted image
    pub decrypted_path: PathBuf,
}

/// Encrypt and decrypt the configured image and save both results
///
/// Failures are logged; the demo never aborts the caller.
pub fn run_demo(config: &BenchConfig) -> Option<ImageDemoOutput> {
    match try_run_demo(config) {
        Ok(output) => {
            info!(path = %output.encrypted_path.display(), "Encrypted image saved");
            info!(path = %output.decrypted_path.display(), "Decrypted image saved");
            Some(output)
        }
        Err(ImageError::NotFound { path }) => {
            warn!(path = %path.display(), "Image file not found, skipping image demo");
            None
        }
        Err(e) => {
            error!(error = %e, "Image encryption demo failed");
            None
        }
    }
}

fn try_run_demo(config: &BenchConfig) -> ImageResult<ImageDemoOutput> {
    let image = load_image(&config.image_path)?;
    let key = Zeroizing::new(aes_cfb::key_utils::generate_key());

    let encrypted = encrypt_image(&image, key.as_slice())?;
    let decrypted = decrypt_image(&encrypted, key.as_slice())?;

    let encrypted_path = config.output_path(files::ENCRYPTED_IMAGE);
    let decrypted_path = config.output_path(files::DECRYPTED_IMAGE);
    save_image(&encrypted.to_image()?, &encrypted_path)?;
    save_image(&decrypted, &decrypted_path)?;

    Ok(ImageDemoOutput {
        encrypted_path,
        decrypted_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbaImage};
    use tempfile::TempDir;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| Rgb([(x * 7) as u8, (y * 13) as u8, (x ^ y) as u8]))
    }

    #[test]
    fn test_image_round_trip() {
        let original = gradient(31, 17);
        let key = aes_cfb::key_utils::generate_key();

        let encrypted = encrypt_image(&DynamicImage::ImageRgb8(original.clone()), &key).unwrap();
        assert_eq!(encrypted.ciphertext.len(), 31 * 17 * 3);
        assert_eq!(encrypted.expected_len(), encrypted.ciphertext.len());
        assert_ne!(encrypted.ciphertext, original.as_raw().clone());

        let decrypted = decrypt_image(&encrypted, &key).unwrap();
        assert_eq!(decrypted.dimensions(), (31, 17));
        assert_eq!(decrypted, original);
    }

    #[test]
    fn test_rgba_is_converted_to_rgb() {
        let rgba = RgbaImage::from_pixel(4, 4, image::Rgba([10, 20, 30, 128]));
        let image = DynamicImage::ImageRgba8(rgba);
        let key = aes_cfb::key_utils::generate_key();

        let encrypted = encrypt_image(&image, &key).unwrap();
        let decrypted = decrypt_image(&encrypted, &key).unwrap();
        assert_eq!(decrypted, image.to_rgb8());
    }

    #[test]
    fn test_dimension_mismatch() {
        let key = aes_cfb::key_utils::generate_key();
        let mut encrypted = encrypt_image(&DynamicImage::ImageRgb8(gradient(8, 8)), &key).unwrap();
        encrypted.width = 9;

        let result = decrypt_image(&encrypted, &key);
        assert!(matches!(
            result,
            Err(ImageError::DimensionMismatch { expected: 216, actual: 192 })
        ));
    }

    #[test]
    fn test_wrong_key_length() {
        let result = encrypt_image(&DynamicImage::ImageRgb8(gradient(2, 2)), &[0u8; 8]);
        assert!(matches!(result, Err(ImageError::Cipher(_))));
    }

    #[test]
    fn test_run_demo_writes_images() {
        let temp_dir = TempDir::new().unwrap();
        let image_path = temp_dir.path().join("input.png");
        let original = gradient(24, 12);
        original.save(&image_path).unwrap();

        let config = BenchConfig {
            image_path,
            output_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        let output = run_demo(&config).unwrap();

        assert!(output.encrypted_path.exists());
        let decrypted = load_image(&output.decrypted_path).unwrap().to_rgb8();
        assert_eq!(decrypted, original);

        let encrypted = load_image(&output.encrypted_path).unwrap().to_rgb8();
        assert_eq!(encrypted.dimensions(), (24, 12));
    }

    #[test]
    fn test_run_demo_missing_image() {
        let temp_dir = TempDir::new().unwrap();
        let config = BenchConfig {
            image_path: temp_dir.path().join("missing.jpg"),
            output_dir: temp_dir.path().to_path_buf(),
            ..Default::default()
        };
        assert!(run_demo(&config).is_none());
        assert!(matches!(
            load_image(&config.image_path),
            Err(ImageError::NotFound { .. })
        ));
    }
}
