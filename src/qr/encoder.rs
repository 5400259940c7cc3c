//! QR code encoder

use crate::config::QrOptions;
use crate::error::{Error, Result};
use image::{GrayImage, Luma, imageops};
use qrcode::{EcLevel, QrCode, Version};

const DARK: Luma<u8> = Luma([0]);
const LIGHT: Luma<u8> = Luma([255]);

/// Largest image side, in pixels, the encoder will render
pub const MAX_IMAGE_SIDE: u32 = 10_000;

/// A rendered symbol together with the parameters the encoder settled on
#[derive(Debug, Clone)]
pub struct EncodedQr {
    /// Black-on-white raster including the border
    pub image: GrayImage,
    /// Symbol version picked by auto-fit (1..=40)
    pub version: i16,
    /// Modules per side, excluding the border
    pub modules: u32,
}

/// QR code encoder
#[derive(Debug, Clone, Copy)]
pub struct QrEncoder {
    ecc_level: EcLevel,
    box_size: u32,
    border: u32,
}

impl QrEncoder {
    /// Create an encoder with low redundancy, 10px modules and a 4-module border
    pub fn new() -> Self {
        Self::from_options(&QrOptions::default())
    }

    /// Create an encoder from configured QR options
    pub fn from_options(options: &QrOptions) -> Self {
        Self {
            ecc_level: options.error_correction.ec_level(),
            box_size: options.box_size.max(1),
            border: options.border,
        }
    }

    /// Encode a string, choosing the smallest version that fits it
    pub fn encode(&self, data: &str) -> Result<EncodedQr> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.ecc_level)?;

        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        };
        let modules = code.width() as u32;

        let side = modules
            .checked_add(self.border.saturating_mul(2))
            .and_then(|cells| cells.checked_mul(self.box_size))
            .filter(|side| *side <= MAX_IMAGE_SIDE)
            .ok_or_else(|| {
                Error::Encoding(format!(
                    "{modules} modules with a {}-module border at {}px per module exceeds {MAX_IMAGE_SIDE}px",
                    self.border, self.box_size
                ))
            })?;

        let symbol = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(self.box_size, self.box_size)
            .dark_color(DARK)
            .light_color(LIGHT)
            .build();

        // The renderer's own quiet zone is fixed at four modules, so the
        // border is painted here to honour any configured width.
        let margin = self.border * self.box_size;
        let mut image = GrayImage::from_pixel(side, side, LIGHT);
        imageops::replace(&mut image, &symbol, i64::from(margin), i64::from(margin));

        tracing::debug!(
            version,
            modules,
            pixels = side,
            ecc = ?self.ecc_level,
            "Encoded QR symbol"
        );

        Ok(EncodedQr {
            image,
            version,
            modules,
        })
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ErrorCorrection;

    #[test]
    fn test_image_size_includes_border() {
        let encoded = QrEncoder::new().encode("https://menu.example.com/table/5").unwrap();
        let expected = (encoded.modules + 2 * 4) * 10;
        assert_eq!(encoded.image.width(), expected);
        assert_eq!(encoded.image.height(), expected);
        assert_eq!(encoded.modules, (encoded.version as u32) * 4 + 17);
    }

    #[test]
    fn test_border_is_white_and_symbol_corner_is_black() {
        let encoded = QrEncoder::new().encode("table 12").unwrap();
        let margin = 4 * 10;
        for i in 0..margin {
            assert_eq!(*encoded.image.get_pixel(i, i), LIGHT);
            assert_eq!(*encoded.image.get_pixel(i, encoded.image.height() - 1 - i), LIGHT);
        }
        // Top-left finder pattern starts right after the border.
        assert_eq!(*encoded.image.get_pixel(margin, margin), DARK);
    }

    #[test]
    fn test_auto_fit_grows_with_payload() {
        let encoder = QrEncoder::new();
        let small = encoder.encode("a").unwrap();
        let large = encoder.encode(&"menu".repeat(100)).unwrap();
        assert_eq!(small.version, 1);
        assert!(large.version > small.version);
    }

    #[test]
    fn test_custom_options() {
        let options = QrOptions {
            box_size: 3,
            border: 0,
            error_correction: ErrorCorrection::High,
        };
        let encoded = QrEncoder::from_options(&options).encode("a").unwrap();
        assert_eq!(encoded.image.width(), encoded.modules * 3);
    }

    #[test]
    fn test_oversized_image_is_rejected_before_rendering() {
        let options = QrOptions {
            box_size: 70_000,
            border: 70_000,
            error_correction: ErrorCorrection::Low,
        };
        let err = QrEncoder::from_options(&options).encode("a").unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));

        let huge_border = QrOptions {
            box_size: 1,
            border: u32::MAX,
            error_correction: ErrorCorrection::Low,
        };
        let err = QrEncoder::from_options(&huge_border).encode("a").unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_largest_allowed_side_renders() {
        // Version 1 is 21 modules; 21 + 2 * 4 = 29 modules per side.
        let options = QrOptions {
            box_size: MAX_IMAGE_SIDE / 29,
            ..QrOptions::default()
        };
        let encoded = QrEncoder::from_options(&options).encode("a").unwrap();
        assert!(encoded.image.width() <= MAX_IMAGE_SIDE);
    }

    #[test]
    fn test_oversized_payload_is_encoding_error() {
        let err = QrEncoder::new().encode(&"x".repeat(8000)).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_round_trip() {
        use crate::qr::QrDecoder;

        let original = "https://menu.example.com/table/5";
        let encoded = QrEncoder::new().encode(original).unwrap();
        let decoded = QrDecoder::new().decode_gray(&encoded.image).unwrap();

        assert_eq!(decoded.as_str(), Some(original));
    }
}
