//! QR code encoding and decoding
//!
//! The encoder turns a text payload into a padded black-on-white raster;
//! the decoder reads a symbol back out of an image so written files can be
//! checked against what was encoded.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::{EncodedQr, QrEncoder};

/// A decoded QR code payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrPayload {
    /// The raw decoded data
    pub data: Vec<u8>,
    /// String representation if valid UTF-8
    pub text: Option<String>,
}

impl QrPayload {
    /// Create a new QR payload from raw bytes
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let text = String::from_utf8(data.clone()).ok();
        Self { data, text }
    }

    /// Get the payload as a string, if valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_payload_from_utf8_bytes() {
        let payload = QrPayload::from_bytes(b"https://menu.example.com".to_vec());
        assert_eq!(payload.as_str(), Some("https://menu.example.com"));
    }

    #[test]
    fn test_qr_payload_from_binary_bytes() {
        let payload = QrPayload::from_bytes(vec![0xFF, 0xFE]);
        assert!(payload.as_str().is_none());
        assert_eq!(payload.as_bytes(), &[0xFF, 0xFE]);
    }
}
