use base64::{engine::general_purpose::STANDARD, Engine as _};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Photo picked by the user, kept only in memory as a `data:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    data_url: String,
    byte_len: usize,
}

impl UploadedImage {
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let mime = mime.trim();
        let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
        Self {
            data_url: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
            byte_len: bytes.len(),
        }
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_base64_data_url() {
        let image = UploadedImage::from_bytes("image/png", b"hello");
        assert_eq!(image.data_url(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(image.byte_len(), 5);
    }

    #[test]
    fn missing_mime_falls_back_to_octet_stream() {
        let image = UploadedImage::from_bytes("  ", &[0xff, 0xd8]);
        assert_eq!(image.data_url(), "data:application/octet-stream;base64,/9g=");
    }

    #[test]
    fn empty_file_still_produces_a_payload() {
        let image = UploadedImage::from_bytes("image/gif", &[]);
        assert_eq!(image.data_url(), "data:image/gif;base64,");
        assert_eq!(image.byte_len(), 0);
    }
}
