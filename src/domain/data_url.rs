//! RFC 2397 data URLs for inline Ignition file contents.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const TEXT_MEDIA_TYPE: &str = "text/plain;charset=utf-8";
const BINARY_MEDIA_TYPE: &str = "application/octet-stream";

/// Number of leading bytes inspected when sniffing the media type.
const SNIFF_LEN: usize = 512;

/// Encode bytes as `data:<mediatype>;base64,<payload>`.
pub fn encode(data: &[u8]) -> String {
    format!("data:{};base64,{}", media_type(data), STANDARD.encode(data))
}

/// Decode a base64 data URL produced by [`encode`].
pub fn decode(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    if !header.ends_with(";base64") {
        return None;
    }
    STANDARD.decode(payload).ok()
}

fn media_type(data: &[u8]) -> &'static str {
    let head = &data[..data.len().min(SNIFF_LEN)];
    if head.iter().any(|byte| is_binary_byte(*byte)) { BINARY_MEDIA_TYPE } else { TEXT_MEDIA_TYPE }
}

fn is_binary_byte(byte: u8) -> bool {
    matches!(byte, 0x00..=0x08 | 0x0B | 0x0E..=0x1A | 0x1C..=0x1F)
}
