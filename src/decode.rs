use anyhow::{Context, Result};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

// Subscription blobs are published both with and without padding.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);

const STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Decode a base64 subscription payload into UTF-8 text.
///
/// Whitespace anywhere in the blob is ignored. The standard alphabet is tried
/// first, then the URL-safe one.
pub fn decode_base64(payload: &str) -> Result<String> {
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        anyhow::bail!("empty payload");
    }

    let bytes = match STANDARD.decode(&compact) {
        Ok(bytes) => bytes,
        Err(e) => URL_SAFE
            .decode(&compact)
            .with_context(|| format!("invalid base64: {}", e))?,
    };

    String::from_utf8(bytes).context("decoded payload is not valid utf-8")
}

/// Split a payload into config lines, dropping blank ones.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
