//! `--decode`: print the chat codes found in a piece of text as JSON.

use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::chatlink::{decode_chat_link, find_chat_links, to_bytes, ChatLink};
use crate::error::LinkResult;

/// One decoded (or rejected) chat code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedLink {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<ChatLink>,
    /// Payload bytes after base64 decoding, hex encoded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

impl DecodedLink {
    pub fn is_ok(&self) -> bool {
        self.link.is_some()
    }
}

/// Decode every chat code in `input`.
///
/// Text without any `[&...]` token is treated as a single code, so invalid
/// input still produces an entry explaining why.
pub fn decode_input(input: &str) -> Vec<DecodedLink> {
    let mut codes = find_chat_links(input);
    if codes.is_empty() {
        codes.push(input.trim());
    }
    codes.into_iter().map(decode_one).collect()
}

fn decode_one(code: &str) -> DecodedLink {
    match decode_chat_link(code) {
        Ok(link) => DecodedLink {
            code: code.to_string(),
            payload_hex: to_bytes(&link).ok().map(hex::encode),
            link: Some(link),
            error: None,
            error_code: None,
        },
        Err(e) => DecodedLink {
            code: code.to_string(),
            link: None,
            payload_hex: None,
            error: Some(e.to_string()),
            error_code: Some(e.error_code()),
        },
    }
}

/// Pretty JSON array of decoded entries.
pub fn render_decode_report(decoded: &[DecodedLink]) -> LinkResult<String> {
    Ok(serde_json::to_string_pretty(decoded)?)
}

/// Handle the --decode command. Fails if any code did not decode.
pub fn handle_decode_command(input: &str) -> color_eyre::Result<()> {
    let decoded = decode_input(input);
    println!("{}", render_decode_report(&decoded)?);

    let failed = decoded.iter().filter(|d| !d.is_ok()).count();
    if failed > 0 {
        return Err(eyre!(
            "{} of {} chat codes failed to decode",
            failed,
            decoded.len()
        ));
    }
    Ok(())
}
