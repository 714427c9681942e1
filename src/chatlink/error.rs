//! Codec error type.

use thiserror::Error;

/// Reasons a chat link fails to encode or decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatLinkError {
    /// The text is not wrapped in `[&` and `]`.
    #[error("chat link must be wrapped in \"[&\" and \"]\"")]
    MissingDelimiters,

    /// The payload between the delimiters is not canonical padded base64.
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// The payload decoded to zero bytes.
    #[error("chat link payload is empty")]
    Empty,

    /// The first payload byte does not name a known link kind.
    #[error("unknown chat link header 0x{0:02X}")]
    UnknownHeader(u8),

    /// The payload is shorter than its header requires.
    #[error("chat link payload ended unexpectedly")]
    UnexpectedEnd,

    /// The payload is longer than its header requires.
    #[error("chat link payload has {0} trailing byte(s)")]
    TrailingBytes(usize),

    /// Reserved bits of the item flag byte are set.
    #[error("reserved item flag bits set: 0x{0:02X}")]
    InvalidFlags(u8),

    /// A field does not fit its wire width.
    #[error("{field} {value} exceeds the maximum of {max}")]
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl ChatLinkError {
    /// Short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ChatLinkError::MissingDelimiters => "E_LINK_DELIM",
            ChatLinkError::InvalidBase64(_) => "E_LINK_BASE64",
            ChatLinkError::Empty => "E_LINK_EMPTY",
            ChatLinkError::UnknownHeader(_) => "E_LINK_HEADER",
            ChatLinkError::UnexpectedEnd => "E_LINK_TRUNCATED",
            ChatLinkError::TrailingBytes(_) => "E_LINK_TRAILING",
            ChatLinkError::InvalidFlags(_) => "E_LINK_FLAGS",
            ChatLinkError::FieldOutOfRange { .. } => "E_LINK_RANGE",
        }
    }

    /// Whether the error came from the encoding direction.
    pub fn is_encode_error(&self) -> bool {
        matches!(self, ChatLinkError::FieldOutOfRange { .. })
    }
}
