use thiserror::Error;

/// Failures surfaced while decoding a scene file.
///
/// Decoding is atomic: any of these aborts the whole decode and no partial
/// descriptor is returned.
#[derive(Debug, Error)]
pub enum ScnError {
    #[error("invalid SCN file: {reason}")]
    InvalidFormat { reason: String },
    #[error("SCN input truncated at byte {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: u64,
        needed: u64,
        available: u64,
    },
    #[error("unsupported text codepage {0}")]
    UnsupportedCodepage(u16),
    #[error("I/O error while reading SCN data: {0}")]
    Io(#[from] std::io::Error),
}

impl ScnError {
    pub(crate) fn invalid_format(reason: impl Into<String>) -> Self {
        ScnError::InvalidFormat {
            reason: reason.into(),
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, ScnError::Truncated { .. })
    }

    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ScnError::InvalidFormat { .. })
    }
}

pub type Result<T, E = ScnError> = std::result::Result<T, E>;
