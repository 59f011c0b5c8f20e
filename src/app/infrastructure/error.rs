use thiserror::Error;

use crate::app::domain::order::ScreenPhase;

#[derive(Error, Debug)]
pub enum KioskError {
    #[error("Cart line {index} is out of range (cart has {len} lines)")]
    OutOfRange { index: usize, len: usize },

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot {action} while on the {phase} screen")]
    WrongPhase {
        action: &'static str,
        phase: ScreenPhase,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Sign-language overlay failed to load: {0}")]
    OverlayLoadFailure(String),

    #[error("Narration unavailable: {0}")]
    NarrationUnavailable(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results with KioskError
pub type Result<T> = std::result::Result<T, KioskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "catalog not found");
        let err: KioskError = io_err.into();
        assert!(matches!(err, KioskError::Io(_)));
        assert!(err.to_string().contains("catalog not found"));
    }

    #[test]
    fn test_error_display() {
        let err = KioskError::OutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "Cart line 3 is out of range (cart has 2 lines)");

        let err = KioskError::WrongPhase {
            action: "add an item",
            phase: ScreenPhase::Payment,
        };
        assert_eq!(err.to_string(), "Cannot add an item while on the payment screen");

        let err = KioskError::OverlayLoadFailure("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Sign-language overlay failed to load: HTTP 503");
    }
}
