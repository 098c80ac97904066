//! Main Crate Error

use std::any::Any;
use std::error::Error as StdError;

#[derive(thiserror::Error, Debug)]
/// Canonical error carried by the `Err` variant of an outcome.
pub enum CaughtError {
    /// Failure signal that was not an error value, coerced to a message.
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error(transparent)]
    /// Error value passed through unchanged.
    Wrapped(#[from] Box<dyn StdError + Send + Sync>),
}

impl CaughtError {
    /// The human-readable message. Always present, for either variant.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Normalize a captured panic payload into a [`CaughtError`].
    ///
    /// Payloads that already are error values pass through unchanged:
    /// a [`CaughtError`] is returned as-is, a boxed
    /// `dyn Error + Send + Sync` becomes [`CaughtError::Wrapped`] with
    /// its message intact. String payloads (what `panic!` produces)
    /// become [`CaughtError::Unknown`] carrying the panic message.
    /// Every other payload type has no displayable form and maps to
    /// `Unknown("opaque panic payload")`.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<CaughtError>() {
            Ok(err) => return *err,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Box<dyn StdError + Send + Sync>>() {
            Ok(err) => return CaughtError::Wrapped(*err),
            Err(payload) => payload,
        };
        let message = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_owned()
        } else {
            match payload.downcast::<String>() {
                Ok(message) => *message,
                Err(_) => {
                    tracing::debug!("panic payload has no displayable form");
                    "opaque panic payload".to_owned()
                }
            }
        };
        CaughtError::Unknown(message)
    }
}

impl From<String> for CaughtError {
    fn from(message: String) -> Self {
        CaughtError::Unknown(message)
    }
}

impl From<&str> for CaughtError {
    fn from(message: &str) -> Self {
        CaughtError::Unknown(message.to_owned())
    }
}

impl PartialEq for CaughtError {
    fn eq(&self, other: &Self) -> bool {
        self.message() == other.message()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::io;

    use super::{CaughtError, StdError};

    #[test]
    fn string_payloads_are_coerced() {
        let payload: Box<dyn Any + Send> = Box::new("error");
        let err = CaughtError::from_panic(payload);
        assert_eq!(err.message(), "Unknown error: error");

        let payload: Box<dyn Any + Send> = Box::new("error".to_string());
        let err = CaughtError::from_panic(payload);
        assert_eq!(err.message(), "Unknown error: error");
    }

    #[test]
    fn error_payloads_keep_their_message() {
        let inner: Box<dyn StdError + Send + Sync> = Box::new(io::Error::other("error"));
        let payload: Box<dyn Any + Send> = Box::new(inner);
        let err = CaughtError::from_panic(payload);
        assert!(matches!(err, CaughtError::Wrapped(_)));
        assert_eq!(err.message(), "error");
    }

    #[test]
    fn caught_errors_pass_through_unchanged() {
        let payload: Box<dyn Any + Send> =
            Box::new(CaughtError::Unknown("original".to_string()));
        let err = CaughtError::from_panic(payload);
        assert_eq!(err.message(), "Unknown error: original");
    }

    #[test]
    fn opaque_payloads_get_the_fallback_message() {
        let payload: Box<dyn Any + Send> = Box::new(42u64);
        let err = CaughtError::from_panic(payload);
        assert_eq!(err.message(), "Unknown error: opaque panic payload");
    }
}
