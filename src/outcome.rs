use crate::error::CaughtError;

/**
 * Two-variant success/failure value returned instead of a propagated panic.
 * Exactly one variant is populated; the enum discriminant is the tag.
 * Once constructed an outcome is never mutated.
 */
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T, E = CaughtError> {
    /// Normal completion, carrying the computed value.
    Ok(T),
    /// Captured failure, carrying the normalized error.
    Err(E),
}

/// Outcome of a caught computation. Both adapters return this.
pub type Caught<T> = Outcome<T, CaughtError>;

impl<T, E> Outcome<T, E> {
    /// Construct the success variant.
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    /// Construct the failure variant.
    pub fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// The carried value, present exactly when `is_ok()`.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// The carried error, present exactly when `is_err()`.
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /**
     * Convert into a `core::result::Result` for use with `?`.
     */
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    pub fn map_err<F, O: FnOnce(E) -> F>(self, f: O) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(_) => default,
        }
    }

    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => f(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}
