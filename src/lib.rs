//! Capture panics from synchronous and asynchronous computations as a typed
//! [`Outcome`] instead of letting them propagate.
//!
//! ```
//! use caught::try_sync;
//!
//! let outcome = try_sync(|| "success");
//! assert_eq!(outcome.value(), Some(&"success"));
//!
//! let failed = try_sync(|| -> u32 { panic!("error") });
//! assert_eq!(failed.error().unwrap().message(), "Unknown error: error");
//! ```

pub mod error;
pub mod outcome;
mod catch;

pub use crate::catch::{try_async, try_sync};
pub use crate::error::CaughtError;
pub use crate::outcome::{Caught, Outcome};
