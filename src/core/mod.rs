//! Core conversion logic and abstractions

pub mod config;
pub mod convert;
pub mod currency;
pub mod error;
pub mod log;
pub mod rates;
pub mod session;

// Re-export main types for cleaner imports
pub use convert::{ConversionOutcome, ConversionRequest};
pub use error::ConvertError;
pub use rates::{RateProvider, RateSnapshot};
pub use session::ConversionSession;
