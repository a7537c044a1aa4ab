//! # audioforge-av
//!
//! Audio transfer and inspection engine.
//!
//! This crate holds the decision logic of the conversion bridge:
//!
//! - Transferring audio between paths, with destination directory
//!   creation and structured success/failure reporting ([`convert`])
//! - Inspecting a file's size, estimated duration, and format
//!   ([`inspect`])
//! - Pure helpers for size-based duration estimation
//!   ([`estimate_duration_ms`]) and extension-based format
//!   classification ([`classify_format`])
//!
//! The "conversion" is currently a byte-for-byte transfer behind the
//! stable [`convert`] contract; see that function's documentation.
//!
//! All operations are synchronous blocking-I/O functions with no
//! shared state. Callers that must stay responsive dispatch them onto
//! a blocking-friendly worker and await the single completion.
//!
//! ## Example
//!
//! ```no_run
//! let result = audioforge_av::convert("/tmp/voice.m4a", "/tmp/cache/voice.aac", "");
//! if result.success {
//!     println!("estimated {} ms", result.duration_ms);
//! }
//! ```

mod convert;
mod error;
mod estimate;
mod format;
mod inspect;

// Re-exports
pub use convert::{convert, ConversionResult};
pub use error::{Error, Result};
pub use estimate::{estimate_duration_ms, ASSUMED_BYTES_PER_SECOND};
pub use format::classify_format;
pub use inspect::{inspect, MediaInfo};

/// Whether the engine can service requests.
///
/// Always true: the transfer path has no external tool dependency.
pub fn is_available() -> bool {
    true
}

/// Static identifying label for the engine.
pub fn version() -> &'static str {
    concat!("audioforge engine v", env!("CARGO_PKG_VERSION"))
}
