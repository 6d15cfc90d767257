//! Calculator core: arithmetic primitives and the input engine.
//!
//! This module provides functionality to:
//! - Validate and apply arithmetic operations
//! - Drive a running calculation from keypad input
//! - Format results for the display
//! - Copy results to the clipboard

mod clipboard;
mod engine;
mod format;
mod ops;
pub mod primitives;

pub use clipboard::copy_to_clipboard;
pub use engine::Engine;
pub use format::{MAX_FRACTION_DIGITS, format_number};
pub use ops::{BinaryOp, UnaryFn};
pub use primitives::DomainError;
