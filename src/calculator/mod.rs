//! Keypad calculator engine.
//!
//! This module provides:
//! - The input-driven state machine (`Calculator`)
//! - Operator symbol normalization
//! - Operand text parsing and rendering
//! - Copying results to the clipboard

mod clipboard;
mod engine;
mod number;
mod operator;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, ERROR_MARKER, Phase};
pub use number::{format_number, parse_number};
pub use operator::Operator;
