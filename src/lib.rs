//! keycalc: a keypad-style calculator with persisted history and themes.
//!
//! The [`calculator`] module holds the engine. [`session::Session`] wires it
//! to [`history`], [`theme`] and [`storage`], and [`ui`] draws it in a
//! terminal.

pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod session;
pub mod storage;
pub mod theme;
pub mod ui;

pub use calculator::{Calculator, Operator, Phase};
pub use config::Config;
pub use error::{Error, Result};
pub use input::{Input, parse_script};
pub use session::{Frame, Session};
pub use theme::Theme;
