pub mod display;
pub mod repl;

pub use display::{render, render_history};
pub use repl::run as run_repl;
