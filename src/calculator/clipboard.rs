//! Copying the displayed operand to the system clipboard.

use crate::error::{Error, Result};
use arboard::Clipboard;

/// Put `operand` on the system clipboard.
///
/// Error markers (`Error`, `NaN`) are copied as-is; the caller decides
/// whether that is useful.
pub fn copy_to_clipboard(operand: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    clipboard
        .set_text(operand.to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;

    tracing::info!(operand, "copied operand to clipboard");
    Ok(())
}
