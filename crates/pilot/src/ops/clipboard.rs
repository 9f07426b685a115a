//! System clipboard access.

use arboard::Clipboard;
use pilot_common::PilotError;

pub fn copy(text: &str) -> Result<(), PilotError> {
    let mut clipboard = Clipboard::new().map_err(|e| PilotError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| PilotError::Clipboard(e.to_string()))
}

/// Read the clipboard; empty or non-text contents come back as `None`.
pub fn paste() -> Result<Option<String>, PilotError> {
    let mut clipboard = Clipboard::new().map_err(|e| PilotError::Clipboard(e.to_string()))?;
    match clipboard.get_text() {
        Ok(text) if !text.is_empty() => Ok(Some(text)),
        Ok(_) => Ok(None),
        // arboard reports an empty clipboard as an error; that is not a
        // failure of the paste command itself.
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(PilotError::Clipboard(e.to_string())),
    }
}
