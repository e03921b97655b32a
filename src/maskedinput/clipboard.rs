//! Clipboard access for paste handling.

use bubbletea_rs::{Cmd, Msg};

#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{ClipboardEvent, PasteErrMsg, LEGACY_TEXT, TEXT_PLAIN};

/// A clipboard consulted when a paste event carries no data of its own.
pub trait ClipboardSource: Send {
    /// Returns the clipboard contents in `format`, if readable.
    fn get_data(&mut self, format: &str) -> Option<String>;
}

/// The operating system clipboard.
#[cfg(feature = "clipboard-support")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard-support")]
impl SystemClipboard {
    /// Reads the clipboard as text.
    pub fn read_text() -> Result<String, String> {
        use clipboard::{ClipboardContext, ClipboardProvider};

        let mut ctx: ClipboardContext = ClipboardProvider::new()
            .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
        ctx.get_contents()
            .map_err(|e| format!("Failed to read clipboard: {}", e))
    }
}

#[cfg(feature = "clipboard-support")]
impl ClipboardSource for SystemClipboard {
    fn get_data(&mut self, _format: &str) -> Option<String> {
        match Self::read_text() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        }
    }
}

/// The fallback source used by new adapters.
pub fn default_source() -> Option<Box<dyn ClipboardSource>> {
    #[cfg(feature = "clipboard-support")]
    {
        Some(Box::new(SystemClipboard))
    }
    #[cfg(not(feature = "clipboard-support"))]
    {
        None
    }
}

/// Extracts plain text for a paste.
///
/// The event's own clipboard data wins; otherwise `fallback` is asked for
/// legacy `Text` data.
pub fn paste_text(
    event: &ClipboardEvent,
    fallback: Option<&mut (dyn ClipboardSource + 'static)>,
) -> Option<String> {
    match &event.clipboard_data {
        Some(data) => data.get_data(TEXT_PLAIN).map(str::to_string),
        None => fallback.and_then(|source| source.get_data(LEGACY_TEXT)),
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command resolves to a [`PasteMsg`](super::PasteMsg) on success and a [`PasteErrMsg`]
/// otherwise; both are understood by
/// [`MaskedInput::update`](super::MaskedInput::update).
pub fn paste() -> Cmd {
    Box::pin(async {
        #[cfg(feature = "clipboard-support")]
        {
            match SystemClipboard::read_text() {
                Ok(s) => Some(Box::new(PasteMsg(s)) as Msg),
                Err(e) => Some(Box::new(PasteErrMsg(e)) as Msg),
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Some(Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg)
        }
    })
}
