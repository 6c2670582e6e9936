//! Sharing a suggestion
//!
//! The TUI has no `navigator.share`; sharing means building a shareable
//! sentence and putting it on the clipboard so the user can paste it into
//! whatever chat they live in.

pub mod clipboard;
pub mod text;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use text::share_text;

use crate::config::ClipboardBackend;
use crate::suggestion::Suggestion;

/// Build the share text for `suggestion` and copy it to the clipboard
pub fn share_suggestion(
    suggestion: &Suggestion,
    backend: ClipboardBackend,
) -> Result<(), ClipboardError> {
    copy_to_clipboard(&share_text(suggestion), backend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SuggestionDetails;

    #[test]
    fn test_share_suggestion_osc52_succeeds() {
        let suggestion = Suggestion {
            id: "eatout-0-1".to_string(),
            details: SuggestionDetails::EatOut {
                name: "Momos".to_string(),
                maps_query: "momos near me".to_string(),
                commentary: "Steamy little pockets of joy.".to_string(),
            },
        };

        // OSC 52 writes an escape sequence to stdout, which always works.
        let result = share_suggestion(&suggestion, ClipboardBackend::Osc52);
        assert!(result.is_ok());
    }
}
