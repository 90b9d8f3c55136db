//! Arabic Text - Arabic script processing for PDF rendering
//!
//! PDF text operators place glyphs exactly as given; they apply neither
//! contextual joining nor the bidirectional algorithm. Arabic text must
//! therefore be prepared before insertion:
//!
//! 1. Reshape each letter into its contextual presentation form
//!    (initial/medial/final/isolated, plus lam-alef ligatures)
//! 2. Reorder the result into visual order for right-to-left display
//!
//! # Example
//!
//! ```ignore
//! use arabic_text::prepare_display_text;
//!
//! let display = prepare_display_text("محمد");
//! // Glyphs are now in visual order using presentation forms
//! ```

mod reorder;
mod shaping;

pub use reorder::reorder_for_display;
pub use shaping::reshape;

/// Prepare logical-order Arabic text for PDF rendering
///
/// Reshapes joining letters into presentation forms, then reorders the
/// whole string into visual order. Text without Arabic content passes
/// through unchanged.
pub fn prepare_display_text(text: &str) -> String {
    reorder_for_display(&reshape(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_text_unchanged() {
        assert_eq!(prepare_display_text("Mary"), "Mary");
    }

    #[test]
    fn test_prepare_display_text_reverses_arabic() {
        // محمد shapes to initial/medial/medial/final, then reverses
        let display = prepare_display_text("محمد");
        let chars: Vec<char> = display.chars().collect();
        assert_eq!(
            chars,
            vec!['\u{FEAA}', '\u{FEE4}', '\u{FEA4}', '\u{FEE3}']
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(prepare_display_text(""), "");
    }
}
