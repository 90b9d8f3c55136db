//! Bidirectional reordering into visual order
//!
//! PDF draws glyphs strictly left to right, so right-to-left runs must be
//! reordered before insertion. The Unicode bidirectional algorithm is
//! delegated to the `unicode-bidi` crate; each paragraph is reordered as a
//! single line since form fields hold one line of text.

use unicode_bidi::BidiInfo;

/// Reorder logical-order text into left-to-right visual order
///
/// Mixed-direction text (an Arabic prefix followed by a Latin name) comes
/// out with the Arabic run reversed and the Latin run intact, positioned
/// as a right-to-left reader would see them.
pub fn reorder_for_display(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let bidi = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());
    for para in &bidi.paragraphs {
        out.push_str(&bidi.reorder_line(para, para.range.clone()));
    }
    out
}
