//! Arabic accompaniment line
//!
//! The accompaniment name is translated to Arabic (best effort), shaped
//! and reordered for display, then drawn with the first usable font from
//! a fallback chain of system font files. The built-in Helvetica font
//! ends the chain: it cannot render Arabic glyphs, but a placeholder is
//! preferable to dropping the field.

use pdf_core::{Align, PdfDocument};

use crate::Result;

/// Translation backend seam
///
/// The filler itself carries no translation client; callers supply one,
/// or [`NoTranslation`] to pass names through untranslated.
pub trait Translator {
    /// Translate text into Arabic
    fn translate_to_arabic(&self, text: &str) -> anyhow::Result<String>;
}

/// Translator that returns the input unchanged
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate_to_arabic(&self, text: &str) -> anyhow::Result<String> {
        Ok(text.to_string())
    }
}

/// Translate text, falling back to the original on any failure
pub(crate) fn translate_best_effort(translator: &dyn Translator, text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    match translator.translate_to_arabic(text) {
        Ok(translated) => {
            log::debug!("Translated {text:?} to {translated:?}");
            translated
        }
        Err(e) => {
            log::warn!("Translation failed for {text:?}: {e}");
            text.to_string()
        }
    }
}

/// Arabic-capable system fonts, in order of preference
///
/// macOS fonts first for local development, then the fonts commonly
/// present on Linux deployment images.
const ARABIC_FONT_CANDIDATES: &[(&str, &str)] = &[
    ("geeza-pro", "/System/Library/Fonts/GeezaPro.ttc"),
    ("sf-arabic", "/System/Library/Fonts/SFArabic.ttf"),
    ("dejavu-sans", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
    (
        "liberation-sans",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ),
    (
        "noto-sans-arabic",
        "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
    ),
    ("freesans", "/usr/share/fonts/truetype/freefont/FreeSans.ttf"),
];

/// Draw Arabic text at a position, trying each candidate font in turn
///
/// A candidate that cannot be read, parsed, or used for insertion is
/// skipped without failing the fill; the base font is the terminal
/// fallback and its result is returned.
pub(crate) fn insert_arabic_text(
    doc: &mut PdfDocument,
    page: usize,
    x: f64,
    y: f64,
    text: &str,
    size: f32,
) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let display = arabic_text::prepare_display_text(text);

    for &(name, path) in ARABIC_FONT_CANDIDATES {
        if !doc.has_font(name) {
            let data = match std::fs::read(path) {
                Ok(data) => data,
                Err(_) => continue,
            };
            if let Err(e) = doc.add_font(name, &data) {
                log::debug!("Skipping font {path}: {e}");
                continue;
            }
        }

        match doc
            .set_font(name, size)
            .and_then(|_| doc.insert_text(&display, page, x, y, Align::Left))
        {
            Ok(()) => {
                log::info!("Arabic text inserted using {name}");
                return Ok(());
            }
            Err(e) => {
                log::debug!("Font {name} failed: {e}");
                continue;
            }
        }
    }

    log::warn!("No Arabic-capable font found, text may not render correctly");
    doc.insert_text_base(&display, page, x, y, size)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingTranslator;

    impl Translator for FailingTranslator {
        fn translate_to_arabic(&self, _text: &str) -> anyhow::Result<String> {
            anyhow::bail!("service unavailable")
        }
    }

    struct FixedTranslator(&'static str);

    impl Translator for FixedTranslator {
        fn translate_to_arabic(&self, _text: &str) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_translate_best_effort_success() {
        let translated = translate_best_effort(&FixedTranslator("ماري"), "Mary");
        assert_eq!(translated, "ماري");
    }

    #[test]
    fn test_translate_best_effort_failure_keeps_original() {
        let translated = translate_best_effort(&FailingTranslator, "Mary");
        assert_eq!(translated, "Mary");
    }

    #[test]
    fn test_translate_best_effort_blank_passthrough() {
        assert_eq!(translate_best_effort(&FailingTranslator, "  "), "  ");
    }

    #[test]
    fn test_no_translation_is_identity() {
        let translated = translate_best_effort(&NoTranslation, "Mary");
        assert_eq!(translated, "Mary");
    }
}
