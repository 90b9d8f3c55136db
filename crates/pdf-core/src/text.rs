//! Content stream operator generation

use crate::document::Color;
use crate::Align;

/// Context for rendering a single text run
pub struct TextRenderContext {
    /// PDF font resource name (e.g., "F1")
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text width in points (for alignment)
    pub text_width: f64,
    /// Text color (RGB)
    pub color: Color,
}

/// Generate PDF operators for a text run
///
/// Emits the standard BT/Tf/Td/Tj/ET sequence. `encoded_text` must already
/// carry its string delimiters: a hex string like `<0041>` for Identity-H
/// encoded fonts, or an escaped literal like `(Hello)` for base fonts.
///
/// # Arguments
/// * `encoded_text` - Encoded PDF string including delimiters
/// * `x` - X coordinate in points (PDF coordinates, from left)
/// * `y` - Y coordinate in points (PDF coordinates, from bottom)
/// * `align` - Text alignment relative to `x`
/// * `ctx` - Text rendering context
pub fn generate_text_operators(
    encoded_text: &str,
    x: f64,
    y: f64,
    align: Align,
    ctx: &TextRenderContext,
) -> Vec<u8> {
    let x_offset = match align {
        Align::Left => 0.0,
        Align::Center => -ctx.text_width / 2.0,
        Align::Right => -ctx.text_width,
    };

    let final_x = x + x_offset;

    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!(
        "{} {} {} rg\n",
        ctx.color.r, ctx.color.g, ctx.color.b
    ));
    ops.push_str(&format!("/{} {} Tf\n", ctx.font_name, ctx.font_size));
    ops.push_str(&format!("{final_x} {y} Td\n"));
    ops.push_str(&format!("{encoded_text} Tj\n"));
    ops.push_str("ET\n");

    ops.into_bytes()
}

/// Generate PDF operators for a filled rectangle
///
/// The graphics state is saved and restored around the fill so the color
/// does not leak into later operators.
///
/// # Arguments
/// * `x`, `y` - Bottom-left corner in PDF coordinates
/// * `width`, `height` - Rectangle size in points
/// * `color` - Fill color
pub fn generate_rect_operators(x: f64, y: f64, width: f64, height: f64, color: Color) -> Vec<u8> {
    let mut ops = String::new();
    ops.push_str("q\n");
    ops.push_str(&format!("{} {} {} rg\n", color.r, color.g, color.b));
    ops.push_str(&format!("{x} {y} {width} {height} re\n"));
    ops.push_str("f\n");
    ops.push_str("Q\n");
    ops.into_bytes()
}

/// Encode text as a PDF literal string in WinAnsi encoding
///
/// Backslash, parentheses, and non-printable bytes are escaped. Characters
/// outside Latin-1 have no WinAnsi representation and are replaced with `?`
/// rather than producing an invalid string - this is the "renders wrong but
/// never fails" terminal step of the font fallback chain.
pub fn encode_winansi_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('(');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            ' '..='~' => out.push(c),
            '\u{a0}'..='\u{ff}' => out.push_str(&format!("\\{:03o}", c as u32)),
            _ => out.push('?'),
        }
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_generate_text_operators_left() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            text_width: 100.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("(Hello)", 100.0, 700.0, Align::Left, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("BT"));
        assert!(ops_str.contains("/F1 12 Tf"));
        assert!(ops_str.contains("100 700 Td"));
        assert!(ops_str.contains("(Hello) Tj"));
        assert!(ops_str.contains("ET"));
    }

    #[test]
    fn test_generate_text_operators_center() {
        let ctx = TextRenderContext {
            font_name: "F2".to_string(),
            font_size: 14.0,
            text_width: 100.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("<0054>", 200.0, 600.0, Align::Center, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("150 600 Td")); // 200 - 50 (half of 100)
        assert!(ops_str.contains("<0054> Tj"));
    }

    #[test]
    fn test_generate_text_operators_right() {
        let ctx = TextRenderContext {
            font_name: "F3".to_string(),
            font_size: 16.0,
            text_width: 80.0,
            color: Color::black(),
        };

        let ops = generate_text_operators("<0052>", 300.0, 500.0, Align::Right, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("220 500 Td")); // 300 - 80
    }

    #[test]
    fn test_generate_text_operators_with_color() {
        let ctx = TextRenderContext {
            font_name: "F1".to_string(),
            font_size: 12.0,
            text_width: 0.0,
            color: Color::rgb(1.0, 0.0, 0.0),
        };

        let ops = generate_text_operators("(A)", 100.0, 700.0, Align::Left, &ctx);
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("1 0 0 rg"));
    }

    #[test]
    fn test_generate_rect_operators() {
        let ops = generate_rect_operators(328.0, 398.0, 215.0, 12.0, Color::white());
        let ops_str = String::from_utf8(ops).unwrap();

        assert!(ops_str.contains("q\n"));
        assert!(ops_str.contains("1 1 1 rg"));
        assert!(ops_str.contains("328 398 215 12 re"));
        assert!(ops_str.contains("f\n"));
        assert!(ops_str.contains("Q\n"));
    }

    #[test]
    fn test_encode_winansi_plain() {
        assert_eq!(encode_winansi_literal("Jean Dupont"), "(Jean Dupont)");
    }

    #[test]
    fn test_encode_winansi_escapes() {
        assert_eq!(encode_winansi_literal("a(b)c\\d"), "(a\\(b\\)c\\\\d)");
    }

    #[test]
    fn test_encode_winansi_latin1() {
        // é = U+00E9 = octal 351
        assert_eq!(encode_winansi_literal("Café"), "(Caf\\351)");
    }

    #[test]
    fn test_encode_winansi_unmappable() {
        // Arabic has no WinAnsi representation
        assert_eq!(encode_winansi_literal("اسم"), "(???)");
    }

    #[test]
    fn test_encode_winansi_empty() {
        assert_eq!(encode_winansi_literal(""), "()");
    }
}
