//! PDF Core - Low-level PDF overlay operations
//!
//! This crate provides what the form filler needs from a PDF library:
//! - Opening a template document from a path or from bytes
//! - Inserting text at absolute coordinates, either with an embedded
//!   TrueType font or with the built-in Helvetica base font
//! - Drawing opaque filled rectangles (used to redact pre-printed content)
//! - Serializing the modified document to a file or to bytes
//!
//! Coordinates are given with the origin at the top-left of the page
//! (y grows downward) and are converted to PDF bottom-origin coordinates
//! internally.
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, Color, PdfDocument};
//!
//! let mut doc = PdfDocument::open("template.pdf")?;
//! doc.fill_rect(1, 328.0, 382.0, 215.0, 12.0, Color::white())?;
//! doc.insert_text_base("Jean", 1, 67.0, 154.0, 9.0)?;
//! doc.save("output.pdf")?;
//! ```

mod document;
mod font;
mod text;

pub use document::{Color, PdfDocument};
pub use font::FontData;
pub use text::{encode_winansi_literal, generate_rect_operators, generate_text_operators, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to open PDF: {0}")]
    OpenError(String),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Font already exists: {0}")]
    FontAlreadyExists(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("PDF parsing error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}
