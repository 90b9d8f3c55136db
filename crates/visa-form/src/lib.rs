//! Visa Form - Lebanon visa application form filler
//!
//! Overlays applicant data from a JSON document onto the blank Lebanon
//! visa application form. The template has no interactive form fields, so
//! every value is drawn as a text run at a fixed coordinate; checkboxes
//! are marked with an "X" and the pre-printed trip dates are covered with
//! a white rectangle before the applicant's dates are written.
//!
//! # Example
//!
//! ```ignore
//! use visa_form::{generate_filled_pdf_bytes, NoTranslation};
//!
//! let data = serde_json::from_str(&std::fs::read_to_string("applicant.json")?)?;
//! let (pdf_bytes, full_name) =
//!     generate_filled_pdf_bytes(&data, "Visa_Application_Form.pdf".as_ref(), &NoTranslation)?;
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod arabic;
pub mod config;

mod checkbox;
mod fill;
mod resolver;

pub use arabic::{NoTranslation, Translator};
pub use fill::{
    extract_full_name, fill_from_bytes, fill_visa_form, generate_filled_pdf_bytes,
    load_applicant_data,
};

/// Errors from form filling
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Template PDF not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Applicant data file not found: {0}")]
    DataNotFound(PathBuf),

    #[error("Invalid applicant data: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Pdf(#[from] pdf_core::PdfError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for form filling operations
pub type Result<T> = std::result::Result<T, FormError>;
