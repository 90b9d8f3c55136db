//! Checkbox marking
//!
//! The sex, marital status, and purpose-of-trip boxes exist in the layout
//! but are deliberately left empty; the form is submitted with those blank.
//! Only the visa type box and the duration box derived from it are marked.

use pdf_core::PdfDocument;
use serde_json::Value;

use crate::config::{
    CHECKBOX_CHAR, CHECKBOX_FONT_SIZE, FIELD_COORDINATES, FORM_PAGE, VISA_DURATION_CHECKBOXES,
    VISA_TYPE_CHECKBOXES,
};
use crate::resolver::resolve_text;
use crate::Result;

/// Duration implied by the visa type
///
/// Multiple-entry visas run six months; every other value, including
/// unrecognized types, gets the three-month box.
pub(crate) fn derived_duration(visa_type: &str) -> &'static str {
    match visa_type {
        "multiple_entry" | "multiple" => "six_months",
        _ => "three_months",
    }
}

/// Checkbox field for a visa type value, if the value is recognized
pub(crate) fn resolve_visa_type_checkbox(visa_type: &str) -> Option<&'static str> {
    VISA_TYPE_CHECKBOXES.get(visa_type).copied()
}

/// Draw an "X" into the named checkbox field
fn mark_checkbox(doc: &mut PdfDocument, coord_key: &str) -> Result<()> {
    if let Some(&(x, y)) = FIELD_COORDINATES.get(coord_key) {
        doc.insert_text_base(CHECKBOX_CHAR, FORM_PAGE, x, y, CHECKBOX_FONT_SIZE)?;
    }
    Ok(())
}

/// Mark the visa type and derived duration checkboxes
pub(crate) fn fill_checkboxes(doc: &mut PdfDocument, data: &Value) -> Result<()> {
    let visa_type = resolve_text(data, "visa_info.type")
        .unwrap_or_default()
        .to_lowercase();

    if let Some(coord_key) = resolve_visa_type_checkbox(&visa_type) {
        mark_checkbox(doc, coord_key)?;
    } else if !visa_type.is_empty() {
        log::warn!("Unrecognized visa type {visa_type:?}, leaving type boxes empty");
    }

    let duration = derived_duration(&visa_type);
    if let Some(coord_key) = VISA_DURATION_CHECKBOXES.get(duration) {
        mark_checkbox(doc, coord_key)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_derived_duration_multiple() {
        assert_eq!(derived_duration("multiple_entry"), "six_months");
        assert_eq!(derived_duration("multiple"), "six_months");
    }

    #[test]
    fn test_derived_duration_default() {
        assert_eq!(derived_duration("single_entry"), "three_months");
        assert_eq!(derived_duration("double"), "three_months");
        assert_eq!(derived_duration(""), "three_months");
        // Unrecognized types still get the three-month box
        assert_eq!(derived_duration("transit"), "three_months");
    }

    #[test]
    fn test_resolve_visa_type_synonyms() {
        assert_eq!(
            resolve_visa_type_checkbox("single"),
            Some("checkbox_single_entry")
        );
        assert_eq!(
            resolve_visa_type_checkbox("double"),
            Some("checkbox_two_entry")
        );
        assert_eq!(
            resolve_visa_type_checkbox("multiple"),
            Some("checkbox_multiple_entry")
        );
        assert_eq!(resolve_visa_type_checkbox("transit"), None);
    }
}
