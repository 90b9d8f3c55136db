//! Form filling orchestration

use std::fs;
use std::path::{Path, PathBuf};

use pdf_core::{Color, PdfDocument};
use serde_json::Value;

use crate::arabic::{insert_arabic_text, translate_best_effort, Translator};
use crate::checkbox::fill_checkboxes;
use crate::config::{
    ARABIC_ACCOMPANIED_BY_PREFIX, BOTTOM_LABEL_FONT_SIZE, FIELD_COORDINATES, FONT_SIZE, FORM_PAGE,
    REDACTION_RECT, TEXT_FIELD_MAPPINGS, VISA_TYPE_LABELS,
};
use crate::resolver::resolve_text;
use crate::{FormError, Result};

/// Load applicant data from a JSON file
pub fn load_applicant_data<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Full name from the applicant data, for use in filenames and responses
///
/// Name parts that are blank or literally "N/A" are dropped.
pub fn extract_full_name(data: &Value) -> String {
    ["first_name", "middle_name", "last_name"]
        .iter()
        .filter_map(|part| resolve_text(data, &format!("personal_info.{part}")))
        .filter(|part| !part.eq_ignore_ascii_case("N/A"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cover the pre-printed example dates on the trip duration line
fn redact_existing_dates(doc: &mut PdfDocument) -> Result<()> {
    let (x, y, width, height) = REDACTION_RECT;
    doc.fill_rect(FORM_PAGE, x, y, width, height, Color::white())?;
    Ok(())
}

/// Draw a text value at a named field's coordinates
fn insert_field_text(doc: &mut PdfDocument, coord_key: &str, text: &str, size: f32) -> Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }
    if let Some(&(x, y)) = FIELD_COORDINATES.get(coord_key) {
        doc.insert_text_base(text, FORM_PAGE, x, y, size)?;
    }
    Ok(())
}

/// Fill every mapped text field, plus the derived and composed ones
fn fill_text_fields(
    doc: &mut PdfDocument,
    data: &Value,
    translator: &dyn Translator,
) -> Result<()> {
    for &(json_path, coord_key) in TEXT_FIELD_MAPPINGS {
        if let Some(text) = resolve_text(data, json_path) {
            insert_field_text(doc, coord_key, &text, FONT_SIZE)?;
        }
    }

    // The Dubai-relative dates double as the trip dates and the
    // arrival/departure dates on the form
    if let Some(text) = resolve_text(data, "trip_info.departure_date_from_dubai") {
        insert_field_text(doc, "trip_start_date", &text, FONT_SIZE)?;
        insert_field_text(doc, "arrival_date", &text, FONT_SIZE)?;
    }
    if let Some(text) = resolve_text(data, "trip_info.arrival_date_to_dubai") {
        insert_field_text(doc, "trip_end_date", &text, FONT_SIZE)?;
        insert_field_text(doc, "departure_date", &text, FONT_SIZE)?;
    }

    // Accompaniment line: translated name behind the Arabic prefix
    if let Some(name) = resolve_text(data, "accompany_name") {
        if let Some(&(x, y)) = FIELD_COORDINATES.get("accompanied_by_arabic") {
            let translated = translate_best_effort(translator, &name);
            let line = format!("{ARABIC_ACCOMPANIED_BY_PREFIX}{translated}");
            insert_arabic_text(doc, FORM_PAGE, x, y, &line, BOTTOM_LABEL_FONT_SIZE)?;
        }
    }

    // Pricing label for the selected visa type
    if let Some(visa_type) = resolve_text(data, "visa_info.type") {
        if let Some(&label) = VISA_TYPE_LABELS.get(visa_type.to_lowercase().as_str()) {
            insert_field_text(doc, "visa_type_label", label, BOTTOM_LABEL_FONT_SIZE)?;
        }
    }

    Ok(())
}

/// Apply every fill step to an opened template
fn fill_document(doc: &mut PdfDocument, data: &Value, translator: &dyn Translator) -> Result<()> {
    redact_existing_dates(doc)?;
    fill_checkboxes(doc, data)?;
    fill_text_fields(doc, data, translator)?;
    Ok(())
}

/// Fill the form and return the PDF bytes along with the applicant's
/// full name
pub fn generate_filled_pdf_bytes(
    data: &Value,
    template_path: &Path,
    translator: &dyn Translator,
) -> Result<(Vec<u8>, String)> {
    if !template_path.exists() {
        return Err(FormError::TemplateNotFound(template_path.to_path_buf()));
    }

    let mut doc = PdfDocument::open(template_path)?;
    fill_document(&mut doc, data, translator)?;
    let pdf_bytes = doc.to_bytes()?;

    Ok((pdf_bytes, extract_full_name(data)))
}

/// Fill the form from in-memory template bytes
pub fn fill_from_bytes(
    data: &Value,
    template: &[u8],
    translator: &dyn Translator,
) -> Result<(Vec<u8>, String)> {
    let mut doc = PdfDocument::open_from_bytes(template)?;
    fill_document(&mut doc, data, translator)?;
    let pdf_bytes = doc.to_bytes()?;

    Ok((pdf_bytes, extract_full_name(data)))
}

/// Fill the form from files and write the result
///
/// Creates the output directory if needed and returns the output path.
pub fn fill_visa_form(
    template_path: &Path,
    data_path: &Path,
    output_path: &Path,
    translator: &dyn Translator,
) -> Result<PathBuf> {
    if !template_path.exists() {
        return Err(FormError::TemplateNotFound(template_path.to_path_buf()));
    }
    if !data_path.exists() {
        return Err(FormError::DataNotFound(data_path.to_path_buf()));
    }

    log::info!("Loading applicant data from {}", data_path.display());
    let data = load_applicant_data(data_path)?;

    log::info!("Opening template {}", template_path.display());
    let (pdf_bytes, full_name) = generate_filled_pdf_bytes(&data, template_path, translator)?;

    if let Some(output_dir) = output_path.parent() {
        if !output_dir.as_os_str().is_empty() {
            fs::create_dir_all(output_dir)?;
        }
    }
    fs::write(output_path, pdf_bytes)?;

    log::info!(
        "Filled form for {:?} written to {}",
        full_name,
        output_path.display()
    );
    Ok(output_path.to_path_buf())
}
