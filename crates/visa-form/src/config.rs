//! Field layout and mappings for the Lebanon visa application form
//!
//! The form is a fixed-layout single-page US Letter PDF (612 x 792 points).
//! All coordinates are `(x, y)` in points with `y` measured from the top of
//! the page, taken from text-extraction analysis of the blank template.

use phf::phf_map;

/// The form occupies page 1 of the template
pub const FORM_PAGE: usize = 1;

/// Font size for regular text fields
pub const FONT_SIZE: f32 = 9.0;

/// Mark drawn into a checkbox
pub const CHECKBOX_CHAR: &str = "X";

/// Font size for checkbox marks
pub const CHECKBOX_FONT_SIZE: f32 = 10.0;

/// Font size for the bottom labels (visa pricing, accompaniment line)
pub const BOTTOM_LABEL_FONT_SIZE: f32 = 8.0;

/// Arabic prefix for the accompaniment line, already in presentation forms
pub const ARABIC_ACCOMPANIED_BY_PREFIX: &str = "ﺑﻤﺮاﻓﻘﺔ  ";

/// Area covered by the pre-printed dates at point 19 (x, y, width, height)
///
/// The template ships with example dates on the "Duration of Immediate
/// Trip" line; only the date line is covered, not the question above it.
pub const REDACTION_RECT: (f64, f64, f64, f64) = (328.0, 382.0, 215.0, 12.0);

/// Field coordinates keyed by field name
pub static FIELD_COORDINATES: phf::Map<&'static str, (f64, f64)> = phf_map! {
    // 01- Full Name (as per passport)
    "first_name" => (67.0, 154.0),
    "middle_name" => (198.0, 154.0),
    "last_name" => (323.0, 154.0),

    // 02-04: birth info and contact
    "place_of_birth" => (72.0, 178.0),
    "dob" => (198.0, 188.0),
    "mobile" => (328.0, 178.0),

    // 05-07: nationality and email
    "present_nationality" => (72.0, 210.0),
    "nationality_of_origin" => (198.0, 210.0),
    "email" => (328.0, 210.0),

    // 08-10: passport info
    "passport_number" => (72.0, 238.0),
    "issuing_country" => (198.0, 238.0),
    "passport_expiry" => (328.0, 248.0),

    // 11-13: UAE address, sex, home phone
    "uae_address" => (72.0, 270.0),
    "checkbox_female" => (380.0, 259.0),
    "checkbox_male" => (415.0, 259.0),
    "home_phone" => (459.0, 270.0),

    // 14-15: visa refusal and job title
    "visa_refusal_details" => (72.0, 307.0),
    "job_title" => (328.0, 298.0),

    // 16: UAE residency
    "uae_residency_expiry" => (328.0, 323.0),

    // 17: marital status checkboxes
    "checkbox_single" => (364.0, 347.0),
    "checkbox_married" => (357.0, 366.0),
    "checkbox_divorced" => (435.0, 348.0),
    "checkbox_widowed" => (433.0, 366.0),

    // 18-19: previous visits and trip duration
    "lebanon_previous_visits" => (72.0, 402.0),
    "trip_start_date" => (328.0, 393.0),
    "trip_end_date" => (420.0, 393.0),

    // 20: criminal record
    "criminal_record_details" => (72.0, 460.0),

    // 21: purpose of trip checkboxes
    "checkbox_business" => (339.0, 415.0),
    "checkbox_education" => (339.0, 424.0),
    "checkbox_tourism" => (337.0, 433.0),
    "checkbox_family_visit" => (337.0, 443.0),
    "checkbox_official" => (337.0, 452.0),
    "checkbox_other_purpose" => (337.0, 460.0),
    "other_purpose_text" => (430.0, 460.0),

    // 22-23: contact person and accommodation
    "contact_person" => (72.0, 482.0),
    "lebanon_address" => (72.0, 507.0),

    // 24-25: travel dates
    "arrival_date" => (72.0, 544.0),
    "departure_date" => (328.0, 544.0),

    // 26: visa type checkboxes
    "checkbox_single_entry" => (68.0, 577.0),
    "checkbox_two_entry" => (68.0, 599.0),
    "checkbox_multiple_entry" => (68.0, 620.0),

    // Duration checkboxes, placed at the center of the printed boxes
    "checkbox_15_days" => (272.0, 575.0),
    "checkbox_one_month" => (354.0, 575.0),
    "checkbox_three_months" => (271.0, 584.0),
    "checkbox_six_months" => (353.0, 583.0),

    // Signature section
    "signature_date" => (295.0, 644.0),

    // Bottom labels
    "visa_type_label" => (72.0, 750.0),
    "accompanied_by_arabic" => (450.0, 750.0),
};

/// Sex value -> checkbox field
pub static SEX_CHECKBOXES: phf::Map<&'static str, &'static str> = phf_map! {
    "female" => "checkbox_female",
    "male" => "checkbox_male",
    "f" => "checkbox_female",
    "m" => "checkbox_male",
};

/// Marital status value -> checkbox field
pub static MARITAL_STATUS_CHECKBOXES: phf::Map<&'static str, &'static str> = phf_map! {
    "single" => "checkbox_single",
    "married" => "checkbox_married",
    "divorced" => "checkbox_divorced",
    "widowed" => "checkbox_widowed",
};

/// Purpose of trip value -> checkbox field
pub static PURPOSE_CHECKBOXES: phf::Map<&'static str, &'static str> = phf_map! {
    "business" => "checkbox_business",
    "education" => "checkbox_education",
    "tourism" => "checkbox_tourism",
    "family_visit" => "checkbox_family_visit",
    "family visit" => "checkbox_family_visit",
    "official" => "checkbox_official",
    "other" => "checkbox_other_purpose",
};

/// Visa type value -> checkbox field
pub static VISA_TYPE_CHECKBOXES: phf::Map<&'static str, &'static str> = phf_map! {
    "single_entry" => "checkbox_single_entry",
    "single" => "checkbox_single_entry",
    "two_entry" => "checkbox_two_entry",
    "double" => "checkbox_two_entry",
    "multiple_entry" => "checkbox_multiple_entry",
    "multiple" => "checkbox_multiple_entry",
};

/// Visa duration value -> checkbox field
pub static VISA_DURATION_CHECKBOXES: phf::Map<&'static str, &'static str> = phf_map! {
    "15_days" => "checkbox_15_days",
    "15 days" => "checkbox_15_days",
    "one_month" => "checkbox_one_month",
    "1_month" => "checkbox_one_month",
    "1 month" => "checkbox_one_month",
    "three_months" => "checkbox_three_months",
    "3_months" => "checkbox_three_months",
    "3 months" => "checkbox_three_months",
    "six_months" => "checkbox_six_months",
    "6_months" => "checkbox_six_months",
    "6 months" => "checkbox_six_months",
};

/// Visa type value -> pricing label printed at the bottom left
pub static VISA_TYPE_LABELS: phf::Map<&'static str, &'static str> = phf_map! {
    "single_entry" => "Single Entry - USD 50",
    "single" => "Single Entry - USD 50",
    "two_entry" => "Two Entry - USD 75",
    "double" => "Two Entry - USD 75",
    "multiple_entry" => "Multiple Entry - USD 100",
    "multiple" => "Multiple Entry - USD 100",
};

/// Text field mappings: dotted JSON path -> coordinate key
///
/// Email, home phone, and job title have coordinates but no mapping; the
/// form is submitted with those left blank.
pub const TEXT_FIELD_MAPPINGS: &[(&str, &str)] = &[
    ("personal_info.first_name", "first_name"),
    ("personal_info.middle_name", "middle_name"),
    ("personal_info.last_name", "last_name"),
    ("personal_info.place_of_birth", "place_of_birth"),
    ("personal_info.date_of_birth", "dob"),
    ("personal_info.mobile", "mobile"),
    ("personal_info.present_nationality", "present_nationality"),
    ("personal_info.nationality_of_origin", "nationality_of_origin"),
    ("passport_info.passport_number", "passport_number"),
    ("passport_info.issuing_country", "issuing_country"),
    ("passport_info.expiry_date", "passport_expiry"),
    ("residence_info.uae_address", "uae_address"),
    ("residence_info.uae_residency_expiry", "uae_residency_expiry"),
    ("travel_history.visa_refusal_details", "visa_refusal_details"),
    ("travel_history.lebanon_previous_visits", "lebanon_previous_visits"),
    ("travel_history.criminal_record_details", "criminal_record_details"),
    ("trip_info.start_date", "trip_start_date"),
    ("trip_info.end_date", "trip_end_date"),
    ("trip_info.other_purpose", "other_purpose_text"),
    ("trip_info.arrival_date", "arrival_date"),
    ("trip_info.departure_date", "departure_date"),
    ("accommodation_info.contact_person", "contact_person"),
    ("accommodation_info.lebanon_address", "lebanon_address"),
    ("signature_date", "signature_date"),
    ("accompanied_by_arabic", "accompanied_by_arabic"),
];
