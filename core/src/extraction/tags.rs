use crate::error::{Result, SuvError};
use dicom_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dicom_core::Tag;
use dicom_dictionary_std::StandardDataDictionary;
use dicom_object::InMemDicomObject;

// Timing Tags
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);

// Patient Tags
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);

// Image Geometry Tags
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);

// PET Tags
pub const CORRECTED_IMAGE: Tag = Tag(0x0028, 0x0051);
pub const UNITS: Tag = Tag(0x0054, 0x1001);
pub const DECAY_CORRECTION: Tag = Tag(0x0054, 0x1102);

// Radiopharmaceutical Information Sequence and its item attributes
pub const RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE: Tag = Tag(0x0054, 0x0016);
pub const RADIOPHARMACEUTICAL_START_TIME: Tag = Tag(0x0018, 0x1072);
pub const RADIONUCLIDE_TOTAL_DOSE: Tag = Tag(0x0018, 0x1074);
pub const RADIONUCLIDE_HALF_LIFE: Tag = Tag(0x0018, 0x1075);
pub const RADIOPHARMACEUTICAL_START_DATE_TIME: Tag = Tag(0x0018, 0x1078);

/// Human readable tag label, e.g. `SeriesTime (0008,0031)`
pub fn tag_name(tag: Tag) -> String {
    match StandardDataDictionary.by_tag(tag) {
        Some(entry) => format!("{} {}", entry.alias(), tag),
        None => tag.to_string(),
    }
}

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get multi-string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to Vec<String>
pub fn get_multi_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<String>> {
    dcm.element(tag).ok().and_then(|elem| {
        if let Ok(strs) = elem.to_multi_str() {
            Some(strs.iter().map(|s| s.trim().to_string()).collect())
        } else {
            // Fallback: split a single backslash-delimited string
            elem.to_str()
                .ok()
                .map(|s| s.split('\\').map(|part| part.trim().to_string()).collect())
        }
    })
}

/// Returns the first item of a sequence, if present
pub fn first_sequence_item(dcm: &InMemDicomObject, tag: Tag) -> Option<&InMemDicomObject> {
    dcm.element(tag)
        .ok()
        .and_then(|seq| seq.items())
        .and_then(|items| items.first())
}

/// String value of the tag, `None` when absent or blank
pub fn get_non_empty_string(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    get_string_value(dcm, tag).filter(|s| !s.is_empty())
}

/// Reads a required, non-empty string value
///
/// # Errors
///
/// [`SuvError::MissingTag`] when the element is absent or empty
pub fn require_string(dcm: &InMemDicomObject, tag: Tag) -> Result<String> {
    get_non_empty_string(dcm, tag).ok_or_else(|| SuvError::MissingTag(tag_name(tag)))
}

/// Reads a required multi-valued string
pub fn require_multi_string(dcm: &InMemDicomObject, tag: Tag) -> Result<Vec<String>> {
    get_multi_string_value(dcm, tag).ok_or_else(|| SuvError::MissingTag(tag_name(tag)))
}

/// Reads a required floating point value (DS, FL, FD)
///
/// # Errors
///
/// [`SuvError::MissingTag`] when absent, [`SuvError::InvalidValue`] when the
/// value does not parse as a number
pub fn require_f64(dcm: &InMemDicomObject, tag: Tag) -> Result<f64> {
    let elem = dcm
        .element(tag)
        .map_err(|_| SuvError::MissingTag(tag_name(tag)))?;
    elem.to_float64()
        .map_err(|e| SuvError::InvalidValue(format!("{}: {}", tag_name(tag), e)))
}

/// Reads a required u16 value (US)
pub fn require_u16(dcm: &InMemDicomObject, tag: Tag) -> Result<u16> {
    let elem = dcm
        .element(tag)
        .map_err(|_| SuvError::MissingTag(tag_name(tag)))?;
    elem.to_int::<u16>()
        .map_err(|e| SuvError::InvalidValue(format!("{}: {}", tag_name(tag), e)))
}
