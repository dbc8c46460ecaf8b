use crate::error::{Result, SuvError};
use crate::extraction::geometry::SliceGeometry;
use crate::extraction::tags::{
    first_sequence_item, get_non_empty_string, get_string_value, require_f64, require_multi_string,
    require_string, tag_name, ACQUISITION_DATE, ACQUISITION_TIME, CORRECTED_IMAGE,
    DECAY_CORRECTION, PATIENT_SEX, PATIENT_WEIGHT, RADIONUCLIDE_HALF_LIFE,
    RADIONUCLIDE_TOTAL_DOSE, RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE,
    RADIOPHARMACEUTICAL_START_DATE_TIME, RADIOPHARMACEUTICAL_START_TIME, SERIES_DATE,
    SERIES_TIME, UNITS,
};
use crate::types::{DecayCorrection, PatientSex, Units};
use dicom_core::Tag;
use dicom_object::InMemDicomObject;
use log::debug;

/// Injection time as recorded in the radiopharmaceutical information sequence
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum RadiopharmaceuticalStart {
    /// Radiopharmaceutical Start DateTime (0018,1078), `YYYYMMDDHHMMSS[.ffffff]`
    DateTime(String),
    /// Radiopharmaceutical Start Time (0018,1072), same day as the series
    Time(String),
}

/// Per-slice attributes needed by the QIBA SUV computation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct DicomSliceMetadata {
    pub series_date: String,
    pub series_time: String,
    pub acquisition_date: String,
    pub acquisition_time: String,

    /// CorrectedImage labels (ATTN, DECY, ...)
    pub corrected_image: Vec<String>,

    pub decay_correction: DecayCorrection,

    pub units: Units,

    /// Radionuclide half life in seconds
    pub half_life_s: f64,

    /// Radionuclide total dose in Bq, not corrected for residual syringe dose
    pub injected_dose_bq: f64,

    pub radiopharmaceutical_start: RadiopharmaceuticalStart,

    pub patient_weight_kg: f64,

    pub patient_sex: PatientSex,

    pub geometry: SliceGeometry,
}

/// Extracts [`DicomSliceMetadata`] from a parsed PET slice
///
/// Only the QIBA "happy path" is accepted: the image must be attenuation
/// and decay corrected, decay corrected to the scan start, and stored in
/// BQML.
pub struct MetadataExtractor;

impl MetadataExtractor {
    /// Extracts all attributes needed for SUV scaling
    ///
    /// # Errors
    ///
    /// - [`SuvError::MissingTag`] if a required tag is absent
    /// - [`SuvError::UnsupportedCorrection`] if CorrectedImage lacks ATTN or
    ///   DECY, or DecayCorrection is not START
    /// - [`SuvError::UnsupportedUnits`] if Units is not BQML
    /// - [`SuvError::InvalidValue`] for non-positive half life, dose or weight
    pub fn extract(dcm: &InMemDicomObject) -> Result<DicomSliceMetadata> {
        let corrected_image = require_multi_string(dcm, CORRECTED_IMAGE)?;
        let decay_correction = DecayCorrection::parse(&require_string(dcm, DECAY_CORRECTION)?);
        let units = Units::parse(&require_string(dcm, UNITS)?);

        Self::check_corrections(&corrected_image, &decay_correction)?;
        if let Units::Other(unit) = &units {
            return Err(SuvError::UnsupportedUnits(unit.clone()));
        }

        let radiopharmaceutical =
            first_sequence_item(dcm, RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE).ok_or_else(|| {
                SuvError::MissingTag(tag_name(RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE))
            })?;
        let patient_sex =
            PatientSex::parse(&get_string_value(dcm, PATIENT_SEX).unwrap_or_default());

        let metadata = DicomSliceMetadata {
            series_date: require_string(dcm, SERIES_DATE)?,
            series_time: require_string(dcm, SERIES_TIME)?,
            acquisition_date: require_string(dcm, ACQUISITION_DATE)?,
            acquisition_time: require_string(dcm, ACQUISITION_TIME)?,
            corrected_image,
            decay_correction,
            units,
            half_life_s: require_positive(radiopharmaceutical, RADIONUCLIDE_HALF_LIFE)?,
            injected_dose_bq: require_positive(radiopharmaceutical, RADIONUCLIDE_TOTAL_DOSE)?,
            radiopharmaceutical_start: Self::extract_start(radiopharmaceutical)?,
            patient_weight_kg: require_positive(dcm, PATIENT_WEIGHT)?,
            patient_sex,
            geometry: SliceGeometry::from_dicom(dcm)?,
        };

        debug!(
            "Extracted PET metadata: half life {} s, dose {} Bq, weight {} kg",
            metadata.half_life_s, metadata.injected_dose_bq, metadata.patient_weight_kg
        );

        Ok(metadata)
    }

    fn check_corrections(
        corrected_image: &[String],
        decay_correction: &DecayCorrection,
    ) -> Result<()> {
        let has = |label: &str| corrected_image.iter().any(|c| c == label);

        if has("ATTN") && has("DECY") && *decay_correction == DecayCorrection::Start {
            Ok(())
        } else {
            Err(SuvError::UnsupportedCorrection {
                corrected_image: corrected_image.to_vec(),
                decay_correction: decay_correction.to_string(),
            })
        }
    }

    /// Start DateTime takes precedence over Start Time; blank values are skipped
    fn extract_start(item: &InMemDicomObject) -> Result<RadiopharmaceuticalStart> {
        if let Some(dt) = get_non_empty_string(item, RADIOPHARMACEUTICAL_START_DATE_TIME) {
            Ok(RadiopharmaceuticalStart::DateTime(dt))
        } else if let Some(tm) = get_non_empty_string(item, RADIOPHARMACEUTICAL_START_TIME) {
            Ok(RadiopharmaceuticalStart::Time(tm))
        } else {
            Err(SuvError::MissingTag(format!(
                "{} or {}",
                tag_name(RADIOPHARMACEUTICAL_START_DATE_TIME),
                tag_name(RADIOPHARMACEUTICAL_START_TIME)
            )))
        }
    }
}

fn require_positive(dcm: &InMemDicomObject, tag: Tag) -> Result<f64> {
    let value = require_f64(dcm, tag)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SuvError::InvalidValue(format!(
            "{} must be positive, found {}",
            tag_name(tag),
            value
        )))
    }
}
