//! Radiotracer decay correction (QIBA happy path)
//!
//! DICOM TM/DT values are converted to seconds of day; the injected dose is
//! decayed from the radiopharmaceutical start time to the series time.
//! No correction for residual dose in the syringe is applied.

use crate::error::{Result, SuvError};
use crate::extraction::{DicomSliceMetadata, RadiopharmaceuticalStart};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Converts a DICOM TM string (`HHMMSS[.ffffff]`) to seconds of day
///
/// Fractional seconds are only read when a `.` follows the seconds field;
/// anything after the sixth fraction digit is ignored.
///
/// ```
/// use suvcalc_core::suv::dcm_tm_to_sec;
///
/// assert_eq!(dcm_tm_to_sec("120000").unwrap(), 43200.0);
/// assert_eq!(dcm_tm_to_sec("120030.5").unwrap(), 43230.5);
/// ```
pub fn dcm_tm_to_sec(tm: &str) -> Result<f64> {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| {
        Regex::new(r"^(\d{2})(\d{2})(\d{2})(\.\d{1,6})?").expect("Failed to compile regex")
    });

    let caps = re
        .captures(tm.trim())
        .ok_or_else(|| SuvError::InvalidValue(format!("Malformed DICOM time '{}'", tm)))?;

    let field = |i: usize| -> f64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    Ok(field(1) * 3600.0 + field(2) * 60.0 + field(3) + field(4))
}

/// Converts the time part of a DICOM DT string (`YYYYMMDDHHMMSS[.ffffff]`)
/// to seconds of day
pub fn dcm_dt_to_time_sec(dt: &str) -> Result<f64> {
    let time = dt
        .trim()
        .get(8..)
        .ok_or_else(|| SuvError::InvalidValue(format!("Malformed DICOM datetime '{}'", dt)))?;
    dcm_tm_to_sec(time)
}

/// Dose remaining after `decay_time_s` seconds of exponential decay
pub fn decay(half_life_s: f64, injected_dose_bq: f64, decay_time_s: f64) -> f64 {
    injected_dose_bq * 2f64.powf(-decay_time_s / half_life_s)
}

/// Seconds elapsed between injection and series start
///
/// The series must not be dated after the acquisition. Dates and times are
/// compared as raw strings, not as parsed values.
///
/// # Errors
///
/// [`SuvError::PostProcessedStudy`] when the series date/time is after the
/// acquisition date/time.
pub fn decay_time(meta: &DicomSliceMetadata) -> Result<f64> {
    if !(meta.series_date <= meta.acquisition_date && meta.series_time <= meta.acquisition_time) {
        return Err(SuvError::PostProcessedStudy {
            series_date: meta.series_date.clone(),
            series_time: meta.series_time.clone(),
            acquisition_date: meta.acquisition_date.clone(),
            acquisition_time: meta.acquisition_time.clone(),
        });
    }

    let scan_time = dcm_tm_to_sec(&meta.series_time)?;

    // Start Time carries no date: same day as the series is assumed
    let start_time = match &meta.radiopharmaceutical_start {
        RadiopharmaceuticalStart::DateTime(dt) => dcm_dt_to_time_sec(dt)?,
        RadiopharmaceuticalStart::Time(tm) => dcm_tm_to_sec(tm)?,
    };

    Ok(scan_time - start_time)
}

/// Injected dose decayed to the series start time, in Bq
pub fn decayed_dose(meta: &DicomSliceMetadata) -> Result<f64> {
    let decay_time_s = decay_time(meta)?;
    let dose = decay(meta.half_life_s, meta.injected_dose_bq, decay_time_s);

    debug!(
        "Decay time {} s, decayed dose {} Bq (injected {} Bq)",
        decay_time_s, dose, meta.injected_dose_bq
    );

    Ok(dose)
}
