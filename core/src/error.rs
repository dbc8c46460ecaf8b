use std::path::PathBuf;
use thiserror::Error;

/// Result type for SUV operations
pub type Result<T> = std::result::Result<T, SuvError>;

/// Error types for SUV computation
///
/// Every variant is fatal to the current read: a failing slice aborts the
/// whole volume.
#[derive(Error, Debug)]
pub enum SuvError {
    /// No DICOM file was found under the given path
    #[error("No DICOM files found in {}", .0.display())]
    EmptyDirectory(PathBuf),

    /// Required tag not found in DICOM file
    #[error("Tag not found: {0}")]
    MissingTag(String),

    /// Units other than BQML
    #[error("Unsupported units '{0}': only BQML is supported")]
    UnsupportedUnits(String),

    /// Corrections other than ATTN + DECY with START decay correction
    #[error(
        "Unsupported corrections (CorrectedImage={corrected_image:?}, DecayCorrection={decay_correction}): \
         this does not look like a decay corrected FDG-PET series"
    )]
    UnsupportedCorrection {
        corrected_image: Vec<String>,
        decay_correction: String,
    },

    /// Series date/time after acquisition date/time
    #[error(
        "Series {series_date} {series_time} is after acquisition {acquisition_date} {acquisition_time}: \
         scan time detection for post-processed series is not supported"
    )]
    PostProcessedStudy {
        series_date: String,
        series_time: String,
        acquisition_date: String,
        acquisition_time: String,
    },

    /// A caller-supplied parameter is required but was not given
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Patient sex is neither M nor F
    #[error("Invalid patient sex: '{0}'")]
    InvalidSex(String),

    /// Unknown output target
    #[error("Unsupported target '{0}': expected one of raw, suv_bw, suv_lbm")]
    UnsupportedTarget(String),

    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// Pixel data decoding error
    #[error("Pixel data error: {0}")]
    PixelData(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// Slice matrix differs from the first slice of the series
    #[error("Inconsistent slice dimensions in {}: expected {expected:?}, found {found:?}", .path.display())]
    InconsistentDimensions {
        path: PathBuf,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for SuvError {
    fn from(e: dicom_object::ReadError) -> Self {
        SuvError::DicomError(format!("{}", e))
    }
}

impl From<dicom_core::value::ConvertValueError> for SuvError {
    fn from(e: dicom_core::value::ConvertValueError) -> Self {
        SuvError::InvalidValue(format!("{}", e))
    }
}

impl From<dicom_pixeldata::Error> for SuvError {
    fn from(e: dicom_pixeldata::Error) -> Self {
        SuvError::PixelData(format!("{}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_offending_value() {
        let err = SuvError::UnsupportedUnits("CNTS".to_string());
        assert!(err.to_string().contains("CNTS"));

        let err = SuvError::InvalidSex("O".to_string());
        assert!(err.to_string().contains("'O'"));

        let err = SuvError::EmptyDirectory(PathBuf::from("/data/empty"));
        assert!(err.to_string().contains("/data/empty"));
    }

    #[test]
    fn test_post_processed_message() {
        let err = SuvError::PostProcessedStudy {
            series_date: "20200101".to_string(),
            series_time: "130000".to_string(),
            acquisition_date: "20200101".to_string(),
            acquisition_time: "120000".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("130000"));
        assert!(msg.contains("post-processed"));
    }
}
