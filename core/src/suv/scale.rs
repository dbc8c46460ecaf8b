use crate::error::{Result, SuvError};
use crate::extraction::{DicomSliceMetadata, MetadataExtractor};
use crate::suv::decay::decayed_dose;
use crate::suv::lbm::lean_body_mass;
use crate::suv::pixels::rescaled_pixels;
use crate::types::Target;
use dicom_object::{FileDicomObject, InMemDicomObject};
use log::debug;
use ndarray::Array2;

/// SUV scale factor in g/Bq
pub fn scale_factor(effective_weight_kg: f64, decayed_dose_bq: f64) -> f64 {
    effective_weight_kg * 1000.0 / decayed_dose_bq
}

/// Multiplies every pixel by `scale`, or returns the image unchanged
pub fn apply_scale(image: Array2<f64>, scale: Option<f64>) -> Array2<f64> {
    match scale {
        Some(scale) => image.mapv_into(|v| v * scale),
        None => image,
    }
}

/// Scales modality-rescaled PET slices into the requested target
///
/// # Example
///
/// ```
/// use suvcalc_core::{SuvCalculator, Target};
///
/// let calculator = SuvCalculator::new(Target::Raw, None);
/// assert_eq!(calculator.target(), Target::Raw);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuvCalculator {
    target: Target,
    patient_height_m: Option<f64>,
}

impl SuvCalculator {
    pub fn new(target: Target, patient_height_m: Option<f64>) -> Self {
        Self {
            target,
            patient_height_m,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Effective weight in kg: body weight or lean body mass
    ///
    /// # Errors
    ///
    /// - [`SuvError::MissingParameter`] for SUV-lbm without a patient height
    /// - [`SuvError::InvalidValue`] for SUV-lbm with a height that is not positive
    /// - [`SuvError::InvalidSex`] for SUV-lbm when sex is neither M nor F
    /// - [`SuvError::UnsupportedTarget`] for the raw target
    pub fn effective_weight_kg(&self, meta: &DicomSliceMetadata) -> Result<f64> {
        match self.target {
            Target::SuvBw => Ok(meta.patient_weight_kg),
            Target::SuvLbm => {
                let height = self.patient_height_m.ok_or_else(|| {
                    SuvError::MissingParameter("patient height is required for suv_lbm".to_string())
                })?;
                if !(height > 0.0) {
                    return Err(SuvError::InvalidValue(format!(
                        "patient height must be positive, found {} m",
                        height
                    )));
                }
                lean_body_mass(height, meta.patient_weight_kg, &meta.patient_sex)
            }
            Target::Raw => Err(SuvError::UnsupportedTarget(
                "raw has no effective weight".to_string(),
            )),
        }
    }

    /// Scale factor for already extracted metadata; `None` for raw
    pub fn scale_factor_for(&self, meta: &DicomSliceMetadata) -> Result<Option<f64>> {
        if !self.target.is_suv() {
            return Ok(None);
        }

        let dose = decayed_dose(meta)?;
        let weight = self.effective_weight_kg(meta)?;
        let scale = scale_factor(weight, dose);

        debug!(
            "{} scale factor {} g/Bq (weight {} kg)",
            self.target, scale, weight
        );

        Ok(Some(scale))
    }

    /// Scale factor for a slice; raw reads no PET attributes
    pub fn scale_factor(&self, dcm: &InMemDicomObject) -> Result<Option<f64>> {
        match self.target {
            Target::Raw => Ok(None),
            _ => self.scale_factor_for(&MetadataExtractor::extract(dcm)?),
        }
    }

    /// Computes the output image of a single slice, indexed `[row, column]`
    pub fn compute(&self, dcm: &FileDicomObject<InMemDicomObject>) -> Result<Array2<f64>> {
        let scale = self.scale_factor(dcm)?;
        let image = rescaled_pixels(dcm)?;
        Ok(apply_scale(image, scale))
    }
}
