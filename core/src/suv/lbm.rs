use crate::error::{Result, SuvError};
use crate::types::PatientSex;

/// Lean body mass in kg (James formula)
///
/// - female: `9270 * w / (6680 + 216 * bmi)`
/// - male: `9270 * w / (8780 + 244 * bmi)`
///
/// # Errors
///
/// [`SuvError::InvalidSex`] if `sex` is neither male nor female
pub fn lean_body_mass(height_m: f64, weight_kg: f64, sex: &PatientSex) -> Result<f64> {
    let bmi = weight_kg / (height_m * height_m);

    match sex.as_index() {
        Some(0) => Ok(9270.0 * weight_kg / (6680.0 + 216.0 * bmi)),
        Some(1) => Ok(9270.0 * weight_kg / (8780.0 + 244.0 * bmi)),
        _ => Err(SuvError::InvalidSex(sex.to_string())),
    }
}
