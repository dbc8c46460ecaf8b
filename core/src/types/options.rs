use crate::types::Target;

/// Configuration for reading a PET series
///
/// # Example
///
/// ```
/// use suvcalc_core::{ReadOptions, Target};
///
/// let options = ReadOptions::default()
///     .with_target(Target::SuvLbm)
///     .with_patient_height(1.75)
///     .recursive(true);
///
/// assert_eq!(options.target, Target::SuvLbm);
/// assert_eq!(options.patient_height_m, Some(1.75));
/// assert!(options.omit_slice_zip);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct ReadOptions {
    /// Output target
    pub target: Target,

    /// Patient height in meters, required by [`Target::SuvLbm`]
    pub patient_height_m: Option<f64>,

    /// Descend into subdirectories when listing files
    pub recursive: bool,

    /// Drop slices added by zero-fill interpolation along z
    pub omit_slice_zip: bool,

    /// Decode and scale slices on the rayon thread pool
    pub parallel: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            target: Target::SuvBw,
            patient_height_m: None,
            recursive: false,
            omit_slice_zip: true,
            parallel: true,
        }
    }
}

impl ReadOptions {
    /// Builder: Set the output target
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Builder: Set the patient height in meters
    pub fn with_patient_height(mut self, height_m: f64) -> Self {
        self.patient_height_m = Some(height_m);
        self
    }

    /// Builder: Enable recursive file discovery
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Builder: Enable or disable ZIP removal
    pub fn omit_slice_zip(mut self, omit: bool) -> Self {
        self.omit_slice_zip = omit;
        self
    }

    /// Builder: Enable or disable parallel slice processing
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ReadOptions::default();
        assert_eq!(options.target, Target::SuvBw);
        assert!(options.patient_height_m.is_none());
        assert!(!options.recursive);
        assert!(options.omit_slice_zip);
        assert!(options.parallel);
    }

    #[test]
    fn test_builder_chain() {
        let options = ReadOptions::default()
            .with_target(Target::Raw)
            .omit_slice_zip(false)
            .parallel(false);

        assert_eq!(options.target, Target::Raw);
        assert!(!options.omit_slice_zip);
        assert!(!options.parallel);
        assert!(!options.recursive);
    }
}
