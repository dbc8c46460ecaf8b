//! Core type definitions for PET SUV computation
//!
//! - [`Target`]: output selection (raw, SUV-bw, SUV-lbm)
//! - [`PatientSex`], [`DecayCorrection`], [`Units`]: coded DICOM attributes
//! - [`PixelSpacing`]: in-plane pixel spacing
//! - [`VolumeGeometry`]: matrix and voxel size of an assembled volume
//! - [`ReadOptions`]: configuration for reading a series

mod enums;
mod geometry;
mod options;
mod pixel_spacing;

pub use enums::{DecayCorrection, PatientSex, Target, Units};
pub use geometry::VolumeGeometry;
pub use options::ReadOptions;
pub use pixel_spacing::PixelSpacing;
