//! # suvcalc
//!
//! Standardized Uptake Value (SUV) volumes from FDG-PET DICOM series,
//! following the QIBA SUV algorithm (body weight and lean body mass) with
//! decay correction to the series start time.
//!
//! Slices are discovered by DICOM signature, ordered by Slice Location,
//! stripped of zero-fill interpolated slices, and scaled slice by slice.

pub mod api;
pub mod assembly;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod suv;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::PetVolumeReader;
pub use assembly::PetVolume;
pub use error::{Result, SuvError};
pub use extraction::{DicomSliceMetadata, MetadataExtractor, SliceGeometry};
pub use suv::SuvCalculator;
pub use types::*;
