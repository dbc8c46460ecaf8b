use crate::assembly::{
    assemble_volume, list_dicom_files, read_slice, read_slice_locations, remove_zip,
    sort_by_slice_location, PetVolume,
};
use crate::error::{Result, SuvError};
use crate::extraction::SliceGeometry;
use crate::suv::SuvCalculator;
use crate::types::ReadOptions;
use dicom_object::open_file;
use log::info;
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Main reader for FDG-PET series
///
/// Discovers the DICOM files of a series, orders them along z, removes
/// zero-fill interpolated slices and scales every slice into the target
/// units.
///
/// # Example
///
/// ```no_run
/// use suvcalc_core::{PetVolumeReader, ReadOptions, Target};
///
/// let reader = PetVolumeReader::new(ReadOptions::default().with_target(Target::SuvBw));
/// let volume = reader.read_volume("pet_series/").unwrap();
///
/// println!("SUVmax: {:?}", volume.max());
/// println!("geometry: {}", volume.geometry);
/// ```
pub struct PetVolumeReader {
    options: ReadOptions,
}

impl PetVolumeReader {
    pub fn new(options: ReadOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReadOptions {
        &self.options
    }

    fn calculator(&self) -> SuvCalculator {
        SuvCalculator::new(self.options.target, self.options.patient_height_m)
    }

    /// Reads a single slice, indexed `[row, column]`
    ///
    /// # Errors
    ///
    /// Any error of the metadata extraction, decay correction or scaling
    /// for the configured target.
    pub fn read_slice(&self, path: impl AsRef<Path>) -> Result<Array2<f64>> {
        read_slice(path.as_ref(), &self.calculator())
    }

    /// Lists, orders and (optionally) de-interpolates the slice files
    ///
    /// # Errors
    ///
    /// [`SuvError::EmptyDirectory`] if no DICOM file is found under `path`
    pub fn ordered_files(&self, path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let path = path.as_ref();
        let files = list_dicom_files(path, self.options.recursive)?;
        if files.is_empty() {
            return Err(SuvError::EmptyDirectory(path.to_path_buf()));
        }

        let mut slices = sort_by_slice_location(read_slice_locations(&files)?);

        if self.options.omit_slice_zip {
            let first_dcm = open_file(&slices[0].path)?;
            let first = SliceGeometry::from_dicom(&first_dcm)?;
            slices = remove_zip(slices, first.slice_thickness);
        }

        Ok(slices.into_iter().map(|s| s.path).collect())
    }

    /// Reads a directory (or single file) into a volume
    pub fn read_volume(&self, path: impl AsRef<Path>) -> Result<PetVolume> {
        let path = path.as_ref();
        info!("Reading {} as {}", path.display(), self.options.target);

        let files = self.ordered_files(path)?;
        assemble_volume(files, &self.calculator(), self.options.parallel)
    }
}
