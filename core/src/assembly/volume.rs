use crate::error::{Result, SuvError};
use crate::extraction::SliceGeometry;
use crate::suv::SuvCalculator;
use crate::types::VolumeGeometry;
use dicom_object::open_file;
use log::{debug, info};
use ndarray::{Array2, Array3, ArrayViewMut2, Axis};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// A PET volume in SUV (or raw) units
#[derive(Debug, Clone)]
pub struct PetVolume {
    /// Voxel values indexed `[x, y, z]`
    pub data: Array3<f64>,
    pub geometry: VolumeGeometry,
    /// Slice files in z order
    pub files: Vec<PathBuf>,
}

impl PetVolume {
    /// Largest voxel value, `None` for an empty volume
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }
}

/// Stacks ordered slice files into a volume
///
/// Matrix and voxel size come from the first file. Each slice is computed by
/// `calculator` and written into its own z-index; with `parallel` the slices
/// are processed on the rayon pool, each worker owning a disjoint z-plane.
pub fn assemble_volume(
    files: Vec<PathBuf>,
    calculator: &SuvCalculator,
    parallel: bool,
) -> Result<PetVolume> {
    let first = files
        .first()
        .ok_or_else(|| SuvError::EmptyDirectory(PathBuf::new()))?;
    let first_dcm = open_file(first)?;
    let slice_geometry = SliceGeometry::from_dicom(&first_dcm)?;

    let geometry = VolumeGeometry::new(
        slice_geometry.columns,
        slice_geometry.rows,
        files.len(),
        slice_geometry.pixel_spacing,
        slice_geometry.slice_thickness,
    );
    info!("Volume geometry: {}", geometry);

    let mut data = Array3::<f64>::zeros(geometry.shape());
    let expected = (slice_geometry.rows, slice_geometry.columns);

    let fill = |(plane, path): (ArrayViewMut2<f64>, &PathBuf)| {
        fill_plane(plane, path, calculator, expected)
    };

    if parallel {
        data.axis_iter_mut(Axis(2))
            .into_par_iter()
            .zip(files.par_iter())
            .try_for_each(fill)?;
    } else {
        data.axis_iter_mut(Axis(2))
            .zip(files.iter())
            .try_for_each(fill)?;
    }

    Ok(PetVolume {
        data,
        geometry,
        files,
    })
}

/// Computes one slice and writes it, transposed to `[x, y]`, into `plane`
fn fill_plane(
    mut plane: ArrayViewMut2<f64>,
    path: &Path,
    calculator: &SuvCalculator,
    expected: (usize, usize),
) -> Result<()> {
    let image = read_slice(path, calculator)?;
    if image.dim() != expected {
        return Err(SuvError::InconsistentDimensions {
            path: path.to_path_buf(),
            expected,
            found: image.dim(),
        });
    }

    plane.assign(&image.t());
    Ok(())
}

/// Reads a single slice file, indexed `[row, column]`
pub fn read_slice(path: &Path, calculator: &SuvCalculator) -> Result<Array2<f64>> {
    debug!("Reading slice {}", path.display());
    let dcm = open_file(path)?;
    calculator.compute(&dcm)
}
