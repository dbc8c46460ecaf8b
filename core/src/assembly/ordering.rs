use crate::error::Result;
use crate::extraction::read_slice_location;
use dicom_object::open_file;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// A slice file and its Slice Location in mm
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedSlice {
    pub path: PathBuf,
    pub location: f64,
}

/// Reads the Slice Location of every file
pub fn read_slice_locations(paths: &[PathBuf]) -> Result<Vec<LocatedSlice>> {
    paths
        .iter()
        .map(|path| {
            Ok(LocatedSlice {
                location: location_of(path)?,
                path: path.clone(),
            })
        })
        .collect()
}

fn location_of(path: &Path) -> Result<f64> {
    let dcm = open_file(path)?;
    read_slice_location(&dcm)
}

/// Sorts slices by ascending location
///
/// The sort is stable: slices at the same location keep their input order.
pub fn sort_by_slice_location(mut slices: Vec<LocatedSlice>) -> Vec<LocatedSlice> {
    slices.sort_by(|a, b| a.location.total_cmp(&b.location));
    slices
}

/// Number of slices the location range covers at `slice_thickness` spacing
pub fn ideal_slice_count(slices: &[LocatedSlice], slice_thickness: f64) -> usize {
    match (slices.first(), slices.last()) {
        (Some(first), Some(last)) => {
            ((last.location - first.location) / slice_thickness).round() as usize + 1
        }
        _ => 0,
    }
}

/// Drops slices added by zero-fill interpolation along z
///
/// Expects slices sorted by location. Keeps every `floor(n / ideal)`-th
/// slice, where `ideal` is the count the location range supports at the
/// given thickness. The stride never drops below 1.
pub fn remove_zip(slices: Vec<LocatedSlice>, slice_thickness: f64) -> Vec<LocatedSlice> {
    if slices.len() < 2 {
        return slices;
    }
    if !(slice_thickness > 0.0) {
        warn!(
            "Slice thickness {} is not positive, keeping all slices",
            slice_thickness
        );
        return slices;
    }

    let ideal = ideal_slice_count(&slices, slice_thickness);
    let zip_factor = slices.len() as f64 / ideal as f64;
    let mut stride = zip_factor.floor() as usize;
    if stride < 1 {
        warn!(
            "{} slices for {} expected positions (zip factor {:.3}), keeping all slices",
            slices.len(),
            ideal,
            zip_factor
        );
        stride = 1;
    }

    info!(
        "ZIP factor {:.3} ({} slices, {} expected), stride {}",
        zip_factor,
        slices.len(),
        ideal,
        stride
    );

    slices.into_iter().step_by(stride).collect()
}
