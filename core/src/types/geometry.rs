use crate::types::PixelSpacing;
use std::fmt;

/// Matrix and voxel size of an assembled PET volume
///
/// Axes are ordered `[x, y, z]`: columns, rows, slices. Taken from the first
/// slice of the ordered series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct VolumeGeometry {
    /// Number of voxels along x, y and z
    pub matrix_size: [usize; 3],
    /// Voxel edge lengths in mm along x, y and z
    pub voxel_size: [f64; 3],
}

impl VolumeGeometry {
    pub fn new(
        columns: usize,
        rows: usize,
        slices: usize,
        spacing: PixelSpacing,
        slice_thickness: f64,
    ) -> Self {
        Self {
            matrix_size: [columns, rows, slices],
            voxel_size: [spacing.col, spacing.row, slice_thickness],
        }
    }

    /// Shape of the backing array
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.matrix_size[0], self.matrix_size[1], self.matrix_size[2])
    }
}

impl fmt::Display for VolumeGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.matrix_size;
        let [sx, sy, sz] = self.voxel_size;
        write!(f, "{}x{}x{} @ {}x{}x{} mm", x, y, z, sx, sy, sz)
    }
}
