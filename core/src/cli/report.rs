use crate::assembly::PetVolume;
use crate::types::{Target, VolumeGeometry};
use std::fmt;
use std::path::{Path, PathBuf};

/// Summary of a computed PET volume
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct VolumeSummary {
    pub path: PathBuf,
    pub target: Target,
    pub geometry: VolumeGeometry,
    pub max: Option<f64>,
}

impl VolumeSummary {
    pub fn new(path: &Path, target: Target, volume: &PetVolume) -> Self {
        Self {
            path: path.to_path_buf(),
            target,
            geometry: volume.geometry,
            max: volume.max(),
        }
    }
}

/// Text report formatter for a volume summary
pub struct TextReport<'a> {
    summary: &'a VolumeSummary,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(summary: &'a VolumeSummary) -> Self {
        Self { summary }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.summary.geometry.matrix_size;
        let [sx, sy, sz] = self.summary.geometry.voxel_size;

        writeln!(f, "PET Volume")?;
        writeln!(f, "==========")?;
        writeln!(f)?;
        writeln!(f, "Path:        {}", self.summary.path.display())?;
        writeln!(f, "Target:      {}", self.summary.target)?;
        writeln!(f, "Matrix size: {} x {} x {}", x, y, z)?;
        writeln!(f, "Voxel size:  {} x {} x {} mm", sx, sy, sz)?;
        match self.summary.max {
            Some(max) => writeln!(f, "Max:         {}", max)?,
            None => writeln!(f, "Max:         n/a")?,
        }

        Ok(())
    }
}
