pub mod geometry;
pub mod metadata;
pub mod tags;

pub use geometry::{read_pixel_spacing, read_slice_location, SliceGeometry};
pub use metadata::{DicomSliceMetadata, MetadataExtractor, RadiopharmaceuticalStart};
pub use tags::*;
