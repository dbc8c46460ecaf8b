//! Slice discovery, ordering and volume stacking

pub mod discovery;
pub mod ordering;
pub mod volume;

pub use discovery::{is_dicom_file, list_dicom_files};
pub use ordering::{read_slice_locations, remove_zip, sort_by_slice_location, LocatedSlice};
pub use volume::{assemble_volume, read_slice, PetVolume};
