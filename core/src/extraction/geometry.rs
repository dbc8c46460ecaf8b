use crate::error::{Result, SuvError};
use crate::extraction::tags::{
    get_string_value, require_f64, require_u16, tag_name, COLUMNS, PIXEL_SPACING, ROWS,
    SLICE_LOCATION, SLICE_THICKNESS,
};
use crate::types::PixelSpacing;
use dicom_object::InMemDicomObject;

/// Spatial attributes of a single slice
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SliceGeometry {
    /// Slice Location (0020,1041) in mm
    pub slice_location: f64,
    pub pixel_spacing: PixelSpacing,
    /// Slice Thickness (0018,0050) in mm
    pub slice_thickness: f64,
    pub columns: usize,
    pub rows: usize,
}

impl SliceGeometry {
    /// Reads slice location, spacing, thickness and matrix size
    ///
    /// # Errors
    ///
    /// [`SuvError::MissingTag`] if any of the attributes is absent
    pub fn from_dicom(dcm: &InMemDicomObject) -> Result<Self> {
        Ok(Self {
            slice_location: read_slice_location(dcm)?,
            pixel_spacing: read_pixel_spacing(dcm)?,
            slice_thickness: require_f64(dcm, SLICE_THICKNESS)?,
            columns: require_u16(dcm, COLUMNS)? as usize,
            rows: require_u16(dcm, ROWS)? as usize,
        })
    }
}

/// Reads Slice Location (0020,1041) in mm
pub fn read_slice_location(dcm: &InMemDicomObject) -> Result<f64> {
    require_f64(dcm, SLICE_LOCATION)
}

/// Reads Pixel Spacing (0028,0030)
///
/// Falls back to lenient string parsing when the element does not decode
/// as a multi-valued DS.
pub fn read_pixel_spacing(dcm: &InMemDicomObject) -> Result<PixelSpacing> {
    let elem = dcm
        .element(PIXEL_SPACING)
        .map_err(|_| SuvError::MissingTag(tag_name(PIXEL_SPACING)))?;

    match elem.to_multi_float64() {
        Ok(values) => PixelSpacing::from_values(&values),
        Err(_) => get_string_value(dcm, PIXEL_SPACING)
            .ok_or_else(|| SuvError::InvalidValue(tag_name(PIXEL_SPACING)))
            .and_then(|s| PixelSpacing::parse(&s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::PetSliceBuilder;
    use dicom_core::{DataElement, PrimitiveValue, VR};

    #[test]
    fn test_geometry_from_dicom() {
        let dcm = PetSliceBuilder::new()
            .slice_location(-42.5)
            .matrix(4, 3)
            .build();
        let geometry = SliceGeometry::from_dicom(&dcm).unwrap();

        assert_eq!(geometry.slice_location, -42.5);
        assert_eq!(geometry.pixel_spacing, PixelSpacing::new(4.0, 4.0));
        assert_eq!(geometry.slice_thickness, 2.0);
        assert_eq!(geometry.columns, 4);
        assert_eq!(geometry.rows, 3);
    }

    #[test]
    fn test_geometry_missing_slice_location() {
        let mut dcm = PetSliceBuilder::new().build();
        dcm.remove_element(SLICE_LOCATION);
        match SliceGeometry::from_dicom(&dcm) {
            Err(SuvError::MissingTag(name)) => assert!(name.contains("SliceLocation")),
            other => panic!("expected MissingTag, got {:?}", other),
        }
    }

    #[test]
    fn test_pixel_spacing_string_fallback() {
        let mut dcm = InMemDicomObject::new_empty();
        dcm.put(DataElement::new(
            PIXEL_SPACING,
            VR::LO,
            PrimitiveValue::from("[2.5, 3.5]"),
        ));
        assert_eq!(
            read_pixel_spacing(&dcm).unwrap(),
            PixelSpacing::new(2.5, 3.5)
        );
    }
}
