use crate::error::{Result, SuvError};
use dicom_object::{FileDicomObject, InMemDicomObject};
use dicom_pixeldata::{ConvertOptions, ModalityLutOption, PixelDecoder};
use ndarray::Array2;

/// Decodes the first frame and applies the modality LUT
///
/// Rescale slope and intercept are read from this slice only; they may
/// differ between slices of the same series. The result is indexed
/// `[row, column]`.
pub fn rescaled_pixels(dcm: &FileDicomObject<InMemDicomObject>) -> Result<Array2<f64>> {
    let decoded = dcm.decode_pixel_data()?;
    let rows = decoded.rows() as usize;
    let columns = decoded.columns() as usize;

    let options = ConvertOptions::new().with_modality_lut(ModalityLutOption::Default);
    let values: Vec<f64> = decoded.to_vec_frame_with_options(0, &options)?;

    Array2::from_shape_vec((rows, columns), values).map_err(|e| {
        SuvError::PixelData(format!(
            "Decoded pixel count does not match {}x{}: {}",
            rows, columns, e
        ))
    })
}
