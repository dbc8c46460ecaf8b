//! Synthetic PET slices for unit tests

use crate::extraction::tags::{
    ACQUISITION_DATE, ACQUISITION_TIME, COLUMNS, CORRECTED_IMAGE, DECAY_CORRECTION, PATIENT_SEX,
    PATIENT_WEIGHT, PIXEL_SPACING, RADIONUCLIDE_HALF_LIFE, RADIONUCLIDE_TOTAL_DOSE,
    RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE, RADIOPHARMACEUTICAL_START_DATE_TIME,
    RADIOPHARMACEUTICAL_START_TIME, ROWS, SERIES_DATE, SERIES_TIME, SLICE_LOCATION,
    SLICE_THICKNESS, UNITS,
};
use dicom_core::value::DataSetSequence;
use dicom_core::{DataElement, PrimitiveValue, VR};
use dicom_dictionary_std::{tags, uids};
use dicom_object::{FileDicomObject, FileMetaTableBuilder, InMemDicomObject};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

const PET_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";

static INSTANCE_COUNTER: AtomicU32 = AtomicU32::new(1);

enum Start {
    DateTime(String),
    Time(String),
    Both(String, String),
    Missing,
}

/// Builder for a single-frame PET slice with QIBA happy-path defaults
///
/// Defaults: series and acquisition at 2020-01-01 11:00:00, injection at
/// 10:00:00 (one hour decay), F-18 half life 6586.2 s, 370 MBq, 70 kg male,
/// 2x2 matrix of zeros, 4 mm pixels, 2 mm slices at location 0.
pub struct PetSliceBuilder {
    series: (String, String),
    acquisition: (String, String),
    corrected_image: Vec<String>,
    decay_correction: String,
    units: String,
    start: Start,
    patient_sex: String,
    slice_location: f64,
    slice_thickness: f64,
    columns: u16,
    rows: u16,
    pixels: Option<Vec<u16>>,
    rescale: (f64, f64),
}

impl PetSliceBuilder {
    pub fn new() -> Self {
        Self {
            series: ("20200101".to_string(), "110000".to_string()),
            acquisition: ("20200101".to_string(), "110000".to_string()),
            corrected_image: vec!["DECY".to_string(), "ATTN".to_string()],
            decay_correction: "START".to_string(),
            units: "BQML".to_string(),
            start: Start::DateTime("20200101100000".to_string()),
            patient_sex: "M".to_string(),
            slice_location: 0.0,
            slice_thickness: 2.0,
            columns: 2,
            rows: 2,
            pixels: None,
            rescale: (1.0, 0.0),
        }
    }

    pub fn series(mut self, date: &str, time: &str) -> Self {
        self.series = (date.to_string(), time.to_string());
        self
    }

    pub fn acquisition(mut self, date: &str, time: &str) -> Self {
        self.acquisition = (date.to_string(), time.to_string());
        self
    }

    pub fn corrected_image(mut self, labels: &[&str]) -> Self {
        self.corrected_image = labels.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn decay_correction(mut self, value: &str) -> Self {
        self.decay_correction = value.to_string();
        self
    }

    pub fn units(mut self, value: &str) -> Self {
        self.units = value.to_string();
        self
    }

    pub fn start_time_only(mut self, time: &str) -> Self {
        self.start = Start::Time(time.to_string());
        self
    }

    /// Writes both Start DateTime and Start Time
    pub fn start(mut self, date_time: &str, time: &str) -> Self {
        self.start = Start::Both(date_time.to_string(), time.to_string());
        self
    }

    pub fn without_start(mut self) -> Self {
        self.start = Start::Missing;
        self
    }

    pub fn patient_sex(mut self, value: &str) -> Self {
        self.patient_sex = value.to_string();
        self
    }

    pub fn slice_location(mut self, location: f64) -> Self {
        self.slice_location = location;
        self
    }

    pub fn slice_thickness(mut self, thickness: f64) -> Self {
        self.slice_thickness = thickness;
        self
    }

    pub fn matrix(mut self, columns: u16, rows: u16) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Stored pixel values in row-major order
    pub fn pixels(mut self, pixels: Vec<u16>) -> Self {
        self.pixels = Some(pixels);
        self
    }

    pub fn rescale(mut self, slope: f64, intercept: f64) -> Self {
        self.rescale = (slope, intercept);
        self
    }

    pub fn build(self) -> InMemDicomObject {
        let mut dcm = InMemDicomObject::new_empty();

        let put_str = |dcm: &mut InMemDicomObject, tag, vr, value: &str| {
            dcm.put(DataElement::new(tag, vr, PrimitiveValue::from(value)));
        };

        put_str(&mut dcm, tags::SOP_CLASS_UID, VR::UI, PET_IMAGE_STORAGE);
        put_str(&mut dcm, tags::MODALITY, VR::CS, "PT");
        put_str(&mut dcm, SERIES_DATE, VR::DA, &self.series.0);
        put_str(&mut dcm, SERIES_TIME, VR::TM, &self.series.1);
        put_str(&mut dcm, ACQUISITION_DATE, VR::DA, &self.acquisition.0);
        put_str(&mut dcm, ACQUISITION_TIME, VR::TM, &self.acquisition.1);
        put_str(&mut dcm, DECAY_CORRECTION, VR::CS, &self.decay_correction);
        put_str(&mut dcm, UNITS, VR::CS, &self.units);
        put_str(&mut dcm, PATIENT_SEX, VR::CS, &self.patient_sex);
        put_str(&mut dcm, PATIENT_WEIGHT, VR::DS, "70");
        put_str(&mut dcm, SLICE_LOCATION, VR::DS, &self.slice_location.to_string());
        put_str(&mut dcm, SLICE_THICKNESS, VR::DS, &self.slice_thickness.to_string());
        put_str(&mut dcm, tags::RESCALE_SLOPE, VR::DS, &self.rescale.0.to_string());
        put_str(&mut dcm, tags::RESCALE_INTERCEPT, VR::DS, &self.rescale.1.to_string());
        put_str(&mut dcm, tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2");

        dcm.put(DataElement::new(
            CORRECTED_IMAGE,
            VR::CS,
            PrimitiveValue::Strs(self.corrected_image.clone().into()),
        ));
        dcm.put(DataElement::new(
            PIXEL_SPACING,
            VR::DS,
            PrimitiveValue::Strs(vec!["4".to_string(), "4".to_string()].into()),
        ));

        let mut radiopharmaceutical = InMemDicomObject::from_element_iter([
            DataElement::new(
                RADIONUCLIDE_HALF_LIFE,
                VR::DS,
                PrimitiveValue::from("6586.2"),
            ),
            DataElement::new(
                RADIONUCLIDE_TOTAL_DOSE,
                VR::DS,
                PrimitiveValue::from("370000000"),
            ),
        ]);
        match &self.start {
            Start::DateTime(dt) => put_str(
                &mut radiopharmaceutical,
                RADIOPHARMACEUTICAL_START_DATE_TIME,
                VR::DT,
                dt,
            ),
            Start::Time(tm) => put_str(
                &mut radiopharmaceutical,
                RADIOPHARMACEUTICAL_START_TIME,
                VR::TM,
                tm,
            ),
            Start::Both(dt, tm) => {
                put_str(
                    &mut radiopharmaceutical,
                    RADIOPHARMACEUTICAL_START_DATE_TIME,
                    VR::DT,
                    dt,
                );
                put_str(
                    &mut radiopharmaceutical,
                    RADIOPHARMACEUTICAL_START_TIME,
                    VR::TM,
                    tm,
                );
            }
            Start::Missing => {}
        }
        dcm.put(DataElement::new(
            RADIOPHARMACEUTICAL_INFORMATION_SEQUENCE,
            VR::SQ,
            DataSetSequence::from(vec![radiopharmaceutical]),
        ));

        for (tag, value) in [
            (tags::SAMPLES_PER_PIXEL, 1_u16),
            (ROWS, self.rows),
            (COLUMNS, self.columns),
            (tags::BITS_ALLOCATED, 16),
            (tags::BITS_STORED, 16),
            (tags::HIGH_BIT, 15),
            (tags::PIXEL_REPRESENTATION, 0),
        ] {
            dcm.put(DataElement::new(tag, VR::US, PrimitiveValue::from(value)));
        }

        let pixels = self
            .pixels
            .clone()
            .unwrap_or_else(|| vec![0; self.rows as usize * self.columns as usize]);
        dcm.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OW,
            PrimitiveValue::U16(pixels.into()),
        ));

        dcm
    }

    pub fn build_file(self) -> FileDicomObject<InMemDicomObject> {
        let instance_uid = format!(
            "2.25.{}",
            INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        let mut dcm = self.build();
        dcm.put(DataElement::new(
            tags::SOP_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from(instance_uid.as_str()),
        ));

        dcm.with_meta(
            FileMetaTableBuilder::new()
                .transfer_syntax(uids::EXPLICIT_VR_LITTLE_ENDIAN)
                .media_storage_sop_class_uid(PET_IMAGE_STORAGE)
                .media_storage_sop_instance_uid(instance_uid),
        )
        .expect("valid file meta group")
    }

    /// Writes the slice as a DICOM Part 10 file and returns its path
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        self.build_file()
            .write_to_file(&path)
            .expect("write DICOM file");
        path
    }
}
