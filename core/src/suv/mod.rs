//! QIBA SUV computation: decay correction, lean body mass and scaling

pub mod decay;
pub mod lbm;
pub mod pixels;
pub mod scale;

pub use decay::{dcm_dt_to_time_sec, dcm_tm_to_sec, decay, decay_time, decayed_dose};
pub use lbm::lean_body_mass;
pub use pixels::rescaled_pixels;
pub use scale::{apply_scale, scale_factor, SuvCalculator};
