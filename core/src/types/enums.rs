use crate::error::SuvError;
use std::fmt;
use std::str::FromStr;

/// Output target for a PET read
///
/// Selects whether pixel data is scaled into SUV units and which
/// effective weight is used for the scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Target {
    /// Modality-rescaled pixel values (Bq/mL), no decay correction
    Raw,
    /// SUV normalized by patient body weight
    #[default]
    SuvBw,
    /// SUV normalized by lean body mass (SUL)
    SuvLbm,
}

impl Target {
    /// Returns the name used on the command line
    pub fn simple_name(&self) -> &'static str {
        match self {
            Target::Raw => "raw",
            Target::SuvBw => "suv_bw",
            Target::SuvLbm => "suv_lbm",
        }
    }

    /// Returns whether this target needs decay corrected SUV scaling
    pub fn is_suv(&self) -> bool {
        !matches!(self, Target::Raw)
    }
}

impl FromStr for Target {
    type Err = SuvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "raw" => Ok(Target::Raw),
            "suv_bw" => Ok(Target::SuvBw),
            "suv_lbm" => Ok(Target::SuvLbm),
            other => Err(SuvError::UnsupportedTarget(other.to_string())),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Patient sex (0010,0040)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum PatientSex {
    Female,
    Male,
    /// Any other value, including "O" and empty strings
    Other(String),
}

impl PatientSex {
    /// Parses the DICOM code string ("M", "F", ...)
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "F" => PatientSex::Female,
            "M" => PatientSex::Male,
            other => PatientSex::Other(other.to_string()),
        }
    }

    /// Numeric code used by the LBM formula: 0 for female, 1 for male
    pub fn as_index(&self) -> Option<u8> {
        match self {
            PatientSex::Female => Some(0),
            PatientSex::Male => Some(1),
            PatientSex::Other(_) => None,
        }
    }
}

impl fmt::Display for PatientSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientSex::Female => write!(f, "F"),
            PatientSex::Male => write!(f, "M"),
            PatientSex::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Decay Correction (0054,1102)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum DecayCorrection {
    /// Decay corrected to the acquisition start time
    Start,
    /// No decay correction
    None,
    /// Decay corrected to the administration time
    Admin,
    Other(String),
}

impl DecayCorrection {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "START" => DecayCorrection::Start,
            "NONE" => DecayCorrection::None,
            "ADMIN" => DecayCorrection::Admin,
            _ => DecayCorrection::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for DecayCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayCorrection::Start => write!(f, "START"),
            DecayCorrection::None => write!(f, "NONE"),
            DecayCorrection::Admin => write!(f, "ADMIN"),
            DecayCorrection::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Pixel value units (0054,1001)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum Units {
    /// Becquerels per milliliter
    Bqml,
    Other(String),
}

impl Units {
    pub fn parse(s: &str) -> Self {
        if s.trim() == "BQML" {
            Units::Bqml
        } else {
            Units::Other(s.trim().to_string())
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Bqml => write!(f, "BQML"),
            Units::Other(s) => write!(f, "{}", s),
        }
    }
}
