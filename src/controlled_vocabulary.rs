//! HUPO-PSI MS controlled vocabulary terms for instrument models.
//!
//! The metadata preamble reports the instrument as a CV accession rather than
//! the free-text model name the vendor embeds in the file, so downstream
//! consumers can match instruments without string heuristics.
//!
//! Reference: <https://github.com/HUPO-PSI/psi-ms-CV>

use std::fmt;

use serde::{Deserialize, Serialize};

/// A controlled vocabulary term with its accession and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CvTerm {
    /// CV accession (e.g., "MS:1000449")
    pub accession: String,
    /// Human-readable name
    pub name: String,
}

impl CvTerm {
    /// Create a new CV term with accession and name.
    pub fn new(accession: &str, name: &str) -> Self {
        Self {
            accession: accession.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for CvTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]", self.accession, self.name)
    }
}

/// Thermo instrument models with a dedicated CV term.
///
/// Models the extractor does not recognize map to the generic
/// `MS:1000031 instrument model` term instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstrumentModel {
    /// MS:1000447 - LTQ
    Ltq,
    /// MS:1000449 - LTQ Orbitrap
    LtqOrbitrap,
    /// MS:1000556 - LTQ Orbitrap XL
    LtqOrbitrapXl,
    /// MS:1000855 - LTQ Velos
    LtqVelos,
    /// MS:1001510 - TSQ Vantage
    TsqVantage,
    /// MS:1001742 - LTQ Orbitrap Velos
    LtqOrbitrapVelos,
    /// MS:1001911 - Q Exactive
    QExactive,
    /// MS:1002416 - Orbitrap Fusion
    OrbitrapFusion,
    /// MS:1000031 - generic instrument model (unrecognized)
    Unknown,
}

impl InstrumentModel {
    /// Classify a vendor-reported model name.
    ///
    /// Matching is case-insensitive substring matching, most specific pattern
    /// first, so "LTQ Orbitrap XL" is not swallowed by the plain "LTQ Orbitrap"
    /// or "LTQ" patterns. Anything unrecognized is [`InstrumentModel::Unknown`].
    pub fn from_model_name(name: &str) -> Self {
        let name = name.to_ascii_uppercase();
        if name.contains("ORBITRAP FUSION") {
            Self::OrbitrapFusion
        } else if name.contains("Q EXACTIVE") {
            Self::QExactive
        } else if name.contains("ORBITRAP XL") {
            Self::LtqOrbitrapXl
        } else if name.contains("ORBITRAP VELOS") {
            Self::LtqOrbitrapVelos
        } else if name.contains("LTQ ORBITRAP") {
            Self::LtqOrbitrap
        } else if name.contains("LTQ VELOS") {
            Self::LtqVelos
        } else if name.contains("TSQ VANTAGE") {
            Self::TsqVantage
        } else if name.contains("LTQ") {
            Self::Ltq
        } else {
            Self::Unknown
        }
    }

    /// Look up a model by its CV accession.
    pub fn from_accession(accession: &str) -> Self {
        match accession {
            "MS:1000447" => Self::Ltq,
            "MS:1000449" => Self::LtqOrbitrap,
            "MS:1000556" => Self::LtqOrbitrapXl,
            "MS:1000855" => Self::LtqVelos,
            "MS:1001510" => Self::TsqVantage,
            "MS:1001742" => Self::LtqOrbitrapVelos,
            "MS:1001911" => Self::QExactive,
            "MS:1002416" => Self::OrbitrapFusion,
            _ => Self::Unknown,
        }
    }

    /// The model's CV accession.
    pub fn accession(self) -> &'static str {
        match self {
            Self::Ltq => "MS:1000447",
            Self::LtqOrbitrap => "MS:1000449",
            Self::LtqOrbitrapXl => "MS:1000556",
            Self::LtqVelos => "MS:1000855",
            Self::TsqVantage => "MS:1001510",
            Self::LtqOrbitrapVelos => "MS:1001742",
            Self::QExactive => "MS:1001911",
            Self::OrbitrapFusion => "MS:1002416",
            Self::Unknown => "MS:1000031",
        }
    }

    /// The model's full CV term.
    pub fn cv_term(self) -> CvTerm {
        let name = match self {
            Self::Ltq => "LTQ",
            Self::LtqOrbitrap => "LTQ Orbitrap",
            Self::LtqOrbitrapXl => "LTQ Orbitrap XL",
            Self::LtqVelos => "LTQ Velos",
            Self::TsqVantage => "TSQ Vantage",
            Self::LtqOrbitrapVelos => "LTQ Orbitrap Velos",
            Self::QExactive => "Q Exactive",
            Self::OrbitrapFusion => "Orbitrap Fusion",
            Self::Unknown => "instrument model",
        };
        CvTerm::new(self.accession(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_models_win_over_prefixes() {
        assert_eq!(
            InstrumentModel::from_model_name("LTQ Orbitrap XL"),
            InstrumentModel::LtqOrbitrapXl
        );
        assert_eq!(
            InstrumentModel::from_model_name("LTQ Orbitrap Velos"),
            InstrumentModel::LtqOrbitrapVelos
        );
        assert_eq!(
            InstrumentModel::from_model_name("LTQ Orbitrap"),
            InstrumentModel::LtqOrbitrap
        );
        assert_eq!(InstrumentModel::from_model_name("LTQ"), InstrumentModel::Ltq);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            InstrumentModel::from_model_name("q exactive plus"),
            InstrumentModel::QExactive
        );
        assert_eq!(
            InstrumentModel::from_model_name("orbitrap fusion lumos"),
            InstrumentModel::OrbitrapFusion
        );
    }

    #[test]
    fn unrecognized_model_maps_to_generic_term() {
        let model = InstrumentModel::from_model_name("Synapt G2");
        assert_eq!(model, InstrumentModel::Unknown);
        assert_eq!(model.accession(), "MS:1000031");
    }

    #[test]
    fn accession_round_trip() {
        for model in [
            InstrumentModel::Ltq,
            InstrumentModel::TsqVantage,
            InstrumentModel::QExactive,
            InstrumentModel::OrbitrapFusion,
        ] {
            assert_eq!(InstrumentModel::from_accession(model.accession()), model);
        }
    }

    #[test]
    fn cv_term_display() {
        let term = InstrumentModel::LtqVelos.cv_term();
        assert_eq!(term.to_string(), "[MS:1000855: LTQ Velos]");
    }
}
