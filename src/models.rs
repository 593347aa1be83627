use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{OoxError, Result};
use crate::graph::OrderElement;

/// The eight cognitive function codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FunctionCode {
    Ni,
    Ne,
    Ti,
    Te,
    Fi,
    Fe,
    Si,
    Se,
}

impl FunctionCode {
    pub const ALL: [FunctionCode; 8] = [
        FunctionCode::Ni,
        FunctionCode::Ne,
        FunctionCode::Ti,
        FunctionCode::Te,
        FunctionCode::Fi,
        FunctionCode::Fe,
        FunctionCode::Si,
        FunctionCode::Se,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FunctionCode::Ni => "Ni",
            FunctionCode::Ne => "Ne",
            FunctionCode::Ti => "Ti",
            FunctionCode::Te => "Te",
            FunctionCode::Fi => "Fi",
            FunctionCode::Fe => "Fe",
            FunctionCode::Si => "Si",
            FunctionCode::Se => "Se",
        }
    }
}

impl fmt::Display for FunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<&str> for FunctionCode {
    type Error = OoxError;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "Ni" => Ok(FunctionCode::Ni),
            "Ne" => Ok(FunctionCode::Ne),
            "Ti" => Ok(FunctionCode::Ti),
            "Te" => Ok(FunctionCode::Te),
            "Fi" => Ok(FunctionCode::Fi),
            "Fe" => Ok(FunctionCode::Fe),
            "Si" => Ok(FunctionCode::Si),
            "Se" => Ok(FunctionCode::Se),
            _ => Err(OoxError::InvalidFunctionCode(s.to_string())),
        }
    }
}

/// One answered comparison question: the chosen function beat the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub winner: FunctionCode,
    pub loser: FunctionCode,
    /// Correlation token from the question that produced this match.
    /// Carried through untouched; the ordering ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Match {
    pub fn new(winner: FunctionCode, loser: FunctionCode) -> Self {
        Match {
            winner,
            loser,
            id: None,
        }
    }
}

/// Summary grade for how healthily a function is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    #[serde(rename = "O")]
    Healthy,
    #[serde(rename = "o")]
    Strained,
    #[serde(rename = "x")]
    Unhealthy,
}

impl HealthStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "O",
            HealthStatus::Strained => "o",
            HealthStatus::Unhealthy => "x",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hierarchy tier a function can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Dominant,
    High,
    Middle,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Dominant => "Dominant",
            Tier::High => "High",
            Tier::Middle => "Middle",
            Tier::Low => "Low",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Tier {
    type Error = OoxError;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "Dominant" => Ok(Tier::Dominant),
            "High" => Ok(Tier::High),
            "Middle" => Ok(Tier::Middle),
            "Low" => Ok(Tier::Low),
            _ => Err(OoxError::InvalidTier(s.to_string())),
        }
    }
}

/// JSON body accepted by the calculate entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub matches: Vec<Match>,
    #[serde(default)]
    pub health_scores: BTreeMap<FunctionCode, i32>,
}

impl CalculateRequest {
    /// Parse and validate a request document. Unknown function codes or a
    /// malformed shape fail here, before any of it reaches the ordering
    /// pipeline.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Calculation result for one quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub order: Vec<OrderElement<FunctionCode>>,
    pub health: BTreeMap<FunctionCode, HealthStatus>,
}
