use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The allocation method understood by the portfolio optimizer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OptimizationMethod {
    MeanVariance,
    RiskParity,
    BlackLitterman,
    Hrp,
}

impl OptimizationMethod {
    /// The backend's wire name for this method.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMethod::MeanVariance => "mean-variance",
            OptimizationMethod::RiskParity => "risk-parity",
            OptimizationMethod::BlackLitterman => "black-litterman",
            OptimizationMethod::Hrp => "hrp",
        }
    }
}

impl FromStr for OptimizationMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mean-variance" => Ok(OptimizationMethod::MeanVariance),
            "risk-parity" => Ok(OptimizationMethod::RiskParity),
            "black-litterman" => Ok(OptimizationMethod::BlackLitterman),
            "hrp" => Ok(OptimizationMethod::Hrp),
            other => Err(CoreError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for OptimizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a trading signal as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalSide {
    Long,
    Short,
    Flat,
}

impl SignalSide {
    pub fn is_long(&self) -> bool {
        matches!(self, SignalSide::Long)
    }
}

impl FromStr for SignalSide {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LONG" => Ok(SignalSide::Long),
            "SHORT" => Ok(SignalSide::Short),
            "FLAT" => Ok(SignalSide::Flat),
            other => Err(CoreError::UnknownSide(other.to_string())),
        }
    }
}

impl fmt::Display for SignalSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalSide::Long => "LONG",
            SignalSide::Short => "SHORT",
            SignalSide::Flat => "FLAT",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimization_method_round_trips_through_wire_names() {
        for method in [
            OptimizationMethod::MeanVariance,
            OptimizationMethod::RiskParity,
            OptimizationMethod::BlackLitterman,
            OptimizationMethod::Hrp,
        ] {
            let parsed: OptimizationMethod = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn optimization_method_rejects_unknown_names() {
        assert!("markowitz".parse::<OptimizationMethod>().is_err());
    }

    #[test]
    fn signal_side_deserializes_backend_casing() {
        let side: SignalSide = serde_json::from_str("\"LONG\"").unwrap();
        assert!(side.is_long());
    }
}
