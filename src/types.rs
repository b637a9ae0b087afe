use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// One scraped dashboard table row. Numeric fields are already normalized;
/// the position code is kept verbatim so unknown codes survive into the
/// export unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlayerRow {
    pub name: String,
    pub position: String,
    pub total_points: f64,
    pub avg_points: f64,
    pub market_value: f64,
    pub trend: f64,
}

/// A player with derived ratios, KES and recommendation attached. Created
/// once by enrichment, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPlayer {
    pub name: String,
    pub position: String,
    pub total_points: f64,
    pub avg_points: f64,
    pub market_value: f64,
    pub trend: f64,
    pub trend_ratio: f64,
    pub euro_per_point: f64,
    pub value_efficiency: f64,
    pub kes: f64,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Watch,
    Sell,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::Hold => write!(f, "Hold"),
            Recommendation::Watch => write!(f, "Watch"),
            Recommendation::Sell => write!(f, "Sell"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid credentials '{0}'. Expected the form 'email:password'")]
pub struct CredentialsParseError(String);

/// Login credentials for a dashboard, supplied as one opaque
/// `email:password` string.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl FromStr for Credentials {
    type Err = CredentialsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((email, password)) if !email.is_empty() && !password.is_empty() => {
                Ok(Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                })
            }
            _ => Err(CredentialsParseError(s.to_string())),
        }
    }
}
