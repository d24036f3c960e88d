//! Token data model
//!
//! The records a run produces. Field order and camelCase keys are part of
//! the output format that dashboards read, so both are fixed here.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Market-theme label attached to each token
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NarrativeMomentum {
    #[serde(rename = "AI Integration")]
    AiIntegration,
    #[serde(rename = "DeFi 2.0")]
    DeFi2,
    #[serde(rename = "Gaming Guild")]
    GamingGuild,
    #[serde(rename = "RWA Tokenization")]
    RwaTokenization,
    #[serde(rename = "Privacy Layer")]
    PrivacyLayer,
}

impl NarrativeMomentum {
    /// Every label, in display order
    pub const ALL: [NarrativeMomentum; 5] = [
        NarrativeMomentum::AiIntegration,
        NarrativeMomentum::DeFi2,
        NarrativeMomentum::GamingGuild,
        NarrativeMomentum::RwaTokenization,
        NarrativeMomentum::PrivacyLayer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NarrativeMomentum::AiIntegration => "AI Integration",
            NarrativeMomentum::DeFi2 => "DeFi 2.0",
            NarrativeMomentum::GamingGuild => "Gaming Guild",
            NarrativeMomentum::RwaTokenization => "RWA Tokenization",
            NarrativeMomentum::PrivacyLayer => "Privacy Layer",
        }
    }
}

impl fmt::Display for NarrativeMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One historical sample in a token's chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    /// `"MM:00"` minute offset label
    pub time: String,
    pub velocity: f64,
}

/// Snapshot of one mocked token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// `0x` + 40 lowercase hex chars
    pub contract: String,
    pub belief_velocity: f64,
    pub velocity_delta: f64,
    pub reflexivity_score: f64,
    pub social_volume: u32,
    pub sentiment_score: f64,
    pub narrative_momentum: NarrativeMomentum,
    /// `"<N>s ago"`
    pub last_update: String,
    /// Oldest first
    pub chart_data: Vec<ChartPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TokenRecord {
        TokenRecord {
            id: "py_1".to_string(),
            name: "PythonToken1".to_string(),
            symbol: "PYT1".to_string(),
            contract: format!("0x{}", "ab".repeat(20)),
            belief_velocity: 64.2,
            velocity_delta: -3.5,
            reflexivity_score: 0.41,
            social_volume: 12000,
            sentiment_score: 0.88,
            narrative_momentum: NarrativeMomentum::DeFi2,
            last_update: "12s ago".to_string(),
            chart_data: vec![ChartPoint {
                time: "00:00".to_string(),
                velocity: 64.2,
            }],
        }
    }

    #[test]
    fn test_narrative_labels_serialize() {
        for narrative in NarrativeMomentum::ALL {
            let json = serde_json::to_string(&narrative).unwrap();
            assert_eq!(json, format!("\"{}\"", narrative.label()));
        }
    }

    #[test]
    fn test_narrative_labels_parse() {
        let parsed: NarrativeMomentum = serde_json::from_str("\"RWA Tokenization\"").unwrap();
        assert_eq!(parsed, NarrativeMomentum::RwaTokenization);
        assert!(serde_json::from_str::<NarrativeMomentum>("\"Meme Coins\"").is_err());
    }

    #[test]
    fn test_record_field_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let keys = [
            "\"id\"",
            "\"name\"",
            "\"symbol\"",
            "\"contract\"",
            "\"beliefVelocity\"",
            "\"velocityDelta\"",
            "\"reflexivityScore\"",
            "\"socialVolume\"",
            "\"sentimentScore\"",
            "\"narrativeMomentum\"",
            "\"lastUpdate\"",
            "\"chartData\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn test_record_roundtrip_preserves_shape() {
        let record = sample();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["narrativeMomentum"], "DeFi 2.0");
        assert_eq!(value["chartData"][0]["time"], "00:00");

        let back: TokenRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
