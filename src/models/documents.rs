use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of the preset question whose items feed the recommended picks
pub const RECOMMENDED_BETS_ID: &str = "recommended_bets_today";

/// Whole-number floats below this print without a fractional part
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// `preset_questions.json`
///
/// Questions stay untyped until one is picked: siblings of the entry being
/// rendered may carry any item shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPresetDocument {
    pub questions: Vec<Value>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

impl QuestionPresetDocument {
    /// Find a preset question by its identifier and type it
    ///
    /// `Ok(None)` when no entry carries `id`; an error when the matching
    /// entry itself is malformed.
    pub fn question(&self, id: &str) -> Result<Option<PresetQuestion>, serde_json::Error> {
        self.questions
            .iter()
            .find(|q| q.get("id").and_then(Value::as_str) == Some(id))
            .map(PresetQuestion::deserialize)
            .transpose()
    }
}

/// A canned question with its pre-computed answer items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetQuestion {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "skip_malformed")]
    pub items: Option<Vec<RecommendationItem>>,
}

/// A recommended pick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(rename = "match", default)]
    pub match_name: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// `predictions.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionsDocument {
    #[serde(default, deserialize_with = "skip_malformed")]
    pub predictions: Option<Vec<PredictionItem>>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// Model prediction for an upcoming fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionItem {
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub utc_date: Option<String>,
    #[serde(default)]
    pub probabilities: Option<BTreeMap<String, f64>>,
}

/// `scores.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresDocument {
    #[serde(default, deserialize_with = "skip_malformed")]
    pub scores: Option<Vec<ScoreItem>>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// A fixture result (or a fixture still to be played)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreItem {
    #[serde(default)]
    pub home_team: Option<String>,
    #[serde(default)]
    pub away_team: Option<String>,
    #[serde(default)]
    pub home_score: Option<ScoreValue>,
    #[serde(default)]
    pub away_score: Option<ScoreValue>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Goals as published: the upstream scores API sends numeric strings,
/// hand-written feeds send numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreValue::Number(n) => {
                if n.is_f64() {
                    // 2.0 prints as "2"
                    match n.as_f64() {
                        Some(v) if v.fract() == 0.0 && v.abs() < MAX_EXACT_INTEGER => {
                            write!(f, "{}", v as i64)
                        }
                        _ => write!(f, "{}", n),
                    }
                } else {
                    write!(f, "{}", n)
                }
            }
            ScoreValue::Text(s) => f.write_str(s),
        }
    }
}

/// Drop records that do not fit the item type instead of failing the feed
///
/// The list itself must still be an array (or null/absent).
fn skip_malformed<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let records: Option<Vec<Value>> = Option::deserialize(deserializer)?;

    Ok(records.map(|records| {
        records
            .into_iter()
            .filter_map(|record| match serde_json::from_value(record) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!("Skipping malformed feed record: {}", e);
                    None
                }
            })
            .collect()
    }))
}
