use crate::models::{PredictionItem, RecommendationItem, ScoreItem, ScoreValue};
use crate::views::ItemTemplate;
use askama::Template;

/// Separator between metadata fields
pub const META_SEPARATOR: &str = " • ";

/// Typed view-model for one rendered item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBlock {
    pub title: String,
    pub meta: String,
}

impl ItemBlock {
    pub fn new(title: impl Into<String>, meta: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            meta: meta.into(),
        }
    }

    /// Render as an HTML fragment with escaped text
    pub fn to_html(&self) -> Result<String, askama::Error> {
        ItemTemplate {
            title: &self.title,
            meta: &self.meta,
        }
        .render()
    }
}

/// Format a win probability as a percentage with one decimal place
///
/// `None` becomes `"N/A"`.
pub fn format_confidence(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", to_fixed_one(v * 100.0)),
        None => "N/A".to_string(),
    }
}

/// One-decimal fixed notation; exact ties round away from zero
fn to_fixed_one(value: f64) -> String {
    let tenths = value * 10.0;
    let exact = value.mul_add(10.0, -tenths) == 0.0;

    if exact && tenths.fract().abs() == 0.5 {
        format!("{:.1}", tenths.round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

#[inline]
fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[inline]
fn score(value: &Option<ScoreValue>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// Recommended pick: match name, then competition • prediction • confidence
pub fn format_recommendation(item: &RecommendationItem) -> ItemBlock {
    let meta = [
        text(&item.competition).to_string(),
        text(&item.prediction).to_string(),
        format_confidence(item.confidence),
    ]
    .join(META_SEPARATOR);

    ItemBlock::new(text(&item.match_name), meta)
}

/// Prediction: "home vs away", then competition • prediction • confidence
pub fn format_prediction(item: &PredictionItem) -> ItemBlock {
    let title = format!("{} vs {}", text(&item.home_team), text(&item.away_team));
    let meta = [
        text(&item.competition).to_string(),
        text(&item.prediction).to_string(),
        format_confidence(item.confidence),
    ]
    .join(META_SEPARATOR);

    ItemBlock::new(title, meta)
}

/// Score: "home h - a away", then league • date time
///
/// Missing scores render as empty text, never zero.
pub fn format_score(item: &ScoreItem) -> ItemBlock {
    let title = format!(
        "{} {} - {} {}",
        text(&item.home_team),
        score(&item.home_score),
        score(&item.away_score),
        text(&item.away_team)
    );

    let when = [text(&item.date), text(&item.time)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let meta = format!("{}{}{}", text(&item.league), META_SEPARATOR, when);

    ItemBlock::new(title, meta)
}
