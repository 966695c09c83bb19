use crate::core::formatters::{format_prediction, format_recommendation, format_score};
use crate::core::render::{render, Container};
use crate::models::{
    PredictionsDocument, QuestionPresetDocument, ScoresDocument, RECOMMENDED_BETS_ID,
};
use crate::services::{FeedError, FeedLoader};

pub const RECOMMENDED_CONTAINER_ID: &str = "recommended-bets";
pub const PREDICTIONS_CONTAINER_ID: &str = "predictions";
pub const SCORES_CONTAINER_ID: &str = "scores";

pub const RECOMMENDED_UNAVAILABLE: &str = "Recommended picks are unavailable.";
pub const PREDICTIONS_UNAVAILABLE: &str = "Predictions are unavailable.";
pub const SCORES_UNAVAILABLE: &str = "Scores are unavailable.";

/// Where each feed is published, relative to the loader's base URL
#[derive(Debug, Clone)]
pub struct FeedPaths {
    pub preset_questions: String,
    pub predictions: String,
    pub scores: String,
}

impl Default for FeedPaths {
    fn default() -> Self {
        Self {
            preset_questions: "./data/preset_questions.json".to_string(),
            predictions: "./data/predictions.json".to_string(),
            scores: "./data/scores.json".to_string(),
        }
    }
}

/// Outcome of one branch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    Rendered { items: usize },
    Empty,
    Unavailable,
}

impl SectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::Rendered { .. } => "rendered",
            SectionStatus::Empty => "empty",
            SectionStatus::Unavailable => "unavailable",
        }
    }

    pub fn items(&self) -> usize {
        match self {
            SectionStatus::Rendered { items } => *items,
            _ => 0,
        }
    }
}

/// A rendered container plus what happened while filling it
#[derive(Debug, Clone)]
pub struct Section {
    pub container: Container,
    pub status: SectionStatus,
    pub generated_at: Option<String>,
}

/// The three containers of the page after initialization
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub recommended: Section,
    pub predictions: Section,
    pub scores: Section,
}

impl Dashboard {
    /// Load all three feeds concurrently and render each into its container
    ///
    /// Never fails: a branch that cannot load or interpret its feed shows its
    /// own fallback text and leaves the other two untouched.
    pub async fn init(loader: &FeedLoader, paths: &FeedPaths) -> Self {
        let (recommended, predictions, scores) = tokio::join!(
            recommended_branch(loader, &paths.preset_questions),
            predictions_branch(loader, &paths.predictions),
            scores_branch(loader, &paths.scores),
        );

        Self {
            recommended,
            predictions,
            scores,
        }
    }

    /// Sections in page order
    pub fn sections(&self) -> [&Section; 3] {
        [&self.recommended, &self.predictions, &self.scores]
    }
}

async fn recommended_branch(loader: &FeedLoader, path: &str) -> Section {
    let mut container = Container::new(RECOMMENDED_CONTAINER_ID);

    let result = async {
        let preset: QuestionPresetDocument = loader.load_document(path).await?;
        let question = preset
            .question(RECOMMENDED_BETS_ID)
            .map_err(|e| FeedError::Shape(format!("{}: {}", path, e)))?
            .ok_or_else(|| {
                FeedError::Shape(format!("{}: no question with id {}", path, RECOMMENDED_BETS_ID))
            })?;

        render(&mut container, question.items.as_deref(), format_recommendation);
        Ok::<_, FeedError>(preset.generated_at)
    }
    .await;

    settle(container, result, path, RECOMMENDED_UNAVAILABLE)
}

async fn predictions_branch(loader: &FeedLoader, path: &str) -> Section {
    let mut container = Container::new(PREDICTIONS_CONTAINER_ID);

    let result = async {
        let document: PredictionsDocument = loader.load_document(path).await?;
        render(&mut container, document.predictions.as_deref(), format_prediction);
        Ok::<_, FeedError>(document.generated_at)
    }
    .await;

    settle(container, result, path, PREDICTIONS_UNAVAILABLE)
}

async fn scores_branch(loader: &FeedLoader, path: &str) -> Section {
    let mut container = Container::new(SCORES_CONTAINER_ID);

    let result = async {
        let document: ScoresDocument = loader.load_document(path).await?;
        render(&mut container, document.scores.as_deref(), format_score);
        Ok::<_, FeedError>(document.generated_at)
    }
    .await;

    settle(container, result, path, SCORES_UNAVAILABLE)
}

/// Close a branch: keep the rendered container, or swap in the fallback text
fn settle(
    mut container: Container,
    result: Result<Option<String>, FeedError>,
    path: &str,
    fallback: &str,
) -> Section {
    match result {
        Ok(generated_at) => {
            let items = container.blocks().len();
            let status = if items == 0 {
                SectionStatus::Empty
            } else {
                SectionStatus::Rendered { items }
            };

            tracing::debug!("Rendered {} ({} items) from {}", container.id(), items, path);

            Section {
                container,
                status,
                generated_at,
            }
        }
        Err(e) => {
            tracing::warn!("Section {} unavailable: {}", container.id(), e);
            container.set_placeholder(fallback);

            Section {
                container,
                status: SectionStatus::Unavailable,
                generated_at: None,
            }
        }
    }
}
