// Model exports
pub mod documents;
pub mod responses;

pub use documents::{
    PredictionItem, PredictionsDocument, PresetQuestion, QuestionPresetDocument,
    RecommendationItem, ScoreItem, ScoreValue, ScoresDocument, RECOMMENDED_BETS_ID,
};
pub use responses::{DashboardResponse, ErrorResponse, HealthResponse, SectionResponse};
