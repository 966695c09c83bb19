// Unit tests for Matchday Dashboard

use matchday_dashboard::core::{
    format_confidence, format_prediction, format_recommendation, format_score, render, Container,
    ItemBlock, EMPTY_PLACEHOLDER,
};
use matchday_dashboard::models::{
    PredictionItem, PredictionsDocument, QuestionPresetDocument, RecommendationItem, ScoreItem,
    ScoresDocument, RECOMMENDED_BETS_ID,
};
use matchday_dashboard::routes::render_page;
use matchday_dashboard::{Dashboard, SectionStatus};

fn prediction(home: &str, away: &str, confidence: Option<f64>) -> PredictionItem {
    PredictionItem {
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        competition: Some("PL".to_string()),
        prediction: Some("Draw".to_string()),
        confidence,
        utc_date: None,
        probabilities: None,
    }
}

#[test]
fn test_confidence_formatting() {
    assert_eq!(format_confidence(Some(0.873)), "87.3%");
    assert_eq!(format_confidence(None), "N/A");
    assert_eq!(format_confidence(Some(1.0)), "100.0%");
}

#[test]
fn test_render_one_block_per_item_in_order() {
    let items = vec![
        prediction("A", "B", Some(0.5)),
        prediction("C", "D", None),
        prediction("E", "F", Some(0.9)),
    ];

    let mut container = Container::new("predictions");
    render(&mut container, Some(items.as_slice()), format_prediction);

    let titles: Vec<_> = container.blocks().iter().map(|b| b.title.clone()).collect();
    assert_eq!(titles, vec!["A vs B", "C vs D", "E vs F"]);
    assert_eq!(container.blocks()[1].meta, "PL • Draw • N/A");
}

#[test]
fn test_render_placeholder_for_missing_sequence() {
    let document: PredictionsDocument = serde_json::from_str("{}").unwrap();

    let mut container = Container::new("predictions");
    render(&mut container, Some(&[prediction("A", "B", None)][..]), format_prediction);
    render(&mut container, document.predictions.as_deref(), format_prediction);

    assert_eq!(container.placeholder(), Some(EMPTY_PLACEHOLDER));
    assert!(container.blocks().is_empty());
}

#[test]
fn test_end_to_end_prediction_document() {
    let document: PredictionsDocument = serde_json::from_str(
        r#"{"predictions":[{"home_team":"A","away_team":"B","competition":"X","prediction":"A win","confidence":0.6}]}"#,
    )
    .unwrap();

    let mut container = Container::new("predictions");
    render(&mut container, document.predictions.as_deref(), format_prediction);

    assert_eq!(
        container.blocks(),
        &[ItemBlock::new("A vs B", "X • A win • 60.0%")]
    );
}

#[test]
fn test_end_to_end_scores_document() {
    let document: ScoresDocument = serde_json::from_str(
        r#"{"scores":[{"home_team":"A","away_team":"B","league":"L"}]}"#,
    )
    .unwrap();

    let mut container = Container::new("scores");
    render(&mut container, document.scores.as_deref(), format_score);

    assert_eq!(container.blocks(), &[ItemBlock::new("A  -  B", "L • ")]);
}

#[test]
fn test_scores_from_upstream_api_shape() {
    let item: ScoreItem = serde_json::from_str(
        r#"{"league":"English Premier League","home_team":"Arsenal","away_team":"Chelsea",
            "home_score":"2","away_score":"1","time":"15:00:00","date":"2026-10-18"}"#,
    )
    .unwrap();

    let block = format_score(&item);
    assert_eq!(block.title, "Arsenal 2 - 1 Chelsea");
    assert_eq!(block.meta, "English Premier League • 2026-10-18 15:00:00");
}

#[test]
fn test_recommendation_from_preset_document() {
    let document: QuestionPresetDocument = serde_json::from_str(
        r#"{"questions":[{"id":"recommended_bets_today","items":[
            {"match":"No high-confidence picks yet.","competition":null,"prediction":null,"confidence":null}
        ]}]}"#,
    )
    .unwrap();

    let question = document.question(RECOMMENDED_BETS_ID).unwrap().unwrap();
    let items = question.items.as_deref().unwrap();

    assert_eq!(
        format_recommendation(&items[0]),
        ItemBlock::new("No high-confidence picks yet.", " •  • N/A")
    );
}

#[test]
fn test_markup_in_feed_is_escaped() {
    let item = RecommendationItem {
        match_name: Some("<script>alert(1)</script>".to_string()),
        competition: Some("PL".to_string()),
        prediction: Some("Win".to_string()),
        confidence: Some(0.7),
    };

    let html = format_recommendation(&item).to_html().unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn test_page_renders_unavailable_sections() {
    // Nothing listens on the discard port, so every branch fails
    let loader = matchday_dashboard::FeedLoader::new("http://127.0.0.1:9/", None).unwrap();
    let dashboard = Dashboard::init(&loader, &Default::default()).await;

    for section in dashboard.sections() {
        assert_eq!(section.status, SectionStatus::Unavailable);
    }

    let html = render_page(&dashboard).unwrap();
    assert!(html.contains("<div id=\"recommended-bets\"><p>Recommended picks are unavailable.</p></div>"));
    assert!(html.contains("<div id=\"predictions\"><p>Predictions are unavailable.</p></div>"));
    assert!(html.contains("<div id=\"scores\"><p>Scores are unavailable.</p></div>"));
}
