use crate::core::{Dashboard, FeedPaths, Section};
use crate::models::{DashboardResponse, ErrorResponse, HealthResponse, SectionResponse};
use crate::services::FeedLoader;
use crate::views::{DashboardPage, PageSection};
use actix_web::{web, HttpResponse, Responder};
use askama::Template;
use std::sync::Arc;

/// Page title
pub const PAGE_TITLE: &str = "Matchday Picks";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<FeedLoader>,
    pub paths: FeedPaths,
}

/// Configure page and API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(dashboard_page)).service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .route("/dashboard", web::get().to(dashboard_json)),
    );
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rendered dashboard page
///
/// GET /
async fn dashboard_page(state: web::Data<AppState>) -> impl Responder {
    let dashboard = Dashboard::init(&state.loader, &state.paths).await;

    match render_page(&dashboard) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => template_error(e),
    }
}

/// Rendered sections as JSON
///
/// GET /api/v1/dashboard
async fn dashboard_json(state: web::Data<AppState>) -> impl Responder {
    let dashboard = Dashboard::init(&state.loader, &state.paths).await;

    let sections = dashboard
        .sections()
        .into_iter()
        .map(|section| -> Result<SectionResponse, askama::Error> {
            Ok(SectionResponse {
                id: section.container.id().to_string(),
                status: section.status.as_str().to_string(),
                items: section.status.items(),
                generated_at: section.generated_at.clone(),
                html: section.container.to_html()?,
            })
        })
        .collect::<Result<Vec<_>, _>>();

    match sections {
        Ok(sections) => HttpResponse::Ok().json(DashboardResponse { sections }),
        Err(e) => template_error(e),
    }
}

/// Fill the page template with the three containers
pub fn render_page(dashboard: &Dashboard) -> Result<String, askama::Error> {
    let sections = [
        ("Recommended picks", &dashboard.recommended),
        ("Predictions", &dashboard.predictions),
        ("Scores", &dashboard.scores),
    ]
    .into_iter()
    .map(|(heading, section)| page_section(heading, section))
    .collect::<Result<Vec<_>, _>>()?;

    DashboardPage {
        title: PAGE_TITLE.to_string(),
        sections,
    }
    .render()
}

fn page_section(heading: &str, section: &Section) -> Result<PageSection, askama::Error> {
    Ok(PageSection {
        id: section.container.id().to_string(),
        heading: heading.to_string(),
        updated: section.generated_at.clone().unwrap_or_default(),
        html: section.container.to_html()?,
    })
}

fn template_error(e: askama::Error) -> HttpResponse {
    tracing::error!("Failed to render dashboard: {}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Template error".to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}
