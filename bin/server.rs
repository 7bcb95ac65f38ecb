// WEE Site - Web Server
// Serves the four page compositions plus a small JSON API over the roster

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use wee_site::{build_roster, pages, photos_dir, AssetIndex, Route, YearGroup};

/// Everything the server needs, rendered once at startup. All inputs are
/// resolved at build time, so there is nothing to refresh per request.
struct Site {
    roster: Vec<YearGroup>,
    event_images: Vec<String>,
    home: String,
    board: String,
    events: String,
    resources: String,
}

impl Site {
    fn build(index: &AssetIndex) -> Self {
        let roster = build_roster(index);
        Self {
            home: pages::render(Route::Home, index, &roster),
            board: pages::render(Route::Board, index, &roster),
            events: pages::render(Route::Events, index, &roster),
            resources: pages::render(Route::Resources, index, &roster),
            event_images: index
                .event_images()
                .iter()
                .map(|image| image.href.clone())
                .collect(),
            roster,
        }
    }
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    site: Arc<Site>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    fn err(data: T, message: &str) -> Self {
        Self {
            success: false,
            data,
            error: Some(message.to_string()),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/roster - Full roster, ordered as rendered
async fn get_roster(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.site.roster.clone()))
}

/// GET /api/roster/:year - One year group by its (possibly URL-encoded) token
async fn get_roster_year(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> impl IntoResponse {
    let decoded_year = urlencoding::decode(&year)
        .unwrap_or_else(|_| year.clone().into())
        .into_owned();

    match state.site.roster.iter().find(|g| g.year == decoded_year) {
        Some(group) => (StatusCode::OK, Json(ApiResponse::ok(Some(group.clone())))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::err(
                None::<YearGroup>,
                &format!("No board year: {}", decoded_year),
            )),
        )
            .into_response(),
    }
}

/// GET /api/events/images - Event photo hrefs, carousel order
async fn get_event_images(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.site.event_images.clone()))
}

// ============================================================================
// Page Handlers
// ============================================================================

async fn serve_home(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.site.home.clone())
}

async fn serve_board(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.site.board.clone())
}

async fn serve_events(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.site.events.clone())
}

async fn serve_resources(State(state): State<AppState>) -> impl IntoResponse {
    Html(state.site.resources.clone())
}

/// Any path outside the route table
async fn serve_not_found(uri: Uri) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(pages::render_not_found(uri.path())))
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 WEE Site - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let root = photos_dir();
    let index = match AssetIndex::scan(&root) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("❌ Failed to scan photo root {:?}: {}", root, e);
            std::process::exit(1);
        }
    };
    println!("✓ Scanned {:?}: {} images", root, index.image_count());

    let site = Site::build(&index);
    println!("✓ Rendered {} roster years", site.roster.len());

    // Create shared state
    let state = AppState {
        site: Arc::new(site),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/roster", get(get_roster))
        .route("/roster/:year", get(get_roster_year))
        .route("/events/images", get(get_event_images))
        .with_state(state.clone());

    // Build main router
    let app = Router::new()
        .route("/", get(serve_home))
        .route("/board", get(serve_board))
        .route("/events", get(serve_events))
        .route("/resources", get(serve_resources))
        .nest("/api", api_routes)
        .nest_service("/photos", ServeDir::new(root))
        .fallback(serve_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   Pages: /  /board  /events  /resources");
    println!("   API:   http://localhost:3000/api/roster");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
