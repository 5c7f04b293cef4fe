use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::dashboard::{
    BackgroundColor, ChartSlot, ControlId, ControlValues, DashboardLayout, Figures,
};
use tower_http::services::ServeDir;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::{http_cache, log_requests, state::*, ServerConfig};

const INDEX_HTML: &str = include_str!("../../frontend/index.html");

#[derive(Deserialize, Debug)]
struct UpdateBody {
    pub values: ControlValues,
    pub changed: ControlId,
}

#[derive(Serialize)]
struct UpdateResponse {
    figures: Figures,
}

/// Overrides for a single chart, anything missing keeps its initial value.
#[derive(Deserialize, Debug, Default)]
struct ChartQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub color: Option<BackgroundColor>,
    pub year: Option<i32>,
}

impl ChartQuery {
    fn apply(&self, values: &mut ControlValues) {
        if let Some(start) = self.start {
            values.date_range.start = start;
        }
        if let Some(end) = self.end {
            values.date_range.end = end;
        }
        if let Some(color) = self.color {
            values.line_color = color;
        }
        if let Some(year) = self.year {
            values.songs_year = year;
            values.artists_year = year;
            values.mode_year = year;
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_layout(State(dashboard): State<SharedDashboard>) -> Json<DashboardLayout> {
    Json(dashboard.layout())
}

async fn post_update(
    State(dashboard): State<SharedDashboard>,
    Json(body): Json<UpdateBody>,
) -> Json<UpdateResponse> {
    debug!("post_update() called with {:?}", body);
    Json(UpdateResponse {
        figures: dashboard.update(&body.values, body.changed),
    })
}

async fn get_chart(
    State(dashboard): State<SharedDashboard>,
    Path(slot): Path<String>,
    Query(query): Query<ChartQuery>,
) -> Response {
    let slot = match ChartSlot::from_id(&slot) {
        Some(slot) => slot,
        None => return StatusCode::NOT_FOUND.into_response(),
    };
    let mut values = dashboard.initial_values();
    query.apply(&mut values);
    Json(dashboard.evaluate(slot, &values)).into_response()
}

pub fn make_app(config: ServerConfig, dashboard: SharedDashboard) -> Result<Router> {
    let state = ServerState {
        config: config.clone(),
        dashboard,
    };

    let dashboard_routes: Router = Router::new()
        .route("/layout", get(get_layout))
        .route("/update", post(post_update))
        .route("/chart/{slot}", get(get_chart))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(index)).layer(middleware::from_fn_with_state(
            config.page_cache_age_sec,
            http_cache,
        )),
    };

    let app: Router = home_router
        .nest("/v1/dashboard", dashboard_routes)
        .layer(middleware::from_fn_with_state(state, log_requests));

    Ok(app)
}

pub async fn run_server(config: ServerConfig, dashboard: SharedDashboard) -> Result<()> {
    let address = format!("{}:{}", config.host, config.port);
    let app = make_app(config, dashboard)?;

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("Ready to serve at http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Dashboard, DEFAULT_YEAR};
    use crate::dataset::{Dataset, Mode, SongRecord};
    use crate::server::RequestsLoggingLevel;
    use axum::{body::Body, http::Request};
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    fn make_test_app(config: ServerConfig) -> Router {
        let records = vec![
            SongRecord::new("Blinding Lights", "The Weeknd", 2020, 1, 1, Some(500), Some(Mode::Major)),
            SongRecord::new("Flowers", "Miley Cyrus", 2023, 1, 12, Some(800), Some(Mode::Minor)),
        ]
        .into_iter()
        .flatten()
        .collect();
        let dashboard = Dashboard::new(Arc::new(Dataset::from_records(records)), DEFAULT_YEAR);
        make_app(config, Arc::new(dashboard)).unwrap()
    }

    fn test_config() -> ServerConfig {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            page_cache_age_sec: 60,
            ..Default::default()
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn serves_page_with_cache_header() {
        let app = make_test_app(test_config());
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["cache-control"], "max-age=60");
    }

    #[tokio::test]
    async fn responds_not_found_on_unknown_slot() {
        let app = make_test_app(test_config());
        let request = Request::builder()
            .uri("/v1/dashboard/chart/nope")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn chart_query_overrides_year() {
        let app = make_test_app(test_config());
        let request = Request::builder()
            .uri("/v1/dashboard/chart/top_songs?year=2023")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let figure = body_json(response).await;
        assert_eq!(figure["data"][0]["x"][0], "Flowers");
    }

    #[tokio::test]
    async fn update_returns_only_bound_figures() {
        let app = make_test_app(test_config());
        let body = serde_json::json!({
            "values": {
                "date_range": { "start": "2020-01-01", "end": "2023-12-31" },
                "line_color": "black",
                "songs_year": 2020,
                "artists_year": 2020,
                "mode_year": 1990
            },
            "changed": "mode_year"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/v1/dashboard/update")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let figures = json["figures"].as_object().unwrap();
        assert_eq!(figures.len(), 1);
        assert!(figures["mode_distribution"]["data"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn rejects_malformed_update() {
        let app = make_test_app(test_config());
        let request = Request::builder()
            .method("POST")
            .uri("/v1/dashboard/update")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"changed": "volume"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }
}
