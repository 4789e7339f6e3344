use std::sync::Arc;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::config::{NumericField, Variant};
use crate::data::filter::Selection;
use crate::view::{Dashboard, View};

/// Handler state: the read-only dashboard.
pub type AppState = Arc<Dashboard>;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rows: usize,
    pub variant: Variant,
}

/// Initial widget contents.
#[derive(Debug, Serialize, Deserialize)]
pub struct OptionsResponse {
    pub placenames: Vec<String>,
    pub years: Vec<i32>,
    pub types: Vec<String>,
    pub numeric_inputs: Vec<NumericField>,
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/options", get(get_options))
        .route("/api/years", post(year_options))
        .route("/api/render", post(render))
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rows: state.dataset.len(),
        variant: state.variant,
    })
}

async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let options = &state.options;
    Json(OptionsResponse {
        placenames: options.placenames.clone(),
        years: options.years.clone(),
        types: options.types.clone(),
        numeric_inputs: state.variant.numeric_fields().to_vec(),
    })
}

/// Year options for the placenames of a selection; other fields are ignored.
async fn year_options(
    State(state): State<AppState>,
    Json(selection): Json<Selection>,
) -> Json<Vec<i32>> {
    Json(state.year_options(&selection))
}

async fn render(State(state): State<AppState>, Json(selection): Json<Selection>) -> Json<View> {
    Json(state.render(&selection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::data::model::testing::{row, sample};
    use crate::data::model::{Dataset, TypeColumn};

    fn server(variant: Variant) -> TestServer {
        TestServer::new(create_router(Dashboard::new(sample(), variant))).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let server = server(Variant::Full);
        let response = server.get("/health").await;
        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.rows, 3);
        assert_eq!(body.variant, Variant::Full);
    }

    #[tokio::test]
    async fn test_options_per_variant() {
        let body: OptionsResponse = server(Variant::Full).get("/api/options").await.json();
        assert_eq!(body.placenames, ["Perth", "Sydney"]);
        assert!(body.years.is_empty());
        assert_eq!(body.types, ["city"]);
        assert_eq!(body.numeric_inputs.len(), 4);

        let body: OptionsResponse = server(Variant::Normalized).get("/api/options").await.json();
        assert_eq!(body.years, [2000, 2001]);
        assert_eq!(body.types.last().map(String::as_str), Some("others"));
        assert_eq!(
            body.numeric_inputs,
            [NumericField::MinCountTotal, NumericField::MaxCountTotal]
        );
    }

    #[tokio::test]
    async fn test_years_follow_placenames() {
        let server = server(Variant::Full);
        let years: Vec<i32> = server
            .post("/api/years")
            .json(&json!({ "placenames": ["Perth"] }))
            .await
            .json();
        assert_eq!(years, [2000]);

        let years: Vec<i32> = server.post("/api/years").json(&json!({})).await.json();
        assert!(years.is_empty());
    }

    #[tokio::test]
    async fn test_years_for_placename_with_comma() {
        let ds = Dataset::new(
            vec![
                row("Washington, D.C.", 1999, "city", 4, 4),
                row("Perth", 2000, "city", 2, 2),
            ],
            TypeColumn::Type,
        );
        let server = TestServer::new(create_router(Dashboard::new(ds, Variant::Full))).unwrap();
        let years: Vec<i32> = server
            .post("/api/years")
            .json(&json!({ "placenames": ["Washington, D.C."] }))
            .await
            .json();
        assert_eq!(years, [1999]);
    }

    #[tokio::test]
    async fn test_render_min_count() {
        let server = server(Variant::Full);
        let response = server
            .post("/api/render")
            .json(&json!({ "minCountTotal": 300 }))
            .await;
        response.assert_status(StatusCode::OK);

        let body: Value = response.json();
        let rows = body["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["placename"], "Sydney");
        assert_eq!(rows[0]["year"], 2000);
        assert_eq!(rows[1]["year"], 2001);
        assert_eq!(body["figure"]["categories"], json!(["Sydney"]));
        assert_eq!(body["figure"]["tick_angle"], -45);
        assert_eq!(
            body["figure"]["series"][0]["segments"][0]["hover"],
            "Placename: Sydney\nYear: 2000\nCount Year: 50\nTotal Count: 500"
        );
    }

    #[tokio::test]
    async fn test_render_nonsense_bounds_is_empty_chart() {
        let server = server(Variant::Full);
        let body: Value = server
            .post("/api/render")
            .json(&json!({ "minCountTotal": 900, "maxCountTotal": 1 }))
            .await
            .json();
        assert!(body["rows"].as_array().unwrap().is_empty());
        assert!(body["figure"]["series"].as_array().unwrap().is_empty());
    }
}
