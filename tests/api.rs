//! HTTP integration tests
//!
//! Each test runs the full router on a random port against its own
//! temporary database.

use reqwest::StatusCode;
use serde_json::{json, Value};
use tempfile::TempDir;

use nutricalc::api::{router, AppState};
use nutricalc::db;
use nutricalc::services::StatusTracker;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _dir: TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let db_path = dir.path().join("nutricalc.db");
        let database = db::open(&db_path).expect("failed to open test database");
        let state = AppState::new(database, StatusTracker::new(db_path));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind to random port");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, router(state))
                .await
                .expect("server error");
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        (status, response.json().await.expect("invalid JSON response"))
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed");
        let status = response.status();
        (status, response.json().await.expect("invalid JSON response"))
    }

    async fn graphql(&self, query: &str) -> Value {
        let (status, body) = self.post("/graphql", json!({ "query": query })).await;
        assert_eq!(status, StatusCode::OK);
        body
    }
}

fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 0.01)
        .unwrap_or(false)
}

fn sample_metrics() -> Value {
    json!({
        "age": 30,
        "weight": 70,
        "height": 175,
        "gender": "male",
        "activityLevel": "sedentary"
    })
}

// ============================================================================
// Health metrics
// ============================================================================

#[tokio::test]
async fn test_post_health_metrics() {
    let server = TestServer::start().await;

    let (status, body) = server.post("/api/health-metrics", sample_metrics()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["bmi"], 22.86));
    assert!(approx(&body["bmr"], 1648.75));
    assert!(approx(&body["tdee"], 1978.5));
    assert_eq!(body["gender"], "male");
    assert_eq!(body["activityLevel"], "sedentary");
    assert!(body["id"].is_i64());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_post_health_metrics_accepts_form_strings() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post(
            "/api/health-metrics",
            json!({
                "age": "30",
                "weight": "70",
                "height": "175",
                "gender": "female",
                "activityLevel": "lightly active"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age"], 30);
    assert!(approx(&body["bmr"], 1482.75));
    assert!(approx(&body["tdee"], 1482.75 * 1.375));
}

#[tokio::test]
async fn test_unknown_activity_level_uses_default_multiplier() {
    let server = TestServer::start().await;

    let mut input = sample_metrics();
    input["activityLevel"] = json!("Olympian");
    let (status, body) = server.post("/api/health-metrics", input).await;

    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["tdee"], 1648.75 * 1.2));
    assert_eq!(body["activityLevel"], "Olympian");
}

#[tokio::test]
async fn test_get_health_metrics_returns_posted_records_verbatim() {
    let server = TestServer::start().await;

    let (_, empty) = server.get("/api/health-metrics").await;
    assert_eq!(empty, json!([]));

    let mut posted = Vec::new();
    for age in [25, 35, 45] {
        let mut input = sample_metrics();
        input["age"] = json!(age);
        let (status, body) = server.post("/api/health-metrics", input).await;
        assert_eq!(status, StatusCode::OK);
        posted.push(body);
    }

    let (status, listed) = server.get("/api/health-metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, Value::Array(posted));
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_missing_field_is_rejected_and_not_stored() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post(
            "/api/health-metrics",
            json!({ "age": 30, "height": 175, "gender": "male", "activityLevel": "sedentary" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("weight"));

    let (_, listed) = server.get("/api/health-metrics").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_wrong_type_is_rejected() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/api/macronutrients", json!({ "tdee": "lots" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = server
        .post("/api/activity-level", json!({ "activityLevel": 3 }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_finite_string_is_rejected() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/api/ideal-weight", json!({ "height": "NaN", "gender": "male" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("height"));

    let (status, body) = server
        .post("/api/macronutrients", json!({ "tdee": "inf" }))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"].as_str().unwrap().contains("tdee"));

    let (_, listed) = server.get("/api/macronutrients").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_zero_weight_and_height_is_rejected_and_not_stored() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post(
            "/api/health-metrics",
            json!({
                "age": 30,
                "weight": 0,
                "height": 0,
                "gender": "male",
                "activityLevel": "sedentary"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("bmi"));

    let (status, listed) = server.get("/api/health-metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_graphql_zero_height_reports_validation_error() {
    let server = TestServer::start().await;

    let body = server
        .graphql(
            r#"{ healthMetrics(age: 30, weight: 70, height: 0, gender: "male", activityLevel: "sedentary") { bmi bmr } }"#,
        )
        .await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION");
    assert!(body["data"].is_null());

    let (_, listed) = server.get("/api/health-metrics").await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let server = TestServer::start().await;

    let response = server
        .client
        .post(server.url("/api/macronutrients"))
        .header("content-type", "application/json")
        .body("{\"tdee\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Macronutrients, ideal weight, activity level
// ============================================================================

#[tokio::test]
async fn test_post_macronutrients() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/api/macronutrients", json!({ "tdee": 2000 }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["tdee"], 2000.0));
    assert!(approx(&body["protein"], 150.0));
    assert!(approx(&body["carbs"], 200.0));
    assert!(approx(&body["fats"], 66.67));

    let (_, listed) = server.get("/api/macronutrients").await;
    assert_eq!(listed, json!([body]));
}

#[tokio::test]
async fn test_post_ideal_weight() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/api/ideal-weight", json!({ "height": 175, "gender": "female" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert!(approx(&body["minWeight"], 66.2));
    assert!(approx(&body["maxWeight"], 77.2));
    assert_eq!(body["gender"], "female");

    let (_, male) = server
        .post("/api/ideal-weight", json!({ "height": 175, "gender": "MALE" }))
        .await;
    let width = male["maxWeight"].as_f64().unwrap() - male["minWeight"].as_f64().unwrap();
    assert!((width - 12.0).abs() < 1e-9);

    let (_, listed) = server.get("/api/ideal-weight").await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_post_activity_level() {
    let server = TestServer::start().await;

    let (status, body) = server
        .post("/api/activity-level", json!({ "activityLevel": "Very Active" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["classification"],
        "Very Active (hard exercise/sports 6-7 days a week)"
    );

    let (_, unknown) = server
        .post("/api/activity-level", json!({ "activityLevel": "gardening" }))
        .await;
    assert_eq!(unknown["classification"], "Unknown Activity Level");

    let (_, listed) = server.get("/api/activity-level").await;
    assert_eq!(listed, json!([body, unknown]));
}

#[tokio::test]
async fn test_activity_level_only_ignores_case() {
    let server = TestServer::start().await;

    let (_, upper) = server
        .post("/api/activity-level", json!({ "activityLevel": "LIGHTLY ACTIVE" }))
        .await;
    assert_eq!(
        upper["classification"],
        "Lightly Active (light exercise/sports 1-3 days/week)"
    );

    for raw in ["lightly_active", "very-active", " sedentary "] {
        let (status, body) = server
            .post("/api/activity-level", json!({ "activityLevel": raw }))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["classification"], "Unknown Activity Level");
        assert_eq!(body["activityLevel"], raw);
    }

    let mut metrics = sample_metrics();
    metrics["activityLevel"] = json!("very_active");
    let (_, body) = server.post("/api/health-metrics", metrics).await;
    assert!(approx(&body["tdee"], 1648.75 * 1.2));
}

// ============================================================================
// GraphQL
// ============================================================================

#[tokio::test]
async fn test_graphql_query_persists_like_rest() {
    let server = TestServer::start().await;

    let body = server
        .graphql(r#"{ macronutrients(tdee: 2000) { protein carbs fats } }"#)
        .await;
    assert!(approx(&body["data"]["macronutrients"]["protein"], 150.0));

    let (_, listed) = server.get("/api/macronutrients").await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_graphql_create_mutation_stores_supplied_values() {
    let server = TestServer::start().await;

    let body = server
        .graphql(
            r#"mutation { createMacronutrients(tdee: 1000, protein: 10, carbs: 20, fats: 30) { id fats } }"#,
        )
        .await;
    assert!(approx(&body["data"]["createMacronutrients"]["fats"], 30.0));

    let (_, listed) = server.get("/api/macronutrients").await;
    assert!(approx(&listed[0]["protein"], 10.0));

    let body = server.graphql("{ getMacronutrients { tdee } }").await;
    assert!(approx(&body["data"]["getMacronutrients"][0]["tdee"], 1000.0));
}

#[tokio::test]
async fn test_graphql_sees_rest_records() {
    let server = TestServer::start().await;
    server.post("/api/health-metrics", sample_metrics()).await;

    let body = server
        .graphql("{ getHealthMetrics { age gender activityLevel bmr } }")
        .await;
    assert_eq!(
        body["data"]["getHealthMetrics"],
        json!([{ "age": 30, "gender": "male", "activityLevel": "sedentary", "bmr": 1648.75 }])
    );
}

#[tokio::test]
async fn test_graphql_missing_argument_reports_error() {
    let server = TestServer::start().await;

    let (_, body) = server
        .post(
            "/graphql",
            json!({ "query": "{ idealWeight(height: 170) { minWeight } }" }),
        )
        .await;
    assert!(body["errors"].as_array().map(|e| !e.is_empty()).unwrap_or(false));

    let (_, listed) = server.get("/api/ideal-weight").await;
    assert_eq!(listed, json!([]));
}

// ============================================================================
// Status and UI
// ============================================================================

#[tokio::test]
async fn test_status_reports_record_counts() {
    let server = TestServer::start().await;
    server.post("/api/health-metrics", sample_metrics()).await;
    server.post("/api/macronutrients", json!({ "tdee": 2000 })).await;
    server.post("/api/macronutrients", json!({ "tdee": 2500 })).await;

    let (status, body) = server.get("/api/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "nutricalc");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["buildNumber"].is_u64());
    assert!(body["buildTimestamp"].is_string());
    assert!(body.get("build").is_none());
    assert_eq!(
        body["records"],
        json!({
            "healthMetrics": 1,
            "macronutrients": 2,
            "idealWeights": 0,
            "activityClassifications": 0
        })
    );
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_ui_pages_are_served() {
    let server = TestServer::start().await;

    for path in ["/", "/records"] {
        let response = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        assert!(response.text().await.unwrap().contains("Nutrient Intake Calculator"));
    }
}
