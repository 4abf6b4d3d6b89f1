mod add_location;
mod day_dropdown;
mod location_page;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use locoboard_client::LocationApiClient;
use locoboard_core::LocationRecord;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId};
use crate::render::LocationPage;

pub const LOCATION_PATH: &str = "/location";
pub const DROPDOWN_PATH: &str = "/location/dropdown";

#[derive(Clone)]
pub struct AppState {
    pub client: LocationApiClient,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(LOCATION_PATH) }))
        .route(
            LOCATION_PATH,
            get(location_page::show_location_page).post(add_location::submit_location),
        )
        .route(DROPDOWN_PATH, post(day_dropdown::update_dropdown))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Fetches every location, turning a failure into the message shown in the
/// `loco` container. Failures are logged, never swallowed.
pub(super) async fn load_locations(
    state: &AppState,
    req_id: &RequestId,
) -> Result<Vec<LocationRecord>, String> {
    state.client.get_all().await.map_err(|err| {
        tracing::error!(request_id = %req_id.0, error = %err, "failed to load locations");
        if err.is_network() {
            "Could not load locations: the location service could not be reached.".to_string()
        } else {
            "Could not load locations: the location service sent an unexpected response."
                .to_string()
        }
    })
}

pub(super) fn html_response(
    status: StatusCode,
    page: Result<LocationPage<'_>, askama::Error>,
) -> Response {
    match page.and_then(|page| page.render()) {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render location page");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(api: &MockServer) -> Router {
        let client = LocationApiClient::new(&api.uri(), 5, "locoboard-test")
            .expect("client construction should not fail");
        build_app(AppState { client })
    }

    async fn mount_locations(api: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/location/getAll"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(api)
            .await;
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        String::from_utf8(bytes.to_vec()).expect("utf-8 body")
    }

    fn form_post(body: &str) -> Request<Body> {
        form_post_to(LOCATION_PATH, body)
    }

    fn form_post_to(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .expect("request")
    }

    const FORM_BODY: &str = "latitude=25.03&longitude=121.56&city=Taipei&address=Xinyi+Rd\
                             &zip=110&mon=Mon&wed=Wed&open=09%3A00&close=18%3A00";

    #[tokio::test]
    async fn root_redirects_to_location_page() {
        let api = MockServer::start().await;
        let response = test_app(&api)
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], LOCATION_PATH);
    }

    #[tokio::test]
    async fn health_returns_ok_with_request_id() {
        let api = MockServer::start().await;
        let response = test_app(&api)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "req-health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-request-id"], "req-health");
        let json: serde_json::Value =
            serde_json::from_str(&body_string(response).await).expect("json parse");
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["meta"]["request_id"], "req-health");
        assert!(json["meta"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn request_id_is_generated_when_absent() {
        let api = MockServer::start().await;
        let response = test_app(&api)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        let id = response.headers()["x-request-id"]
            .to_str()
            .expect("ascii header");
        assert_eq!(id.len(), 36, "expected a UUID, got {id}");
    }

    #[tokio::test]
    async fn empty_location_list_shows_not_found_message() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;

        let response = test_app(&api)
            .oneshot(Request::builder().uri(LOCATION_PATH).body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("<p>No locations found.</p>"));
        assert!(!html.contains("class=\"locoBlock\""));
    }

    #[tokio::test]
    async fn location_page_renders_one_block_per_record() {
        let api = MockServer::start().await;
        mount_locations(
            &api,
            serde_json::json!([
                { "sId": 1, "city": "Taipei", "mon": 1, "wed": 1 },
                { "sId": 2, "city": "Tainan", "sun": 1 }
            ]),
        )
        .await;

        let response = test_app(&api)
            .oneshot(Request::builder().uri(LOCATION_PATH).body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert_eq!(html.matches("class=\"locoBlock\"").count(), 2);
        assert!(html.contains("data-location-id=\"1\""));
        assert!(html.contains("data-location-id=\"2\""));
        assert!(html.contains("<strong>Open Days:</strong> Mon, Wed"));
        assert!(html.contains("<strong>Open Days:</strong> Sun"));
    }

    #[tokio::test]
    async fn failed_fetch_is_surfaced_on_the_page() {
        let api = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/location/getAll"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&api)
            .await;

        let response = test_app(&api)
            .oneshot(Request::builder().uri(LOCATION_PATH).body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_string(response).await;
        assert!(html.contains("Could not load locations"));
        assert!(!html.contains("No locations found."));
    }

    #[tokio::test]
    async fn add_query_shows_the_form() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;

        let response = test_app(&api)
            .oneshot(
                Request::builder()
                    .uri("/location?add=1")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        let html = body_string(response).await;
        assert!(html.contains("<div id=\"addLocoPlaceholder\">"));
    }

    #[tokio::test]
    async fn successful_submit_reloads_the_page() {
        let api = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/location/add"))
            .and(body_json(serde_json::json!({
                "latitude": "25.03",
                "longitude": "121.56",
                "city": "Taipei",
                "address": "Xinyi Rd",
                "zipcode": "110",
                "days": [true, false, true, false, false, false, false],
                "open_time": "09:00",
                "close_time": "18:00"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
            )
            .expect(1)
            .mount(&api)
            .await;

        let response = test_app(&api)
            .oneshot(form_post(FORM_BODY))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], LOCATION_PATH);
    }

    #[tokio::test]
    async fn rejected_submit_keeps_form_and_shows_message() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;
        Mock::given(method("POST"))
            .and(path("/api/location/add"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({ "success": false, "message": "zipcode already registered" }),
            ))
            .mount(&api)
            .await;

        let response = test_app(&api)
            .oneshot(form_post(FORM_BODY))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.headers().get(header::LOCATION).is_none());
        let html = body_string(response).await;
        assert!(html.contains("Location was not added: zipcode already registered"));
        assert!(html.contains("name=\"city\" value=\"Taipei\""));
        assert!(html.contains("data-dropdown-button>Mon, Wed</button>"));
        assert!(html.contains("<div id=\"addLocoPlaceholder\">"));
    }

    #[tokio::test]
    async fn unreachable_api_on_submit_is_bad_gateway() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;
        Mock::given(method("POST"))
            .and(path("/api/location/add"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&api)
            .await;

        let response = test_app(&api)
            .oneshot(form_post(FORM_BODY))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_string(response).await;
        assert!(html.contains("could not be reached"));
    }

    async fn mount_no_add(api: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/location/add"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(api)
            .await;
    }

    #[tokio::test]
    async fn dropdown_toggle_opens_panel_with_selected_label() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;
        mount_no_add(&api).await;

        let response = test_app(&api)
            .oneshot(form_post_to(
                DROPDOWN_PATH,
                "city=Taipei&mon=Mon&wed=Wed&panel=hidden&dropdown=toggle",
            ))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("id=\"dropBtn\""));
        assert!(html.contains("data-dropdown-button>Mon, Wed</button>"));
        assert!(html.contains("id=\"dropdown-content\" data-dropdown-panel>"));
        assert!(html.contains("name=\"panel\" value=\"shown\""));
        assert!(html.contains("name=\"city\" value=\"Taipei\""));
        assert!(html.contains("<div id=\"addLocoPlaceholder\">"));
    }

    #[tokio::test]
    async fn dropdown_toggle_closes_open_panel() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;
        mount_no_add(&api).await;

        let response = test_app(&api)
            .oneshot(form_post_to(DROPDOWN_PATH, "fri=Fri&panel=shown&dropdown=toggle"))
            .await
            .expect("response");

        let html = body_string(response).await;
        assert!(
            html.contains("id=\"dropdown-content\" class=\"invisible\" data-dropdown-panel>")
        );
        assert!(html.contains("data-dropdown-button>Fri</button>"));
    }

    #[tokio::test]
    async fn dropdown_apply_updates_label_in_panel_order() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;
        mount_no_add(&api).await;

        let response = test_app(&api)
            .oneshot(form_post_to(DROPDOWN_PATH, "sun=Sun&tue=Tue&panel=shown&dropdown=apply"))
            .await
            .expect("response");

        let html = body_string(response).await;
        assert!(html.contains("data-dropdown-button>Tue, Sun</button>"));
        assert!(html.contains("id=\"dropdown-content\" data-dropdown-panel>"));
        assert_eq!(html.matches(" checked>").count(), 2);
    }

    #[tokio::test]
    async fn dropdown_with_nothing_checked_has_empty_label() {
        let api = MockServer::start().await;
        mount_locations(&api, serde_json::json!([])).await;

        let response = test_app(&api)
            .oneshot(form_post_to(DROPDOWN_PATH, "panel=shown&dropdown=apply"))
            .await
            .expect("response");

        let html = body_string(response).await;
        assert!(html.contains("data-dropdown-button></button>"));
    }
}
