use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    Extension,
};
use locoboard_core::{LocationForm, Visibility};
use serde::Deserialize;

use crate::middleware::RequestId;
use crate::render::LocationPage;

use super::{html_response, load_locations, AppState};

#[derive(Debug, Default, Deserialize)]
pub(super) struct PageParams {
    add: Option<String>,
}

impl PageParams {
    fn add_form(&self) -> Visibility {
        match self.add.as_deref() {
            Some("1" | "true") => Visibility::Shown,
            _ => Visibility::Hidden,
        }
    }
}

/// `GET /location`: fetches the records once and renders the whole page.
pub(super) async fn show_location_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PageParams>,
) -> Response {
    let locations = load_locations(&state, &req_id).await;
    let status = if locations.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    let form = LocationForm::default();
    let dropdown = form.day_dropdown();
    html_response(
        status,
        LocationPage::new(&locations, &form, &dropdown, params.add_form()),
    )
}
