use axum::{extract::State, http::StatusCode, response::Response, Extension, Form};
use locoboard_core::{Dropdown, LocationForm, Visibility};
use serde::Deserialize;

use crate::middleware::RequestId;
use crate::render::LocationPage;

use super::{html_response, load_locations, AppState};

/// The add form as posted by one of the dropdown's own buttons.
#[derive(Debug, Default, Deserialize)]
pub(super) struct DropdownSubmission {
    #[serde(flatten)]
    form: LocationForm,
    /// `toggle` from `#dropBtn`, `apply` from the button inside the panel.
    dropdown: Option<String>,
    /// Panel state when the page was rendered.
    panel: Option<String>,
}

impl DropdownSubmission {
    /// Rebuilds the dropdown from the checked boxes, restores the panel and
    /// applies the requested action.
    fn dropdown(&self) -> Dropdown {
        let mut dropdown = self.form.day_dropdown();
        if self.panel.as_deref() == Some("shown") {
            dropdown.show();
        }
        if self.dropdown.as_deref() == Some("toggle") {
            dropdown.toggle();
        }
        dropdown
    }
}

/// `POST /location/dropdown`: re-renders the page with the dropdown updated.
/// Nothing is sent to the location API.
pub(super) async fn update_dropdown(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Form(submission): Form<DropdownSubmission>,
) -> Response {
    let dropdown = submission.dropdown();
    tracing::debug!(
        request_id = %req_id.0,
        open = dropdown.is_open(),
        days = %dropdown.label(),
        "day dropdown updated"
    );

    let locations = load_locations(&state, &req_id).await;
    let status = if locations.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    html_response(
        status,
        LocationPage::new(&locations, &submission.form, &dropdown, Visibility::Shown),
    )
}
