use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Extension, Form,
};
use locoboard_client::ClientError;
use locoboard_core::{LocationForm, Visibility};

use crate::middleware::RequestId;
use crate::render::LocationPage;

use super::{html_response, load_locations, AppState, LOCATION_PATH};

/// `POST /location`: submits the form to the location API.
///
/// Success redirects back to the page (a full reload). Any failure re-renders
/// the page with the error shown and the submitted values still in the form.
pub(super) async fn submit_location(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Form(form): Form<LocationForm>,
) -> Response {
    let input = form.to_input();

    match state.client.add(&input).await {
        Ok(()) => {
            tracing::info!(
                request_id = %req_id.0,
                city = %input.city,
                zipcode = %input.zipcode,
                "location added"
            );
            Redirect::to(LOCATION_PATH).into_response()
        }
        Err(err) => {
            let status = if err.is_network() {
                tracing::error!(request_id = %req_id.0, error = %err, "location API unreachable");
                StatusCode::BAD_GATEWAY
            } else {
                tracing::warn!(request_id = %req_id.0, error = %err, "location API refused new location");
                StatusCode::UNPROCESSABLE_ENTITY
            };

            let locations = load_locations(&state, &req_id).await;
            let mut dropdown = form.day_dropdown();
            if !dropdown.selected().is_empty() {
                dropdown.show();
            }

            html_response(
                status,
                LocationPage::new(&locations, &form, &dropdown, Visibility::Shown)
                    .map(|page| page.with_submit_error(submit_error_message(&err))),
            )
        }
    }
}

fn submit_error_message(err: &ClientError) -> String {
    match err {
        ClientError::Rejected { message } => format!("Location was not added: {message}"),
        ClientError::Deserialize { .. } => {
            "Location was not added: the location service sent an unexpected response.".to_string()
        }
        ClientError::Http(_)
        | ClientError::UnexpectedStatus { .. }
        | ClientError::InvalidBaseUrl { .. } => {
            "Location was not added: the location service could not be reached. Please try again."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_is_passed_through() {
        let err = ClientError::Rejected {
            message: "duplicate address".to_string(),
        };
        assert_eq!(
            submit_error_message(&err),
            "Location was not added: duplicate address"
        );
    }

    #[test]
    fn status_failure_reads_as_unreachable() {
        let err = ClientError::UnexpectedStatus {
            status: 500,
            url: "http://api/api/location/add".to_string(),
        };
        assert!(submit_error_message(&err).contains("could not be reached"));
    }
}
