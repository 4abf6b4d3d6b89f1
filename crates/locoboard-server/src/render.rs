//! HTML rendering for the location page.
//!
//! The location list is rendered once by `render_location_list` and placed in
//! the `loco` container as is.

use askama::Template;
use locoboard_core::{render_location_list, Dropdown, LocationForm, LocationRecord, Visibility};

use crate::web::{DROPDOWN_PATH, LOCATION_PATH};

#[derive(Template)]
#[template(path = "location.html")]
pub struct LocationPage<'a> {
    listing: String,
    load_error: Option<String>,
    submit_error: Option<String>,
    form: &'a LocationForm,
    dropdown: &'a Dropdown,
    add_form: Visibility,
    add_toggle_href: &'static str,
    dropdown_action: &'static str,
}

impl<'a> LocationPage<'a> {
    /// Builds the page. `locations` is either the fetched records or the
    /// message to show in their place.
    pub fn new(
        locations: &Result<Vec<LocationRecord>, String>,
        form: &'a LocationForm,
        dropdown: &'a Dropdown,
        add_form: Visibility,
    ) -> Result<Self, askama::Error> {
        let (listing, load_error) = match locations {
            Ok(records) => (render_location_list(records)?, None),
            Err(message) => (String::new(), Some(message.clone())),
        };

        Ok(Self {
            listing,
            load_error,
            submit_error: None,
            form,
            dropdown,
            add_form,
            add_toggle_href: add_toggle_href(add_form),
            dropdown_action: DROPDOWN_PATH,
        })
    }

    #[must_use]
    pub fn with_submit_error(mut self, message: impl Into<String>) -> Self {
        self.submit_error = Some(message.into());
        self
    }
}

/// The add button flips the form's visibility by linking to the other state.
fn add_toggle_href(add_form: Visibility) -> &'static str {
    if add_form.is_shown() {
        LOCATION_PATH
    } else {
        "/location?add=1"
    }
}

/// Renders the page as it looks on first load with one sample record, for
/// checking the markup against the DOM contract at startup.
pub fn sample_page() -> Result<String, askama::Error> {
    let sample = LocationRecord {
        id: "0".to_string(),
        city: "Sample".to_string(),
        mon: true,
        ..LocationRecord::default()
    };
    let form = LocationForm::default();
    let dropdown = form.day_dropdown();
    LocationPage::new(&Ok(vec![sample]), &form, &dropdown, Visibility::Hidden)?.render()
}
