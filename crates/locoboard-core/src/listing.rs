//! HTML for the `loco` container.
//!
//! The list is rendered in one pass into a string. All record values go
//! through askama's HTML escaping.

use askama::Template;

use crate::LocationRecord;

#[derive(Template)]
#[template(path = "location_list.html")]
struct LocationList<'a> {
    locations: &'a [LocationRecord],
}

/// One `locoBlock` per record, or the "No locations found." message when
/// there are none.
///
/// # Errors
///
/// Returns the askama error if the template fails to render.
pub fn render_location_list(locations: &[LocationRecord]) -> Result<String, askama::Error> {
    LocationList { locations }.render()
}
