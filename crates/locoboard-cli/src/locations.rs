//! `list`, `render` and `add` command handlers.

use locoboard_client::LocationApiClient;
use locoboard_core::{render_location_list, LocationForm, LocationRecord, Weekday};

/// Parsed `add` arguments, named after the page's form fields.
#[derive(Debug)]
pub struct AddArgs {
    pub latitude: String,
    pub longitude: String,
    pub city: String,
    pub address: String,
    pub zip: String,
    pub days: Vec<Weekday>,
    pub open: String,
    pub close: String,
}

pub fn build_form(args: AddArgs) -> LocationForm {
    let mut form = LocationForm {
        latitude: args.latitude,
        longitude: args.longitude,
        city: args.city,
        address: args.address,
        zip: args.zip,
        open: args.open,
        close: args.close,
        ..LocationForm::default()
    };
    form.check_days(&args.days);
    form
}

/// One line per location: id, city, address, coordinates, days, hours.
pub fn format_line(location: &LocationRecord) -> String {
    format!(
        "[{}] {} | {}, {} | {}, {} | {} | {} - {}",
        location.id,
        location.city,
        location.address,
        location.zipcode,
        location.latitude,
        location.longitude,
        location.open_days_summary(),
        location.open_time,
        location.close_time,
    )
}

pub async fn run_list(client: &LocationApiClient, json: bool) -> anyhow::Result<()> {
    let locations = client.get_all().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
        return Ok(());
    }

    if locations.is_empty() {
        println!("No locations found.");
        return Ok(());
    }

    for location in &locations {
        println!("{}", format_line(location));
    }
    Ok(())
}

/// Prints the `loco` container markup the location page would show.
pub async fn run_render(client: &LocationApiClient) -> anyhow::Result<()> {
    let locations = client.get_all().await?;
    println!("{}", render_location_list(&locations)?);
    Ok(())
}

pub async fn run_add(client: &LocationApiClient, form: &LocationForm) -> anyhow::Result<()> {
    let input = form.to_input();
    tracing::info!(city = %input.city, days = %form.day_dropdown().label(), "sending location");

    client.add(&input).await?;
    println!("Location added successfully!");
    Ok(())
}
