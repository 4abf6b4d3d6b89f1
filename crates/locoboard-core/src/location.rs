use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::Weekday;

/// Summary shown for a location with no open days.
pub const NOT_OPEN_MESSAGE: &str = "Not opened to public";

/// A location as returned by `GET /api/location/getAll`.
///
/// Text fields are kept as display strings; the API sends some of them
/// (identifier, coordinates) as JSON numbers. A day flag counts as open only
/// when its value is exactly `1`; anything else, including a missing field,
/// means closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    #[serde(rename = "sId", default, deserialize_with = "display_string")]
    pub id: String,
    #[serde(default, deserialize_with = "display_string")]
    pub city: String,
    #[serde(default, deserialize_with = "display_string")]
    pub address: String,
    #[serde(default, deserialize_with = "display_string")]
    pub zipcode: String,
    #[serde(default, deserialize_with = "display_string")]
    pub latitude: String,
    #[serde(default, deserialize_with = "display_string")]
    pub longitude: String,
    #[serde(default, deserialize_with = "display_string")]
    pub open_time: String,
    #[serde(default, deserialize_with = "display_string")]
    pub close_time: String,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub mon: bool,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub tue: bool,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub wed: bool,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub thu: bool,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub fri: bool,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub sat: bool,
    #[serde(default, deserialize_with = "day_flag", serialize_with = "flag_as_int")]
    pub sun: bool,
}

impl LocationRecord {
    #[must_use]
    pub fn is_open_on(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.mon,
            Weekday::Tue => self.tue,
            Weekday::Wed => self.wed,
            Weekday::Thu => self.thu,
            Weekday::Fri => self.fri,
            Weekday::Sat => self.sat,
            Weekday::Sun => self.sun,
        }
    }

    /// Open days in Monday-first order.
    #[must_use]
    pub fn open_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.is_open_on(*day))
            .collect()
    }

    /// Human-readable open-days summary, e.g. `"Mon, Wed"`.
    #[must_use]
    pub fn open_days_summary(&self) -> String {
        format_open_days(&self.open_days())
    }
}

/// Joins day labels with `", "` in Monday-first order, or returns
/// [`NOT_OPEN_MESSAGE`] when `days` is empty.
#[must_use]
pub fn format_open_days(days: &[Weekday]) -> String {
    let mut sorted = days.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    if sorted.is_empty() {
        return NOT_OPEN_MESSAGE.to_string();
    }

    sorted
        .iter()
        .map(|day| day.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Payload for `POST /api/location/add`.
///
/// `days` is positional: index 0 is Monday, index 6 is Sunday. No day names
/// travel with the payload, so the API must use the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocationInput {
    pub latitude: String,
    pub longitude: String,
    pub city: String,
    pub address: String,
    pub zipcode: String,
    pub days: [bool; 7],
    pub open_time: String,
    pub close_time: String,
}

impl NewLocationInput {
    #[must_use]
    pub fn open_days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.days[day.index()])
            .collect()
    }
}

fn display_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn day_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    #[allow(clippy::float_cmp)]
    let open = value.as_f64() == Some(1.0);
    Ok(open)
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn flag_as_int<S>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*flag))
}

#[cfg(test)]
#[path = "location_test.rs"]
mod tests;
