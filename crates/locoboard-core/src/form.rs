use serde::{Deserialize, Serialize};

use crate::{Dropdown, NewLocationInput, Weekday};

/// Raw add-location form submission.
///
/// Field names match the page markup (`zip`, `open`, `close`). Day checkboxes
/// submit under their day key (`mon`..`sun`) and are simply absent when
/// unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationForm {
    pub latitude: String,
    pub longitude: String,
    pub city: String,
    pub address: String,
    pub zip: String,
    pub open: String,
    pub close: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun: Option<String>,
}

impl LocationForm {
    fn checkbox(&self, day: Weekday) -> Option<&str> {
        match day {
            Weekday::Mon => self.mon.as_deref(),
            Weekday::Tue => self.tue.as_deref(),
            Weekday::Wed => self.wed.as_deref(),
            Weekday::Thu => self.thu.as_deref(),
            Weekday::Fri => self.fri.as_deref(),
            Weekday::Sat => self.sat.as_deref(),
            Weekday::Sun => self.sun.as_deref(),
        }
    }

    fn checkbox_mut(&mut self, day: Weekday) -> &mut Option<String> {
        match day {
            Weekday::Mon => &mut self.mon,
            Weekday::Tue => &mut self.tue,
            Weekday::Wed => &mut self.wed,
            Weekday::Thu => &mut self.thu,
            Weekday::Fri => &mut self.fri,
            Weekday::Sat => &mut self.sat,
            Weekday::Sun => &mut self.sun,
        }
    }

    #[must_use]
    pub fn is_checked(&self, day: Weekday) -> bool {
        self.checkbox(day).is_some()
    }

    /// Marks the given days as checked, leaving the others untouched.
    pub fn check_days(&mut self, days: &[Weekday]) {
        for day in days {
            *self.checkbox_mut(*day) = Some(day.label().to_string());
        }
    }

    /// The day dropdown as this submission left it.
    #[must_use]
    pub fn day_dropdown(&self) -> Dropdown {
        let mut dropdown = Dropdown::weekdays();
        for day in Weekday::ALL {
            if self.is_checked(day) {
                dropdown.set_checked(day.key(), true);
            }
        }
        dropdown
    }

    /// Composes the API payload. `days` comes from the dropdown checkboxes in
    /// panel order.
    #[must_use]
    pub fn to_input(&self) -> NewLocationInput {
        let mut days = [false; 7];
        for (slot, checked) in days.iter_mut().zip(self.day_dropdown().days()) {
            *slot = checked;
        }

        NewLocationInput {
            latitude: self.latitude.clone(),
            longitude: self.longitude.clone(),
            city: self.city.clone(),
            address: self.address.clone(),
            zipcode: self.zip.clone(),
            days,
            open_time: self.open.clone(),
            close_time: self.close.clone(),
        }
    }
}
