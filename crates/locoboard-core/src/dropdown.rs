//! Checkbox dropdown widget state.
//!
//! One [`Dropdown`] models one widget instance: a toggle button, a panel
//! holding checkboxes, and the button label that mirrors the selection. The
//! selection is never stored separately; every change rescans the checkboxes
//! in panel order.

use crate::Weekday;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// A checkbox inside the dropdown panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    /// Form field name the checkbox submits under.
    pub name: String,
    /// Checkbox value; this is what the button label shows.
    pub value: String,
    pub checked: bool,
}

impl DropdownOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    button_id: String,
    panel_id: String,
    panel: Visibility,
    options: Vec<DropdownOption>,
    label: String,
}

impl Dropdown {
    pub const DEFAULT_BUTTON_ID: &'static str = "dropBtn";
    pub const DEFAULT_PANEL_ID: &'static str = "dropdown-content";

    /// Builds a dropdown with the panel hidden. The label reflects whatever
    /// options start out checked.
    pub fn new(
        button_id: impl Into<String>,
        panel_id: impl Into<String>,
        options: Vec<DropdownOption>,
    ) -> Self {
        let mut dropdown = Self {
            button_id: button_id.into(),
            panel_id: panel_id.into(),
            panel: Visibility::Hidden,
            options,
            label: String::new(),
        };
        dropdown.rescan();
        dropdown
    }

    /// The Mon..Sun day picker used by the add-location form.
    #[must_use]
    pub fn weekdays() -> Self {
        let options = Weekday::ALL
            .into_iter()
            .map(|day| DropdownOption::new(day.key(), day.label()))
            .collect();
        Self::new(Self::DEFAULT_BUTTON_ID, Self::DEFAULT_PANEL_ID, options)
    }

    #[must_use]
    pub fn button_id(&self) -> &str {
        &self.button_id
    }

    #[must_use]
    pub fn panel_id(&self) -> &str {
        &self.panel_id
    }

    #[must_use]
    pub fn options(&self) -> &[DropdownOption] {
        &self.options
    }

    #[must_use]
    pub fn panel(&self) -> Visibility {
        self.panel
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.panel.is_shown()
    }

    /// Flips panel visibility and returns the new state. Only this widget's
    /// panel is affected.
    pub fn toggle(&mut self) -> Visibility {
        self.panel = self.panel.toggled();
        self.panel
    }

    pub fn show(&mut self) {
        self.panel = Visibility::Shown;
    }

    /// Sets the checkbox whose name or value matches `key`, then rescans.
    /// Returns `false` when no checkbox matches.
    pub fn set_checked(&mut self, key: &str, checked: bool) -> bool {
        let Some(option) = self
            .options
            .iter_mut()
            .find(|o| o.name == key || o.value == key)
        else {
            return false;
        };
        option.checked = checked;
        self.rescan();
        true
    }

    /// Checked values in panel order.
    #[must_use]
    pub fn selected(&self) -> Vec<&str> {
        self.options
            .iter()
            .filter(|o| o.checked)
            .map(|o| o.value.as_str())
            .collect()
    }

    /// Button text: the checked values joined by `", "`, empty when nothing
    /// is checked.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Checked state of every checkbox in panel order.
    #[must_use]
    pub fn days(&self) -> Vec<bool> {
        self.options.iter().map(|o| o.checked).collect()
    }

    fn rescan(&mut self) {
        self.label = self.selected().join(", ");
    }
}
