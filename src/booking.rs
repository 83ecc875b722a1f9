//! Booking Domain Model
//!
//! Provider catalog, slot table, and the appointment form state machine.
//!
//! This module is plain Rust with no browser or framework dependencies, so
//! the selection and validation transitions can be exercised without a
//! rendering layer. The pages project this state into views and route every
//! mutation through the transition methods below.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};

/// Message shown when a booking succeeds.
pub const BOOKED_MESSAGE: &str = "Appointment booked successfully!";

/// Message shown when a booking is attempted with missing fields.
pub const INCOMPLETE_MESSAGE: &str = "Please fill all the details before booking!";

/// A bookable professional.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Provider {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
}

impl Provider {
    /// Label shown in the provider picker.
    pub fn display_name(&self) -> String {
        format!(
            "Dr. {} {} - {}",
            self.first_name, self.last_name, self.specialization
        )
    }
}

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A transient status message produced by a user action.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            message: message.to_string(),
            severity: Severity::Success,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            message: message.to_string(),
            severity: Severity::Error,
        }
    }
}

/// Immutable provider and slot seed data, injected at construction.
///
/// The catalog is read-only for the lifetime of the page; swapping in a real
/// data source later only means building a `Catalog` from somewhere else.
#[derive(Clone, Debug)]
pub struct Catalog {
    providers: Vec<Provider>,
    slot_table: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new(providers: Vec<Provider>, slot_table: HashMap<String, Vec<String>>) -> Self {
        Self {
            providers,
            slot_table,
        }
    }

    /// The mocked clinic roster and its open time slots.
    pub fn seed() -> Self {
        let providers = vec![
            Provider {
                id: "1".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                specialization: "Cardiologist".to_string(),
            },
            Provider {
                id: "2".to_string(),
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
                specialization: "Dentist".to_string(),
            },
            Provider {
                id: "3".to_string(),
                first_name: "Mark".to_string(),
                last_name: "Taylor".to_string(),
                specialization: "Dermatologist".to_string(),
            },
        ];

        let slot_table = HashMap::from([
            (
                "1".to_string(),
                vec!["09:00".to_string(), "10:30".to_string(), "14:00".to_string()],
            ),
            (
                "2".to_string(),
                vec!["08:00".to_string(), "11:00".to_string(), "15:30".to_string()],
            ),
            (
                "3".to_string(),
                vec!["10:00".to_string(), "12:30".to_string(), "16:00".to_string()],
            ),
        ]);

        Self::new(providers, slot_table)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Open time labels for a provider. Unknown ids resolve to no slots.
    pub fn slots_for(&self, provider_id: &str) -> &[String] {
        self.slot_table
            .get(provider_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The user's in-progress, unsaved booking choices.
///
/// Fields are private so that every mutation goes through a transition
/// method; that is what keeps the "time only valid for its originating
/// provider and date" invariant enforceable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
    provider_id: String,
    date: Option<NaiveDate>,
    time: Option<String>,
    reason: String,
}

impl BookingForm {
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Select a provider. Any previously picked time belonged to another
    /// provider's slot list and is cleared.
    pub fn choose_provider(&mut self, id: &str) {
        self.provider_id = id.to_string();
        self.time = None;
    }

    /// Select (or clear) the appointment date. Clears the picked time.
    pub fn choose_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
        self.time = None;
    }

    /// Slots currently offered to the user: exactly the catalog entry for
    /// the chosen provider once both provider and date are set, else empty.
    /// The date gates visibility only; it never changes the slot content.
    pub fn available_slots<'a>(&self, catalog: &'a Catalog) -> &'a [String] {
        if self.provider_id.is_empty() || self.date.is_none() {
            return &[];
        }
        catalog.slots_for(&self.provider_id)
    }

    /// Pick a time slot. Ignored unless the label is in the currently
    /// displayed slot list, so an out-of-context time can never be picked.
    pub fn choose_time(&mut self, catalog: &Catalog, label: &str) {
        if self.available_slots(catalog).iter().any(|s| s == label) {
            self.time = Some(label.to_string());
        }
    }

    /// Free-form overwrite, no validation on content.
    pub fn set_reason(&mut self, text: &str) {
        self.reason = text.to_string();
    }

    /// Gate for the submit button: provider, date and time only. The reason
    /// is intentionally not checked here even though `submit` rejects an
    /// empty one, so the button can enable while submission still fails.
    /// Known asymmetry, kept on purpose.
    pub fn ready_to_submit(&self) -> bool {
        !self.provider_id.is_empty() && self.date.is_some() && self.time.is_some()
    }

    /// Attempt the booking.
    ///
    /// With any of provider, date, time or reason missing the form is left
    /// untouched and an error notice is produced. Otherwise the form resets
    /// to its initial state and a success notice is produced. No record is
    /// created anywhere; booking is simulated.
    pub fn submit(&mut self) -> Notice {
        if !self.ready_to_submit() || self.reason.is_empty() {
            return Notice::error(INCOMPLETE_MESSAGE);
        }

        *self = Self::default();
        Notice::success(BOOKED_MESSAGE)
    }
}

/// Render an "HH:MM" slot label as 12-hour time ("15:30" -> "3:30 PM").
/// Labels that do not parse as a time are shown verbatim.
pub fn format_slot_12h(label: &str) -> String {
    match NaiveTime::parse_from_str(label, "%H:%M") {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn future_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
    }

    #[test]
    fn seed_catalog_has_three_providers() {
        let catalog = Catalog::seed();
        let ids: Vec<&str> = catalog.providers().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn provider_display_name_format() {
        let catalog = Catalog::seed();
        assert_eq!(
            catalog.providers()[1].display_name(),
            "Dr. Jane Smith - Dentist"
        );
    }

    #[test]
    fn slots_for_unknown_provider_is_empty() {
        let catalog = Catalog::seed();
        assert!(catalog.slots_for("42").is_empty());
        assert!(catalog.slots_for("").is_empty());
    }

    #[test]
    fn no_slots_without_date() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_provider("1");
        assert!(form.available_slots(&catalog).is_empty());
    }

    #[test]
    fn no_slots_without_provider() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_date(Some(future_date()));
        assert!(form.available_slots(&catalog).is_empty());
    }

    #[test]
    fn no_slots_for_unseeded_provider() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_provider("999");
        form.choose_date(Some(future_date()));
        assert!(form.available_slots(&catalog).is_empty());
    }

    #[test]
    fn slots_match_seed_regardless_of_date() {
        let catalog = Catalog::seed();
        for provider in catalog.providers() {
            for day in [1, 15, 28] {
                let mut form = BookingForm::default();
                form.choose_provider(&provider.id);
                form.choose_date(NaiveDate::from_ymd_opt(2031, 3, day));
                assert_eq!(
                    form.available_slots(&catalog),
                    catalog.slots_for(&provider.id)
                );
            }
        }
    }

    #[test]
    fn changing_provider_clears_time() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_provider("1");
        form.choose_date(Some(future_date()));
        form.choose_time(&catalog, "09:00");
        assert_eq!(form.time(), Some("09:00"));

        form.choose_provider("2");
        assert_eq!(form.time(), None);
    }

    #[test]
    fn changing_date_clears_time() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_provider("1");
        form.choose_date(Some(future_date()));
        form.choose_time(&catalog, "10:30");
        assert_eq!(form.time(), Some("10:30"));

        form.choose_date(NaiveDate::from_ymd_opt(2030, 6, 16));
        assert_eq!(form.time(), None);
    }

    #[test]
    fn choose_time_requires_visible_slot() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();

        // Nothing displayed yet: picking is a no-op.
        form.choose_time(&catalog, "09:00");
        assert_eq!(form.time(), None);

        form.choose_provider("1");
        form.choose_date(Some(future_date()));

        // "08:00" belongs to provider 2, not the displayed list.
        form.choose_time(&catalog, "08:00");
        assert_eq!(form.time(), None);

        form.choose_time(&catalog, "14:00");
        assert_eq!(form.time(), Some("14:00"));
    }

    #[test]
    fn ready_to_submit_ignores_reason() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        assert!(!form.ready_to_submit());

        form.choose_provider("3");
        form.choose_date(Some(future_date()));
        form.choose_time(&catalog, "12:30");
        assert!(form.ready_to_submit());
        assert!(form.reason().is_empty());
    }

    #[test]
    fn submit_incomplete_errors_and_keeps_form() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_provider("1");
        form.choose_date(Some(future_date()));
        form.choose_time(&catalog, "09:00");
        // Reason left empty.

        let before = form.clone();
        let notice = form.submit();

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, INCOMPLETE_MESSAGE);
        assert_eq!(form, before);
    }

    #[test]
    fn submit_without_time_errors() {
        let mut form = BookingForm::default();
        form.choose_provider("1");
        form.choose_date(Some(future_date()));
        form.set_reason("Checkup");

        let notice = form.submit();
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.message, INCOMPLETE_MESSAGE);
        assert_eq!(form.reason(), "Checkup");
    }

    #[test]
    fn submit_complete_succeeds_and_resets() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();
        form.choose_provider("2");
        form.choose_date(Some(future_date()));
        form.choose_time(&catalog, "11:00");
        form.set_reason("Toothache");

        let notice = form.submit();

        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, BOOKED_MESSAGE);
        assert_eq!(form, BookingForm::default());
    }

    // The end-to-end flow for Jane Smith (Dentist): pick a slot, fail the
    // guard with no reason, then complete the booking.
    #[test]
    fn dentist_booking_scenario() {
        let catalog = Catalog::seed();
        let mut form = BookingForm::default();

        form.choose_provider("2");
        form.choose_date(Some(future_date()));

        let slots = form.available_slots(&catalog);
        assert_eq!(slots, ["08:00", "11:00", "15:30"]);
        let rendered: Vec<String> = slots.iter().map(|s| format_slot_12h(s)).collect();
        assert_eq!(rendered, ["8:00 AM", "11:00 AM", "3:30 PM"]);

        form.choose_time(&catalog, "11:00");
        let notice = form.submit();
        assert_eq!(notice.severity, Severity::Error);
        // The guard does not reset anything on failure.
        assert_eq!(form.time(), Some("11:00"));
        assert_eq!(form.provider_id(), "2");

        form.set_reason("Checkup");
        let notice = form.submit();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(form.provider_id(), "");
        assert_eq!(form.date(), None);
        assert_eq!(form.time(), None);
        assert_eq!(form.reason(), "");
    }

    #[test]
    fn slot_labels_render_as_12_hour() {
        assert_eq!(format_slot_12h("09:00"), "9:00 AM");
        assert_eq!(format_slot_12h("10:30"), "10:30 AM");
        assert_eq!(format_slot_12h("12:30"), "12:30 PM");
        assert_eq!(format_slot_12h("15:30"), "3:30 PM");
        assert_eq!(format_slot_12h("00:15"), "12:15 AM");
    }

    #[test]
    fn unparseable_slot_labels_pass_through() {
        assert_eq!(format_slot_12h("soonish"), "soonish");
        assert_eq!(format_slot_12h(""), "");
    }
}
