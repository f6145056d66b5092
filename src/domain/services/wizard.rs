use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::models::service::Service;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    SelectService,
    SelectDate,
    SelectTime,
    ClientInfo,
    Confirm,
}

impl WizardStep {
    pub fn all() -> Vec<WizardStep> {
        vec![
            WizardStep::SelectService,
            WizardStep::SelectDate,
            WizardStep::SelectTime,
            WizardStep::ClientInfo,
            WizardStep::Confirm,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub selected_category: Option<String>,
    pub selected_service: Option<Service>,
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<String>,
    pub client: ClientInfo,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Advance {
    Moved,
    Blocked,
    // Last enabled step with its guard passing; run the commit instead.
    Submit,
}

pub struct BookingWizard {
    steps: Vec<WizardStep>,
    current: usize,
    draft: BookingDraft,
    completed: bool,
}

impl BookingWizard {
    pub fn new(enabled_steps: Vec<WizardStep>) -> Self {
        // An empty step list falls back to the full flow.
        let steps = if enabled_steps.is_empty() {
            WizardStep::all()
        } else {
            enabled_steps
        };
        Self {
            steps,
            current: 0,
            draft: BookingDraft::default(),
            completed: false,
        }
    }

    pub fn with_all_steps() -> Self {
        Self::new(WizardStep::all())
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // Phone and notes are never required.
    pub fn is_current_step_complete(&self) -> bool {
        match self.current_step() {
            WizardStep::SelectService => self.draft.selected_service.is_some(),
            WizardStep::SelectDate => self.draft.selected_date.is_some(),
            WizardStep::SelectTime => self.draft.selected_time.is_some(),
            WizardStep::ClientInfo => {
                !self.draft.client.first_name.trim().is_empty()
                    && !self.draft.client.last_name.trim().is_empty()
                    && !self.draft.client.email.trim().is_empty()
            }
            WizardStep::Confirm => true,
        }
    }

    pub fn next(&mut self) -> Advance {
        if !self.is_current_step_complete() {
            return Advance::Blocked;
        }
        if self.current + 1 >= self.steps.len() {
            return Advance::Submit;
        }
        self.current += 1;
        Advance::Moved
    }

    pub fn prev(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn start_over(&mut self) {
        self.draft = BookingDraft::default();
        self.current = 0;
        self.completed = false;
    }

    pub fn finish(&mut self) {
        self.completed = true;
    }

    // Slot-taken recovery: clear the stale time and jump back so the
    // customer picks again.
    pub fn return_to_time_selection(&mut self) {
        self.draft.selected_time = None;
        self.current = self
            .steps
            .iter()
            .position(|s| *s == WizardStep::SelectTime)
            .unwrap_or(0);
    }

    pub fn set_category(&mut self, category_id: Option<String>) {
        if self.draft.selected_category != category_id {
            self.draft.selected_service = None;
        }
        self.draft.selected_category = category_id;
    }

    pub fn set_service(&mut self, service: Service) {
        self.draft.selected_service = Some(service);
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        // A new date invalidates the previously picked time.
        if self.draft.selected_date != Some(date) {
            self.draft.selected_time = None;
        }
        self.draft.selected_date = Some(date);
    }

    pub fn set_time(&mut self, time: String) {
        self.draft.selected_time = Some(time);
    }

    pub fn set_client(&mut self, client: ClientInfo) {
        self.draft.client = client;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::service::{NewServiceParams, Service};

    fn consultation() -> Service {
        Service::new(NewServiceParams {
            business_id: "biz1".into(),
            category_id: None,
            name: "Consultation".into(),
            duration_min: 30,
            price_cents: 5000,
            capacity: 1,
            options: vec![],
        })
    }

    fn filled_client() -> ClientInfo {
        ClientInfo {
            first_name: "Jean".into(),
            last_name: "Dupont".into(),
            email: "jean@example.com".into(),
            phone: String::new(),
            notes: String::new(),
        }
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    #[test]
    fn empty_wizard_starts_at_service_selection() {
        let w = BookingWizard::with_all_steps();
        assert_eq!(w.current_step(), WizardStep::SelectService);
        assert_eq!(w.current_index(), 0);
        assert!(!w.is_current_step_complete());
    }

    #[test]
    fn next_is_blocked_until_step_complete() {
        let mut w = BookingWizard::with_all_steps();
        assert_eq!(w.next(), Advance::Blocked);
        assert_eq!(w.current_index(), 0);

        w.set_service(consultation());
        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.current_step(), WizardStep::SelectDate);
    }

    #[test]
    fn client_info_requires_first_last_and_email() {
        let mut w = BookingWizard::new(vec![WizardStep::ClientInfo]);

        let mut client = filled_client();
        client.email = String::new();
        w.set_client(client);
        assert!(!w.is_current_step_complete());

        w.set_client(filled_client());
        assert!(w.is_current_step_complete());
    }

    #[test]
    fn whitespace_only_fields_do_not_count() {
        let mut w = BookingWizard::new(vec![WizardStep::ClientInfo]);
        let mut client = filled_client();
        client.first_name = "   ".into();
        w.set_client(client);
        assert!(!w.is_current_step_complete());
    }

    #[test]
    fn changing_date_resets_selected_time() {
        let mut w = BookingWizard::with_all_steps();
        w.set_date(date(7));
        w.set_time("10:00".into());
        assert_eq!(w.draft().selected_time.as_deref(), Some("10:00"));

        w.set_date(date(8));
        assert_eq!(w.draft().selected_time, None);
    }

    #[test]
    fn setting_same_date_keeps_selected_time() {
        let mut w = BookingWizard::with_all_steps();
        w.set_date(date(7));
        w.set_time("10:00".into());
        w.set_date(date(7));
        assert_eq!(w.draft().selected_time.as_deref(), Some("10:00"));
    }

    #[test]
    fn changing_category_resets_selected_service() {
        let mut w = BookingWizard::with_all_steps();
        w.set_category(Some("hair".into()));
        w.set_service(consultation());
        w.set_category(Some("massage".into()));
        assert!(w.draft().selected_service.is_none());
    }

    #[test]
    fn blocked_next_on_last_step_does_not_submit() {
        let mut w = BookingWizard::new(vec![WizardStep::ClientInfo]);
        assert_eq!(w.next(), Advance::Blocked);
        assert_eq!(w.current_index(), 0);
    }

    #[test]
    fn last_step_with_passing_guard_signals_submit() {
        let mut w = BookingWizard::with_all_steps();
        w.set_service(consultation());
        w.set_date(date(7));
        w.set_time("10:00".into());
        w.set_client(filled_client());

        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.current_step(), WizardStep::Confirm);
        assert_eq!(w.next(), Advance::Submit);
        // Submit never advances past the end.
        assert_eq!(w.current_step(), WizardStep::Confirm);
    }

    #[test]
    fn prev_is_floored_at_zero() {
        let mut w = BookingWizard::with_all_steps();
        w.prev();
        assert_eq!(w.current_index(), 0);

        w.set_service(consultation());
        w.next();
        w.prev();
        assert_eq!(w.current_index(), 0);
    }

    #[test]
    fn disabled_steps_collapse_the_sequence() {
        let mut w = BookingWizard::new(vec![
            WizardStep::SelectDate,
            WizardStep::SelectTime,
            WizardStep::Confirm,
        ]);
        w.set_date(date(7));
        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.current_step(), WizardStep::SelectTime);
        w.set_time("10:00".into());
        assert_eq!(w.next(), Advance::Moved);
        assert_eq!(w.next(), Advance::Submit);
    }

    #[test]
    fn start_over_resets_everything() {
        let mut w = BookingWizard::with_all_steps();
        w.set_service(consultation());
        w.next();
        w.set_date(date(7));
        w.next();
        w.finish();

        w.start_over();
        assert_eq!(w.current_index(), 0);
        assert!(w.draft().selected_service.is_none());
        assert!(w.draft().selected_date.is_none());
        assert!(!w.is_completed());
        assert_eq!(w.draft().client, ClientInfo::default());
    }

    #[test]
    fn slot_taken_recovery_returns_to_time_selection() {
        let mut w = BookingWizard::with_all_steps();
        w.set_service(consultation());
        w.next();
        w.set_date(date(7));
        w.next();
        w.set_time("10:00".into());
        w.next();
        w.set_client(filled_client());
        w.next();
        assert_eq!(w.current_step(), WizardStep::Confirm);

        w.return_to_time_selection();
        assert_eq!(w.current_step(), WizardStep::SelectTime);
        assert_eq!(w.draft().selected_time, None);
        // The rest of the draft survives.
        assert!(w.draft().selected_service.is_some());
        assert_eq!(w.draft().client, filled_client());
    }
}
