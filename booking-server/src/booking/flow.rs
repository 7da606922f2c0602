//! Booking flow state machine
//!
//! A linear guest flow: `Details → PaymentConfirm → Success`.
//! `PaymentConfirm → Details` is allowed (edit before paying); there is no
//! way back out of Success except [`BookingFlow::reset`].

use serde::{Deserialize, Serialize};
use shared::models::{
    Area, Occasion, ReminderPreference, ReservationDraft, deposit_for,
};

use crate::booking::{payment, webhook};
use crate::core::Config;
use crate::notice::{Notice, NoticeCenter, NoticeKind};
use crate::store::ReservationStore;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_guest_count, validate_optional_text,
    validate_required_text, validate_time,
};
use crate::utils::{AppError, AppResult, time};

/// Where the guest currently is in the linear flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum BookingStep {
    #[default]
    Details,
    PaymentConfirm,
    Success,
}

/// Raw form fields submitted by the guest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub guests: u32,
    #[serde(default)]
    pub occasion: Occasion,
    #[serde(default)]
    pub area: Area,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reminder_preference: Option<ReminderPreference>,
}

impl BookingRequest {
    /// Assemble the store payload once the deposit is fixed
    fn into_draft(self, deposit_amount: u32) -> ReservationDraft {
        ReservationDraft {
            name: self.name,
            phone: self.phone,
            date: self.date,
            time: self.time,
            guests: self.guests,
            occasion: self.occasion,
            area: self.area,
            notes: self.notes.filter(|n| !n.trim().is_empty()),
            deposit_amount,
            reminder_preference: self.reminder_preference,
        }
    }
}

/// Deposit preview shown on the payment-confirmation step
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositQuote {
    pub deposit_amount: u32,
    /// Per-guest package surcharge of the selected area (display only, not
    /// part of the deposit)
    pub area_surcharge: u32,
}

/// Result of a confirmed booking
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub reservation_id: String,
    pub deposit_amount: u32,
    /// Opened by the client in a new tab; never verified server-side
    pub payment_url: String,
}

/// 预订流程状态机
#[derive(Debug, Default)]
pub struct BookingFlow {
    step: BookingStep,
    request: Option<BookingRequest>,
    quote: Option<DepositQuote>,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn quote(&self) -> Option<DepositQuote> {
        self.quote
    }

    /// Details → PaymentConfirm, guarded by required-field validation.
    ///
    /// On failure the flow stays in Details and the error carries the
    /// blocking message.
    pub fn submit_details(&mut self, request: BookingRequest) -> AppResult<DepositQuote> {
        if self.step != BookingStep::Details {
            return Err(AppError::invalid("Booking already past the details step"));
        }

        validate_request(&request)?;

        let quote = DepositQuote {
            deposit_amount: deposit_for(request.guests),
            area_surcharge: request.area.per_guest_surcharge(),
        };
        self.request = Some(request);
        self.quote = Some(quote);
        self.step = BookingStep::PaymentConfirm;
        Ok(quote)
    }

    /// PaymentConfirm → Details (edit before paying).
    ///
    /// A no-op anywhere else; in particular Success never goes backwards.
    pub fn back_to_details(&mut self) {
        if self.step == BookingStep::PaymentConfirm {
            self.step = BookingStep::Details;
            self.quote = None;
        }
    }

    /// Confirm the booking, in order:
    ///
    /// 1. `Store::add` with the assembled reservation (deposit frozen)
    /// 2. best-effort webhook notification (never blocks, never fails this)
    /// 3. build the external payment URL with the deposit appended
    /// 4. transition to Success — regardless of (2) and (3); payment
    ///    completion is never verified by this system
    pub fn confirm(
        &mut self,
        store: &ReservationStore,
        notices: &NoticeCenter,
        config: &Config,
    ) -> AppResult<BookingConfirmation> {
        if self.step != BookingStep::PaymentConfirm {
            return Err(AppError::invalid("Nothing to confirm"));
        }
        let (Some(request), Some(quote)) = (self.request.take(), self.quote.take()) else {
            return Err(AppError::invalid("Nothing to confirm"));
        };

        let guest_name = request.name.clone();
        let reservation_id = store.add(request.into_draft(quote.deposit_amount));

        if let Some(reservation) = store.get(&reservation_id) {
            webhook::spawn_notify(config.webhook_url.clone(), reservation);
        }

        let payment_url = payment::payment_link(&config.payment_base_url, quote.deposit_amount);

        self.step = BookingStep::Success;
        notices.push(Notice::new(
            NoticeKind::Success,
            "Booking received",
            format!(
                "Reservation for {} registered, deposit €{}",
                guest_name, quote.deposit_amount
            ),
        ));

        Ok(BookingConfirmation {
            reservation_id,
            deposit_amount: quote.deposit_amount,
            payment_url,
        })
    }

    /// Clear all flow state and return to Details
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn validate_request(request: &BookingRequest) -> AppResult<()> {
    validate_required_text(&request.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&request.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    let date = time::parse_date(&request.date)?;
    time::validate_not_past(date)?;
    validate_time(&request.time)?;
    validate_guest_count(request.guests)?;
    validate_optional_text(&request.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use shared::models::ReservationStatus;
    use std::sync::Arc;

    fn test_config() -> Config {
        Config {
            work_dir: "unused".into(),
            http_port: 0,
            environment: "test".into(),
            admin_password: "admin".into(),
            payment_base_url: "https://pay.example.com/oronero".into(),
            webhook_url: None,
        }
    }

    fn empty_store() -> ReservationStore {
        ReservationStore::initialize(Arc::new(MemoryStorage::with_raw(&b"[]"[..])))
    }

    fn request(name: &str, guests: u32, area: Area) -> BookingRequest {
        BookingRequest {
            name: name.into(),
            phone: "3331234567".into(),
            date: "2031-06-01".into(),
            time: "20:00".into(),
            guests,
            occasion: Occasion::Casual,
            area,
            notes: None,
            reminder_preference: None,
        }
    }

    #[test]
    fn valid_details_move_to_payment_confirm() {
        let mut flow = BookingFlow::new();
        let quote = flow
            .submit_details(request("Mario Rossi", 4, Area::PanoramicTerrace))
            .unwrap();

        assert_eq!(flow.step(), BookingStep::PaymentConfirm);
        assert_eq!(quote.deposit_amount, 40);
        assert_eq!(quote.area_surcharge, 20);
    }

    #[test]
    fn missing_fields_keep_the_flow_in_details() {
        let mut flow = BookingFlow::new();
        let mut incomplete = request("", 4, Area::MainHall);
        incomplete.phone = String::new();

        assert!(flow.submit_details(incomplete).is_err());
        assert_eq!(flow.step(), BookingStep::Details);
        assert!(flow.quote().is_none());
    }

    #[test]
    fn past_dates_and_bad_guest_counts_are_rejected() {
        let mut flow = BookingFlow::new();
        let mut past = request("Mario", 4, Area::MainHall);
        past.date = "2020-01-01".into();
        assert!(flow.submit_details(past).is_err());

        assert!(flow.submit_details(request("Mario", 0, Area::MainHall)).is_err());
        assert!(flow.submit_details(request("Mario", 13, Area::MainHall)).is_err());
        assert_eq!(flow.step(), BookingStep::Details);
    }

    #[test]
    fn back_to_details_allows_editing_before_paying() {
        let mut flow = BookingFlow::new();
        flow.submit_details(request("Mario", 2, Area::MainHall)).unwrap();

        flow.back_to_details();
        assert_eq!(flow.step(), BookingStep::Details);

        // resubmission with different details produces a new quote
        let quote = flow.submit_details(request("Mario", 6, Area::MainHall)).unwrap();
        assert_eq!(quote.deposit_amount, 60);
    }

    #[test]
    fn confirm_stores_a_pending_record_and_builds_the_payment_link() {
        let store = empty_store();
        let notices = NoticeCenter::new();
        let config = test_config();

        let mut flow = BookingFlow::new();
        flow.submit_details(request("Mario Rossi", 4, Area::PanoramicTerrace))
            .unwrap();
        let confirmation = flow.confirm(&store, &notices, &config).unwrap();

        assert_eq!(flow.step(), BookingStep::Success);
        assert_eq!(confirmation.deposit_amount, 40);
        assert_eq!(
            confirmation.payment_url,
            "https://pay.example.com/oronero?amount=40"
        );

        let stored = store.get(&confirmation.reservation_id).unwrap();
        assert_eq!(stored.status, ReservationStatus::Pending);
        assert_eq!(stored.name, "Mario Rossi");
        assert_eq!(stored.area, Area::PanoramicTerrace);
        assert_eq!(stored.deposit_amount, 40);

        let notice = notices.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn confirm_requires_the_payment_confirm_step() {
        let store = empty_store();
        let notices = NoticeCenter::new();
        let config = test_config();

        let mut flow = BookingFlow::new();
        assert!(flow.confirm(&store, &notices, &config).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn success_never_goes_backwards() {
        let store = empty_store();
        let notices = NoticeCenter::new();
        let config = test_config();

        let mut flow = BookingFlow::new();
        flow.submit_details(request("Mario", 2, Area::MainHall)).unwrap();
        flow.confirm(&store, &notices, &config).unwrap();

        flow.back_to_details();
        assert_eq!(flow.step(), BookingStep::Success);

        // a second confirm must not double-book
        assert!(flow.confirm(&store, &notices, &config).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn reset_clears_everything() {
        let store = empty_store();
        let notices = NoticeCenter::new();
        let config = test_config();

        let mut flow = BookingFlow::new();
        flow.submit_details(request("Mario", 2, Area::MainHall)).unwrap();
        flow.confirm(&store, &notices, &config).unwrap();

        flow.reset();
        assert_eq!(flow.step(), BookingStep::Details);
        assert!(flow.quote().is_none());
    }
}
