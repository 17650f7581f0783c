// --- File: crates/beautybook_booking/src/picker.rs ---
//! Date and time selection for a single appointment.
//!
//! The picker owns only local state. It rejects invalid choices without
//! touching that state, and pulses haptic feedback through the injected
//! [`Platform`] on every accepted interaction.

use crate::calendar::DateRule;
use crate::error::BookingError;
use crate::slots::{default_slots, TimeSlot};
use beautybook_common::display::{format_day_month, format_long_date, format_price};
use beautybook_platform::{HapticFeedback, Platform};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::debug;

/// What is being booked.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub master_name: String,
    pub service_name: String,
    pub price: f64,
}

/// The confirmed date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSelection {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Text shown above the confirm button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSummary {
    pub date: String,
    pub time: String,
    pub service: String,
    pub total: String,
}

pub struct BookingPicker {
    request: BookingRequest,
    rule: DateRule,
    slots: Vec<TimeSlot>,
    selected_date: Option<NaiveDate>,
    selected_time: Option<NaiveTime>,
    platform: Arc<dyn Platform>,
}

impl BookingPicker {
    pub fn new(request: BookingRequest, rule: DateRule, platform: Arc<dyn Platform>) -> Self {
        Self::with_slots(request, rule, default_slots(), platform)
    }

    pub fn with_slots(
        request: BookingRequest,
        rule: DateRule,
        slots: Vec<TimeSlot>,
        platform: Arc<dyn Platform>,
    ) -> Self {
        Self {
            request,
            rule,
            slots,
            selected_date: None,
            selected_time: None,
            platform,
        }
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<NaiveTime> {
        self.selected_time
    }

    /// `Анна Сергеева • Маникюр + гель-лак`
    pub fn title(&self) -> String {
        format!("{} • {}", self.request.master_name, self.request.service_name)
    }

    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        !self.rule.is_selectable(date)
    }

    /// The slot list, offered only once a date is chosen.
    pub fn visible_slots(&self) -> &[TimeSlot] {
        if self.selected_date.is_some() {
            &self.slots
        } else {
            &[]
        }
    }

    /// `Выберите время на 15 ноября`
    pub fn time_heading(&self) -> Option<String> {
        self.selected_date
            .map(|date| format!("Выберите время на {}", format_day_month(date)))
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        self.rule.check(date)?;
        self.platform.haptic(HapticFeedback::Light);
        self.selected_date = Some(date);
        self.selected_time = None;
        debug!(%date, "date selected");
        Ok(())
    }

    /// Deselects the current date, which also drops the time.
    pub fn clear_date(&mut self) {
        self.platform.haptic(HapticFeedback::Light);
        self.selected_date = None;
        self.selected_time = None;
    }

    pub fn select_time(&mut self, time: NaiveTime) -> Result<(), BookingError> {
        if self.selected_date.is_none() {
            return Err(BookingError::NoDateSelected);
        }
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.time == time)
            .ok_or(BookingError::UnknownSlot(time))?;
        if !slot.available {
            return Err(BookingError::SlotUnavailable(time));
        }
        self.platform.haptic(HapticFeedback::Medium);
        self.selected_time = Some(time);
        debug!(time = %time.format("%H:%M"), "time selected");
        Ok(())
    }

    fn selection(&self) -> Option<BookingSelection> {
        let date = self.selected_date?;
        let time = self.selected_time?;
        let slot_open = self
            .slots
            .iter()
            .any(|slot| slot.time == time && slot.available);
        (slot_open && self.rule.is_selectable(date)).then_some(BookingSelection { date, time })
    }

    pub fn can_confirm(&self) -> bool {
        self.selection().is_some()
    }

    pub fn summary(&self) -> Option<BookingSummary> {
        let selection = self.selection()?;
        Some(BookingSummary {
            date: format_long_date(selection.date),
            time: selection.time.format("%H:%M").to_string(),
            service: self.request.service_name.clone(),
            total: format_price(self.request.price),
        })
    }

    /// Emits the selection with a success pulse.
    pub fn confirm(&mut self) -> Result<BookingSelection, BookingError> {
        let selection = self.selection().ok_or(BookingError::IncompleteSelection)?;
        self.platform.haptic(HapticFeedback::Success);
        debug!(date = %selection.date, "booking selection confirmed");
        Ok(selection)
    }

    /// Discards the selection with a neutral pulse.
    pub fn cancel(&mut self) {
        self.selected_date = None;
        self.selected_time = None;
        self.platform.haptic(HapticFeedback::Light);
    }
}
