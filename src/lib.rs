mod consts;
mod field;
mod prelude;
mod sink;
mod types;

pub use consts::*;
pub use field::{Field, FieldValue, FormSnapshot, SnapshotError};
pub use sink::{MessageBoard, MessageKey, MessageSink};
pub use types::{Day, Month, Pastime, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FieldError {
    #[display(fmt = "Empty field value")]
    Empty,
    #[display(fmt = "Not a number: {_0:?}")]
    NotNumeric(String),
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, MAX_DAY)]
    InvalidDay(i64),
    #[display(fmt = "Invalid month: {} (must be {}-{})", "_0", MIN_MONTH, MAX_MONTH)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid year: {} (must be at least {})", "_0", MIN_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid pastime: {_0:?}")]
    InvalidPastime(String),
    #[display(fmt = "Unknown field: {_0}")]
    UnknownField(String),
}

impl std::error::Error for FieldError {}

/// A field is empty iff it is absent or the empty string. Zero is not empty.
pub fn is_empty(field: &FieldValue) -> bool {
    field.is_empty()
}

/// One step of the whole-form check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Check {
    #[display(fmt = "name")]
    Name,
    #[display(fmt = "number")]
    Number,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "pastime")]
    Pastime,
}

impl Check {
    /// Evaluation order of `FormValidator::is_valid_form`. Checks after the
    /// first failure are not run, so their slots keep whatever they held.
    pub const ORDER: [Self; 7] = [
        Self::Name,
        Self::Number,
        Self::Day,
        Self::Month,
        Self::Year,
        Self::Date,
        Self::Pastime,
    ];

    /// Slot this check writes to.
    pub const fn message_key(self) -> MessageKey {
        match self {
            Self::Name => MessageKey::Name,
            Self::Number => MessageKey::Number,
            Self::Day | Self::Month | Self::Year | Self::Date => MessageKey::Date,
            Self::Pastime => MessageKey::Pastime,
        }
    }
}

/// Runs the field predicates and reports their outcome to a `MessageSink`.
///
/// Every predicate writes to its slot on each call: the empty string when
/// the value passes, a fixed message when it does not. Day, month, year and
/// the composite date check share the `date` slot, so the last one to run
/// decides what it shows.
#[derive(Debug, Clone, Default)]
pub struct FormValidator<S> {
    sink: S,
}

impl<S: MessageSink> FormValidator<S> {
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn report(&mut self, key: MessageKey, valid: bool, message: &'static str) -> bool {
        if valid {
            self.sink.set_message(key, CLEARED_MESSAGE);
        } else {
            debug!(field = %key, reason = message, "field rejected");
            self.sink.set_message(key, message);
        }
        valid
    }

    /// Any non-empty value is a valid name, whitespace and punctuation included.
    pub fn is_valid_name(&mut self, name: &FieldValue) -> bool {
        let valid = !is_empty(name) && name.as_text().chars().next().is_some();
        self.report(MessageKey::Name, valid, NAME_MESSAGE)
    }

    /// Valid when the value contains at least one ASCII digit anywhere.
    pub fn is_valid_phone_number(&mut self, number: &FieldValue) -> bool {
        let valid = !is_empty(number) && number.as_text().chars().any(|c| c.is_ascii_digit());
        self.report(MessageKey::Number, valid, NUMBER_MESSAGE)
    }

    /// Range check only; 31 passes for every month here.
    pub fn is_valid_day(&mut self, day: &FieldValue) -> bool {
        let valid = !is_empty(day) && day.to_number().and_then(Day::new).is_ok();
        self.report(MessageKey::Date, valid, DAY_MESSAGE)
    }

    pub fn is_valid_month(&mut self, month: &FieldValue) -> bool {
        let valid = !is_empty(month) && month.to_number().and_then(Month::new).is_ok();
        self.report(MessageKey::Date, valid, MONTH_MESSAGE)
    }

    pub fn is_valid_year(&mut self, year: &FieldValue) -> bool {
        let valid = !is_empty(year) && year.to_number().and_then(Year::new).is_ok();
        self.report(MessageKey::Date, valid, YEAR_MESSAGE)
    }

    /// Calendar-aware check of the day against its month.
    ///
    /// The year is only looked at for February. A month outside 1..=12, or
    /// a February without a numeric year, fails.
    pub fn is_valid_date(
        &mut self,
        day: &FieldValue,
        month: &FieldValue,
        year: &FieldValue,
    ) -> bool {
        let max_day = month
            .to_number()
            .ok()
            .and_then(|month| days_in_month(month, year.to_number().ok()));
        let valid = match (max_day, day.to_number()) {
            (Some(max_day), Ok(day)) => MIN_DAY <= day && day <= i64::from(max_day),
            _ => false,
        };
        self.report(MessageKey::Date, valid, DATE_MESSAGE)
    }

    /// Exact, case-sensitive membership in the pastime list.
    pub fn is_valid_pastime(&mut self, pastime: &FieldValue) -> bool {
        let valid = !is_empty(pastime) && pastime.as_text().parse::<Pastime>().is_ok();
        self.report(MessageKey::Pastime, valid, PASTIME_MESSAGE)
    }

    /// Runs a single step of the whole-form check.
    pub fn run_check(&mut self, check: Check, form: &FormSnapshot) -> bool {
        match check {
            Check::Name => self.is_valid_name(&form.name),
            Check::Number => self.is_valid_phone_number(&form.number),
            Check::Day => self.is_valid_day(&form.day),
            Check::Month => self.is_valid_month(&form.month),
            Check::Year => self.is_valid_year(&form.year),
            Check::Date => self.is_valid_date(&form.day, &form.month, &form.year),
            Check::Pastime => self.is_valid_pastime(&form.pastime),
        }
    }

    /// Walks `Check::ORDER` and stops at the first failure.
    pub fn is_valid_form(&mut self, form: &FormSnapshot) -> bool {
        let failed = Check::ORDER
            .into_iter()
            .find(|check| !self.run_check(*check, form));
        if let Some(check) = failed {
            debug!(%check, "form rejected");
        }
        self.report_form(failed.is_none())
    }

    /// Runs every check, without stopping early, and returns the ones that
    /// failed. All slots are refreshed; the form slot is written exactly as
    /// `is_valid_form` would write it.
    pub fn failed_checks(&mut self, form: &FormSnapshot) -> Vec<Check> {
        let failed: Vec<Check> = Check::ORDER
            .into_iter()
            .filter(|check| !self.run_check(*check, form))
            .collect();
        if let Some(first) = failed.first() {
            debug!(count = failed.len(), %first, "form rejected");
        }
        self.report_form(failed.is_empty());
        failed
    }

    fn report_form(&mut self, valid: bool) -> bool {
        self.report(MessageKey::Form, valid, FORM_MESSAGE)
    }
}
