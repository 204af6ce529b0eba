/// Rejection text for the name field
pub const NAME_MESSAGE: &str = "Not a valid name!";
/// Rejection text for the phone number field
pub const NUMBER_MESSAGE: &str = "Not a valid number!";
/// Rejection text for the day field (shares the date slot)
pub const DAY_MESSAGE: &str = "Not a valid day!";
/// Rejection text for the month field (shares the date slot)
pub const MONTH_MESSAGE: &str = "Not a valid month!";
/// Rejection text for the year field (shares the date slot)
pub const YEAR_MESSAGE: &str = "Not a valid year!";
/// Rejection text for the composite day/month/year check
pub const DATE_MESSAGE: &str = "Not a valid date!";
/// Rejection text for the pastime field
pub const PASTIME_MESSAGE: &str = "Not a valid pastime!";
/// Rejection text for the form as a whole
pub const FORM_MESSAGE: &str = "Form is invalid or incomplete!";
/// Text written to a slot when its check passes
pub const CLEARED_MESSAGE: &str = "";

/// First day of month, used for lower bounds
pub const MIN_DAY: i64 = 1;
/// Largest day any month can have
pub const MAX_DAY: i64 = 31;
/// Month number for January
pub const MIN_MONTH: i64 = 1;
/// Maximum valid month (December)
pub const MAX_MONTH: i64 = 12;
/// Year zero is accepted; there is no upper limit
pub const MIN_YEAR: i64 = 0;

/// Month number for February
pub const FEBRUARY: i64 = 2;
/// Months with 31 days
pub const LONG_MONTHS: [i64; 7] = [1, 3, 5, 7, 8, 10, 12];
/// Months with 30 days
pub const SHORT_MONTHS: [i64; 4] = [4, 6, 9, 11];

pub const DAYS_IN_LONG_MONTH: u8 = 31;
pub const DAYS_IN_SHORT_MONTH: u8 = 30;
/// Days in February for common years
pub const FEBRUARY_DAYS: u8 = 28;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Accepted pastime labels, matched exactly
pub const PASTIME_LABELS: [&str; 9] = [
    "Surfing the Web",
    "Playing Sport",
    "Listening to Music",
    "Watching TV",
    "Playing Games",
    "Community Service",
    "Daydreaming",
    "Reading",
    "Meditation",
];
