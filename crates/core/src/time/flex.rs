//! Flexible time-of-day parsing and arithmetic.
//!
//! A *flexible* time is a 12-hour string without AM/PM, such as `"830"`. It is
//! resolved to the soonest upcoming occurrence relative to a reference
//! moment: at 07:00 `"830"` means 08:30, at noon it means 20:30, and at 23:00
//! `"130"` means 01:30.
//!
//! Strings with a meridiem marker (`"2:15p"`) or an unambiguous 24-hour
//! reading (`"0800"`, `"0015"`, `"23:59"`) ignore the reference.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Duration, Local, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use flexkit_common::error::{CommonError, CommonResult};
use flexkit_common::testing::{Clock, SystemClock};
use flexkit_common::validation::{validate_field, RangeValidator};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::error::{FlexTimeError, FlexTimeResult};
use super::format::{render, DEFAULT_FORMAT};

const MINUTES_PER_DAY: i64 = 24 * 60;
const HALF_DAY_MINUTES: i64 = 12 * 60;

/// Unanchored flexible-time pattern with a single capture group
///
/// Use it to embed a time in a larger command pattern, then hand the captured
/// text to [`FlexTime::parse`].
pub const FLEX_TIME_SUBSTRING_PATTERN: &str = r"((?:[0-9]?[0-9]):?(?:[0-9][0-9])\s*(?:[aApP][mM]?)?)";

static FLEX_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([0-9]?[0-9]):?([0-9][0-9])\s*([aApP][mM]?)?\s*$")
        .expect("FLEX_TIME_REGEX should compile - this is a bug")
});

static FLEX_TIME_SUBSTRING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(FLEX_TIME_SUBSTRING_PATTERN)
        .expect("FLEX_TIME_SUBSTRING_REGEX should compile - this is a bug")
});

/// Compiled form of [`FLEX_TIME_SUBSTRING_PATTERN`]
pub fn flex_time_substring_regex() -> &'static Regex {
    &FLEX_TIME_SUBSTRING_REGEX
}

/// Anything with a wall-clock time of day
pub trait TimeOfDay {
    /// Minutes elapsed since local midnight, `0..1440`
    fn minutes_since_midnight(&self) -> i64;
}

impl TimeOfDay for NaiveTime {
    fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour()) * 60 + i64::from(self.minute())
    }
}

impl TimeOfDay for NaiveDateTime {
    fn minutes_since_midnight(&self) -> i64 {
        self.time().minutes_since_midnight()
    }
}

impl<Tz: TimeZone> TimeOfDay for DateTime<Tz> {
    fn minutes_since_midnight(&self) -> i64 {
        self.naive_local().minutes_since_midnight()
    }
}

/// Input accepted by [`FlexTime::new`] and [`FlexTime::at`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeSpec {
    /// The current moment
    #[default]
    Now,
    /// A flexible time string; empty text behaves like [`TimeSpec::Now`]
    Text(String),
    /// An already-resolved time of day
    Flex(FlexTime),
    /// A local wall-clock date and time
    Moment(NaiveDateTime),
    /// Milliseconds since the Unix epoch, read in the local time zone
    Timestamp(i64),
}

impl From<&str> for TimeSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for TimeSpec {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<FlexTime> for TimeSpec {
    fn from(time: FlexTime) -> Self {
        Self::Flex(time)
    }
}

impl From<NaiveDateTime> for TimeSpec {
    fn from(moment: NaiveDateTime) -> Self {
        Self::Moment(moment)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimeSpec {
    fn from(moment: DateTime<Tz>) -> Self {
        Self::Moment(moment.naive_local())
    }
}

impl From<i64> for TimeSpec {
    fn from(millis: i64) -> Self {
        Self::Timestamp(millis)
    }
}

impl<T: Into<TimeSpec>> From<Option<T>> for TimeSpec {
    fn from(spec: Option<T>) -> Self {
        spec.map_or(Self::Now, Into::into)
    }
}

/// A wall-clock time of day with minute precision
///
/// Ordering follows minutes since midnight.
///
/// ```
/// use chrono::NaiveDate;
/// use flexkit_core::time::FlexTime;
///
/// let noon = NaiveDate::from_ymd_opt(2018, 2, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let dinner = FlexTime::new("830", Some(noon)).unwrap();
/// assert_eq!((dinner.hour(), dinner.minute()), (20, 30));
/// assert_eq!(dinner.to_string(), "8:30 pm");
/// assert_eq!(dinner.format("HHmm"), "2030");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlexTime {
    hour: u32,
    minute: u32,
}

impl FlexTime {
    /// Construct from `init`, disambiguating flexible strings against
    /// `reference` (default: now)
    ///
    /// `reference` is only consulted for [`TimeSpec::Now`] and text input.
    ///
    /// # Errors
    ///
    /// - [`FlexTimeError::InvalidTimeString`] for text outside the grammar
    /// - [`FlexTimeError::InvalidInitializer`] for an unrepresentable timestamp
    pub fn new(init: impl Into<TimeSpec>, reference: Option<NaiveDateTime>) -> FlexTimeResult<Self> {
        match init.into() {
            TimeSpec::Now => Ok(Self::from_moment(&reference_or_now(reference))),
            TimeSpec::Text(text) if text.is_empty() => {
                Ok(Self::from_moment(&reference_or_now(reference)))
            }
            TimeSpec::Text(text) => Self::parse(&text, reference_or_now(reference)),
            TimeSpec::Flex(time) => Ok(time),
            TimeSpec::Moment(moment) => Ok(Self::from_moment(&moment)),
            TimeSpec::Timestamp(millis) => Ok(Self::from_moment(&local_from_millis(millis)?)),
        }
    }

    /// The current local time of day
    pub fn now() -> Self {
        Self::now_with(&SystemClock)
    }

    /// The time of day currently reported by `clock`
    pub fn now_with<C: Clock + ?Sized>(clock: &C) -> Self {
        Self::from_moment(&clock.now())
    }

    /// Construct from explicit 24-hour components
    ///
    /// # Errors
    ///
    /// [`FlexTimeError::InvalidInitializer`] unless `hour < 24` and
    /// `minute < 60`.
    pub fn from_hm(hour: u32, minute: u32) -> FlexTimeResult<Self> {
        validate_field("hour", &hour, &RangeValidator::new(0, 23))?;
        validate_field("minute", &minute, &RangeValidator::new(0, 59))?;
        Ok(Self { hour, minute })
    }

    fn from_moment<M: Timelike>(moment: &M) -> Self {
        Self { hour: moment.hour(), minute: moment.minute() }
    }

    /// Parse `text`, resolving flexible times against `reference`
    ///
    /// # Errors
    ///
    /// [`FlexTimeError::InvalidTimeString`] carrying `text`.
    pub fn parse(text: &str, reference: NaiveDateTime) -> FlexTimeResult<Self> {
        Ok(parse_components(text, &reference)?)
    }

    /// Find the first embedded time in `text` that parses
    ///
    /// Candidates come from [`FLEX_TIME_SUBSTRING_PATTERN`] in order of
    /// appearance; ones that fail range checks are skipped.
    pub fn find_in(text: &str, reference: NaiveDateTime) -> Option<Self> {
        FLEX_TIME_SUBSTRING_REGEX
            .find_iter(text)
            .find_map(|candidate| parse_components(candidate.as_str(), &reference).ok())
    }

    /// The time of day `delta_minutes` after `from`
    ///
    /// `from` is first resolved to a concrete moment: [`TimeSpec::Now`] is
    /// now, a [`FlexTime`] (or text) is projected with
    /// [`FlexTime::to_date`] against now. Day boundaries roll over naturally.
    ///
    /// # Errors
    ///
    /// [`FlexTimeError::InvalidTimeString`] for unparsable text and
    /// [`FlexTimeError::InvalidInitializer`] when the moment or the shift is
    /// out of range.
    pub fn at(from: impl Into<TimeSpec>, delta_minutes: i64) -> FlexTimeResult<Self> {
        let moment = resolve_moment(from.into())?;
        let shifted = Duration::try_minutes(delta_minutes)
            .and_then(|delta| moment.checked_add_signed(delta))
            .ok_or_else(|| {
                FlexTimeError::InvalidInitializer(format!("{moment} + {delta_minutes} minutes"))
            })?;
        Ok(Self::from_moment(&shifted))
    }

    /// Hour in 24-hour form, `0..24`
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Minute of the hour, `0..60`
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Project onto a concrete date relative to `base` (default: now)
    ///
    /// The result stays on `base`'s calendar day unless this time has
    /// already passed by more than `fudge_minutes`, in which case it moves
    /// to the next day. Seconds and sub-seconds of `base` are kept.
    ///
    /// # Errors
    ///
    /// [`FlexTimeError::InvalidInitializer`] when the fudge or the resulting
    /// date falls outside the representable range.
    pub fn to_date(
        &self,
        fudge_minutes: i64,
        base: Option<NaiveDateTime>,
    ) -> FlexTimeResult<NaiveDateTime> {
        let base = reference_or_now(base);
        let out_of_range =
            || FlexTimeError::InvalidInitializer(format!("{self} on {base} with fudge {fudge_minutes}"));

        let passed_by = self.delta_minutes(&base).checked_sub(fudge_minutes).ok_or_else(out_of_range)?;
        let day = if passed_by > 0 {
            base.checked_add_days(Days::new(1)).ok_or_else(out_of_range)?
        } else {
            base
        };

        let offset = Duration::minutes(self.minutes_since_midnight())
            + Duration::seconds(i64::from(day.second()))
            + Duration::nanoseconds(i64::from(day.nanosecond()));
        day.date().and_time(NaiveTime::MIN).checked_add_signed(offset).ok_or_else(out_of_range)
    }

    /// Render through a token format, see [`super::format`]
    pub fn format(&self, fmt: &str) -> String {
        render(self.hour, self.minute, fmt)
    }

    /// Signed minutes from this time forward to `other`, taking the shorter
    /// way around the clock
    ///
    /// 23:45 to 00:15 is `30`; 00:30 to 23:30 is `-60`.
    pub fn delta_minutes<O: TimeOfDay + ?Sized>(&self, other: &O) -> i64 {
        let delta = self.absolute_delta_minutes(other);
        if delta > HALF_DAY_MINUTES {
            delta - MINUTES_PER_DAY
        } else if delta < -HALF_DAY_MINUTES {
            delta + MINUTES_PER_DAY
        } else {
            delta
        }
    }

    /// Raw `other - self` in minutes, without wrapping around midnight
    pub fn absolute_delta_minutes<O: TimeOfDay + ?Sized>(&self, other: &O) -> i64 {
        other.minutes_since_midnight() - self.minutes_since_midnight()
    }
}

impl TimeOfDay for FlexTime {
    fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }
}

impl Timelike for FlexTime {
    fn hour(&self) -> u32 {
        self.hour
    }

    fn minute(&self) -> u32 {
        self.minute
    }

    fn second(&self) -> u32 {
        0
    }

    fn nanosecond(&self) -> u32 {
        0
    }

    fn with_hour(&self, hour: u32) -> Option<Self> {
        Self::from_hm(hour, self.minute).ok()
    }

    fn with_minute(&self, minute: u32) -> Option<Self> {
        Self::from_hm(self.hour, minute).ok()
    }

    fn with_second(&self, sec: u32) -> Option<Self> {
        (sec == 0).then_some(*self)
    }

    fn with_nanosecond(&self, nano: u32) -> Option<Self> {
        (nano == 0).then_some(*self)
    }
}

impl fmt::Display for FlexTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_FORMAT))
    }
}

/// Parses relative to the current moment
impl FromStr for FlexTime {
    type Err = FlexTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, None)
    }
}

fn reference_or_now(reference: Option<NaiveDateTime>) -> NaiveDateTime {
    reference.unwrap_or_else(|| SystemClock.now())
}

fn local_from_millis(millis: i64) -> FlexTimeResult<NaiveDateTime> {
    Local
        .timestamp_millis_opt(millis)
        .single()
        .map(|moment| moment.naive_local())
        .ok_or_else(|| FlexTimeError::InvalidInitializer(format!("timestamp {millis}")))
}

fn resolve_moment(spec: TimeSpec) -> FlexTimeResult<NaiveDateTime> {
    match spec {
        TimeSpec::Now => Ok(SystemClock.now()),
        TimeSpec::Moment(moment) => Ok(moment),
        TimeSpec::Timestamp(millis) => local_from_millis(millis),
        TimeSpec::Flex(time) => time.to_date(0, None),
        text @ TimeSpec::Text(_) => FlexTime::new(text, None)?.to_date(0, None),
    }
}

fn parse_components(text: &str, reference: &NaiveDateTime) -> CommonResult<FlexTime> {
    let invalid = || CommonError::parse_expected(text, "flexible time");
    let captures = FLEX_TIME_REGEX.captures(text).ok_or_else(invalid)?;

    let hour_token = captures.get(1).map_or("", |m| m.as_str());
    let hour: u32 = hour_token.parse().map_err(|_| invalid())?;
    let minute: u32 = captures.get(2).map_or("", |m| m.as_str()).parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    if let Some(marker) = captures.get(3) {
        // 12-hour clock: 12am is midnight, 12pm is noon
        if !(1..=12).contains(&hour) {
            return Err(invalid());
        }
        let is_pm = marker.as_str().starts_with(['p', 'P']);
        let hour = hour % 12 + if is_pm { 12 } else { 0 };
        return Ok(FlexTime { hour, minute });
    }

    let unambiguous_24h = hour == 0 || hour > 12 || hour_token.starts_with('0');
    if unambiguous_24h {
        return Ok(FlexTime { hour, minute });
    }

    let resolved = next_occurrence_hour(hour, minute, reference);
    debug!(input = text, reference = %reference, hour = resolved, minute, "resolved flexible time");
    Ok(FlexTime { hour: resolved, minute })
}

/// Hour of the soonest occurrence of a 12-hour `hour:minute` at or after
/// `reference`
fn next_occurrence_hour(hour: u32, minute: u32, reference: &NaiveDateTime) -> u32 {
    let mut candidate = hour % 12;
    while candidate < reference.hour() {
        candidate += 12;
    }
    if candidate == reference.hour() && minute < reference.minute() {
        candidate += 12;
    }
    candidate % 24
}
