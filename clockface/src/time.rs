//! Time-of-day values read and proposed by the clock face.

use std::{fmt, ops::Range};

use crate::{
    controller::DisplayMode,
    error::{ClockError, Result},
};

/// Indicates whether a time is in AM or PM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem (before noon).
    Am,
    /// Post meridiem (after noon).
    Pm,
}

/// An hour (0-23) and minute (0-59) pair.
///
/// The host owns the authoritative value; the clock face only reads
/// snapshots of it and proposes changes through events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Creates a time, clamping the hour to 0-23 and the minute to 0-59.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: clamp_hour(hour),
            minute: clamp_minute(minute),
        }
    }

    /// Creates a time, rejecting out-of-range components.
    pub fn try_new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(ClockError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(ClockError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour in 24-hour form (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the period of the day.
    pub fn period(&self) -> DayPeriod {
        if self.hour < 12 {
            DayPeriod::Am
        } else {
            DayPeriod::Pm
        }
    }

    /// Returns the hour as shown on a 12-hour face (1-12).
    pub fn hour_12(&self) -> u8 {
        let hour = self.hour % 12;
        if hour == 0 { 12 } else { hour }
    }

    /// Returns a copy with the hour replaced, clamped to 0-23.
    pub fn with_hour(self, hour: u8) -> Self {
        Self {
            hour: clamp_hour(hour),
            ..self
        }
    }

    /// Returns a copy with the minute replaced, clamped to 0-59.
    pub fn with_minute(self, minute: u8) -> Self {
        Self {
            minute: clamp_minute(minute),
            ..self
        }
    }

    /// Returns a copy moved into `period`, keeping the 12-hour clock value.
    pub fn with_period(self, period: DayPeriod) -> Self {
        let hour = match (period, self.period()) {
            (DayPeriod::Am, DayPeriod::Pm) => self.hour - 12,
            (DayPeriod::Pm, DayPeriod::Am) => self.hour + 12,
            _ => self.hour,
        };
        Self { hour, ..self }
    }

    /// Formats the time as `h:mm` and marks the segment edited in `mode`.
    pub fn readout(&self, mode: DisplayMode) -> TimeReadout {
        TimeReadout::new(*self, mode)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// `h:mm` text for the selector panel with the active segment marked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReadout {
    text: String,
    emphasis: Range<usize>,
}

impl TimeReadout {
    fn new(time: TimeOfDay, mode: DisplayMode) -> Self {
        let hour = time.hour_12().to_string();
        let minute = format_two_digit(time.minute());
        let colon = hour.len();
        let emphasis = match mode {
            DisplayMode::ShowingHour => 0..colon,
            DisplayMode::ShowingMinute => colon + 1..colon + 1 + minute.len(),
        };
        Self {
            text: format!("{hour}:{minute}"),
            emphasis,
        }
    }

    /// Full readout text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Byte range of the emphasised segment within [`TimeReadout::text`].
    pub fn emphasis(&self) -> Range<usize> {
        self.emphasis.clone()
    }

    /// The emphasised segment itself.
    pub fn emphasised(&self) -> &str {
        &self.text[self.emphasis.clone()]
    }
}

fn format_two_digit(value: u8) -> String {
    format!("{value:02}")
}

fn clamp_hour(hour: u8) -> u8 {
    hour.min(23)
}

fn clamp_minute(minute: u8) -> u8 {
    minute.min(59)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_and_try_new_rejects() {
        assert_eq!(TimeOfDay::new(30, 75), TimeOfDay::new(23, 59));
        assert_eq!(TimeOfDay::try_new(24, 0), Err(ClockError::HourOutOfRange(24)));
        assert_eq!(TimeOfDay::try_new(0, 60), Err(ClockError::MinuteOutOfRange(60)));
        assert_eq!(TimeOfDay::try_new(23, 59), Ok(TimeOfDay::new(23, 59)));
    }

    #[test]
    fn twelve_hour_display() {
        assert_eq!(TimeOfDay::new(0, 0).hour_12(), 12);
        assert_eq!(TimeOfDay::new(12, 0).hour_12(), 12);
        assert_eq!(TimeOfDay::new(13, 0).hour_12(), 1);
        assert_eq!(TimeOfDay::new(11, 0).hour_12(), 11);
    }

    #[test]
    fn period_switch_moves_by_twelve_hours() {
        let morning = TimeOfDay::new(9, 30);
        assert_eq!(morning.period(), DayPeriod::Am);
        assert_eq!(morning.with_period(DayPeriod::Pm), TimeOfDay::new(21, 30));
        assert_eq!(morning.with_period(DayPeriod::Am), morning);
        assert_eq!(TimeOfDay::new(12, 5).with_period(DayPeriod::Am), TimeOfDay::new(0, 5));
        assert_eq!(TimeOfDay::new(0, 5).with_period(DayPeriod::Pm), TimeOfDay::new(12, 5));
    }

    #[test]
    fn readout_marks_active_segment() {
        let readout = TimeOfDay::new(13, 5).readout(DisplayMode::ShowingMinute);
        assert_eq!(readout.text(), "1:05");
        assert_eq!(readout.emphasised(), "05");

        let readout = TimeOfDay::new(22, 40).readout(DisplayMode::ShowingHour);
        assert_eq!(readout.text(), "10:40");
        assert_eq!(readout.emphasis(), 0..2);
        assert_eq!(readout.emphasised(), "10");
    }

    #[test]
    fn display_is_24_hour() {
        assert_eq!(TimeOfDay::new(7, 3).to_string(), "07:03");
    }
}
