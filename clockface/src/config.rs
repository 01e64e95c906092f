//! Clock face configuration: minute step and the marks it produces.

use derive_setters::Setters;
use smallvec::SmallVec;

use crate::error::{ClockError, Result};

/// Hour marks in face order, starting at 12 o'clock and running clockwise.
pub const HOUR_MARKS: [u8; 12] = [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// Minute values shown on a face, in face order.
pub type MinuteMarks = SmallVec<[u8; 12]>;

/// Granularity of minute selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MinuteStep {
    /// Any minute can be selected; labels are still drawn every 5 minutes.
    #[default]
    One,
    /// 5 minute interval.
    Five,
    /// 10 minute interval.
    Ten,
    /// 15 minute interval.
    Fifteen,
    /// 30 minute interval.
    Thirty,
    /// Disables minute selection.
    Sixty,
}

impl MinuteStep {
    /// Every supported step, finest first.
    pub const ALL: [MinuteStep; 6] = [
        MinuteStep::One,
        MinuteStep::Five,
        MinuteStep::Ten,
        MinuteStep::Fifteen,
        MinuteStep::Thirty,
        MinuteStep::Sixty,
    ];

    /// Returns the step length in minutes.
    pub const fn minutes(self) -> u8 {
        match self {
            MinuteStep::One => 1,
            MinuteStep::Five => 5,
            MinuteStep::Ten => 10,
            MinuteStep::Fifteen => 15,
            MinuteStep::Thirty => 30,
            MinuteStep::Sixty => 60,
        }
    }

    /// Number of minute marks on the face for this step.
    pub const fn mark_count(self) -> usize {
        (60 / self.minutes()) as usize
    }

    /// Whether the minute face can be shown at all.
    pub const fn allows_minute_selection(self) -> bool {
        !matches!(self, MinuteStep::Sixty)
    }

    /// Whether marks between the 5 minute labels are left unlabeled.
    pub const fn is_sub_label(self) -> bool {
        self.minutes() < 5
    }

    /// Builds the minute marks `0, step, 2 * step, ...` below 60.
    pub fn marks(self) -> MinuteMarks {
        let step = self.minutes();
        (0..self.mark_count() as u8).map(|i| i * step).collect()
    }
}

impl TryFrom<u8> for MinuteStep {
    type Error = ClockError;

    fn try_from(minutes: u8) -> Result<Self> {
        MinuteStep::ALL
            .into_iter()
            .find(|step| step.minutes() == minutes)
            .ok_or(ClockError::InvalidMinuteStep(minutes))
    }
}

/// Arguments for building a [`ClockFaceConfig`].
///
/// The step is kept as raw minutes so hosts can forward user or file input
/// directly; it is validated by [`ClockFaceArgs::build`].
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct ClockFaceArgs {
    /// Minute step in minutes. Must be 1, 5, 10, 15, 30 or 60.
    pub minute_step: u8,
}

impl Default for ClockFaceArgs {
    fn default() -> Self {
        Self {
            minute_step: MinuteStep::default().minutes(),
        }
    }
}

impl ClockFaceArgs {
    /// Validates the arguments.
    pub fn build(&self) -> Result<ClockFaceConfig> {
        MinuteStep::try_from(self.minute_step).map(ClockFaceConfig::new)
    }
}

/// Immutable per-session face configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFaceConfig {
    minute_step: MinuteStep,
    minute_marks: MinuteMarks,
}

impl Default for ClockFaceConfig {
    fn default() -> Self {
        Self::new(MinuteStep::default())
    }
}

impl ClockFaceConfig {
    /// Creates a configuration for the given minute step.
    pub fn new(minute_step: MinuteStep) -> Self {
        Self {
            minute_step,
            minute_marks: minute_step.marks(),
        }
    }

    /// Returns the minute step.
    pub fn minute_step(&self) -> MinuteStep {
        self.minute_step
    }

    /// Returns the hour marks in face order.
    pub fn hour_marks(&self) -> &[u8] {
        &HOUR_MARKS
    }

    /// Returns the minute marks in face order.
    pub fn minute_marks(&self) -> &[u8] {
        &self.minute_marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_count_divides_the_hour() {
        for step in MinuteStep::ALL {
            let marks = step.marks();
            assert_eq!(marks.len(), 60 / step.minutes() as usize);
            assert_eq!(marks.first(), Some(&0));
            assert!(marks.iter().all(|m| *m < 60 && m % step.minutes() == 0));
        }
    }

    #[test]
    fn quarter_hour_marks() {
        assert_eq!(MinuteStep::Fifteen.marks().as_slice(), &[0, 15, 30, 45]);
        assert_eq!(MinuteStep::Sixty.marks().as_slice(), &[0]);
        assert_eq!(MinuteStep::One.marks().len(), 60);
    }

    #[test]
    fn rejects_steps_outside_the_supported_set() {
        for minutes in [0, 2, 3, 4, 6, 12, 20, 45, 61, 255] {
            assert_eq!(
                MinuteStep::try_from(minutes),
                Err(ClockError::InvalidMinuteStep(minutes))
            );
        }
        for step in MinuteStep::ALL {
            assert_eq!(MinuteStep::try_from(step.minutes()), Ok(step));
        }
    }

    #[test]
    fn args_build_validates() {
        let config = ClockFaceArgs::default().minute_step(10).build().unwrap();
        assert_eq!(config.minute_step(), MinuteStep::Ten);
        assert_eq!(config.minute_marks(), &[0, 10, 20, 30, 40, 50]);
        assert_eq!(config.hour_marks(), &HOUR_MARKS);

        let err = ClockFaceArgs::default().minute_step(7).build().unwrap_err();
        assert_eq!(err, ClockError::InvalidMinuteStep(7));
        assert_eq!(
            err.to_string(),
            "invalid minute step 7: expected one of 1, 5, 10, 15, 30, 60"
        );
    }

    #[test]
    fn defaults_to_one_minute() {
        assert_eq!(ClockFaceConfig::default().minute_step(), MinuteStep::One);
        assert_eq!(ClockFaceArgs::default().minute_step, 1);
    }
}
