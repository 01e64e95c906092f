//! Display-mode state and touch handling for an analog clock face.
//!
//! ## Usage
//!
//! Build a [`ClockInteractionController`] with a read accessor for the
//! host's current time and a sink for [`ClockEvent`]s. Feed it touch points
//! in the face view's local space; it resolves the nearest mark and asks the
//! host to update its time.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use clockface::{ClockEvent, ClockFaceConfig, ClockInteractionController, TimeOfDay};
//! use clockface::glam::Vec2;
//!
//! let time = Arc::new(Mutex::new(TimeOfDay::new(23, 10)));
//! let controller = ClockInteractionController::new(
//!     ClockFaceConfig::default(),
//!     {
//!         let time = Arc::clone(&time);
//!         move || *time.lock().unwrap()
//!     },
//!     {
//!         let time = Arc::clone(&time);
//!         move |event: ClockEvent| {
//!             let mut time = time.lock().unwrap();
//!             *time = event.apply(*time);
//!         }
//!     },
//! );
//!
//! controller.touch(Vec2::new(100.0, 20.0), Vec2::new(100.0, 100.0), 80.0);
//! assert_eq!(time.lock().unwrap().hour(), 12);
//! ```

use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::{
    config::{ClockFaceConfig, MinuteStep},
    error::Result,
    geometry::{resolve_hour, resolve_minute, touch_to_mark_index},
    prop::{Callback, CallbackWith},
    time::{DayPeriod, TimeOfDay, TimeReadout},
};

/// Which set of marks the face resolves touches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Touches select the hour.
    #[default]
    ShowingHour,
    /// Touches select the minute.
    ShowingMinute,
}

/// Change requested from the host that owns the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockEvent {
    /// Set the hour, in 24-hour form.
    SetHour(u8),
    /// Set the minute.
    SetMinute(u8),
}

impl ClockEvent {
    /// Applies the change to a time value.
    pub fn apply(self, time: TimeOfDay) -> TimeOfDay {
        match self {
            ClockEvent::SetHour(hour) => time.with_hour(hour),
            ClockEvent::SetMinute(minute) => time.with_minute(minute),
        }
    }
}

/// Phase of a touch delivered by the host view.
///
/// Hosts forward their touch-moved and touch-ended callbacks as they arrive.
/// Both phases resolve the same way, since the latest point alone decides
/// the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The finger moved while down.
    Moved,
    /// The finger lifted.
    Ended,
}

/// Translates touches on a clock face into time changes and decides which
/// mark is highlighted.
///
/// The controller never stores the time. It reads it through the accessor
/// passed to [`ClockInteractionController::new`] (or takes it as an
/// argument) and reports proposed changes through the event sink.
#[derive(Debug, Clone)]
pub struct ClockInteractionController {
    config: ClockFaceConfig,
    display_mode: DisplayMode,
    showing_time: bool,
    current_time: Callback<TimeOfDay>,
    on_event: CallbackWith<ClockEvent>,
}

impl ClockInteractionController {
    /// Creates a controller showing the hour face.
    pub fn new(
        config: ClockFaceConfig,
        current_time: impl Into<Callback<TimeOfDay>>,
        on_event: impl Into<CallbackWith<ClockEvent>>,
    ) -> Self {
        Self {
            config,
            display_mode: DisplayMode::ShowingHour,
            showing_time: false,
            current_time: current_time.into(),
            on_event: on_event.into(),
        }
    }

    /// Returns the active display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Returns the face configuration.
    pub fn config(&self) -> &ClockFaceConfig {
        &self.config
    }

    /// Returns the configured minute step.
    pub fn minute_step(&self) -> MinuteStep {
        self.config.minute_step()
    }

    /// Whether the time panel has been shown since the controller was built.
    pub fn is_showing_time(&self) -> bool {
        self.showing_time
    }

    /// Reads the host's current time through the injected accessor.
    pub fn current_time(&self) -> TimeOfDay {
        self.current_time.call()
    }

    /// Marks of the active display mode, in face order.
    pub fn active_marks(&self) -> &[u8] {
        match self.display_mode {
            DisplayMode::ShowingHour => self.config.hour_marks(),
            DisplayMode::ShowingMinute => self.config.minute_marks(),
        }
    }

    /// Rebuilds the minute marks for `step`.
    ///
    /// A 60 minute step disables the minute face and forces the hour face.
    pub fn set_minute_step(&mut self, step: MinuteStep) {
        self.config = ClockFaceConfig::new(step);
        if !step.allows_minute_selection() {
            self.display_mode = DisplayMode::ShowingHour;
        }
        debug!(minutes = step.minutes(), marks = step.mark_count(), "minute step set");
    }

    /// Validates a raw step in minutes and applies it.
    pub fn set_minute_step_minutes(&mut self, minutes: u8) -> Result<()> {
        let step = MinuteStep::try_from(minutes)?;
        self.set_minute_step(step);
        Ok(())
    }

    /// Switches between the hour and minute faces.
    ///
    /// A user toggle flips the face once the time panel is showing and
    /// opens the hour face otherwise. A 60 minute step always resolves to
    /// the hour face. Returns the resulting mode.
    pub fn toggle_display_mode(&mut self, user_initiated: bool) -> DisplayMode {
        if user_initiated {
            self.display_mode = if self.showing_time {
                match self.display_mode {
                    DisplayMode::ShowingHour => DisplayMode::ShowingMinute,
                    DisplayMode::ShowingMinute => DisplayMode::ShowingHour,
                }
            } else {
                DisplayMode::ShowingHour
            };
        }
        if !self.minute_step().allows_minute_selection()
            && self.display_mode == DisplayMode::ShowingMinute
        {
            warn!("minute face disabled by a 60 minute step; staying on hours");
            self.display_mode = DisplayMode::ShowingHour;
        }
        self.showing_time = true;
        debug!(mode = ?self.display_mode, user_initiated, "display mode toggled");
        self.display_mode
    }

    /// Resolves a touch against the active face and emits the new value.
    ///
    /// Each call depends only on its arguments, so repeated move events for
    /// the same point emit the same event.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_touch(
        &self,
        point: Vec2,
        face_center: Vec2,
        face_radius: f32,
        current_time: TimeOfDay,
    ) {
        let marks = self.active_marks();
        let index = touch_to_mark_index(point, face_center, marks.len());
        let event = match self.display_mode {
            DisplayMode::ShowingHour => {
                ClockEvent::SetHour(resolve_hour(index, marks, current_time.hour()))
            }
            DisplayMode::ShowingMinute => ClockEvent::SetMinute(resolve_minute(index, marks)),
        };
        debug!(index, ?event, "touch resolved");
        self.on_event.call(event);
    }

    /// Like [`ClockInteractionController::on_touch`], reading the time from
    /// the injected accessor.
    pub fn touch(&self, point: Vec2, face_center: Vec2, face_radius: f32) {
        self.on_touch(point, face_center, face_radius, self.current_time());
    }

    /// Hook for the host's touch-moved and touch-ended callbacks.
    ///
    /// A host can forward both callbacks here unchanged. Neither phase keeps
    /// drag state, so a touch that ends on a point emits exactly what a move
    /// to that point emits.
    pub fn handle_touch(
        &self,
        phase: TouchPhase,
        point: Vec2,
        face_center: Vec2,
        face_radius: f32,
    ) {
        trace!(?phase, "touch phase");
        self.touch(point, face_center, face_radius);
    }

    /// Mark value that renders as selected for the active face.
    pub fn highlighted_mark(&self, current_time: TimeOfDay) -> u8 {
        match self.display_mode {
            DisplayMode::ShowingHour => current_time.hour_12(),
            DisplayMode::ShowingMinute => current_time.minute(),
        }
    }

    /// Index of the highlighted mark within [`Self::active_marks`], if the
    /// current value lies on a mark.
    pub fn highlighted_index(&self, current_time: TimeOfDay) -> Option<usize> {
        let value = self.highlighted_mark(current_time);
        self.active_marks().iter().position(|mark| *mark == value)
    }

    /// Moves the host's time into `period`, emitting the new hour.
    ///
    /// Nothing is emitted when the time is already in `period`.
    pub fn select_period(&self, period: DayPeriod, current_time: TimeOfDay) {
        if current_time.period() == period {
            return;
        }
        let hour = current_time.with_period(period).hour();
        debug!(?period, hour, "period selected");
        self.on_event.call(ClockEvent::SetHour(hour));
    }

    /// `h:mm` readout with the segment for the active face emphasised.
    pub fn readout(&self, current_time: TimeOfDay) -> TimeReadout {
        current_time.readout(self.display_mode)
    }
}
