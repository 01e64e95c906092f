//! Interaction engine for analog clock-face time pickers.
//!
//! The crate turns touch points on a round face into hour and minute values,
//! decides which mark is highlighted for a given time, and tracks whether the
//! face is showing hours or minutes. Drawing, animation and the surrounding
//! picker chrome stay with the host.
//!
//! # Modules
//!
//! - [`geometry`]: stateless angle, point and mark conversions
//! - [`config`]: minute steps and the marks they produce
//! - [`time`]: the host-owned time value and its readout
//! - [`controller`]: display mode and touch handling
//! - [`layout`]: face fitting and the per-mark draw plan
//!
//! # Example
//!
//! ```
//! use clockface::{ClockEvent, ClockFaceArgs, ClockInteractionController, TimeOfDay};
//! use clockface::glam::Vec2;
//!
//! let config = ClockFaceArgs::default().minute_step(5).build()?;
//! let mut controller = ClockInteractionController::new(
//!     config,
//!     || TimeOfDay::new(14, 0),
//!     |event: ClockEvent| assert_eq!(event, ClockEvent::SetMinute(15)),
//! );
//! controller.toggle_display_mode(true);
//! controller.toggle_display_mode(true);
//! controller.touch(Vec2::new(180.0, 100.0), Vec2::new(100.0, 100.0), 80.0);
//! # Ok::<(), clockface::ClockError>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod prop;
pub mod time;

pub use glam;

pub use config::{ClockFaceArgs, ClockFaceConfig, HOUR_MARKS, MinuteStep};
pub use controller::{ClockEvent, ClockInteractionController, DisplayMode, TouchPhase};
pub use error::{ClockError, Result};
pub use layout::{FaceLayout, FacePlan, LabelMetrics, MarkVisual, Needle};
pub use prop::{Callback, CallbackWith};
pub use time::{DayPeriod, TimeOfDay, TimeReadout};
