//! Scripted host for the clock face: owns the time, replays a drag across
//! the hour face, switches to minutes and logs what would be drawn.
//!
//! Set `RUST_LOG=clockface=debug` to see every resolved touch.

use std::sync::Arc;

use clockface::{
    ClockEvent, ClockFaceArgs, ClockInteractionController, DayPeriod, FaceLayout, FacePlan,
    LabelMetrics, TimeOfDay, TouchPhase, geometry::point_at_angle, glam::Vec2,
};
use parking_lot::Mutex;
use tracing::info;

const VIEW_SIZE: Vec2 = Vec2::new(320.0, 360.0);

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,clockface=info,example=info")
        {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Owns the authoritative time and the controller wired to it.
struct Host {
    time: Arc<Mutex<TimeOfDay>>,
    controller: ClockInteractionController,
    layout: FaceLayout,
    metrics: LabelMetrics,
}

impl Host {
    fn new(initial: TimeOfDay, minute_step: u8) -> clockface::Result<Self> {
        let time = Arc::new(Mutex::new(initial));
        let config = ClockFaceArgs::default().minute_step(minute_step).build()?;
        let controller = ClockInteractionController::new(
            config,
            {
                let time = Arc::clone(&time);
                move || *time.lock()
            },
            {
                let time = Arc::clone(&time);
                move |event: ClockEvent| {
                    let mut time = time.lock();
                    *time = event.apply(*time);
                }
            },
        );
        Ok(Self {
            time,
            controller,
            layout: FaceLayout::fit(VIEW_SIZE.x, VIEW_SIZE.y),
            metrics: LabelMetrics::default().regular(20.0).highlighted(22.0),
        })
    }

    fn time(&self) -> TimeOfDay {
        *self.time.lock()
    }

    /// Replays a drag sweeping clockwise from `from` to `to` degrees.
    fn drag(&self, from: f32, to: f32, samples: usize) {
        let (center, radius) = (self.layout.center(), self.layout.radius());
        let samples = samples.max(1);
        for i in 0..=samples {
            let degrees = from + (to - from) * i as f32 / samples as f32;
            let point = point_at_angle(center, radius * 0.8, degrees);
            let phase = if i == samples {
                TouchPhase::Ended
            } else {
                TouchPhase::Moved
            };
            self.controller.handle_touch(phase, point, center, radius);
        }
    }

    fn redraw(&self) -> FacePlan {
        let time = self.time();
        let plan = self.controller.plan(&self.layout, self.metrics, time);
        let readout = self.controller.readout(time);
        info!(
            time = %readout.text(),
            editing = %readout.emphasised(),
            mode = ?plan.mode,
            marks = plan.marks.len(),
            labeled = plan.marks.iter().filter(|mark| mark.labeled).count(),
            highlighted = ?plan.highlighted().map(|mark| (mark.value, mark.position)),
            "redraw"
        );
        plan
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut host = Host::new(TimeOfDay::new(9, 0), 1)?;
    host.controller.toggle_display_mode(false);
    host.redraw();

    host.drag(0.0, 130.0, 12);
    host.redraw();

    host.controller.select_period(DayPeriod::Pm, host.controller.current_time());
    host.redraw();

    host.controller.toggle_display_mode(true);
    host.drag(200.0, 250.0, 8);
    host.redraw();

    host.controller.set_minute_step_minutes(60)?;
    host.controller.toggle_display_mode(true);
    host.redraw();

    info!(final_time = %host.time(), "done");
    Ok(())
}
