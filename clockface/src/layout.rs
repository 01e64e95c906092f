//! Face fitting and the per-mark draw plan.
//!
//! Nothing here draws. A host measures its label fonts, passes the sizes in
//! as [`LabelMetrics`], and paints whatever [`FacePlan`] describes.

use derive_setters::Setters;
use glam::Vec2;
use smallvec::SmallVec;

use crate::{
    config::MinuteStep,
    controller::{ClockInteractionController, DisplayMode},
    geometry::mark_position,
    time::TimeOfDay,
};

/// Gap between the host bounds and the face.
pub const BORDER: f32 = 8.0;
/// Padding added around a label to size its highlight ring.
pub const NUMBER_CIRCLE_BORDER: f32 = 12.0;
/// Diameter of the dot drawn at the face center.
pub const CENTER_PIECE_SIZE: f32 = 4.0;

/// The face circle inside the host view's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceLayout {
    origin: Vec2,
    size: f32,
}

impl FaceLayout {
    /// Fits the largest face into `width` x `height`, centered horizontally
    /// and [`BORDER`] from the top.
    pub fn fit(width: f32, height: f32) -> Self {
        let size = (width - BORDER * 2.0).min(height - BORDER * 2.0).max(0.0);
        Self {
            origin: Vec2::new((width - size) / 2.0, BORDER),
            size,
        }
    }

    /// Top-left corner of the face's bounding square.
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Face diameter.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Face center in view space.
    pub fn center(&self) -> Vec2 {
        self.origin + Vec2::splat(self.size / 2.0)
    }

    /// Face radius.
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// Label extents measured by the host, each the larger of the width and
/// height of the widest label ("12" for hours, "60" for minutes).
#[derive(Debug, Clone, Copy, PartialEq, Default, Setters)]
pub struct LabelMetrics {
    /// Extent in the regular label font.
    pub regular: f32,
    /// Extent in the highlighted label font.
    pub highlighted: f32,
}

/// One mark as it should be painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkVisual {
    /// Position of the mark in face order.
    pub index: usize,
    /// Hour (1-12) or minute value.
    pub value: u8,
    /// Label center.
    pub position: Vec2,
    /// Whether a numeric label is drawn.
    pub labeled: bool,
    /// Highlight ring diameter, present only on the selected mark.
    pub ring_diameter: Option<f32>,
}

impl MarkVisual {
    /// Whether the mark is the selected one.
    pub fn is_highlighted(&self) -> bool {
        self.ring_diameter.is_some()
    }
}

/// Line from the face center to the edge of the highlight ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Needle {
    /// Start point, the face center.
    pub from: Vec2,
    /// End point, on the ring edge nearest the center.
    pub to: Vec2,
}

/// Everything the host paints for one redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePlan {
    /// Face the plan was built for.
    pub mode: DisplayMode,
    /// Face center.
    pub center: Vec2,
    /// Face radius.
    pub radius: f32,
    /// Marks in face order.
    pub marks: SmallVec<[MarkVisual; 12]>,
    /// Needle to the selected mark, if the current value lies on a mark.
    pub needle: Option<Needle>,
}

impl FacePlan {
    /// The selected mark, if any.
    pub fn highlighted(&self) -> Option<&MarkVisual> {
        self.marks.iter().find(|mark| mark.is_highlighted())
    }
}

/// Whether a mark gets a numeric label.
///
/// Hours are always labeled. With a step below 5 minutes only multiples of
/// 5 are labeled; the marks in between can still be selected and
/// highlighted.
pub fn is_labeled(mode: DisplayMode, step: MinuteStep, value: u8) -> bool {
    match mode {
        DisplayMode::ShowingHour => true,
        DisplayMode::ShowingMinute => !step.is_sub_label() || value % 5 == 0,
    }
}

/// Builds the draw plan for `marks` with `highlighted` as the selected value.
pub fn plan_face(
    layout: &FaceLayout,
    metrics: LabelMetrics,
    mode: DisplayMode,
    step: MinuteStep,
    marks: &[u8],
    highlighted: u8,
) -> FacePlan {
    let center = layout.center();
    let radius = (layout.radius() - metrics.regular).max(0.0);
    let radius_highlight = (layout.radius() - metrics.highlighted).max(0.0);

    let mut needle = None;
    let marks = marks
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let labeled = is_labeled(mode, step, value);
            if value != highlighted {
                return MarkVisual {
                    index,
                    value,
                    position: mark_position(center, radius, index, marks.len()),
                    labeled,
                    ring_diameter: None,
                };
            }

            let label_extent = if labeled { metrics.highlighted } else { 0.0 };
            let ring = label_extent + NUMBER_CIRCLE_BORDER;
            let needle_length = (radius_highlight - ring / 2.0).max(0.0);
            needle = Some(Needle {
                from: center,
                to: mark_position(center, needle_length, index, marks.len()),
            });
            MarkVisual {
                index,
                value,
                position: mark_position(center, radius_highlight, index, marks.len()),
                labeled,
                ring_diameter: Some(ring),
            }
        })
        .collect();

    FacePlan {
        mode,
        center,
        radius: layout.radius(),
        marks,
        needle,
    }
}

impl ClockInteractionController {
    /// Builds the draw plan for the active face at `current_time`.
    pub fn plan(
        &self,
        layout: &FaceLayout,
        metrics: LabelMetrics,
        current_time: TimeOfDay,
    ) -> FacePlan {
        plan_face(
            layout,
            metrics,
            self.display_mode(),
            self.minute_step(),
            self.active_marks(),
            self.highlighted_mark(current_time),
        )
    }
}
