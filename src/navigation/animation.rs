// SPDX-License-Identifier: MPL-2.0
//! Time-based playback of a [`ContentTransform`].
//!
//! A [`TransitionAnimation`] turns a descriptor into per-frame layer positions
//! and opacities. Positions are fractions of the container size, so the
//! renderer multiplies them by the bounds it lays the screens out in.

use super::screen::Screen;
use super::transition::{bottom_bar_transition, ContentTransform, Slide, SlideDirection};
use std::time::{Duration, Instant};

/// Control points of the "fast out, slow in" easing curve.
///
/// The presets behind `iced::animation::Easing` are polynomial curves with no
/// cubic-bezier variant, so this curve is solved locally. Keeping it here also
/// leaves the navigation module free of the GUI toolkit.
const EASING: (f32, f32, f32, f32) = (0.4, 0.0, 0.2, 1.0);

/// Position and opacity of one layer at a point in the animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerFrame {
    /// Horizontal offset as a fraction of the container width.
    pub translate_x: f32,
    /// Vertical offset as a fraction of the container height.
    pub translate_y: f32,
    /// 0.0 is invisible, 1.0 is fully opaque.
    pub opacity: f32,
}

impl LayerFrame {
    /// A layer resting in place, fully visible.
    pub const IDENTITY: LayerFrame = LayerFrame {
        translate_x: 0.0,
        translate_y: 0.0,
        opacity: 1.0,
    };
}

/// A transition being played between two screens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionAnimation {
    pub transform: ContentTransform,
    pub from: Screen,
    pub to: Screen,
    started: Instant,
    duration: Duration,
}

impl TransitionAnimation {
    #[must_use]
    pub fn new(
        transform: ContentTransform,
        from: Screen,
        to: Screen,
        started: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            transform,
            from,
            to,
            started,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Frame of the incoming screen at linear progress `progress`.
    #[must_use]
    pub fn enter_frame(&self, progress: f32) -> LayerFrame {
        enter_frame(&self.transform, ease(progress))
    }

    /// Frame of the outgoing screen at linear progress `progress`.
    #[must_use]
    pub fn exit_frame(&self, progress: f32) -> LayerFrame {
        exit_frame(&self.transform, ease(progress))
    }

    /// Frame of the bottom bar, if this change shows or hides it.
    #[must_use]
    pub fn bottom_bar_frame(&self, progress: f32) -> Option<LayerFrame> {
        let visible = self.to.shows_bottom_bar();
        (visible != self.from.shows_bottom_bar()).then(|| bottom_bar_frame(visible, ease(progress)))
    }
}

/// Incoming layer at eased progress `t`: it starts `offset` away on the side
/// opposite its travel direction and settles at rest.
#[must_use]
pub fn enter_frame(transform: &ContentTransform, t: f32) -> LayerFrame {
    let t = t.clamp(0.0, 1.0);
    let remaining = 1.0 - t;
    let (translate_x, translate_y) = transform
        .enter
        .slide
        .map(|slide| displacement(slide.direction.opposite(), slide.offset * remaining))
        .unwrap_or((0.0, 0.0));
    LayerFrame {
        translate_x,
        translate_y,
        opacity: if transform.enter.fade { t } else { 1.0 },
    }
}

/// Outgoing layer at eased progress `t`: it leaves rest and travels `offset`
/// in its slide direction.
#[must_use]
pub fn exit_frame(transform: &ContentTransform, t: f32) -> LayerFrame {
    let t = t.clamp(0.0, 1.0);
    let (translate_x, translate_y) = transform
        .exit
        .slide
        .map(|slide: Slide| displacement(slide.direction, slide.offset * t))
        .unwrap_or((0.0, 0.0));
    LayerFrame {
        translate_x,
        translate_y,
        opacity: if transform.exit.fade { 1.0 - t } else { 1.0 },
    }
}

/// Bottom bar at eased progress `t` while it appears (`visible`) or hides.
/// Offsets are fractions of the bar's own height.
#[must_use]
pub fn bottom_bar_frame(visible: bool, t: f32) -> LayerFrame {
    let t = t.clamp(0.0, 1.0);
    let (slide, fade) = bottom_bar_transition(visible);
    let (distance, direction, opacity) = if visible {
        (slide.offset * (1.0 - t), slide.direction.opposite(), t)
    } else {
        (slide.offset * t, slide.direction, 1.0 - t)
    };
    let (translate_x, translate_y) = displacement(direction, distance);
    LayerFrame {
        translate_x,
        translate_y,
        opacity: if fade { opacity } else { 1.0 },
    }
}

fn displacement(direction: SlideDirection, amount: f32) -> (f32, f32) {
    match direction {
        SlideDirection::Start => (-amount, 0.0),
        SlideDirection::End => (amount, 0.0),
        SlideDirection::Up => (0.0, -amount),
        SlideDirection::Down => (0.0, amount),
    }
}

/// Applies the standard easing curve to linear progress.
#[must_use]
pub fn ease(t: f32) -> f32 {
    let (x1, y1, x2, y2) = EASING;
    cubic_bezier(x1, y1, x2, y2, t.clamp(0.0, 1.0))
}

/// Evaluates a CSS-style cubic bezier timing curve at `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let sample = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton-Raphson first, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let error = sample(x1, x2, s) - x;
        if error.abs() < 1e-5 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= error / d;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = sample(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::transition::DRILL_OFFSET;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn easing_pins_endpoints() {
        assert_abs_diff_eq!(ease(0.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(ease(1.0), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = ease(step as f32 / 100.0);
            assert!(value >= previous - 1e-4, "step {step}");
            previous = value;
        }
    }

    #[test]
    fn easing_front_loads_motion() {
        assert!(ease(0.5) > 0.5);
    }

    #[test]
    fn easing_matches_reference_bezier_samples() {
        assert_abs_diff_eq!(ease(0.25), 0.2366, epsilon = 1e-3);
        assert_abs_diff_eq!(ease(0.5), 0.7756, epsilon = 1e-3);
    }

    #[test]
    fn lateral_forward_enters_from_trailing_edge() {
        let transform = ContentTransform::lateral(SlideDirection::Start);
        let start = enter_frame(&transform, 0.0);
        assert_abs_diff_eq!(start.translate_x, 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(start.opacity, 1.0, epsilon = F32_EPSILON);
        assert_eq!(enter_frame(&transform, 1.0), LayerFrame::IDENTITY);

        let gone = exit_frame(&transform, 1.0);
        assert_abs_diff_eq!(gone.translate_x, -1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn drill_moves_a_third_and_fades() {
        let transform = ContentTransform::drill(SlideDirection::Start);
        let start = enter_frame(&transform, 0.0);
        assert_abs_diff_eq!(start.translate_x, DRILL_OFFSET, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(start.opacity, 0.0, epsilon = F32_EPSILON);

        let end = exit_frame(&transform, 1.0);
        assert_abs_diff_eq!(end.translate_x, -DRILL_OFFSET, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(end.opacity, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fallback_rises_from_below_and_exit_stays_put() {
        let transform = ContentTransform::fallback();
        let start = enter_frame(&transform, 0.0);
        assert!(start.translate_y > 0.0);
        assert_abs_diff_eq!(start.translate_x, 0.0, epsilon = F32_EPSILON);

        let halfway = exit_frame(&transform, 0.5);
        assert_abs_diff_eq!(halfway.translate_x, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(halfway.translate_y, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(halfway.opacity, 0.5, epsilon = F32_EPSILON);
    }

    #[test]
    fn bottom_bar_rises_into_place() {
        let start = bottom_bar_frame(true, 0.0);
        assert_abs_diff_eq!(start.translate_y, 0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(start.opacity, 0.0, epsilon = F32_EPSILON);
        assert_eq!(bottom_bar_frame(true, 1.0), LayerFrame::IDENTITY);

        let hidden = bottom_bar_frame(false, 1.0);
        assert_abs_diff_eq!(hidden.translate_y, 0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(hidden.opacity, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn bottom_bar_only_animates_when_visibility_changes() {
        let started = Instant::now();
        let duration = Duration::from_millis(300);
        let drill = TransitionAnimation::new(
            ContentTransform::drill(SlideDirection::Start),
            Screen::More,
            Screen::Themes,
            started,
            duration,
        );
        assert!(drill.bottom_bar_frame(0.5).is_some());

        let lateral = TransitionAnimation::new(
            ContentTransform::lateral(SlideDirection::Start),
            Screen::Browse,
            Screen::Search,
            started,
            duration,
        );
        assert!(lateral.bottom_bar_frame(0.5).is_none());
    }

    #[test]
    fn progress_clamps_and_finishes() {
        let started = Instant::now();
        let animation = TransitionAnimation::new(
            ContentTransform::fallback(),
            Screen::Repositories,
            Screen::Themes,
            started,
            Duration::from_millis(200),
        );
        assert_abs_diff_eq!(animation.progress(started), 0.0, epsilon = F32_EPSILON);
        let midway = animation.progress(started + Duration::from_millis(100));
        assert_abs_diff_eq!(midway, 0.5, epsilon = 1e-3);
        assert!(animation.is_finished(started + Duration::from_secs(1)));
    }

    #[test]
    fn zero_duration_is_immediately_finished() {
        let started = Instant::now();
        let animation = TransitionAnimation::new(
            ContentTransform::lateral(SlideDirection::End),
            Screen::Library,
            Screen::Browse,
            started,
            Duration::ZERO,
        );
        assert!(animation.is_finished(started));
    }
}
