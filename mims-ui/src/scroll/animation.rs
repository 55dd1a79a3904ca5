/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Scroll-linked math: easing, the scroll animation itself, and the
//! header/hero values derived from the scroll position.

/// Exponential ease-out, clamped so the last frame lands exactly on 1.
pub fn ease_out_expo(t: f64) -> f64 {
    (1.001 - 2f64.powf(-10.0 * t)).min(1.0)
}

/// The header turns opaque once the page has moved past this offset.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

/// Hero background offset: 0 → 150 px over the first 500 px of scroll.
pub fn hero_parallax(scroll_y: f64) -> f64 {
    map_range(scroll_y, (0.0, 500.0), (0.0, 150.0))
}

/// Hero copy opacity: 1 → 0 over the first 300 px of scroll.
pub fn hero_opacity(scroll_y: f64) -> f64 {
    map_range(scroll_y, (0.0, 300.0), (1.0, 0.0))
}

/// Linear interpolation of `value` from `input` onto `output`, clamped.
fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let progress = ((value - input.0) / (input.1 - input.0)).clamp(0.0, 1.0);
    output.0 + (output.1 - output.0) * progress
}

/// Document offset to scroll to so that an element lands `offset` pixels
/// below the top of the viewport.
pub fn anchor_offset_target(element_top: f64, page_y: f64, offset: f64) -> f64 {
    (element_top + page_y - offset).max(0.0)
}

/// Converts a wheel delta to pixels according to its `deltaMode`.
pub fn wheel_delta_px(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    const LINE_HEIGHT: f64 = 16.0;
    match delta_mode {
        1 => delta * LINE_HEIGHT,
        2 => delta * page_height,
        _ => delta,
    }
}

/// A single eased scroll from one offset to another.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    /// Timestamp of the first frame, filled in lazily.
    pub start_ms: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_ms: None,
        }
    }

    /// Position for the frame at `now_ms`, and whether the animation is done.
    pub fn position_at(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return (self.to, true);
        }
        let t = ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = ease_out_expo(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_starts_near_zero_and_saturates() {
        assert!(ease_out_expo(0.0).abs() < 0.01);
        assert!(ease_out_expo(0.5) > 0.95);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(2.0), 1.0);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut previous = ease_out_expo(0.0);
        for step in 1..=100 {
            let value = ease_out_expo(step as f64 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn animation_runs_from_first_frame_to_target() {
        let mut anim = ScrollAnimation::new(100.0, 1100.0, 1200.0);
        let (first, done) = anim.position_at(5000.0);
        assert!(!done);
        assert!((first - 100.0).abs() < 2.0);

        let (mid, done) = anim.position_at(5600.0);
        assert!(!done);
        assert!(mid > 1000.0 && mid < 1100.0);

        assert_eq!(anim.position_at(6200.0), (1100.0, true));
    }

    #[test]
    fn zero_duration_jumps() {
        let mut anim = ScrollAnimation::new(0.0, 300.0, 0.0);
        assert_eq!(anim.position_at(1.0), (300.0, true));
    }

    #[test]
    fn header_threshold() {
        assert!(!header_is_scrolled(0.0));
        assert!(!header_is_scrolled(50.0));
        assert!(header_is_scrolled(51.0));
    }

    #[test]
    fn hero_values_are_clamped() {
        assert_eq!(hero_parallax(0.0), 0.0);
        assert_eq!(hero_parallax(250.0), 75.0);
        assert_eq!(hero_parallax(2000.0), 150.0);
        assert_eq!(hero_opacity(0.0), 1.0);
        assert_eq!(hero_opacity(150.0), 0.5);
        assert_eq!(hero_opacity(900.0), 0.0);
        assert_eq!(hero_opacity(-20.0), 1.0);
    }

    #[test]
    fn anchor_target_subtracts_offset() {
        assert_eq!(anchor_offset_target(300.0, 1000.0, 140.0), 1160.0);
        assert_eq!(anchor_offset_target(10.0, 0.0, 140.0), 0.0);
    }

    #[test]
    fn wheel_modes() {
        assert_eq!(wheel_delta_px(3.0, 0, 800.0), 3.0);
        assert_eq!(wheel_delta_px(3.0, 1, 800.0), 48.0);
        assert_eq!(wheel_delta_px(-1.0, 2, 800.0), -800.0);
    }
}
