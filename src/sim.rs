use crate::config::Settings;
use crate::model::{OrbitState, Projection, LIGHT_OFFSETS};
use crate::render::Frame;
use std::f64::consts::TAU;

impl OrbitState {
    /// Advance by `increment` and wrap back into `[0, 2π)`.
    ///
    /// `increment` is validated to be below `2π`, so one subtraction is enough.
    pub(crate) fn advance(self, increment: f64) -> Self {
        let mut angle = self.angle + increment;
        if angle >= TAU {
            angle -= TAU;
        }
        Self { angle }
    }
}

/// Sine projection onto a row of `width + 1` columns; depth is the cosine.
///
/// Half columns round to the even neighbour.
pub(crate) fn project(effective_angle: f64, width: usize) -> Projection {
    let (s, c) = effective_angle.sin_cos();
    let w = width as f64;
    let column = ((s + 1.0) * w / 2.0).round_ties_even().clamp(0.0, w) as usize;
    Projection { column, depth: c }
}

/// Draw every light at the given angle into a fresh frame.
pub(crate) fn compose(state: OrbitState, width: usize) -> Frame {
    let mut frame = Frame::new(width);
    for offset in LIGHT_OFFSETS {
        frame.plot(project(state.angle + offset, width));
    }
    frame
}

/// One tick: advance the orbit, then draw it.
pub(crate) fn step(state: OrbitState, settings: &Settings) -> (OrbitState, Frame) {
    let next = state.advance(settings.increment);
    let frame = compose(next, settings.width);
    (next, frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scenario_at_zero_angle() {
        let frame = compose(OrbitState { angle: 0.0 }, 30);
        let line = frame.to_line();
        assert_eq!(line.len(), 31);
        let chars: Vec<char> = line.chars().collect();
        assert_eq!(chars[15], '@');
        assert_eq!(chars[28], '^');
        assert_eq!(chars[2], '^');
        let lit = chars.iter().filter(|c| **c != ' ').count();
        assert_eq!(lit, 3);
    }

    #[test]
    fn half_column_rounds_to_even() {
        // (sin(0) + 1) * 29 / 2 == 14.5
        let p = project(0.0, 29);
        assert_eq!(p.column, 14);
        let chars: Vec<char> = compose(OrbitState { angle: 0.0 }, 29).to_line().chars().collect();
        assert_eq!(chars[14], '@');
        assert_eq!(project(0.0, 27).column, 14);
    }

    #[test]
    fn zero_width_puts_everything_in_one_cell() {
        let line = compose(OrbitState { angle: 0.0 }, 0).to_line();
        assert_eq!(line, "@");
    }

    #[test]
    fn first_tick_advances_before_drawing() {
        let settings = Settings::default();
        let (next, frame) = step(OrbitState::default(), &settings);
        assert!((next.angle - 0.2).abs() < 1e-12);
        assert_eq!(frame.to_line(), compose(next, settings.width).to_line());
    }

    #[test]
    fn wraps_once_past_full_turn() {
        let s = OrbitState { angle: TAU - 0.1 }.advance(0.2);
        assert!((s.angle - 0.1).abs() < 1e-9);
        let s = OrbitState { angle: TAU - 0.2 }.advance(0.2);
        assert!(s.angle >= 0.0 && s.angle < TAU);
    }

    #[test]
    fn zero_increment_repeats_the_same_line() {
        let settings = Settings {
            increment: 0.0,
            ..Settings::default()
        };
        let (s1, f1) = step(OrbitState { angle: 1.3 }, &settings);
        let (_, f2) = step(s1, &settings);
        assert_eq!(f1.to_line().as_bytes(), f2.to_line().as_bytes());
    }

    proptest! {
        #[test]
        fn angle_stays_in_range(ticks in 0usize..2000, inc in 0.0f64..TAU) {
            let mut s = OrbitState::default();
            for _ in 0..ticks {
                s = s.advance(inc);
                prop_assert!(s.angle >= 0.0 && s.angle < TAU);
            }
        }

        #[test]
        fn column_is_clamped(angle in 0.0f64..TAU, width in 0usize..400) {
            for offset in LIGHT_OFFSETS {
                let p = project(angle + offset, width);
                prop_assert!(p.column <= width);
                prop_assert!((-1.0..=1.0).contains(&p.depth));
            }
        }

        #[test]
        fn frame_width_and_alphabet(angle in 0.0f64..TAU, width in 0usize..200) {
            let line = compose(OrbitState { angle }, width).to_line();
            prop_assert_eq!(line.chars().count(), width + 1);
            prop_assert!(line.chars().all(|c| " `^*@".contains(c)));
        }
    }
}
