use std::f64::consts::TAU;

pub(crate) const DEFAULT_WIDTH: usize = 30;
pub(crate) const DEFAULT_MARGIN: usize = 26;
pub(crate) const DEFAULT_INCREMENT: f64 = 0.2;
pub(crate) const DEFAULT_INTERVAL_MS: u64 = 200;
/// Widest row accepted from settings.
pub(crate) const MAX_WIDTH: usize = 65_535;

/// Angular offsets of the three lights, in processing order.
pub(crate) const LIGHT_OFFSETS: [f64; 3] = [0.0, TAU / 3.0, TAU * 2.0 / 3.0];

/// The only state carried from one tick to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct OrbitState {
    pub(crate) angle: f64,
}

/// Where a light lands on the row this tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Projection {
    pub(crate) column: usize,
    pub(crate) depth: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Glyph {
    Near,
    Front,
    Back,
    Far,
}

impl Glyph {
    /// Step function over depth; each bracket includes its upper-side boundary.
    pub(crate) fn from_depth(depth: f64) -> Self {
        if depth >= 0.6 {
            Glyph::Near
        } else if depth >= 0.0 {
            Glyph::Front
        } else if depth >= -0.6 {
            Glyph::Back
        } else {
            Glyph::Far
        }
    }

    pub(crate) fn ch(self) -> char {
        match self {
            Glyph::Near => '@',
            Glyph::Front => '*',
            Glyph::Back => '^',
            Glyph::Far => '`',
        }
    }
}
