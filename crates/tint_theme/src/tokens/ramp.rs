//! Primary color ramp

use std::fmt::{Display, Formatter};

/// One of the 11 fixed stops of a color ramp, lightest to darkest.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum RampStop {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl RampStop {
    /// All stops in ramp order.
    pub const ALL: [RampStop; 11] = [
        RampStop::S50,
        RampStop::S100,
        RampStop::S200,
        RampStop::S300,
        RampStop::S400,
        RampStop::S500,
        RampStop::S600,
        RampStop::S700,
        RampStop::S800,
        RampStop::S900,
        RampStop::S950,
    ];

    /// The brand stop, kept identical in light and dark mode.
    pub const BRAND: RampStop = RampStop::S500;

    /// Numeric label used in variable names (`50`, `100`, ..., `950`).
    pub fn value(self) -> u16 {
        match self {
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
        }
    }

    /// Position in the ramp, 0 for `50` through 10 for `950`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.iter().copied().find(|stop| stop.value() == value)
    }

    /// The stop mirrored around 500 (`50` <-> `950`, `400` <-> `600`).
    pub fn reflect(self) -> Self {
        Self::ALL[Self::ALL.len() - 1 - self.index()]
    }
}

impl Display for RampStop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An 11-stop color scale; every stop is always present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorRamp([&'static str; 11]);

impl ColorRamp {
    /// Build a ramp from its stops, ordered 50 through 950.
    pub const fn new(stops: [&'static str; 11]) -> Self {
        Self(stops)
    }

    pub fn get(&self, stop: RampStop) -> &'static str {
        self.0[stop.index()]
    }

    /// Iterate `(stop, color)` pairs in ramp order.
    pub fn iter(&self) -> impl Iterator<Item = (RampStop, &'static str)> + '_ {
        RampStop::ALL.iter().map(move |&stop| (stop, self.get(stop)))
    }
}
