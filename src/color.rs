// src/color.rs

//! The rainbow color cycle.
//!
//! A `ColorState` walks a closed hexagon through RGB space. Two channels are
//! always pinned at a bound while the third ramps towards the opposite bound;
//! when it gets there the walk moves on to the next `Phase`. Six phases make
//! one full trip around the color wheel:
//!
//! ```text
//! phase  channel  direction   pinned
//!   0      g        up        r = high, b = low
//!   1      r        down      g = high, b = low
//!   2      b        up        r = low,  g = high
//!   3      g        down      r = low,  b = high
//!   4      r        up        g = low,  b = high
//!   5      b        down      r = high, g = low
//! ```

use serde::{Deserialize, Serialize};

/// Step used when priming the starting color from the pattern offset.
pub const OFFSET_STEP: u8 = 16;

/// Largest accepted pattern offset.
pub const MAX_OFFSET: u8 = 100;

/// Inclusive channel limits shared by every color of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub low: u8,
    pub high: u8,
}

impl Bounds {
    pub const fn new(low: u8, high: u8) -> Self {
        Bounds { low, high }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::new(80, 255)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// One leg of the hexagonal walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    GreenUp,
    RedDown,
    BlueUp,
    GreenDown,
    RedUp,
    BlueDown,
}

impl Phase {
    /// Transition table: the channel each phase ramps, where it ramps to,
    /// and the phase that follows once the bound is reached.
    const fn leg(self) -> (Channel, Direction, Phase) {
        match self {
            Phase::GreenUp => (Channel::Green, Direction::Up, Phase::RedDown),
            Phase::RedDown => (Channel::Red, Direction::Down, Phase::BlueUp),
            Phase::BlueUp => (Channel::Blue, Direction::Up, Phase::GreenDown),
            Phase::GreenDown => (Channel::Green, Direction::Down, Phase::RedUp),
            Phase::RedUp => (Channel::Red, Direction::Up, Phase::BlueDown),
            Phase::BlueDown => (Channel::Blue, Direction::Down, Phase::GreenUp),
        }
    }

    pub const fn channel(self) -> Channel {
        self.leg().0
    }

    pub const fn direction(self) -> Direction {
        self.leg().1
    }

    pub const fn next(self) -> Phase {
        self.leg().2
    }
}

/// A point on the color cycle. Cheap to copy; advancing yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorState {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub phase: Phase,
}

impl ColorState {
    /// The start of the cycle: full red, at the beginning of the green ramp.
    pub const fn initial(bounds: Bounds) -> Self {
        ColorState {
            r: bounds.high,
            g: bounds.low,
            b: bounds.low,
            phase: Phase::GreenUp,
        }
    }

    /// Starting color for a pattern offset: the initial state advanced
    /// `offset` times by `OFFSET_STEP`.
    ///
    /// The loop is bounded by the iteration count, so degenerate bounds can
    /// never make it spin.
    pub fn primed(offset: u8, bounds: Bounds) -> Self {
        (0..offset).fold(ColorState::initial(bounds), |state, _| {
            state.advanced(OFFSET_STEP, bounds)
        })
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    fn channel_mut(&mut self, channel: Channel) -> &mut u8 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    /// Moves the current phase's channel by `delta`.
    ///
    /// Reaching or passing the phase's target bound clamps the channel to
    /// that bound and moves to the next phase. With `low == high` every call
    /// clamps immediately; with `delta == 0` (and `low < high`) the state
    /// does not change.
    #[must_use]
    pub fn advanced(self, delta: u8, bounds: Bounds) -> Self {
        let mut next = self;
        let phase = self.phase;
        let value = next.channel_mut(phase.channel());
        let current = i16::from(*value);
        let delta = i16::from(delta);

        let reached = match phase.direction() {
            Direction::Up => {
                let moved = current + delta;
                if moved >= i16::from(bounds.high) {
                    *value = bounds.high;
                    true
                } else {
                    // moved < high <= 255
                    *value = moved as u8;
                    false
                }
            }
            Direction::Down => {
                let moved = current - delta;
                if moved <= i16::from(bounds.low) {
                    *value = bounds.low;
                    true
                } else {
                    // moved > low >= 0
                    *value = moved as u8;
                    false
                }
            }
        };

        if reached {
            next.phase = phase.next();
        }
        next
    }
}

#[cfg(test)]
mod tests;
