// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded zoom stepping for the timeline's zoom controls.

/// Zoom state with clamped stepping.
///
/// Backs zoom-in / zoom-out / reset controls and wheel zooming. The level
/// always stays within `[min, max]`; steps that would leave the range clamp
/// to the boundary and report whether anything changed so callers can skip
/// a recompute when nothing moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomControl {
    level: f64,
    step: f64,
    min: f64,
    max: f64,
}

impl ZoomControl {
    /// Creates a control with the given step size and zoom range.
    ///
    /// The range is normalized so that `min <= max`; the initial level is
    /// `1.0` clamped into the range.
    #[must_use]
    pub fn new(step: f64, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            level: 1.0_f64.clamp(min, max),
            step,
            min,
            max,
        }
    }

    /// The current zoom level.
    #[must_use]
    pub fn level(&self) -> f64 {
        self.level
    }

    /// The configured step size.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The lower zoom bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// The upper zoom bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Sets the level, clamping into range. Returns `true` if it changed.
    pub fn set_level(&mut self, level: f64) -> bool {
        let clamped = level.clamp(self.min, self.max);
        if clamped == self.level {
            return false;
        }
        self.level = clamped;
        true
    }

    /// Steps the level up. Returns `true` if it changed.
    pub fn zoom_in(&mut self) -> bool {
        self.set_level(self.level + self.step)
    }

    /// Steps the level down. Returns `true` if it changed.
    pub fn zoom_out(&mut self) -> bool {
        self.set_level(self.level - self.step)
    }

    /// Resets the level to `1.0` (clamped). Returns `true` if it changed.
    pub fn reset(&mut self) -> bool {
        self.set_level(1.0)
    }
}

impl Default for ZoomControl {
    /// The reference configuration: step `0.1`, range `[0.5, 2.0]`.
    fn default() -> Self {
        Self::new(0.1, 0.5, 2.0)
    }
}
