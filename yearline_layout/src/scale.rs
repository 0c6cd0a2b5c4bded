// Copyright 2026 the Yearline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The year-to-pixel scale configuration.

/// Maps years to horizontal pixel positions.
///
/// `start_year`, `end_year`, and `pixels_per_year` are fixed at startup;
/// `zoom` is the only runtime-varying field and multiplies every pixel
/// computation. A `ScaleConfig` is immutable within one render pass — zoom
/// changes produce a new value (see [`ScaleConfig::with_zoom`]) and a full
/// relayout, never an in-place adjustment of derived pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConfig {
    /// First year of the display window.
    pub start_year: i32,
    /// Last year of the display window.
    pub end_year: i32,
    /// Horizontal pixels per year at zoom 1.
    pub pixels_per_year: f64,
    /// Current zoom factor.
    pub zoom: f64,
}

impl ScaleConfig {
    /// Creates a scale at zoom 1.
    #[must_use]
    pub fn new(start_year: i32, end_year: i32, pixels_per_year: f64) -> Self {
        Self {
            start_year,
            end_year,
            pixels_per_year,
            zoom: 1.0,
        }
    }

    /// Returns this scale with a different zoom factor.
    #[must_use]
    pub fn with_zoom(self, zoom: f64) -> Self {
        Self { zoom, ..self }
    }

    /// Converts a year to its horizontal pixel position.
    ///
    /// `(year - start_year) * pixels_per_year * zoom`. Years before the
    /// window start produce negative values; band layout clamps them.
    #[must_use]
    pub fn year_to_x(&self, year: i32) -> f64 {
        f64::from(year - self.start_year) * self.pixels_per_year * self.zoom
    }

    /// The width of one year cell in pixels.
    ///
    /// Event cells, group cells, and year markers all derive from this one
    /// formula so they stay visually aligned at every zoom level.
    #[must_use]
    pub fn year_width(&self) -> f64 {
        self.pixels_per_year * self.zoom
    }

    /// The pixel width of the whole display window.
    #[must_use]
    pub fn span_px(&self) -> f64 {
        self.year_to_x(self.end_year)
    }
}

impl Default for ScaleConfig {
    /// The display window of the reference configuration: 1850–2025 at
    /// 200 pixels per year.
    fn default() -> Self {
        Self::new(1850, 2025, 200.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleConfig;

    #[test]
    fn year_to_x_is_linear_in_zoom() {
        let scale = ScaleConfig::new(1850, 2025, 200.0);
        let zoomed = scale.with_zoom(1.5);
        assert_eq!(scale.year_to_x(1900), 50.0 * 200.0);
        assert_eq!(zoomed.year_to_x(1900), scale.year_to_x(1900) * 1.5);
        assert_eq!(zoomed.year_width(), scale.year_width() * 1.5);
    }

    #[test]
    fn years_before_the_window_map_negative() {
        let scale = ScaleConfig::new(1850, 2025, 200.0);
        assert!(scale.year_to_x(1840) < 0.0);
        assert_eq!(scale.year_to_x(1850), 0.0);
    }

    #[test]
    fn span_covers_the_window() {
        let scale = ScaleConfig::new(1850, 2025, 200.0);
        assert_eq!(scale.span_px(), 175.0 * 200.0);
    }
}
