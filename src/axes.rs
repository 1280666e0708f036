//! Geographic axis ticks and labels.
//!
//! Computes major and minor tick positions for longitude/latitude axes and
//! formats tick labels with hemisphere suffixes (`90S`, `0`, `150E`).

/// Tick configuration for a geographic axis pair.
///
/// Major ticks land on multiples of `tick_step` inside the limits; minor
/// ticks subdivide each major interval into thirds.
#[derive(Debug, Clone)]
pub struct GeoAxes {
    /// Longitude limits (min, max) in degrees.
    pub xlim: (f32, f32),
    /// Latitude limits (min, max) in degrees.
    pub ylim: (f32, f32),
    /// Spacing between major ticks, in degrees.
    pub tick_step: f32,
    /// Font size for tick labels, in pixels.
    pub label_size: f32,
    /// Append a degree symbol to tick labels.
    pub degree_symbol: bool,
}

impl Default for GeoAxes {
    fn default() -> Self {
        Self {
            xlim: (-180.0, 181.0),
            ylim: (-90.0, 91.0),
            tick_step: 30.0,
            label_size: 14.0,
            degree_symbol: false,
        }
    }
}

impl GeoAxes {
    /// Major tick positions along the longitude axis.
    #[must_use]
    pub fn x_major_ticks(&self) -> Vec<f32> {
        major_ticks(self.xlim, self.tick_step)
    }

    /// Major tick positions along the latitude axis.
    #[must_use]
    pub fn y_major_ticks(&self) -> Vec<f32> {
        major_ticks(self.ylim, self.tick_step)
    }

    /// Minor tick positions along the longitude axis.
    ///
    /// Minors subdivide the major spacing into thirds; positions that
    /// coincide with a major tick are excluded.
    #[must_use]
    pub fn x_minor_ticks(&self) -> Vec<f32> {
        minor_ticks(self.xlim, self.tick_step)
    }

    /// Minor tick positions along the latitude axis.
    #[must_use]
    pub fn y_minor_ticks(&self) -> Vec<f32> {
        minor_ticks(self.ylim, self.tick_step)
    }

    /// Format a longitude value as a tick label.
    ///
    /// Negative values read west, positive east, zero is bare: `150W`,
    /// `0`, `150E`. A degree symbol is inserted before the suffix when
    /// enabled.
    #[must_use]
    pub fn format_longitude(&self, lon: f32) -> String {
        format_degrees(lon, 'E', 'W', self.degree_symbol)
    }

    /// Format a latitude value as a tick label.
    ///
    /// Negative values read south, positive north, zero is bare.
    #[must_use]
    pub fn format_latitude(&self, lat: f32) -> String {
        format_degrees(lat, 'N', 'S', self.degree_symbol)
    }
}

fn major_ticks(lim: (f32, f32), step: f32) -> Vec<f32> {
    let mut ticks = Vec::new();
    let mut value = (lim.0 / step).ceil() * step;
    while value < lim.1 {
        ticks.push(value);
        value += step;
    }
    ticks
}

fn minor_ticks(lim: (f32, f32), step: f32) -> Vec<f32> {
    let minor_step = step / 3.0;
    let mut ticks = Vec::new();
    let mut value = (lim.0 / minor_step).ceil() * minor_step;
    while value < lim.1 {
        // skip positions already occupied by a major tick
        if (value / step).fract().abs() > 1e-4 {
            ticks.push(value);
        }
        value += minor_step;
    }
    ticks
}

fn format_degrees(value: f32, positive: char, negative: char, degree_symbol: bool) -> String {
    let magnitude = value.abs();
    let whole = magnitude.round();
    let number = if (magnitude - whole).abs() < 1e-4 {
        format!("{whole:.0}")
    } else {
        format!("{magnitude}")
    };
    let symbol = if degree_symbol { "\u{b0}" } else { "" };
    if value > 0.0 {
        format!("{number}{symbol}{positive}")
    } else if value < 0.0 {
        format!("{number}{symbol}{negative}")
    } else {
        format!("{number}{symbol}")
    }
}
