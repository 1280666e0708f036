//! Randomized marker field sampling.
//!
//! Walks a lat/lon grid in row-major order (latitude outer, longitude
//! inner) and decides per cell whether a marker appears and which palette
//! color it takes. All randomness comes from a caller-supplied [`Rng`], so
//! a fixed seed reproduces the full decision sequence.

use crate::color::Rgba;
use crate::error::{Error, Result};
use rand::Rng;

/// Default skip threshold: draws below this suppress the cell.
pub const DEFAULT_SKIP_THRESHOLD: f64 = 0.35;

/// Default marker palette, in draw-index order.
pub const DEFAULT_PALETTE: [Rgba; 5] = [
    Rgba::BLUE,
    Rgba::GREEN,
    Rgba::RED,
    Rgba::YELLOW,
    Rgba::PURPLE,
];

/// Half-open range of evenly spaced values: `start`, `start + step`, ...
/// strictly below `stop`.
#[must_use]
pub fn arange(start: f32, stop: f32, step: f32) -> Vec<f32> {
    let mut values = Vec::new();
    let mut i = 0u32;
    loop {
        let v = step.mul_add(i as f32, start);
        if v >= stop {
            break;
        }
        values.push(v);
        i += 1;
    }
    values
}

/// Marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerShape {
    /// Axis-aligned filled square.
    #[default]
    Square,
    /// Filled circle.
    Circle,
}

/// Visual style shared by every marker in a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Side length (square) or diameter (circle) in pixels.
    pub size: f32,
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Layer order relative to other figure layers.
    pub zorder: i32,
    /// Shape drawn at each marker position.
    pub shape: MarkerShape,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size: 36.0,
            alpha: 0.75,
            zorder: 2,
            shape: MarkerShape::Square,
        }
    }
}

/// One sampled marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Longitude in degrees.
    pub lon: f32,
    /// Latitude in degrees.
    pub lat: f32,
    /// Palette color assigned to this marker.
    pub color: Rgba,
}

/// A validated lat/lon grid with palette and skip rule.
#[derive(Debug, Clone)]
pub struct MarkerField {
    latitudes: Vec<f32>,
    longitudes: Vec<f32>,
    palette: Vec<Rgba>,
    skip_threshold: f64,
    style: MarkerStyle,
}

impl MarkerField {
    /// Start building a marker field. Defaults reproduce the world grid:
    /// latitudes -70..<85 step 20, longitudes -160..<170 step 20, the
    /// five-color palette, threshold 0.35.
    #[must_use]
    pub fn builder() -> MarkerFieldBuilder {
        MarkerFieldBuilder::default()
    }

    /// The default world grid field.
    ///
    /// # Errors
    ///
    /// Construction of the default grid does not fail in practice; the
    /// `Result` mirrors [`MarkerFieldBuilder::build`].
    pub fn world_grid() -> Result<Self> {
        Self::builder().build()
    }

    /// Latitude values, south to north.
    #[must_use]
    pub fn latitudes(&self) -> &[f32] {
        &self.latitudes
    }

    /// Longitude values, west to east.
    #[must_use]
    pub fn longitudes(&self) -> &[f32] {
        &self.longitudes
    }

    /// The palette, in draw-index order.
    #[must_use]
    pub fn palette(&self) -> &[Rgba] {
        &self.palette
    }

    /// The skip threshold.
    #[must_use]
    pub fn skip_threshold(&self) -> f64 {
        self.skip_threshold
    }

    /// The marker style.
    #[must_use]
    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    /// Number of candidate grid cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.latitudes.len() * self.longitudes.len()
    }

    /// Sample the grid.
    ///
    /// Cells are visited in row-major order, latitude outer and longitude
    /// inner. Each cell takes one uniform draw in [0, 1); a draw below the
    /// skip threshold suppresses the cell. Surviving cells take one more
    /// uniform draw which selects the palette index `floor(u * n)`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<Marker> {
        let n = self.palette.len();
        let mut markers = Vec::new();

        for &lat in &self.latitudes {
            for &lon in &self.longitudes {
                let r: f64 = rng.gen();
                if r < self.skip_threshold {
                    continue;
                }
                let u: f64 = rng.gen();
                let index = ((u * n as f64) as usize).min(n - 1);
                markers.push(Marker {
                    lon,
                    lat,
                    color: self.palette[index],
                });
            }
        }

        markers
    }
}

/// Builder for [`MarkerField`]. Validation happens in [`Self::build`].
#[derive(Debug, Clone)]
pub struct MarkerFieldBuilder {
    latitudes: Vec<f32>,
    longitudes: Vec<f32>,
    palette: Vec<Rgba>,
    skip_threshold: f64,
    style: MarkerStyle,
}

impl Default for MarkerFieldBuilder {
    fn default() -> Self {
        Self {
            latitudes: arange(-70.0, 85.0, 20.0),
            longitudes: arange(-160.0, 170.0, 20.0),
            palette: DEFAULT_PALETTE.to_vec(),
            skip_threshold: DEFAULT_SKIP_THRESHOLD,
            style: MarkerStyle::default(),
        }
    }
}

impl MarkerFieldBuilder {
    /// Set the latitude values.
    #[must_use]
    pub fn latitudes(mut self, latitudes: Vec<f32>) -> Self {
        self.latitudes = latitudes;
        self
    }

    /// Set the longitude values.
    #[must_use]
    pub fn longitudes(mut self, longitudes: Vec<f32>) -> Self {
        self.longitudes = longitudes;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn palette(mut self, palette: Vec<Rgba>) -> Self {
        self.palette = palette;
        self
    }

    /// Set the skip threshold.
    #[must_use]
    pub fn skip_threshold(mut self, threshold: f64) -> Self {
        self.skip_threshold = threshold;
        self
    }

    /// Set the marker style.
    #[must_use]
    pub fn style(mut self, style: MarkerStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate and build the field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] if the latitudes, longitudes, or
    /// palette are empty, and [`Error::InvalidThreshold`] if the skip
    /// threshold lies outside [0, 1].
    pub fn build(self) -> Result<MarkerField> {
        if self.latitudes.is_empty() {
            return Err(Error::EmptyData("latitudes"));
        }
        if self.longitudes.is_empty() {
            return Err(Error::EmptyData("longitudes"));
        }
        if self.palette.is_empty() {
            return Err(Error::EmptyData("palette"));
        }
        if !(0.0..=1.0).contains(&self.skip_threshold) {
            return Err(Error::InvalidThreshold(self.skip_threshold));
        }

        Ok(MarkerField {
            latitudes: self.latitudes,
            longitudes: self.longitudes,
            palette: self.palette,
            skip_threshold: self.skip_threshold,
            style: self.style,
        })
    }
}
