//! # Mapa-Viz
//!
//! Pure Rust rendering of scatter markers over a world coastline map.
//!
//! The crate samples a latitude/longitude grid with caller-supplied
//! randomness, drops cells below a skip threshold, assigns palette colors
//! to the survivors, and renders the result over a plate carree world map
//! with coastlines, ticks, and hemisphere-suffixed labels. Output goes to
//! PNG (raster) or SVG (vector, with text).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mapa_viz::prelude::*;
//! use rand::SeedableRng;
//!
//! let field = MarkerField::world_grid()?;
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(42);
//! let markers = field.sample(&mut rng);
//!
//! let mut figure = MapFigure::new();
//! figure.coastlines();
//! figure.scatter(markers, field.style());
//! figure.title("Dummy markers over a map");
//! figure.save_png("scatter_map.png")?;
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and named palette colors.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Map Modules
// ============================================================================

/// Geographic axis ticks and label formatting.
pub mod axes;

/// Embedded world coastline polylines.
pub mod coastline;

/// Map figure assembly and export.
pub mod figure;

/// Randomized marker field sampling.
pub mod markers;

/// Plate carree projection.
pub mod projection;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for mapa-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use mapa_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::axes::GeoAxes;
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::figure::MapFigure;
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::markers::{Marker, MarkerField, MarkerShape, MarkerStyle};
    pub use crate::projection::{GeoExtent, PlateCarree};
    pub use crate::scale::{LinearScale, Scale};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_types_usable() {
        let field = MarkerField::world_grid().unwrap();
        assert_eq!(field.cell_count(), 120);
        let figure = MapFigure::new();
        assert_eq!(figure.width(), 1200);
    }
}
