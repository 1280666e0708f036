//! Equirectangular (plate carree) map projection.
//!
//! Maps geographic coordinates to pixel positions inside a plot area. Built
//! from a pair of [`LinearScale`]s: longitude to x, latitude to y with the
//! range inverted so north is up.

use crate::geometry::{Point, Rect};
use crate::scale::{LinearScale, Scale};

/// Geographic extent of a projection, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoExtent {
    /// Western longitude bound.
    pub west: f32,
    /// Eastern longitude bound.
    pub east: f32,
    /// Southern latitude bound.
    pub south: f32,
    /// Northern latitude bound.
    pub north: f32,
}

impl GeoExtent {
    /// Create a new extent.
    #[must_use]
    pub const fn new(west: f32, east: f32, south: f32, north: f32) -> Self {
        Self {
            west,
            east,
            south,
            north,
        }
    }

    /// The whole-world extent used by the scatter figure: longitude
    /// [-180, 181), latitude [-90, 91).
    #[must_use]
    pub const fn world() -> Self {
        Self::new(-180.0, 181.0, -90.0, 91.0)
    }
}

/// Plate carree projection over a rectangular plot area.
///
/// Longitude maps linearly to x across the plot area, latitude maps
/// linearly to y with the axis inverted (larger latitudes sit higher on
/// screen).
#[derive(Debug, Clone, Copy)]
pub struct PlateCarree {
    extent: GeoExtent,
    plot_area: Rect,
    lon_scale: LinearScale,
    lat_scale: LinearScale,
}

impl PlateCarree {
    /// Create a projection mapping `extent` onto `plot_area`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ScaleDomain`] if the extent is degenerate
    /// (west equals east or south equals north).
    pub fn new(extent: GeoExtent, plot_area: Rect) -> crate::Result<Self> {
        let lon_scale = LinearScale::new(
            (extent.west, extent.east),
            (plot_area.x, plot_area.right()),
        )?;
        // y inverted: north latitude at the top of the plot area
        let lat_scale = LinearScale::new(
            (extent.south, extent.north),
            (plot_area.bottom(), plot_area.y),
        )?;

        Ok(Self {
            extent,
            plot_area,
            lon_scale,
            lat_scale,
        })
    }

    /// The geographic extent.
    #[must_use]
    pub const fn extent(&self) -> GeoExtent {
        self.extent
    }

    /// The pixel plot area.
    #[must_use]
    pub const fn plot_area(&self) -> Rect {
        self.plot_area
    }

    /// Project (lon, lat) in degrees to a pixel position.
    #[must_use]
    pub fn project(&self, lon: f32, lat: f32) -> Point {
        Point::new(self.lon_scale.scale(lon), self.lat_scale.scale(lat))
    }

    /// Invert a pixel position back to (lon, lat) degrees.
    #[must_use]
    pub fn unproject(&self, point: Point) -> (f32, f32) {
        (self.lon_scale.invert(point.x), self.lat_scale.invert(point.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_projection() -> PlateCarree {
        PlateCarree::new(GeoExtent::world(), Rect::new(100.0, 80.0, 1000.0, 840.0))
            .expect("projection creation should succeed")
    }

    #[test]
    fn test_world_extent() {
        let e = GeoExtent::world();
        assert!((e.west - -180.0).abs() < f32::EPSILON);
        assert!((e.east - 181.0).abs() < f32::EPSILON);
        assert!((e.south - -90.0).abs() < f32::EPSILON);
        assert!((e.north - 91.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_project_corners() {
        let proj = world_projection();

        let nw = proj.project(-180.0, 91.0);
        assert!((nw.x - 100.0).abs() < 0.001);
        assert!((nw.y - 80.0).abs() < 0.001);

        let se = proj.project(181.0, -90.0);
        assert!((se.x - 1100.0).abs() < 0.001);
        assert!((se.y - 920.0).abs() < 0.001);
    }

    #[test]
    fn test_north_is_up() {
        let proj = world_projection();
        let north = proj.project(0.0, 60.0);
        let south = proj.project(0.0, -60.0);
        assert!(north.y < south.y);
    }

    #[test]
    fn test_unproject_round_trip() {
        let proj = world_projection();
        for (lon, lat) in [(-160.0_f32, -70.0_f32), (0.0, 0.0), (120.0, 45.0)] {
            let p = proj.project(lon, lat);
            let (lon2, lat2) = proj.unproject(p);
            assert!((lon - lon2).abs() < 0.01);
            assert!((lat - lat2).abs() < 0.01);
        }
    }

    #[test]
    fn test_degenerate_extent_error() {
        let extent = GeoExtent::new(10.0, 10.0, -90.0, 90.0);
        let result = PlateCarree::new(extent, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(result.is_err());
    }
}
