//! Map figure assembly.
//!
//! [`MapFigure`] is an explicit context object: it owns the canvas size,
//! the projection, a zorder-sorted layer list, and the title. Layers are
//! added by method calls and rendered in ascending zorder when the figure
//! is exported. The raster path ([`MapFigure::render`]) draws geometry
//! only; tick labels and the title appear on the vector path
//! ([`MapFigure::to_svg`]).

use crate::axes::GeoAxes;
use crate::coastline;
use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};
use crate::markers::{Marker, MarkerShape, MarkerStyle};
use crate::output::{PngEncoder, SvgEncoder, TextAnchor};
use crate::projection::{GeoExtent, PlateCarree};
use crate::render::{
    draw_line, draw_rect_outline, fill_circle_blended, fill_square_blended, stroke_polyline,
};
use std::path::Path;

/// Default figure width in pixels.
pub const DEFAULT_WIDTH: u32 = 1200;
/// Default figure height in pixels.
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Zorder assigned to the coastline layer.
const COASTLINE_ZORDER: i32 = 1;

/// Outward length of major ticks, in pixels.
const MAJOR_TICK_LEN: f32 = 8.0;
/// Outward length of minor ticks, in pixels.
const MINOR_TICK_LEN: f32 = 4.0;

/// Figure title: text plus font size and padding above the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureTitle {
    /// Title text.
    pub text: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Gap between the title baseline and the plot area top.
    pub pad: f32,
}

#[derive(Debug, Clone)]
enum LayerKind {
    Coastlines {
        color: Rgba,
        stroke_width: f32,
    },
    Markers {
        markers: Vec<Marker>,
        style: MarkerStyle,
    },
}

#[derive(Debug, Clone)]
struct Layer {
    zorder: i32,
    kind: LayerKind,
}

/// A map figure with layered content over a plate carree projection.
#[derive(Debug, Clone)]
pub struct MapFigure {
    width: u32,
    height: u32,
    margin_left: f32,
    margin_right: f32,
    margin_top: f32,
    margin_bottom: f32,
    background: Rgba,
    axes: GeoAxes,
    layers: Vec<Layer>,
    title: Option<FigureTitle>,
}

impl Default for MapFigure {
    fn default() -> Self {
        Self::new()
    }
}

impl MapFigure {
    /// Create a figure with the default 1200x1000 canvas and world axes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin_left: 100.0,
            margin_right: 100.0,
            margin_top: 80.0,
            margin_bottom: 80.0,
            background: Rgba::WHITE,
            axes: GeoAxes::default(),
            layers: Vec::new(),
            title: None,
        }
    }

    /// Set the canvas dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the axis configuration.
    #[must_use]
    pub fn axes(mut self, axes: GeoAxes) -> Self {
        self.axes = axes;
        self
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The pixel rectangle inside the margins that map content draws into.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            self.margin_left,
            self.margin_top,
            self.width as f32 - self.margin_left - self.margin_right,
            self.height as f32 - self.margin_top - self.margin_bottom,
        )
    }

    /// The projection mapping the axis limits onto the plot area.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ScaleDomain`] if the axis limits are
    /// degenerate.
    pub fn projection(&self) -> Result<PlateCarree> {
        let extent = GeoExtent::new(
            self.axes.xlim.0,
            self.axes.xlim.1,
            self.axes.ylim.0,
            self.axes.ylim.1,
        );
        PlateCarree::new(extent, self.plot_area())
    }

    /// Add the coastline layer: black thin stroke at zorder 1.
    pub fn coastlines(&mut self) -> &mut Self {
        self.layers.push(Layer {
            zorder: COASTLINE_ZORDER,
            kind: LayerKind::Coastlines {
                color: Rgba::BLACK,
                stroke_width: 1.0,
            },
        });
        self
    }

    /// Add a marker layer at the style's zorder.
    pub fn scatter(&mut self, markers: Vec<Marker>, style: MarkerStyle) -> &mut Self {
        self.layers.push(Layer {
            zorder: style.zorder,
            kind: LayerKind::Markers { markers, style },
        });
        self
    }

    /// Set the title with the default bold style: font size 20, pad 20.
    pub fn title(&mut self, text: &str) -> &mut Self {
        self.title = Some(FigureTitle {
            text: text.to_string(),
            font_size: 20.0,
            pad: 20.0,
        });
        self
    }

    /// Number of layers added so far.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layer indices in draw order: ascending zorder, ties keep insertion
    /// order.
    fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.layers.len()).collect();
        order.sort_by_key(|&i| self.layers[i].zorder);
        order
    }

    /// Render the figure to a framebuffer.
    ///
    /// Geometry only: background, layers in zorder, plot frame and ticks.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas dimensions are invalid or the axis
    /// limits are degenerate.
    pub fn render(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.background);

        let proj = self.projection()?;

        for i in self.draw_order() {
            match &self.layers[i].kind {
                LayerKind::Coastlines { color, .. } => {
                    raster_coastlines(&mut fb, &proj, *color);
                }
                LayerKind::Markers { markers, style } => {
                    self.raster_markers(&mut fb, &proj, markers, *style);
                }
            }
        }

        self.raster_frame(&mut fb, &proj);

        Ok(fb)
    }

    /// Render the figure to an SVG encoder, including tick labels and
    /// title.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis limits are degenerate.
    pub fn to_svg(&self) -> Result<SvgEncoder> {
        let proj = self.projection()?;
        let area = self.plot_area();
        let mut svg = SvgEncoder::new(self.width, self.height).background(Some(self.background));

        for i in self.draw_order() {
            match &self.layers[i].kind {
                LayerKind::Coastlines {
                    color,
                    stroke_width,
                } => {
                    for segment in coastline::world_segments() {
                        let points: Vec<(f32, f32)> = segment
                            .iter()
                            .map(|&(lon, lat)| {
                                let p = proj.project(lon, lat);
                                (p.x, p.y)
                            })
                            .collect();
                        svg = svg.polyline(&points, *color, *stroke_width);
                    }
                }
                LayerKind::Markers { markers, style } => {
                    for m in markers {
                        let p = proj.project(m.lon, m.lat);
                        let color = m.color.with_opacity(style.alpha);
                        match style.shape {
                            MarkerShape::Square => {
                                let half = style.size / 2.0;
                                svg = svg.rect(p.x - half, p.y - half, style.size, style.size, color);
                            }
                            MarkerShape::Circle => {
                                svg = svg.circle(p.x, p.y, style.size / 2.0, color);
                            }
                        }
                    }
                }
            }
        }

        svg = self.svg_frame(svg, &proj);
        svg = self.svg_labels(svg, &proj);

        if let Some(title) = &self.title {
            svg = svg.text_bold(
                area.x + area.width / 2.0,
                area.y - title.pad,
                &title.text,
                title.font_size,
                Rgba::BLACK,
                TextAnchor::Middle,
            );
        }

        Ok(svg)
    }

    /// Save the raster rendering as a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file output fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let fb = self.render()?;
        PngEncoder::write_to_file(&fb, path)
    }

    /// Save the vector rendering as an SVG file.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or file output fails.
    pub fn save_svg<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_svg()?.write_to_file(path)
    }

    fn raster_markers(
        &self,
        fb: &mut Framebuffer,
        proj: &PlateCarree,
        markers: &[Marker],
        style: MarkerStyle,
    ) {
        let clip = Some(self.plot_area());
        for m in markers {
            let p = proj.project(m.lon, m.lat);
            let color = m.color.with_opacity(style.alpha);
            match style.shape {
                MarkerShape::Square => {
                    fill_square_blended(fb, p.x, p.y, style.size, color, clip);
                }
                MarkerShape::Circle => {
                    fill_circle_blended(fb, p.x, p.y, style.size / 2.0, color, clip);
                }
            }
        }
    }

    fn raster_frame(&self, fb: &mut Framebuffer, proj: &PlateCarree) {
        let area = self.plot_area();
        draw_rect_outline(
            fb,
            area.x as i32,
            area.y as i32,
            area.width as u32,
            area.height as u32,
            Rgba::BLACK,
            1,
        );

        let bottom = area.bottom();
        let left = area.x;

        for lon in self.axes.x_major_ticks() {
            let x = proj.project(lon, self.axes.ylim.0).x as i32;
            draw_line(
                fb,
                x,
                bottom as i32,
                x,
                (bottom + MAJOR_TICK_LEN) as i32,
                Rgba::BLACK,
            );
        }
        for lon in self.axes.x_minor_ticks() {
            let x = proj.project(lon, self.axes.ylim.0).x as i32;
            draw_line(
                fb,
                x,
                bottom as i32,
                x,
                (bottom + MINOR_TICK_LEN) as i32,
                Rgba::BLACK,
            );
        }
        for lat in self.axes.y_major_ticks() {
            let y = proj.project(self.axes.xlim.0, lat).y as i32;
            draw_line(
                fb,
                (left - MAJOR_TICK_LEN) as i32,
                y,
                left as i32,
                y,
                Rgba::BLACK,
            );
        }
        for lat in self.axes.y_minor_ticks() {
            let y = proj.project(self.axes.xlim.0, lat).y as i32;
            draw_line(
                fb,
                (left - MINOR_TICK_LEN) as i32,
                y,
                left as i32,
                y,
                Rgba::BLACK,
            );
        }
    }

    fn svg_frame(&self, mut svg: SvgEncoder, proj: &PlateCarree) -> SvgEncoder {
        let area = self.plot_area();
        svg = svg.rect_outlined(
            area.x,
            area.y,
            area.width,
            area.height,
            Rgba::TRANSPARENT,
            Rgba::BLACK,
            1.0,
        );

        let bottom = area.bottom();
        let left = area.x;

        for lon in self.axes.x_major_ticks() {
            let x = proj.project(lon, self.axes.ylim.0).x;
            svg = svg.line(x, bottom, x, bottom + MAJOR_TICK_LEN, Rgba::BLACK, 1.0);
        }
        for lon in self.axes.x_minor_ticks() {
            let x = proj.project(lon, self.axes.ylim.0).x;
            svg = svg.line(x, bottom, x, bottom + MINOR_TICK_LEN, Rgba::BLACK, 1.0);
        }
        for lat in self.axes.y_major_ticks() {
            let y = proj.project(self.axes.xlim.0, lat).y;
            svg = svg.line(left - MAJOR_TICK_LEN, y, left, y, Rgba::BLACK, 1.0);
        }
        for lat in self.axes.y_minor_ticks() {
            let y = proj.project(self.axes.xlim.0, lat).y;
            svg = svg.line(left - MINOR_TICK_LEN, y, left, y, Rgba::BLACK, 1.0);
        }

        svg
    }

    fn svg_labels(&self, mut svg: SvgEncoder, proj: &PlateCarree) -> SvgEncoder {
        let area = self.plot_area();
        let label_size = self.axes.label_size;

        let label_y = area.bottom() + MAJOR_TICK_LEN + label_size + 4.0;
        for lon in self.axes.x_major_ticks() {
            let x = proj.project(lon, self.axes.ylim.0).x;
            svg = svg.text_anchored(
                x,
                label_y,
                &self.axes.format_longitude(lon),
                label_size,
                Rgba::BLACK,
                TextAnchor::Middle,
            );
        }

        let label_x = area.x - MAJOR_TICK_LEN - 4.0;
        for lat in self.axes.y_major_ticks() {
            let y = proj.project(self.axes.xlim.0, lat).y;
            svg = svg.text_anchored(
                label_x,
                y + label_size * 0.35,
                &self.axes.format_latitude(lat),
                label_size,
                Rgba::BLACK,
                TextAnchor::End,
            );
        }

        svg
    }
}

fn raster_coastlines(fb: &mut Framebuffer, proj: &PlateCarree, color: Rgba) {
    for segment in coastline::world_segments() {
        let points: Vec<Point> = segment
            .iter()
            .map(|&(lon, lat)| proj.project(lon, lat))
            .collect();
        stroke_polyline(fb, &points, color);
    }
}
