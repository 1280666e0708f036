//! Primitive rendering functions.
//!
//! Rasterization for the map layers: line drawing for coastlines, ticks,
//! and the frame; alpha-blended fills for markers.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, Rect};

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw an anti-aliased line using Wu's algorithm.
///
/// This implements Xiaolin Wu's line algorithm from SIGGRAPH '91,
/// which produces smooth lines with sub-pixel accuracy.
///
/// # Algorithm
///
/// Wu's algorithm draws two pixels at each step along the major axis,
/// adjusting their intensities based on the fractional distance from
/// the ideal line position.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };

    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    // Handle first endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;

    if steep {
        plot(fb, ypxl1, xpxl1, color, rfpart(yend) * xgap);
        plot(fb, ypxl1 + 1, xpxl1, color, fpart(yend) * xgap);
    } else {
        plot(fb, xpxl1, ypxl1, color, rfpart(yend) * xgap);
        plot(fb, xpxl1, ypxl1 + 1, color, fpart(yend) * xgap);
    }

    let mut intery = yend + gradient;

    // Handle second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;

    if steep {
        plot(fb, ypxl2, xpxl2, color, rfpart(yend) * xgap);
        plot(fb, ypxl2 + 1, xpxl2, color, fpart(yend) * xgap);
    } else {
        plot(fb, xpxl2, ypxl2, color, rfpart(yend) * xgap);
        plot(fb, xpxl2, ypxl2 + 1, color, fpart(yend) * xgap);
    }

    // Main loop
    if steep {
        for x in (xpxl1 + 1)..xpxl2 {
            let ipart = intery.floor() as i32;
            plot(fb, ipart, x, color, rfpart(intery));
            plot(fb, ipart + 1, x, color, fpart(intery));
            intery += gradient;
        }
    } else {
        for x in (xpxl1 + 1)..xpxl2 {
            let ipart = intery.floor() as i32;
            plot(fb, x, ipart, color, rfpart(intery));
            plot(fb, x, ipart + 1, color, fpart(intery));
            intery += gradient;
        }
    }
}

/// Stroke a polyline as consecutive anti-aliased segments.
///
/// Used for coastline rendering where segment joints must not leave gaps.
pub fn stroke_polyline(fb: &mut Framebuffer, points: &[Point], color: Rgba) {
    for pair in points.windows(2) {
        draw_line_aa(fb, pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        let alpha = (f32::from(color.a) * intensity) as u8;
        let blended = color.with_alpha(alpha);
        fb.blend_pixel(x as u32, y as u32, blended);
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

// ============================================================================
// Rectangle Drawing
// ============================================================================

/// Draw a rectangle outline.
pub fn draw_rect_outline(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    color: Rgba,
    thickness: u32,
) {
    let thickness = thickness.max(1);
    let x = x.max(0) as u32;
    let y = y.max(0) as u32;

    // Top edge
    fb.fill_rect(x, y, width, thickness, color);
    // Bottom edge
    if height > thickness {
        fb.fill_rect(x, y + height - thickness, width, thickness, color);
    }
    // Left edge
    if height > 2 * thickness {
        fb.fill_rect(x, y + thickness, thickness, height - 2 * thickness, color);
    }
    // Right edge
    if width > thickness && height > 2 * thickness {
        fb.fill_rect(
            x + width - thickness,
            y + thickness,
            thickness,
            height - 2 * thickness,
            color,
        );
    }
}

// ============================================================================
// Marker Drawing
// ============================================================================

/// Fill an axis-aligned square centered at (`cx`, `cy`), alpha-blending
/// each pixel over the existing content.
///
/// Pixels outside `clip` (when given) are skipped, so markers near the map
/// edge are cropped to the plot area rather than spilling into the margin.
pub fn fill_square_blended(
    fb: &mut Framebuffer,
    cx: f32,
    cy: f32,
    side: f32,
    color: Rgba,
    clip: Option<Rect>,
) {
    let half = side / 2.0;
    let x0 = (cx - half).round() as i32;
    let y0 = (cy - half).round() as i32;
    let x1 = x0 + side.round() as i32;
    let y1 = y0 + side.round() as i32;

    for y in y0..y1 {
        for x in x0..x1 {
            if x < 0 || y < 0 {
                continue;
            }
            if let Some(c) = clip {
                if !c.contains(Point::new(x as f32, y as f32)) {
                    continue;
                }
            }
            fb.blend_pixel(x as u32, y as u32, color);
        }
    }
}

/// Fill a circle centered at (`cx`, `cy`), alpha-blending each pixel.
///
/// Midpoint scan-line fill with the same clip behavior as
/// [`fill_square_blended`].
pub fn fill_circle_blended(
    fb: &mut Framebuffer,
    cx: f32,
    cy: f32,
    radius: f32,
    color: Rgba,
    clip: Option<Rect>,
) {
    let cx = cx.round() as i32;
    let cy = cy.round() as i32;
    let radius = radius.round() as i32;

    if radius <= 0 {
        blend_clipped(fb, cx, cy, color, clip);
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        blend_horizontal_span(fb, cx - x, cx + x, cy + y, color, clip);
        if y != 0 {
            blend_horizontal_span(fb, cx - x, cx + x, cy - y, color, clip);
        }
        if x != y {
            blend_horizontal_span(fb, cx - y, cx + y, cy + x, color, clip);
            blend_horizontal_span(fb, cx - y, cx + y, cy - x, color, clip);
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

#[inline]
fn blend_horizontal_span(
    fb: &mut Framebuffer,
    x1: i32,
    x2: i32,
    y: i32,
    color: Rgba,
    clip: Option<Rect>,
) {
    for x in x1..=x2 {
        blend_clipped(fb, x, y, color, clip);
    }
}

#[inline]
fn blend_clipped(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, clip: Option<Rect>) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(c) = clip {
        if !c.contains(Point::new(x as f32, y as f32)) {
            return;
        }
    }
    fb.blend_pixel(x as u32, y as u32, color);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_line_horizontal() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_line(&mut fb, 10, 50, 90, 50, Rgba::BLACK);

        // Check that pixels along the line are set
        assert_eq!(fb.get_pixel(10, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_vertical() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_line(&mut fb, 50, 10, 50, 90, Rgba::BLACK);

        assert_eq!(fb.get_pixel(50, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 90), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_diagonal() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_line(&mut fb, 10, 10, 90, 90, Rgba::BLACK);

        assert_eq!(fb.get_pixel(10, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(90, 90), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_aa() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_line_aa(&mut fb, 10.0, 10.0, 90.0, 50.0, Rgba::BLACK);

        // Anti-aliased line should have some pixels set along the path
        // Not checking exact values due to anti-aliasing blending
        let pixel = fb.get_pixel(50, 30);
        assert!(pixel.is_some());
    }

    #[test]
    fn test_stroke_polyline() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let pts = [
            Point::new(10.0, 10.0),
            Point::new(50.0, 10.0),
            Point::new(50.0, 50.0),
        ];
        stroke_polyline(&mut fb, &pts, Rgba::BLACK);

        // First segment midpoint darkened
        let mid = fb.get_pixel(30, 10).unwrap();
        assert!(mid.r < 128);
        // Second segment midpoint darkened
        let mid2 = fb.get_pixel(50, 30).unwrap();
        assert!(mid2.r < 128);
    }

    #[test]
    fn test_stroke_polyline_single_point() {
        let mut fb = Framebuffer::new(10, 10).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        // A single point has no segments, nothing drawn, no panic
        stroke_polyline(&mut fb, &[Point::new(5.0, 5.0)], Rgba::BLACK);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_rect_outline() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        draw_rect_outline(&mut fb, 20, 20, 30, 30, Rgba::RED, 2);

        // Border should be red
        assert_eq!(fb.get_pixel(20, 20), Some(Rgba::RED));
        // Inside should be white
        assert_eq!(fb.get_pixel(35, 35), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_square_blended_opaque() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        fill_square_blended(&mut fb, 50.0, 50.0, 10.0, Rgba::RED, None);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(46, 46), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(40, 40), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_square_blended_alpha() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let semi_red = Rgba::RED.with_alpha(128);
        fill_square_blended(&mut fb, 50.0, 50.0, 10.0, semi_red, None);

        let center = fb.get_pixel(50, 50).unwrap();
        // Blend of red over white: pinkish
        assert_eq!(center.r, 255);
        assert!(center.g > 100 && center.g < 150);
    }

    #[test]
    fn test_fill_square_blended_clip() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        let clip = Rect::new(48.0, 0.0, 52.0, 100.0);
        fill_square_blended(&mut fb, 48.0, 50.0, 10.0, Rgba::BLUE, Some(clip));

        // Inside the clip
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLUE));
        // Left of the clip boundary stays untouched
        assert_eq!(fb.get_pixel(45, 50), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_circle_blended() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        fill_circle_blended(&mut fb, 50.0, 50.0, 20.0, Rgba::BLUE, None);

        // Center should be filled
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLUE));
        // Outside should be white
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_circle_blended_zero_radius() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        fill_circle_blended(&mut fb, 50.0, 50.0, 0.0, Rgba::RED, None);

        // Zero radius draws a single point
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::RED));
    }

    #[test]
    fn test_line_out_of_bounds() {
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        // Line that goes out of bounds should not panic
        draw_line(&mut fb, -10, -10, 110, 110, Rgba::BLACK);

        // Only in-bounds pixels should be affected
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
    }
}
