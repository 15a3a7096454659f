//! A tiny software rasterizer: pixels, rectangles, Bresenham-style lines and
//! flat triangles drawn directly into a [`Surface`]'s backing bytes.
//!
//! Every operation here writes as if [`Origin::TopLeft`] were in effect —
//! the surface's actual origin only affects how an external viewer or the
//! TGA codec interprets the bytes on disk. Coordinates passed to these
//! functions are always in storage space.

use crate::{color::Color, geometry::Point, surface::Surface};

type SetPixelFn = fn(&mut [u8], usize, Color);

fn set_pixel_bgra8888(data: &mut [u8], idx: usize, color: Color) {
    data[idx] = color.b;
    data[idx + 1] = color.g;
    data[idx + 2] = color.r;
    data[idx + 3] = color.a;
}

fn set_pixel_bgrx8888(data: &mut [u8], idx: usize, color: Color) {
    data[idx] = color.b;
    data[idx + 1] = color.g;
    data[idx + 2] = color.r;
    data[idx + 3] = 0;
}

fn set_pixel_bgr888(data: &mut [u8], idx: usize, color: Color) {
    data[idx] = color.b;
    data[idx + 1] = color.g;
    data[idx + 2] = color.r;
}

/// Packs as: bits 0-4 blue, 5-9 green, 10-14 red, bit 15 alpha.
fn set_pixel_bgra5551(data: &mut [u8], idx: usize, color: Color) {
    let b = u16::from(color.b >> 3);
    let g = u16::from(color.g >> 3);
    let r = u16::from(color.r >> 3);
    let a = u16::from(color.a >> 7);
    let packed = b | (g << 5) | (r << 10) | (a << 15);
    data[idx] = (packed & 0xFF) as u8;
    data[idx + 1] = (packed >> 8) as u8;
}

/// Packs as: bits 0-4 blue, 5-9 green, 10-14 red, bit 15 cleared.
fn set_pixel_bgr555(data: &mut [u8], idx: usize, color: Color) {
    let b = u16::from(color.b >> 3);
    let g = u16::from(color.g >> 3);
    let r = u16::from(color.r >> 3);
    let packed = b | (g << 5) | (r << 10);
    data[idx] = (packed & 0xFF) as u8;
    data[idx + 1] = (packed >> 8) as u8;
}

fn pick_set_pixel_fn(pixel_format: crate::PixelFormat) -> SetPixelFn {
    use crate::PixelFormat::*;
    match pixel_format {
        Bgra8888 => set_pixel_bgra8888,
        Bgrx8888 => set_pixel_bgrx8888,
        Bgr888 => set_pixel_bgr888,
        Bgra5551 => set_pixel_bgra5551,
        Bgr555 => set_pixel_bgr555,
    }
}

/// Writes a single pixel.
///
/// # Panics (debug builds only)
///
/// Panics if `x`/`y` are out of bounds. Out-of-bounds coordinates are a
/// programmer error, not a recoverable runtime failure.
pub fn fill_pixel(surface: &mut Surface<'_>, x: i32, y: i32, color: Color) {
    debug_assert!(x >= 0 && (x as usize) < surface.width(), "x out of bounds");
    debug_assert!(y >= 0 && (y as usize) < surface.height(), "y out of bounds");

    let idx = y as usize * surface.pitch() + x as usize * surface.bpp();
    let set_pixel = pick_set_pixel_fn(surface.pixel_format());
    set_pixel(surface.as_bytes_mut(), idx, color);
}

/// Fills an axis-aligned rectangle with a solid color.
///
/// # Panics (debug builds only)
///
/// Panics if `width`/`height` are non-positive or the rectangle extends
/// past the surface bounds.
pub fn fill_rect(surface: &mut Surface<'_>, x: i32, y: i32, width: i32, height: i32, color: Color) {
    debug_assert!(width > 0 && height > 0, "rect has non-positive size");
    debug_assert!(x >= 0 && y >= 0, "rect origin out of bounds");
    debug_assert!(
        (y + height) as usize <= surface.height(),
        "rect extends past surface height"
    );
    debug_assert!(
        (x + width) as usize <= surface.width(),
        "rect extends past surface width"
    );

    let pitch = surface.pitch();
    let bpp = surface.bpp();
    let set_pixel = pick_set_pixel_fn(surface.pixel_format());
    let data = surface.as_bytes_mut();

    for row in y..y + height {
        for col in x..x + width {
            let idx = row as usize * pitch + col as usize * bpp;
            set_pixel(data, idx, color);
        }
    }
}

/// Draws an integer, Bresenham-equivalent line from `a` to `b`, inclusive of
/// both endpoints.
///
/// `fill_line(a, b, color)` and `fill_line(b, a, color)` always produce the
/// same set of pixels.
///
/// # Panics (debug builds only)
///
/// Panics if either endpoint is out of bounds. Callers are responsible for
/// clipping; this function does not clip.
pub fn fill_line(surface: &mut Surface<'_>, a: Point, b: Point, color: Color) {
    debug_assert!(a.x >= 0 && a.y >= 0 && b.x >= 0 && b.y >= 0, "line endpoint negative");
    debug_assert!(
        (a.x as usize) < surface.width() && (b.x as usize) < surface.width(),
        "line x out of bounds"
    );
    debug_assert!(
        (a.y as usize) < surface.height() && (b.y as usize) < surface.height(),
        "line y out of bounds"
    );

    let (mut ax, mut ay, mut bx, mut by) = (a.x, a.y, b.x, b.y);

    let transpose = (ax - bx).abs() < (ay - by).abs();
    if transpose {
        std::mem::swap(&mut ax, &mut ay);
        std::mem::swap(&mut bx, &mut by);
    }

    if ax > bx {
        std::mem::swap(&mut ax, &mut bx);
        std::mem::swap(&mut ay, &mut by);
    }

    let pitch = surface.pitch();
    let bpp = surface.bpp();
    let set_pixel = pick_set_pixel_fn(surface.pixel_format());
    let data = surface.as_bytes_mut();

    for x in ax..=bx {
        let t = if bx == ax {
            0.0
        } else {
            (x - ax) as f32 / (bx - ax) as f32
        };
        let y = (ay as f32 + (by - ay) as f32 * t).round() as i32;

        let idx = if transpose {
            x as usize * pitch + y as usize * bpp
        } else {
            y as usize * pitch + x as usize * bpp
        };
        set_pixel(data, idx, color);
    }
}

/// Draws the outline of a triangle as three [`fill_line`] calls.
pub fn stroke_triangle(surface: &mut Surface<'_>, a: Point, b: Point, c: Point, color: Color) {
    fill_line(surface, a, b, color);
    fill_line(surface, b, c, color);
    fill_line(surface, c, a, color);
}

/// Signed area of the parallelogram spanned by `(b - a)` and `(p - a)`,
/// twice the signed area of triangle `(a, b, p)`.
fn edge(a: Point, b: Point, p: Point) -> i64 {
    let bx_ax = (b.x - a.x) as i64;
    let by_ay = (b.y - a.y) as i64;
    let px_ax = (p.x - a.x) as i64;
    let py_ay = (p.y - a.y) as i64;
    bx_ax * py_ay - by_ay * px_ax
}

/// Fills a triangle using an edge-function scan over its axis-aligned
/// bounding box. A pixel is filled iff all three barycentric weights are
/// non-negative (ties are filled). Degenerate (zero-area) triangles draw
/// nothing. No particular vertex winding order is assumed.
///
/// # Panics (debug builds only)
///
/// Panics if any vertex is out of bounds.
pub fn fill_triangle(surface: &mut Surface<'_>, a: Point, b: Point, c: Point, color: Color) {
    for p in [a, b, c] {
        debug_assert!(p.x >= 0 && (p.x as usize) < surface.width(), "triangle vertex x out of bounds");
        debug_assert!(p.y >= 0 && (p.y as usize) < surface.height(), "triangle vertex y out of bounds");
    }

    let area = edge(a, b, c);
    if area == 0 {
        return;
    }

    let min_x = a.x.min(b.x).min(c.x);
    let max_x = a.x.max(b.x).max(c.x);
    let min_y = a.y.min(b.y).min(c.y);
    let max_y = a.y.max(b.y).max(c.y);

    let pitch = surface.pitch();
    let bpp = surface.bpp();
    let set_pixel = pick_set_pixel_fn(surface.pixel_format());
    let data = surface.as_bytes_mut();

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Point::new(x, y);
            let w0 = edge(b, c, p);
            let w1 = edge(c, a, p);
            let w2 = edge(a, b, p);

            let inside = if area > 0 {
                w0 >= 0 && w1 >= 0 && w2 >= 0
            } else {
                w0 <= 0 && w1 <= 0 && w2 <= 0
            };

            if inside {
                let idx = y as usize * pitch + x as usize * bpp;
                set_pixel(data, idx, color);
            }
        }
    }
}
