//! End-to-end scenario: draw several distinct-colored triangles into a
//! black surface, round-trip it through an encoded TGA v2 file, and confirm
//! each triangle's color survives with the same pixel count.

use raster_core::{fill_triangle, Color, Origin, PixelFormat, Point, Surface};
use tga_codec::{write_surface, FileType, TgaImage};

fn count_color(bytes: &[u8], color: Color) -> usize {
    bytes
        .chunks_exact(4)
        .filter(|px| px == &[color.b, color.g, color.r, color.a])
        .count()
}

#[test]
fn three_triangles_round_trip_with_matching_pixel_counts() {
    let mut surface = Surface::new_owned(PixelFormat::Bgra8888, Origin::TopLeft, 800, 800).unwrap();

    let triangles = [
        (Point::new(7, 45), Point::new(35, 100), Point::new(45, 60), Color::RED),
        (Point::new(120, 35), Point::new(90, 5), Point::new(45, 110), Color::GREEN),
        (Point::new(115, 83), Point::new(80, 90), Point::new(85, 120), Color::BLUE),
    ];

    for (a, b, c, color) in triangles {
        fill_triangle(&mut surface, a, b, c, color);
    }

    let before_counts: Vec<usize> = triangles
        .iter()
        .map(|(_, _, _, color)| count_color(surface.as_bytes(), *color))
        .collect();
    assert!(before_counts.iter().all(|&n| n > 0), "every triangle must cover at least one pixel");

    let mut encoded = Vec::new();
    write_surface(&surface, 2, FileType::New, &mut encoded).unwrap();

    let image = TgaImage::from_bytes(encoded).unwrap();
    assert!(image.is_new_format());
    let decoded = image.create_surface().unwrap();

    assert_eq!(decoded.as_bytes(), surface.as_bytes());
    for ((_, _, _, color), expected) in triangles.iter().zip(before_counts.iter()) {
        assert_eq!(count_color(decoded.as_bytes(), *color), *expected);
    }

    // Background (untouched) pixels stay at the surface's zero-initialized value.
    let untouched = Color::rgba(0, 0, 0, 0);
    assert!(count_color(decoded.as_bytes(), untouched) > 800 * 800 - before_counts.iter().sum::<usize>());
}

#[test]
fn flipping_one_signature_byte_reclassifies_as_original_format() {
    let surface = Surface::new_owned(PixelFormat::Bgr888, Origin::TopLeft, 4, 4).unwrap();
    let mut encoded = Vec::new();
    write_surface(&surface, 2, FileType::New, &mut encoded).unwrap();
    assert!(TgaImage::from_bytes(encoded.clone()).unwrap().is_new_format());

    let last = encoded.len() - 1;
    encoded[last] = b'x';
    assert!(!TgaImage::from_bytes(encoded).unwrap().is_new_format());
}
