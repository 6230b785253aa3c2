use pixmorph::{Color, PixelGrid};

/// Grid whose red channel encodes the column and green channel the row.
pub fn coordinate_grid(width: usize, height: usize) -> PixelGrid {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");
    assert!(width <= 256 && height <= 256, "coordinates must fit in a channel");
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| Color::new(x as u8, y as u8, ((x * 7 + y * 13) % 256) as u8))
                .collect()
        })
        .collect();
    PixelGrid::from_rows(rows).expect("valid synthetic grid")
}

/// Two-color checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: usize, height: usize, cell: usize, a: Color, b: Color) -> PixelGrid {
    assert!(cell > 0, "cell size must be positive");
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| if (x / cell + y / cell) % 2 == 0 { a } else { b })
        })
        .collect();
    PixelGrid::from_pixels(width, height, pixels).expect("valid synthetic grid")
}
