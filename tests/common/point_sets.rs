use collinear_points::Point;

/// Build points from coordinate pairs, panicking on out-of-range input.
pub fn points(coords: &[(i32, i32)]) -> Vec<Point> {
    coords
        .iter()
        .map(|&(x, y)| Point::new(x, y).unwrap())
        .collect()
}

/// Full `w` x `h` integer grid anchored at the origin.
pub fn grid(w: i32, h: i32) -> Vec<Point> {
    let mut out = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            out.push(Point::new(x, y).unwrap());
        }
    }
    out
}

/// `n` points on the line through `(x0, y0)` with step `(dx, dy)`.
pub fn line(x0: i32, y0: i32, dx: i32, dy: i32, n: i32) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(x0 + i * dx, y0 + i * dy).unwrap())
        .collect()
}
