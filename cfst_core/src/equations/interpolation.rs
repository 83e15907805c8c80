//! Piecewise-linear interpolation over normative tables.

/// Linear interpolation over `(x, y)` breakpoints sorted by ascending `x`.
///
/// Values left of the first breakpoint clamp to the first `y`, values right of
/// the last clamp to the last `y`. An empty table yields `0.0`.
///
/// # Example
/// ```rust
/// use cfst_core::equations::interpolate;
///
/// let table = [(0.0, 1.0), (10.0, 0.0)];
/// assert_eq!(interpolate(&table, -5.0), 1.0);
/// assert_eq!(interpolate(&table, 2.5), 0.75);
/// assert_eq!(interpolate(&table, 99.0), 0.0);
/// ```
pub fn interpolate(points: &[(f64, f64)], x: f64) -> f64 {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return 0.0,
    };

    if x <= first.0 {
        return first.1;
    }
    if x >= last.0 {
        return last.1;
    }

    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x == x1 || x1 == x0 {
                return y1;
            }
            return y0 + (y1 - y0) * (x - x0) / (x1 - x0);
        }
    }

    last.1
}
