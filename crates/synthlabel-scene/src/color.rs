/// Convert an HSV color to RGB.
///
/// All components are in `[0, 1]`; the hue wraps around `1.0`.
///
/// # Arguments
///
/// * `h` - Hue.
/// * `s` - Saturation.
/// * `v` - Value.
///
/// # Returns
///
/// The `[r, g, b]` triple.
///
/// Example:
///
/// ```
/// use synthlabel_scene::hsv_to_rgb;
///
/// let rgb = hsv_to_rgb(0.0, 1.0, 1.0);
/// assert_eq!(rgb, [1.0, 0.0, 0.0]);
/// ```
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    if s == 0.0 {
        return [v, v, v];
    }

    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor() as u32 % 6;
    let f = h - h.floor();

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
