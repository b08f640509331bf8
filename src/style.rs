/// CSS transform placing a marker at `offset` pixels from the viewport centre.
pub fn marker_transform(offset_x: f32, offset_y: f32) -> String {
    format!("translateX({offset_x}px) translateY({offset_y}px)")
}

/// Clamp a device pixel ratio to `max`, treating nonsense values as 1.
pub fn effective_pixel_ratio(dpr: f64, max: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max)
    } else {
        1.0
    }
}

/// Backing-store size for a CSS size at the given pixel ratio, at least 1x1.
pub fn backing_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * pixel_ratio).floor().max(1.0) as u32;
    let h = (css_height * pixel_ratio).floor().max(1.0) as u32;
    (w, h)
}
