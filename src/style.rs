// Inline CSS value formatting shared by the canvas and DOM collaborators.

/// `rgba(r, g, b, a)` with alpha clamped to \[0, 1\].
#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    let a = if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    };
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], a)
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}

#[inline]
pub fn rotate_deg(degrees: f32) -> String {
    // Avoid "-0deg" when springing back.
    let d = if degrees == 0.0 { 0.0 } else { degrees };
    format!("rotate({}deg)", d)
}
