// Host-side tests for inline CSS formatting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use style::*;

#[test]
fn rgba_formats_channels_and_alpha() {
    assert_eq!(rgba([0, 212, 255], 0.5), "rgba(0, 212, 255, 0.5)");
    assert_eq!(rgba([125, 211, 252], 0.2), "rgba(125, 211, 252, 0.2)");
}

#[test]
fn rgba_clamps_alpha() {
    assert_eq!(rgba([1, 2, 3], 1.7), "rgba(1, 2, 3, 1)");
    assert_eq!(rgba([1, 2, 3], -0.3), "rgba(1, 2, 3, 0)");
    assert_eq!(rgba([1, 2, 3], f32::NAN), "rgba(1, 2, 3, 0)");
}

#[test]
fn px_and_rotation() {
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(0.0), "0px");
    assert_eq!(rotate_deg(-7.25), "rotate(-7.25deg)");
    assert_eq!(rotate_deg(-0.0), "rotate(0deg)");
}
