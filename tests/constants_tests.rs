// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_hooks_are_well_formed() {
    for id in [CANVAS_ID, ACCEPT_BUTTON_ID, DECLINE_BUTTON_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are looked up without the hash: {id}");
    }
    for sel in [SCENE_SELECTOR, BLUR_OVERLAY_SELECTOR] {
        assert!(sel.starts_with('.'), "expected a class selector: {sel}");
    }
    assert_ne!(ACCEPT_BUTTON_ID, DECLINE_BUTTON_ID);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn canvas_styling_is_sane() {
    assert!(GLOW_ALPHA > 0.0 && GLOW_ALPHA <= 1.0);
    assert!(GLOW_BLUR > 0.0);
    assert!(LINK_WIDTH > 0.0 && LINK_WIDTH <= 1.0);
    assert_ne!(PARTICLE_RGB, LINK_RGB);
}

#[test]
fn decline_reacts_to_hover_touch_and_click() {
    assert!(DECLINE_EVENTS.contains(&"mouseenter"));
    assert!(DECLINE_EVENTS.contains(&"touchstart"));
    assert!(DECLINE_EVENTS.contains(&"click"));
}

#[test]
fn dodge_transition_lasts_as_long_as_the_tilt() {
    // The tilt springs back after 300ms; the CSS easing should match.
    assert!(DODGE_TRANSITION.contains("0.3s"));
}
