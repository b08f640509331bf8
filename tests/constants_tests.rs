// Host-side tests for the web front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn canvas_selector_targets_a_canvas() {
    assert!(CANVAS_SELECTOR.starts_with("canvas"));
    assert!(!VISIBLE_CLASS.is_empty());
    assert!(!VISIBLE_CLASS.contains(' '));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_cap_is_two() {
    assert_eq!(MAX_PIXEL_RATIO, 2.0);
}

#[test]
fn clear_color_is_opaque_and_normalised() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(CLEAR_COLOR[3], 1.0);
}
