/// Web front-end tuning.
///
/// Scene and camera defaults live in `hotspot_core::constants`; the values
/// here only concern the page the viewer is embedded in.
// Canvas the renderer attaches to
pub const CANVAS_SELECTOR: &str = "canvas.webgl";

// Class toggled on marker elements whose anchor is in line of sight
pub const VISIBLE_CLASS: &str = "visible";

// Backing store is CSS size * devicePixelRatio, capped here
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Clear colour behind the scene (linear RGBA)
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

