use crate::constants::VISIBLE_CLASS;
use crate::style;
use hotspot_core::AnchorPoint;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM elements driven by the anchors, index-aligned with them.
pub struct MarkerElements {
    elements: Vec<Option<web::HtmlElement>>,
}

impl MarkerElements {
    /// Look up one element per anchor by its label. Anchors without a label
    /// or without a matching element are skipped at apply time.
    pub fn bind(document: &web::Document, anchors: &[AnchorPoint]) -> Self {
        let elements = anchors
            .iter()
            .map(|a| {
                let selector = a.label()?;
                let found = document
                    .query_selector(selector)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
                if found.is_none() {
                    log::warn!("[hotspot] no element for {selector}");
                }
                found
            })
            .collect();
        Self { elements }
    }

    pub fn bound(&self) -> usize {
        self.elements.iter().filter(|e| e.is_some()).count()
    }

    pub fn apply(&self, anchors: &[AnchorPoint]) {
        for (anchor, el) in anchors.iter().zip(&self.elements) {
            let Some(el) = el else { continue };
            let transform = style::marker_transform(anchor.screen_offset.x, anchor.screen_offset.y);
            _ = el.style().set_property("transform", &transform);
            let classes = el.class_list();
            if anchor.visible {
                _ = classes.add_1(VISIBLE_CLASS);
            } else {
                _ = classes.remove_1(VISIBLE_CLASS);
            }
        }
    }
}
