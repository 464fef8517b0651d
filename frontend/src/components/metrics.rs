//! Page-load metric animation.
//!
//! Every element carrying the `metric-value` class has its text parsed
//! as a target and tweened up from zero. Elements whose text does not
//! parse are left untouched, and a page without metrics is a no-op.

use wasm_bindgen::JsCast;

use crate::config::NUMBER_TWEEN_MS;
use crate::utils::{animate_number, parse_metric_target};

/// Animate every `.metric-value` element currently in the document.
///
/// Call after mount; silently does nothing when the page has none.
pub fn animate_metric_values() {
    let document = gloo_utils::document();
    let Ok(nodes) = document.query_selector_all(".metric-value") else {
        return;
    };

    let mut animated = 0;
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let Some(text) = element.text_content() else {
            continue;
        };
        if let Some((target, _)) = parse_metric_target(&text) {
            animate_number(element, 0.0, target, NUMBER_TWEEN_MS);
            animated += 1;
        }
    }

    if animated > 0 {
        log::debug!("📈 Animating {animated} metric value(s)");
    }
}
