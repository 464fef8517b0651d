//! Small reusable helpers: size formatting, easing, the number tween
//! and a debounce over a cancellable timeout.
//!
//! The pure parts (formatting, easing, parsing) are kept free of DOM
//! types so they can be unit tested natively.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Format a byte count as a human-readable size.
///
/// Two decimals with trailing zeros trimmed, so 1536 bytes renders as
/// "1.5 KB" and 1024 as "1 KB".
pub fn format_file_size(bytes: f64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes <= 0.0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes.ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes / 1024_f64.powi(exponent as i32);
    let mut formatted = format!("{value:.2}");
    if formatted.contains('.') {
        while formatted.ends_with('0') {
            formatted.pop();
        }
        if formatted.ends_with('.') {
            formatted.pop();
        }
    }
    format!("{} {}", formatted, UNITS[exponent])
}

/// Cubic ease-out: `1 - (1 - t)^3`.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Parse a metric element's text into an animation target.
///
/// Returns the numeric value and whether a trailing `%` must be
/// preserved. `None` means the text is not animatable and the element
/// is left untouched.
pub fn parse_metric_target(text: &str) -> Option<(f64, bool)> {
    let trimmed = text.trim();
    let is_percentage = trimmed.ends_with('%');
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number.parse::<f64>().ok().map(|value| (value, is_percentage))
}

/// Render an interpolated metric value, one decimal, suffix preserved.
pub fn format_metric(value: f64, is_percentage: bool) -> String {
    if is_percentage {
        format!("{value:.1}%")
    } else {
        format!("{value:.1}")
    }
}

/// Tween an element's text from `start` to `end` over `duration_ms`.
///
/// Updates every animation frame with [`ease_out_cubic`] pacing. A
/// trailing `%` in the element's current text is kept on every frame.
/// The callback stops rescheduling once the target is reached; like
/// the page's other fire-and-forget callbacks it is never reclaimed.
pub fn animate_number(element: web_sys::Element, start: f64, end: f64, duration_ms: f64) {
    let is_percentage = element
        .text_content()
        .map_or(false, |text| text.contains('%'));
    let started = js_sys::Date::now();

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let schedule = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let progress = ((js_sys::Date::now() - started) / duration_ms).min(1.0);
        let current = start + (end - start) * ease_out_cubic(progress);
        element.set_text_content(Some(&format_metric(current, is_percentage)));
        if progress < 1.0 {
            if let Some(callback) = schedule.borrow().as_ref() {
                raf(callback);
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(callback) = frame.borrow().as_ref() {
        raf(callback);
    };
}

/// Run a closure on the next animation frame.
///
/// Used to defer work until the freshly mounted DOM is in place.
pub fn request_animation_frame(f: impl FnOnce() + 'static) {
    let closure = Closure::once(f);
    raf_unchecked(closure.as_ref());
    closure.forget();
}

fn raf(callback: &Closure<dyn FnMut()>) {
    raf_unchecked(callback.as_ref());
}

fn raf_unchecked(callback: &JsValue) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {e:?}");
        }
    }
}

/// Wrap a closure so rapid calls collapse into one delayed invocation.
///
/// Each call cancels the previously pending timeout (dropping a
/// `Timeout` clears it) and schedules a fresh one.
pub fn debounce(wait_ms: u32, f: impl FnMut() + 'static) -> impl FnMut() {
    let callback = Rc::new(RefCell::new(f));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    move || {
        let callback = callback.clone();
        let slot = pending.clone();
        let timeout = Timeout::new(wait_ms, move || {
            slot.borrow_mut().take();
            (*callback.borrow_mut())();
        });
        *pending.borrow_mut() = Some(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
    }

    #[test]
    fn sub_kilobyte_stays_in_bytes() {
        assert_eq!(format_file_size(500.0), "500 Bytes");
    }

    #[test]
    fn whole_units_drop_decimals() {
        assert_eq!(format_file_size(1024.0), "1 KB");
        assert_eq!(format_file_size(16.0 * 1024.0 * 1024.0), "16 MB");
    }

    #[test]
    fn fractional_sizes_keep_significant_decimals() {
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(2.5 * 1024.0 * 1024.0), "2.5 MB");
    }

    #[test]
    fn gigabytes_cap_the_unit_table() {
        assert_eq!(format_file_size(3.0 * 1024.0 * 1024.0 * 1024.0), "3 GB");
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_decelerates() {
        // Halfway through the duration the value is already 87.5% there.
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-12);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.75));
    }

    #[test]
    fn parses_percentage_target() {
        assert_eq!(parse_metric_target("87.5%"), Some((87.5, true)));
        assert_eq!(parse_metric_target("  87.5%  "), Some((87.5, true)));
    }

    #[test]
    fn parses_plain_number() {
        assert_eq!(parse_metric_target("42"), Some((42.0, false)));
    }

    #[test]
    fn non_numeric_text_is_skipped() {
        assert_eq!(parse_metric_target("N/A"), None);
        assert_eq!(parse_metric_target(""), None);
        assert_eq!(parse_metric_target("%"), None);
    }

    #[test]
    fn tween_final_frame_reproduces_target_text() {
        // At progress 1.0 the tween writes exactly the parsed target back.
        let (target, is_percentage) = parse_metric_target("87.5%").unwrap();
        assert_eq!(format_metric(target, is_percentage), "87.5%");
    }
}
