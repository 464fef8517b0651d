//! Progress overlay and the narration timer behind it.
//!
//! The narrator reveals one phrase of [`PROGRESS_PHRASES`] every
//! [`PROGRESS_STEP_MS`] and stops after the last one. The pacing is
//! decorative: it is not synchronized with the real request, and no
//! correction happens if the server finishes earlier or later.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::config::{PROGRESS_PHRASES, PROGRESS_STEP_MS};

/// The phrase revealed at a given step, `None` once the list is done.
fn phrase_for_step(step: usize) -> Option<&'static str> {
    PROGRESS_PHRASES.get(step).copied()
}

/// Owning handle for a running narration.
///
/// Dropping the pending timeout cancels it, so the caller can stop the
/// narration at any point (component cleanup, navigation).
pub struct NarrationHandle {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl NarrationHandle {
    /// Cancel whatever step is still pending.
    pub fn stop(&self) {
        self.pending.borrow_mut().take();
    }

    /// Whether another phrase is still scheduled.
    pub fn is_active(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

/// Start narrating into `set_status`, returning the handle that owns
/// the timer chain.
pub fn start_narration(set_status: WriteSignal<String>) -> NarrationHandle {
    let pending = Rc::new(RefCell::new(None));
    schedule_step(pending.clone(), set_status, 0);
    NarrationHandle { pending }
}

fn schedule_step(pending: Rc<RefCell<Option<Timeout>>>, set_status: WriteSignal<String>, step: usize) {
    let Some(phrase) = phrase_for_step(step) else {
        // Past the last phrase; leave the final text in place.
        pending.borrow_mut().take();
        return;
    };
    let slot = pending.clone();
    let timeout = Timeout::new(PROGRESS_STEP_MS, move || {
        set_status.set(phrase.to_string());
        schedule_step(slot, set_status, step + 1);
    });
    *pending.borrow_mut() = Some(timeout);
}

/// Modal overlay shown while a submission is in flight.
#[component]
pub fn ProgressOverlay(status: ReadSignal<String>) -> impl IntoView {
    view! {
        <div class="progress-overlay" role="dialog" aria-modal="true">
            <div class="progress-dialog">
                <div class="spinner" aria-hidden="true"></div>
                <h2>"Analyzing Your Resume"</h2>
                <p class="progress-status">{move || status.get()}</p>
                <small class="progress-note">"This usually takes a few seconds."</small>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_phrases_in_order() {
        assert_eq!(PROGRESS_PHRASES.len(), 6);
        assert_eq!(phrase_for_step(0), Some("Extracting text from resume..."));
        assert_eq!(phrase_for_step(5), Some("Finalizing analysis..."));
    }

    #[test]
    fn narration_ends_after_last_phrase() {
        assert_eq!(phrase_for_step(6), None);
        assert_eq!(phrase_for_step(100), None);
    }
}
