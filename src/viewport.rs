use leptos::logging::warn;
use leptos::prelude::*;

use crate::error::{self, LightboxError};
use crate::listener::ScopedListener;

/// Width assumed when the window cannot be measured.
pub const FALLBACK_WIDTH: f64 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportMetrics {
    pub width: f64,
    pub is_mobile: bool,
}

impl ViewportMetrics {
    /// Below the breakpoint the control bar uses tight margins.
    pub fn is_compact(&self, breakpoint: f64) -> bool {
        self.width < breakpoint
    }
}

pub fn is_mobile_width(width: f64, mobile_max_width: f64) -> bool {
    width <= mobile_max_width
}

pub fn current_window_width() -> Result<f64, LightboxError> {
    Ok(error::window()?
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(FALLBACK_WIDTH))
}

/// Tracks `window.innerWidth`, updating on `resize` until the owner is disposed.
pub fn use_window_width() -> ReadSignal<f64> {
    let initial = current_window_width().unwrap_or_else(|e| {
        warn!("measuring window: {e}");
        FALLBACK_WIDTH
    });
    let (width, set_width) = signal(initial);
    let listener = StoredValue::new_local(None::<ScopedListener>);

    let attached = error::window().and_then(|window| {
        ScopedListener::attach(&window, "resize", move |_| {
            if let Ok(w) = current_window_width() {
                set_width.set(w);
            }
        })
    });
    match attached {
        Ok(l) => listener.set_value(Some(l)),
        Err(e) => warn!("window width will not track resizes: {e}"),
    }

    on_cleanup(move || {
        let _ = listener.try_update_value(|l| l.take());
    });

    width
}
