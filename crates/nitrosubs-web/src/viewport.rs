//! Reactive viewport classification

use leptos::ev;
use leptos::prelude::*;
use nitrosubs_core::Viewport;

fn current_viewport() -> Viewport {
    if !cfg!(target_family = "wasm") {
        return Viewport::default();
    }
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(Viewport::classify)
        .unwrap_or_default()
}

/// Mobile/desktop signal, updated on `resize`
pub fn use_viewport() -> Signal<Viewport> {
    let (viewport, set_viewport) = signal(current_viewport());

    let handle = window_event_listener(ev::resize, move |_| {
        let next = current_viewport();
        if viewport.get_untracked() != next {
            set_viewport.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    viewport.into()
}
