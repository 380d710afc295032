use leptos::prelude::*;

use super::icons::{CloseIcon, ZoomInIcon, ZoomOutIcon};
use crate::dialog::ClickTarget;
use crate::layout::{CLOSE_ICON_SIZE, CONTROL_BUTTON_STYLE, ZOOM_ICON_SIZE};
use crate::store::ViewerStore;

/// Zoom out, zoom in and close, pinned to the top-right of the backdrop.
#[component]
pub fn ControlBar(
    store: ViewerStore,
    #[prop(into)] style: Signal<String>,
    on_click: Callback<ClickTarget>,
) -> impl IntoView {
    view! {
        <div
            class="image-lightbox-controls"
            style=move || style.get()
            on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
        >
            <button
                type="button"
                aria-label="Zoom out"
                aria-disabled=move || if store.zoom.get().can_zoom_out() { "false" } else { "true" }
                title=move || store.zoom.get().percent_label()
                style=CONTROL_BUTTON_STYLE
                on:click=move |_| store.zoom_out()
            >
                <ZoomOutIcon size=ZOOM_ICON_SIZE />
            </button>
            <button
                type="button"
                aria-label="Zoom in"
                aria-disabled=move || if store.zoom.get().can_zoom_in() { "false" } else { "true" }
                title=move || store.zoom.get().percent_label()
                style=CONTROL_BUTTON_STYLE
                on:click=move |_| store.zoom_in()
            >
                <ZoomInIcon size=ZOOM_ICON_SIZE />
            </button>
            <button
                type="button"
                aria-label="Close"
                style=format!("{CONTROL_BUTTON_STYLE} padding: 0.5rem;")
                on:click=move |_| on_click.run(ClickTarget::CloseButton)
            >
                <CloseIcon size=CLOSE_ICON_SIZE />
            </button>
        </div>
    }
}
