use leptos::logging::log;
use leptos::prelude::*;

use crate::components::ImageDialog;
use crate::config::load_config;
use crate::state::{Gallery, ImageSelection};
use crate::store::ViewerStore;
use crate::viewport::{is_mobile_width, use_window_width};
use crate::zoom::ZoomLevel;

const THUMBNAIL_STYLE: &str = "width: 100%; aspect-ratio: 3 / 2; object-fit: cover; \
     border-radius: 8px; cursor: zoom-in; display: block;";

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    let width = use_window_width();
    let is_mobile = Signal::derive(move || is_mobile_width(width.get(), config.mobile_max_width));
    let store = ViewerStore::new(ZoomLevel::default(), is_mobile);

    // The selection outlives `dialog_open` so the exit animation still has an image
    let (selected, set_selected) = signal::<Option<ImageSelection>>(None);
    let (dialog_open, set_dialog_open) = signal(false);

    let on_close = Callback::new(move |_: ()| {
        log!("closing image dialog");
        set_dialog_open.set(false);
    });

    let thumbnails = Gallery::demo()
        .images
        .into_iter()
        .map(|image| {
            let src = image.src.clone();
            let title = image.title.clone();
            view! {
                <figure style="margin: 0;">
                    <img
                        src=src
                        alt=title.clone()
                        style=THUMBNAIL_STYLE
                        on:click=move |_| {
                            set_selected.set(Some(image.clone()));
                            set_dialog_open.set(true);
                        }
                    />
                    <figcaption style="color: #cccccc; font-size: 13px; margin-top: 6px;">
                        {title}
                    </figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <main style="min-height: 100vh; background: #121212; padding: 24px; box-sizing: border-box; \
                     font-family: system-ui, sans-serif;">
            <div style=move || {
                let columns = if is_mobile.get() { 2 } else { 3 };
                format!(
                    "display: grid; grid-template-columns: repeat({columns}, 1fr); gap: 16px; \
                     max-width: 1100px; margin: 0 auto;"
                )
            }>
                {thumbnails}
            </div>
            <ImageDialog
                visible=dialog_open
                on_close=on_close
                image=selected
                store=store
                config=config
            />
        </main>
    }
}
