use leptos::prelude::*;

use crate::layout::{ImageLayout, IMAGE_STYLE};
use crate::dialog::ImageAttrs;

#[component]
pub fn ImageFrame(attrs: ImageAttrs, #[prop(into)] layout: Signal<ImageLayout>) -> impl IntoView {
    view! {
        <div class="image-lightbox-viewport" style=move || layout.get().viewport_style()>
            <div style=move || layout.get().container_style()>
                <img class="image-lightbox-image" src=attrs.src alt=attrs.alt style=IMAGE_STYLE />
            </div>
        </div>
    }
}
