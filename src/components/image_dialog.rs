use gloo_timers::callback::Timeout;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::{ControlBar, ImageFrame};
use crate::config::LightboxConfig;
use crate::dialog::{dispatch_click, dispatch_key, modal_image, ClickTarget};
use crate::error;
use crate::layout::{ImageLayout, BACKDROP_STYLE, MODAL_STYLE};
use crate::listener::{ListenerSlot, ScopedListener};
use crate::state::ImageSelection;
use crate::store::ViewerStore;
use crate::transition::{backdrop_animation, modal_animation, Step, Transition, KEYFRAMES_CSS};
use crate::viewport::{use_window_width, ViewportMetrics};

/// Lightbox over the whole page with zoom controls.
///
/// Closes only through `on_close`: the parent owns `visible`. Escape is
/// listened for on the document while `visible` is true.
#[component]
pub fn ImageDialog(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] image: Signal<Option<ImageSelection>>,
    store: ViewerStore,
    #[prop(optional)] config: LightboxConfig,
) -> impl IntoView {
    let width = use_window_width();
    let timing = config.timing;

    let transition = RwSignal::new(Transition::default());
    // Replacing or disposing the pending timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    Effect::new(move || {
        let show = visible.get();
        let step = transition
            .try_update(|t| t.set_visible(show, &timing))
            .unwrap_or(Step::Idle);
        if let Step::Wait { epoch, after_ms } = step {
            let timeout = Timeout::new(after_ms, move || {
                let current = transition
                    .try_with_untracked(|t| t.is_current(epoch))
                    .unwrap_or(false);
                if current {
                    transition.try_update(|t| t.complete(epoch));
                }
            });
            pending.set_value(Some(timeout));
        }
    });

    let key_listener = StoredValue::new_local(ListenerSlot::<ScopedListener>::default());

    Effect::new(move || {
        let active = visible.get();
        if active {
            log!("image dialog opened");
        }
        key_listener.update_value(|slot| {
            let synced = slot.sync(active, || {
                let document = error::document()?;
                ScopedListener::attach(&document, "keydown", move |ev| {
                    if let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() {
                        dispatch_key(&ev.key(), || on_close.run(()));
                    }
                })
            });
            if let Err(e) = synced {
                warn!("escape will not close the dialog: {e}");
            }
        });
    });

    on_cleanup(move || {
        let _ = key_listener.try_update_value(|slot| slot.release());
        let _ = pending.try_update_value(|t| t.take());
    });

    let on_click = Callback::new(move |target: ClickTarget| {
        dispatch_click(target, config.close_on_backdrop, || on_close.run(()));
    });

    let layout = Signal::derive(move || {
        let viewport = ViewportMetrics {
            width: width.get(),
            is_mobile: store.is_mobile.get(),
        };
        ImageLayout::compute(viewport, store.zoom.get(), &config)
    });
    let mounted = Memo::new(move |_| transition.get().phase().is_mounted());
    let phase = move || transition.get().phase();

    move || {
        mounted.get().then(|| {
            view! {
                <div
                    class="image-lightbox-backdrop"
                    style=move || format!("{BACKDROP_STYLE} {}", backdrop_animation(phase(), &timing))
                    on:click=move |_| on_click.run(ClickTarget::Backdrop)
                >
                    <style>{KEYFRAMES_CSS}</style>
                    <ControlBar
                        store=store
                        style=Signal::derive(move || layout.get().control_bar_style())
                        on_click=on_click
                    />
                    <div
                        class="image-lightbox-modal"
                        style=move || format!("{MODAL_STYLE} {}", modal_animation(phase(), &timing))
                        on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        {move || {
                            modal_image(image.get())
                                .map(|attrs| view! { <ImageFrame attrs=attrs layout=layout /> })
                        }}
                    </div>
                </div>
            }
        })
    }
}
