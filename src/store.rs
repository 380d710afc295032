use leptos::prelude::*;

use crate::zoom::ZoomLevel;

/// Shared viewer state owned by the page and handed to the dialog.
///
/// Zoom survives closing and reopening the dialog; the page decides what
/// counts as a mobile viewport.
#[derive(Clone, Copy)]
pub struct ViewerStore {
    pub zoom: RwSignal<ZoomLevel>,
    pub is_mobile: Signal<bool>,
}

impl ViewerStore {
    pub fn new(initial_zoom: ZoomLevel, is_mobile: impl Into<Signal<bool>>) -> Self {
        Self {
            zoom: RwSignal::new(initial_zoom),
            is_mobile: is_mobile.into(),
        }
    }

    pub fn zoom_in(&self) {
        self.zoom.update(|z| *z = z.zoom_in());
    }

    pub fn zoom_out(&self) {
        self.zoom.update(|z| *z = z.zoom_out());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_through_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = ViewerStore::new(ZoomLevel::default(), false);
            for _ in 0..5 {
                store.zoom_in();
            }
            assert_eq!(store.zoom.get_untracked().factor(), 2.0);

            for _ in 0..20 {
                store.zoom_in();
            }
            assert_eq!(store.zoom.get_untracked(), ZoomLevel::MAX);

            for _ in 0..20 {
                store.zoom_out();
            }
            assert_eq!(store.zoom.get_untracked(), ZoomLevel::MIN);
        });
    }

    #[test]
    fn keeps_initial_zoom_and_mobile_flag() {
        let owner = Owner::new();
        owner.with(|| {
            let store = ViewerStore::new(ZoomLevel::MAX, true);
            assert_eq!(store.zoom.get_untracked().factor(), 3.0);
            assert!(store.is_mobile.get_untracked());
            store.zoom_out();
            assert_eq!(store.zoom.get_untracked().factor(), 2.8);
        });
    }
}
