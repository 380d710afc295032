//! Which user input closes the dialog, and what the modal body shows.

use crate::state::ImageSelection;

pub const ESCAPE_KEY: &str = "Escape";

/// Whether a `KeyboardEvent::key()` value dismisses the dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    key == ESCAPE_KEY
}

/// Runs `on_close` for a key press while the dialog listens for keys.
/// Returns whether the press was consumed.
pub fn dispatch_key(key: &str, on_close: impl FnOnce()) -> bool {
    if is_dismiss_key(key) {
        on_close();
        true
    } else {
        false
    }
}

/// Clicks that reach the dialog's dismissal handler.
///
/// The modal body and the control bar stop propagation, so their clicks
/// never arrive here as `Backdrop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    CloseButton,
}

pub fn click_closes(target: ClickTarget, close_on_backdrop: bool) -> bool {
    match target {
        ClickTarget::CloseButton => true,
        ClickTarget::Backdrop => close_on_backdrop,
    }
}

/// Runs `on_close` when a click on `target` dismisses the dialog.
pub fn dispatch_click(target: ClickTarget, close_on_backdrop: bool, on_close: impl FnOnce()) -> bool {
    if click_closes(target, close_on_backdrop) {
        on_close();
        true
    } else {
        false
    }
}

/// Attributes of the `<img>` inside the modal.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageAttrs {
    pub src: String,
    pub alt: String,
}

/// The modal renders an image element only for a present selection.
pub fn modal_image(selection: Option<ImageSelection>) -> Option<ImageAttrs> {
    selection.map(|image| ImageAttrs {
        src: image.src,
        alt: image.title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    mod keys {
        use super::*;

        #[test]
        fn only_escape_dismisses() {
            assert!(is_dismiss_key("Escape"));
            assert!(!is_dismiss_key("Esc"));
            assert!(!is_dismiss_key("escape"));
            assert!(!is_dismiss_key("Enter"));
            assert!(!is_dismiss_key(""));
        }

        #[test]
        fn escape_press_closes_exactly_once() {
            let calls = Cell::new(0);
            for _ in 0..3 {
                dispatch_key("Escape", || calls.set(calls.get() + 1));
            }
            assert_eq!(calls.get(), 3);
        }

        #[test]
        fn other_keys_do_not_close() {
            let calls = Cell::new(0);
            for key in ["a", "Enter", " ", "ArrowLeft", "+"] {
                assert!(!dispatch_key(key, || calls.set(calls.get() + 1)));
            }
            assert_eq!(calls.get(), 0);
        }
    }

    mod clicks {
        use super::*;

        #[test]
        fn close_button_always_closes() {
            for close_on_backdrop in [false, true] {
                let calls = Cell::new(0);
                assert!(dispatch_click(ClickTarget::CloseButton, close_on_backdrop, || {
                    calls.set(calls.get() + 1)
                }));
                assert_eq!(calls.get(), 1);
            }
        }

        #[test]
        fn backdrop_click_ignored_by_default() {
            let calls = Cell::new(0);
            assert!(!dispatch_click(ClickTarget::Backdrop, false, || calls.set(calls.get() + 1)));
            assert_eq!(calls.get(), 0);
        }

        #[test]
        fn backdrop_click_closes_when_enabled() {
            let calls = Cell::new(0);
            assert!(dispatch_click(ClickTarget::Backdrop, true, || calls.set(calls.get() + 1)));
            assert_eq!(calls.get(), 1);
        }
    }

    mod modal_body {
        use super::*;

        #[test]
        fn absent_selection_has_no_image() {
            assert_eq!(modal_image(None), None);
        }

        #[test]
        fn present_selection_maps_title_to_alt() {
            let attrs = modal_image(Some(ImageSelection::new("/cat.png", "A cat"))).unwrap();
            assert_eq!(attrs.src, "/cat.png");
            assert_eq!(attrs.alt, "A cat");
        }

        #[test]
        fn untitled_selection_still_renders() {
            let attrs = modal_image(Some(ImageSelection::new("/x.png", ""))).unwrap();
            assert_eq!(attrs.alt, "");
        }
    }
}
