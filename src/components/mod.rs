mod control_bar;
mod icons;
mod image_dialog;
mod image_frame;

pub use control_bar::ControlBar;
pub use icons::{CloseIcon, ZoomInIcon, ZoomOutIcon};
pub use image_dialog::ImageDialog;
pub use image_frame::ImageFrame;
