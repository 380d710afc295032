pub mod app;
pub mod components;
pub mod config;
pub mod dialog;
pub mod error;
pub mod layout;
pub mod listener;
pub mod state;
pub mod store;
pub mod transition;
pub mod viewport;
pub mod zoom;

pub use app::App;
pub use components::ImageDialog;
pub use config::LightboxConfig;
pub use error::LightboxError;
pub use state::ImageSelection;
pub use store::ViewerStore;
pub use zoom::ZoomLevel;
