use crate::config::LightboxConfig;
use crate::viewport::ViewportMetrics;
use crate::zoom::ZoomLevel;

pub const COMPACT_MARGIN_REM: f64 = 1.0;
pub const WIDE_MARGIN_REM: f64 = 2.0;
pub const CONTROL_GAP_REM: f64 = 2.0;
pub const ZOOM_ICON_SIZE: u32 = 55;
pub const CLOSE_ICON_SIZE: u32 = 35;

/// Sizes derived from the viewport and zoom for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageLayout {
    pub container_width: f64,
    pub max_height: f64,
    pub control_margin_rem: f64,
}

impl ImageLayout {
    pub fn compute(viewport: ViewportMetrics, zoom: ZoomLevel, config: &LightboxConfig) -> Self {
        let (base_width, max_height) = if viewport.is_mobile {
            (config.mobile_base_width, config.mobile_max_height)
        } else {
            (config.desktop_base_width, config.desktop_max_height)
        };
        let control_margin_rem = if viewport.is_compact(config.compact_breakpoint) {
            COMPACT_MARGIN_REM
        } else {
            WIDE_MARGIN_REM
        };

        Self {
            container_width: base_width * zoom.factor(),
            max_height,
            control_margin_rem,
        }
    }

    pub fn viewport_style(&self) -> String {
        format!(
            "display: flex; justify-content: center; align-items: center; overflow: auto; \
             width: 100%; max-height: {}px;",
            self.max_height
        )
    }

    pub fn container_style(&self) -> String {
        format!(
            "width: {}px; transition: width 0.3s ease;",
            self.container_width
        )
    }

    pub fn control_bar_style(&self) -> String {
        format!(
            "position: absolute; top: 0; right: 0; z-index: 5; display: flex; \
             gap: {}rem; margin: {}rem;",
            CONTROL_GAP_REM, self.control_margin_rem
        )
    }
}

pub const BACKDROP_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
     background-color: rgba(0,0,0,0.5); display: flex; justify-content: center; \
     align-items: center; z-index: 10; overflow: hidden;";

pub const MODAL_STYLE: &str = "display: flex; justify-content: center; align-items: center; \
     border-radius: 8px; width: 100%; max-width: 1000px;";

pub const IMAGE_STYLE: &str =
    "width: 100%; height: auto; object-fit: contain; border-radius: 12px; display: block;";

pub const CONTROL_BUTTON_STYLE: &str = "background: transparent; border: none; color: #ffffff; \
     border-radius: 50%; padding: 0; cursor: pointer; display: flex; \
     align-items: center; justify-content: center;";
