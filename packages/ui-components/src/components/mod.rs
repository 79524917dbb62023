pub mod article_params_form;
pub mod arrow_button;
pub mod button;
pub mod panel;
pub mod radio_group;
pub mod select;
pub mod spacing;
pub mod text;

pub use article_params_form::*;
pub use arrow_button::*;
pub use button::*;
pub use panel::{PanelGeometry, PanelVisibility, PointerEvent, PANEL_WIDTH};
pub use radio_group::radio_group;
pub use select::select;
pub use spacing::*;
pub use text::*;
