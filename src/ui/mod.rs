//! UI-Layer mit egui: Karten-Host, Popup und Status-Bar.

pub mod map_view;
pub mod popup;
pub mod status;

pub use map_view::MapView;
pub use popup::show_info_popup;
pub use status::render_status_bar;
