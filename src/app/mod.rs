//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod host;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Marker, Clusterer, Selektion).
pub mod state;
pub mod use_cases;

pub use crate::core::{Coordinate, PointOfInterest};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use host::{HostRequest, MapHost};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, SelectionState, ViewState};
