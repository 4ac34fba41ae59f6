//! POI-Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, HostRequest, MapHost, SelectionState,
    ViewState,
};
pub use core::{
    ClusterGroup, ClusterOptions, Clusterer, Coordinate, GeoBounds, HostId, MapCamera,
    MarkerHandle, MarkerPoint, MarkerRegistry, PoiStore, PointOfInterest, RegistryChange,
    Viewport,
};
pub use shared::{MapOptions, RenderScene, SceneItem};
