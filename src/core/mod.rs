//! Core-Domänentypen: Koordinaten, POIs, Marker-Registry, Clustering, Kamera.

pub mod camera;
pub mod clusterer;
pub mod geo;
pub mod marker_registry;
pub mod poi;

pub use camera::MapCamera;
pub use clusterer::{ClusterGroup, ClusterOptions, Clusterer, HostId, MarkerPoint};
pub use geo::{Coordinate, GeoBounds, Viewport};
pub use marker_registry::{MarkerHandle, MarkerRegistry, RegistryChange};
pub use poi::{PoiStore, PointOfInterest};
