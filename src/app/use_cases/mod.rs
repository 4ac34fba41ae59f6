//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod clusters;
pub mod markers;
pub mod selection;
pub mod viewport;
