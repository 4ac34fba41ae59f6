//! Handler für Map Host, Viewport und Kamera-Anfragen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Coordinate, GeoBounds, HostId, Viewport};

/// Bindet den Clusterer an die gemeldete Host-Instanz.
pub fn attach_host(state: &mut AppState, host: HostId, viewport: Viewport) {
    use_cases::clusters::attach_host(state, host, viewport);
}

/// Übernimmt den gemeldeten Viewport.
pub fn set_viewport(state: &mut AppState, viewport: Viewport) {
    use_cases::viewport::set_viewport(state, viewport);
}

/// Berechnet die Gruppierung sofort neu.
pub fn recompute_clusters(state: &mut AppState) {
    use_cases::clusters::recompute(state);
}

/// Fordert einen Kamera-Schwenk an.
pub fn pan_to(state: &mut AppState, target: Coordinate) {
    use_cases::camera::pan_to(state, target);
}

/// Fordert Zoom auf einen Ausschnitt an.
pub fn fit_bounds(state: &mut AppState, bounds: GeoBounds) {
    use_cases::camera::fit_bounds(state, bounds);
}
