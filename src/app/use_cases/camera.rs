//! Use-Case-Funktionen für Kamera-Anfragen an den Map Host.

use crate::app::host::HostRequest;
use crate::app::AppState;
use crate::core::{Coordinate, GeoBounds};

/// Stellt eine Schwenk-Anfrage in die Host-Warteschlange.
pub fn pan_to(state: &mut AppState, target: Coordinate) {
    log::debug!("panTo ({})", target);
    state.host_requests.push(HostRequest::PanTo(target));
}

/// Stellt eine Zoom-auf-Ausschnitt-Anfrage in die Host-Warteschlange.
pub fn fit_bounds(state: &mut AppState, bounds: GeoBounds) {
    log::debug!(
        "fitBounds ({}) – ({})",
        bounds.south_west,
        bounds.north_east
    );
    state.host_requests.push(HostRequest::FitBounds(bounds));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_queued_in_order() {
        let mut state = AppState::default();
        let bounds = GeoBounds {
            south_west: Coordinate::new(0.0, 0.0),
            north_east: Coordinate::new(1.0, 1.0),
        };

        pan_to(&mut state, Coordinate::new(0.0, 0.0));
        fit_bounds(&mut state, bounds);
        pan_to(&mut state, Coordinate::new(1.0, 1.0));

        assert_eq!(
            state.host_requests,
            vec![
                HostRequest::PanTo(Coordinate::new(0.0, 0.0)),
                HostRequest::FitBounds(bounds),
                HostRequest::PanTo(Coordinate::new(1.0, 1.0)),
            ]
        );
    }
}
