//! Use-Case-Funktionen für Viewport-Meldungen des Map Hosts.

use crate::app::AppState;
use crate::core::Viewport;

/// Übernimmt den gemeldeten Viewport.
///
/// Gibt zurück, ob die Änderung eine Neugruppierung erfordert.
pub fn set_viewport(state: &mut AppState, viewport: Viewport) -> bool {
    log::debug!(
        "camera changed: center ({}), zoom {:.2}",
        viewport.center,
        viewport.zoom
    );
    state.view.viewport = Some(viewport);

    state
        .clusterer
        .as_mut()
        .is_some_and(|clusterer| clusterer.set_viewport(viewport))
}

/// Prüft ohne Mutation, ob `viewport` eine Neugruppierung erfordern würde.
pub fn is_significant(state: &AppState, viewport: &Viewport) -> bool {
    state
        .clusterer
        .as_ref()
        .is_some_and(|clusterer| clusterer.is_significant(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::clusters::attach_host;
    use crate::core::{Coordinate, HostId};

    #[test]
    fn set_viewport_without_host_only_stores_viewport() {
        let mut state = AppState::default();
        let vp = Viewport::new(Coordinate::new(0.0, 0.0), 3.0, [640.0, 480.0]);

        assert!(!set_viewport(&mut state, vp));
        assert_eq!(state.view.viewport, Some(vp));
    }

    #[test]
    fn zoom_level_change_is_significant() {
        let mut state = AppState::default();
        let vp = Viewport::new(Coordinate::new(0.0, 0.0), 13.0, [640.0, 480.0]);
        attach_host(&mut state, HostId(1), vp);

        let zoomed = Viewport::new(vp.center, 14.2, vp.size_px);
        assert!(is_significant(&state, &zoomed));
        assert!(set_viewport(&mut state, zoomed));
        assert!(!is_significant(&state, &zoomed));
    }
}
