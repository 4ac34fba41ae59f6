//! Use-Case-Funktionen für die POI-Selektion (Idle ⇄ Selected).

use crate::app::AppState;
use crate::core::PointOfInterest;

/// Selektiert `poi`. Eine bestehende Selektion wird still ersetzt.
pub fn select_poi(state: &mut AppState, poi: PointOfInterest) {
    log::info!("POI '{}' selektiert ({})", poi.id, poi.coordinate);
    state.selection.select(poi);
}

/// Hebt Selektion und Highlight auf. Aus Idle ein No-op.
pub fn dismiss_selection(state: &mut AppState) {
    if state.selection.dismiss() {
        log::info!("Selektion aufgehoben");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coordinate;

    #[test]
    fn reselecting_same_poi_keeps_selection() {
        let mut state = AppState::default();
        let poi = PointOfInterest::new("A", Coordinate::new(0.0, 0.0));

        select_poi(&mut state, poi.clone());
        select_poi(&mut state, poi.clone());

        assert_eq!(state.selection.selected(), Some(&poi));
        assert_eq!(state.selection.highlight_center(), Some(poi.coordinate));
    }

    #[test]
    fn dismiss_from_idle_is_noop() {
        let mut state = AppState::default();
        dismiss_selection(&mut state);
        assert!(state.selection.is_idle());
        assert_eq!(state.selection.highlight_center(), None);
    }
}
