//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointOfInterest;

/// Selektiert einen POI.
pub fn select(state: &mut AppState, poi: PointOfInterest) {
    use_cases::selection::select_poi(state, poi);
}

/// Hebt die aktuelle Selektion auf.
pub fn dismiss(state: &mut AppState) {
    use_cases::selection::dismiss_selection(state);
}
