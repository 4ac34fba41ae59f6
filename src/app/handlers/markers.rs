//! Handler für Marker-Mount/-Unmount und die Batch-Neugruppierung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MarkerHandle;

/// Trägt ein gemountetes Marker-Handle ein.
pub fn register(state: &mut AppState, id: &str, handle: MarkerHandle) {
    use_cases::markers::register_marker(state, id, handle);
}

/// Trägt einen entfernten Marker aus.
pub fn unregister(state: &mut AppState, id: &str) {
    use_cases::markers::unregister_marker(state, id);
}

/// Gruppiert neu, falls die Registry im laufenden Batch geändert wurde.
pub fn flush(state: &mut AppState) {
    use_cases::clusters::flush_if_dirty(state);
}
