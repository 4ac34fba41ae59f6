//! Info-Popup am ausgewählten POI.

use crate::app::AppIntent;
use crate::shared::PopupContent;

/// Abstand des Popups über dem Anker in Pixeln.
const POPUP_OFFSET_PX: f32 = 16.0;

/// Zeigt das Popup an `anchor` (Bildschirmposition) an.
///
/// Schließen über das Fenster-Kreuz erzeugt `PopupDismissed`.
pub fn show_info_popup(
    ctx: &egui::Context,
    popup: &PopupContent,
    anchor: egui::Pos2,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut open = true;
    egui::Window::new(popup.title.as_str())
        .id(egui::Id::new("poi_info_popup"))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .fixed_pos(anchor - egui::vec2(0.0, POPUP_OFFSET_PX))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(popup.body.as_str());
        });

    if !open {
        events.push(AppIntent::PopupDismissed);
    }
    events
}
