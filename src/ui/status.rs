//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppIntent, AppState};
use crate::shared::RenderScene;

use super::MapView;

/// Rendert die Status-Bar und liefert ausgelöste Intents.
pub fn render_status_bar(
    ctx: &egui::Context,
    state: &AppState,
    scene: &RenderScene,
    map_view: &mut MapView,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                events.push(AppIntent::RecenterRequested {
                    target: state.options.default_center,
                });
            }
            ui.checkbox(&mut map_view.markers_visible, "Marker");

            ui.separator();

            if state.view.has_host() {
                ui.label("Karte: bereit");
            } else {
                ui.label("Karte: lädt…");
            }

            ui.separator();

            ui.label(format!(
                "Marker: {}/{} | Gruppen: {} | Neuberechnungen: {}",
                state.markers.len(),
                map_view.mounted_count(),
                scene.cluster_count(),
                state.cluster_recompute_count()
            ));

            ui.separator();

            let camera = map_view.camera();
            ui.label(format!(
                "Zoom: {:.1} | Zentrum: ({})",
                camera.zoom, camera.center
            ));

            ui.separator();

            match state.selection.selected() {
                Some(poi) => ui.label(format!("Auswahl: {}", poi.id)),
                None => ui.label("Auswahl: -"),
            };

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });

    events
}
