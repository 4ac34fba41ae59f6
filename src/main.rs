//! POI-Map.
//!
//! Kartendemo mit gruppierten Sehenswürdigkeiten um Sydney.
//! Klick auf einen Pin schwenkt die Karte dorthin und markiert den Umkreis.

use eframe::egui;
use poi_map::{ui, AppController, AppIntent, AppState, HostId, MapOptions, PoiStore};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("POI-Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let map_options = Self::load_options();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("POI-Map"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        let result = eframe::run_native(
            "POI-Map",
            options,
            Box::new(|_cc| Ok(Box::new(MapApp::new(map_options)))),
        );

        // Ohne Zeichenfläche gibt es nichts zu tun: Fehler melden und beenden.
        if let Err(e) = &result {
            log::error!("Zeichenfläche konnte nicht erstellt werden: {}", e);
        }
        result
    }

    /// Optionen aus TOML laden (oder Standardwerte), dann Env-Overrides.
    fn load_options() -> MapOptions {
        let config_path = MapOptions::config_path();
        let mut options = MapOptions::load_from_file(&config_path);

        if !config_path.exists() {
            if let Err(e) = options.save_to_file(&config_path) {
                log::warn!("Standard-Optionen konnten nicht gespeichert werden: {:#}", e);
            }
        }

        options.apply_env_overrides();
        if options.api_key.is_empty() {
            log::warn!("Kein API-Key gesetzt ({})", poi_map::shared::options::ENV_API_KEY);
        } else {
            log::info!("API-Key gesetzt ({} Zeichen)", options.api_key.len());
        }
        options
    }
}

/// Haupt-Anwendungsstruktur
struct MapApp {
    state: AppState,
    controller: AppController,
    map_view: ui::MapView,
}

impl MapApp {
    fn new(options: MapOptions) -> Self {
        let map_view = ui::MapView::new(HostId(1), &options);
        Self {
            state: AppState::new(options, PoiStore::sydney_demo()),
            controller: AppController::new(),
            map_view,
        }
    }
}

impl eframe::App for MapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        let delivered = self
            .controller
            .dispatch_host_requests(&mut self.state, &mut self.map_view);

        if has_events || delivered > 0 || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl MapApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let scene = self.controller.build_render_scene(&self.state);
        let mut events = ui::render_status_bar(ctx, &self.state, &scene, &mut self.map_view);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(self.map_view.show(ui, &self.state.pois, &scene));
            });

        if let Some(popup) = scene.popup.as_ref() {
            let anchor = self.map_view.screen_pos(popup.anchor);
            events.extend(ui::show_info_popup(ctx, popup, anchor));
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        if let Err(e) = self.controller.handle_intents(&mut self.state, events) {
            log::error!("Event handling failed: {:#}", e);
        }
    }
}
