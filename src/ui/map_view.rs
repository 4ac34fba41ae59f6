//! Karten-Zeichenfläche als Map Host: Kamera, Marker-Mounts, Input, Zeichnen.
//!
//! Die Fläche besitzt Kamera und Marker-Elemente selbst. Der Core erfährt davon
//! nur über Intents (Mount/Unmount, Viewport, Klicks) und erteilt Kamera-
//! Anfragen über [`MapHost`].

use glam::DVec2;
use indexmap::IndexMap;

use crate::app::{AppIntent, MapHost};
use crate::core::geo::meters_per_pixel;
use crate::core::{Coordinate, GeoBounds, HostId, MapCamera, MarkerHandle, PoiStore, Viewport};
use crate::shared::{HighlightCircle, MapOptions, RenderScene, SceneItem};

/// Hintergrundfarbe der (kachellosen) Karte.
const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(228, 226, 218);
/// Radius eines Pins in Pixeln.
const PIN_RADIUS_PX: f32 = 9.0;

/// Map Host auf Basis eines egui-Panels.
pub struct MapView {
    host_id: HostId,
    camera: MapCamera,
    rect: egui::Rect,
    attached: bool,
    last_reported: Option<Viewport>,
    mounted: IndexMap<String, MarkerHandle>,
    next_handle: u64,
    /// Marker gemountet halten (Status-Bar-Schalter)
    pub markers_visible: bool,
    zoom_min: f64,
    zoom_max: f64,
    scroll_zoom_step: f64,
    fit_padding_px: f64,
    pick_radius_px: f32,
}

impl MapView {
    /// Erstellt die Zeichenfläche mit Start-Kamera aus den Optionen.
    pub fn new(host_id: HostId, options: &MapOptions) -> Self {
        Self {
            host_id,
            camera: MapCamera::new(options.default_center, options.default_zoom),
            rect: egui::Rect::NOTHING,
            attached: false,
            last_reported: None,
            mounted: IndexMap::new(),
            next_handle: 1,
            markers_visible: true,
            zoom_min: options.zoom_min,
            zoom_max: options.zoom_max,
            scroll_zoom_step: options.scroll_zoom_step,
            fit_padding_px: options.cluster_fit_padding_px,
            pick_radius_px: options.marker_pick_radius_px,
        }
    }

    /// Aktueller Viewport der Zeichenfläche.
    pub fn viewport(&self) -> Viewport {
        self.camera.viewport([self.rect.width(), self.rect.height()])
    }

    /// Kamera (read-only).
    pub fn camera(&self) -> &MapCamera {
        &self.camera
    }

    /// Anzahl aktuell gemounteter Marker-Elemente.
    pub fn mounted_count(&self) -> usize {
        self.mounted.len()
    }

    /// Bildschirmposition einer Koordinate (absolut, egui-Koordinaten).
    pub fn screen_pos(&self, coord: Coordinate) -> egui::Pos2 {
        let local = self.viewport().to_screen(coord);
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    /// Zeichnet die Karte und sammelt alle Host-Events dieses Frames.
    pub fn show(&mut self, ui: &mut egui::Ui, pois: &PoiStore, scene: &RenderScene) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        self.rect = rect;
        if rect.width() < 1.0 || rect.height() < 1.0 {
            return events;
        }

        if !self.attached {
            self.attached = true;
            events.push(AppIntent::HostAttached {
                host: self.host_id,
                viewport: self.viewport(),
            });
        }

        self.sync_mounts(pois, &mut events);
        self.handle_input(ui, &response, scene, &mut events);

        let viewport = self.viewport();
        if self.last_reported != Some(viewport) {
            self.last_reported = Some(viewport);
            events.push(AppIntent::ViewportChanged { viewport });
        }

        self.paint(ui, scene);
        events
    }

    /// Mountet fehlende bzw. entfernt ausgeblendete Marker-Elemente.
    fn sync_mounts(&mut self, pois: &PoiStore, events: &mut Vec<AppIntent>) {
        if self.markers_visible {
            for poi in pois.iter() {
                if self.mounted.contains_key(&poi.id) {
                    continue;
                }
                let handle = MarkerHandle::from_raw(self.next_handle);
                self.next_handle += 1;
                self.mounted.insert(poi.id.clone(), handle);
                events.push(AppIntent::MarkerRefChanged {
                    id: poi.id.clone(),
                    handle: Some(handle),
                });
            }
        } else {
            for (id, _) in self.mounted.drain(..) {
                events.push(AppIntent::MarkerRefChanged { id, handle: None });
            }
        }
    }

    fn handle_input(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        scene: &RenderScene,
        events: &mut Vec<AppIntent>,
    ) {
        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            self.camera
                .pan_pixels(DVec2::new(delta.x as f64, delta.y as f64));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                let levels = if scroll > 0.0 {
                    self.scroll_zoom_step
                } else {
                    -self.scroll_zoom_step
                };
                let focus = response
                    .hover_pos()
                    .map(|pos| pos - self.rect.min)
                    .map(|v| DVec2::new(v.x as f64, v.y as f64))
                    .unwrap_or_else(|| {
                        DVec2::new(self.rect.width() as f64, self.rect.height() as f64) * 0.5
                    });
                self.camera.zoom_towards(
                    levels,
                    focus,
                    [self.rect.width(), self.rect.height()],
                    self.zoom_min,
                    self.zoom_max,
                );
            }
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer) = response.interact_pointer_pos() {
                if let Some(intent) = self.pick(pointer, scene) {
                    events.push(intent);
                }
            }
        }
    }

    /// Sucht das nächstgelegene Szene-Element unter dem Mauszeiger.
    fn pick(&self, pointer: egui::Pos2, scene: &RenderScene) -> Option<AppIntent> {
        scene
            .items
            .iter()
            .filter_map(|item| {
                let (position, radius) = match item {
                    SceneItem::Marker(m) => (m.position, self.pick_radius_px),
                    SceneItem::Cluster(c) => {
                        (c.position, cluster_radius(c.count).max(self.pick_radius_px))
                    }
                };
                let distance = self.screen_pos(position).distance(pointer);
                (distance <= radius).then_some((distance, item))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, item)| match item {
                SceneItem::Marker(m) => AppIntent::MarkerClicked { id: m.id.clone() },
                SceneItem::Cluster(c) => AppIntent::ClusterClicked { bounds: c.bounds },
            })
    }

    fn paint(&self, ui: &egui::Ui, scene: &RenderScene) {
        let painter = ui.painter_at(self.rect);
        painter.rect_filled(self.rect, 0.0, MAP_BACKGROUND);

        if let Some(highlight) = scene.highlight.as_ref() {
            self.paint_highlight(&painter, highlight);
        }

        let options = &scene.options;
        for item in &scene.items {
            match item {
                SceneItem::Marker(marker) => {
                    let center = self.screen_pos(marker.position);
                    let radius = if marker.selected {
                        PIN_RADIUS_PX * 1.4
                    } else {
                        PIN_RADIUS_PX
                    };
                    painter.circle(
                        center,
                        radius,
                        color(options.pin_background),
                        egui::Stroke::new(1.5, color(options.pin_border)),
                    );
                    painter.circle_filled(center, radius * 0.35, color(options.pin_glyph));
                }
                SceneItem::Cluster(cluster) => {
                    let center = self.screen_pos(cluster.position);
                    let radius = cluster_radius(cluster.count);
                    painter.circle(
                        center,
                        radius,
                        color(options.cluster_color),
                        egui::Stroke::new(2.0, egui::Color32::WHITE),
                    );
                    painter.text(
                        center,
                        egui::Align2::CENTER_CENTER,
                        cluster.count.to_string(),
                        egui::FontId::proportional(14.0),
                        egui::Color32::WHITE,
                    );
                }
            }
        }
    }

    fn paint_highlight(&self, painter: &egui::Painter, highlight: &HighlightCircle) {
        let mpp = meters_per_pixel(highlight.center.lat, self.camera.zoom);
        let radius = (highlight.radius_m / mpp) as f32;
        painter.circle(
            self.screen_pos(highlight.center),
            radius,
            color(highlight.fill_color),
            egui::Stroke::new(highlight.stroke_width, color(highlight.stroke_color)),
        );
    }
}

impl MapHost for MapView {
    fn host_id(&self) -> HostId {
        self.host_id
    }

    fn pan_to(&mut self, target: Coordinate) {
        self.camera.look_at(target);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds) {
        self.camera.fit_bounds(
            &bounds,
            [self.rect.width(), self.rect.height()],
            self.fit_padding_px,
            self.zoom_max,
        );
    }
}

/// Darstellungsradius eines Cluster-Icons.
fn cluster_radius(count: usize) -> f32 {
    12.0 + (count as f32).sqrt() * 3.0
}

/// RGBA-Array (0..1) → egui-Farbe.
fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
