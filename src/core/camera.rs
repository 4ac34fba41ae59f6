//! Karten-Kamera (Mitte + Zoom) für Pan und Zoom im Map Host.

use glam::DVec2;

use super::geo::{project, unproject, Coordinate, GeoBounds, Viewport};

/// Kamera über einer Web-Mercator-Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenmitte
    pub center: Coordinate,
    /// Zoom-Level (gebrochen erlaubt)
    pub zoom: f64,
}

impl MapCamera {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.0;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 22.0;

    /// Erstellt eine Kamera.
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    /// Zentriert die Kamera auf einen Punkt
    pub fn look_at(&mut self, target: Coordinate) {
        self.center = target;
    }

    /// Verschiebt die Kamera um ein Screen-Pixel-Delta (Drag-Richtung).
    pub fn pan_pixels(&mut self, delta: DVec2) {
        let world = project(self.center, self.zoom) - delta;
        self.center = unproject(world, self.zoom);
    }

    /// Ändert den Zoom-Level innerhalb der Grenzen.
    pub fn zoom_by_clamped(&mut self, delta_levels: f64, min: f64, max: f64) {
        self.zoom = (self.zoom + delta_levels).clamp(min, max);
    }

    /// Zoomt so, dass der Welt-Punkt unter `focus_screen` stehen bleibt.
    pub fn zoom_towards(
        &mut self,
        delta_levels: f64,
        focus_screen: DVec2,
        size_px: [f32; 2],
        min: f64,
        max: f64,
    ) {
        let before = self.viewport(size_px);
        let focus = before.from_screen(focus_screen);

        self.zoom_by_clamped(delta_levels, min, max);

        // Kamera-Mitte korrigieren, damit `focus` an gleicher Screen-Position bleibt
        let after = self.viewport(size_px);
        let drift = after.to_screen(focus) - focus_screen;
        let world = project(self.center, self.zoom) + drift;
        self.center = unproject(world, self.zoom);
    }

    /// Passt Mitte und Zoom so an, dass `bounds` sichtbar ist.
    pub fn fit_bounds(&mut self, bounds: &GeoBounds, size_px: [f32; 2], padding_px: f64, max: f64) {
        let zoom = self.viewport(size_px).zoom_to_fit(bounds, padding_px);
        self.center = bounds.center();
        self.zoom = zoom.clamp(Self::ZOOM_MIN, max);
    }

    /// Viewport für eine Zeichenfläche.
    pub fn viewport(&self, size_px: [f32; 2]) -> Viewport {
        Viewport::new(self.center, self.zoom, size_px)
    }
}
