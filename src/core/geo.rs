//! Geografische Koordinaten und Web-Mercator-Projektion.
//!
//! Alle Screen-Berechnungen laufen über Weltpixel: bei Zoom `z` ist die
//! gesamte Erde `TILE_SIZE * 2^z` Pixel breit. Gruppierung und Hit-Tests
//! arbeiten in diesem Raum.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Kantenlänge einer Web-Mercator-Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;
/// Gültiger Breitengrad-Bereich der Web-Mercator-Projektion.
pub const MAX_LAT: f64 = 85.051_128_78;
/// Erdradius (WGS84, Äquator) in Metern.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Geografische Koordinate in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Breitengrad (Nord positiv)
    pub lat: f64,
    /// Längengrad (Ost positiv)
    pub lng: f64,
}

impl Coordinate {
    /// Erstellt eine neue Koordinate.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// Achsenparalleles Koordinaten-Rechteck (Süd-West bis Nord-Ost).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    /// Süd-West-Ecke
    pub south_west: Coordinate,
    /// Nord-Ost-Ecke
    pub north_east: Coordinate,
}

impl GeoBounds {
    /// Bounding Box über alle Koordinaten. `None` bei leerer Eingabe.
    pub fn from_coordinates(coords: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for c in iter {
            bounds.south_west.lat = bounds.south_west.lat.min(c.lat);
            bounds.south_west.lng = bounds.south_west.lng.min(c.lng);
            bounds.north_east.lat = bounds.north_east.lat.max(c.lat);
            bounds.north_east.lng = bounds.north_east.lng.max(c.lng);
        }
        Some(bounds)
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Weltpixel-Breite der Erde beim gegebenen (gebrochenen) Zoom.
#[inline]
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2.0_f64.powf(zoom)
}

/// Projiziert eine Koordinate in Weltpixel (x nach Osten, y nach Süden).
///
/// Breitengrade außerhalb von ±[`MAX_LAT`] werden geklemmt.
pub fn project(coord: Coordinate, zoom: f64) -> DVec2 {
    let size = world_size(zoom);
    let lat = coord.lat.clamp(-MAX_LAT, MAX_LAT);
    let lat_rad = lat * PI / 180.0;

    let x = (coord.lng + 180.0) / 360.0 * size;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * size;
    DVec2::new(x, y)
}

/// Inverse Projektion: Weltpixel → Koordinate.
pub fn unproject(world: DVec2, zoom: f64) -> Coordinate {
    let size = world_size(zoom);
    let lng = world.x / size * 360.0 - 180.0;
    let lat_rad = (PI * (1.0 - 2.0 * world.y / size)).sinh().atan();
    Coordinate::new(lat_rad * 180.0 / PI, lng)
}

/// Bodenauflösung in Metern pro Pixel an einem Breitengrad.
pub fn meters_per_pixel(lat: f64, zoom: f64) -> f64 {
    let lat_rad = lat.clamp(-MAX_LAT, MAX_LAT) * PI / 180.0;
    lat_rad.cos() * 2.0 * PI * EARTH_RADIUS_M / world_size(zoom)
}

/// Sichtbarer Kartenausschnitt, wie ihn der Map Host meldet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Kartenmitte
    pub center: Coordinate,
    /// Zoom-Level (gebrochen erlaubt)
    pub zoom: f64,
    /// Größe der Zeichenfläche in Pixeln [Breite, Höhe]
    pub size_px: [f32; 2],
}

impl Viewport {
    /// Erstellt einen Viewport.
    pub fn new(center: Coordinate, zoom: f64, size_px: [f32; 2]) -> Self {
        Self {
            center,
            zoom,
            size_px,
        }
    }

    /// Ganzzahlige Zoom-Stufe, auf der gruppiert wird.
    pub fn zoom_level(&self) -> u8 {
        self.zoom.floor().clamp(0.0, 30.0) as u8
    }

    /// Halbe Zeichenflächengröße als Vektor.
    fn half_size(&self) -> DVec2 {
        DVec2::new(self.size_px[0] as f64, self.size_px[1] as f64) * 0.5
    }

    /// Koordinate → Bildschirmposition relativ zur linken oberen Ecke.
    pub fn to_screen(&self, coord: Coordinate) -> DVec2 {
        project(coord, self.zoom) - project(self.center, self.zoom) + self.half_size()
    }

    /// Bildschirmposition → Koordinate.
    pub fn from_screen(&self, screen: DVec2) -> Coordinate {
        let world = project(self.center, self.zoom) + screen - self.half_size();
        unproject(world, self.zoom)
    }

    /// Zoom, bei dem `bounds` (plus `padding_px` je Seite) vollständig sichtbar ist.
    pub fn zoom_to_fit(&self, bounds: &GeoBounds, padding_px: f64) -> f64 {
        let sw = project(bounds.south_west, 0.0);
        let ne = project(bounds.north_east, 0.0);
        let extent = (ne - sw).abs();
        let avail = (DVec2::new(self.size_px[0] as f64, self.size_px[1] as f64)
            - DVec2::splat(2.0 * padding_px))
        .max(DVec2::ONE);

        if extent.x <= f64::EPSILON && extent.y <= f64::EPSILON {
            return self.zoom;
        }

        let scale_x = if extent.x > f64::EPSILON {
            avail.x / extent.x
        } else {
            f64::INFINITY
        };
        let scale_y = if extent.y > f64::EPSILON {
            avail.y / extent.y
        } else {
            f64::INFINITY
        };
        scale_x.min(scale_y).log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_projects_to_world_center() {
        let p = project(Coordinate::new(0.0, 0.0), 0.0);
        assert_relative_eq!(p.x, 128.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 128.0, epsilon = 1e-9);
    }

    #[test]
    fn project_unproject_roundtrip_sydney() {
        let sydney = Coordinate::new(-33.860664, 151.208138);
        let back = unproject(project(sydney, 13.0), 13.0);
        assert_relative_eq!(back.lat, sydney.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, sydney.lng, epsilon = 1e-9);
    }

    #[test]
    fn viewport_center_maps_to_screen_middle() {
        let vp = Viewport::new(Coordinate::new(-33.86, 151.2), 13.0, [800.0, 600.0]);
        let screen = vp.to_screen(vp.center);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-6);

        let back = vp.from_screen(DVec2::new(400.0, 300.0));
        assert_relative_eq!(back.lat, -33.86, epsilon = 1e-9);
    }

    #[test]
    fn meters_per_pixel_halves_per_zoom_level() {
        let a = meters_per_pixel(0.0, 10.0);
        let b = meters_per_pixel(0.0, 11.0);
        assert_relative_eq!(b, a / 2.0, epsilon = 1e-9);
        // Zoom 0 am Äquator: ~156 km pro Pixel
        assert!((meters_per_pixel(0.0, 0.0) - 156_543.0).abs() < 1.0);
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = GeoBounds::from_coordinates([
            Coordinate::new(1.0, 5.0),
            Coordinate::new(-2.0, 3.0),
            Coordinate::new(0.5, 7.0),
        ])
        .expect("Bounds erwartet");
        assert_eq!(bounds.south_west, Coordinate::new(-2.0, 3.0));
        assert_eq!(bounds.north_east, Coordinate::new(1.0, 7.0));
        assert_eq!(bounds.center(), Coordinate::new(-0.5, 5.0));
        assert!(GeoBounds::from_coordinates([]).is_none());
    }

    #[test]
    fn zoom_to_fit_contains_bounds() {
        let vp = Viewport::new(Coordinate::new(0.0, 0.0), 2.0, [512.0, 512.0]);
        let bounds = GeoBounds {
            south_west: Coordinate::new(-10.0, -10.0),
            north_east: Coordinate::new(10.0, 10.0),
        };
        let zoom = vp.zoom_to_fit(&bounds, 0.0);
        let span = project(bounds.north_east, zoom) - project(bounds.south_west, zoom);
        assert!(span.x.abs() <= 512.0 + 1e-6);
        assert!(span.y.abs() <= 512.0 + 1e-6);
    }
}
