//! Marker-Clustering über Bildschirm-Nähe (KD-Tree in Weltpixeln).
//!
//! Gruppiert wird auf der ganzzahligen Zoom-Stufe des Viewports. Reines
//! Verschieben der Karte ändert die Gruppen daher nicht, nur Zoom-Wechsel.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};

use super::geo::{project, unproject, Coordinate, GeoBounds, Viewport};
use super::marker_registry::MarkerHandle;

/// Identität einer Map-Host-Instanz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub u64);

/// Parameter der Gruppierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterOptions {
    /// Gruppierungsradius in Screen-Pixeln
    pub radius_px: f64,
    /// Mindestanzahl Marker für eine Gruppe
    pub min_points: usize,
    /// Oberhalb dieser Zoom-Stufe wird nicht mehr gruppiert
    pub max_zoom: u8,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            radius_px: 60.0,
            min_points: 2,
            max_zoom: 16,
        }
    }
}

/// Eingabe für die Gruppierung: ein gemounteter Marker mit Position.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPoint {
    /// POI-ID
    pub id: String,
    /// Host-Handle
    pub handle: MarkerHandle,
    /// Position
    pub position: Coordinate,
}

/// Ein darzustellendes Element: Einzelmarker oder Cluster-Icon.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterGroup {
    /// Mitglieder, sortiert nach POI-ID
    pub members: Vec<MarkerPoint>,
    /// Darstellungsposition (Schwerpunkt in Weltpixeln)
    pub position: Coordinate,
}

impl ClusterGroup {
    /// Gibt `true` zurück, wenn die Gruppe mehr als einen Marker enthält.
    pub fn is_cluster(&self) -> bool {
        self.members.len() > 1
    }

    /// Anzahl der Mitglieder.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Gibt `true` zurück, wenn die Gruppe leer ist.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Bounding Box aller Mitglieder.
    pub fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_coordinates(self.members.iter().map(|m| m.position))
    }
}

/// Zustandsbehafteter Aggregator, gebunden an genau eine Host-Instanz.
#[derive(Debug, Clone)]
pub struct Clusterer {
    host: HostId,
    options: ClusterOptions,
    viewport: Viewport,
    groups: Vec<ClusterGroup>,
    recompute_count: u64,
}

impl Clusterer {
    /// Erstellt einen Clusterer für `host` mit dem initialen Viewport.
    pub fn new(host: HostId, options: ClusterOptions, viewport: Viewport) -> Self {
        Self {
            host,
            options,
            viewport,
            groups: Vec::new(),
            recompute_count: 0,
        }
    }

    /// Host-Instanz, an die dieser Clusterer gebunden ist.
    pub fn host_id(&self) -> HostId {
        self.host
    }

    /// Aktueller Viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Übernimmt einen neuen Viewport.
    ///
    /// Gibt `true` zurück, wenn sich die Gruppierung dadurch ändern kann
    /// (Zoom-Stufe oder Zeichenflächengröße geändert).
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        let significant = self.is_significant(&viewport);
        self.viewport = viewport;
        significant
    }

    /// Prüft, ob `viewport` gegenüber dem aktuellen eine Neugruppierung erfordert.
    pub fn is_significant(&self, viewport: &Viewport) -> bool {
        viewport.zoom_level() != self.viewport.zoom_level()
            || viewport.size_px != self.viewport.size_px
    }

    /// Aktuelle Gruppen (Ergebnis des letzten `recompute`).
    pub fn groups(&self) -> &[ClusterGroup] {
        &self.groups
    }

    /// Anzahl bisheriger Neuberechnungen.
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    /// Verwirft die bisherige Gruppierung und leitet sie aus `markers` neu ab.
    pub fn recompute(&mut self, markers: &[MarkerPoint]) {
        self.groups.clear();
        self.recompute_count += 1;

        let mut points: Vec<&MarkerPoint> = markers.iter().collect();
        points.sort_by(|a, b| a.id.cmp(&b.id));

        let level = self.viewport.zoom_level();
        if level > self.options.max_zoom || points.len() < self.options.min_points.max(2) {
            self.groups = points.into_iter().map(singleton).collect();
            return;
        }

        let zoom = level as f64;
        let projected: Vec<[f64; 2]> = points
            .iter()
            .map(|p| project(p.position, zoom).to_array())
            .collect();
        let tree: KdTree<f64, 2> = (&projected).into();
        let radius_sq = self.options.radius_px * self.options.radius_px;

        let mut assigned = vec![false; points.len()];
        for index in 0..points.len() {
            if assigned[index] {
                continue;
            }

            let mut neighbours: Vec<usize> = tree
                .within::<SquaredEuclidean>(&projected[index], radius_sq)
                .into_iter()
                .map(|entry| entry.item as usize)
                .filter(|&i| !assigned[i])
                .collect();
            neighbours.sort_unstable();

            if neighbours.len() < self.options.min_points {
                assigned[index] = true;
                self.groups.push(singleton(points[index]));
                continue;
            }

            let mut sum = DVec2::ZERO;
            let mut members = Vec::with_capacity(neighbours.len());
            for &i in &neighbours {
                assigned[i] = true;
                sum += DVec2::from_array(projected[i]);
                members.push(points[i].clone());
            }
            let centroid = sum / neighbours.len() as f64;

            self.groups.push(ClusterGroup {
                members,
                position: unproject(centroid, zoom),
            });
        }

        log::debug!(
            "Clustering neu berechnet (Zoom {}): {} Marker → {} Gruppen",
            level,
            points.len(),
            self.groups.len()
        );
    }
}

fn singleton(point: &MarkerPoint) -> ClusterGroup {
    ClusterGroup {
        members: vec![point.clone()],
        position: point.position,
    }
}
