// src/render/target.rs
use crate::backend::GeoPoint;
use serde::Serialize;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

/// Map centre used before anything is drawn (Rio de Janeiro).
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: -22.9068,
    lng: -43.1729,
};
pub const DEFAULT_ZOOM: u8 = 12;

pub const EVENT_RADIUS_M: f64 = 500.0;
pub const EVENT_COLOR: &str = "red";
pub const HINT_COLOR: &str = "orange";

/// Anything drawn on top of the base tile layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Overlay {
    Marker {
        at: GeoPoint,
        popup: Vec<String>,
    },
    Circle {
        at: GeoPoint,
        radius_m: f64,
        color: &'static str,
        popup: Vec<String>,
    },
}

/// One row of the correlation table, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cancel_id: String,
    pub cancel_address: String,
    pub cancel_neighborhood: String,
    pub event_address: String,
    pub event_neighborhood: String,
    pub event_name: String,
    pub distance_km: String,
    pub time_diff_min: String,
}

impl TableRow {
    pub const HEADERS: [&'static str; 8] = [
        "ID Cancelamento",
        "Endereço Cancelamento",
        "Bairro Cancelamento",
        "Endereço Evento",
        "Bairro Evento",
        "Nome Evento",
        "Distância (km)",
        "Diferença de Tempo (min)",
    ];

    pub fn cells(&self) -> [&str; 8] {
        [
            self.cancel_id.as_str(),
            self.cancel_address.as_str(),
            self.cancel_neighborhood.as_str(),
            self.event_address.as_str(),
            self.event_neighborhood.as_str(),
            self.event_name.as_str(),
            self.distance_km.as_str(),
            self.time_diff_min.as_str(),
        ]
    }
}

/// Where the renderer draws. The base tile layer is not an overlay and
/// is never removed.
pub trait RenderTarget {
    fn clear_overlays(&mut self);
    fn add_overlay(&mut self, overlay: Overlay);
    fn clear_rows(&mut self);
    fn append_row(&mut self, row: TableRow);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSurface {
    pub center: GeoPoint,
    pub zoom: u8,
    pub base: TileLayer,
    pub overlays: Vec<Overlay>,
}

impl Default for MapSurface {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            base: TileLayer {
                url: TILE_URL,
                attribution: TILE_ATTRIBUTION,
            },
            overlays: Vec::new(),
        }
    }
}

impl MapSurface {
    /// Base layer plus overlays.
    pub fn layer_count(&self) -> usize {
        1 + self.overlays.len()
    }

    pub fn marker_count(&self) -> usize {
        self.overlays
            .iter()
            .filter(|o| matches!(o, Overlay::Marker { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.overlays
            .iter()
            .filter(|o| matches!(o, Overlay::Circle { .. }))
            .count()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// The map and the results table of the occurrences page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSurface {
    pub map: MapSurface,
    pub rows: Vec<TableRow>,
}

impl RenderTarget for DashboardSurface {
    fn clear_overlays(&mut self) {
        self.map.overlays.clear();
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.map.overlays.push(overlay);
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }
}
