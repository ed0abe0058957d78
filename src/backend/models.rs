use serde::{Deserialize, Deserializer, Serialize};

/// Latitude/longitude pair. Arrives from the backend as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// The backend fills missing coordinates with null; such points are dropped.
fn de_location<'de, D>(deserializer: D) -> Result<Option<GeoPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<(Option<f64>, Option<f64>)> = Option::deserialize(deserializer)?;
    Ok(match raw {
        Some((Some(lat), Some(lng))) => Some(GeoPoint { lat, lng }),
        _ => None,
    })
}

fn dash() -> String {
    "-".to_string()
}

/// One cancellation matched to a nearby event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorrelationItem {
    #[serde(default = "dash")]
    pub cancel_id: String,
    #[serde(default = "dash")]
    pub cancel_address: String,
    #[serde(default = "dash")]
    pub cancel_bairro: String,
    #[serde(default = "dash")]
    pub event_address: String,
    #[serde(default = "dash")]
    pub event_neighborhood: String,
    #[serde(default = "dash")]
    pub event_name: String,
    pub distance_km: f64,
    pub time_diff_min: f64,
    #[serde(default, deserialize_with = "de_location")]
    pub cancel_location: Option<GeoPoint>,
    #[serde(default, deserialize_with = "de_location")]
    pub event_location: Option<GeoPoint>,
}

/// Event returned as a hint when nothing correlated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecentEvent {
    #[serde(default = "dash")]
    pub event_name: String,
    #[serde(default = "dash")]
    pub event_address: String,
    #[serde(default = "dash")]
    pub event_neighborhood: String,
    #[serde(default, deserialize_with = "de_location")]
    pub event_location: Option<GeoPoint>,
}

/// Successful body of the events-near-cancellations query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum QueryResult {
    Matches(Vec<CorrelationItem>),
    Fallback {
        message: String,
        #[serde(default)]
        recent_events: Vec<RecentEvent>,
    },
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadReply {
    pub success: Option<String>,
}
