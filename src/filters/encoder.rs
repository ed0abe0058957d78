// src/filters/encoder.rs
use crate::filters::{FilterError, FormValues};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single value inside a filter condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
}

/// Operator object for one field: `{$eq}`, `{$gte}` or `{$gte, $lt}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    #[serde(rename = "$eq", skip_serializing_if = "Option::is_none")]
    pub eq: Option<FilterValue>,
    #[serde(rename = "$gte", skip_serializing_if = "Option::is_none")]
    pub gte: Option<FilterValue>,
    #[serde(rename = "$lt", skip_serializing_if = "Option::is_none")]
    pub lt: Option<FilterValue>,
}

impl Condition {
    pub fn eq(value: FilterValue) -> Self {
        Self {
            eq: Some(value),
            gte: None,
            lt: None,
        }
    }

    pub fn gte(value: FilterValue) -> Self {
        Self {
            eq: None,
            gte: Some(value),
            lt: None,
        }
    }

    /// Half-open range `[start, end)`.
    pub fn range(start: FilterValue, end: FilterValue) -> Self {
        Self {
            eq: None,
            gte: Some(start),
            lt: Some(end),
        }
    }
}

/// Query filter keyed by canonical field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EncodedFilter {
    conditions: BTreeMap<String, Condition>,
}

impl EncodedFilter {
    pub fn insert(&mut self, field: &str, condition: Condition) {
        self.conditions.insert(field.to_string(), condition);
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&Condition> {
        self.conditions.get(field)
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.conditions.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Encode the spatial analysis form. Blank fields contribute no key.
pub fn encode_spatial(values: &FormValues) -> Result<EncodedFilter, FilterError> {
    let mut filter = EncodedFilter::default();

    if let Some(raw) = values.get("createdAt") {
        let (start, end) = day_bounds("createdAt", raw)?;
        filter.insert(
            "created_at",
            Condition::range(FilterValue::Date(start), FilterValue::Date(end)),
        );
    }

    if let Some(status) = values.get("status") {
        filter.insert("status", Condition::eq(FilterValue::Text(status.to_string())));
    }

    if let Some(raw) = values.get("distanciaMotorista") {
        let n = parse_number("distanciaMotorista", raw)?;
        filter.insert("driver_distance", Condition::gte(FilterValue::Number(n)));
    }

    if let Some(raw) = values.get("distanciaRota") {
        let n = parse_number("distanciaRota", raw)?;
        filter.insert("route_distance", Condition::gte(FilterValue::Number(n)));
    }

    if let Some(suburb) = values.get("bairroCliente") {
        filter.insert(
            "suburb_client",
            Condition::eq(FilterValue::Text(suburb.to_string())),
        );
    }

    Ok(filter)
}

/// UTC start of `raw` and start of the following day.
fn day_bounds(
    field: &'static str,
    raw: &str,
) -> Result<(DateTime<Utc>, DateTime<Utc>), FilterError> {
    let invalid = || FilterError::InvalidDate {
        field,
        value: raw.to_string(),
    };

    let day = parse_date(field, raw)?;
    let next = day.succ_opt().ok_or_else(invalid)?;

    let start = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
    let end = Utc.from_utc_datetime(&next.and_time(NaiveTime::MIN));
    Ok((start, end))
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FilterError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}

fn parse_time(field: &'static str, raw: &str) -> Result<NaiveTime, FilterError> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(|_| FilterError::InvalidTime {
        field,
        value: raw.to_string(),
    })
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, FilterError> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(FilterError::InvalidNumber {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Parameters of the events-near-cancellations geo query.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationQuery {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: Option<String>,
    pub radius_km: Option<f64>,
}

impl CorrelationQuery {
    pub fn from_form(values: &FormValues) -> Result<Self, FilterError> {
        let date = values
            .get("date")
            .ok_or(FilterError::Missing("date"))
            .and_then(|raw| parse_date("date", raw))?;

        let start_time = values
            .get("start_time")
            .map(|raw| parse_time("start_time", raw))
            .transpose()?;
        let end_time = values
            .get("end_time")
            .map(|raw| parse_time("end_time", raw))
            .transpose()?;

        let radius_km = match values.get("radius") {
            Some(raw) => match parse_number("radius", raw)? {
                r if r < 0.0 => {
                    return Err(FilterError::InvalidNumber {
                        field: "radius",
                        value: raw.to_string(),
                    })
                }
                r => Some(r),
            },
            None => None,
        };

        Ok(Self {
            date,
            start_time,
            end_time,
            status: values.get("status").map(str::to_string),
            radius_km,
        })
    }

    /// Query-string pairs, populated parameters only.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("date", self.date.format("%Y-%m-%d").to_string())];

        if let Some(t) = self.start_time {
            pairs.push(("start_time", t.format("%H:%M").to_string()));
        }
        if let Some(t) = self.end_time {
            pairs.push(("end_time", t.format("%H:%M").to_string()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(radius) = self.radius_km {
            pairs.push(("radius", radius.to_string()));
        }

        pairs
    }
}
