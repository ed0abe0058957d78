// src/render/renderer.rs
use crate::backend::{BackendError, CorrelationItem, QueryResult, RecentEvent};
use crate::render::target::{Overlay, RenderTarget, TableRow, EVENT_COLOR, EVENT_RADIUS_M, HINT_COLOR};
use std::sync::atomic::{AtomicU64, Ordering};

pub const NO_DATA_MESSAGE: &str = "Nenhum dado encontrado para os filtros aplicados.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Rendered { rows: usize },
    /// Nothing correlated; `hints` recent events were drawn instead.
    Empty { message: String, hints: usize },
    /// Last request failed; the surface still shows the previous result.
    Error { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// Older than the last applied response; dropped untouched.
    Stale,
}

/// Hands out monotonically increasing request tickets.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    last: AtomicU64,
}

impl RequestSequencer {
    pub fn issue(&self) -> u64 {
        self.last.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Projects query results onto a render target.
#[derive(Debug)]
pub struct ResultRenderer<T: RenderTarget> {
    target: T,
    status: ViewStatus,
    last_started: u64,
    last_applied: u64,
}

impl<T: RenderTarget> ResultRenderer<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            status: ViewStatus::Idle,
            last_started: 0,
            last_applied: 0,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Mark a request as in flight.
    pub fn begin(&mut self, ticket: u64) {
        if ticket > self.last_started {
            self.last_started = ticket;
            self.status = ViewStatus::Loading;
        }
    }

    pub fn apply(&mut self, ticket: u64, outcome: Result<QueryResult, BackendError>) -> Applied {
        if ticket < self.last_applied {
            tracing::warn!(ticket, last_applied = self.last_applied, "discarding stale response");
            return Applied::Stale;
        }
        self.last_applied = ticket;

        self.status = match outcome {
            Ok(QueryResult::Matches(items)) if items.is_empty() => {
                self.target.clear_overlays();
                self.target.clear_rows();
                ViewStatus::Empty {
                    message: NO_DATA_MESSAGE.to_string(),
                    hints: 0,
                }
            }
            Ok(QueryResult::Matches(items)) => {
                draw_matches(&mut self.target, &items);
                ViewStatus::Rendered { rows: items.len() }
            }
            Ok(QueryResult::Fallback {
                message,
                recent_events,
            }) => {
                let hints = draw_hints(&mut self.target, &recent_events);
                ViewStatus::Empty { message, hints }
            }
            Err(err) => {
                tracing::error!(ticket, error = %err, "geo query failed");
                ViewStatus::Error {
                    message: err.user_message(),
                }
            }
        };

        Applied::Current
    }
}

/// Replace everything drawn with one marker, one circle and one row per item.
fn draw_matches<T: RenderTarget>(target: &mut T, items: &[CorrelationItem]) {
    target.clear_overlays();
    target.clear_rows();

    for item in items {
        if let Some(at) = item.cancel_location {
            target.add_overlay(Overlay::Marker {
                at,
                popup: vec![
                    format!("Cancelamento: {}", item.cancel_address),
                    format!("Bairro: {}", item.cancel_bairro),
                ],
            });
        }

        if let Some(at) = item.event_location {
            target.add_overlay(Overlay::Circle {
                at,
                radius_m: EVENT_RADIUS_M,
                color: EVENT_COLOR,
                popup: event_popup(&item.event_name, &item.event_address, &item.event_neighborhood),
            });
        }

        target.append_row(TableRow {
            cancel_id: item.cancel_id.clone(),
            cancel_address: item.cancel_address.clone(),
            cancel_neighborhood: item.cancel_bairro.clone(),
            event_address: item.event_address.clone(),
            event_neighborhood: item.event_neighborhood.clone(),
            event_name: item.event_name.clone(),
            distance_km: format!("{:.2}", item.distance_km),
            time_diff_min: format!("{:.2}", item.time_diff_min),
        });
    }
}

/// Clear the surface and draw recent events only. Returns the circles drawn.
fn draw_hints<T: RenderTarget>(target: &mut T, events: &[RecentEvent]) -> usize {
    target.clear_overlays();
    target.clear_rows();

    let mut drawn = 0;
    for event in events {
        let Some(at) = event.event_location else {
            continue;
        };
        target.add_overlay(Overlay::Circle {
            at,
            radius_m: EVENT_RADIUS_M,
            color: HINT_COLOR,
            popup: event_popup(&event.event_name, &event.event_address, &event.event_neighborhood),
        });
        drawn += 1;
    }
    drawn
}

fn event_popup(name: &str, address: &str, neighborhood: &str) -> Vec<String> {
    vec![
        format!("Evento: {name}"),
        format!("Endereço: {address}"),
        format!("Bairro: {neighborhood}"),
    ]
}
