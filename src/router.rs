use crate::backend::{extract_frame, AnalysisView, FrameState, UploadKind};
use crate::charts::chart_urls;
use crate::errors::ServerError;
use crate::filters::{encode_spatial, CorrelationQuery, FormValues, Submission};
use crate::render::Applied;
use crate::responses::{html_response, no_content, static_asset, ResultResp};
use crate::state::AppState;
use crate::templates::components::{frame_panel, upload_result};
use crate::templates::pages::{self, OCCURRENCES_PATH, SPATIAL_FILTERS_PATH};
use astra::Request;
use std::io::Read;

/// Filter forms are small; anything bigger is not a form we rendered.
const FORM_BODY_LIMIT: usize = 16 * 1024;

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),

        ("GET", SPATIAL_FILTERS_PATH) => spatial_page(state),
        ("POST", SPATIAL_FILTERS_PATH) => submit_spatial(&mut req, state),

        ("GET", OCCURRENCES_PATH) => occurrences_page(state),
        ("POST", OCCURRENCES_PATH) => submit_occurrences(&mut req, state),

        ("GET", p) if p.starts_with("/static/") => static_asset(p),

        ("GET", p) if p.starts_with("/frames/") => {
            let view = AnalysisView::from_slug(&p["/frames/".len()..]).ok_or(ServerError::NotFound)?;
            load_frame(view, state)
        }

        ("GET", p) => {
            let view = AnalysisView::from_slug(p.trim_start_matches('/')).ok_or(ServerError::NotFound)?;
            html_response(pages::analysis_page(view))
        }

        ("POST", p) => {
            let kind = UploadKind::from_path(p).ok_or(ServerError::NotFound)?;
            upload(&mut req, kind, state)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::PayloadTooLarge(limit));
    }

    Ok(buf)
}

/// Inline text for an upload body that could not be accepted.
pub(crate) fn upload_rejection(err: &ServerError) -> &'static str {
    match err {
        ServerError::PayloadTooLarge(_) => "Arquivo excede o tamanho máximo permitido",
        _ => "Falha ao receber o arquivo. Tente novamente.",
    }
}

fn load_frame(view: AnalysisView, state: &AppState) -> ResultResp {
    let frame = match state.backend.fetch_embed(view) {
        Ok(html) => match extract_frame(&html) {
            Ok(markup) => FrameState::Ready(markup),
            Err(e) => {
                tracing::warn!(view = view.slug(), "frame extraction failed: {e}");
                FrameState::Failed(e.to_string())
            }
        },
        Err(e) => {
            tracing::error!(view = view.slug(), "embed fetch failed: {e}");
            FrameState::Failed(e.user_message())
        }
    };

    html_response(frame_panel(view, &frame))
}

/// Forward an upload to the backend. Failures are reported inline, so
/// the fragment is always a 200 that htmx will swap in.
fn upload(req: &mut Request, kind: UploadKind, state: &AppState) -> ResultResp {
    let content_type = req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let Some(content_type) = content_type.filter(|ct| ct.starts_with("multipart/form-data"))
    else {
        return html_response(upload_result(Err("Nenhum arquivo enviado")));
    };

    let body = match read_body(req, state.config.max_upload_bytes) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(endpoint = kind.endpoint(), "upload rejected: {e}");
            return html_response(upload_result(Err(upload_rejection(&e))));
        }
    };

    let size = body.len();
    match state.backend.upload(kind, &content_type, body) {
        Ok(msg) => {
            tracing::info!(endpoint = kind.endpoint(), size, "upload accepted");
            html_response(upload_result(Ok(msg.as_str())))
        }
        Err(e) => {
            tracing::warn!(endpoint = kind.endpoint(), size, "upload failed: {e}");
            let msg = e.user_message();
            html_response(upload_result(Err(msg.as_str())))
        }
    }
}

fn spatial_page(state: &AppState) -> ResultResp {
    let mut view = state.spatial()?;
    view.error = None;
    if view.chart_urls.is_empty() {
        view.chart_urls = chart_urls(&state.config, None)?;
    }
    html_response(pages::spatial_page(&view))
}

fn submit_spatial(req: &mut Request, state: &AppState) -> ResultResp {
    let body = read_body(req, FORM_BODY_LIMIT)?;
    let values = FormValues::from_urlencoded(&body);
    let encoded = encode_spatial(&values);

    let mut guard = state.spatial()?;
    let view = &mut *guard;
    view.values = values;
    let had_error = view.error.take().is_some();

    match encoded {
        Err(e) => view.error = Some(e.to_string()),
        Ok(filter) => {
            match view.session.submit(filter) {
                Submission::Changed(filter) => {
                    let json = filter.to_json();
                    view.chart_urls = chart_urls(&state.config, Some(filter))?;
                    tracing::info!(
                        generation = view.session.generation(),
                        filter = %json,
                        "spatial filter applied"
                    );
                }
                // The browser keeps the current document and its charts.
                Submission::Unchanged if !had_error => {
                    tracing::debug!("spatial filter unchanged");
                    return no_content();
                }
                Submission::Unchanged => tracing::debug!("spatial filter unchanged, clearing error"),
            }
        }
    }

    if view.chart_urls.is_empty() {
        view.chart_urls = chart_urls(&state.config, None)?;
    }
    html_response(pages::spatial_page(view))
}

fn occurrences_page(state: &AppState) -> ResultResp {
    let mut view = state.occurrences()?;
    view.form_error = None;
    html_response(pages::occurrences_page(&view))
}

fn submit_occurrences(req: &mut Request, state: &AppState) -> ResultResp {
    let body = read_body(req, FORM_BODY_LIMIT)?;
    let values = FormValues::from_urlencoded(&body);

    let query = match CorrelationQuery::from_form(&values) {
        Ok(query) => query,
        Err(e) => {
            let mut view = state.occurrences()?;
            view.values = values;
            view.form_error = Some(e.to_string());
            return html_response(pages::occurrences_page(&view));
        }
    };

    let ticket = state.sequencer.issue();
    {
        let mut view = state.occurrences()?;
        view.values = values;
        view.form_error = None;
        view.renderer.begin(ticket);
    }

    // No lock held while the backend answers.
    let outcome = state.backend.events_near_cancellations(&query);

    let mut view = state.occurrences()?;
    match view.renderer.apply(ticket, outcome) {
        Applied::Stale => tracing::info!(ticket, "newer result already shown"),
        Applied::Current => {
            let map = &view.renderer.target().map;
            tracing::info!(
                ticket,
                layers = map.layer_count(),
                markers = map.marker_count(),
                circles = map.circle_count(),
                rows = view.renderer.target().rows.len(),
                "occurrence map updated"
            );
        }
    }
    html_response(pages::occurrences_page(&view))
}
