use crate::backend::BackendError;
use crate::render::ViewStatus;
use crate::router::handle;
use crate::templates::pages::OCCURRENCES_PATH;
use crate::tests::utils::{body_string, fallback_two_events, get, matches, post_form, test_state};

const FORM: &str = "date=2024-03-01&start_time=18%3A00&end_time=23%3A00&radius=2";

#[test]
fn page_starts_with_empty_map_and_hidden_table() {
    let (state, fake) = test_state();

    let body = body_string(handle(get(OCCURRENCES_PATH), &state).unwrap());
    assert!(body.contains(r#"id="map""#));
    assert!(body.contains(r#"class="hidden""#));
    assert!(!body.contains("data-row"));
    assert_eq!(fake.geo_calls(), 0);
}

#[test]
fn matches_render_rows_markers_and_circles() {
    let (state, fake) = test_state();
    fake.push_geo(Ok(matches(3)));

    let body = body_string(handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap());
    assert_eq!(body.matches(r#"class="data-row""#).count(), 3);
    assert!(body.contains("3 correlações encontradas."));

    let view = state.occurrences().unwrap();
    let surface = view.renderer.target();
    assert_eq!(surface.map.marker_count(), 3);
    assert_eq!(surface.map.circle_count(), 3);
}

#[test]
fn query_parameters_are_forwarded() {
    let (state, fake) = test_state();
    fake.push_geo(Ok(matches(1)));

    handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap();

    let queries = fake.geo_queries.lock().unwrap();
    let pairs = queries[0].query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("date", "2024-03-01".to_string()),
            ("start_time", "18:00".to_string()),
            ("end_time", "23:00".to_string()),
            ("radius", "2".to_string()),
        ]
    );
}

#[test]
fn submitting_twice_does_not_duplicate() {
    let (state, fake) = test_state();
    fake.push_geo(Ok(matches(2)));
    fake.push_geo(Ok(matches(2)));

    handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap();
    let body = body_string(handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap());

    assert_eq!(body.matches(r#"class="data-row""#).count(), 2);
    let view = state.occurrences().unwrap();
    assert_eq!(view.renderer.target().map.layer_count(), 5);
}

#[test]
fn fallback_shows_message_and_recent_events() {
    let (state, fake) = test_state();
    fake.push_geo(Ok(matches(2)));
    fake.push_geo(Ok(fallback_two_events()));

    handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap();
    let body = body_string(handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap());

    assert!(body.contains("none nearby"));
    assert!(body.contains("2 eventos recentes destacados no mapa."));
    assert!(!body.contains(r#"class="data-row""#));

    let view = state.occurrences().unwrap();
    let surface = view.renderer.target();
    assert_eq!(surface.map.marker_count(), 0);
    assert_eq!(surface.map.circle_count(), 2);
}

#[test]
fn backend_failure_keeps_previous_result() {
    let (state, fake) = test_state();
    fake.push_geo(Ok(matches(2)));
    fake.push_geo(Err(BackendError::Network("connection refused".into())));

    handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap();
    let before = state.occurrences().unwrap().renderer.target().clone();

    let body = body_string(handle(post_form(OCCURRENCES_PATH, FORM), &state).unwrap());
    assert!(body.contains("status-error"));
    assert!(body.contains("Erro ao buscar dados. Verifique os filtros e tente novamente."));
    assert_eq!(body.matches(r#"class="data-row""#).count(), 2);

    let view = state.occurrences().unwrap();
    assert_eq!(view.renderer.target(), &before);
    assert!(matches!(view.renderer.status(), ViewStatus::Error { .. }));
}

#[test]
fn missing_date_is_a_form_error_without_backend_call() {
    let (state, fake) = test_state();

    let body = body_string(
        handle(post_form(OCCURRENCES_PATH, "start_time=18%3A00"), &state).unwrap(),
    );
    assert!(body.contains("campo obrigatório ausente: date"));
    assert_eq!(fake.geo_calls(), 0);
}

#[test]
fn malformed_time_is_a_form_error() {
    let (state, fake) = test_state();

    let body = body_string(
        handle(post_form(OCCURRENCES_PATH, "date=2024-03-01&start_time=6pm"), &state).unwrap(),
    );
    assert!(body.contains("horário inválido em start_time"));
    assert_eq!(fake.geo_calls(), 0);
}

#[test]
fn hide_table_toggle_keeps_map_and_drops_table() {
    let (state, fake) = test_state();
    fake.push_geo(Ok(matches(2)));

    let form = format!("{FORM}&hide_table=on");
    let body = body_string(handle(post_form(OCCURRENCES_PATH, &form), &state).unwrap());

    assert!(body.contains(r#"type="checkbox""#));
    assert!(body.contains("checked"));
    assert!(!body.contains(r#"id="data-table""#));
    assert!(body.contains(r#"id="map""#));
    assert_eq!(state.occurrences().unwrap().renderer.target().map.marker_count(), 2);
}

#[test]
fn toggle_renders_unchecked_by_default() {
    let (state, _) = test_state();

    let body = body_string(handle(get(OCCURRENCES_PATH), &state).unwrap());
    assert!(body.contains(r#"name="hide_table""#));
    assert!(!body.contains("checked"));
    assert!(body.contains(r#"id="data-table""#));
}

#[test]
fn reload_after_form_error_drops_the_error() {
    let (state, _) = test_state();

    handle(post_form(OCCURRENCES_PATH, "radius=5"), &state).unwrap();
    let body = body_string(handle(get(OCCURRENCES_PATH), &state).unwrap());
    assert!(!body.contains("campo obrigatório ausente"));
}
