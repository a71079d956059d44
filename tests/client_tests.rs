mod common;
use common::MockApi;

use rtimetable::api::client::{ApiClient, FetchOutcome};
use rtimetable::config::Config;
use rtimetable::errors::AppError;

fn cfg_for(url: &str, timeout_secs: u64) -> Config {
    Config {
        api_url: url.to_string(),
        timeout_secs,
        ..Default::default()
    }
}

#[test]
fn fetch_returns_rows_in_server_order() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    let outcome = client.fetch_timetable("F7").expect("fetch");
    let FetchOutcome::Rows(rows) = outcome else {
        panic!("expected rows, got {:?}", outcome);
    };

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].day, "MON");
    assert_eq!(rows[0].start, "09:00");
    assert_eq!(rows[1].start, "10:00");
    assert_eq!(rows[2].day, "TUES");
    assert_eq!(rows[2].faculty, "Dr. Sen");
}

#[test]
fn batch_matching_is_case_insensitive_server_side() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    let outcome = client.fetch_timetable("f7").expect("fetch");
    assert!(matches!(outcome, FetchOutcome::Rows(rows) if rows.len() == 3));
}

#[test]
fn empty_array_is_a_success_with_zero_rows() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    let outcome = client.fetch_timetable("EMPTY").expect("fetch");
    assert_eq!(outcome, FetchOutcome::Rows(Vec::new()));
}

#[test]
fn unknown_batch_maps_to_not_found() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    let outcome = client.fetch_timetable("ZZ9").expect("fetch");
    assert_eq!(outcome, FetchOutcome::NotFound);
}

#[test]
fn non_404_failure_status_maps_to_server_error() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    let outcome = client.fetch_timetable("BOOM").expect("fetch");
    assert_eq!(outcome, FetchOutcome::ServerError(500));
}

#[test]
fn connection_refused_is_a_transport_error() {
    // Port 1 is essentially never listening.
    let client = ApiClient::new(&cfg_for("http://127.0.0.1:1", 5)).expect("client");

    let err = client.fetch_timetable("F7").expect_err("should fail");
    assert!(matches!(err, AppError::Http(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn slow_response_hits_the_deadline() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 1)).expect("client");

    let err = client.fetch_timetable("SLOW").expect_err("should time out");
    assert!(matches!(err, AppError::Timeout(1)));
    assert_eq!(err.to_string(), "Request timed out after 1s");
}

#[test]
fn non_json_body_is_a_decode_error() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    let err = client.fetch_timetable("GARBLED").expect_err("should fail");
    assert!(matches!(err, AppError::Decode(_)));
}

#[test]
fn health_route_reports_ok() {
    let server = MockApi::start();
    let client = ApiClient::new(&cfg_for(&server.url(), 5)).expect("client");

    assert!(client.health().expect("health"));
}

#[test]
fn non_http_base_url_is_rejected() {
    let err = ApiClient::new(&cfg_for("ftp://example.com", 5)).expect_err("should fail");
    assert!(matches!(err, AppError::InvalidApiUrl(_)));
}

#[test]
fn trailing_slash_in_base_url_is_normalized() {
    let server = MockApi::start();
    let url = format!("{}/", server.url());
    let client = ApiClient::new(&cfg_for(&url, 5)).expect("client");

    assert_eq!(client.base_url(), server.url());
    let outcome = client.fetch_timetable("F7").expect("fetch");
    assert!(matches!(outcome, FetchOutcome::Rows(_)));
}
