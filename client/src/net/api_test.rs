use super::*;

#[test]
fn healthcheck_path_targets_gateway_prefix() {
    assert_eq!(HEALTHCHECK_PATH, "/api/v1/healthcheck");
}

#[test]
fn healthcheck_failed_message_formats_status() {
    assert_eq!(healthcheck_failed_message(503), "healthcheck failed: 503");
}

#[test]
fn summarize_health_body_reads_status_field() {
    assert_eq!(summarize_health_body(r#"{"status":"ok"}"#), "status=ok");
    assert_eq!(summarize_health_body(r#"{"status":"degraded","extra":1}"#), "status=degraded");
}

#[test]
fn summarize_health_body_falls_back_to_raw_text() {
    assert_eq!(summarize_health_body("  pong\n"), "pong");
    assert_eq!(summarize_health_body(r#"{"healthy":true}"#), r#"{"healthy":true}"#);
}
