//! Integration tests per GET /health

mod common;

#[cfg(test)]
mod health_tests {
    use super::common::*;
    use chrono::{DateTime, Utc};
    use serde_json::Value;

    #[tokio::test]
    async fn test_health_check() {
        let server = create_test_server(create_test_state());

        let response = server.get("/health").await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["message"], "API is running successfully");
        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(timestamp.parse::<DateTime<Utc>>().is_ok());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let server = create_test_server(create_test_state());

        server.get("/nope").await.assert_status_not_found();
    }
}
