use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportWorkflow;

/// Create routes for the reports feature
pub fn routes(workflow: Arc<ReportWorkflow>) -> Router {
    Router::new()
        .route(
            "/reports",
            post(handlers::submit_report)
                .put(handlers::update_report)
                .get(handlers::list_reports),
        )
        .route(
            "/reports/{id}",
            get(handlers::get_report).delete(handlers::delete_report),
        )
        .with_state(workflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::lookup::clients::{EmailVerifier, PostalCodeLookup};
    use crate::features::reporters::stores::ReporterStore;
    use crate::features::reports::stores::ReportStore;
    use crate::shared::test_helpers::{
        InMemoryReportStore, InMemoryReporterStore, StubEmailVerifier, StubPostalLookup,
    };
    use axum_test::TestServer;
    use serde_json::json;

    fn test_server(verifier: StubEmailVerifier, lookup: StubPostalLookup) -> TestServer {
        let reporters = Arc::new(InMemoryReporterStore::new());
        let reports = Arc::new(InMemoryReportStore::new(Arc::clone(&reporters)));
        let workflow = Arc::new(ReportWorkflow::new(
            reports as Arc<dyn ReportStore>,
            reporters as Arc<dyn ReporterStore>,
            Arc::new(verifier) as Arc<dyn EmailVerifier>,
            Arc::new(lookup) as Arc<dyn PostalCodeLookup>,
        ));
        TestServer::new(routes(workflow)).unwrap()
    }

    fn submission_body(category: &str) -> serde_json::Value {
        json!({
            "fullName": "Ana Souza",
            "email": "a@b.com",
            "nationalId": "12345678900",
            "postalCode": "01001000",
            "category": category,
            "description": "Mancha de óleo na praia",
            "latitude": -23.96,
            "longitude": -46.33,
            "occurredAt": "2026-08-20T14:30:00Z"
        })
    }

    #[tokio::test]
    async fn post_valid_submission_returns_created() {
        let server = test_server(StubEmailVerifier::valid(), StubPostalLookup::found());

        let response = server
            .post("/reports")
            .json(&submission_body("Incidente"))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"]["id"].as_i64().unwrap() > 0);
        assert!(body["data"]["reporterId"].as_i64().unwrap() > 0);
        assert_eq!(body["data"]["category"], "incidente");
    }

    #[tokio::test]
    async fn post_invalid_category_returns_server_error_with_message() {
        let server = test_server(StubEmailVerifier::valid(), StubPostalLookup::found());

        let response = server
            .post("/reports")
            .json(&submission_body("invalid-type"))
            .await;

        response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("invalid-type"));
    }

    #[tokio::test]
    async fn get_missing_report_returns_not_found() {
        let server = test_server(StubEmailVerifier::valid(), StubPostalLookup::found());

        let response = server.get("/reports/42").await;

        response.assert_status(axum::http::StatusCode::NOT_FOUND);
    }
}
