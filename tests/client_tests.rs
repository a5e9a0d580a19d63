//! Integration tests for the OnboardClient using mockito for HTTP mocking.

use chrono::NaiveDate;
use client_onboarding::domain::{BudgetInput, TermsInput};
use client_onboarding::error::SubmitError;
use client_onboarding::{
    validate_on, AsyncOnboardClient, AsyncOnboardClientImpl, DraftInput, OnboardClient,
    SubmissionController, SubmissionStatus, SubmitAttempt, ValidatedSubmission,
};
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn draft(budget: &str) -> DraftInput {
    DraftInput {
        full_name: Some("Renée Dupont".to_string()),
        email: Some("renee@example.fr".to_string()),
        company_name: Some("Atelier Dupont".to_string()),
        services: Some(vec!["Mobile App".to_string(), "UI/UX".to_string()]),
        budget_usd: Some(BudgetInput::Text(budget.to_string())),
        project_start_date: Some("2026-11-01".to_string()),
        accept_terms: Some(TermsInput::Text("true".to_string())),
    }
}

fn submission(budget: &str) -> ValidatedSubmission {
    validate_on(&draft(budget), today()).unwrap()
}

fn client() -> OnboardClient {
    OnboardClient::with_timeout(Duration::from_secs(5))
}

#[test]
fn test_post_submission_sends_json_body() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/onboard")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "fullName": "Renée Dupont",
            "email": "renee@example.fr",
            "companyName": "Atelier Dupont",
            "services": ["Mobile App", "UI/UX"],
            "budgetUsd": 2500,
            "projectStartDate": "2026-11-01",
            "acceptTerms": true
        })))
        .with_status(200)
        .with_body("{\"ok\":true}")
        .expect(1)
        .create();

    let client = client();
    let url = format!("{}/onboard", server.url());
    client.post_submission(&url, &submission("2500")).unwrap();

    mock.assert();
    assert_eq!(client.metrics().http_requests_total(), 1);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_post_submission_omits_missing_budget() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/onboard")
        .match_body(Matcher::Json(json!({
            "fullName": "Renée Dupont",
            "email": "renee@example.fr",
            "companyName": "Atelier Dupont",
            "services": ["Mobile App", "UI/UX"],
            "projectStartDate": "2026-11-01",
            "acceptTerms": true
        })))
        .with_status(201)
        .create();

    let url = format!("{}/onboard", server.url());
    client().post_submission(&url, &submission("")).unwrap();

    mock.assert();
}

#[test]
fn test_post_submission_any_2xx_is_success() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/onboard")
        .with_status(204)
        .create();

    let url = format!("{}/onboard", server.url());
    assert!(client().post_submission(&url, &submission("500")).is_ok());

    mock.assert();
}

#[test]
fn test_post_submission_server_error() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/onboard")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create();

    let client = client();
    let url = format!("{}/onboard", server.url());
    let result = client.post_submission(&url, &submission("500"));

    mock.assert();
    match result {
        Err(SubmitError::Server { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected Server error, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_post_submission_client_error_status() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/onboard")
        .with_status(422)
        .create();

    let url = format!("{}/onboard", server.url());
    let result = client().post_submission(&url, &submission("500"));

    mock.assert();
    assert!(matches!(result, Err(SubmitError::Server { status: 422, .. })));
}

#[test]
fn test_post_submission_network_error() {
    // Nothing listens on port 1
    let result = client().post_submission("http://127.0.0.1:1/onboard", &submission("500"));

    match result {
        Err(SubmitError::Network(description)) => assert!(!description.is_empty()),
        other => panic!("Expected Network error, got: {:?}", other),
    }
}

fn controller_for(url: Option<String>) -> SubmissionController {
    let client = Arc::new(AsyncOnboardClientImpl::new(client())) as Arc<dyn AsyncOnboardClient>;
    SubmissionController::new(client, url)
}

#[tokio::test]
async fn test_end_to_end_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/onboard")
        .match_header("content-type", "application/json")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let controller = controller_for(Some(format!("{}/onboard", server.url())));
    let attempt = controller.submit_on(&draft("2500"), today()).await;

    mock.assert_async().await;
    assert_eq!(
        attempt,
        SubmitAttempt::Completed(SubmissionStatus::Success(submission("2500")))
    );
}

#[tokio::test]
async fn test_end_to_end_server_error_is_not_retried() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/onboard")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let controller = controller_for(Some(format!("{}/onboard", server.url())));
    let attempt = controller.submit_on(&draft("2500"), today()).await;

    mock.assert_async().await;
    assert_eq!(
        attempt.status(),
        Some(&SubmissionStatus::ServerError { status: 500 })
    );
}

#[tokio::test]
async fn test_end_to_end_invalid_draft_makes_no_request() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let controller = controller_for(Some(format!("{}/onboard", server.url())));
    let attempt = controller.submit_on(&draft("50"), today()).await;

    mock.assert_async().await;
    assert!(matches!(
        attempt.status(),
        Some(SubmissionStatus::ValidationError(_))
    ));
}
