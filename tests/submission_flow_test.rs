use anyhow::Result;
use crop_advisor::core::page::ResultsContainer;
use crop_advisor::core::{FieldIds, ResultsView, SubmitOutcome};
use crop_advisor::{FormPage, HttpRecommendationClient, SubmissionHandler};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::Arc;

const ENDPOINT: &str = "/api/recommend-crops";

fn page_bound_to(base_url: &str) -> Result<FormPage> {
    let page = FormPage::new(FieldIds::default());
    let client = HttpRecommendationClient::new(base_url, ENDPOINT)?;
    let handler = SubmissionHandler::new(client, page.results(), FieldIds::default());
    page.bind_submit(Arc::new(handler))?;
    Ok(page)
}

fn fill(page: &FormPage, values: [&str; 5]) {
    let ids = page.field_ids().clone();
    for (id, value) in ids.input_ids().iter().zip(values) {
        page.set_field(id, value);
    }
}

#[tokio::test]
async fn test_submit_renders_recommendations_in_order() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!([
                    {"crop": "Wheat", "suitability": "High"},
                    {"crop": "Rice", "suitability": "Low"}
                ]));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;
    fill(&page, ["loamy", "6.5", "22", "800", "medium"]);

    let submission = page.submit();
    assert!(!submission.reloaded);

    let outcome = submission.settle().await;
    assert!(matches!(outcome, Some(SubmitOutcome::Rendered { ref recommendations }) if recommendations.len() == 2));

    api_mock.assert_async().await;
    assert_eq!(
        page.results().content(),
        "<h3>Recommended Crops:</h3><p>Wheat: High</p><p>Rice: Low</p>"
    );
    Ok(())
}

#[tokio::test]
async fn test_request_body_mirrors_field_values() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ENDPOINT)
                .header("content-type", "application/json")
                .json_body(json!({
                    "soilType": "  Clay ",
                    "phLevel": "not-a-number",
                    "temperature": "",
                    "rainfall": "-40",
                    "waterAvailability": "9999999"
                }));
            then.status(200).json_body(json!([]));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;
    fill(&page, ["  Clay ", "not-a-number", "", "-40", "9999999"]);

    page.submit().settle().await;

    api_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_empty_array_renders_heading_only() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200).json_body(json!([]));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;
    page.results().replace_content("<p>stale</p>".to_string());

    page.submit().settle().await;

    assert_eq!(page.results().content(), "<h3>Recommended Crops:</h3>");
    Ok(())
}

#[tokio::test]
async fn test_network_failure_leaves_results_unchanged() -> Result<()> {
    // 沒有服務監聽的埠
    let page = page_bound_to("http://127.0.0.1:1")?;
    page.results().replace_content("<p>before</p>".to_string());

    let submission = page.submit();
    assert!(!submission.reloaded);

    let outcome = submission.settle().await;
    assert!(matches!(outcome, Some(SubmitOutcome::Failed { .. })));
    assert_eq!(page.results().content(), "<p>before</p>");
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_leaves_results_unchanged() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let page = page_bound_to(&server.base_url())?;
    page.results().replace_content("<p>before</p>".to_string());

    let outcome = page.submit().settle().await;

    assert!(matches!(outcome, Some(SubmitOutcome::Failed { .. })));
    assert_eq!(page.results().content(), "<p>before</p>");
    Ok(())
}

#[tokio::test]
async fn test_error_object_renders_heading_only() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200).json_body(json!({
                "error": "No suitable crops found for the given soil conditions."
            }));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;
    page.results().replace_content("<p>before</p>".to_string());

    let outcome = page.submit().settle().await;

    assert!(matches!(
        outcome,
        Some(SubmitOutcome::Interrupted { ref recommendations, .. }) if recommendations.is_empty()
    ));
    assert_eq!(page.results().content(), "<h3>Recommended Crops:</h3>");
    Ok(())
}

#[tokio::test]
async fn test_null_element_cuts_rendering_short() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200).json_body(json!([
                {"crop": "Oats", "suitability": {"score": 1}},
                null,
                {"crop": "Rye", "suitability": "High"}
            ]));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;

    let outcome = page.submit().settle().await;

    assert!(matches!(
        outcome,
        Some(SubmitOutcome::Interrupted { ref recommendations, .. }) if recommendations.len() == 1
    ));
    assert_eq!(
        page.results().content(),
        "<h3>Recommended Crops:</h3><p>Oats: [object Object]</p>"
    );
    Ok(())
}

#[tokio::test]
async fn test_resubmit_replaces_previous_results() -> Result<()> {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ENDPOINT)
                .json_body_partial(r#"{"soilType": "clay"}"#);
            then.status(200).json_body(json!([
                {"crop": "Wheat", "suitability": "High"},
                {"crop": "Rice", "suitability": "Low"}
            ]));
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ENDPOINT)
                .json_body_partial(r#"{"soilType": "sandy"}"#);
            then.status(200)
                .json_body(json!([{"crop": "Millet", "suitability": "Medium"}]));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;

    fill(&page, ["clay", "7", "20", "600", "high"]);
    page.submit().settle().await;
    fill(&page, ["sandy", "6", "30", "200", "low"]);
    page.submit().settle().await;

    first.assert_async().await;
    second.assert_async().await;
    assert_eq!(
        page.results().content(),
        "<h3>Recommended Crops:</h3><p>Millet: Medium</p>"
    );
    Ok(())
}

#[tokio::test]
async fn test_malformed_elements_render_blank_fields() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200).json_body(json!([
                {"crop": "Oats"},
                {"suitability": "High"},
                "Barley"
            ]));
        })
        .await;

    let page = page_bound_to(&server.base_url())?;
    page.submit().settle().await;

    assert_eq!(
        page.results().content(),
        "<h3>Recommended Crops:</h3><p>Oats: </p><p>: High</p><p>: </p>"
    );
    Ok(())
}

#[tokio::test]
async fn test_direct_submit_without_page_event() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ENDPOINT);
            then.status(200)
                .json_body(json!([{"crop": "Peas", "suitability": "Good"}]));
        })
        .await;

    let page = FormPage::new(FieldIds::default());
    let view = ResultsContainer::new();
    let client = HttpRecommendationClient::new(&server.base_url(), ENDPOINT)?;
    let handler = SubmissionHandler::new(client, view.clone(), FieldIds::default());

    let outcome = handler.submit(&page).await;

    assert!(outcome.is_rendered());
    assert_eq!(view.content(), "<h3>Recommended Crops:</h3><p>Peas: Good</p>");
    Ok(())
}
