use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;
use tts_orchestrator::controllers::health::HealthResponse;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_healthy_without_credentials(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();
    response.assert_status(StatusCode::OK);

    let health: HealthResponse = response.json().unwrap();
    assert_eq!(health.status, "healthy");
    assert!(!health.sarvam_configured);
    assert!(!health.gemini_configured);
    assert!(!health.aws_configured);
    assert_eq!(health.cache.audio_entries, 0);
    assert_eq!(health.cache.translation_entries, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_cache_sizes(ctx: &TestContext) {
    ctx.client
        .post(
            "/tts",
            &json!({ "input_text": "Hello", "source_lang": "en-US", "target_lang": "hi-IN" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let health: HealthResponse = ctx.client.get("/health").await.unwrap().json().unwrap();
    assert_eq!(health.cache.audio_entries, 1);
    assert_eq!(health.cache.translation_entries, 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}
