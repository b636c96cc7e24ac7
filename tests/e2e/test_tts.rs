use crate::e2e::helpers;

use helpers::{sentence, tone, wav_duration_ms, TestContext, UNSAYABLE};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_synthesize_regional_text_as_wav(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": "नमस्ते दुनिया",
                "source_lang": "hi-IN",
                "target_lang": "hi-IN"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav")
        .assert_header("x-backend", "sarvam")
        .assert_header("x-chunk-count", "1")
        .assert_header("x-silenced-chunks", "0")
        .assert_header("x-cache", "miss")
        .assert_header_exists("x-request-id");

    // Single chunk is passed through untouched
    assert_eq!(response.body_bytes, tone().to_wav_bytes().unwrap());
    assert!(ctx.translator.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_request_defaults(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "input_text": "Hello there" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-backend", "sarvam");

    // Default source is auto, default target is hi-IN
    let calls = ctx.translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, "auto");
    assert_eq!(calls[0].2, "hi-IN");

    let synthesized = ctx.regional.calls();
    assert_eq!(synthesized.len(), 1);
    assert_eq!(synthesized[0].speaker, "abhilash");
    assert_eq!(synthesized[0].sample_rate, 24000);
    assert_eq!(synthesized[0].text, "[hi-IN] Hello there");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_route_international_languages_to_polly(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": "Good morning",
                "source_lang": "en-US",
                "target_lang": "fr-FR",
                "speaker": "Lea",
                "engine": "neural"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-backend", "polly")
        .assert_header("content-type", "audio/wav");

    assert_eq!(ctx.regional.call_count(), 0);
    let calls = ctx.international.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].language, "fr-FR");
    assert_eq!(calls[0].speaker, "Lea");
    assert_eq!(calls[0].text, "[fr-FR] Good morning");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_skip_translation_for_same_primary_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": "Colour and flavour",
                "source_lang": "en-GB",
                "target_lang": "en-US"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert!(ctx.translator.calls().is_empty());
    assert_eq!(ctx.international.calls()[0].text, "Colour and flavour");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_input(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "input_text": "   " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("input_text cannot be empty");
    assert_eq!(ctx.regional.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unsupported_regional_sample_rate(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": "नमस्ते दुनिया",
                "source_lang": "hi-IN",
                "target_lang": "hi-IN",
                "speech_sample_rate": u32::MAX
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("speech_sample_rate must be one of");
    assert_eq!(ctx.regional.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_request_without_input_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/tts", &json!({ "target_lang": "hi-IN" }))
        .await
        .unwrap();

    assert!(response.status.is_client_error(), "got {}", response.status);
    assert_eq!(ctx.regional.call_count(), 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_chunk_and_stitch_long_regional_text(ctx: &TestContext) {
    let text: Vec<String> = (1..=6).map(|i| sentence(&i.to_string())).collect();
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": text.join(" "),
                "source_lang": "hi-IN",
                "target_lang": "hi-IN"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/wav")
        .assert_header("x-chunk-count", "3")
        .assert_header("x-silenced-chunks", "0");

    let calls = ctx.regional.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.text.chars().count() <= 250));
    assert!(calls[0].text.starts_with("Sentence 1 "));
    assert!(calls[2].text.ends_with(&text[5]));

    // Three 500 ms tones separated by two 200 ms gaps
    assert_eq!(wav_duration_ms(&response.body_bytes), 1900);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_substitute_silence_for_a_failed_chunk(ctx: &TestContext) {
    let text = [
        sentence("1"),
        sentence("2"),
        sentence(UNSAYABLE),
        sentence("4"),
        sentence("5"),
        sentence("6"),
    ]
    .join(" ");

    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": text,
                "source_lang": "hi-IN",
                "target_lang": "hi-IN"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-chunk-count", "3")
        .assert_header("x-silenced-chunks", "1");

    // 500 + 200 + 1000 silence + 200 + 500
    assert_eq!(wav_duration_ms(&response.body_bytes), 2400);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_when_a_single_chunk_fails(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": format!("Say {} please", UNSAYABLE),
                "source_lang": "hi-IN",
                "target_lang": "hi-IN"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("External service error");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_serve_repeated_requests_from_cache(ctx: &TestContext) {
    let request = json!({
        "input_text": "Repeat after me",
        "source_lang": "en-US",
        "target_lang": "ta-IN"
    });

    let first = ctx.client.post("/tts", &request).await.unwrap();
    first
        .assert_status(StatusCode::OK)
        .assert_header("x-cache", "miss");

    let second = ctx.client.post("/tts", &request).await.unwrap();
    second
        .assert_status(StatusCode::OK)
        .assert_header("x-cache", "hit")
        .assert_header("x-backend", "sarvam");

    assert_eq!(first.body_bytes, second.body_bytes);
    assert_eq!(ctx.regional.call_count(), 1);
    assert_eq!(ctx.translator.calls().len(), 1);

    // Any field change is a different request
    let louder = ctx
        .client
        .post(
            "/tts",
            &json!({
                "input_text": "Repeat after me",
                "source_lang": "en-US",
                "target_lang": "ta-IN",
                "loudness": 1.5
            }),
        )
        .await
        .unwrap();
    louder.assert_header("x-cache", "miss");
    assert_eq!(ctx.regional.call_count(), 2);
}
