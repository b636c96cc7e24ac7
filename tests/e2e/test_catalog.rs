use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;
use tts_orchestrator::controllers::catalog::ServiceInfo;
use tts_orchestrator::domain::tts::dto::{LanguagesResponse, SpeakersResponse};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_describe_the_service_at_root(ctx: &TestContext) {
    let response = ctx.client.get("/").await.unwrap();
    response.assert_status(StatusCode::OK);

    let info: ServiceInfo = response.json().unwrap();
    assert_eq!(info.message, "Multilingual TTS API");
    assert_eq!(info.status, "running");
    assert!(!info.version.is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_speakers_per_backend(ctx: &TestContext) {
    let response = ctx.client.get("/speakers").await.unwrap();
    response.assert_status(StatusCode::OK);

    let speakers: SpeakersResponse = response.json().unwrap();
    assert_eq!(speakers.sarvam.default, "abhilash");
    assert!(speakers.sarvam.male.contains(&"abhilash".to_string()));
    assert!(speakers.sarvam.female.contains(&"anushka".to_string()));

    let us_english = speakers
        .polly
        .iter()
        .find(|l| l.language_code == "en-US")
        .expect("en-US voices listed");
    assert_eq!(us_english.default_voice, "Joanna");
    assert_eq!(us_english.voices.first(), Some(&"Joanna".to_string()));
    assert!(speakers.polly.iter().all(|l| !l.voices.is_empty()));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_group_languages_by_backend(ctx: &TestContext) {
    let response = ctx.client.get("/languages").await.unwrap();
    response.assert_status(StatusCode::OK);

    let languages: LanguagesResponse = response.json().unwrap();
    assert_eq!(languages.regional.provider, "sarvam");
    assert_eq!(languages.international.provider, "polly");

    let regional: Vec<&str> = languages
        .regional
        .languages
        .iter()
        .map(|l| l.code.as_str())
        .collect();
    assert!(regional.contains(&"hi-IN"));
    assert!(regional.contains(&"en-IN"));
    assert!(!regional.contains(&"en-US"));

    let international: Vec<&str> = languages
        .international
        .languages
        .iter()
        .map(|l| l.code.as_str())
        .collect();
    assert!(international.contains(&"en-US"));
    assert!(international.iter().all(|code| !regional.contains(code)));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_an_incoming_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/speakers", &[("x-request-id", "trace-123")])
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("x-request-id", "trace-123");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_a_request_id_when_missing(ctx: &TestContext) {
    let first = ctx.client.get("/").await.unwrap();
    let second = ctx.client.get("/").await.unwrap();

    let first_id = first.header("x-request-id").expect("request id set");
    let second_id = second.header("x-request-id").expect("request id set");
    assert_ne!(first_id, second_id);
    assert!(uuid::Uuid::parse_str(first_id).is_ok());
}
