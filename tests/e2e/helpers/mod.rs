use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;
use tts_orchestrator::{
    controllers::{
        cache::CacheController,
        health::{CredentialStatus, HealthController},
        tts::TtsController,
    },
    domain::{
        audio::{AudioSegment, DecodeAttempt},
        cache::ResultCache,
        translation::TranslationService,
        tts::{AudioContainer, Backend, SynthesisRequest, TtsService},
    },
    infrastructure::{
        http::build_router,
        repositories::{TranslationRepository, TtsRepository},
    },
};

pub mod api_client;

use api_client::TestClient;

/// Sample rate of every tone the fake backends return
pub const TONE_RATE: u32 = 8000;
/// Duration of every tone the fake backends return
pub const TONE_MS: u64 = 500;
/// Chunks containing this word make the fake backends fail
pub const UNSAYABLE: &str = "UNSAYABLE";

/// Speech backend that answers every chunk with a short WAV tone
pub struct FakeSpeechRepository {
    backend: Backend,
    max_chars: usize,
    passthrough: Option<AudioContainer>,
    calls: Mutex<Vec<SynthesisRequest>>,
}

impl FakeSpeechRepository {
    pub fn new(backend: Backend, max_chars: usize, passthrough: Option<AudioContainer>) -> Self {
        Self {
            backend,
            max_chars,
            passthrough,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<SynthesisRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub fn tone() -> AudioSegment {
    let frames = (TONE_RATE as u64 * TONE_MS / 1000) as usize;
    AudioSegment::new(
        (0..frames).map(|i| 2000 + (i % 50) as i16).collect(),
        TONE_RATE,
        1,
    )
}

#[async_trait]
impl TtsRepository for FakeSpeechRepository {
    fn backend(&self) -> Backend {
        self.backend
    }

    fn max_chunk_chars(&self) -> usize {
        self.max_chars
    }

    async fn synthesize_chunk(&self, request: &SynthesisRequest) -> Result<Vec<u8>, String> {
        self.calls.lock().unwrap().push(request.clone());
        if request.text.contains(UNSAYABLE) {
            return Err("fake backend refused the chunk".to_string());
        }
        tone().to_wav_bytes().map_err(|e| e.to_string())
    }

    fn decode_plan(&self, _request: &SynthesisRequest) -> Vec<DecodeAttempt> {
        vec![DecodeAttempt::Wav]
    }

    fn silence_format(&self, _request: &SynthesisRequest) -> (u32, u16) {
        (TONE_RATE, 1)
    }

    fn passthrough_container(&self, _request: &SynthesisRequest) -> Option<AudioContainer> {
        self.passthrough
    }
}

/// Translator that prefixes the text with the target language
#[derive(Default)]
pub struct FakeTranslator {
    calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeTranslator {
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationRepository for FakeTranslator {
    fn name(&self) -> &'static str {
        "fake"
    }

    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String> {
        self.calls.lock().unwrap().push((
            text.to_string(),
            source_lang.to_string(),
            target_lang.to_string(),
        ));
        Ok(format!("[{}] {}", target_lang, text))
    }
}

pub struct TestContext {
    pub client: TestClient,
    pub regional: Arc<FakeSpeechRepository>,
    pub international: Arc<FakeSpeechRepository>,
    pub translator: Arc<FakeTranslator>,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let regional = Arc::new(FakeSpeechRepository::new(
                Backend::Regional,
                250,
                Some(AudioContainer::Wav),
            ));
            let international =
                Arc::new(FakeSpeechRepository::new(Backend::International, 3000, None));
            let translator = Arc::new(FakeTranslator::default());

            let translation_service = Arc::new(TranslationService::new(
                vec![translator.clone() as Arc<dyn TranslationRepository>],
                1000,
                ResultCache::new("translation", true, None),
            ));
            let tts_service = Arc::new(TtsService::new(
                translation_service.clone(),
                regional.clone(),
                international.clone(),
                ResultCache::new("audio", true, None),
            ));

            let app = build_router(
                Arc::new(TtsController::new(tts_service.clone())),
                Arc::new(HealthController::new(
                    CredentialStatus::default(),
                    tts_service.clone(),
                    translation_service.clone(),
                )),
                Arc::new(CacheController::new(tts_service, translation_service)),
            );

            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            // Wait for server to be ready
            tokio::time::sleep(Duration::from_millis(50)).await;

            Self {
                client: TestClient::new(&format!("http://{}", addr)),
                regional,
                international,
                translator,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {}
    }
}

/// A sentence of exactly 100 characters, ending with a period
pub fn sentence(label: &str) -> String {
    let prefix = format!("Sentence {} ", label);
    format!("{}{}.", prefix, "x".repeat(99 - prefix.chars().count()))
}

/// Duration of a WAV body, in milliseconds
pub fn wav_duration_ms(bytes: &[u8]) -> u64 {
    let reader = hound::WavReader::new(std::io::Cursor::new(bytes)).expect("valid WAV body");
    let spec = reader.spec();
    reader.duration() as u64 * 1000 / spec.sample_rate as u64
}
