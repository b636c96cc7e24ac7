use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tts_orchestrator::controllers::{
    cache::CacheController, health::CredentialStatus, health::HealthController,
    tts::TtsController,
};
use tts_orchestrator::domain::cache::ResultCache;
use tts_orchestrator::domain::translation::TranslationService;
use tts_orchestrator::domain::tts::{validate_voice_tables, TtsService};
use tts_orchestrator::infrastructure::config::{Config, LogFormat};
use tts_orchestrator::infrastructure::http::{build_router, start_http_server};
use tts_orchestrator::infrastructure::repositories::{
    GeminiTranslationRepository, PollyTtsRepository, SarvamTranslationRepository,
    SarvamTtsRepository, TranslationRepository,
};
use tts_orchestrator::infrastructure::sarvam::SarvamClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting TTS orchestrator on {}:{}",
        config.host,
        config.port
    );

    validate_voice_tables()?;

    if !config.sarvam_configured() {
        tracing::warn!("SARVAM_API_KEY not set. Regional synthesis and primary translation will fail");
    }
    if !config.gemini_configured() {
        tracing::warn!("GEMINI_API_KEY not set. Translation has no fallback");
    }

    // Check for AWS credentials in environment (for debugging)
    let has_access_key = std::env::var("AWS_ACCESS_KEY_ID").is_ok();
    let has_secret_key = std::env::var("AWS_SECRET_ACCESS_KEY").is_ok();
    tracing::info!(
        has_access_key_id = has_access_key,
        has_secret_access_key = has_secret_key,
        "AWS credentials environment check"
    );

    if !has_access_key || !has_secret_key {
        tracing::warn!("AWS credentials not found in environment variables. Will attempt to use other credential providers (instance metadata, etc.)");
    }

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region.clone()))
        .load()
        .await;

    tracing::info!(region = ?aws_config.region(), "AWS configuration loaded");

    let polly_client = Arc::new(aws_sdk_polly::Client::new(&aws_config));
    let sarvam_client = Arc::new(SarvamClient::new(
        &config.sarvam_base_url,
        config.sarvam_api_key.clone(),
        Duration::from_secs(config.http_timeout_secs),
    )?);

    let credentials = CredentialStatus {
        sarvam: config.sarvam_configured(),
        gemini: config.gemini_configured(),
        aws: has_access_key && has_secret_key,
    };

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject vendor clients)
    tracing::info!("Instantiating repositories...");
    let mut translators: Vec<Arc<dyn TranslationRepository>> =
        vec![Arc::new(SarvamTranslationRepository::new(sarvam_client.clone()))];
    if let Some(api_key) = &config.gemini_api_key {
        let gemini_client = Arc::new(GeminiTranslationRepository::client_for(
            api_key,
            &config.gemini_base_url,
            Duration::from_secs(config.http_timeout_secs),
        )?);
        translators.push(Arc::new(GeminiTranslationRepository::new(
            gemini_client,
            config.gemini_model.clone(),
        )));
    }
    let regional_repo = Arc::new(SarvamTtsRepository::new(
        sarvam_client,
        config.regional_max_chars,
    ));
    let international_repo = Arc::new(PollyTtsRepository::new(
        polly_client,
        config.international_max_chars,
    ));

    // 2. Instantiate services (inject repositories and caches)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(
        translators,
        config.translate_max_chars,
        ResultCache::new("translation", config.cache_enabled, config.cache_max_entries),
    ));
    tracing::info!(
        translators = ?translation_service.translator_names(),
        "Translation chain ready"
    );
    let tts_service = Arc::new(TtsService::new(
        translation_service.clone(),
        regional_repo,
        international_repo,
        ResultCache::new("audio", config.cache_enabled, config.cache_max_entries),
    ));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let tts_controller = Arc::new(TtsController::new(tts_service.clone()));
    let health_controller = Arc::new(HealthController::new(
        credentials,
        tts_service.clone(),
        translation_service.clone(),
    ));
    let cache_controller = Arc::new(CacheController::new(tts_service, translation_service));

    let app = build_router(tts_controller, health_controller, cache_controller);

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_orchestrator=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "tts_orchestrator=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
