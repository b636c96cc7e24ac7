use super::error::TtsServiceError;
use super::model::{AudioContainer, SynthesisRequest, SynthesizedAudio};
use crate::domain::audio::{decode_first, stitch, AudioSegment, CHUNK_GAP, FAILED_CHUNK_SILENCE};
use crate::domain::text::chunk_text;
use crate::infrastructure::repositories::TtsRepository;
use std::time::Instant;

/// Voice `request.text` through `repo`, chunking at the provider's limit.
///
/// A single chunk is returned as the provider delivered it when the provider
/// allows it, otherwise decoded and re-exported as WAV. Multiple chunks are
/// decoded one by one; a chunk that fails is replaced by a second of silence,
/// and the pieces are joined with a short gap. Only a request where nothing
/// was voiced fails.
pub async fn synthesize_with(
    repo: &dyn TtsRepository,
    request: &SynthesisRequest,
) -> Result<SynthesizedAudio, TtsServiceError> {
    let backend = repo.backend();
    let start_time = Instant::now();

    let chunks = chunk_text(&request.text, repo.max_chunk_chars());
    tracing::info!(
        backend = %backend,
        chunk_count = chunks.len(),
        text_length = request.text.chars().count(),
        max_chunk_chars = repo.max_chunk_chars(),
        "Text split into chunks"
    );

    let audio = match chunks.as_slice() {
        [] => {
            return Err(TtsServiceError::NoUsableAudio {
                backend: backend.provider(),
                chunk_count: 0,
            })
        }
        [single] => synthesize_single(repo, &request.with_text(single)).await?,
        _ => synthesize_chunks(repo, request, &chunks).await?,
    };

    tracing::info!(
        provider = backend.provider(),
        latency_ms = start_time.elapsed().as_millis(),
        chunk_count = audio.chunk_count,
        silenced_chunks = audio.silenced_chunks,
        audio_size_bytes = audio.bytes.len(),
        "TTS synthesis completed"
    );

    Ok(audio)
}

async fn synthesize_single(
    repo: &dyn TtsRepository,
    request: &SynthesisRequest,
) -> Result<SynthesizedAudio, TtsServiceError> {
    let backend = repo.backend();
    let bytes = repo
        .synthesize_chunk(request)
        .await
        .map_err(|reason| TtsServiceError::Synthesis {
            backend: backend.provider(),
            reason,
        })?;

    if let Some(container) = repo.passthrough_container(request) {
        return Ok(SynthesizedAudio {
            bytes,
            container,
            backend,
            chunk_count: 1,
            silenced_chunks: 0,
        });
    }

    let (segment, attempt) = decode_first(&bytes, &repo.decode_plan(request))?;
    tracing::debug!(decoded_as = attempt.label(), "Single chunk decoded");

    Ok(SynthesizedAudio {
        bytes: segment.to_wav_bytes()?,
        container: AudioContainer::Wav,
        backend,
        chunk_count: 1,
        silenced_chunks: 0,
    })
}

async fn synthesize_chunks(
    repo: &dyn TtsRepository,
    request: &SynthesisRequest,
    chunks: &[String],
) -> Result<SynthesizedAudio, TtsServiceError> {
    let backend = repo.backend();
    let mut segments = Vec::with_capacity(chunks.len());
    let mut silenced_chunks = 0;

    for (index, chunk) in chunks.iter().enumerate() {
        let chunk_request = request.with_text(chunk);

        match voice_chunk(repo, &chunk_request).await {
            Ok(segment) => {
                tracing::debug!(
                    chunk_index = index,
                    duration_ms = segment.duration().as_millis(),
                    "Chunk synthesized"
                );
                segments.push(segment);
            }
            Err(reason) => {
                tracing::warn!(
                    backend = %backend,
                    chunk_index = index,
                    chunk_length = chunk.chars().count(),
                    error = %reason,
                    "Chunk synthesis failed, substituting silence"
                );
                let (sample_rate, channels) = repo.silence_format(&chunk_request);
                segments.push(AudioSegment::silent(
                    FAILED_CHUNK_SILENCE,
                    sample_rate,
                    channels,
                ));
                silenced_chunks += 1;
            }
        }
    }

    if silenced_chunks == chunks.len() {
        return Err(TtsServiceError::NoUsableAudio {
            backend: backend.provider(),
            chunk_count: chunks.len(),
        });
    }

    let stitched = stitch(&segments, CHUNK_GAP)?;
    tracing::info!(
        segment_count = segments.len(),
        duration_ms = stitched.duration().as_millis(),
        sample_rate = stitched.sample_rate(),
        "Segments stitched"
    );

    Ok(SynthesizedAudio {
        bytes: stitched.to_wav_bytes()?,
        container: AudioContainer::Wav,
        backend,
        chunk_count: chunks.len(),
        silenced_chunks,
    })
}

async fn voice_chunk(
    repo: &dyn TtsRepository,
    request: &SynthesisRequest,
) -> Result<AudioSegment, String> {
    let bytes = repo.synthesize_chunk(request).await?;
    let (segment, attempt) =
        decode_first(&bytes, &repo.decode_plan(request)).map_err(|e| e.to_string())?;
    tracing::debug!(decoded_as = attempt.label(), "Chunk decoded");
    Ok(segment)
}
