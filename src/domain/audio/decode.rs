use super::error::AudioError;
use super::segment::AudioSegment;
use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CodecType, DecoderOptions, CODEC_TYPE_MP3, CODEC_TYPE_VORBIS};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// One way of interpreting raw backend bytes as audio.
///
/// Backends do not reliably announce their container, so adapters hand
/// [`decode_first`] an ordered plan of attempts and take the first that works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeAttempt {
    Wav,
    Mp3,
    OggVorbis,
    /// Headerless little-endian 16-bit PCM
    RawPcm { sample_rate: u32, channels: u16 },
}

impl DecodeAttempt {
    pub fn label(&self) -> &'static str {
        match self {
            DecodeAttempt::Wav => "wav",
            DecodeAttempt::Mp3 => "mp3",
            DecodeAttempt::OggVorbis => "ogg",
            DecodeAttempt::RawPcm { .. } => "raw",
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<AudioSegment, AudioError> {
        match *self {
            DecodeAttempt::Wav => decode_wav(bytes),
            DecodeAttempt::Mp3 => decode_compressed(bytes, "mp3", CODEC_TYPE_MP3),
            DecodeAttempt::OggVorbis => decode_compressed(bytes, "ogg", CODEC_TYPE_VORBIS),
            DecodeAttempt::RawPcm {
                sample_rate,
                channels,
            } => decode_raw_pcm(bytes, sample_rate, channels),
        }
    }
}

/// Try each attempt in order and stop at the first success.
/// Returns the decoded segment and the attempt that produced it.
pub fn decode_first(
    bytes: &[u8],
    attempts: &[DecodeAttempt],
) -> Result<(AudioSegment, DecodeAttempt), AudioError> {
    let mut failures = Vec::with_capacity(attempts.len());

    for attempt in attempts {
        match attempt.decode(bytes) {
            Ok(segment) => return Ok((segment, *attempt)),
            Err(e) => {
                tracing::debug!(
                    attempt = attempt.label(),
                    error = %e,
                    byte_count = bytes.len(),
                    "Decode attempt failed, trying next"
                );
                failures.push(e.to_string());
            }
        }
    }

    Err(AudioError::Undecodable(if failures.is_empty() {
        "no decode attempts configured".to_string()
    } else {
        failures.join("; ")
    }))
}

fn decode_wav(bytes: &[u8]) -> Result<AudioSegment, AudioError> {
    let mut reader =
        hound::WavReader::new(Cursor::new(bytes)).map_err(|e| AudioError::invalid("wav", e))?;
    let spec = reader.spec();

    let samples: Vec<i16> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Int, 8) => reader
            .samples::<i8>()
            .map(|s| s.map(|v| (v as i16) << 8))
            .collect::<Result<Vec<i16>, _>>(),
        (hound::SampleFormat::Int, 16) => reader.samples::<i16>().collect::<Result<Vec<i16>, _>>(),
        (hound::SampleFormat::Int, bits) if bits > 16 && bits <= 32 => reader
            .samples::<i32>()
            .map(|s| s.map(|v| (v >> (bits - 16)) as i16))
            .collect::<Result<Vec<i16>, _>>(),
        (hound::SampleFormat::Float, _) => reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * i16::MAX as f32) as i16))
            .collect::<Result<Vec<i16>, _>>(),
        (_, bits) => {
            return Err(AudioError::invalid(
                "wav",
                format!("unsupported bit depth {}", bits),
            ))
        }
    }
    .map_err(|e| AudioError::invalid("wav", e))?;

    if samples.is_empty() {
        return Err(AudioError::invalid("wav", "no samples"));
    }

    Ok(AudioSegment::new(samples, spec.sample_rate, spec.channels))
}

/// Decode a compressed container through symphonia, insisting on the expected codec
fn decode_compressed(
    bytes: &[u8],
    extension: &'static str,
    expected_codec: CodecType,
) -> Result<AudioSegment, AudioError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(extension);

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioError::invalid(extension, format!("probe failed: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| AudioError::invalid(extension, "no audio track found"))?;
    if track.codec_params.codec != expected_codec {
        return Err(AudioError::invalid(extension, "unexpected codec"));
    }
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioError::invalid(extension, format!("decoder creation failed: {}", e)))?;

    let mut samples: Vec<i16> = Vec::new();
    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut channels = track
        .codec_params
        .channels
        .map(|c| c.count() as u16)
        .unwrap_or(0);

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => {
                return Err(AudioError::invalid(
                    extension,
                    format!("packet read error: {}", e),
                ))
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(SymphoniaError::DecodeError(e)) => {
                tracing::warn!(format = extension, error = e, "Skipping undecodable packet");
                continue;
            }
            Err(e) => {
                return Err(AudioError::invalid(extension, format!("decode failed: {}", e)))
            }
        };

        let spec = *decoded.spec();
        let frames = decoded.frames();
        sample_rate = spec.rate;
        channels = spec.channels.count() as u16;

        let mut buffer = SampleBuffer::<i16>::new(frames as u64, spec);
        buffer.copy_interleaved_ref(decoded);
        let written = (frames * spec.channels.count()).min(buffer.samples().len());
        samples.extend_from_slice(&buffer.samples()[..written]);
    }

    if samples.is_empty() || sample_rate == 0 || channels == 0 {
        return Err(AudioError::invalid(extension, "no audio decoded"));
    }

    Ok(AudioSegment::new(samples, sample_rate, channels))
}

fn decode_raw_pcm(bytes: &[u8], sample_rate: u32, channels: u16) -> Result<AudioSegment, AudioError> {
    if bytes.len() < 2 {
        return Err(AudioError::invalid("raw", "no samples"));
    }

    let samples = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();

    Ok(AudioSegment::new(samples, sample_rate, channels))
}
