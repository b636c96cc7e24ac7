use super::error::AudioError;
use super::segment::AudioSegment;
use std::time::Duration;

/// Silence inserted between consecutive segments to avoid audible joins
pub const CHUNK_GAP: Duration = Duration::from_millis(200);

/// Stand-in for a chunk whose synthesis failed
pub const FAILED_CHUNK_SILENCE: Duration = Duration::from_secs(1);

/// Concatenate segments in order with `gap` of silence between neighbours.
///
/// Segments are first brought to a common format: the highest frame rate and
/// channel count among them.
pub fn stitch(segments: &[AudioSegment], gap: Duration) -> Result<AudioSegment, AudioError> {
    let first = segments.first().ok_or(AudioError::NoSegments)?;

    let sample_rate = segments
        .iter()
        .map(AudioSegment::sample_rate)
        .max()
        .unwrap_or(first.sample_rate());
    let channels = segments
        .iter()
        .map(AudioSegment::channels)
        .max()
        .unwrap_or(first.channels());

    let silence = AudioSegment::silent(gap, sample_rate, channels);
    let mut track = first.converted(sample_rate, channels);

    for segment in &segments[1..] {
        track.extend_from(&silence);
        track.extend_from(&segment.converted(sample_rate, channels));
    }

    Ok(track)
}
