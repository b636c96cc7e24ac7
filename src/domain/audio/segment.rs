use super::error::AudioError;
use std::io::Cursor;
use std::time::Duration;

/// Decoded audio in a uniform representation: interleaved 16-bit signed samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    samples: Vec<i16>,
    sample_rate: u32,
    channels: u16,
}

impl AudioSegment {
    pub fn new(samples: Vec<i16>, sample_rate: u32, channels: u16) -> Self {
        let channels = channels.max(1);
        let mut samples = samples;
        // Drop a trailing partial frame
        samples.truncate(samples.len() - samples.len() % channels as usize);

        Self {
            samples,
            sample_rate: sample_rate.max(1),
            channels,
        }
    }

    pub fn silent(duration: Duration, sample_rate: u32, channels: u16) -> Self {
        let frames = frames_for(duration, sample_rate);
        Self::new(
            vec![0; frames * channels.max(1) as usize],
            sample_rate,
            channels,
        )
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn duration(&self) -> Duration {
        let nanos = self.frame_count() as u128 * 1_000_000_000 / self.sample_rate as u128;
        Duration::from_nanos(nanos as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append another segment. Formats must already match; see [`AudioSegment::converted`].
    pub(crate) fn extend_from(&mut self, other: &AudioSegment) {
        debug_assert_eq!(self.sample_rate, other.sample_rate);
        debug_assert_eq!(self.channels, other.channels);
        self.samples.extend_from_slice(&other.samples);
    }

    /// Return a copy in the given frame rate and channel layout.
    /// Rate conversion is linear interpolation; channel conversion duplicates
    /// mono into every channel and averages anything else down to mono first.
    pub fn converted(&self, sample_rate: u32, channels: u16) -> AudioSegment {
        if sample_rate == self.sample_rate && channels == self.channels {
            return self.clone();
        }

        let remixed = self.remix(channels.max(1));
        remixed.resample(sample_rate.max(1))
    }

    fn remix(&self, channels: u16) -> AudioSegment {
        if channels == self.channels {
            return self.clone();
        }

        let src = self.channels as usize;
        let mono: Vec<i16> = if src == 1 {
            self.samples.clone()
        } else {
            self.samples
                .chunks_exact(src)
                .map(|frame| {
                    let sum: i32 = frame.iter().map(|&s| s as i32).sum();
                    (sum / src as i32) as i16
                })
                .collect()
        };

        let samples = mono
            .iter()
            .flat_map(|&s| std::iter::repeat(s).take(channels as usize))
            .collect();

        AudioSegment::new(samples, self.sample_rate, channels)
    }

    fn resample(&self, sample_rate: u32) -> AudioSegment {
        if sample_rate == self.sample_rate || self.is_empty() {
            return AudioSegment::new(self.samples.clone(), sample_rate, self.channels);
        }

        let channels = self.channels as usize;
        let src_frames = self.frame_count();
        let dst_frames =
            (src_frames as u64 * sample_rate as u64 / self.sample_rate as u64) as usize;
        let step = self.sample_rate as f64 / sample_rate as f64;

        let mut samples = Vec::with_capacity(dst_frames * channels);
        for frame in 0..dst_frames {
            let position = frame as f64 * step;
            let index = (position.floor() as usize).min(src_frames - 1);
            let next = (index + 1).min(src_frames - 1);
            let fraction = position - index as f64;

            for channel in 0..channels {
                let a = self.samples[index * channels + channel] as f64;
                let b = self.samples[next * channels + channel] as f64;
                samples.push((a + (b - a) * fraction).round() as i16);
            }
        }

        AudioSegment::new(samples, sample_rate, self.channels)
    }

    /// Export as a 16-bit PCM WAV file
    pub fn to_wav_bytes(&self) -> Result<Vec<u8>, AudioError> {
        let spec = hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut cursor = Cursor::new(Vec::with_capacity(44 + self.samples.len() * 2));
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec)
                .map_err(|e| AudioError::Encode(e.to_string()))?;
            for &sample in &self.samples {
                writer
                    .write_sample(sample)
                    .map_err(|e| AudioError::Encode(e.to_string()))?;
            }
            writer
                .finalize()
                .map_err(|e| AudioError::Encode(e.to_string()))?;
        }

        Ok(cursor.into_inner())
    }
}

pub(crate) fn frames_for(duration: Duration, sample_rate: u32) -> usize {
    (duration.as_micros() * sample_rate as u128 / 1_000_000) as usize
}
