pub mod decode;
pub mod error;
pub mod segment;
pub mod stitch;

pub use decode::{decode_first, DecodeAttempt};
pub use error::AudioError;
pub use segment::AudioSegment;
pub use stitch::{stitch, CHUNK_GAP, FAILED_CHUNK_SILENCE};
