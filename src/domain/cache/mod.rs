pub mod fingerprint;
pub mod result_cache;

pub use fingerprint::Fingerprint;
pub use result_cache::{CacheStats, ResultCache};
