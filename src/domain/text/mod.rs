pub mod chunker;

pub use chunker::chunk_text;
