pub mod resume;

pub use resume::{ExtractedText, ExtractionResult};
