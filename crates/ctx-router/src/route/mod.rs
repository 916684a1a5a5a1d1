/// Route pattern module
///
/// Contains pure functional components for pattern handling:
/// - `pattern`: segment classification and validation
/// - `compose`: building full patterns from nested declarations

pub mod compose;
pub mod pattern;

// Re-export commonly used types
pub use compose::{compose, compose_step, PatternChain};
pub use pattern::{classify_segment, validate_pattern, Pattern, PatternError, Segment};
