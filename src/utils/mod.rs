mod format_int;
mod parse_rle;
mod rng;

pub use format_int::with_delimiters;
pub use parse_rle::{parse_rle, MAX_PATTERN_AREA};
pub use rng::seeded_rng;
