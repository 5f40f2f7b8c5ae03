pub mod options;
pub mod stop_words;

pub use options::{CategoryOrder, NumericalCleanOptions, TextCleanOptions};
pub use stop_words::DEFAULT_STOP_WORDS;
