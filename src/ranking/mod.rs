pub mod pipeline;

pub use pipeline::{HashtagPipeline, Selection, SelectionLimits, ABOVE_TITLE, HARD_CAP};
