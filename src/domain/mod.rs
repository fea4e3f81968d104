pub mod phrase;
pub mod review;

pub use phrase::{Category, Phrase, Tag};
pub use review::{Interval, ReviewRecord};
