pub mod due;
pub mod recommend;
pub mod schedule;

pub use due::{day_end, due_phrases};
pub use recommend::recommend_interval;
pub use schedule::next_review_date;
