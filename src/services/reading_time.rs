use crate::services::sanitize::strip_tags;

const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, based on the plain-text word
/// count of `content`. Never returns zero.
pub fn estimate_read_minutes(content: &str) -> u32 {
    let words = strip_tags(content).split_whitespace().count();
    ((words as f64 / WORDS_PER_MINUTE as f64).ceil() as u32).max(1)
}

/// Display label stored on blogs, e.g. "2 min read".
pub fn read_time_label(content: &str) -> String {
    format!("{} min read", estimate_read_minutes(content))
}
