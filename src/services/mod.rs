pub mod api_token;
pub mod blogs;
pub mod certificates;
pub mod courses;
pub mod dashboard;
pub mod error;
pub mod faculty;
pub mod gallery;
pub mod media;
pub mod reading_time;
pub mod sanitize;
pub mod slug;
pub mod testimonials;
pub mod validate;
pub mod workshops;
