mod api_token;
mod blog;
mod certificate;
mod course;
mod faculty;
mod gallery;
mod testimonial;
mod workshop;

pub use api_token::*;
pub use blog::*;
pub use certificate::*;
pub use course::*;
pub use faculty::*;
pub use gallery::*;
pub use testimonial::*;
pub use workshop::*;
