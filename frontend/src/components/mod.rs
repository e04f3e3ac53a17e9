pub mod accordion;
pub mod movie_details;
