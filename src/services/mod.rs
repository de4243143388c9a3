pub mod providers;
pub mod recommendation;
pub mod reviews;
pub mod sentiment;
