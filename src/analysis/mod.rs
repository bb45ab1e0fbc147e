pub mod clean;
pub mod extract;
pub mod sentiment;
pub mod stats;
