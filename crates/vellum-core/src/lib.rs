pub mod constants;
pub mod logging;
pub mod mock;
pub mod models;
pub mod wiki;
