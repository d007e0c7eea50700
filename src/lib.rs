pub mod amara;
pub mod config;
pub mod logging;
