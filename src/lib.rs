pub mod catalog;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod query;
pub mod scraper;
pub mod url_model;
