//! Link resolution and product attribute extraction for deal messages.
//!
//! A message flows through [`discovery`] → [`resolver`] → [`affiliate`] →
//! [`fetch`] → [`extract`] → [`format`]; [`pipeline::Pipeline`] wires the
//! stages together and guarantees a reply for every message.

pub mod affiliate;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod format;
pub mod pipeline;
pub mod resolver;

pub use affiliate::strip_tracking;
pub use config::PipelineConfig;
pub use discovery::find_product_url;
pub use error::ScraperError;
pub use extract::extract;
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use format::format_reply;
pub use pipeline::{Outcome, Pipeline};
pub use resolver::ShortenerResolver;
