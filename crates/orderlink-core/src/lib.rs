pub mod domain;
pub mod error;
pub mod layout;
pub mod link;
pub mod message;
pub mod pipeline;
pub mod summary;

pub use domain::*;
pub use error::CoreError;
pub use layout::SheetLayout;
pub use link::build_link;
pub use message::MessageTemplate;
pub use pipeline::{run_pipeline, OrderBatch, PipelineOptions, RunReport};
pub use summary::{build_summary_phrase, total_text, SummaryOptions};
