// ABOUTME: Portfolio project pipeline for Folio
// ABOUTME: Lists marked repositories, summarizes READMEs concurrently and caches the cards

pub mod cache;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod summarizer;

pub use cache::SummaryCache;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::PortfolioPipeline;
pub use source::RepositorySource;
pub use summarizer::ReadmeSummarizer;
