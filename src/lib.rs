//! # Bilibili Emote Downloader
//!
//! bili_emote_downloader is a CLI utility to save Bilibili emote packages: the package document
//! returned by the emote API and every image it references.
//!
//! Everything runs one request at a time over a single http client.
pub mod cli;
pub mod config;
pub mod emotes;
pub mod pipeline;
pub mod progress_bars;

pub use config::Config;

// Export main representative types
pub use emotes::emote::Emote;
pub use emotes::extractor::{PackageExtractor, PackageResponse};

// Export main worker queue
pub use emotes::queue::{DownloadQueue, DownloadSummary};

pub use pipeline::{run_from_args, Pipeline, PipelineError, RunReport};
