//! The whole fetch-and-persist run for one `ids` argument.
//!
//! 1. `GET <api prefix><ids>&&business=reply` and parse the body as JSON.
//! 2. Save the document as `<ids>.json`.
//! 3. Download every `webp_url` it lists into `<ids>/`.
//!
//! Steps 1 and 2 abort the run on failure, a failed image in step 3 doesn't.
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use anyhow::Error;
use colored::Colorize;
use log::debug;
use reqwest::Client;

use crate::cli::{parse_from, ParsedArgs};
use crate::config::Config;
use crate::emotes::{
    document::{document_path, write_document},
    extractor::PackageExtractor,
    queue::{output_dir, DownloadQueue, DownloadSummary},
};

pub use self::error::PipelineError;

mod error;

/// Exit status for a wrong argument count.
pub const USAGE_EXIT_CODE: i32 = 1;

/// What a successful run left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Path of the saved `<ids>.json`.
    pub document: PathBuf,
    /// Directory the images went to. Not created when the document listed no emotes.
    pub output_dir: PathBuf,
    pub summary: DownloadSummary,
}

pub struct Pipeline {
    config: Config,
    client: Client,
}

impl Pipeline {
    /// Sets up the single http client shared by every request of the run.
    pub fn new(config: Config) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .build()
            .map_err(PipelineError::ClientBuild)?;

        Ok(Self { config, client })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `ids` goes into the request URL as text (invalid UTF-8 replaced) and into the output paths
    /// byte for byte.
    pub async fn run(&self, ids: impl AsRef<OsStr>) -> Result<RunReport, PipelineError> {
        let ids = ids.as_ref();
        let query = ids.to_string_lossy();
        let root = &self.config.output_root;

        let extractor = PackageExtractor::new(self.client.clone(), &self.config.api_prefix, &query);
        let response = extractor.fetch().await?;

        let document = document_path(root, ids);
        write_document(response.document(), &document).await?;

        let (_, emotes) = response.into_parts();
        let output_dir = output_dir(root, ids);

        let queue = DownloadQueue::new(emotes, self.client.clone(), &query);
        let summary = queue.download(&output_dir).await?;

        debug!(
            "{} of {} images saved to {}",
            summary.downloaded,
            summary.attempted(),
            output_dir.display()
        );

        Ok(RunReport {
            document,
            output_dir,
            summary,
        })
    }
}

/// Parses `args` (program name first), runs the pipeline and returns the process exit status.
///
/// Only an argument error yields a non-zero status. Fetch, parse and write failures are printed
/// to stderr and still end with `0`.
pub async fn run_from_args<I, T>(args: I, config: Config) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match parse_from(args) {
        ParsedArgs::Run(cli) => cli,
        ParsedArgs::Usage(usage) => {
            eprint!("{}", usage);
            return USAGE_EXIT_CODE;
        }
    };

    match execute(config, &cli.ids).await {
        Ok(report) => print_results(&report.summary),
        Err(error) => eprintln!("{} {:#}", "Error:".bold().red(), error),
    }

    0
}

async fn execute(config: Config, ids: &OsStr) -> Result<RunReport, Error> {
    let pipeline = Pipeline::new(config)?;
    Ok(pipeline.run(ids).await?)
}

pub fn print_results(summary: &DownloadSummary) {
    println!(
        "{} {} {}",
        summary.downloaded.to_string().bold().blue(),
        "files".bold().blue(),
        "downloaded".bold()
    );

    if summary.failed > 0 {
        println!(
            "{} {}",
            summary.failed.to_string().bold().red(),
            "downloads failed.".bold().red()
        );
    }
}
