//! Sequential download of every [`Emote`] found in a package document.
//!
//! Images are fetched one after the other in document order. A failed image is reported and
//! counted, the queue then moves on to the next one.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ahash::AHashSet;
use log::{debug, warn};
use reqwest::Client;
use tokio::fs::create_dir_all;

use crate::progress_bars::ProgressCounter;

use super::emote::Emote;

pub use self::error::QueueError;

mod error;

/// `<root>/<ids>`
#[inline]
pub fn output_dir(root: &Path, ids: impl AsRef<OsStr>) -> PathBuf {
    root.join(ids.as_ref())
}

/// Totals of a finished queue run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: u64,
    pub failed: u64,
}

impl DownloadSummary {
    #[inline]
    pub fn attempted(&self) -> u64 {
        self.downloaded + self.failed
    }
}

pub struct DownloadQueue {
    list: Vec<Emote>,
    client: Client,
    label: String,
}

impl DownloadQueue {
    /// `label` is shown next to the main progress bar.
    pub fn new(list: Vec<Emote>, client: Client, label: &str) -> Self {
        Self {
            list,
            client,
            label: label.to_string(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Downloads everything into `output_dir`.
    ///
    /// The directory (and its parents) is only created when there is at least one emote to save.
    pub async fn download(&self, output_dir: &Path) -> Result<DownloadSummary, QueueError> {
        let mut summary = DownloadSummary::default();

        if self.list.is_empty() {
            debug!("No emotes in queue, skipping {}", output_dir.display());
            return Ok(summary);
        }

        debug!("Target dir: {}", output_dir.display());
        if let Err(source) = create_dir_all(output_dir).await {
            return Err(QueueError::DirCreationError {
                path: output_dir.to_path_buf(),
                source,
            });
        }

        let counters = ProgressCounter::initialize(self.list.len() as u64, &self.label);

        let mut names: AHashSet<&str> = AHashSet::with_capacity(self.list.len());

        debug!("Fetching {} emotes", self.list.len());

        for emote in &self.list {
            if !names.insert(emote.file_name()) {
                warn!(
                    "{} ({}) has the same file name as an earlier emote and will replace it",
                    emote.file_name(),
                    emote.name
                );
            }

            match emote.get(&self.client, output_dir, &counters).await {
                Ok(path) => {
                    counters.println(format!("Image downloaded successfully: {}", path.display()));
                    summary.downloaded += 1;
                }
                Err(error) => {
                    counters.eprintln(error.to_string());
                    summary.failed += 1;
                }
            }

            counters.main.inc(1);
        }

        counters.main.finish_and_clear();

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_is_named_after_ids() {
        assert_eq!(
            output_dir(Path::new("out"), "7067"),
            PathBuf::from("out/7067")
        );
    }

    #[tokio::test]
    async fn empty_queue_creates_nothing() {
        let root = tempdir::TempDir::new("emote_queue").unwrap();
        let dir = output_dir(root.path(), "1");

        let queue = DownloadQueue::new(Vec::new(), Client::new(), "1");
        let summary = queue.download(&dir).await.unwrap();

        assert_eq!(summary, DownloadSummary::default());
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn unreachable_images_are_counted_not_fatal() {
        let root = tempdir::TempDir::new("emote_queue").unwrap();
        let dir = output_dir(root.path(), "2");

        let list = vec![
            Emote::new("p", "[empty]", ""),
            Emote::new("p", "[dir]", "http://127.0.0.1:9/"),
            Emote::new("p", "[closed]", "http://127.0.0.1:9/x.webp"),
        ];

        let queue = DownloadQueue::new(list, Client::new(), "2");
        let summary = queue.download(&dir).await.unwrap();

        assert_eq!(summary.failed, 3);
        assert_eq!(summary.attempted(), 3);
        assert!(dir.is_dir());
        // The destination is opened before the request goes out
        assert!(dir.join("qwq.webp").exists());
    }
}
