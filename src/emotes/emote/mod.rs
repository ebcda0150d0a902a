//! A single emote and the routine that saves its image.
use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use futures::StreamExt;
use log::debug;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};

use crate::progress_bars::ProgressCounter;

use super::FALLBACK_FILE_NAME;

pub use self::error::EmoteError;

mod error;

/// Everything after the last `/` of `url`, or [`FALLBACK_FILE_NAME`] when there is none.
///
/// ```rust
/// use bili_emote_downloader::emotes::emote::file_name_from_url;
///
/// assert_eq!(file_name_from_url("https://x.example/foo/bar.webp"), "bar.webp");
/// assert_eq!(file_name_from_url("bar.webp"), "qwq.webp");
/// ```
#[inline]
pub fn file_name_from_url(url: &str) -> &str {
    url.rsplit_once('/')
        .map_or(FALLBACK_FILE_NAME, |(_, name)| name)
}

/// One entry of a package's `emote` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emote {
    /// `text` of the package this emote belongs to.
    pub package: String,
    /// `text` of the emote itself, usually something like `[doge]`.
    pub name: String,
    /// `webp_url` of the emote. Empty if the API didn't give one.
    pub url: String,
}

impl Emote {
    pub fn new(package: &str, name: &str, url: &str) -> Self {
        Self {
            package: package.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[inline]
    pub fn file_name(&self) -> &str {
        file_name_from_url(&self.url)
    }

    /// Saves the image into `output_dir` and returns the path written.
    ///
    /// The destination is opened (and truncated) before the request goes out, so a failed request
    /// can leave an empty or partial file behind. Only transport and file errors count as failures:
    /// the body is written whatever the HTTP status.
    pub async fn get(
        &self,
        client: &Client,
        output_dir: &Path,
        counters: &ProgressCounter,
    ) -> Result<PathBuf, EmoteError> {
        let output = output_dir.join(self.file_name());

        debug!("Creating {:?}", &output);
        let file = match File::create(&output).await {
            Ok(file) => file,
            Err(source) => return Err(EmoteError::FileOpenFail { path: output, source }),
        };

        self.fetch(client, file, counters).await?;

        Ok(output)
    }

    async fn fetch(
        &self,
        client: &Client,
        file: File,
        counters: &ProgressCounter,
    ) -> Result<(), EmoteError> {
        debug!("Fetching {}", &self.url);
        let res = client.get(&self.url).send().await?;

        // Error pages are saved like any other body
        debug!("Image source returned status {}", res.status());

        let size = res.content_length().unwrap_or_default();

        debug!("Remote file is {}", ByteSize::b(size).to_string_as(true));

        let pb = counters.add_download_bar(size);

        let result = Self::write_body(res, file, |len| pb.inc(len)).await;

        pb.finish_and_clear();
        result
    }

    async fn write_body(
        res: Response,
        file: File,
        on_chunk: impl Fn(u64),
    ) -> Result<(), EmoteError> {
        let mut bw = BufWriter::new(file);

        // Download the file chunk by chunk.
        debug!("Retrieving chunks...");
        let mut stream = res.bytes_stream();

        while let Some(item) = stream.next().await {
            let mut chunk = match item {
                Ok(chunk) => chunk,
                Err(e) => {
                    return Err(EmoteError::ChunkDownloadFail {
                        message: e.to_string(),
                    })
                }
            };
            on_chunk(chunk.len() as u64);

            bw.write_all_buf(&mut chunk).await?;
        }

        bw.flush().await?;
        Ok(())
    }
}
