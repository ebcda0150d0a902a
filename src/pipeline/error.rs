use thiserror::Error;

use crate::emotes::{
    document::DocumentError, extractor::ExtractorError, queue::QueueError,
};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to set up the http client: {0}")]
    ClientBuild(reqwest::Error),

    #[error(transparent)]
    Extractor(#[from] ExtractorError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Queue(#[from] QueueError),
}
