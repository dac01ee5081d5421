use crate::dataset::DatasetError;
use crate::sink::SinkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CropGridError {
    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Failed to build the HTTP client")]
    ClientBuild(#[source] reqwest::Error),
}
