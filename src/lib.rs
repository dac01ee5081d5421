mod cropgrid;
mod dataset;
mod error;
mod features;
mod grid;
mod sink;
mod types;
mod upstream;

pub use cropgrid::*;
pub use error::CropGridError;

pub use features::derive::*;
pub use features::fetcher::*;

pub use grid::*;

pub use types::record::*;
pub use types::soil::*;
pub use types::weather::*;

pub use dataset::{relocate_files, DatasetError};
pub use sink::{records_to_frame, write_csv, SinkError};
pub use upstream::client::{UpstreamClient, DEFAULT_TIMEOUT};
pub use upstream::error::UpstreamError;
