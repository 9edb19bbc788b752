pub mod archive;
pub mod client;
pub(crate) mod config;
pub mod downloader;
pub mod error;
pub mod language;
pub mod storage;

pub use archive::{run, Config};
pub use error::{Error, Result};
