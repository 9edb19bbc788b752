use crate::{
    client::Session,
    config::{api::BASE_URL, storage::OUTPUT_FOLDER},
    downloader::{Downloader, Event, Summary},
    error::Result,
    storage::Storage,
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub output: PathBuf,
}
impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: BASE_URL.to_owned(),
            output: PathBuf::from(OUTPUT_FOLDER),
        }
    }
}

/// Archives every accepted solution of `handle`.
///
/// Errors preparing the output root or fetching either list end the run.
/// Per-submission failures are reported through `call` and counted in the
/// returned summary.
pub async fn run<T>(config: &Config, handle: &str, mut call: T) -> Result<Summary>
where
    T: FnMut(Event<'_>),
{
    let storage = Storage::new(config.output.clone());
    storage.prepare()?;
    let session = Session::new(config.base_url.as_str())?;

    let (catalog, total) = session.contest_list().await?;
    call(Event::Catalog {
        total,
        finished: catalog.len(),
    });
    let queue = session.user_status(handle).await?;
    call(Event::Submissions(queue.len()));

    Ok(Downloader::new(&session, &catalog, &storage)
        .download(queue, call)
        .await)
}
