extern crate log;

use crate::{
    client::{
        contest::{Catalog, Contest},
        submission::{Queue, Submission},
        Session,
    },
    error::{Error, Result},
    language::extension,
    storage::Storage,
};
use log::{debug, warn};
use std::path::{Path, PathBuf};

pub enum Event<'a> {
    /// Contest list fetched: listed contests and how many are finished.
    Catalog { total: usize, finished: usize },
    Submissions(usize),
    Saved {
        submission: &'a Submission,
        contest: &'a Contest,
        path: &'a Path,
    },
    UnknownContest(&'a Submission),
    NotAccepted(&'a Submission),
    Failed {
        submission: &'a Submission,
        contest: &'a Contest,
        error: &'a Error,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub saved: usize,
    pub unknown_contest: usize,
    pub not_accepted: usize,
    pub failed: usize,
}

pub struct Downloader<'a> {
    session: &'a Session,
    catalog: &'a Catalog,
    storage: &'a Storage,
}

impl<'a> Downloader<'a> {
    pub fn new(session: &'a Session, catalog: &'a Catalog, storage: &'a Storage) -> Self {
        Downloader {
            session,
            catalog,
            storage,
        }
    }

    /// Drains `queue` front to back, one source request at a time.
    pub async fn download<T>(&self, mut queue: Queue, mut call: T) -> Summary
    where
        T: FnMut(Event<'_>),
    {
        let mut summary = Summary::default();
        while let Some(submission) = queue.pop_front() {
            let contest = match submission.contest_id.and_then(|id| self.catalog.get(id)) {
                Some(c) => c,
                None => {
                    debug!(
                        "Skip submission {}: contest {:?} unknown",
                        submission.id, submission.contest_id
                    );
                    summary.unknown_contest += 1;
                    call(Event::UnknownContest(&submission));
                    continue;
                }
            };
            if !submission.is_accepted() {
                debug!("Skip submission {}: not accepted", submission.id);
                summary.not_accepted += 1;
                call(Event::NotAccepted(&submission));
                continue;
            }
            match self.save(&submission, contest).await {
                Ok(path) => {
                    debug!("Saved submission {} to {}", submission.id, path.display());
                    summary.saved += 1;
                    call(Event::Saved {
                        submission: &submission,
                        contest,
                        path: &path,
                    });
                }
                Err(error) => {
                    warn!(
                        "Error downloading problem [{}] from {}: {}",
                        submission.problem.index, contest.name, error
                    );
                    summary.failed += 1;
                    call(Event::Failed {
                        submission: &submission,
                        contest,
                        error: &error,
                    });
                }
            }
        }
        summary
    }

    async fn save(&self, submission: &Submission, contest: &Contest) -> Result<PathBuf> {
        let code = self.session.get_source(contest.id, submission.id).await?;
        self.storage.save(
            contest,
            &submission.problem.index,
            extension(&submission.programming_language),
            &code,
        )
    }
}
