extern crate regex;

use crate::{client::contest::Contest, error::Result};
use regex::Regex;
use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
};

/// Output tree: `<root>/<contest name>/<problem index><extension>`.
pub struct Storage {
    root: PathBuf,
    illegal: Regex,
}
impl Storage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Storage {
            root: root.into(),
            illegal: Regex::new("<br>|/").unwrap(),
        }
    }
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root unless it already exists. A non-directory in its place is an error.
    pub fn prepare(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        } else if !self.root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", self.root.display()),
            )
            .into());
        }
        Ok(())
    }

    pub fn sanitize<'a>(&self, contest_name: &'a str) -> Cow<'a, str> {
        self.illegal.replace_all(contest_name, "")
    }

    /// Contest directory name. Falls back to the id when nothing is left after sanitizing.
    pub fn contest_dir(&self, contest: &Contest) -> String {
        let name = self.sanitize(&contest.name);
        if name.trim().is_empty() {
            contest.id.to_string()
        } else {
            name.into_owned()
        }
    }

    pub fn solution_path(&self, contest: &Contest, index: &str, extension: &str) -> PathBuf {
        self.root
            .join(self.contest_dir(contest))
            .join(format!("{}{}", index, extension))
    }

    /// Writes one solution, replacing any previous file for the same problem.
    pub fn save(
        &self,
        contest: &Contest,
        index: &str,
        extension: &str,
        code: &str,
    ) -> Result<PathBuf> {
        let path = self.solution_path(contest, index, extension);
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir(dir)?;
            }
        }
        fs::write(&path, code)?;
        Ok(path)
    }
}
