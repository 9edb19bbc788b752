extern crate log;
extern crate serde;

use super::Session;
use crate::{config::api::CONTEST_LIST, error::Result};
use log::info;
use serde::Deserialize;
use std::{collections::HashMap, iter::FromIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contest {
    pub id: u64,
    pub name: String,
    pub phase: Phase,
}

/// Finished contests keyed by id.
#[derive(Debug, Default)]
pub struct Catalog(HashMap<u64, Contest>);
impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns false and drops the contest unless it is finished.
    pub fn insert(&mut self, contest: Contest) -> bool {
        if contest.phase != Phase::Finished {
            return false;
        }
        self.0.insert(contest.id, contest);
        true
    }
    pub fn get(&self, id: u64) -> Option<&Contest> {
        self.0.get(&id)
    }
    pub fn contains(&self, id: u64) -> bool {
        self.0.contains_key(&id)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl FromIterator<Contest> for Catalog {
    fn from_iter<I: IntoIterator<Item = Contest>>(iter: I) -> Self {
        let mut ret = Self::new();
        iter.into_iter().for_each(|c| {
            ret.insert(c);
        });
        ret
    }
}

impl Session {
    /// Returns the finished contests along with the number of contests listed.
    pub async fn contest_list(&self) -> Result<(Catalog, usize)> {
        let list: Vec<Contest> = self.api(CONTEST_LIST, &[]).await?;
        let total = list.len();
        info!("Successfully loaded {} contests", total);
        let catalog: Catalog = list.into_iter().collect();
        info!("{} of them are finished", catalog.len());
        Ok((catalog, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(id: u64, name: &str, phase: Phase) -> Contest {
        Contest {
            id,
            name: name.to_owned(),
            phase,
        }
    }

    #[test]
    fn keeps_only_finished() {
        let catalog: Catalog = vec![
            contest(101, "Div 2 Round", Phase::Finished),
            contest(102, "Running", Phase::Coding),
            contest(103, "Upcoming", Phase::Before),
            contest(104, "Judging", Phase::SystemTest),
        ]
        .into_iter()
        .collect();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(101).unwrap().name, "Div 2 Round");
        assert!(!catalog.contains(102));
        assert!(catalog.get(999).is_none());
    }

    #[test]
    fn parse_contest_list() {
        let list: Vec<Contest> = serde_json::from_str(
            r#"[
                {"id":1,"name":"Codeforces Beta Round #1","type":"CF","phase":"FINISHED","frozen":false,"durationSeconds":7200},
                {"id":2,"name":"Later","type":"ICPC","phase":"PENDING_SYSTEM_TEST"},
                {"id":3,"name":"Odd","phase":"finished"}
            ]"#,
        )
        .unwrap();
        assert_eq!(list[0].phase, Phase::Finished);
        assert_eq!(list[1].phase, Phase::PendingSystemTest);
        // phase matching is case-sensitive
        assert_eq!(list[2].phase, Phase::Unknown);
        let catalog: Catalog = list.into_iter().collect();
        assert_eq!(catalog.len(), 1);
    }
}
