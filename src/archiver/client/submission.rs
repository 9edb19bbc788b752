extern crate log;
extern crate serde;

use super::Session;
use crate::{config::api::USER_STATUS, error::Result};
use log::info;
use serde::Deserialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Verdict {
    #[serde(rename = "OK")]
    Ok,
    #[serde(other)]
    Rejected,
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Testset {
    #[serde(rename = "TESTS")]
    Tests,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Problem {
    pub index: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u64,
    /// Absent for problemset-only submissions.
    pub contest_id: Option<u64>,
    pub problem: Problem,
    pub programming_language: String,
    /// Absent while the submission is still in queue.
    pub verdict: Option<Verdict>,
    pub testset: Testset,
}
impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.testset == Testset::Tests && self.verdict == Some(Verdict::Ok)
    }
}

/// Drained from the front by the downloader.
pub type Queue = VecDeque<Submission>;

impl Session {
    pub async fn user_status(&self, handle: &str) -> Result<Queue> {
        let list: Queue = self.api(USER_STATUS, &[("handle", handle)]).await?;
        info!("Successfully loaded {} submissions", list.len());
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_user_status() {
        let list: Queue = serde_json::from_str(
            r#"[
                {"id":2,"contestId":101,"creationTimeSeconds":1,"problem":{"contestId":101,"index":"B1","name":"x"},
                 "author":{},"programmingLanguage":"GNU C++11","verdict":"WRONG_ANSWER","testset":"TESTS","passedTestCount":3},
                {"id":1,"contestId":101,"problem":{"index":"A"},"programmingLanguage":"Ruby","verdict":"OK","testset":"TESTS"},
                {"id":3,"problem":{"index":"C"},"programmingLanguage":"Java 8","testset":"PRETESTS"}
            ]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].problem.index, "B1");
        assert_eq!(list[0].verdict, Some(Verdict::Rejected));
        assert!(!list[0].is_accepted());
        assert!(list[1].is_accepted());
        assert_eq!(list[2].contest_id, None);
        assert_eq!(list[2].verdict, None);
        assert_eq!(list[2].testset, Testset::Other);
    }

    #[test]
    fn accepted_needs_full_testset() {
        let mut s = Submission {
            id: 1,
            contest_id: Some(101),
            problem: Problem {
                index: "A".to_owned(),
            },
            programming_language: "GNU C".to_owned(),
            verdict: Some(Verdict::Ok),
            testset: Testset::Other,
        };
        assert!(!s.is_accepted());
        s.testset = Testset::Tests;
        assert!(s.is_accepted());
        s.verdict = None;
        assert!(!s.is_accepted());
    }
}
