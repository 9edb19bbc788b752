extern crate scraper;

use super::Session;
use crate::error::{Error, Kind, Result};
use scraper::{Html, Selector};

/// Joined text of every `.program-source` element, `None` when the page has none.
pub fn extract_source(page: &str) -> Option<String> {
    let document = Html::parse_document(page);
    let selector = Selector::parse(".program-source").unwrap();
    let mut nodes = document.select(&selector).peekable();
    nodes.peek()?;
    Some(nodes.flat_map(|node| node.text()).collect())
}

impl Session {
    pub fn submission_url(&self, contest_id: u64, submission_id: u64) -> String {
        self.url(&format!(
            "contest/{}/submission/{}",
            contest_id, submission_id
        ))
    }
    pub async fn get_source(&self, contest_id: u64, submission_id: u64) -> Result<String> {
        let url = self.submission_url(contest_id, submission_id);
        let page = self
            .get(&url, &[])
            .await?
            .text()
            .await
            .map_err(|e| Error::with_url(Kind::Decode(e), url.as_str()))?;
        extract_source(&page).ok_or_else(|| Error::with_url(Kind::Extract, url))
    }
}
