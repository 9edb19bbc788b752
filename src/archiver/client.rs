extern crate reqwest;
extern crate serde;

pub mod contest;
pub mod source;
pub mod submission;

use crate::{
    config::session::{USER_AGENT, VERBOSE},
    error::{Error, Kind, Result},
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};

/// Envelope every Codeforces API method answers with.
#[derive(Debug, Deserialize)]
#[serde(tag = "status")]
enum Envelope<T> {
    #[serde(rename = "OK")]
    Ok { result: T },
    #[serde(rename = "FAILED")]
    Failed { comment: String },
}

pub struct Session {
    client: Client,
    base_url: String,
}
impl Session {
    pub fn new<T: Into<String>>(base_url: T) -> Result<Self> {
        let base_url: String = base_url.into();
        Ok(Session {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .connection_verbose(VERBOSE)
                .build()
                .map_err(|e| Error::with_kind(Kind::Builder(e)))?,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Single GET. Anything but `200 OK` is an error.
    pub(crate) async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response> {
        let request = self
            .client
            .get(url)
            .query(query)
            .build()
            .map_err(|e| Error::with_url(Kind::Builder(e), url))?;
        let full = request.url().to_string();
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| Error::with_url(Kind::Network(e), full.as_str()))?;
        if response.status() != StatusCode::OK {
            return Err(Error::with_url(Kind::Status(response.status()), full));
        }
        Ok(response)
    }

    pub(crate) async fn api<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.get(&self.url(method), query).await?;
        let url = response.url().to_string();
        match response
            .json::<Envelope<T>>()
            .await
            .map_err(|e| Error::with_url(Kind::Decode(e), url.as_str()))?
        {
            Envelope::Ok { result } => Ok(result),
            Envelope::Failed { comment } => Err(Error::with_url(Kind::Api(comment), url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_ok() {
        let v: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"status":"OK","result":[1,2,3]}"#).unwrap();
        assert!(matches!(v, Envelope::Ok { result } if result == vec![1, 2, 3]));
    }

    #[test]
    fn envelope_failed() {
        let v: Envelope<Vec<u32>> = serde_json::from_str(
            r#"{"status":"FAILED","comment":"handle: User with handle nobody not found"}"#,
        )
        .unwrap();
        assert!(
            matches!(v, Envelope::Failed { comment } if comment.starts_with("handle: User"))
        );
    }

    #[test]
    fn base_url_trailing_slash() {
        let session = Session::new("https://codeforces.com/").unwrap();
        assert_eq!(
            session.url("api/contest.list"),
            "https://codeforces.com/api/contest.list"
        );
    }
}
