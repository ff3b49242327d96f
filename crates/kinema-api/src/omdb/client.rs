use reqwest::Client;

use super::error::OmdbError;
use super::types::{OmdbDetailResponse, OmdbSearchResponse};
use crate::traits::{DetailReply, MovieLookup, SearchReply};

const BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb REST client.
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Client against a non-default endpoint (configured proxies, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }
}

impl MovieLookup for OmdbClient {
    type Error = OmdbError;

    async fn search(&self, query: &str, page: u32) -> Result<SearchReply, OmdbError> {
        let page = page.to_string();
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: OmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        Ok(body.into_reply())
    }

    async fn detail(&self, imdb_id: &str) -> Result<DetailReply, OmdbError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", imdb_id),
                ("plot", "full"),
            ])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: OmdbDetailResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        Ok(body.into_reply())
    }
}
