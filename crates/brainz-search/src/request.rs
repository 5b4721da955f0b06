// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::debug;
use url::Url;

use crate::entity::Entity;
use crate::error::{Result, SearchError};

pub const MUSICBRAINZ_API_BASE: &str = "https://musicbrainz.org/ws/2";

/// Largest page size the search endpoint accepts.
pub const MAX_LIMIT: u32 = 100;

/// Search request parameters: the rendered query plus paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub entity: Entity,
    /// Rendered Lucene query string.
    pub query: String,
    /// Maximum number of results (default 25, max 100).
    pub limit: Option<u32>,
    /// Offset for pagination (default 0).
    pub offset: Option<u32>,
}

impl SearchRequest {
    pub fn new(entity: Entity, query: impl Into<String>) -> Self {
        Self {
            entity,
            query: query.into(),
            limit: None,
            offset: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Result<Self> {
        if limit == 0 || limit > MAX_LIMIT {
            return Err(SearchError::InvalidLimit {
                limit,
                max: MAX_LIMIT,
            });
        }
        self.limit = Some(limit);
        Ok(self)
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Search endpoint URL under `base_url`, with the query string encoded as
    /// the `query` parameter.
    ///
    /// ```
    /// use brainz_search::{Entity, SearchRequest, MUSICBRAINZ_API_BASE};
    ///
    /// let url = SearchRequest::new(Entity::Artist, "artist:Nirvana")
    ///     .to_url(MUSICBRAINZ_API_BASE)
    ///     .unwrap();
    /// assert_eq!(
    ///     url.as_str(),
    ///     "https://musicbrainz.org/ws/2/artist?query=artist%3ANirvana&fmt=json"
    /// );
    /// ```
    pub fn to_url(&self, base_url: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.entity.resource()
        ))?;

        url.query_pairs_mut()
            .append_pair("query", &self.query)
            .append_pair("fmt", "json");

        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }

        if let Some(offset) = self.offset {
            url.query_pairs_mut()
                .append_pair("offset", &offset.to_string());
        }

        debug!(target: "search", url = %url, "built search request");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_url_carries_query_and_paging() {
        let request = SearchRequest::new(Entity::ReleaseGroup, r#"releasegroup:"OK Computer""#)
            .limit(10)
            .unwrap()
            .offset(20);
        let url = request.to_url("http://localhost:8080/ws/2/").unwrap();

        assert_eq!(url.path(), "/ws/2/release-group");
        assert_eq!(
            pairs(&url),
            vec![
                ("query".to_string(), r#"releasegroup:"OK Computer""#.to_string()),
                ("fmt".to_string(), "json".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "20".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_backslashes_survive_encoding() {
        let url = SearchRequest::new(Entity::Artist, r"artist:AC\/DC")
            .to_url(MUSICBRAINZ_API_BASE)
            .unwrap();
        assert_eq!(pairs(&url)[0].1, r"artist:AC\/DC");
    }

    #[test]
    fn test_limit_bounds() {
        assert!(SearchRequest::new(Entity::Artist, "x").limit(100).is_ok());
        assert!(matches!(
            SearchRequest::new(Entity::Artist, "x").limit(0),
            Err(SearchError::InvalidLimit { limit: 0, max: 100 })
        ));
        assert!(matches!(
            SearchRequest::new(Entity::Artist, "x").limit(101),
            Err(SearchError::InvalidLimit { limit: 101, .. })
        ));
    }

    #[test]
    fn test_bad_base_url() {
        let err = SearchRequest::new(Entity::Artist, "x").to_url("not a url").unwrap_err();
        assert!(matches!(err, SearchError::InvalidBaseUrl(_)));
    }
}
