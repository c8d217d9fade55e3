//! Reqwest-backed implementation of [`UniversityRepository`].
//!
//! This adapter owns transport details only: URL construction, status
//! mapping and JSON decoding. A 404 on an id-addressed operation maps to
//! `NotFound`; every other non-success status, transport failure or
//! undecodable body collapses into `RequestFailed` carrying only the
//! operation name — the server's error body is deliberately not parsed.
//! There is no client-side retry or backoff.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use unidex_core::error::{UnidexError, UnidexResult};
use unidex_core::filter::UniversityFilter;
use unidex_core::models::university::{University, UniversityPatch};
use unidex_core::normalize::normalize;
use unidex_core::repository::UniversityRepository;

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct RemoteUniversityStore {
    client: Client,
    base_url: Url,
}

impl RemoteUniversityStore {
    /// Build a store with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(base_url, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Build a store with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// `{base}/universities`, with query parameters for the active filter
    /// criteria only — blank criteria are omitted entirely, not sent as
    /// empty strings.
    fn collection_url(&self, filter: &UniversityFilter) -> UnidexResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| request_failed("list"))?
            .pop_if_empty()
            .push("universities");

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(search) = filter.search_term() {
                pairs.append_pair("search", search);
            }
            if let Some(location) = filter.location_term() {
                pairs.append_pair("location", location);
            }
            if let Some(level) = filter.degree_level {
                pairs.append_pair("degreeLevel", level.as_str());
            }
        }
        if url.query().is_none_or(str::is_empty) {
            url.set_query(None);
        }
        Ok(url)
    }

    /// `{base}/universities/{id}`.
    fn record_url(&self, operation: &str, id: &str) -> UnidexResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| request_failed(operation))?
            .pop_if_empty()
            .extend(["universities", id]);
        Ok(url)
    }
}

fn request_failed(operation: &str) -> UnidexError {
    UnidexError::RequestFailed {
        operation: operation.to_owned(),
    }
}

/// Maps a response status: 404 becomes `NotFound` for id-addressed
/// operations, any other non-success becomes `RequestFailed`.
fn check_status(operation: &str, id: Option<&str>, status: StatusCode) -> UnidexResult<()> {
    if status == StatusCode::NOT_FOUND {
        if let Some(id) = id {
            return Err(UnidexError::NotFound { id: id.to_owned() });
        }
    }
    if !status.is_success() {
        return Err(request_failed(operation));
    }
    Ok(())
}

impl UniversityRepository for RemoteUniversityStore {
    async fn list(&self, filter: UniversityFilter) -> UnidexResult<Vec<University>> {
        let url = self.collection_url(&filter)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| request_failed("list"))?;
        check_status("list", None, response.status())?;

        let universities: Vec<University> =
            response.json().await.map_err(|_| request_failed("list"))?;
        Ok(universities.into_iter().map(normalize).collect())
    }

    async fn get(&self, id: &str) -> UnidexResult<University> {
        let url = self.record_url("get", id)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|_| request_failed("get"))?;
        check_status("get", Some(id), response.status())?;

        let university: University =
            response.json().await.map_err(|_| request_failed("get"))?;
        Ok(normalize(university))
    }

    async fn create(&self, input: UniversityPatch) -> UnidexResult<University> {
        // Same client-side validation as the local store, so the
        // `Validation` contract holds on both backends.
        input.validate_for_create()?;

        let url = self.collection_url(&UniversityFilter::default())?;
        let response = self
            .client
            .post(url)
            .json(&input)
            .send()
            .await
            .map_err(|_| request_failed("create"))?;
        check_status("create", None, response.status())?;

        let university: University = response
            .json()
            .await
            .map_err(|_| request_failed("create"))?;
        Ok(normalize(university))
    }

    async fn update(&self, id: &str, input: UniversityPatch) -> UnidexResult<University> {
        let url = self.record_url("update", id)?;
        let response = self
            .client
            .put(url)
            .json(&input)
            .send()
            .await
            .map_err(|_| request_failed("update"))?;
        check_status("update", Some(id), response.status())?;

        let university: University = response
            .json()
            .await
            .map_err(|_| request_failed("update"))?;
        Ok(normalize(university))
    }

    async fn delete(&self, id: &str) -> UnidexResult<()> {
        let url = self.record_url("delete", id)?;
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|_| request_failed("delete"))?;
        check_status("delete", Some(id), response.status())
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for the non-network URL and status mapping helpers.

    use super::*;
    use unidex_core::models::degree::DegreeLevel;

    fn store() -> RemoteUniversityStore {
        RemoteUniversityStore::new(Url::parse("http://directory.example:4010/api/").unwrap())
            .unwrap()
    }

    #[test]
    fn collection_url_omits_blank_filters() {
        let url = store()
            .collection_url(&UniversityFilter {
                search: Some("  ".into()),
                location: None,
                degree_level: None,
            })
            .unwrap();
        assert_eq!(url.as_str(), "http://directory.example:4010/api/universities");
    }

    #[test]
    fn collection_url_carries_active_filters() {
        let url = store()
            .collection_url(&UniversityFilter {
                search: Some("stan".into()),
                location: Some("USA".into()),
                degree_level: Some(DegreeLevel::Phd),
            })
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://directory.example:4010/api/universities?search=stan&location=USA&degreeLevel=phd"
        );
    }

    #[test]
    fn record_url_appends_the_id() {
        let url = store().record_url("get", "u-42").unwrap();
        assert_eq!(
            url.as_str(),
            "http://directory.example:4010/api/universities/u-42"
        );
    }

    #[test]
    fn not_found_maps_only_for_id_addressed_operations() {
        let err = check_status("get", Some("u-42"), StatusCode::NOT_FOUND).unwrap_err();
        assert!(matches!(err, UnidexError::NotFound { id } if id == "u-42"));

        let err = check_status("list", None, StatusCode::NOT_FOUND).unwrap_err();
        assert!(matches!(err, UnidexError::RequestFailed { operation } if operation == "list"));
    }

    #[test]
    fn other_statuses_collapse_into_request_failed() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            let err = check_status("update", Some("u-1"), status).unwrap_err();
            assert!(matches!(err, UnidexError::RequestFailed { .. }));
        }
        check_status("update", Some("u-1"), StatusCode::OK).unwrap();
    }
}
