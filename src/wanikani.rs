use futures::future::BoxFuture;
use reqwest::header;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::{API_BASE_URL, API_REVISION, USER_AGENT};
use crate::error::{Error, FetchError, Result};
use crate::factory;
use crate::filters::{
    AssignmentFilters, IdFilters, ReviewFilters, ReviewStatisticFilters, StudyMaterialFilters,
    SubjectFilters,
};
use crate::models::{
    Assignment, LevelProgression, Reset, Review, ReviewStatistic, StudyMaterial, Summary,
    UserInformation,
};
use crate::page::Page;
use crate::pagination::{PageFetcher, Paginator};
use crate::resource::{Resource, TypedResource};

pub struct WaniKaniClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl WaniKaniClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, API_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(&config.api_key, &config.base_url)
    }

    /// Resolve an endpoint path against the base URL. Absolute URLs, like the `next_url`s the
    /// API hands out, are used as-is.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Wanikani-Revision", API_REVISION)
            .header(header::USER_AGENT, USER_AGENT)
            .bearer_auth(&self.api_key)
    }

    async fn send(request: reqwest::RequestBuilder) -> std::result::Result<Value, FetchError> {
        let resp = request.send().await?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%status, url = %resp.url(), "WaniKani API request failed");
            return Err(FetchError::from_status(status));
        }

        Ok(resp.json().await?)
    }

    async fn resource(&self, path: &str) -> Result<TypedResource> {
        let url = self.url(path);
        debug!(url = %url, "fetching resource");

        let payload = Self::send(self.get(&url))
            .await
            .map_err(|err| Error::fetch(&url, err))?;
        factory::convert(payload)
    }

    async fn typed<T>(&self, path: &str) -> Result<T>
    where
        T: TryFrom<TypedResource, Error = Error>,
    {
        T::try_from(self.resource(path).await?)
    }

    async fn fetch(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Page> {
        let payload = Self::send(request)
            .await
            .map_err(|err| Error::fetch(url, err))?;
        let page = Page::from_payload(payload)
            .map_err(|err| Error::fetch(url, FetchError::Payload(Box::new(err))))?;

        debug!(
            url = %url,
            items = page.len(),
            total_count = page.total_count,
            "fetched page"
        );
        Ok(page)
    }

    async fn paginate<Q>(
        &self,
        path: &str,
        query: &Q,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let first = self.fetch(&url, self.get(&url).query(query)).await?;

        Ok(Paginator::new(first, self, max_results))
    }

    pub async fn user_information(&self) -> Result<Resource<UserInformation>> {
        self.typed("user").await
    }

    pub async fn summary(&self) -> Result<Resource<Summary>> {
        self.typed("summary").await
    }

    /// A single radical, kanji or vocabulary.
    pub async fn subject(&self, id: u64) -> Result<TypedResource> {
        self.resource(&format!("subjects/{id}")).await
    }

    pub async fn assignment(&self, id: u64) -> Result<Resource<Assignment>> {
        self.typed(&format!("assignments/{id}")).await
    }

    pub async fn review_statistic(&self, id: u64) -> Result<Resource<ReviewStatistic>> {
        self.typed(&format!("review_statistics/{id}")).await
    }

    pub async fn study_material(&self, id: u64) -> Result<Resource<StudyMaterial>> {
        self.typed(&format!("study_materials/{id}")).await
    }

    pub async fn review(&self, id: u64) -> Result<Resource<Review>> {
        self.typed(&format!("reviews/{id}")).await
    }

    pub async fn level_progression(&self, id: u64) -> Result<Resource<LevelProgression>> {
        self.typed(&format!("level_progressions/{id}")).await
    }

    pub async fn reset(&self, id: u64) -> Result<Resource<Reset>> {
        self.typed(&format!("resets/{id}")).await
    }

    pub async fn subjects(
        &self,
        filters: &SubjectFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("subjects", filters, max_results).await
    }

    pub async fn assignments(
        &self,
        filters: &AssignmentFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("assignments", filters, max_results).await
    }

    pub async fn review_statistics(
        &self,
        filters: &ReviewStatisticFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("review_statistics", filters, max_results)
            .await
    }

    pub async fn study_materials(
        &self,
        filters: &StudyMaterialFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("study_materials", filters, max_results).await
    }

    pub async fn reviews(
        &self,
        filters: &ReviewFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("reviews", filters, max_results).await
    }

    pub async fn level_progressions(
        &self,
        filters: &IdFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("level_progressions", filters, max_results)
            .await
    }

    pub async fn resets(
        &self,
        filters: &IdFilters,
        max_results: Option<usize>,
    ) -> Result<Paginator<'_, Self>> {
        self.paginate("resets", filters, max_results).await
    }
}

impl PageFetcher for WaniKaniClient {
    fn fetch_page<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Page>> {
        Box::pin(async move {
            let url = self.url(url);
            self.fetch(&url, self.get(&url)).await
        })
    }
}
