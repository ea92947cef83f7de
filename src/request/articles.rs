//! Result requests for article searches

use super::events::impl_from_request;
use super::params::{check_max, check_page, FacetParams};
use super::return_info::ReturnInfo;
use super::ResultRequest;
use crate::error::Result;
use crate::types::{JsonObject, SortBy};

/// One page of matching articles with their details
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesInfo {
    page: u32,
    count: u32,
    sort_by: SortBy,
    sort_by_asc: bool,
    return_info: ReturnInfo,
}

impl RequestArticlesInfo {
    /// Largest page the service returns
    pub const MAX_COUNT: u32 = 100;

    pub fn new(page: u32, count: u32) -> Result<Self> {
        check_page("articlesPage", page)?;
        check_max("articlesCount", count, Self::MAX_COUNT)?;
        Ok(Self {
            page,
            count,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn sort(mut self, sort_by: SortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

impl Default for RequestArticlesInfo {
    fn default() -> Self {
        Self {
            page: 1,
            count: Self::MAX_COUNT,
            sort_by: SortBy::Date,
            sort_by_asc: false,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestArticlesInfo {
    fn result_type(&self) -> &'static str {
        "articles"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("page", self.page)
            .set("count", self.count)
            .sort(self.sort_by, self.sort_by_asc)
            .return_info(&self.return_info)
            .build()
    }
}

/// Article URIs with their relevance weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestArticlesUriWgtList {
    page: u32,
    count: u32,
    sort_by: SortBy,
    sort_by_asc: bool,
}

impl RequestArticlesUriWgtList {
    pub const MAX_COUNT: u32 = 100_000;

    pub fn new(page: u32, count: u32) -> Result<Self> {
        check_page("uriWgtListPage", page)?;
        check_max("uriWgtListCount", count, Self::MAX_COUNT)?;
        Ok(Self {
            page,
            count,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn sort(mut self, sort_by: SortBy, ascending: bool) -> Self {
        self.sort_by = sort_by;
        self.sort_by_asc = ascending;
        self
    }
}

impl Default for RequestArticlesUriWgtList {
    fn default() -> Self {
        Self {
            page: 1,
            count: 10_000,
            sort_by: SortBy::Fq,
            sort_by_asc: false,
        }
    }
}

impl ResultRequest for RequestArticlesUriWgtList {
    fn result_type(&self) -> &'static str {
        "uriWgtList"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("page", self.page)
            .set("count", self.count)
            .sort(self.sort_by, self.sort_by_asc)
            .build()
    }
}

/// Time distribution of matching articles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestArticlesTimeAggr;

impl ResultRequest for RequestArticlesTimeAggr {
    fn result_type(&self) -> &'static str {
        "timeAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type()).build()
    }
}

/// Most frequent concepts across matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesConceptAggr {
    concept_count: u32,
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestArticlesConceptAggr {
    pub const MAX_CONCEPT_COUNT: u32 = 500;
    pub const MAX_SAMPLE_SIZE: u32 = 20_000;

    pub fn new(concept_count: u32, sample_size: u32) -> Result<Self> {
        check_max(
            "conceptAggrConceptCount",
            concept_count,
            Self::MAX_CONCEPT_COUNT,
        )?;
        check_max("conceptAggrSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self {
            concept_count,
            sample_size,
            return_info: ReturnInfo::default(),
        })
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }
}

impl Default for RequestArticlesConceptAggr {
    fn default() -> Self {
        Self {
            concept_count: 25,
            sample_size: 10_000,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestArticlesConceptAggr {
    fn result_type(&self) -> &'static str {
        "conceptAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("conceptCount", self.concept_count)
            .set("sampleSize", self.sample_size)
            .return_info(&self.return_info)
            .build()
    }
}

/// Tag cloud over matching articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestArticlesKeywordAggr {
    lang: Option<String>,
    sample_size: u32,
}

impl RequestArticlesKeywordAggr {
    pub const MAX_SAMPLE_SIZE: u32 = 20_000;

    pub fn new(lang: Option<String>, sample_size: u32) -> Result<Self> {
        check_max("keywordAggrSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self { lang, sample_size })
    }
}

impl Default for RequestArticlesKeywordAggr {
    fn default() -> Self {
        Self {
            lang: None,
            sample_size: 10_000,
        }
    }
}

impl ResultRequest for RequestArticlesKeywordAggr {
    fn result_type(&self) -> &'static str {
        "keywordAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set_opt("lang", self.lang.clone())
            .set("sampleSize", self.sample_size)
            .build()
    }
}

/// Distribution of matching articles over categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestArticlesCategoryAggr {
    return_info: ReturnInfo,
}

impl RequestArticlesCategoryAggr {
    pub fn new(return_info: ReturnInfo) -> Self {
        Self { return_info }
    }
}

impl ResultRequest for RequestArticlesCategoryAggr {
    fn result_type(&self) -> &'static str {
        "categoryAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .return_info(&self.return_info)
            .build()
    }
}

/// News sources that published most of the matching articles
#[derive(Debug, Clone, PartialEq)]
pub struct RequestArticlesSourceAggr {
    source_count: u32,
    return_info: ReturnInfo,
}

impl RequestArticlesSourceAggr {
    pub const MAX_SOURCE_COUNT: u32 = 200;

    pub fn new(source_count: u32) -> Result<Self> {
        check_max("sourceAggrSourceCount", source_count, Self::MAX_SOURCE_COUNT)?;
        Ok(Self {
            source_count,
            return_info: ReturnInfo::default(),
        })
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }
}

impl Default for RequestArticlesSourceAggr {
    fn default() -> Self {
        Self {
            source_count: 50,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestArticlesSourceAggr {
    fn result_type(&self) -> &'static str {
        "sourceAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("sourceCount", self.source_count)
            .return_info(&self.return_info)
            .build()
    }
}

/// The single result facet requested by an article search
#[derive(Debug, Clone, PartialEq)]
pub enum RequestArticles {
    Info(RequestArticlesInfo),
    UriWgtList(RequestArticlesUriWgtList),
    TimeAggr(RequestArticlesTimeAggr),
    ConceptAggr(RequestArticlesConceptAggr),
    KeywordAggr(RequestArticlesKeywordAggr),
    CategoryAggr(RequestArticlesCategoryAggr),
    SourceAggr(RequestArticlesSourceAggr),
}

impl Default for RequestArticles {
    fn default() -> Self {
        RequestArticles::Info(RequestArticlesInfo::default())
    }
}

impl RequestArticles {
    fn inner(&self) -> &dyn ResultRequest {
        match self {
            RequestArticles::Info(r) => r,
            RequestArticles::UriWgtList(r) => r,
            RequestArticles::TimeAggr(r) => r,
            RequestArticles::ConceptAggr(r) => r,
            RequestArticles::KeywordAggr(r) => r,
            RequestArticles::CategoryAggr(r) => r,
            RequestArticles::SourceAggr(r) => r,
        }
    }
}

impl ResultRequest for RequestArticles {
    fn result_type(&self) -> &'static str {
        self.inner().result_type()
    }

    fn params(&self) -> JsonObject {
        self.inner().params()
    }
}

impl_from_request!(RequestArticles,
    Info => RequestArticlesInfo,
    UriWgtList => RequestArticlesUriWgtList,
    TimeAggr => RequestArticlesTimeAggr,
    ConceptAggr => RequestArticlesConceptAggr,
    KeywordAggr => RequestArticlesKeywordAggr,
    CategoryAggr => RequestArticlesCategoryAggr,
    SourceAggr => RequestArticlesSourceAggr,
);
