//! Result requests for event searches
//!
//! Each request validates its bounds when it is constructed; the defaults
//! returned by `Default` are always valid.

use super::params::{check_max, check_page, FacetParams};
use super::return_info::ReturnInfo;
use super::ResultRequest;
use crate::error::{Error, Result};
use crate::types::{JsonObject, SortBy};
use chrono::NaiveDateTime;

// ============================================================================
// Lists
// ============================================================================

/// One page of matching events with their details
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsInfo {
    page: u32,
    count: u32,
    sort_by: SortBy,
    sort_by_asc: bool,
    return_info: ReturnInfo,
}

impl RequestEventsInfo {
    /// Largest page the service returns
    pub const MAX_COUNT: u32 = 50;

    pub fn new(page: u32, count: u32) -> Result<Self> {
        check_page("eventsPage", page)?;
        check_max("eventsCount", count, Self::MAX_COUNT)?;
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

impl Default for RequestEventsInfo {
    fn default() -> Self {
        Self {
            page: 1,
            count: Self::MAX_COUNT,
            sort_by: SortBy::Relevance,
            sort_by_asc: false,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsInfo {
    fn result_type(&self) -> &'static str {
        "events"
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

/// Event URIs with their relevance weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEventsUriWgtList {
    page: u32,
    count: u32,
    sort_by: SortBy,
    sort_by_asc: bool,
}

impl RequestEventsUriWgtList {
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

impl Default for RequestEventsUriWgtList {
    fn default() -> Self {
        Self {
            page: 1,
            count: 50_000,
            sort_by: SortBy::Relevance,
            sort_by_asc: false,
        }
    }
}

impl ResultRequest for RequestEventsUriWgtList {
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

// ============================================================================
// Aggregates
// ============================================================================

/// Time distribution of matching events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEventsTimeAggr;

impl ResultRequest for RequestEventsTimeAggr {
    fn result_type(&self) -> &'static str {
        "timeAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type()).build()
    }
}

/// Tag cloud over the articles of matching events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestEventsKeywordAggr {
    lang: Option<String>,
}

impl RequestEventsKeywordAggr {
    pub fn new(lang: Option<String>) -> Self {
        Self { lang }
    }
}

impl ResultRequest for RequestEventsKeywordAggr {
    fn result_type(&self) -> &'static str {
        "keywordAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set_opt("lang", self.lang.clone())
            .build()
    }
}

/// Locations of matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsLocAggr {
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestEventsLocAggr {
    pub const MAX_SAMPLE_SIZE: u32 = 100_000;

    pub fn new(sample_size: u32) -> Result<Self> {
        check_max("locAggrSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self {
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

impl Default for RequestEventsLocAggr {
    fn default() -> Self {
        Self {
            sample_size: Self::MAX_SAMPLE_SIZE,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsLocAggr {
    fn result_type(&self) -> &'static str {
        "locAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("sampleSize", self.sample_size)
            .return_info(&self.return_info)
            .build()
    }
}

/// Locations and times of matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsLocTimeAggr {
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestEventsLocTimeAggr {
    pub const MAX_SAMPLE_SIZE: u32 = 100_000;

    pub fn new(sample_size: u32) -> Result<Self> {
        check_max("locTimeAggrSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self {
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

impl Default for RequestEventsLocTimeAggr {
    fn default() -> Self {
        Self {
            sample_size: Self::MAX_SAMPLE_SIZE,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsLocTimeAggr {
    fn result_type(&self) -> &'static str {
        "locTimeAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("sampleSize", self.sample_size)
            .return_info(&self.return_info)
            .build()
    }
}

/// Most frequent concepts across matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsConceptAggr {
    concept_count: u32,
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestEventsConceptAggr {
    pub const MAX_CONCEPT_COUNT: u32 = 200;
    pub const MAX_SAMPLE_SIZE: u32 = 1_000_000;

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

impl Default for RequestEventsConceptAggr {
    fn default() -> Self {
        Self {
            concept_count: 20,
            sample_size: 100_000,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsConceptAggr {
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

/// Concept pairs that frequently co-occur in matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsConceptGraph {
    concept_count: u32,
    link_count: u32,
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestEventsConceptGraph {
    pub const MAX_CONCEPT_COUNT: u32 = 1000;
    pub const MAX_LINK_COUNT: u32 = 2000;
    pub const MAX_SAMPLE_SIZE: u32 = 300_000;

    pub fn new(concept_count: u32, link_count: u32, sample_size: u32) -> Result<Self> {
        check_max(
            "conceptGraphConceptCount",
            concept_count,
            Self::MAX_CONCEPT_COUNT,
        )?;
        check_max("conceptGraphLinkCount", link_count, Self::MAX_LINK_COUNT)?;
        check_max("conceptGraphSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self {
            concept_count,
            link_count,
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

impl Default for RequestEventsConceptGraph {
    fn default() -> Self {
        Self {
            concept_count: 50,
            link_count: 150,
            sample_size: 50_000,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsConceptGraph {
    fn result_type(&self) -> &'static str {
        "conceptGraph"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("conceptCount", self.concept_count)
            .set("linkCount", self.link_count)
            .set("sampleSize", self.sample_size)
            .return_info(&self.return_info)
            .build()
    }
}

/// Association measure used by the concept matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConceptMatrixMeasure {
    /// Pointwise mutual information
    #[default]
    Pmi,
    PairTfIdf,
    ChiSquare,
}

impl ConceptMatrixMeasure {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConceptMatrixMeasure::Pmi => "pmi",
            ConceptMatrixMeasure::PairTfIdf => "pairTfIdf",
            ConceptMatrixMeasure::ChiSquare => "chiSquare",
        }
    }
}

/// Co-occurrence matrix of the top concepts in matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsConceptMatrix {
    concept_count: u32,
    measure: ConceptMatrixMeasure,
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestEventsConceptMatrix {
    pub const MAX_CONCEPT_COUNT: u32 = 200;
    pub const MAX_SAMPLE_SIZE: u32 = 300_000;

    pub fn new(
        concept_count: u32,
        measure: ConceptMatrixMeasure,
        sample_size: u32,
    ) -> Result<Self> {
        check_max(
            "conceptMatrixConceptCount",
            concept_count,
            Self::MAX_CONCEPT_COUNT,
        )?;
        check_max("conceptMatrixSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self {
            concept_count,
            measure,
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

impl Default for RequestEventsConceptMatrix {
    fn default() -> Self {
        Self {
            concept_count: 25,
            measure: ConceptMatrixMeasure::Pmi,
            sample_size: 100_000,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsConceptMatrix {
    fn result_type(&self) -> &'static str {
        "conceptMatrix"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("conceptCount", self.concept_count)
            .set("measure", self.measure.as_str())
            .set("sampleSize", self.sample_size)
            .return_info(&self.return_info)
            .build()
    }
}

/// Top trending concepts with their daily trend
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsConceptTrends {
    concept_uris: Option<Vec<String>>,
    concept_count: u32,
    return_info: ReturnInfo,
}

impl RequestEventsConceptTrends {
    pub const MAX_CONCEPT_COUNT: u32 = 50;

    /// Trends for the given concepts, or for the top `concept_count` if `None`
    pub fn new(concept_uris: Option<Vec<String>>, concept_count: u32) -> Result<Self> {
        check_max(
            "conceptTrendsConceptCount",
            concept_count,
            Self::MAX_CONCEPT_COUNT,
        )?;
        Ok(Self {
            concept_uris,
            concept_count,
            return_info: ReturnInfo::default(),
        })
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }
}

impl Default for RequestEventsConceptTrends {
    fn default() -> Self {
        Self {
            concept_uris: None,
            concept_count: 10,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsConceptTrends {
    fn result_type(&self) -> &'static str {
        "conceptTrends"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set_opt("conceptUri", self.concept_uris.clone())
            .set("conceptCount", self.concept_count)
            .return_info(&self.return_info)
            .build()
    }
}

/// News sources that report most about matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsSourceAggr {
    source_count: u32,
    sample_size: u32,
    return_info: ReturnInfo,
}

impl RequestEventsSourceAggr {
    pub const MAX_SOURCE_COUNT: u32 = 200;
    pub const MAX_SAMPLE_SIZE: u32 = 100_000;

    pub fn new(source_count: u32, sample_size: u32) -> Result<Self> {
        check_max("sourceAggrSourceCount", source_count, Self::MAX_SOURCE_COUNT)?;
        check_max("sourceAggrSampleSize", sample_size, Self::MAX_SAMPLE_SIZE)?;
        Ok(Self {
            source_count,
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

impl Default for RequestEventsSourceAggr {
    fn default() -> Self {
        Self {
            source_count: 30,
            sample_size: 50_000,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsSourceAggr {
    fn result_type(&self) -> &'static str {
        "sourceAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("sourceCount", self.source_count)
            .set("sampleSize", self.sample_size)
            .return_info(&self.return_info)
            .build()
    }
}

/// Dates mentioned in the articles of matching events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEventsDateMentionAggr {
    min_days_apart: u32,
    min_date_mention_count: u32,
    sample_size: u32,
}

impl RequestEventsDateMentionAggr {
    pub const MAX_SAMPLE_SIZE: u32 = 300_000;

    pub fn new(min_days_apart: u32, min_date_mention_count: u32, sample_size: u32) -> Result<Self> {
        check_max(
            "dateMentionAggrSampleSize",
            sample_size,
            Self::MAX_SAMPLE_SIZE,
        )?;
        Ok(Self {
            min_days_apart,
            min_date_mention_count,
            sample_size,
        })
    }
}

impl Default for RequestEventsDateMentionAggr {
    fn default() -> Self {
        Self {
            min_days_apart: 0,
            min_date_mention_count: 5,
            sample_size: 100_000,
        }
    }
}

impl ResultRequest for RequestEventsDateMentionAggr {
    fn result_type(&self) -> &'static str {
        "dateMentionAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("minDaysApart", self.min_days_apart)
            .set("minDateMentionCount", self.min_date_mention_count)
            .set("sampleSize", self.sample_size)
            .build()
    }
}

/// Hierarchical 2-means clustering of matching events
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsEventClusters {
    keyword_count: u32,
    max_events_to_cluster: u32,
    return_info: ReturnInfo,
}

impl RequestEventsEventClusters {
    pub const MAX_KEYWORD_COUNT: u32 = 100;
    pub const MAX_EVENTS_TO_CLUSTER: u32 = 10_000;

    pub fn new(keyword_count: u32, max_events_to_cluster: u32) -> Result<Self> {
        check_max(
            "eventClustersKeywordCount",
            keyword_count,
            Self::MAX_KEYWORD_COUNT,
        )?;
        check_max(
            "eventClustersMaxEventsToCluster",
            max_events_to_cluster,
            Self::MAX_EVENTS_TO_CLUSTER,
        )?;
        Ok(Self {
            keyword_count,
            max_events_to_cluster,
            return_info: ReturnInfo::default(),
        })
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }
}

impl Default for RequestEventsEventClusters {
    fn default() -> Self {
        Self {
            keyword_count: 30,
            max_events_to_cluster: Self::MAX_EVENTS_TO_CLUSTER,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsEventClusters {
    fn result_type(&self) -> &'static str {
        "eventClusters"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .set("keywordCount", self.keyword_count)
            .set("maxEventsToCluster", self.max_events_to_cluster)
            .return_info(&self.return_info)
            .build()
    }
}

/// Distribution of matching events over categories
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestEventsCategoryAggr {
    return_info: ReturnInfo,
}

impl RequestEventsCategoryAggr {
    pub fn new(return_info: ReturnInfo) -> Self {
        Self { return_info }
    }
}

impl ResultRequest for RequestEventsCategoryAggr {
    fn result_type(&self) -> &'static str {
        "categoryAggr"
    }

    fn params(&self) -> JsonObject {
        FacetParams::new(self.result_type())
            .return_info(&self.return_info)
            .build()
    }
}

// ============================================================================
// Recent Activity
// ============================================================================

/// Events that changed recently and match the search
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEventsRecentActivity {
    max_event_count: u32,
    updates_after_tm: Option<NaiveDateTime>,
    updates_after_mins_ago: Option<u32>,
    mandatory_location: bool,
    lang: Option<String>,
    min_avg_cos_sim: f64,
    return_info: ReturnInfo,
}

impl RequestEventsRecentActivity {
    pub const MAX_EVENT_COUNT: u32 = 2000;

    /// At most one of `updates_after_tm` and `updates_after_mins_ago` may be set
    pub fn new(
        max_event_count: u32,
        updates_after_tm: Option<NaiveDateTime>,
        updates_after_mins_ago: Option<u32>,
    ) -> Result<Self> {
        check_max(
            "recentActivityEventsMaxEventCount",
            max_event_count,
            Self::MAX_EVENT_COUNT,
        )?;
        if updates_after_tm.is_some() && updates_after_mins_ago.is_some() {
            return Err(Error::mutually_exclusive(
                "updatesAfterTm",
                "updatesAfterMinsAgo",
            ));
        }
        Ok(Self {
            max_event_count,
            updates_after_tm,
            updates_after_mins_ago,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn mandatory_location(mut self, mandatory: bool) -> Self {
        self.mandatory_location = mandatory;
        self
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    #[must_use]
    pub fn min_avg_cos_sim(mut self, value: f64) -> Self {
        self.min_avg_cos_sim = value;
        self
    }

    #[must_use]
    pub fn return_info(mut self, info: ReturnInfo) -> Self {
        self.return_info = info;
        self
    }
}

impl Default for RequestEventsRecentActivity {
    fn default() -> Self {
        Self {
            max_event_count: 50,
            updates_after_tm: None,
            updates_after_mins_ago: None,
            mandatory_location: true,
            lang: None,
            min_avg_cos_sim: 0.0,
            return_info: ReturnInfo::default(),
        }
    }
}

impl ResultRequest for RequestEventsRecentActivity {
    fn result_type(&self) -> &'static str {
        "recentActivityEvents"
    }

    fn params(&self) -> JsonObject {
        let updates_after_tm = self
            .updates_after_tm
            .map(|tm| tm.format("%Y-%m-%dT%H:%M:%S").to_string());
        FacetParams::new(self.result_type())
            .set("maxEventCount", self.max_event_count)
            .set("mandatoryLocation", self.mandatory_location)
            .set_opt("updatesAfterTm", updates_after_tm)
            .set_opt("updatesAfterMinsAgo", self.updates_after_mins_ago)
            .set_opt("lang", self.lang.clone())
            .set("minAvgCosSim", self.min_avg_cos_sim)
            .return_info(&self.return_info)
            .build()
    }
}

// ============================================================================
// Request Enum
// ============================================================================

/// The single result facet requested by an event search
#[derive(Debug, Clone, PartialEq)]
pub enum RequestEvents {
    Info(RequestEventsInfo),
    UriWgtList(RequestEventsUriWgtList),
    TimeAggr(RequestEventsTimeAggr),
    KeywordAggr(RequestEventsKeywordAggr),
    LocAggr(RequestEventsLocAggr),
    LocTimeAggr(RequestEventsLocTimeAggr),
    ConceptAggr(RequestEventsConceptAggr),
    ConceptGraph(RequestEventsConceptGraph),
    ConceptMatrix(RequestEventsConceptMatrix),
    ConceptTrends(RequestEventsConceptTrends),
    SourceAggr(RequestEventsSourceAggr),
    DateMentionAggr(RequestEventsDateMentionAggr),
    EventClusters(RequestEventsEventClusters),
    CategoryAggr(RequestEventsCategoryAggr),
    RecentActivity(RequestEventsRecentActivity),
}

impl Default for RequestEvents {
    fn default() -> Self {
        RequestEvents::Info(RequestEventsInfo::default())
    }
}

impl RequestEvents {
    fn inner(&self) -> &dyn ResultRequest {
        match self {
            RequestEvents::Info(r) => r,
            RequestEvents::UriWgtList(r) => r,
            RequestEvents::TimeAggr(r) => r,
            RequestEvents::KeywordAggr(r) => r,
            RequestEvents::LocAggr(r) => r,
            RequestEvents::LocTimeAggr(r) => r,
            RequestEvents::ConceptAggr(r) => r,
            RequestEvents::ConceptGraph(r) => r,
            RequestEvents::ConceptMatrix(r) => r,
            RequestEvents::ConceptTrends(r) => r,
            RequestEvents::SourceAggr(r) => r,
            RequestEvents::DateMentionAggr(r) => r,
            RequestEvents::EventClusters(r) => r,
            RequestEvents::CategoryAggr(r) => r,
            RequestEvents::RecentActivity(r) => r,
        }
    }
}

impl ResultRequest for RequestEvents {
    fn result_type(&self) -> &'static str {
        self.inner().result_type()
    }

    fn params(&self) -> JsonObject {
        self.inner().params()
    }
}

macro_rules! impl_from_request {
    ($enum:ident, $($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for $enum {
                fn from(request: $ty) -> Self {
                    $enum::$variant(request)
                }
            }
        )*
    };
}
pub(crate) use impl_from_request;

impl_from_request!(RequestEvents,
    Info => RequestEventsInfo,
    UriWgtList => RequestEventsUriWgtList,
    TimeAggr => RequestEventsTimeAggr,
    KeywordAggr => RequestEventsKeywordAggr,
    LocAggr => RequestEventsLocAggr,
    LocTimeAggr => RequestEventsLocTimeAggr,
    ConceptAggr => RequestEventsConceptAggr,
    ConceptGraph => RequestEventsConceptGraph,
    ConceptMatrix => RequestEventsConceptMatrix,
    ConceptTrends => RequestEventsConceptTrends,
    SourceAggr => RequestEventsSourceAggr,
    DateMentionAggr => RequestEventsDateMentionAggr,
    EventClusters => RequestEventsEventClusters,
    CategoryAggr => RequestEventsCategoryAggr,
    RecentActivity => RequestEventsRecentActivity,
);
