//! Tests for result requests

use super::*;
use crate::error::Error;
use crate::types::SortBy;
use chrono::NaiveDate;
use serde_json::{json, Value};
use test_case::test_case;

fn params_of(request: &impl ResultRequest) -> Value {
    Value::Object(request.params())
}

fn assert_out_of_range<T: std::fmt::Debug>(result: crate::Result<T>) {
    match result {
        Err(Error::ParameterOutOfRange { .. }) => {}
        other => panic!("expected ParameterOutOfRange, got {other:?}"),
    }
}

// ============================================================================
// Event Facets
// ============================================================================

#[test]
fn test_events_info_params() {
    let request = RequestEventsInfo::new(2, 30)
        .unwrap()
        .sort(SortBy::Date, true);
    pretty_assertions::assert_eq!(
        params_of(&request),
        json!({
            "resultType": "events",
            "eventsPage": 2,
            "eventsCount": 30,
            "eventsSortBy": "date",
            "eventsSortByAsc": true
        })
    );
}

#[test]
fn test_events_info_default_is_first_full_page() {
    let request = RequestEventsInfo::default();
    pretty_assertions::assert_eq!(request.page(), 1);
    pretty_assertions::assert_eq!(request.count(), RequestEventsInfo::MAX_COUNT);
    pretty_assertions::assert_eq!(RequestEvents::default().result_type(), "events");
}

#[test_case(0, 10 ; "page zero")]
#[test_case(1, 0 ; "count zero")]
#[test_case(1, 51 ; "count above page limit")]
fn test_events_info_rejects(page: u32, count: u32) {
    assert_out_of_range(RequestEventsInfo::new(page, count));
}

#[test_case(50 => true ; "at bound")]
#[test_case(51 => false ; "above bound")]
fn test_events_info_count_bound(count: u32) -> bool {
    RequestEventsInfo::new(1, count).is_ok()
}

#[test_case(100_000 => true ; "at bound")]
#[test_case(100_001 => false ; "above bound")]
fn test_events_uri_wgt_list_bound(count: u32) -> bool {
    RequestEventsUriWgtList::new(1, count).is_ok()
}

#[test_case(200, 1_000_000 => true ; "both at bound")]
#[test_case(201, 1_000 => false ; "concepts above bound")]
#[test_case(20, 1_000_001 => false ; "sample above bound")]
fn test_events_concept_aggr_bounds(concepts: u32, sample: u32) -> bool {
    RequestEventsConceptAggr::new(concepts, sample).is_ok()
}

#[test_case(1000, 2000, 300_000 => true ; "all at bound")]
#[test_case(1001, 150, 50_000 => false ; "concepts above bound")]
#[test_case(50, 2001, 50_000 => false ; "links above bound")]
#[test_case(50, 150, 300_001 => false ; "sample above bound")]
fn test_events_concept_graph_bounds(concepts: u32, links: u32, sample: u32) -> bool {
    RequestEventsConceptGraph::new(concepts, links, sample).is_ok()
}

#[test_case(200 => true ; "at bound")]
#[test_case(201 => false ; "above bound")]
fn test_events_source_aggr_bound(sources: u32) -> bool {
    RequestEventsSourceAggr::new(sources, 1000).is_ok()
}

#[test_case(100, 10_000 => true ; "both at bound")]
#[test_case(101, 10_000 => false ; "keywords above bound")]
#[test_case(30, 10_001 => false ; "events above bound")]
fn test_events_event_clusters_bounds(keywords: u32, events: u32) -> bool {
    RequestEventsEventClusters::new(keywords, events).is_ok()
}

#[test_case(50 => true ; "at bound")]
#[test_case(51 => false ; "above bound")]
fn test_events_concept_trends_bound(count: u32) -> bool {
    RequestEventsConceptTrends::new(None, count).is_ok()
}

#[test]
fn test_events_loc_aggr_bound() {
    assert!(RequestEventsLocAggr::new(100_000).is_ok());
    assert_out_of_range(RequestEventsLocAggr::new(100_001));
    assert_out_of_range(RequestEventsLocTimeAggr::new(0));
}

#[test_case(100_000 => true ; "at bound")]
#[test_case(100_001 => false ; "above bound")]
fn test_events_loc_time_aggr_bound(sample: u32) -> bool {
    RequestEventsLocTimeAggr::new(sample).is_ok()
}

#[test_case(200, 300_000 => true ; "both at bound")]
#[test_case(201, 1_000 => false ; "concepts above bound")]
#[test_case(25, 300_001 => false ; "sample above bound")]
fn test_events_concept_matrix_bounds(concepts: u32, sample: u32) -> bool {
    RequestEventsConceptMatrix::new(concepts, ConceptMatrixMeasure::Pmi, sample).is_ok()
}

#[test_case(300_000 => true ; "at bound")]
#[test_case(300_001 => false ; "above bound")]
fn test_events_date_mention_aggr_bound(sample: u32) -> bool {
    RequestEventsDateMentionAggr::new(0, 5, sample).is_ok()
}

#[test_case(100_000 => true ; "at bound")]
#[test_case(100_001 => false ; "above bound")]
fn test_events_source_aggr_sample_bound(sample: u32) -> bool {
    RequestEventsSourceAggr::new(30, sample).is_ok()
}

#[test_case(2000 => true ; "at bound")]
#[test_case(2001 => false ; "above bound")]
fn test_events_recent_activity_bound(max_events: u32) -> bool {
    RequestEventsRecentActivity::new(max_events, None, Some(5)).is_ok()
}

#[test]
fn test_events_concept_matrix_params() {
    let request =
        RequestEventsConceptMatrix::new(10, ConceptMatrixMeasure::ChiSquare, 5000).unwrap();
    pretty_assertions::assert_eq!(
        params_of(&request),
        json!({
            "resultType": "conceptMatrix",
            "conceptMatrixConceptCount": 10,
            "conceptMatrixMeasure": "chiSquare",
            "conceptMatrixSampleSize": 5000
        })
    );
}

#[test]
fn test_events_concept_trends_params() {
    let request =
        RequestEventsConceptTrends::new(Some(vec!["c/A".into(), "c/B".into()]), 5).unwrap();
    pretty_assertions::assert_eq!(
        params_of(&request),
        json!({
            "resultType": "conceptTrends",
            "conceptTrendsConceptUri": ["c/A", "c/B"],
            "conceptTrendsConceptCount": 5
        })
    );
}

#[test]
fn test_events_time_aggr_has_only_result_type() {
    pretty_assertions::assert_eq!(
        params_of(&RequestEvents::from(RequestEventsTimeAggr)),
        json!({"resultType": "timeAggr"})
    );
}

#[test]
fn test_events_date_mention_aggr_defaults() {
    pretty_assertions::assert_eq!(
        params_of(&RequestEventsDateMentionAggr::default()),
        json!({
            "resultType": "dateMentionAggr",
            "dateMentionAggrMinDaysApart": 0,
            "dateMentionAggrMinDateMentionCount": 5,
            "dateMentionAggrSampleSize": 100_000
        })
    );
}

#[test]
fn test_recent_activity_rejects_both_update_markers() {
    let tm = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let err = RequestEventsRecentActivity::new(50, Some(tm), Some(10)).unwrap_err();
    assert!(matches!(err, Error::MutuallyExclusive { .. }));
}

#[test]
fn test_recent_activity_params() {
    let tm = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(12, 30, 5)
        .unwrap();
    let request = RequestEventsRecentActivity::new(100, Some(tm), None)
        .unwrap()
        .lang("eng");
    pretty_assertions::assert_eq!(
        params_of(&request),
        json!({
            "resultType": "recentActivityEvents",
            "recentActivityEventsMaxEventCount": 100,
            "recentActivityEventsMandatoryLocation": true,
            "recentActivityEventsUpdatesAfterTm": "2024-03-01T12:30:05",
            "recentActivityEventsLang": "eng",
            "recentActivityEventsMinAvgCosSim": 0.0
        })
    );
    assert_out_of_range(RequestEventsRecentActivity::new(2001, None, Some(5)));
}

// ============================================================================
// Article Facets
// ============================================================================

#[test]
fn test_articles_info_params() {
    let request = RequestArticlesInfo::new(3, 100).unwrap();
    pretty_assertions::assert_eq!(
        params_of(&request),
        json!({
            "resultType": "articles",
            "articlesPage": 3,
            "articlesCount": 100,
            "articlesSortBy": "date",
            "articlesSortByAsc": false
        })
    );
}

#[test_case(100 => true ; "at bound")]
#[test_case(101 => false ; "above bound")]
fn test_articles_info_count_bound(count: u32) -> bool {
    RequestArticlesInfo::new(1, count).is_ok()
}

#[test_case(500, 20_000 => true ; "both at bound")]
#[test_case(501, 100 => false ; "concepts above bound")]
#[test_case(25, 20_001 => false ; "sample above bound")]
fn test_articles_concept_aggr_bounds(concepts: u32, sample: u32) -> bool {
    RequestArticlesConceptAggr::new(concepts, sample).is_ok()
}

#[test]
fn test_articles_other_bounds() {
    assert!(RequestArticlesUriWgtList::new(1, 100_000).is_ok());
    assert!(RequestArticlesKeywordAggr::new(None, 20_000).is_ok());
    assert_out_of_range(RequestArticlesKeywordAggr::new(None, 20_001));
    assert!(RequestArticlesSourceAggr::new(200).is_ok());
    assert_out_of_range(RequestArticlesSourceAggr::new(201));
    assert_out_of_range(RequestArticlesUriWgtList::new(0, 10));
    assert_out_of_range(RequestArticlesUriWgtList::new(1, 100_001));
}

#[test]
fn test_request_enum_dispatches_to_variant() {
    let request: RequestArticles = RequestArticlesSourceAggr::new(10).unwrap().into();
    pretty_assertions::assert_eq!(request.result_type(), "sourceAggr");
    pretty_assertions::assert_eq!(
        params_of(&request),
        json!({"resultType": "sourceAggr", "sourceAggrSourceCount": 10})
    );
}

// ============================================================================
// Return Info
// ============================================================================

#[test]
fn test_default_return_info_adds_nothing() {
    assert!(ReturnInfo::default().params("articles").is_empty());
    pretty_assertions::assert_eq!(
        params_of(&RequestArticlesCategoryAggr::default()),
        json!({"resultType": "categoryAggr"})
    );
}

#[test]
fn test_return_info_flags_are_prefixed() {
    let mut info = ReturnInfo::default();
    info.article_info.concepts = true;
    info.article_info.body_len = 300;
    info.concept_info.lang = vec!["eng".into(), "deu".into()];
    info.source_info.title = false;

    let request = RequestArticlesInfo::new(1, 10).unwrap().return_info(info);
    let params = request.params();
    pretty_assertions::assert_eq!(params["articlesIncludeArticleConcepts"], json!(true));
    pretty_assertions::assert_eq!(params["articlesArticleBodyLen"], json!(300));
    pretty_assertions::assert_eq!(params["articlesConceptLang"], json!(["eng", "deu"]));
    pretty_assertions::assert_eq!(params["articlesIncludeSourceTitle"], json!(false));
    assert!(!params.contains_key("articlesIncludeArticleTitle"));
}

#[test]
fn test_event_info_flags_on_aggregate() {
    let mut info = ReturnInfo::default();
    info.event_info.image_count = 2;
    info.concept_info.lang = vec!["slv".into()];

    let request = RequestEventsConceptAggr::default().return_info(info);
    let params = request.params();
    pretty_assertions::assert_eq!(params["conceptAggrEventImageCount"], json!(2));
    pretty_assertions::assert_eq!(params["conceptAggrConceptLang"], json!("slv"));
}
