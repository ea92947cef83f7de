//! Tests for search requests

use super::*;
use crate::error::Error;
use crate::query::{
    ArticleFilter, BaseQuery, ComplexArticleQuery, ComplexEventQuery, Field, QueryItems,
};
use crate::request::{RequestEventsConceptAggr, RequestEventsTimeAggr};
use crate::types::{DataType, KeywordLoc};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Event Searches
// ============================================================================

#[test]
fn test_default_event_search_payload() {
    let query = QueryEvents::default();
    assert_eq!(query.path(), "/json/event");
    assert_eq!(
        Value::Object(query.payload()),
        json!({
            "action": "getEvents",
            "resultType": "events",
            "eventsPage": 1,
            "eventsCount": 50,
            "eventsSortBy": "rel",
            "eventsSortByAsc": false
        })
    );
}

#[test]
fn test_event_search_flat_conditions() {
    let filters = SearchFilters::new()
        .condition(Field::Keyword, "Obama")
        .condition(Field::ConceptUri, QueryItems::or(["c/Apple", "c/Samsung"]))
        .condition(Field::Lang, QueryItems::or(["eng", "deu"]))
        .ignore(Field::SourceUri, QueryItems::or(["bbc.co.uk", "cnn.com"]))
        .date_start(date(2017, 2, 5))
        .date_mention_end(date(2017, 3, 1))
        .keyword_loc(KeywordLoc::Title);
    let query = QueryEvents::new(filters)
        .min_articles_in_event(10)
        .unwrap()
        .max_articles_in_event(500)
        .unwrap();

    assert_eq!(
        Value::Object(query.params()),
        json!({
            "action": "getEvents",
            "keyword": "Obama",
            "conceptUri": ["c/Apple", "c/Samsung"],
            "conceptOper": "or",
            "lang": ["eng", "deu"],
            "ignoreSourceUri": ["bbc.co.uk", "cnn.com"],
            "dateStart": "2017-02-05",
            "dateMentionEnd": "2017-03-01",
            "keywordLoc": "title",
            "minArticlesInEvent": 10,
            "maxArticlesInEvent": 500
        })
    );
}

#[test]
fn test_default_valued_fields_are_omitted() {
    let query = QueryEvents::new(
        SearchFilters::new()
            .condition(Field::Keyword, "x")
            .keyword_loc(KeywordLoc::Body)
            .ignore_keyword_loc(KeywordLoc::Body),
    )
    .min_articles_in_event(0)
    .unwrap();
    assert_eq!(
        Value::Object(query.params()),
        json!({"action": "getEvents", "keyword": "x"})
    );
}

#[test]
fn test_set_requested_result_replaces_previous() {
    let mut query = QueryEvents::default();
    query.set_requested_result(RequestEventsConceptAggr::default());
    query.set_requested_result(RequestEventsTimeAggr);

    let payload = query.payload();
    assert_eq!(payload["resultType"], json!("timeAggr"));
    assert!(payload.keys().all(|key| !key.starts_with("events")));
    assert!(payload.keys().all(|key| !key.starts_with("conceptAggr")));
}

#[test]
fn test_event_uri_list_has_no_query_fields() {
    let query = QueryEvents::with_event_uri_list(["e-1", "e-2", "e-3"])
        .requested_result(RequestEventsTimeAggr);
    assert_eq!(
        Value::Object(query.payload()),
        json!({
            "action": "getEvents",
            "eventUriList": "e-1,e-2,e-3",
            "resultType": "timeAggr"
        })
    );
}

#[test]
fn test_event_size_limits_conflict_with_uri_list() {
    let err = QueryEvents::with_event_uri_list(["e-1"])
        .min_articles_in_event(5)
        .unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(
        err,
        Error::MutuallyExclusive { ref first, ref second }
            if first == "minArticlesInEvent" && second == "eventUriList"
    ));

    let err = QueryEvents::with_complex_query_str(r#"{"$query": {"keyword": "x"}}"#)
        .unwrap()
        .max_articles_in_event(100)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MutuallyExclusive { ref first, ref second }
            if first == "maxArticlesInEvent" && second == "query"
    ));
}

#[test]
fn test_event_uri_wgt_list() {
    let query =
        QueryEvents::with_event_uri_wgt_list(vec!["e-1:40".to_string(), "e-2:12".to_string()]);
    let params = query.params();
    assert_eq!(params["eventUriWgtList"], json!("e-1:40,e-2:12"));
    assert!(!params.contains_key("query"));
}

#[test]
fn test_event_complex_query_is_sent_as_string() {
    let complex = ComplexEventQuery::new(BaseQuery::new().concept_uri("c/Brexit"));
    let query = QueryEvents::with_complex_query(&complex);
    let params = query.params();

    let text = params["query"].as_str().unwrap();
    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed, json!({"$query": {"conceptUri": "c/Brexit"}}));
    assert!(!params.contains_key("conceptUri"));
}

#[test]
fn test_complex_query_from_text_and_value() {
    let text = r#"{"$query": {"keyword": "Tesla"}}"#;
    let query = QueryEvents::with_complex_query_str(text).unwrap();
    assert_eq!(query.params()["query"], json!(text));

    let err = QueryEvents::with_complex_query_str("{not json").unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { .. }));

    let query =
        QueryArticles::with_complex_query_value(&json!({"$query": {"lang": "eng"}})).unwrap();
    let parsed: Value = serde_json::from_str(query.params()["query"].as_str().unwrap()).unwrap();
    assert_eq!(parsed, json!({"$query": {"lang": "eng"}}));

    let err = QueryArticles::with_complex_query_value(&json!(["a"])).unwrap_err();
    assert!(matches!(err, Error::InvalidParameterType { .. }));
}

// ============================================================================
// Article Searches
// ============================================================================

#[test]
fn test_article_search_with_filter() {
    let query = QueryArticles::new(
        SearchFilters::new()
            .condition(Field::ConceptUri, "http://en.wikipedia.org/wiki/Amazon_(company)"),
    )
    .article_filter(
        ArticleFilter::new()
            .data_types(vec![DataType::News, DataType::Pr])
            .source_rank_percentile(0, 20),
    )
    .unwrap();

    assert_eq!(query.path(), "/json/article");
    assert_eq!(
        Value::Object(query.params()),
        json!({
            "action": "getArticles",
            "conceptUri": "http://en.wikipedia.org/wiki/Amazon_(company)",
            "dataType": ["news", "pr"],
            "endSourceRankPercentile": 20
        })
    );
}

#[test]
fn test_article_filter_is_validated() {
    let err = QueryArticles::default()
        .article_filter(ArticleFilter::new().source_rank_percentile(25, 100))
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_article_filter_conflicts_with_uri_list_and_complex_query() {
    let filter = ArticleFilter::new().sentiment(Some(0.5), None);

    let err = QueryArticles::with_article_uri_list(["a-1"])
        .article_filter(filter.clone())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MutuallyExclusive { ref second, .. } if second == "articleUri"
    ));

    let complex = ComplexArticleQuery::unfiltered(BaseQuery::new().keyword("x"));
    let err = QueryArticles::with_complex_query(&complex)
        .article_filter(filter)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MutuallyExclusive { ref second, .. } if second == "query"
    ));
}

#[test]
fn test_article_uri_list() {
    let query = QueryArticles::with_article_uri_list(["1001", "1002"]);
    assert_eq!(
        Value::Object(query.params()),
        json!({"action": "getArticles", "articleUri": ["1001", "1002"]})
    );
}

#[test]
fn test_article_complex_query() {
    let complex = ComplexArticleQuery::unfiltered(BaseQuery::new().keyword("x"));
    let query = QueryArticles::with_complex_query(&complex);
    let parsed: Value = serde_json::from_str(query.params()["query"].as_str().unwrap()).unwrap();
    assert_eq!(parsed, json!({"$query": {"keyword": "x"}}));
}
