//! Shared return options
//!
//! `ReturnInfo` selects which details the service includes for each entity
//! kind in a result. It is merged into a result request explicitly: only
//! flags that differ from their default are copied, each prefixed with the
//! facet name (`articlesIncludeArticleConcepts`, `conceptAggrConceptLang`, ...).

use crate::types::{JsonObject, JsonValue};
use serde_json::json;

/// Collects `(key, value)` pairs for flags that differ from their default
#[derive(Default)]
struct Flags(Vec<(&'static str, JsonValue)>);

impl Flags {
    fn bool(&mut self, key: &'static str, value: bool, default: bool) {
        if value != default {
            self.0.push((key, json!(value)));
        }
    }

    fn int(&mut self, key: &'static str, value: i64, default: i64) {
        if value != default {
            self.0.push((key, json!(value)));
        }
    }
}

/// Article details to include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleInfoFlags {
    /// Characters of body to return (-1 for the full body)
    pub body_len: i64,
    pub basic_info: bool,
    pub title: bool,
    pub body: bool,
    pub url: bool,
    pub event_uri: bool,
    pub authors: bool,
    pub concepts: bool,
    pub categories: bool,
    pub links: bool,
    pub videos: bool,
    pub image: bool,
    pub social_score: bool,
    pub sentiment: bool,
    pub location: bool,
    pub dates: bool,
    pub extracted_dates: bool,
    pub duplicate_list: bool,
    pub original_article: bool,
    pub story_uri: bool,
}

impl Default for ArticleInfoFlags {
    fn default() -> Self {
        Self {
            body_len: -1,
            basic_info: true,
            title: true,
            body: true,
            url: true,
            event_uri: true,
            authors: true,
            concepts: false,
            categories: false,
            links: false,
            videos: false,
            image: true,
            social_score: false,
            sentiment: true,
            location: false,
            dates: false,
            extracted_dates: false,
            duplicate_list: false,
            original_article: false,
            story_uri: false,
        }
    }
}

impl ArticleInfoFlags {
    fn collect(&self, flags: &mut Flags) {
        flags.int("articleBodyLen", self.body_len, -1);
        flags.bool("includeArticleBasicInfo", self.basic_info, true);
        flags.bool("includeArticleTitle", self.title, true);
        flags.bool("includeArticleBody", self.body, true);
        flags.bool("includeArticleUrl", self.url, true);
        flags.bool("includeArticleEventUri", self.event_uri, true);
        flags.bool("includeArticleAuthors", self.authors, true);
        flags.bool("includeArticleConcepts", self.concepts, false);
        flags.bool("includeArticleCategories", self.categories, false);
        flags.bool("includeArticleLinks", self.links, false);
        flags.bool("includeArticleVideos", self.videos, false);
        flags.bool("includeArticleImage", self.image, true);
        flags.bool("includeArticleSocialScore", self.social_score, false);
        flags.bool("includeArticleSentiment", self.sentiment, true);
        flags.bool("includeArticleLocation", self.location, false);
        flags.bool("includeArticleDates", self.dates, false);
        flags.bool("includeArticleExtractedDates", self.extracted_dates, false);
        flags.bool("includeArticleDuplicateList", self.duplicate_list, false);
        flags.bool("includeArticleOriginalArticle", self.original_article, false);
        flags.bool("includeArticleStoryUri", self.story_uri, false);
    }
}

/// Event details to include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInfoFlags {
    pub title: bool,
    pub summary: bool,
    pub article_counts: bool,
    pub concepts: bool,
    pub categories: bool,
    pub location: bool,
    pub date: bool,
    pub common_dates: bool,
    pub info_article: bool,
    pub stories: bool,
    pub social_score: bool,
    /// Number of images to return per event
    pub image_count: i64,
}

impl Default for EventInfoFlags {
    fn default() -> Self {
        Self {
            title: true,
            summary: true,
            article_counts: true,
            concepts: true,
            categories: true,
            location: true,
            date: true,
            common_dates: false,
            info_article: false,
            stories: false,
            social_score: false,
            image_count: 0,
        }
    }
}

impl EventInfoFlags {
    fn collect(&self, flags: &mut Flags) {
        flags.bool("includeEventTitle", self.title, true);
        flags.bool("includeEventSummary", self.summary, true);
        flags.bool("includeEventArticleCounts", self.article_counts, true);
        flags.bool("includeEventConcepts", self.concepts, true);
        flags.bool("includeEventCategories", self.categories, true);
        flags.bool("includeEventLocation", self.location, true);
        flags.bool("includeEventDate", self.date, true);
        flags.bool("includeEventCommonDates", self.common_dates, false);
        flags.bool("includeEventInfoArticle", self.info_article, false);
        flags.bool("includeEventStories", self.stories, false);
        flags.bool("includeEventSocialScore", self.social_score, false);
        flags.int("eventImageCount", self.image_count, 0);
    }
}

/// Concept details to include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptInfoFlags {
    /// Languages of concept labels
    pub lang: Vec<String>,
    pub label: bool,
    pub synonyms: bool,
    pub image: bool,
    pub description: bool,
    pub trending_score: bool,
    pub max_concepts_per_type: i64,
}

impl Default for ConceptInfoFlags {
    fn default() -> Self {
        Self {
            lang: vec!["eng".to_string()],
            label: true,
            synonyms: false,
            image: false,
            description: false,
            trending_score: false,
            max_concepts_per_type: 20,
        }
    }
}

impl ConceptInfoFlags {
    fn collect(&self, flags: &mut Flags) {
        match self.lang.as_slice() {
            [lang] if lang == "eng" => {}
            [lang] => flags.0.push(("conceptLang", json!(lang))),
            langs => flags.0.push(("conceptLang", json!(langs))),
        }
        flags.bool("includeConceptLabel", self.label, true);
        flags.bool("includeConceptSynonyms", self.synonyms, false);
        flags.bool("includeConceptImage", self.image, false);
        flags.bool("includeConceptDescription", self.description, false);
        flags.bool("includeConceptTrendingScore", self.trending_score, false);
        flags.int("maxConceptsPerType", self.max_concepts_per_type, 20);
    }
}

/// Location details to include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationInfoFlags {
    pub label: bool,
    pub wiki_uri: bool,
    pub geo_names_id: bool,
    pub population: bool,
    pub geo_location: bool,
}

impl Default for LocationInfoFlags {
    fn default() -> Self {
        Self {
            label: true,
            wiki_uri: false,
            geo_names_id: false,
            population: false,
            geo_location: false,
        }
    }
}

impl LocationInfoFlags {
    fn collect(&self, flags: &mut Flags) {
        flags.bool("includeLocationLabel", self.label, true);
        flags.bool("includeLocationWikiUri", self.wiki_uri, false);
        flags.bool("includeLocationGeoNamesId", self.geo_names_id, false);
        flags.bool("includeLocationPopulation", self.population, false);
        flags.bool("includeLocationGeoLocation", self.geo_location, false);
    }
}

/// Category details to include
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryInfoFlags {
    pub parent_uri: bool,
    pub child_uris: bool,
    pub trending_score: bool,
}

impl CategoryInfoFlags {
    fn collect(&self, flags: &mut Flags) {
        flags.bool("includeCategoryParentUri", self.parent_uri, false);
        flags.bool("includeCategoryChildrenUris", self.child_uris, false);
        flags.bool("includeCategoryTrendingScore", self.trending_score, false);
    }
}

/// News source details to include
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfoFlags {
    pub title: bool,
    pub description: bool,
    pub location: bool,
    pub ranking: bool,
    pub image: bool,
    pub social_media: bool,
}

impl Default for SourceInfoFlags {
    fn default() -> Self {
        Self {
            title: true,
            description: false,
            location: false,
            ranking: false,
            image: false,
            social_media: false,
        }
    }
}

impl SourceInfoFlags {
    fn collect(&self, flags: &mut Flags) {
        flags.bool("includeSourceTitle", self.title, true);
        flags.bool("includeSourceDescription", self.description, false);
        flags.bool("includeSourceLocation", self.location, false);
        flags.bool("includeSourceRanking", self.ranking, false);
        flags.bool("includeSourceImage", self.image, false);
        flags.bool("includeSourceSocialMedia", self.social_media, false);
    }
}

/// Details to return for every entity kind in a result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnInfo {
    pub article_info: ArticleInfoFlags,
    pub event_info: EventInfoFlags,
    pub concept_info: ConceptInfoFlags,
    pub location_info: LocationInfoFlags,
    pub category_info: CategoryInfoFlags,
    pub source_info: SourceInfoFlags,
}

impl ReturnInfo {
    /// Non-default flags as request parameters, keyed `<prefix><Flag>`
    pub fn params(&self, prefix: &str) -> JsonObject {
        let mut flags = Flags::default();
        self.article_info.collect(&mut flags);
        self.event_info.collect(&mut flags);
        self.concept_info.collect(&mut flags);
        self.location_info.collect(&mut flags);
        self.category_info.collect(&mut flags);
        self.source_info.collect(&mut flags);

        flags
            .0
            .into_iter()
            .map(|(key, value)| (prefixed(prefix, key), value))
            .collect()
    }
}

/// `prefix` + `key` with the first letter of `key` upper-cased
pub(crate) fn prefixed(prefix: &str, key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if !prefix.is_empty() => {
            format!("{prefix}{}{}", first.to_ascii_uppercase(), chars.as_str())
        }
        _ => key.to_string(),
    }
}
