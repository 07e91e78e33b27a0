//! Article models returned by the parsing API.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A parsed journal article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub bibliography: Citation,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub citations: BTreeMap<String, Citation>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub tables: BTreeMap<String, Table>,
    #[serde(default)]
    pub r#abstract: Option<Section>,
}

/// Represents a `<biblStruct>` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub ids: Option<CitationIds>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub scope: Option<Scope>,
}

impl Citation {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: vec![],
            date: None,
            ids: None,
            target: None,
            publisher: None,
            journal: None,
            series: None,
            scope: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub person_name: PersonName,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliations: Vec<Affiliation>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonName {
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

impl PersonName {
    pub fn new(first_name: &str, surname: &str) -> Self {
        Self { surname: Some(surname.to_string()), first_name: Some(first_name.to_string()) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Affiliation {
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub laboratory: Option<String>,
}

/// The `when` attribute of a `<date/>` tag, split into parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Date {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CitationIds {
    #[serde(default, alias = "DOI")]
    pub doi: Option<String>,
    #[serde(default, alias = "arXiv")]
    pub arxiv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Scope {
    #[serde(default)]
    pub volume: Option<u32>,
    #[serde(default)]
    pub pages: Option<PageRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub from_page: u32,
    pub to_page: u32,
}

/// A titled `<div>` of the article body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub paragraphs: Vec<RefText>,
}

/// A paragraph with embedded `<ref>` markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefText {
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub refs: Vec<Ref>,
}

/// Character offsets of a reference marker inside [`RefText::text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ref {
    pub start: usize,
    pub end: usize,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default, rename = "type", alias = "type_")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub heading: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rows: Vec<Vec<String>>,
}

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub article: Article,
    #[serde(default, deserialize_with = "ranked_terms")]
    pub common_words: Vec<(String, f64)>,
    #[serde(default, deserialize_with = "ranked_terms")]
    pub phrase_ranks: Vec<(String, f64)>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// The API sends `[[term, count], ...]`, but falls back to an empty object when
// there is nothing to rank.
fn ranked_terms<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RankedTerms {
        Pairs(Vec<(String, f64)>),
        Map(BTreeMap<String, f64>),
    }

    Ok(match Option::<RankedTerms>::deserialize(deserializer)? {
        Some(RankedTerms::Pairs(pairs)) => pairs,
        Some(RankedTerms::Map(map)) => {
            let mut pairs: Vec<(String, f64)> = map.into_iter().collect();
            pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
            pairs
        }
        None => vec![],
    })
}
