//! Author name helpers.

use crate::article::{Author, PersonName};

pub const TRUNCATION_MARKER: &str = "et al.";
pub const DEFAULT_AUTHOR_CUTOFF: usize = 3;

/// Keeps the first `n` names followed by a single [`TRUNCATION_MARKER`].
///
/// A cutoff of zero or a single-author list is returned unchanged.
pub fn truncate_authors(authors: &[String], n: usize) -> Vec<String> {
    if n == 0 || authors.len() == 1 || authors.len() <= n {
        return authors.to_vec();
    }
    let mut truncated: Vec<String> = authors[..n].to_vec();
    truncated.push(TRUNCATION_MARKER.to_string());
    truncated
}

pub fn full_name(person_name: &PersonName) -> String {
    let first_name = person_name.first_name.as_deref().unwrap_or("").trim();
    let surname = person_name.surname.as_deref().unwrap_or("").trim();
    format!("{first_name} {surname}").trim().to_string()
}

/// "Surname, First" as shown in the article header.
pub fn citation_name(person_name: &PersonName) -> String {
    let first_name = person_name.first_name.as_deref().unwrap_or("").trim();
    let surname = person_name.surname.as_deref().unwrap_or("").trim();
    match (surname.is_empty(), first_name.is_empty()) {
        (false, false) => format!("{surname}, {first_name}"),
        (false, true) => surname.to_string(),
        (true, _) => first_name.to_string(),
    }
}

pub fn full_names(authors: &[Author]) -> Vec<String> {
    authors
        .iter()
        .map(|author| full_name(&author.person_name))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Data shown in the author dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDetails {
    pub full_name: String,
    pub email: Option<String>,
    /// One entry per affiliation, ordered laboratory, department, institution.
    pub affiliations: Vec<Vec<String>>,
}

impl AuthorDetails {
    pub fn from_author(author: &Author) -> Self {
        let affiliations = author
            .affiliations
            .iter()
            .map(|affiliation| {
                [&affiliation.laboratory, &affiliation.department, &affiliation.institution]
                    .into_iter()
                    .flatten()
                    .filter(|part| !part.trim().is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .filter(|parts| !parts.is_empty())
            .collect();
        Self {
            full_name: full_name(&author.person_name),
            email: author.email.clone().filter(|email| !email.trim().is_empty()),
            affiliations,
        }
    }

    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{email}"))
    }
}
