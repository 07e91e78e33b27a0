//! MLA-8 style formatting of citation records.

use std::collections::BTreeMap;

use crate::article::Citation;
use crate::author::{DEFAULT_AUTHOR_CUTOFF, full_names, truncate_authors};

const DOI_RESOLVER: &str = "https://doi.org/";
const ARXIV_RESOLVER: &str = "https://arxiv.org/abs/";
const GOOGLE_SCHOLAR_QUERY: &str = "https://scholar.google.co.uk/scholar?q=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdKind {
    Doi,
    Arxiv,
}

impl IdKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doi => "DOI",
            Self::Arxiv => "arXiv",
        }
    }
}

/// An identifier resolved to an external link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdLink {
    pub kind: IdKind,
    pub id: String,
    pub url: String,
}

/// Read-only formatter over a citation.
#[derive(Debug, Clone, Copy)]
pub struct Mla8Citation<'a> {
    citation: &'a Citation,
}

impl<'a> Mla8Citation<'a> {
    pub fn new(citation: &'a Citation) -> Self {
        Self { citation }
    }

    pub fn title(&self) -> &'a str {
        &self.citation.title
    }

    pub fn authors(&self) -> Vec<String> {
        full_names(&self.citation.authors)
    }

    /// Author names as shown in an entry, truncated after three names.
    pub fn display_name(&self) -> String {
        truncate_authors(&self.authors(), DEFAULT_AUTHOR_CUTOFF).join(", ")
    }

    pub fn publisher(&self) -> &'a str {
        self.citation.publisher.as_deref().unwrap_or("")
    }

    pub fn journal(&self) -> &'a str {
        self.citation.journal.as_deref().unwrap_or("")
    }

    pub fn series(&self) -> &'a str {
        self.citation.series.as_deref().unwrap_or("")
    }

    pub fn target(&self) -> &'a str {
        self.citation.target.as_deref().unwrap_or("")
    }

    pub fn pages(&self) -> String {
        let Some(pages) = self.citation.scope.as_ref().and_then(|scope| scope.pages) else {
            return String::new();
        };
        if pages.from_page == pages.to_page {
            format!("p. {}.", pages.to_page)
        } else {
            format!("pp. {}-{}.", pages.from_page, pages.to_page)
        }
    }

    pub fn volume(&self) -> String {
        match self.citation.scope.as_ref().and_then(|scope| scope.volume) {
            Some(volume) => format!("vol. {volume}"),
            None => String::new(),
        }
    }

    pub fn date(&self) -> String {
        let Some(date) = self.citation.date.as_ref() else {
            return String::new();
        };
        let parts = [&date.year, &date.month, &date.day]
            .into_iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>();
        if parts.is_empty() {
            return String::new();
        }
        format!("{}.", parts.join(" "))
    }

    /// The entry split around the italic journal, as plain text.
    pub fn entry_text(&self) -> EntryText {
        let join = |parts: [String; 2]| parts.into_iter().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ");
        EntryText {
            lead: join([self.display_name(), self.title().to_string()]),
            journal: self.journal().to_string(),
            tail: join([self.date(), self.pages()]),
        }
    }

    /// Authors, title, italic journal, date and pages. Fields are inserted unescaped.
    pub fn entry_html(&self) -> String {
        let EntryText { lead, journal, tail } = self.entry_text();
        let journal = if journal.is_empty() { String::new() } else { format!("<i>{journal}</i>") };
        [lead, journal, tail].into_iter().filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
    }

    /// Links for the supported identifier kinds, DOI first.
    pub fn ids(&self) -> Vec<IdLink> {
        let Some(ids) = self.citation.ids.as_ref() else {
            return vec![];
        };
        let mut links = Vec::new();
        if let Some(doi) = ids.doi.as_deref().filter(|id| !id.is_empty()) {
            links.push(IdLink { kind: IdKind::Doi, id: doi.to_string(), url: format!("{DOI_RESOLVER}{doi}") });
        }
        if let Some(arxiv) = ids.arxiv.as_deref().filter(|id| !id.is_empty()) {
            links.push(IdLink { kind: IdKind::Arxiv, id: arxiv.to_string(), url: format!("{ARXIV_RESOLVER}{arxiv}") });
        }
        links
    }

    pub fn ids_by_name(&self) -> BTreeMap<&'static str, String> {
        self.ids().into_iter().map(|link| (link.kind.label(), link.url)).collect()
    }

    pub fn google_scholar_url(&self) -> String {
        let query = format!(
            "{} \"{}\". {} {} {}",
            self.authors().join(", "),
            self.title(),
            self.journal(),
            self.volume(),
            self.date()
        );
        format!("{GOOGLE_SCHOLAR_QUERY}{}", urlencoding::encode(query.trim()))
    }
}

/// Authors and title, journal, then date and pages. Empty parts are empty strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryText {
    pub lead: String,
    pub journal: String,
    pub tail: String,
}

/// One formatted entry of the reference list.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceEntry {
    pub ref_id: String,
    pub entry: EntryText,
    pub target: Option<String>,
    pub ids: Vec<IdLink>,
    pub google_scholar_url: String,
}

pub fn reference_list(citations: &BTreeMap<String, Citation>) -> Vec<ReferenceEntry> {
    citations
        .iter()
        .map(|(ref_id, citation)| {
            let mla = Mla8Citation::new(citation);
            let target = mla.target();
            ReferenceEntry {
                ref_id: ref_id.clone(),
                entry: mla.entry_text(),
                target: (!target.is_empty()).then(|| target.to_string()),
                ids: mla.ids(),
                google_scholar_url: mla.google_scholar_url(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::{Author, CitationIds, Date, PageRange, PersonName, Scope};

    fn with_pages(from_page: u32, to_page: u32) -> Citation {
        Citation {
            scope: Some(Scope { volume: None, pages: Some(PageRange { from_page, to_page }) }),
            ..Citation::titled("T")
        }
    }

    fn author(first: &str, last: &str) -> Author {
        Author { person_name: PersonName::new(first, last), affiliations: vec![], email: None }
    }

    #[test]
    fn single_page_uses_p() {
        assert_eq!(Mla8Citation::new(&with_pages(5, 5)).pages(), "p. 5.");
    }

    #[test]
    fn page_range_uses_pp() {
        assert_eq!(Mla8Citation::new(&with_pages(5, 9)).pages(), "pp. 5-9.");
    }

    #[test]
    fn missing_scope_has_no_pages_or_volume() {
        let citation = Citation::titled("T");
        let mla = Mla8Citation::new(&citation);
        assert_eq!(mla.pages(), "");
        assert_eq!(mla.volume(), "");
    }

    #[test]
    fn volume_is_prefixed() {
        let citation = Citation { scope: Some(Scope { volume: Some(12), pages: None }), ..Citation::titled("T") };
        assert_eq!(Mla8Citation::new(&citation).volume(), "vol. 12");
        assert_eq!(Mla8Citation::new(&citation).pages(), "");
    }

    #[test]
    fn date_joins_present_parts() {
        let mut citation = Citation::titled("T");
        citation.date = Some(Date { year: Some("2019".into()), month: None, day: Some("4".into()) });
        assert_eq!(Mla8Citation::new(&citation).date(), "2019 4.");
        citation.date = Some(Date::default());
        assert_eq!(Mla8Citation::new(&citation).date(), "");
    }

    #[test]
    fn entry_orders_fields() {
        let mut citation = with_pages(1, 10);
        citation.title = "Attention Is All You Need".into();
        citation.journal = Some("NeurIPS".into());
        citation.date = Some(Date { year: Some("2017".into()), ..Date::default() });
        citation.authors = vec![author("Ashish", "Vaswani"), author("Noam", "Shazeer"), author("Niki", "Parmar"), author("Jakob", "Uszkoreit")];
        assert_eq!(
            Mla8Citation::new(&citation).entry_html(),
            "Ashish Vaswani, Noam Shazeer, Niki Parmar, et al. Attention Is All You Need <i>NeurIPS</i> 2017. pp. 1-10."
        );
    }

    #[test]
    fn ids_resolve_supported_kinds() {
        let mut citation = Citation::titled("T");
        citation.ids = Some(CitationIds { doi: Some("10.1000/182".into()), arxiv: Some("1706.03762".into()) });
        let mla = Mla8Citation::new(&citation);
        let ids = mla.ids_by_name();
        assert_eq!(ids["DOI"], "https://doi.org/10.1000/182");
        assert_eq!(ids["arXiv"], "https://arxiv.org/abs/1706.03762");
        assert_eq!(mla.ids()[0].kind, IdKind::Doi);
    }

    #[test]
    fn scholar_link_is_encoded() {
        let mut citation = Citation::titled("A B");
        citation.authors = vec![author("Ada", "Lovelace")];
        let url = Mla8Citation::new(&citation).google_scholar_url();
        assert!(url.starts_with("https://scholar.google.co.uk/scholar?q=Ada%20Lovelace%20%22A%20B%22."));
    }

    #[test]
    fn reference_list_keeps_ref_ids() {
        let mut citations = BTreeMap::new();
        citations.insert("b1".to_string(), Citation { target: Some("https://example.org".into()), ..Citation::titled("Second") });
        citations.insert("b0".to_string(), Citation::titled("First"));
        let entries = reference_list(&citations);
        assert_eq!(entries[0].ref_id, "b0");
        assert_eq!(entries[0].target, None);
        assert_eq!(entries[1].target.as_deref(), Some("https://example.org"));
    }

    #[test]
    fn entry_text_keeps_markup_out_of_the_journal_slot() {
        let mut citation = with_pages(3, 3);
        citation.title = "<img src=x onerror=alert(1)>".into();
        citation.journal = Some("J".into());
        let entry = Mla8Citation::new(&citation).entry_text();
        assert_eq!(entry.lead, "<img src=x onerror=alert(1)>");
        assert_eq!(entry.journal, "J");
        assert_eq!(entry.tail, "p. 3.");

        let mut citations = BTreeMap::new();
        citations.insert("b0".to_string(), citation);
        assert_eq!(reference_list(&citations)[0].entry, entry);
    }
}
