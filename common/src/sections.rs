//! Article body helpers: IMRAD routing and in-text reference markers.

use crate::article::{RefText, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImradKind {
    Introduction,
    Methods,
    Results,
    Discussion,
    Conclusions,
}

impl ImradKind {
    pub const ALL: [ImradKind; 5] =
        [Self::Introduction, Self::Methods, Self::Results, Self::Discussion, Self::Conclusions];

    /// Matches a section heading, ignoring case, numbering and trailing punctuation.
    pub fn from_title(title: &str) -> Option<Self> {
        let title = title
            .trim()
            .trim_start_matches(|c: char| c.is_ascii_digit() || c == '.' || c.is_whitespace())
            .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
            .to_lowercase();
        match title.as_str() {
            "introduction" => Some(Self::Introduction),
            "method" | "methods" | "methodology" | "materials and methods" => Some(Self::Methods),
            "result" | "results" => Some(Self::Results),
            "discussion" | "results and discussion" => Some(Self::Discussion),
            "conclusion" | "conclusions" => Some(Self::Conclusions),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Introduction => "Introduction",
            Self::Methods => "Methods",
            Self::Results => "Results",
            Self::Discussion => "Discussion",
            Self::Conclusions => "Conclusions",
        }
    }
}

/// Groups the sections that have an IMRAD heading, keeping article order inside each group.
pub fn imrad_sections(sections: &[Section]) -> Vec<(ImradKind, Vec<&Section>)> {
    ImradKind::ALL
        .into_iter()
        .map(|kind| {
            let matching = sections
                .iter()
                .filter(|section| ImradKind::from_title(&section.title) == Some(kind))
                .collect::<Vec<_>>();
            (kind, matching)
        })
        .filter(|(_, matching)| !matching.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    Plain(String),
    Reference { text: String, target: String },
}

/// Splits a paragraph around its reference markers.
///
/// Offsets count characters. Markers without a target, out of bounds, or
/// overlapping an earlier marker stay plain text.
pub fn split_ref_text(ref_text: &RefText) -> Vec<TextSegment> {
    let chars: Vec<char> = ref_text.text.chars().collect();
    let mut refs: Vec<_> = ref_text
        .refs
        .iter()
        .filter(|r| r.start < r.end && r.end <= chars.len())
        .filter_map(|r| r.target.as_ref().filter(|t| !t.is_empty()).map(|target| (r.start, r.end, target)))
        .collect();
    refs.sort_by_key(|(start, _, _)| *start);

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end, target) in refs {
        if start < cursor {
            continue;
        }
        if start > cursor {
            segments.push(TextSegment::Plain(chars[cursor..start].iter().collect()));
        }
        segments.push(TextSegment::Reference {
            text: chars[start..end].iter().collect(),
            target: target.trim_start_matches('#').to_string(),
        });
        cursor = end;
    }
    if cursor < chars.len() {
        segments.push(TextSegment::Plain(chars[cursor..].iter().collect()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::Ref;

    fn reference(start: usize, end: usize, target: Option<&str>) -> Ref {
        Ref { start, end, target: target.map(str::to_string), kind: Some("bibr".into()) }
    }

    #[test]
    fn headings_are_normalised() {
        assert_eq!(ImradKind::from_title("1. Introduction"), Some(ImradKind::Introduction));
        assert_eq!(ImradKind::from_title("METHODS:"), Some(ImradKind::Methods));
        assert_eq!(ImradKind::from_title("Conclusions"), Some(ImradKind::Conclusions));
        assert_eq!(ImradKind::from_title("Related Work"), None);
    }

    #[test]
    fn groups_keep_order() {
        let sections = vec![
            Section { title: "Results".into(), paragraphs: vec![] },
            Section { title: "Introduction".into(), paragraphs: vec![] },
            Section { title: "Appendix".into(), paragraphs: vec![] },
        ];
        let groups = imrad_sections(&sections);
        assert_eq!(groups.iter().map(|(kind, _)| *kind).collect::<Vec<_>>(), vec![ImradKind::Introduction, ImradKind::Results]);
    }

    #[test]
    fn splits_around_references() {
        let text = RefText {
            text: "As shown in [1] and [2], it works.".into(),
            refs: vec![reference(20, 23, Some("#b1")), reference(12, 15, Some("#b0"))],
        };
        assert_eq!(
            split_ref_text(&text),
            vec![
                TextSegment::Plain("As shown in ".into()),
                TextSegment::Reference { text: "[1]".into(), target: "b0".into() },
                TextSegment::Plain(" and ".into()),
                TextSegment::Reference { text: "[2]".into(), target: "b1".into() },
                TextSegment::Plain(", it works.".into()),
            ]
        );
    }

    #[test]
    fn offsets_count_characters() {
        let text = RefText { text: "Über [1]".into(), refs: vec![reference(5, 8, Some("b0"))] };
        assert_eq!(split_ref_text(&text)[1], TextSegment::Reference { text: "[1]".into(), target: "b0".into() });
    }

    #[test]
    fn invalid_markers_stay_plain() {
        let text = RefText {
            text: "abc".into(),
            refs: vec![reference(1, 9, Some("b0")), reference(0, 1, None), reference(2, 2, Some("b1"))],
        };
        assert_eq!(split_ref_text(&text), vec![TextSegment::Plain("abc".into())]);
    }
}
