//! Summary sizing, word cloud weights and keyword tag styling.

pub const SUMMARY_PERCENT_STEP: u8 = 10;
pub const MIN_WORD_FONT_PX: f64 = 14.0;
pub const MAX_WORD_FONT_PX: f64 = 48.0;

/// Rounds a slider value to the nearest step and clamps it to 0..=100.
pub fn normalize_summary_percent(percent: u8) -> u8 {
    let percent = percent.min(100);
    let step = SUMMARY_PERCENT_STEP;
    ((percent + step / 2) / step) * step
}

/// The leading share of summary sentences to show for a slider position.
///
/// Any non-zero percentage keeps at least one sentence.
pub fn summary_sentences(summary: &[String], percent: u8) -> &[String] {
    let percent = normalize_summary_percent(percent) as usize;
    if percent == 0 || summary.is_empty() {
        return &[];
    }
    let keep = (summary.len() * percent).div_ceil(100).max(1);
    &summary[..keep.min(summary.len())]
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedWord {
    pub word: String,
    pub count: f64,
    pub font_px: f64,
}

/// Scales counts linearly onto the font size range, largest first.
pub fn word_cloud(words: &[(String, f64)], limit: usize) -> Vec<WeightedWord> {
    let mut words: Vec<_> = words
        .iter()
        .filter(|(word, count)| !word.trim().is_empty() && count.is_finite() && *count > 0.0)
        .cloned()
        .collect();
    words.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(limit);

    let max = words.first().map(|(_, count)| *count).unwrap_or(0.0);
    let min = words.last().map(|(_, count)| *count).unwrap_or(0.0);
    let span = max - min;
    words
        .into_iter()
        .map(|(word, count)| {
            let ratio = if span > 0.0 { (count - min) / span } else { 1.0 };
            WeightedWord { word, count, font_px: (MIN_WORD_FONT_PX + ratio * (MAX_WORD_FONT_PX - MIN_WORD_FONT_PX)).round() }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagVariant {
    Primary,
    Neutral,
}

/// Keyword tags alternate between the two variants.
pub fn keyword_variant(index: usize) -> TagVariant {
    if index % 2 == 0 { TagVariant::Primary } else { TagVariant::Neutral }
}
