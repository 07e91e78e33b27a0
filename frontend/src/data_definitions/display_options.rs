//! Reader settings for the display page, kept in the URL.

use common::summary::normalize_summary_percent;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub summary_percent: u8,
    pub show_pdf: bool,
    pub show_tables: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { summary_percent: 100, show_pdf: true, show_tables: false }
    }
}

impl DisplayOptions {
    pub fn with_summary_percent(self, percent: u8) -> Self {
        Self { summary_percent: normalize_summary_percent(percent), ..self }
    }

    pub fn with_show_pdf(self, show_pdf: bool) -> Self {
        Self { show_pdf, ..self }
    }

    pub fn with_show_tables(self, show_tables: bool) -> Self {
        Self { show_tables, ..self }
    }

    /// Text of the `sos-lbl` label.
    pub fn summary_label(&self) -> String {
        format!("Size of Summary: {}%", self.summary_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_definitions::url_param::UrlParam;

    #[test]
    fn bare_display_route_uses_defaults() {
        let parsed: UrlParam<DisplayOptions> = "".parse().unwrap();
        assert_eq!(parsed.0, DisplayOptions::default());
        assert_eq!(parsed.summary_label(), "Size of Summary: 100%");
    }

    #[test]
    fn options_survive_the_url() {
        let options = DisplayOptions::default().with_summary_percent(34).with_show_pdf(false).with_show_tables(true);
        assert_eq!(options.summary_percent, 30);

        let encoded = UrlParam(options).to_string();
        assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || "-_=".contains(c)));
        let decoded: UrlParam<DisplayOptions> = encoded.parse().unwrap();
        assert_eq!(decoded.0, options);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!("not*base64".parse::<UrlParam<DisplayOptions>>().is_err());
        assert!("AAAA".parse::<UrlParam<DisplayOptions>>().is_err());
    }
}
