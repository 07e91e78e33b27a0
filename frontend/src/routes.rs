use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::display_options::DisplayOptions;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::display_page::DisplayPage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::upload_page::UploadPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    UploadPage {},


    #[route("/display?:options")]
    DisplayPage { options: UrlParam<DisplayOptions> },


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    pub fn display_page() -> Self {
        Self::DisplayPage { options: UrlParam::from(DisplayOptions::default()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_resolve_to_pages() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::UploadPage {}));
        assert_eq!("/display".parse::<Route>().ok(), Some(Route::display_page()));
        assert_eq!(
            "/nowhere/at/all".parse::<Route>().ok(),
            Some(Route::NotFoundPage { segments: vec!["nowhere".into(), "at".into(), "all".into()] })
        );
    }

    #[test]
    fn display_options_round_trip_through_the_path() {
        let options = DisplayOptions::default().with_summary_percent(40).with_show_pdf(false);
        let route = Route::DisplayPage { options: options.into() };
        let path = route.to_string();
        assert!(path.starts_with("/display?options="));
        assert_eq!(path.parse::<Route>().ok(), Some(route));
    }
}
