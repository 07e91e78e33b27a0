//! Pagination and zoom state for one loaded PDF.
//!
//! The state never draws anything itself. Every operation that needs a redraw
//! returns the [`RenderRequest`] the caller must draw right away, or `None` when
//! nothing should be drawn yet: either nothing changed, or a render is already in
//! flight and the request was folded into the single pending slot. Once a draw
//! finishes, the caller reports it through [`PdfViewState::render_complete`], which
//! hands back the pending request if there is one.

/// Allowed zoom multipliers, ascending.
pub const ZOOM_LADDER: [f64; 9] = [1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0, 4.0, 5.0];

/// One page draw at a given zoom, tagged with the document it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub generation: u64,
    pub page: u32,
    pub zoom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    Idle,
    Rendering,
    RenderingWithPending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOutOfRange {
    pub requested: u32,
    pub total_pages: u32,
}

impl std::fmt::Display for PageOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "page {} is outside 1..={}", self.requested, self.total_pages)
    }
}

impl std::error::Error for PageOutOfRange {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDocument;

impl std::fmt::Display for EmptyDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the document has no pages")
    }
}

impl std::error::Error for EmptyDocument {}

#[derive(Debug, Clone, PartialEq)]
pub struct PdfViewState {
    generation: u64,
    current_page: u32,
    total_pages: u32,
    zoom_index: usize,
    in_flight: Option<RenderRequest>,
    pending: Option<RenderRequest>,
}

impl PdfViewState {
    /// Fresh state for a newly decoded document, with the first page already in flight.
    pub fn load(generation: u64, total_pages: u32) -> Result<(Self, RenderRequest), EmptyDocument> {
        if total_pages == 0 {
            return Err(EmptyDocument);
        }
        let mut state = Self { generation, current_page: 1, total_pages, zoom_index: 0, in_flight: None, pending: None };
        let first = state.request_render().ok_or(EmptyDocument)?;
        Ok((state, first))
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn zoom(&self) -> f64 {
        ZOOM_LADDER[self.zoom_index]
    }

    /// Zoom as a rounded percentage, e.g. "125%".
    pub fn zoom_label(&self) -> String {
        format!("{}%", (self.zoom() * 100.0).round() as u32)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom_index + 1 < ZOOM_LADDER.len()
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_index > 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn phase(&self) -> RenderPhase {
        match (self.in_flight, self.pending) {
            (None, _) => RenderPhase::Idle,
            (Some(_), None) => RenderPhase::Rendering,
            (Some(_), Some(_)) => RenderPhase::RenderingWithPending,
        }
    }

    pub fn in_flight(&self) -> Option<RenderRequest> {
        self.in_flight
    }

    pub fn pending_page(&self) -> Option<u32> {
        self.pending.map(|request| request.page)
    }

    pub fn next(&mut self) -> Option<RenderRequest> {
        if !self.can_go_next() {
            return None;
        }
        self.current_page += 1;
        self.request_render()
    }

    pub fn prev(&mut self) -> Option<RenderRequest> {
        if !self.can_go_previous() {
            return None;
        }
        self.current_page -= 1;
        self.request_render()
    }

    /// Moves to `page`. Out-of-range pages are rejected without touching the state.
    pub fn jump_to(&mut self, page: u32) -> Result<Option<RenderRequest>, PageOutOfRange> {
        if page < 1 || page > self.total_pages {
            return Err(PageOutOfRange { requested: page, total_pages: self.total_pages });
        }
        if page == self.current_page {
            return Ok(None);
        }
        self.current_page = page;
        Ok(self.request_render())
    }

    /// Moves by a signed number of pages, stopping at the first and last page.
    pub fn scroll(&mut self, offset: i64) -> Option<RenderRequest> {
        let target = i64::from(self.current_page).saturating_add(offset).clamp(1, i64::from(self.total_pages)) as u32;
        if target == self.current_page {
            return None;
        }
        self.current_page = target;
        self.request_render()
    }

    pub fn zoom_in(&mut self) -> Option<RenderRequest> {
        if !self.can_zoom_in() {
            return None;
        }
        self.zoom_index += 1;
        self.request_render()
    }

    pub fn zoom_out(&mut self) -> Option<RenderRequest> {
        if !self.can_zoom_out() {
            return None;
        }
        self.zoom_index -= 1;
        self.request_render()
    }

    /// Draws the current page again, e.g. after the container was resized.
    pub fn redraw(&mut self) -> Option<RenderRequest> {
        self.request_render()
    }

    /// Records that `finished` was drawn and returns the coalesced request to draw next.
    ///
    /// Completions belonging to another document generation, or to a request that
    /// is not the one in flight, are ignored.
    pub fn render_complete(&mut self, finished: &RenderRequest) -> Option<RenderRequest> {
        if finished.generation != self.generation || self.in_flight.as_ref() != Some(finished) {
            return None;
        }
        self.in_flight = self.pending.take();
        self.in_flight
    }

    fn request_render(&mut self) -> Option<RenderRequest> {
        let request = RenderRequest { generation: self.generation, page: self.current_page, zoom: self.zoom() };
        if self.in_flight.is_some() {
            self.pending = Some(request);
            return None;
        }
        self.in_flight = Some(request);
        Some(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(total_pages: u32) -> PdfViewState {
        let (mut state, first) = PdfViewState::load(1, total_pages).unwrap();
        assert_eq!(state.render_complete(&first), None);
        state
    }

    #[test]
    fn load_requests_exactly_page_one_at_base_zoom() {
        let (state, first) = PdfViewState::load(7, 12).unwrap();
        assert_eq!(first, RenderRequest { generation: 7, page: 1, zoom: 1.0 });
        assert_eq!(state.phase(), RenderPhase::Rendering);
        assert_eq!(state.pending_page(), None);
        assert_eq!(state.zoom_label(), "100%");
    }

    #[test]
    fn empty_documents_are_rejected() {
        assert_eq!(PdfViewState::load(1, 0).unwrap_err(), EmptyDocument);
    }

    #[test]
    fn prev_at_first_page_is_noop() {
        let mut state = loaded(3);
        assert_eq!(state.prev(), None);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.phase(), RenderPhase::Idle);
    }

    #[test]
    fn next_at_last_page_is_noop() {
        let mut state = loaded(2);
        let request = state.next().unwrap();
        state.render_complete(&request);
        assert_eq!(state.next(), None);
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn page_stays_in_bounds_for_any_walk() {
        let mut state = loaded(4);
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let request = if seed % 2 == 0 { state.next() } else { state.prev() };
            if let Some(request) = request {
                if seed % 3 == 0 {
                    state.render_complete(&request);
                }
            }
            assert!((1..=state.total_pages()).contains(&state.current_page()));
        }
    }

    #[test]
    fn requests_during_a_render_are_coalesced_to_the_latest() {
        let mut state = loaded(10);
        let first = state.next().unwrap();
        assert_eq!(first.page, 2);

        assert_eq!(state.next(), None);
        assert_eq!(state.jump_to(7), Ok(None));
        assert_eq!(state.next(), None);
        assert_eq!(state.phase(), RenderPhase::RenderingWithPending);
        assert_eq!(state.pending_page(), Some(8));

        let second = state.render_complete(&first).unwrap();
        assert_eq!(second.page, 8);
        assert_eq!(state.phase(), RenderPhase::Rendering);

        assert_eq!(state.render_complete(&second), None);
        assert_eq!(state.phase(), RenderPhase::Idle);
    }

    #[test]
    fn out_of_range_jump_is_rejected_without_change() {
        let mut state = loaded(5);
        assert_eq!(state.jump_to(0), Err(PageOutOfRange { requested: 0, total_pages: 5 }));
        assert_eq!(state.jump_to(6), Err(PageOutOfRange { requested: 6, total_pages: 5 }));
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.phase(), RenderPhase::Idle);
        assert_eq!(state.jump_to(1), Ok(None));
        assert_eq!(state.jump_to(5).unwrap().map(|r| r.page), Some(5));
    }

    #[test]
    fn zoom_stops_at_ladder_ends() {
        let mut state = loaded(1);
        assert!(!state.can_zoom_out());
        assert_eq!(state.zoom_out(), None);

        for _ in 0..ZOOM_LADDER.len() * 2 {
            if let Some(request) = state.zoom_in() {
                state.render_complete(&request);
            }
        }
        assert_eq!(state.zoom(), 5.0);
        assert!(!state.can_zoom_in());
        assert_eq!(state.zoom_in(), None);
        assert_eq!(state.zoom_label(), "500%");

        let request = state.zoom_out().unwrap();
        assert_eq!(request.zoom, 4.0);
        assert_eq!(request.page, 1);
        assert!(state.can_zoom_in());
    }

    #[test]
    fn zoom_during_render_rerenders_current_page_at_new_scale() {
        let mut state = loaded(3);
        let first = state.next().unwrap();
        assert_eq!(state.zoom_in(), None);
        let next = state.render_complete(&first).unwrap();
        assert_eq!(next, RenderRequest { generation: 1, page: 2, zoom: 1.25 });
    }

    #[test]
    fn scroll_clamps_to_document() {
        let mut state = loaded(6);
        let request = state.scroll(10).unwrap();
        assert_eq!(request.page, 6);
        state.render_complete(&request);
        assert_eq!(state.scroll(1), None);
        assert_eq!(state.scroll(-2).map(|r| r.page), Some(4));
    }

    #[test]
    fn extreme_scroll_offsets_clamp() {
        let mut state = loaded(6);
        let request = state.scroll(i64::MAX).unwrap();
        assert_eq!(request.page, 6);
        state.render_complete(&request);
        assert_eq!(state.scroll(i64::MIN).map(|r| r.page), Some(1));
    }

    #[test]
    fn redraw_keeps_page_and_zoom() {
        let mut state = loaded(4);
        let moved = state.next().unwrap();
        state.render_complete(&moved);
        let request = state.redraw().unwrap();
        assert_eq!((request.page, request.zoom), (2, 1.0));
        assert_eq!(state.redraw(), None);
        assert_eq!(state.phase(), RenderPhase::RenderingWithPending);
    }

    #[test]
    fn stale_completions_are_ignored() {
        let (mut old, old_first) = PdfViewState::load(1, 3).unwrap();
        let (mut new, new_first) = PdfViewState::load(2, 3).unwrap();
        assert_eq!(new.next(), None);
        assert_eq!(new.render_complete(&old_first), None);
        assert_eq!(new.phase(), RenderPhase::RenderingWithPending);
        assert_eq!(new.render_complete(&new_first).map(|r| r.page), Some(2));
        assert_eq!(old.render_complete(&old_first), None);
    }
}
