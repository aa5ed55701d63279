//! Section tracking and smooth-scroll navigation.
//!
//! The page is a fixed, ordered stack of sections. The tracker maps the
//! current scroll offset to the single "active" section id the navbar
//! highlights. Geometry comes in through the [`Viewport`] trait so the
//! resolution logic can run against synthetic offsets in tests;
//! [`DomViewport`] is the browser-backed implementation.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A named page region addressable by element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Navigation order. Array order is also the order sections are checked in,
/// which decides the winner when measured regions overlap.
pub const SECTIONS: [Section; 6] = [
    Section { id: "home", label: "Home" },
    Section { id: "about", label: "About" },
    Section { id: "skills", label: "Skills" },
    Section { id: "achievements", label: "Achievements" },
    Section { id: "projects", label: "Projects" },
    Section { id: "contact", label: "Contact" },
];

/// Compensation for the fixed header overlaying the top of the viewport.
pub const HEADER_OFFSET: f64 = 100.0;

/// Scroll depth past which the navbar switches to its solid backdrop.
pub const NAV_BACKDROP_OFFSET: f64 = 50.0;

/// Where section geometry comes from.
pub trait Viewport {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Top offset and height of a mounted section, `None` when the element
    /// is not in the document.
    fn measure(&self, section_id: &str) -> Option<(f64, f64)>;
}

/// Browser-backed [`Viewport`].
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn measure(&self, section_id: &str) -> Option<(f64, f64)> {
        let element = web_sys::window()?.document()?.get_element_by_id(section_id)?;
        let element: web_sys::HtmlElement = element.dyn_into().ok()?;
        Some((element.offset_top() as f64, element.offset_height() as f64))
    }
}

/// Last section in `bounds` order whose `[top, top + height)` interval
/// contains `offset + HEADER_OFFSET`, or `None` when no interval does.
pub fn resolve_active(offset: f64, bounds: &[(&'static str, f64, f64)]) -> Option<&'static str> {
    let position = offset + HEADER_OFFSET;
    let mut active = None;
    for (id, top, height) in bounds {
        if position >= *top && position < top + height {
            active = Some(*id);
        }
    }
    active
}

/// Derives the active section from the scroll position.
///
/// Holds the previously resolved id so offsets outside every section (past
/// the end of the page, or before anything mounts) keep the last highlight
/// instead of clearing it.
pub struct SectionTracker<V> {
    viewport: V,
    sections: &'static [Section],
    active: &'static str,
}

impl<V: Viewport> SectionTracker<V> {
    pub fn new(viewport: V) -> Self {
        Self::with_sections(viewport, &SECTIONS)
    }

    pub fn with_sections(viewport: V, sections: &'static [Section]) -> Self {
        Self {
            viewport,
            sections,
            active: sections.first().map(|section| section.id).unwrap_or(""),
        }
    }

    /// Currently held section id.
    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Re-measure every section and update the held id. Sections without a
    /// mounted element contribute no match.
    pub fn evaluate(&mut self) -> &'static str {
        let bounds: Vec<(&'static str, f64, f64)> = self
            .sections
            .iter()
            .filter_map(|section| {
                self.viewport
                    .measure(section.id)
                    .map(|(top, height)| (section.id, top, height))
            })
            .collect();

        if let Some(id) = resolve_active(self.viewport.scroll_offset(), &bounds) {
            self.active = id;
        }
        self.active
    }
}

/// Window scroll listener, removed again when the guard drops.
pub struct ScrollListener {
    callback: Closure<dyn FnMut()>,
}

impl ScrollListener {
    /// Attach `handler` to the window `scroll` event. Returns `None` outside
    /// a browser context.
    pub fn attach(handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { callback })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Keep `active` in sync with the scroll position for the lifetime of the
/// current reactive scope. Installs exactly one scroll listener; the guard
/// is dropped on cleanup.
pub fn track_active_section(active: RwSignal<&'static str>) {
    let mut tracker = SectionTracker::new(DomViewport);
    let listener = ScrollListener::attach(move || {
        active.set(tracker.evaluate());
    });
    on_cleanup(move || drop(listener));
}

/// Smoothly scroll a section into view. The active highlight is not touched
/// here; it catches up on the scroll events the navigation produces.
pub fn scroll_to_section(section_id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(section_id));

    if let Some(element) = element {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smoothly scroll the window back to the top of the page.
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct FakeViewport {
        offset: Rc<Cell<f64>>,
        bounds: Vec<(&'static str, f64, f64)>,
    }

    impl Viewport for FakeViewport {
        fn scroll_offset(&self) -> f64 {
            self.offset.get()
        }

        fn measure(&self, section_id: &str) -> Option<(f64, f64)> {
            self.bounds
                .iter()
                .find(|(id, _, _)| *id == section_id)
                .map(|(_, top, height)| (*top, *height))
        }
    }

    // home [0, 500), about [500, 900), skills [900, 1400)
    fn three_section_tracker(offset: Rc<Cell<f64>>) -> SectionTracker<FakeViewport> {
        let viewport = FakeViewport {
            offset,
            bounds: vec![
                ("home", 0.0, 500.0),
                ("about", 500.0, 400.0),
                ("skills", 900.0, 500.0),
            ],
        };
        SectionTracker::with_sections(viewport, &SECTIONS)
    }

    #[test]
    fn test_resolve_active_honors_header_offset() {
        let bounds = [
            ("home", 0.0, 500.0),
            ("about", 500.0, 400.0),
            ("skills", 900.0, 500.0),
        ];
        // 450 + 100 = 550 falls inside about's interval.
        assert_eq!(resolve_active(450.0, &bounds), Some("about"));
        // Interval bounds are inclusive at the top, exclusive at the bottom.
        assert_eq!(resolve_active(400.0, &bounds), Some("about"));
        assert_eq!(resolve_active(399.0, &bounds), Some("home"));
        assert_eq!(resolve_active(800.0, &bounds), Some("skills"));
    }

    #[test]
    fn test_resolve_active_last_match_wins_on_overlap() {
        let bounds = [("home", 0.0, 700.0), ("about", 500.0, 400.0)];
        // 550 sits in both regions; the later section takes the highlight.
        assert_eq!(resolve_active(450.0, &bounds), Some("about"));
    }

    #[test]
    fn test_resolve_active_no_match() {
        let bounds = [("home", 0.0, 500.0)];
        assert_eq!(resolve_active(5000.0, &bounds), None);
    }

    #[test]
    fn test_tracker_follows_scroll_position() {
        let offset = Rc::new(Cell::new(0.0));
        let mut tracker = three_section_tracker(Rc::clone(&offset));

        assert_eq!(tracker.evaluate(), "home");

        offset.set(450.0);
        assert_eq!(tracker.evaluate(), "about");

        offset.set(1000.0);
        assert_eq!(tracker.evaluate(), "skills");
    }

    #[test]
    fn test_tracker_retains_previous_when_nothing_matches() {
        let offset = Rc::new(Cell::new(450.0));
        let mut tracker = three_section_tracker(Rc::clone(&offset));
        assert_eq!(tracker.evaluate(), "about");

        // Scrolled past every section: the previous id persists.
        offset.set(10_000.0);
        assert_eq!(tracker.evaluate(), "about");
    }

    #[test]
    fn test_tracker_skips_unmounted_sections() {
        // Only two of the configured sections are mounted.
        let viewport = FakeViewport {
            offset: Rc::new(Cell::new(250.0)),
            bounds: vec![("home", 0.0, 300.0), ("contact", 300.0, 300.0)],
        };
        let mut tracker = SectionTracker::with_sections(viewport, &SECTIONS);
        assert_eq!(tracker.evaluate(), "contact");
    }

    #[test]
    fn test_tracker_starts_on_first_section() {
        let offset = Rc::new(Cell::new(1000.0));
        let tracker = three_section_tracker(Rc::clone(&offset));

        // The held id only moves through evaluate, never lazily.
        assert_eq!(tracker.active(), "home");
    }

    #[test]
    fn test_tracker_ignores_offset_until_evaluated() {
        let offset = Rc::new(Cell::new(0.0));
        let mut tracker = three_section_tracker(Rc::clone(&offset));
        assert_eq!(tracker.evaluate(), "home");

        // A smooth-scroll instruction moves the offset; the highlight holds
        // until the next scroll event runs an evaluation.
        offset.set(1000.0);
        assert_eq!(tracker.active(), "home");
        assert_eq!(tracker.evaluate(), "skills");
    }
}
