//! Navigation shell state: scroll styling threshold, mobile menu and
//! in-page section navigation.
//!
//! The DOM is reached only through [`Viewport`], so every transition here
//! can be driven without a browser.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use thiserror::Error;
use yew::functional::Reducible;

/// Vertical offset in pixels past which the header switches to its
/// scrolled style. The comparison is strict.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Services,
    Technology,
    About,
    Contact,
}

impl Section {
    /// Menu order.
    pub const ALL: [Section; 4] = [
        Section::Services,
        Section::Technology,
        Section::About,
        Section::Contact,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Services => "services",
            Section::Technology => "tech",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    /// Label used in the header menus.
    pub fn label(self) -> &'static str {
        match self {
            Section::Services => "שירותים",
            Section::Technology => "טכנולוגיה",
            Section::About => "אודות",
            Section::Contact => "צור קשר",
        }
    }

    /// Longer label used in the footer quick links.
    pub fn footer_label(self) -> &'static str {
        match self {
            Section::Services => "שירותים ומוצרים",
            Section::Technology => "טכנולוגיה ירוקה",
            Section::About => "אודות החברה",
            Section::Contact => "צור קשר",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#') {
            "services" => Ok(Section::Services),
            "tech" | "technology" => Ok(Section::Technology),
            "about" => Ok(Section::About),
            "contact" => Ok(Section::Contact),
            other => Err(NavError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("no element with id `{0}` in the document")]
    TargetNotFound(&'static str),
}

/// Window-level operations the shell needs from its host.
pub trait Viewport {
    /// Smooth-scroll the section's element into view.
    fn reveal(&self, section: Section) -> Result<(), NavError>;

    fn scroll_to_top(&self);
}

/// Resolves `id` and scrolls its section into view. A miss leaves the page
/// untouched; callers that render UI should drop the error.
pub fn navigate_to_section<V>(viewport: &V, id: &str) -> Result<Section, NavError>
where
    V: Viewport + ?Sized,
{
    let section: Section = id.parse()?;
    viewport.reveal(section)?;
    Ok(section)
}

/// Reveals `id` and returns the action the shell dispatches afterwards.
/// On a miss there is nothing to dispatch.
pub fn navigate<V>(viewport: &V, id: &str) -> Result<NavAction, NavError>
where
    V: Viewport + ?Sized,
{
    navigate_to_section(viewport, id).map(|_| NavAction::Navigated)
}

pub fn is_past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    /// A section was scrolled into view.
    Navigated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled(offset) => self.scrolled = is_past_threshold(offset),
            NavAction::ToggleMenu => self.menu_open = !self.menu_open,
            NavAction::Navigated => self.menu_open = false,
        }
    }

    /// [`navigate`] with its action applied in place.
    pub fn navigate<V>(&mut self, viewport: &V, id: &str) -> Result<(), NavError>
    where
        V: Viewport + ?Sized,
    {
        let action = navigate(viewport, id)?;
        self.apply(action);
        Ok(())
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    /// Viewport whose document holds only the given section ids.
    struct FakeViewport {
        present: HashSet<&'static str>,
        revealed: RefCell<Vec<Section>>,
    }

    impl FakeViewport {
        fn with(ids: &[&'static str]) -> Self {
            Self {
                present: ids.iter().copied().collect(),
                revealed: RefCell::new(Vec::new()),
            }
        }

        fn full() -> Self {
            Self::with(&["services", "tech", "about", "contact"])
        }
    }

    impl Viewport for FakeViewport {
        fn reveal(&self, section: Section) -> Result<(), NavError> {
            if self.present.contains(section.id()) {
                self.revealed.borrow_mut().push(section);
                Ok(())
            } else {
                Err(NavError::TargetNotFound(section.id()))
            }
        }

        fn scroll_to_top(&self) {}
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
        assert!(is_past_threshold(51.0));
        assert!(is_past_threshold(10_000.0));
    }

    #[test]
    fn offset_sequence_drives_scrolled_flag() {
        let mut state = NavState::default();
        let seen: Vec<bool> = [0.0, 30.0, 60.0, 40.0]
            .into_iter()
            .map(|offset| {
                state.apply(NavAction::Scrolled(offset));
                state.scrolled
            })
            .collect();
        assert_eq!(seen, vec![false, false, true, false]);
    }

    #[test]
    fn repeated_scroll_keeps_same_state_rc() {
        let state = Rc::new(NavState { scrolled: true, menu_open: false });
        let next = state.clone().reduce(NavAction::Scrolled(120.0));
        assert!(Rc::ptr_eq(&state, &next));

        let changed = next.reduce(NavAction::Scrolled(10.0));
        assert!(!changed.scrolled);
    }

    #[test]
    fn double_toggle_returns_to_closed() {
        let mut state = NavState::default();
        state.apply(NavAction::ToggleMenu);
        assert!(state.menu_open);
        state.apply(NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn navigating_closes_open_menu() {
        let viewport = FakeViewport::full();
        let mut state = NavState { scrolled: false, menu_open: true };

        state.navigate(&viewport, "contact").unwrap();

        assert!(!state.menu_open);
        assert_eq!(*viewport.revealed.borrow(), vec![Section::Contact]);
    }

    #[test]
    fn navigated_is_dispatched_only_on_a_hit() {
        let viewport = FakeViewport::with(&["contact"]);

        assert_eq!(navigate(&viewport, "contact"), Ok(NavAction::Navigated));
        assert_eq!(navigate(&viewport, "about"), Err(NavError::TargetNotFound("about")));
        assert_eq!(navigate(&viewport, "pricing"), Err(NavError::UnknownSection("pricing".into())));
        assert_eq!(*viewport.revealed.borrow(), vec![Section::Contact]);
    }

    #[test]
    fn unknown_section_is_a_soft_miss() {
        let viewport = FakeViewport::full();
        let mut state = NavState { scrolled: true, menu_open: true };

        let result = state.navigate(&viewport, "nonexistent");

        assert_eq!(result, Err(NavError::UnknownSection("nonexistent".into())));
        assert_eq!(state, NavState { scrolled: true, menu_open: true });
        assert!(viewport.revealed.borrow().is_empty());
    }

    #[test]
    fn missing_element_leaves_state_unchanged() {
        let viewport = FakeViewport::with(&["services"]);
        let mut state = NavState { scrolled: false, menu_open: true };

        let result = state.navigate(&viewport, "about");

        assert_eq!(result, Err(NavError::TargetNotFound("about")));
        assert!(state.menu_open);
    }

    #[test]
    fn toggle_then_navigate_scenario() {
        let viewport = FakeViewport::full();
        let mut state = NavState::default();
        assert_eq!(state, NavState { scrolled: false, menu_open: false });

        state.apply(NavAction::ToggleMenu);
        assert_eq!(state, NavState { scrolled: false, menu_open: true });

        state.navigate(&viewport, "services").unwrap();
        assert_eq!(state, NavState { scrolled: false, menu_open: false });
    }

    #[test]
    fn menu_order_and_ids() {
        let ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["services", "tech", "about", "contact"]);
    }

    #[test]
    fn technology_accepts_both_spellings() {
        assert_eq!("tech".parse::<Section>(), Ok(Section::Technology));
        assert_eq!("technology".parse::<Section>(), Ok(Section::Technology));
        assert_eq!("#about".parse::<Section>(), Ok(Section::About));
        for section in Section::ALL {
            assert_eq!(section.to_string().parse::<Section>(), Ok(section));
        }
    }
}
