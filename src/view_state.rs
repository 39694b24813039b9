use std::rc::Rc;

use yew::functional::Reducible;

/// Scroll offset (px) past which the header switches to its compact styling.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Disclosure state for one page instance: the full-screen navigation
/// overlay and the scroll-position flag the header styling keys off.
///
/// Owned by the `Nav` component through `use_reducer`; there is no shared
/// singleton, so several mounted apps never see each other's flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    nav_open: bool,
    past_threshold: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nav_open(&self) -> bool {
        self.nav_open
    }

    pub fn past_threshold(&self) -> bool {
        self.past_threshold
    }

    /// Flips the navigation overlay. Two calls restore the original state.
    pub fn toggle_navigation(&mut self) {
        self.nav_open = !self.nav_open;
    }

    /// Unconditionally closes the overlay. Called when a destination link is
    /// activated so the panel never lingers over the target section.
    pub fn close_navigation(&mut self) {
        self.nav_open = false;
    }

    /// Recomputes the threshold flag from the current scroll offset. Pure
    /// comparison; exactly `SCROLL_THRESHOLD_PX` counts as not past.
    pub fn update_scroll_state(&mut self, offset_px: f64) {
        self.past_threshold = offset_px > SCROLL_THRESHOLD_PX;
    }
}

/// Discrete UI events the disclosure state reacts to.
pub enum ViewAction {
    ToggleNavigation,
    CloseNavigation,
    Scrolled(f64),
}

impl Reducible for ViewState {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: ViewAction) -> Rc<Self> {
        let mut next = *self;
        match action {
            ViewAction::ToggleNavigation => next.toggle_navigation(),
            ViewAction::CloseNavigation => next.close_navigation(),
            ViewAction::Scrolled(offset_px) => next.update_scroll_state(offset_px),
        }
        // Scroll events arrive every tick; reusing the Rc when nothing
        // changed skips both the allocation and the re-render.
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

    #[test]
    fn toggle_twice_restores_original_state() {
        for start in [false, true] {
            let mut state = ViewState::new();
            if start {
                state.toggle_navigation();
            }
            let before = state.nav_open();
            state.toggle_navigation();
            state.toggle_navigation();
            assert_eq!(state.nav_open(), before);
        }
    }

    #[test]
    fn close_always_wins_over_any_toggle_sequence() {
        let mut state = ViewState::new();
        for _ in 0..5 {
            state.toggle_navigation();
        }
        state.close_navigation();
        assert!(!state.nav_open());

        state.close_navigation();
        assert!(!state.nav_open());
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let mut state = ViewState::new();

        state.update_scroll_state(0.0);
        assert!(!state.past_threshold());

        state.update_scroll_state(50.0);
        assert!(!state.past_threshold());

        state.update_scroll_state(51.0);
        assert!(state.past_threshold());

        state.update_scroll_state(12.0);
        assert!(!state.past_threshold());
    }

    #[test]
    fn flags_stay_independent() {
        let mut state = ViewState::new();
        state.update_scroll_state(400.0);
        state.toggle_navigation();
        assert!(state.nav_open());
        assert!(state.past_threshold());

        state.close_navigation();
        assert!(state.past_threshold());

        state.update_scroll_state(0.0);
        state.toggle_navigation();
        state.update_scroll_state(300.0);
        assert!(state.nav_open());
    }

    #[test]
    fn reduce_reuses_rc_when_state_is_unchanged() {
        let state = Rc::new(ViewState::new());

        let same = state.clone().reduce(ViewAction::Scrolled(10.0));
        assert!(Rc::ptr_eq(&state, &same));

        let changed = state.clone().reduce(ViewAction::Scrolled(200.0));
        assert!(!Rc::ptr_eq(&state, &changed));
        assert!(changed.past_threshold());

        let same_again = changed.clone().reduce(ViewAction::Scrolled(199.0));
        assert!(Rc::ptr_eq(&changed, &same_again));
    }

    #[test]
    fn reduce_applies_toggle_and_close() {
        let state = Rc::new(ViewState::new());
        let open = state.reduce(ViewAction::ToggleNavigation);
        assert!(open.nav_open());
        let closed = open.reduce(ViewAction::CloseNavigation);
        assert!(!closed.nav_open());
    }
}
