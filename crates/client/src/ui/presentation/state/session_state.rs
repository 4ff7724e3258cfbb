//! Session context: profile, scenario list, and the current selection.
//!
//! This is the explicitly owned session-context object for the whole
//! questionnaire → scenarios → chat flow. It is created once at app root,
//! passed to screens via Dioxus context, and torn down when the user
//! navigates back to the home screen. The profile is written once at form
//! submission and immutable afterward; the scenario list is fetched at most
//! once per session.

use dioxus::prelude::*;
use hanmal_domain::{Scenario, UserProfile};

/// Status of the one-shot scenario fetch.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ScenarioFetch {
    #[default]
    Idle,
    Loading,
    /// Localized message to display; the scenario list stays empty.
    Failed(String),
}

/// Session-scoped shared state for the practice flow
#[derive(Clone)]
pub struct SessionState {
    profile: Signal<Option<UserProfile>>,
    scenarios: Signal<Vec<Scenario>>,
    selected: Signal<Option<Scenario>>,
    fetch: Signal<ScenarioFetch>,
    /// Bumped on teardown; in-flight work checks it before applying results.
    epoch: Signal<u32>,
}

impl SessionState {
    /// Create a fresh session context with no profile and no scenarios
    pub fn new() -> Self {
        Self {
            profile: Signal::new(None),
            scenarios: Signal::new(Vec::new()),
            selected: Signal::new(None),
            fetch: Signal::new(ScenarioFetch::Idle),
            epoch: Signal::new(0),
        }
    }

    pub fn profile(&self) -> Signal<Option<UserProfile>> {
        self.profile
    }

    pub fn scenarios(&self) -> Signal<Vec<Scenario>> {
        self.scenarios
    }

    pub fn selected(&self) -> Signal<Option<Scenario>> {
        self.selected
    }

    pub fn fetch(&self) -> Signal<ScenarioFetch> {
        self.fetch
    }

    /// Current epoch value, captured before spawning session-scoped work.
    pub fn epoch(&self) -> u32 {
        *self.epoch.peek()
    }

    /// Install the resolved profile. Happens once per session, at form
    /// submission.
    pub fn set_profile(&mut self, profile: UserProfile) {
        self.profile.set(Some(profile));
    }

    /// Cache the fetched scenario list and leave the loading state.
    pub fn set_scenarios(&mut self, scenarios: Vec<Scenario>) {
        self.scenarios.set(scenarios);
        self.fetch.set(ScenarioFetch::Idle);
    }

    /// Mark the one-shot fetch as outstanding.
    pub fn start_loading(&mut self) {
        self.fetch.set(ScenarioFetch::Loading);
    }

    /// Record the fetch failure message; the list stays empty.
    pub fn fail_fetch(&mut self, message: impl Into<String>) {
        self.fetch.set(ScenarioFetch::Failed(message.into()));
    }

    /// Commit the scenario at `index` as the session's selection.
    ///
    /// Returns false (and commits nothing) for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        let scenario = self.scenarios.peek().get(index).cloned();
        match scenario {
            Some(scenario) => {
                self.selected.set(Some(scenario));
                true
            }
            None => false,
        }
    }

    /// Drop the current selection (the chat screen's "new conversation"
    /// action); profile and scenario list stay cached.
    pub fn clear_selection(&mut self) {
        self.selected.set(None);
    }

    /// Tear the whole session down and invalidate in-flight work.
    pub fn clear(&mut self) {
        self.profile.set(None);
        self.scenarios.set(Vec::new());
        self.selected.set(None);
        self.fetch.set(ScenarioFetch::Idle);
        let epoch = *self.epoch.peek();
        self.epoch.set(epoch.wrapping_add(1));
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
