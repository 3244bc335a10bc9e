//! In-memory history stack with browser semantics.
//!
//! Each entry keeps the navigation state it was pushed with. Back/forward
//! restore that state, but they are `Pop` transitions, so scroll
//! restoration never acts on it again.

use super::{Location, NavigationIntent, NavigationType, Transition};

#[derive(Debug)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    /// Start at `path_and_hash`. The returned transition is a `Push`, the
    /// same as a typed URL.
    pub fn open(path_and_hash: &str) -> (Self, Transition) {
        let location = Location::parse(path_and_hash);
        let history = Self {
            entries: vec![location.clone()],
            index: 0,
        };
        (history, Transition::new(location, NavigationType::Push))
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn push(&mut self, path_and_hash: &str, state: Option<NavigationIntent>) -> Transition {
        let location = Location::parse(path_and_hash).with_state(state);
        self.entries.truncate(self.index + 1);
        self.entries.push(location.clone());
        self.index = self.entries.len() - 1;
        Transition::new(location, NavigationType::Push)
    }

    pub fn replace(&mut self, path_and_hash: &str, state: Option<NavigationIntent>) -> Transition {
        let location = Location::parse(path_and_hash).with_state(state);
        self.entries[self.index] = location.clone();
        Transition::new(location, NavigationType::Replace)
    }

    pub fn back(&mut self) -> Option<Transition> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<Transition> {
        self.go(1)
    }

    fn go(&mut self, delta: isize) -> Option<Transition> {
        let index = self.index.checked_add_signed(delta)?;
        let location = self.entries.get(index)?.clone();
        self.index = index;
        Some(Transition::new(location, NavigationType::Pop))
    }

    /// Reload the current entry as a fresh load. Its navigation state is
    /// dropped first, so an intent it was pushed with is never used twice.
    pub fn reload(&mut self) -> Transition {
        let load = Transition::load(self.current().clone());
        self.entries[self.index] = load.location.clone();
        load
    }

    /// Rewrite the current entry's fragment in place, keeping its state and
    /// key. Does not produce a transition.
    pub fn replace_fragment(&mut self, id: &str) {
        self.entries[self.index].hash = format!("#{id}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_and_forward_are_pops() {
        let (mut history, _) = MemoryHistory::open("/");
        history.push("/projects", None);
        let back = history.back().unwrap();
        assert_eq!(back.navigation_type, NavigationType::Pop);
        assert_eq!(back.location.pathname, "/");
        let forward = history.forward().unwrap();
        assert_eq!(forward.location.pathname, "/projects");
        assert!(history.forward().is_none());
    }

    #[test]
    fn back_at_start_is_none() {
        let (mut history, initial) = MemoryHistory::open("/publications");
        assert_eq!(initial.navigation_type, NavigationType::Push);
        assert!(history.back().is_none());
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn push_truncates_forward_entries() {
        let (mut history, _) = MemoryHistory::open("/");
        history.push("/projects", None);
        history.push("/publications", None);
        history.back();
        history.push("/translink-od", None);
        assert_eq!(history.len(), 3);
        assert!(history.forward().is_none());
    }

    #[test]
    fn pop_restores_stored_state_and_key() {
        let (mut history, _) = MemoryHistory::open("/projects/translink_od");
        let pushed = history.push("/", Some(NavigationIntent::new("projects")));
        history.push("/publications", None);
        let back = history.back().unwrap();
        assert_eq!(back.location.state, Some(NavigationIntent::new("projects")));
        assert_eq!(back.location.key, pushed.location.key);
    }

    #[test]
    fn reload_drops_the_stored_intent() {
        let (mut history, _) = MemoryHistory::open("/brisbane_connectivity");
        let pushed = history.push("/", Some(NavigationIntent::new("projects")));
        let reloaded = history.reload();
        assert_eq!(reloaded.navigation_type, NavigationType::Push);
        assert_eq!(reloaded.location.state, None);
        assert_eq!(reloaded.location.key, pushed.location.key);
        assert_eq!(history.current().state, None);
    }

    #[test]
    fn replace_fragment_keeps_key() {
        let (mut history, initial) = MemoryHistory::open("/brisbane_connectivity");
        history.replace_fragment("coverage");
        assert_eq!(history.current().hash, "#coverage");
        assert_eq!(history.current().key, initial.location.key);
    }
}
