//! Load state of the rulebook page.
//!
//! The load is keyed by the rulebook id: a new id resets the state to
//! `Unloaded` and bumps the generation, so a response for the previous id that
//! arrives late is dropped instead of overwriting the current rulebook.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Unloaded,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Unloaded
    }
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_unloaded(&self) -> bool {
        matches!(self, Self::Unloaded)
    }
}

/// Handle for one started load; only the latest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedLoad<T> {
    key: Option<String>,
    generation: u64,
    state: LoadState<T>,
}

impl<T> Default for KeyedLoad<T> {
    fn default() -> Self {
        Self {
            key: None,
            generation: 0,
            state: LoadState::Unloaded,
        }
    }
}

impl<T> KeyedLoad<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start loading `key`.
    ///
    /// Returns `None` when `key` is already the current key, so re-running
    /// the same effect does not refetch.
    pub fn begin(&mut self, key: &str) -> Option<LoadTicket> {
        if self.key.as_deref() == Some(key) {
            return None;
        }
        self.key = Some(key.to_string());
        self.generation += 1;
        self.state = LoadState::Unloaded;
        Some(LoadTicket(self.generation))
    }

    /// Store the outcome of a load. Returns `false` if the ticket is stale.
    pub fn complete<E: ToString>(&mut self, ticket: LoadTicket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unloaded() {
        let load: KeyedLoad<String> = KeyedLoad::new();
        assert!(load.state().is_unloaded());
        assert_eq!(load.key(), None);
    }

    #[test]
    fn test_unloaded_to_loaded() {
        let mut load = KeyedLoad::new();
        let ticket = load.begin("42").expect("first load");
        assert!(load.complete(ticket, Ok::<_, String>("rulebook 42")));
        assert_eq!(load.state().loaded(), Some(&"rulebook 42"));
    }

    #[test]
    fn test_failure_is_representable() {
        let mut load: KeyedLoad<()> = KeyedLoad::new();
        let ticket = load.begin("42").expect("first load");
        assert!(load.complete(ticket, Err("request failed: offline")));
        assert_eq!(load.state().error(), Some("request failed: offline"));
        assert_eq!(load.state().loaded(), None);
    }

    #[test]
    fn test_same_key_does_not_restart() {
        let mut load = KeyedLoad::new();
        let ticket = load.begin("42").expect("first load");
        load.complete(ticket, Ok::<_, String>(1));
        assert!(load.begin("42").is_none());
        assert_eq!(load.state().loaded(), Some(&1));
    }

    #[test]
    fn test_key_change_resets_and_drops_stale_completion() {
        let mut load = KeyedLoad::new();
        let first = load.begin("1").expect("first load");
        load.complete(first, Ok::<_, String>("one"));

        let second = load.begin("2").expect("key changed");
        assert!(load.state().is_unloaded());
        assert_eq!(load.key(), Some("2"));

        // Late response for the old id.
        assert!(!load.complete(first, Ok::<_, String>("one again")));
        assert!(load.state().is_unloaded());

        assert!(load.complete(second, Ok::<_, String>("two")));
        assert_eq!(load.state().loaded(), Some(&"two"));
    }
}
