//! ViewModel for the rulebook page: owns the keyed load of the rulebook.

use super::model::RulebookFetcher;
use super::state::KeyedLoad;
use crate::shared::api_utils::ApiConfig;
use contracts::domain::a025_rulebook::aggregate::Rulebook;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct RulebookDetailsVm {
    pub slot: RwSignal<KeyedLoad<Rulebook>>,
    api: StoredValue<ApiConfig>,
    fetch: StoredValue<RulebookFetcher, LocalStorage>,
}

impl RulebookDetailsVm {
    pub fn new(api: ApiConfig, fetch: RulebookFetcher) -> Self {
        Self {
            slot: RwSignal::new(KeyedLoad::new()),
            api: StoredValue::new(api),
            fetch: StoredValue::new_local(fetch),
        }
    }

    // === Derived signals ===

    pub fn rulebook(&self) -> Memo<Option<Rulebook>> {
        let slot = self.slot;
        Memo::new(move |_| slot.with(|s| s.state().loaded().cloned()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let slot = self.slot;
        Signal::derive(move || slot.with(|s| s.state().error().map(str::to_string)))
    }

    // === Data loading ===

    /// Load the rulebook for every new value of `id`.
    pub fn bind_id(&self, id: Signal<String>) {
        let this = *self;
        Effect::new(move |_| {
            let id = id.get();
            this.load(id);
        });
    }

    pub fn load(&self, id: String) {
        if self.slot.with_untracked(|s| s.key() == Some(id.as_str())) {
            return;
        }
        let Some(ticket) = self.slot.try_update(|s| s.begin(&id)).flatten() else {
            return;
        };

        log::debug!("a025_rulebook: loading rulebook '{}'", id);
        let slot = self.slot;
        let fetch = self.fetch.get_value();
        let pending = fetch(self.api.get_value(), id.clone());

        leptos::task::spawn_local(async move {
            let result = pending.await;
            if let Err(e) = &result {
                log::error!("a025_rulebook: failed to load rulebook '{}': {}", id, e);
            }
            match slot.try_update(|s| s.complete(ticket, result)) {
                Some(true) => log::debug!("a025_rulebook: response for '{}' applied", id),
                Some(false) => {
                    log::debug!("a025_rulebook: dropped stale response for '{}'", id)
                }
                None => log::debug!("a025_rulebook: page closed before '{}' arrived", id),
            }
        });
    }
}
