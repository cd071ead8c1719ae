use super::{FlagGrid, SearchBox, ToastStack, Toaster};
use crate::browser::{BrowserSleep, config_overrides};
use dioxus::prelude::*;
use flagdeck::FlagDeck;
use flagdeck::catalog::Refresh;
use flagdeck::domain::card::FlagCard;
use flagdeck::domain::config::{FlagHostConfig, WidgetConfig};
use tracing::{debug, error};

const STYLE: &str = include_str!("../../assets/flagdeck.css");

fn load_deck() -> FlagDeck {
    let overrides = config_overrides();
    flagdeck::init(overrides.as_deref()).unwrap_or_else(|err| {
        error!(error = %err, "Invalid page configuration, using defaults");
        FlagDeck::from_config(WidgetConfig::default())
    })
}

/// Rendered grid state; `no_match` holds the term of an applied search that
/// matched nothing in a successfully loaded directory.
#[derive(Debug, Clone, Copy)]
struct GridState {
    cards: Signal<Vec<FlagCard>>,
    no_match: Signal<Option<String>>,
}

impl GridState {
    fn apply(mut self, refresh: Refresh, host: &FlagHostConfig) {
        match refresh {
            Refresh::Apply(snapshot) => {
                let count = snapshot.render_into(&mut *self.cards.write(), host);
                debug!(generation = snapshot.generation(), count, "Grid rendered");
                self.no_match.set(snapshot.unmatched_term(count).map(str::to_owned));
            },
            Refresh::Superseded { .. } => {},
        }
    }
}

#[component]
pub fn App() -> Element {
    let deck = use_context_provider(load_deck);
    let center = use_signal(|| deck.notification_center());
    use_context_provider(|| Toaster::new(center, deck.toast_timings()));

    let grid = GridState { cards: use_signal(Vec::new), no_match: use_signal(|| None) };

    use_hook({
        let deck = deck.clone();
        move || {
            spawn(async move {
                let refresh = deck.search().refresh_now("").await;
                grid.apply(refresh, deck.search().host());
            });
        }
    });

    let on_search = {
        let deck = deck.clone();
        move |term: String| {
            let deck = deck.clone();
            spawn(async move {
                let refresh = deck.search().refresh(term, &BrowserSleep).await;
                grid.apply(refresh, deck.search().host());
            });
        }
    };

    let ui = &deck.config().ui;

    rsx! {
        style { {STYLE} }
        main { class: "flagdeck",
            h1 { class: "title", "{ui.title}" }
            SearchBox { placeholder: ui.search_placeholder.clone(), on_search }
            FlagGrid { cards: grid.cards }
            if let Some(term) = grid.no_match.read().as_deref() {
                p { class: "no-match", "No flags match “{term}”" }
            }
        }
        ToastStack { center }
    }
}
