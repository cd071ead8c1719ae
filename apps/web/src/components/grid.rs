use super::FlagCardView;
use dioxus::prelude::*;
use flagdeck::domain::card::FlagCard;

#[component]
pub(crate) fn FlagGrid(cards: Signal<Vec<FlagCard>>) -> Element {
    rsx! {
        div { class: "grid",
            for card in cards.read().iter() {
                FlagCardView { key: "{card.code}", card: card.clone() }
            }
        }
    }
}
