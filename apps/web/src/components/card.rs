use super::Toaster;
use crate::browser::BrowserHost;
use dioxus::prelude::*;
use flagdeck::FlagDeck;
use flagdeck::domain::card::FlagCard;

const COPY_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 18 18" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M15 6H7.5C6.67157 6 6 6.67157 6 7.5V15C6 15.8284 6.67157 16.5 7.5 16.5H15C15.8284 16.5 16.5 15.8284 16.5 15V7.5C16.5 6.67157 15.8284 6 15 6Z" stroke="black" stroke-width="1.2" stroke-linecap="round" stroke-linejoin="round"/><path d="M3 12C2.175 12 1.5 11.325 1.5 10.5V3C1.5 2.175 2.175 1.5 3 1.5H10.5C11.325 1.5 12 2.175 12 3" stroke="black" stroke-width="1.2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

const DOWNLOAD_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 18 18" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M9 12.75V2.25" stroke="black" stroke-width="1.2" stroke-linecap="round" stroke-linejoin="round"/><path d="M4.5 8.25L9 12.75L13.5 8.25" stroke="black" stroke-width="1.2" stroke-linecap="round" stroke-linejoin="round"/><path d="M14.25 15.75H3.75" stroke="black" stroke-width="1.2" stroke-linecap="round" stroke-linejoin="round"/></svg>"#;

/// One flag: the SVG image plus its copy and download buttons.
#[component]
pub(crate) fn FlagCardView(card: FlagCard) -> Element {
    let deck = use_context::<FlagDeck>();
    let toaster = use_context::<Toaster>();

    let copy = {
        let (deck, url) = (deck.clone(), card.svg_url.clone());
        move |_: MouseEvent| {
            let (deck, url) = (deck.clone(), url.clone());
            spawn(async move {
                deck.exporter().copy_svg(&url, &BrowserHost, &toaster).await;
            });
        }
    };

    let download = {
        let url = card.png_url.clone();
        move |_: MouseEvent| {
            let (deck, url) = (deck.clone(), url.clone());
            spawn(async move {
                deck.exporter().download_png(&url, &BrowserHost, &toaster).await;
            });
        }
    };

    rsx! {
        div { class: "card",
            div { class: "frame",
                img { src: "{card.svg_url}", alt: "{card.name}", title: "{card.name}", loading: "lazy" }
            }
            div { class: "actions",
                button { class: "button", r#type: "button", onclick: copy,
                    span { class: "icon", dangerous_inner_html: COPY_ICON }
                    span { class: "label", "SVG" }
                }
                button { class: "button", r#type: "button", onclick: download,
                    span { class: "icon", dangerous_inner_html: DOWNLOAD_ICON }
                    span { class: "label", "PNG" }
                }
            }
        }
    }
}
