mod fixtures;

use fixtures::europe;
use flagdeck_catalog::filter::matches;
use flagdeck_catalog::render;
use flagdeck_kernel::domain::card::FlagCard;
use flagdeck_kernel::domain::config::FlagHostConfig;
use flagdeck_kernel::domain::directory::CodeDirectory;
use proptest::prelude::*;

fn codes(cards: &[FlagCard]) -> Vec<&str> {
    cards.iter().map(|card| card.code.as_str()).collect()
}

#[test]
fn empty_term_renders_whole_directory_in_order() {
    let mut grid = Vec::new();
    let rendered = render(&mut grid, &europe(), "", &FlagHostConfig::default());

    assert_eq!(rendered, 5);
    assert_eq!(codes(&grid), ["fr", "de", "ua", "gb", "ax"]);
}

#[test]
fn term_filters_case_insensitively() {
    let mut grid = Vec::new();
    render(&mut grid, &europe(), "KING", &FlagHostConfig::default());
    assert_eq!(codes(&grid), ["gb"]);

    render(&mut grid, &europe(), "åland", &FlagHostConfig::default());
    assert_eq!(codes(&grid), ["ax"]);
}

#[test]
fn substring_shared_by_several_names_keeps_all_of_them() {
    let directory: CodeDirectory = [("fr", "France"), ("de", "Germany")].into_iter().collect();
    let mut grid = Vec::new();

    render(&mut grid, &directory, "an", &FlagHostConfig::default());
    assert_eq!(codes(&grid), ["fr", "de"]);

    render(&mut grid, &directory, "erm", &FlagHostConfig::default());
    assert_eq!(codes(&grid), ["de"]);
}

#[test]
fn rendering_twice_replaces_previous_cards() {
    let mut grid = Vec::new();
    render(&mut grid, &europe(), "", &FlagHostConfig::default());
    render(&mut grid, &europe(), "", &FlagHostConfig::default());
    assert_eq!(grid.len(), 5);

    render(&mut grid, &europe(), "ukr", &FlagHostConfig::default());
    assert_eq!(codes(&grid), ["ua"]);
}

#[test]
fn no_match_leaves_container_empty() {
    let mut grid = Vec::new();
    render(&mut grid, &europe(), "", &FlagHostConfig::default());

    let rendered = render(&mut grid, &europe(), "atlantis", &FlagHostConfig::default());
    assert_eq!(rendered, 0);
    assert!(grid.is_empty());
}

#[test]
fn cards_carry_host_urls() {
    let host = FlagHostConfig { base_url: "https://flags.test".to_owned(), ..FlagHostConfig::default() };
    let mut grid = Vec::new();
    render(&mut grid, &europe(), "ukraine", &host);

    assert_eq!(grid[0].name, "Ukraine");
    assert_eq!(grid[0].svg_url, "https://flags.test/ua.svg");
    assert_eq!(grid[0].png_url, "https://flags.test/256x192/ua.png");
}

proptest! {
    #[test]
    fn rendered_set_is_exactly_the_matching_subset(
        entries in prop::collection::vec(("[a-z]{2}", "[A-Za-zÀ-ÿ ]{0,12}"), 0..24),
        term in "[A-Za-zÀ-ÿ]{0,3}",
    ) {
        let directory: CodeDirectory = entries.into_iter().collect();
        let mut grid = Vec::new();
        render(&mut grid, &directory, &term, &FlagHostConfig::default());

        let expected: Vec<&str> = directory
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&term.to_lowercase()))
            .map(|entry| entry.code.as_str())
            .collect();

        prop_assert_eq!(codes(&grid), expected);
        for card in &grid {
            prop_assert!(matches(&card.name, &term));
        }
    }
}
