use flagdeck::catalog::Refresh;
use flagdeck::domain::config::WidgetConfig;
use flagdeck::domain::directory::CodeDirectory;
use flagdeck::kernel::error::SourceError;
use flagdeck::kernel::source::FlagSource;
use flagdeck::{FlagDeck, init};
use std::time::Duration;

#[derive(Debug, Clone)]
struct StaticSource(CodeDirectory);

impl FlagSource for StaticSource {
    async fn fetch_directory(&self) -> Result<CodeDirectory, SourceError> {
        Ok(self.0.clone())
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        Ok(format!("<svg data-url=\"{url}\"/>"))
    }

    async fn fetch_bytes(&self, _url: &str) -> Result<Vec<u8>, SourceError> {
        Ok(vec![0x89, b'P', b'N', b'G'])
    }
}

#[test]
fn init_applies_overrides() {
    let deck = init(Some("[search]\ndebounce_ms = 40\n[toast]\nmax_stack = 2\n")).expect("init");

    assert_eq!(deck.config().search.debounce(), Duration::from_millis(40));
    assert_eq!(deck.notification_center().max_stack(), 2);
    assert_eq!(deck.search().host().base_url, "https://flagcdn.com");
}

#[test]
fn init_rejects_broken_overrides() {
    assert!(init(Some("[toast\nmax_stack = ")).is_err());
}

#[test]
fn toast_timings_come_from_config() {
    let deck = FlagDeck::from_config(WidgetConfig::default());
    let timings = deck.toast_timings();
    assert_eq!(timings.enter_delay, Duration::from_millis(100));
    assert_eq!(timings.visible_for, Duration::from_millis(3000));
    assert_eq!(timings.exit_delay, Duration::from_millis(300));
}

#[tokio::test]
async fn search_and_render_through_the_facade() {
    let directory: CodeDirectory = [("fr", "France"), ("de", "Germany")].into_iter().collect();
    let deck = FlagDeck::with_source(WidgetConfig::default(), StaticSource(directory));

    let Refresh::Apply(snapshot) = deck.search().refresh_now("germ").await else {
        panic!("a lone refresh is never superseded");
    };

    let mut grid = Vec::new();
    assert_eq!(snapshot.render_into(&mut grid, deck.search().host()), 1);
    assert_eq!(grid[0].png_url, "https://flagcdn.com/256x192/de.png");
}
