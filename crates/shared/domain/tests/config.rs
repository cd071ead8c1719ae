use flagdeck_domain::config::{FlagHostConfig, SearchConfig, ToastConfig, WidgetConfig};
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let host = FlagHostConfig::default();
    assert_eq!(host.base_url, "https://flagcdn.com");
    assert_eq!(host.locale, "en");
    assert_eq!(host.raster, "256x192");

    let toast = ToastConfig::default();
    assert_eq!(toast.enter_delay_ms, 100);
    assert_eq!(toast.visible_ms, 3000);
    assert_eq!(toast.exit_delay_ms, 300);
    assert!(toast.max_stack > 0);

    assert_eq!(SearchConfig::default().debounce(), Duration::from_millis(150));
}

#[test]
fn host_builds_flag_urls() {
    let host = FlagHostConfig::default();
    assert_eq!(host.directory_url(), "https://flagcdn.com/en/codes.json");
    assert_eq!(host.svg_url("fr"), "https://flagcdn.com/fr.svg");
    assert_eq!(host.png_url("us-ca"), "https://flagcdn.com/256x192/us-ca.png");
}

#[test]
fn host_tolerates_trailing_slash() {
    let host = FlagHostConfig { base_url: "http://127.0.0.1:8080/".to_owned(), ..Default::default() };
    assert_eq!(host.svg_url("de"), "http://127.0.0.1:8080/de.svg");
}

#[test]
fn widget_config_deserializes_partial_sections() {
    let raw = json!({
        "host": { "base_url": "https://flags.example", "locale": "uk" },
        "toast": { "max_stack": 2 }
    });

    let cfg: WidgetConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.host.base_url, "https://flags.example");
    assert_eq!(cfg.host.locale, "uk");
    assert_eq!(cfg.host.raster, "256x192");
    assert_eq!(cfg.toast.max_stack, 2);
    assert_eq!(cfg.toast.visible_ms, 3000);
    assert_eq!(cfg.search.debounce_ms, 150);
}

#[test]
fn widget_config_clone_on_write() {
    let original = WidgetConfig::default();
    let mut changed = original.clone();
    changed.search.debounce_ms = 0;

    assert_eq!(original.search.debounce_ms, 150);
    assert_eq!(changed.search.debounce_ms, 0);
}
