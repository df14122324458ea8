use albumcolors::config::{SiteConfig, ENV_PRODUCTION_URL};
use albumcolors::page::{load, load_from_env, PageContext};

fn site(url: &str) -> SiteConfig {
    SiteConfig::resolve(Some(url.to_string()), None, None)
}

#[test]
fn load_wraps_resolved_url() {
    let context = load(&site("https://example.vercel.app"));
    assert_eq!(context.url, "https://example.vercel.app");
}

#[test]
fn load_empty_config_yields_empty_url() {
    let config = SiteConfig::resolve(None, None, None);
    assert_eq!(load(&config), PageContext { url: String::new() });
}

#[test]
fn load_is_idempotent() {
    let config = site("https://albums.example");
    assert_eq!(load(&config), load(&config));
    assert_eq!(config.production_url, "https://albums.example"); // config untouched
}

#[test]
fn context_serializes_to_url_record() {
    let value = serde_json::to_value(load(&site("https://example.vercel.app"))).unwrap();
    assert_eq!(value, serde_json::json!({ "url": "https://example.vercel.app" }));
}

#[test]
fn env_value_round_trip() {
    // The variable is process-global and this binary's tests run in parallel
    // threads, so every environment read lives in this single test.
    std::env::remove_var(ENV_PRODUCTION_URL);
    assert_eq!(load_from_env(), PageContext { url: String::new() });

    std::env::set_var(ENV_PRODUCTION_URL, "https://example.vercel.app");
    assert_eq!(load_from_env().url, "https://example.vercel.app");

    std::env::remove_var(ENV_PRODUCTION_URL);
    assert_eq!(load_from_env().url, "");
}
