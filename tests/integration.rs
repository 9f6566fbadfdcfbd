// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::config::{self, Config, GeneralConfig};
use iced_showcase::app::i18n::fluent::I18n;
use iced_showcase::domain::slideshow::{RotationInterval, Rotator, SlideSet};
use iced_showcase::showcase;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("contact-send"), "Send Message");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(i18n_fr.tr("contact-send"), "Send Message");
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_interval_setting_is_raised_only_below_the_crossfade() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[slideshow]\ninterval_ms = 10\n").expect("write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.slideshow.interval().millis(), config::MIN_INTERVAL_MS);
    assert!(loaded.slideshow.pauses_on_hover());

    for millis in [900, 120_000] {
        fs::write(&config_path, format!("[slideshow]\ninterval_ms = {millis}\n"))
            .expect("write config");
        let loaded = config::load_from_path(&config_path).expect("Failed to load config");
        let rotator = Rotator::mount(
            SlideSet::from_sources(["a.png", "b.png"], Vec::<String>::new()),
            loaded.slideshow.interval(),
        );
        assert_eq!(rotator.interval().millis(), millis);
    }
}

#[test]
fn test_manifest_drives_rotators() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("showcase.toml");
    fs::write(
        &manifest_path,
        r#"
[[entry]]
title = "Terminal dashboard"
interval_ms = 4000

[[entry.slide]]
source = "shots/one.png"
alt = "First screen"

[[entry.slide]]
source = "shots/two.png"

[[entry]]
title = "Single shot"

[[entry.slide]]
source = "https://example.com/cover.png"
"#,
    )
    .expect("write manifest");

    let entries = showcase::load(&manifest_path)
        .expect("manifest loads")
        .entries;
    assert_eq!(entries.len(), 2);

    let first = &entries[0];
    let rotator = Rotator::mount(
        first.slides.clone(),
        first.interval_or(RotationInterval::default()),
    );
    assert_eq!(rotator.interval().millis(), 4000);
    assert!(rotator.armed_timers().interval.is_some());

    let render = rotator.render(0.0);
    assert_eq!(render.layers.len(), 1);
    assert_eq!(render.layers[0].alt, "First screen");
    assert!(render.layers[0].source.ends_with("one.png"));

    let second = &entries[1];
    let rotator = Rotator::mount(
        second.slides.clone(),
        second.interval_or(RotationInterval::default()),
    );
    assert!(rotator.armed_timers().is_empty());
    assert_eq!(rotator.render(0.0).layers[0].alt, "Slide 1");
    assert_eq!(
        rotator.render(0.0).layers[0].source,
        "https://example.com/cover.png"
    );
}

#[test]
fn test_directory_becomes_single_entry() {
    let dir = tempdir().expect("Failed to create temporary directory");
    for name in ["b.png", "A.jpg", "notes.txt"] {
        fs::write(dir.path().join(name), b"not really an image").expect("write file");
    }

    let entries = showcase::load(dir.path()).expect("directory loads").entries;
    assert_eq!(entries.len(), 1);

    let sources: Vec<_> = entries[0]
        .slides
        .iter()
        .map(|slide| slide.source().to_string())
        .collect();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].ends_with("A.jpg"));
    assert!(sources[1].ends_with("b.png"));
}

#[test]
fn test_manifest_services_and_site() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("showcase.toml");
    fs::write(
        &manifest_path,
        r#"
[site]
name = "Ada L."
tagline = "Developer and designer"
footer = "Available for freelance work."

[[service]]
title = "API Integration"
description = "Payment processors, CRMs and custom APIs."
price = "$100+"
delivery = "3-5 day"
subject = "API Integration Inquiry"
message = "Hi, I'm interested in your API integration service."
"#,
    )
    .expect("write manifest");

    let showcase = showcase::load(&manifest_path).expect("manifest loads");
    assert!(showcase.entries.is_empty());
    assert_eq!(showcase.profile.name.as_deref(), Some("Ada L."));
    assert_eq!(
        showcase.profile.footer.as_deref(),
        Some("Available for freelance work.")
    );

    let service = &showcase.services[0];
    assert_eq!(service.price.as_deref(), Some("$100+"));
    assert_eq!(service.subject.as_deref(), Some("API Integration Inquiry"));
}
