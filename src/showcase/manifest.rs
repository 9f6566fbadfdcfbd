// SPDX-License-Identifier: MPL-2.0
//! Showcase manifest parsing.
//!
//! ```toml
//! [site]
//! name = "Ada L."
//! tagline = "Developer and designer"
//! footer = "Available for freelance work."
//!
//! [[entry]]
//! title = "Terminal dashboard"
//! description = "Live metrics in 80 columns."
//! interval_ms = 4000
//!
//! [[entry.slide]]
//! source = "shots/overview.png"
//! alt = "Overview screen"
//!
//! [[service]]
//! title = "Quick Fixes"
//! description = "Bugs, updates and small improvements."
//! price = "$75+"
//! delivery = "1-2 day"
//! subject = "Quick Fix Inquiry"
//! message = "Hi, I have a problem for you to solve."
//! ```
//!
//! Relative slide sources resolve against the manifest's directory; `http`
//! and `https` sources are kept as-is.

use super::{local_slide, Profile, Service, Showcase, ShowcaseEntry};
use crate::domain::slideshow::{RotationInterval, Slide, SlideSet};
use crate::error::{Error, Result};
use crate::media::is_remote;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    site: SiteRecord,
    #[serde(default, rename = "entry")]
    entries: Vec<EntryRecord>,
    #[serde(default, rename = "service")]
    services: Vec<ServiceRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct SiteRecord {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    tagline: Option<String>,
    #[serde(default)]
    footer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    interval_ms: Option<u64>,
    #[serde(default, rename = "slide")]
    slides: Vec<SlideRecord>,
}

#[derive(Debug, Deserialize)]
struct SlideRecord {
    source: String,
    #[serde(default)]
    alt: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServiceRecord {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    delivery: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Loads the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Showcase> {
    let content = std::fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    parse_manifest(&content, base)
}

/// Parses manifest text, resolving relative sources against `base`.
pub fn parse_manifest(content: &str, base: &Path) -> Result<Showcase> {
    let manifest: ManifestFile =
        toml::from_str(content).map_err(|e| Error::Manifest(e.to_string()))?;

    let entries = manifest
        .entries
        .into_iter()
        .map(|record| ShowcaseEntry {
            title: record.title,
            description: non_blank(record.description),
            interval: record.interval_ms.map(RotationInterval::new),
            slides: SlideSet::new(
                record
                    .slides
                    .into_iter()
                    .map(|slide| resolve_slide(slide, base))
                    .collect(),
            ),
        })
        .collect();

    let services = manifest
        .services
        .into_iter()
        .map(|record| Service {
            title: record.title,
            description: non_blank(record.description),
            price: non_blank(record.price),
            delivery: non_blank(record.delivery),
            subject: non_blank(record.subject),
            message: non_blank(record.message),
        })
        .collect();

    let profile = Profile {
        name: non_blank(manifest.site.name),
        tagline: non_blank(manifest.site.tagline),
        footer: non_blank(manifest.site.footer),
    };

    Ok(Showcase {
        profile,
        entries,
        services,
    })
}

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}

fn resolve_slide(record: SlideRecord, base: &Path) -> Slide {
    if is_remote(&record.source) {
        return Slide::new(record.source, record.alt);
    }
    local_slide(&base.join(&record.source), record.alt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[entry]]
title = "Dashboard"
description = "Live metrics"
interval_ms = 4000

[[entry.slide]]
source = "shots/one.png"
alt = "Overview"

[[entry.slide]]
source = "https://example.com/two.gif"

[[entry]]
title = "Empty"
description = "  "

[[service]]
title = "Quick Fixes"
description = "Bugs and small improvements"
price = "$75+"
delivery = "1-2 day"
subject = "Quick Fix Inquiry"
message = """
Hi, I have a problem for you to solve.

[Details, budget, timeline]"""

[[service]]
title = "Landing Page"
price = " "
"#;

    #[test]
    fn parses_entries_and_resolves_sources() {
        let entries = parse_manifest(SAMPLE, Path::new("/portfolio"))
            .expect("parse")
            .entries;
        assert_eq!(entries.len(), 2);

        let dashboard = &entries[0];
        assert_eq!(dashboard.title, "Dashboard");
        assert_eq!(dashboard.description.as_deref(), Some("Live metrics"));
        assert_eq!(dashboard.interval.map(|i| i.millis()), Some(4000));
        assert_eq!(dashboard.slides.len(), 2);

        let first = dashboard.slides.get(0).expect("first slide");
        assert_eq!(
            PathBuf::from(first.source()),
            Path::new("/portfolio").join("shots/one.png")
        );
        assert_eq!(first.alt_text(0), "Overview");

        let second = dashboard.slides.get(1).expect("second slide");
        assert_eq!(second.source(), "https://example.com/two.gif");
        assert!(second.is_animated());
        assert_eq!(second.alt_text(1), "Slide 2");
    }

    #[test]
    fn blank_description_and_missing_fields_are_none() {
        let entries = parse_manifest(SAMPLE, Path::new("/")).expect("parse").entries;
        let empty = &entries[1];
        assert!(empty.description.is_none());
        assert!(empty.interval.is_none());
        assert!(empty.slides.is_empty());
    }

    #[test]
    fn services_keep_their_inquiry() {
        let services = parse_manifest(SAMPLE, Path::new("/")).expect("parse").services;
        assert_eq!(services.len(), 2);

        let quick = &services[0];
        assert_eq!(quick.title, "Quick Fixes");
        assert_eq!(quick.price.as_deref(), Some("$75+"));
        assert_eq!(quick.delivery.as_deref(), Some("1-2 day"));
        assert_eq!(quick.subject.as_deref(), Some("Quick Fix Inquiry"));
        assert_eq!(
            quick.message.as_deref(),
            Some("Hi, I have a problem for you to solve.\n\n[Details, budget, timeline]")
        );

        let landing = &services[1];
        assert!(landing.price.is_none());
        assert!(landing.subject.is_none());
        assert!(landing.message.is_none());
    }

    #[test]
    fn site_table_fills_profile() {
        let showcase = parse_manifest(
            "[site]\nname = \"Ada L.\"\ntagline = \"Developer\"\nfooter = \"\"\n",
            Path::new("/"),
        )
        .expect("parse");
        assert_eq!(showcase.profile.name.as_deref(), Some("Ada L."));
        assert_eq!(showcase.profile.tagline.as_deref(), Some("Developer"));
        assert!(showcase.profile.footer.is_none());
        assert!(showcase.entries.is_empty());
    }

    #[test]
    fn missing_site_table_is_empty_profile() {
        let showcase = parse_manifest(SAMPLE, Path::new("/")).expect("parse");
        assert_eq!(showcase.profile, Profile::default());
    }

    #[test]
    fn interval_keeps_periods_longer_than_the_crossfade() {
        let entries = parse_manifest(
            "[[entry]]\ntitle = \"Fast\"\ninterval_ms = 900\n\n\
             [[entry]]\ntitle = \"Slow\"\ninterval_ms = 120000\n\n\
             [[entry]]\ntitle = \"Too fast\"\ninterval_ms = 10\n",
            Path::new("/"),
        )
        .expect("parse")
        .entries;
        let millis: Vec<_> = entries
            .iter()
            .map(|entry| entry.interval.map(|i| i.millis()))
            .collect();
        assert_eq!(
            millis,
            [
                Some(900),
                Some(120_000),
                Some(crate::domain::slideshow::rotation_bounds::MIN_INTERVAL_MS)
            ]
        );
    }

    #[test]
    fn invalid_manifest_is_manifest_error() {
        let err = parse_manifest("[[entry]]\ndescription = 3\n", Path::new("/")).unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_manifest_reads_relative_to_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("showcase.toml");
        std::fs::write(&path, SAMPLE).expect("write");

        let showcase = load_manifest(&path).expect("load");
        let first = showcase.entries[0].slides.get(0).expect("slide");
        assert_eq!(PathBuf::from(first.source()), dir.path().join("shots/one.png"));
    }
}
