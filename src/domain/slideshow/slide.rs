// SPDX-License-Identifier: MPL-2.0
//! Slides and the ordered set a rotator cycles through.

/// Extensions whose content animates on its own.
const ANIMATED_EXTENSIONS: &[&str] = &["gif"];

/// One image-like asset plus its accessibility label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    source: String,
    alt: Option<String>,
    animated: bool,
}

impl Slide {
    /// Creates a slide, guessing whether it animates from the source extension.
    pub fn new(source: impl Into<String>, alt: Option<String>) -> Self {
        let source = source.into();
        let animated = has_animated_extension(&source);
        Self {
            source,
            alt: alt.filter(|text| !text.is_empty()),
            animated,
        }
    }

    /// Overrides the animation flag, e.g. after probing the file contents.
    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// Returns the accessibility label, falling back to `Slide {n}` (1-based).
    #[must_use]
    pub fn alt_text(&self, index: usize) -> String {
        match &self.alt {
            Some(alt) => alt.clone(),
            None => fallback_alt(index),
        }
    }
}

/// Generated label for a slide without alt text.
#[must_use]
pub fn fallback_alt(index: usize) -> String {
    format!("Slide {}", index + 1)
}

fn has_animated_extension(source: &str) -> bool {
    source
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| ANIMATED_EXTENSIONS.contains(&ext.as_str()))
}

/// Ordered, immutable list of slides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    /// Pairs sources with alt texts by index. `alts` may be shorter than
    /// `sources`; missing entries fall back to the generated label.
    pub fn from_sources<S, A>(sources: S, alts: A) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let mut alts = alts.into_iter();
        let slides = sources
            .into_iter()
            .map(|source| Slide::new(source, alts.next().map(Into::into)))
            .collect();
        Self { slides }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether the set has enough slides to rotate at all.
    #[must_use]
    pub fn rotates(&self) -> bool {
        self.slides.len() > 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Index following `index`, wrapping to the first slide.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        if self.slides.is_empty() {
            0
        } else {
            (index + 1) % self.slides.len()
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}
