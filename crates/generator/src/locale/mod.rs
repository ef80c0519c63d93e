//! Locale template engine.
//!
//! Content is produced by a [`TemplateSet`] looked up in a [`LocaleRegistry`]
//! by its tag. Dispatch never branches on the tag itself: adding a locale
//! means registering another template set. Unknown tags resolve to the
//! registry's fallback set (en-US for the built-in registry).

pub mod de_de;
pub mod en_us;
pub mod ja_jp;
pub mod templates;

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::rng::RecordRng;

pub use templates::{isbn, LocaleTemplates};

/// Tag of the locale used when a request names none or an unknown one.
pub const DEFAULT_LOCALE: &str = en_us::TAG;

pub const MIN_AUTHORS: u32 = 1;
pub const MAX_AUTHORS: u32 = 3;

/// Capabilities a locale provides to the record pipeline.
///
/// Each operation draws from the stream it is given; the number of draws may
/// depend on earlier draws but never on anything outside the stream.
pub trait TemplateSet: Send + Sync {
    fn tag(&self) -> &'static str;

    fn title(&self, rng: &mut RecordRng) -> String;

    /// One full personal name, in the locale's display order.
    fn author_name(&self, rng: &mut RecordRng) -> String;

    fn publisher(&self, rng: &mut RecordRng) -> String;

    fn review_text(&self, rng: &mut RecordRng) -> String;

    fn review_author(&self, rng: &mut RecordRng) -> String;

    /// Between one and three author names. The count draw is the same for
    /// every locale.
    fn authors(&self, rng: &mut RecordRng) -> Vec<String> {
        let count = rng.uniform_int(MIN_AUTHORS, MAX_AUTHORS);
        (0..count).map(|_| self.author_name(rng)).collect()
    }
}

static BUILTIN: Lazy<LocaleRegistry> = Lazy::new(|| {
    LocaleRegistry::new(Arc::new(en_us::templates()))
        .with(Arc::new(de_de::templates()))
        .with(Arc::new(ja_jp::templates()))
});

/// Locale tag to template set lookup with a fallback.
pub struct LocaleRegistry {
    sets: Vec<Arc<dyn TemplateSet>>,
    fallback: Arc<dyn TemplateSet>,
}

impl LocaleRegistry {
    /// Creates a registry whose fallback is also its first registered set.
    pub fn new(fallback: Arc<dyn TemplateSet>) -> Self {
        Self {
            sets: vec![fallback.clone()],
            fallback,
        }
    }

    /// The registry holding en-US, de-DE and ja-JP.
    pub fn builtin() -> &'static LocaleRegistry {
        &BUILTIN
    }

    /// Registers `set`, replacing any set with the same tag.
    pub fn with(mut self, set: Arc<dyn TemplateSet>) -> Self {
        match self
            .sets
            .iter_mut()
            .find(|existing| existing.tag().eq_ignore_ascii_case(set.tag()))
        {
            Some(existing) => *existing = set,
            None => self.sets.push(set),
        }
        self
    }

    /// Looks up a registered set. Tags compare case-insensitively.
    pub fn get(&self, tag: &str) -> Option<&dyn TemplateSet> {
        self.sets
            .iter()
            .find(|set| set.tag().eq_ignore_ascii_case(tag.trim()))
            .map(|set| &**set)
    }

    /// Looks up a set, falling back for unknown tags.
    pub fn resolve(&self, tag: &str) -> &dyn TemplateSet {
        self.get(tag).unwrap_or(&*self.fallback)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Registered tags in registration order.
    pub fn tags(&self) -> Vec<&'static str> {
        self.sets.iter().map(|set| set.tag()).collect()
    }

    pub fn fallback_tag(&self) -> &'static str {
        self.fallback.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    impl TemplateSet for Stub {
        fn tag(&self) -> &'static str {
            "xx-TEST"
        }

        fn title(&self, _rng: &mut RecordRng) -> String {
            "stub".to_string()
        }

        fn author_name(&self, rng: &mut RecordRng) -> String {
            format!("author-{}", rng.uniform_int(0, 9))
        }

        fn publisher(&self, _rng: &mut RecordRng) -> String {
            "stub press".to_string()
        }

        fn review_text(&self, _rng: &mut RecordRng) -> String {
            "fine".to_string()
        }

        fn review_author(&self, _rng: &mut RecordRng) -> String {
            "anon".to_string()
        }
    }

    #[test]
    fn builtin_registry_lists_three_locales() {
        assert_eq!(LocaleRegistry::builtin().tags(), vec!["en-US", "de-DE", "ja-JP"]);
        assert_eq!(LocaleRegistry::builtin().fallback_tag(), DEFAULT_LOCALE);
    }

    #[test]
    fn unknown_tag_falls_back_to_default() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.resolve("fr-FR").tag(), "en-US");
        assert_eq!(registry.resolve("").tag(), "en-US");
        assert!(!registry.contains("fr-FR"));
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        let registry = LocaleRegistry::builtin();
        assert_eq!(registry.resolve("de-de").tag(), "de-DE");
        assert_eq!(registry.resolve(" ja-JP ").tag(), "ja-JP");
    }

    #[test]
    fn registry_extends_without_touching_dispatch() {
        let registry = LocaleRegistry::new(Arc::new(en_us::templates())).with(Arc::new(Stub));
        let mut rng = RecordRng::from_seed(1);
        assert_eq!(registry.resolve("xx-TEST").title(&mut rng), "stub");
        assert_eq!(registry.tags(), vec!["en-US", "xx-TEST"]);
    }

    #[test]
    fn registering_same_tag_replaces_set() {
        let registry = LocaleRegistry::new(Arc::new(Stub)).with(Arc::new(Stub));
        assert_eq!(registry.tags().len(), 1);
    }

    #[test]
    fn authors_count_between_one_and_three() {
        let mut rng = RecordRng::from_seed(2);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let authors = Stub.authors(&mut rng);
            assert!((1..=3).contains(&authors.len()));
            seen[authors.len() - 1] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
