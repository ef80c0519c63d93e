//! Data-driven template sets and the renderers behind them.
//!
//! A [`LocaleTemplates`] value is plain data: vocabularies, the title and
//! company patterns a locale may use, and a handful of formatting rules.
//! Patterns are enumerated identifiers; each has one renderer arm that draws
//! its slots from the stream in declaration order.

use crate::rng::RecordRng;

use super::TemplateSet;

/// Word pools a locale draws from. Every pool must be non-empty.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub words: &'static [&'static str],
    pub given_names: &'static [&'static str],
    pub family_names: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub colors: &'static [&'static str],
}

/// Order in which the two halves of a personal name are drawn and shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrder {
    GivenFamily,
    FamilyGiven,
}

/// How review sentences are put together.
#[derive(Debug, Clone, Copy)]
pub struct SentenceStyle {
    pub separator: &'static str,
    pub terminator: &'static str,
    pub capitalize: bool,
    pub min_words: u32,
    pub max_words: u32,
}

/// Separators used to build organisation names.
#[derive(Debug, Clone, Copy)]
pub struct CompanyStyle {
    pub pair_separator: &'static str,
    pub list_separator: &'static str,
    pub conjunction: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitlePattern {
    // en-US
    TheWordWord,
    WordOfWord,
    WordInCity,
    PossessiveWord,
    TheColorWord,
    WordAndWord,
    BeyondTheWord,
    CountedWords,
    TheLastWord,
    WordANovel,
    // de-DE
    DerWordWord,
    DieWordVonCity,
    DasWordWord,
    WordUndWord,
    EineWordGeschichte,
    ImWordDerWord,
    // ja-JP
    WordNoWord,
    WordToWord,
    WordMonogatari,
    CityNoWord,
    WordNiTsuite,
}

impl TitlePattern {
    pub fn render(self, set: &LocaleTemplates, rng: &mut RecordRng) -> String {
        use TitlePattern::*;

        match self {
            TheWordWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("The {first} {second}")
            }
            WordOfWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("{first} of {second}")
            }
            WordInCity => {
                let word = set.title_word(rng);
                let city = rng.pick(set.vocabulary.cities);
                format!("A {word} in {city}")
            }
            PossessiveWord => {
                let name = rng.pick(set.vocabulary.given_names);
                let word = set.title_word(rng);
                format!("{name}'s {word}")
            }
            TheColorWord => {
                let color = set.cased(*rng.pick(set.vocabulary.colors));
                let word = set.title_word(rng);
                format!("The {color} {word}")
            }
            WordAndWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("{first} and {second}")
            }
            BeyondTheWord => format!("Beyond the {}", set.title_word(rng)),
            CountedWords => {
                let count = rng.uniform_int(2, 100);
                let word = set.title_word(rng);
                format!("{count} {word}s")
            }
            TheLastWord => format!("The Last {}", set.title_word(rng)),
            WordANovel => format!("{}: A Novel", set.title_word(rng)),
            DerWordWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("Der {first} {second}")
            }
            DieWordVonCity => {
                let word = set.title_word(rng);
                let city = rng.pick(set.vocabulary.cities);
                format!("Die {word} von {city}")
            }
            DasWordWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("Das {first} {second}")
            }
            WordUndWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("{first} und {second}")
            }
            EineWordGeschichte => format!("Eine {} Geschichte", set.title_word(rng)),
            ImWordDerWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("Im {first} der {second}")
            }
            WordNoWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("{first}の{second}")
            }
            WordToWord => {
                let first = set.title_word(rng);
                let second = set.title_word(rng);
                format!("{first}と{second}")
            }
            WordMonogatari => format!("{}物語", set.title_word(rng)),
            CityNoWord => {
                let city = rng.pick(set.vocabulary.cities);
                let word = set.title_word(rng);
                format!("{city}の{word}")
            }
            WordNiTsuite => format!("{}について", set.title_word(rng)),
        }
    }
}

/// Shapes of the organisation name in front of a publisher suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyPattern {
    /// `Family`
    Single,
    /// `Family-Family`
    Pair,
    /// `Family, Family and Family`
    Partnership,
}

impl CompanyPattern {
    pub fn render(self, set: &LocaleTemplates, rng: &mut RecordRng) -> String {
        let style = &set.company;
        match self {
            CompanyPattern::Single => rng.pick(set.vocabulary.family_names).to_string(),
            CompanyPattern::Pair => {
                let first = rng.pick(set.vocabulary.family_names);
                let second = rng.pick(set.vocabulary.family_names);
                format!("{first}{}{second}", style.pair_separator)
            }
            CompanyPattern::Partnership => {
                let first = rng.pick(set.vocabulary.family_names);
                let second = rng.pick(set.vocabulary.family_names);
                let third = rng.pick(set.vocabulary.family_names);
                format!(
                    "{first}{}{second}{}{third}",
                    style.list_separator, style.conjunction
                )
            }
        }
    }
}

/// A complete, data-only template set for one locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleTemplates {
    pub tag: &'static str,
    pub vocabulary: Vocabulary,
    pub titles: &'static [(TitlePattern, u32)],
    pub title_case: bool,
    pub name_order: NameOrder,
    pub companies: &'static [(CompanyPattern, u32)],
    pub company: CompanyStyle,
    pub publisher_suffixes: &'static [&'static str],
    pub publisher_separator: &'static str,
    pub sentence: SentenceStyle,
}

impl LocaleTemplates {
    fn cased(&self, word: &str) -> String {
        if self.title_case {
            title_case(word)
        } else {
            word.to_string()
        }
    }

    fn title_word(&self, rng: &mut RecordRng) -> String {
        self.cased(*rng.pick(self.vocabulary.words))
    }

    /// Draws both name halves in locale order, returning `(leading, trailing)`.
    fn name_parts(&self, rng: &mut RecordRng) -> (&'static str, &'static str) {
        let first = match self.name_order {
            NameOrder::GivenFamily => *rng.pick(self.vocabulary.given_names),
            NameOrder::FamilyGiven => *rng.pick(self.vocabulary.family_names),
        };
        let second = match self.name_order {
            NameOrder::GivenFamily => *rng.pick(self.vocabulary.family_names),
            NameOrder::FamilyGiven => *rng.pick(self.vocabulary.given_names),
        };
        (first, second)
    }
}

impl TemplateSet for LocaleTemplates {
    fn tag(&self) -> &'static str {
        self.tag
    }

    fn title(&self, rng: &mut RecordRng) -> String {
        rng.weighted_pick(self.titles).render(self, rng)
    }

    fn author_name(&self, rng: &mut RecordRng) -> String {
        let (leading, trailing) = self.name_parts(rng);
        format!("{leading} {trailing}")
    }

    fn publisher(&self, rng: &mut RecordRng) -> String {
        let prefix = rng.weighted_pick(self.companies).render(self, rng);
        let suffix = rng.pick(self.publisher_suffixes);
        format!("{prefix}{}{suffix}", self.publisher_separator)
    }

    fn review_text(&self, rng: &mut RecordRng) -> String {
        let style = &self.sentence;
        let count = rng.uniform_int(style.min_words, style.max_words);
        let words: Vec<&str> = (0..count).map(|_| *rng.pick(self.vocabulary.words)).collect();
        let body = words.join(style.separator);
        let body = if style.capitalize {
            capitalize_first(&body)
        } else {
            body
        };
        format!("{body}{}", style.terminator)
    }

    fn review_author(&self, rng: &mut RecordRng) -> String {
        let (leading, trailing) = self.name_parts(rng);
        abbreviate(leading, trailing)
    }
}

/// Renders the ISBN-like identifier `978-G-PP-TTTTTT-C`. Takes four draws.
///
/// Only the shape matches an ISBN-13; the check digit is random.
pub fn isbn(rng: &mut RecordRng) -> String {
    let group = rng.uniform_int(0, 9);
    let publisher = rng.uniform_int(10, 99);
    let title = rng.uniform_int(100_000, 999_999);
    let check = rng.uniform_int(0, 9);
    format!("978-{group}-{publisher}-{title}-{check}")
}

/// `"Anna", "Schmidt"` becomes `"Anna S."`. An empty trailing part yields
/// just the leading part.
pub fn abbreviate(leading: &str, trailing: &str) -> String {
    match trailing.trim().chars().next() {
        Some(initial) => format!("{leading} {initial}.").trim().to_string(),
        None => leading.trim().to_string(),
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
