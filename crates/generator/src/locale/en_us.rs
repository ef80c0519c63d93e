use super::templates::{
    CompanyPattern, CompanyStyle, LocaleTemplates, NameOrder, SentenceStyle, TitlePattern,
    Vocabulary,
};

pub const TAG: &str = "en-US";

const WORDS: &[&str] = &[
    "river", "shadow", "garden", "empire", "silence", "harbor", "winter", "promise", "machine",
    "forest", "echo", "lantern", "kingdom", "orchard", "storm", "mirror", "voyage", "secret",
    "island", "ember", "horizon", "letter", "bridge", "compass", "feather", "meadow", "summit",
    "thunder", "whisper", "journey", "legacy", "canyon", "fortune", "glass", "hollow", "marble",
    "signal", "tide", "velvet", "wander", "frontier", "memory", "paper", "quarry", "stone",
    "timber", "crown", "dream", "ocean", "portrait", "season", "thread", "valley", "witness",
    "anchor", "beacon", "cipher", "dust", "engine", "flame",
];

const GIVEN_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Margaret", "Mark",
    "Sandra", "Steven", "Ashley", "Paul", "Emily", "Andrew", "Donna", "Joshua", "Michelle",
];

const FAMILY_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Thompson", "White", "Harris", "Clark", "Lewis", "Robinson",
    "Walker", "Young", "Allen", "King", "Wright", "Scott", "Hill", "Green", "Adams", "Baker",
];

const CITIES: &[&str] = &[
    "Springfield", "Riverside", "Fairview", "Madison", "Georgetown", "Franklin", "Clinton",
    "Salem", "Greenville", "Bristol", "Ashland", "Oxford", "Milton", "Newport", "Arlington",
    "Burlington", "Manchester", "Dover", "Hudson", "Kingston", "Lexington", "Marion", "Jackson",
    "Winchester",
];

const COLORS: &[&str] = &[
    "red", "blue", "green", "silver", "golden", "crimson", "violet", "amber", "indigo", "ivory",
    "scarlet", "azure", "copper", "emerald", "black", "white", "orange", "teal",
];

const TITLES: &[(TitlePattern, u32)] = &[
    (TitlePattern::TheWordWord, 2),
    (TitlePattern::WordOfWord, 2),
    (TitlePattern::WordInCity, 1),
    (TitlePattern::PossessiveWord, 1),
    (TitlePattern::TheColorWord, 1),
    (TitlePattern::WordAndWord, 1),
    (TitlePattern::BeyondTheWord, 1),
    (TitlePattern::CountedWords, 1),
    (TitlePattern::TheLastWord, 1),
    (TitlePattern::WordANovel, 1),
];

const COMPANIES: &[(CompanyPattern, u32)] = &[
    (CompanyPattern::Single, 2),
    (CompanyPattern::Pair, 1),
    (CompanyPattern::Partnership, 1),
];

const PUBLISHER_SUFFIXES: &[&str] = &["Press", "Publishing", "Books", "House", "Publications"];

pub fn templates() -> LocaleTemplates {
    LocaleTemplates {
        tag: TAG,
        vocabulary: Vocabulary {
            words: WORDS,
            given_names: GIVEN_NAMES,
            family_names: FAMILY_NAMES,
            cities: CITIES,
            colors: COLORS,
        },
        titles: TITLES,
        title_case: true,
        name_order: NameOrder::GivenFamily,
        companies: COMPANIES,
        company: CompanyStyle {
            pair_separator: "-",
            list_separator: ", ",
            conjunction: " and ",
        },
        publisher_suffixes: PUBLISHER_SUFFIXES,
        publisher_separator: " ",
        sentence: SentenceStyle {
            separator: " ",
            terminator: ".",
            capitalize: true,
            min_words: 10,
            max_words: 20,
        },
    }
}
