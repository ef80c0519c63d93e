use super::templates::{
    CompanyPattern, CompanyStyle, LocaleTemplates, NameOrder, SentenceStyle, TitlePattern,
    Vocabulary,
};

pub const TAG: &str = "de-DE";

const WORDS: &[&str] = &[
    "Wald", "Nacht", "Sturm", "Spiegel", "Garten", "Reise", "Schatten", "Brücke", "Stimme",
    "Licht", "Winter", "Hafen", "Erbe", "Feuer", "Traum", "Stadt", "Zeit", "Meer", "Berg",
    "Fluss", "Himmel", "Stern", "Herz", "Weg", "Tür", "Brief", "Insel", "Krone", "Nebel",
    "Sommer", "Turm", "Grenze", "Wahrheit", "Geheimnis", "Erinnerung", "Stille", "Flamme",
    "Fenster", "Glocke", "Wind", "Ufer", "Schloss", "Tal", "Spur", "Asche", "Morgen",
];

const GIVEN_NAMES: &[&str] = &[
    "Anna", "Lukas", "Lena", "Felix", "Marie", "Jonas", "Sophie", "Leon", "Emma", "Paul", "Mia",
    "Maximilian", "Hannah", "Elias", "Lea", "Noah", "Clara", "Ben", "Johanna", "Finn", "Greta",
    "Moritz", "Frieda", "Karl", "Ida", "Theo", "Luise", "Jakob", "Charlotte", "Emil",
];

const FAMILY_NAMES: &[&str] = &[
    "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker", "Schulz",
    "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf", "Schröder",
    "Neumann", "Schwarz", "Zimmermann", "Braun", "Krüger", "Hofmann", "Hartmann", "Lange",
    "Schmitt", "Werner", "Krause", "Meier", "Lehmann",
];

const CITIES: &[&str] = &[
    "Berlin", "Hamburg", "München", "Köln", "Frankfurt", "Stuttgart", "Düsseldorf", "Leipzig",
    "Dortmund", "Essen", "Bremen", "Dresden", "Hannover", "Nürnberg", "Duisburg", "Bochum",
    "Wuppertal", "Bielefeld", "Bonn", "Münster", "Mannheim", "Augsburg", "Kiel", "Lübeck",
];

const COLORS: &[&str] = &[
    "rot", "blau", "grün", "gelb", "schwarz", "weiß", "grau", "golden", "silbern", "violett",
];

const TITLES: &[(TitlePattern, u32)] = &[
    (TitlePattern::DerWordWord, 1),
    (TitlePattern::DieWordVonCity, 1),
    (TitlePattern::DasWordWord, 1),
    (TitlePattern::WordUndWord, 1),
    (TitlePattern::EineWordGeschichte, 1),
    (TitlePattern::ImWordDerWord, 1),
];

const COMPANIES: &[(CompanyPattern, u32)] = &[
    (CompanyPattern::Single, 2),
    (CompanyPattern::Pair, 1),
    (CompanyPattern::Partnership, 1),
];

const PUBLISHER_SUFFIXES: &[&str] = &["Verlag", "Bücher", "Presse", "Edition"];

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
        title_case: false,
        name_order: NameOrder::GivenFamily,
        companies: COMPANIES,
        company: CompanyStyle {
            pair_separator: "-",
            list_separator: ", ",
            conjunction: " und ",
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
