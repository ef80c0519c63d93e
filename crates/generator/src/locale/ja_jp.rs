use super::templates::{
    CompanyPattern, CompanyStyle, LocaleTemplates, NameOrder, SentenceStyle, TitlePattern,
    Vocabulary,
};

pub const TAG: &str = "ja-JP";

const WORDS: &[&str] = &[
    "桜", "月", "夜", "海", "空", "風", "雪", "花", "星", "夢", "森", "川", "山", "光", "影",
    "心", "時間", "記憶", "約束", "手紙", "秘密", "旅", "季節", "言葉", "未来", "物語", "島",
    "鏡", "炎", "声", "道", "庭", "雨", "雲", "猫", "鳥", "街", "橋", "扉", "灯り",
];

const GIVEN_NAMES: &[&str] = &[
    "太郎", "花子", "翔太", "陽菜", "大輔", "美咲", "健太", "さくら", "蓮", "結衣", "悠斗", "葵",
    "拓海", "凛", "颯太", "愛", "直樹", "真央", "亮", "彩",
];

const FAMILY_NAMES: &[&str] = &[
    "佐藤", "鈴木", "高橋", "田中", "伊藤", "渡辺", "山本", "中村", "小林", "加藤", "吉田",
    "山田", "佐々木", "山口", "松本", "井上", "木村", "林", "清水", "斎藤",
];

const CITIES: &[&str] = &[
    "東京", "大阪", "京都", "横浜", "名古屋", "札幌", "神戸", "福岡", "仙台", "広島", "奈良",
    "金沢", "長崎", "函館", "鎌倉", "那覇",
];

const COLORS: &[&str] = &["赤", "青", "緑", "白", "黒", "金", "銀", "紫"];

const TITLES: &[(TitlePattern, u32)] = &[
    (TitlePattern::WordNoWord, 2),
    (TitlePattern::WordToWord, 1),
    (TitlePattern::WordMonogatari, 1),
    (TitlePattern::CityNoWord, 1),
    (TitlePattern::WordNiTsuite, 1),
];

const COMPANIES: &[(CompanyPattern, u32)] = &[
    (CompanyPattern::Single, 3),
    (CompanyPattern::Pair, 1),
    (CompanyPattern::Partnership, 1),
];

const PUBLISHER_SUFFIXES: &[&str] = &["出版", "書房", "堂", "社"];

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
        name_order: NameOrder::FamilyGiven,
        companies: COMPANIES,
        company: CompanyStyle {
            pair_separator: "・",
            list_separator: "・",
            conjunction: "と",
        },
        publisher_suffixes: PUBLISHER_SUFFIXES,
        publisher_separator: "",
        sentence: SentenceStyle {
            separator: "",
            terminator: "。",
            capitalize: false,
            min_words: 15,
            max_words: 25,
        },
    }
}
