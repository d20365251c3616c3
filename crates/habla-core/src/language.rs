use std::sync::LazyLock;

use habla_translator::LanguageCode;

/// Token standing in for "I don't know the source language"
pub const UNKNOWN_MARKER: &str = "?";

static MAX_NAME_WORDS: LazyLock<usize> = LazyLock::new(|| {
    LANGUAGES
        .iter()
        .map(|l| l.name)
        .chain(ALIASES.iter().map(|(alias, _)| *alias))
        .map(|name| name.split_whitespace().count())
        .max()
        .unwrap_or(1)
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
}

const fn lang(code: &'static str, name: &'static str, native_name: &'static str) -> Language {
    Language {
        code,
        name,
        native_name,
    }
}

/// ISO 639-1 languages followed by the extra codes the translation provider uses
static LANGUAGES: &[Language] = &[
    lang("aa", "Afar", "Afaraf"),
    lang("ab", "Abkhaz", "аҧсуа бызшәа"),
    lang("ae", "Avestan", "avesta"),
    lang("af", "Afrikaans", "Afrikaans"),
    lang("ak", "Akan", "Akan"),
    lang("am", "Amharic", "አማርኛ"),
    lang("an", "Aragonese", "aragonés"),
    lang("ar", "Arabic", "العربية"),
    lang("as", "Assamese", "অসমীয়া"),
    lang("av", "Avaric", "авар мацӀ"),
    lang("ay", "Aymara", "aymar aru"),
    lang("az", "Azerbaijani", "azərbaycan dili"),
    lang("ba", "Bashkir", "башҡорт теле"),
    lang("be", "Belarusian", "беларуская мова"),
    lang("bg", "Bulgarian", "български език"),
    lang("bh", "Bihari", "भोजपुरी"),
    lang("bi", "Bislama", "Bislama"),
    lang("bm", "Bambara", "bamanankan"),
    lang("bn", "Bengali", "বাংলা"),
    lang("bo", "Tibetan", "བོད་ཡིག"),
    lang("br", "Breton", "brezhoneg"),
    lang("bs", "Bosnian", "bosanski jezik"),
    lang("ca", "Catalan", "Català"),
    lang("ce", "Chechen", "нохчийн мотт"),
    lang("ch", "Chamorro", "Chamoru"),
    lang("co", "Corsican", "corsu"),
    lang("cr", "Cree", "ᓀᐦᐃᔭᐍᐏᐣ"),
    lang("cs", "Czech", "čeština"),
    lang("cu", "Old Church Slavonic", "ѩзыкъ словѣньскъ"),
    lang("cv", "Chuvash", "чӑваш чӗлхи"),
    lang("cy", "Welsh", "Cymraeg"),
    lang("da", "Danish", "dansk"),
    lang("de", "German", "Deutsch"),
    lang("dv", "Divehi", "Dhivehi"),
    lang("dz", "Dzongkha", "རྫོང་ཁ"),
    lang("ee", "Ewe", "Eʋegbe"),
    lang("el", "Greek", "Ελληνικά"),
    lang("en", "English", "English"),
    lang("eo", "Esperanto", "Esperanto"),
    lang("es", "Spanish", "Español"),
    lang("et", "Estonian", "eesti"),
    lang("eu", "Basque", "euskara"),
    lang("fa", "Persian", "فارسی"),
    lang("ff", "Fula", "Fulfulde"),
    lang("fi", "Finnish", "suomi"),
    lang("fj", "Fijian", "vosa Vakaviti"),
    lang("fo", "Faroese", "føroyskt"),
    lang("fr", "French", "Français"),
    lang("fy", "Western Frisian", "Frysk"),
    lang("ga", "Irish", "Gaeilge"),
    lang("gd", "Scottish Gaelic", "Gàidhlig"),
    lang("gl", "Galician", "galego"),
    lang("gn", "Guaraní", "Avañe'ẽ"),
    lang("gu", "Gujarati", "ગુજરાતી"),
    lang("gv", "Manx", "Gaelg"),
    lang("ha", "Hausa", "هَوُسَ"),
    lang("he", "Hebrew", "עברית"),
    lang("hi", "Hindi", "हिन्दी"),
    lang("ho", "Hiri Motu", "Hiri Motu"),
    lang("hr", "Croatian", "hrvatski jezik"),
    lang("ht", "Haitian Creole", "Kreyòl ayisyen"),
    lang("hu", "Hungarian", "magyar"),
    lang("hy", "Armenian", "Հայերեն"),
    lang("hz", "Herero", "Otjiherero"),
    lang("ia", "Interlingua", "Interlingua"),
    lang("id", "Indonesian", "Bahasa Indonesia"),
    lang("ie", "Interlingue", "Interlingue"),
    lang("ig", "Igbo", "Asụsụ Igbo"),
    lang("ii", "Nuosu", "ꆈꌠ꒿ Nuosuhxop"),
    lang("ik", "Inupiaq", "Iñupiaq"),
    lang("io", "Ido", "Ido"),
    lang("is", "Icelandic", "Íslenska"),
    lang("it", "Italian", "Italiano"),
    lang("iu", "Inuktitut", "ᐃᓄᒃᑎᑐᑦ"),
    lang("ja", "Japanese", "日本語"),
    lang("jv", "Javanese", "basa Jawa"),
    lang("ka", "Georgian", "ქართული"),
    lang("kg", "Kongo", "Kikongo"),
    lang("ki", "Kikuyu", "Gĩkũyũ"),
    lang("kj", "Kwanyama", "Kuanyama"),
    lang("kk", "Kazakh", "қазақ тілі"),
    lang("kl", "Kalaallisut", "kalaallisut"),
    lang("km", "Khmer", "ខេមរភាសា"),
    lang("kn", "Kannada", "ಕನ್ನಡ"),
    lang("ko", "Korean", "한국어"),
    lang("kr", "Kanuri", "Kanuri"),
    lang("ks", "Kashmiri", "कश्मीरी"),
    lang("ku", "Kurdish", "Kurdî"),
    lang("kv", "Komi", "коми кыв"),
    lang("kw", "Cornish", "Kernewek"),
    lang("ky", "Kyrgyz", "Кыргызча"),
    lang("la", "Latin", "latine"),
    lang("lb", "Luxembourgish", "Lëtzebuergesch"),
    lang("lg", "Ganda", "Luganda"),
    lang("li", "Limburgish", "Limburgs"),
    lang("ln", "Lingala", "Lingála"),
    lang("lo", "Lao", "ພາສາ"),
    lang("lt", "Lithuanian", "lietuvių kalba"),
    lang("lu", "Luba-Katanga", "Tshiluba"),
    lang("lv", "Latvian", "latviešu valoda"),
    lang("mg", "Malagasy", "fiteny malagasy"),
    lang("mh", "Marshallese", "Kajin M̧ajeļ"),
    lang("mi", "Māori", "te reo Māori"),
    lang("mk", "Macedonian", "македонски јазик"),
    lang("ml", "Malayalam", "മലയാളം"),
    lang("mn", "Mongolian", "Монгол хэл"),
    lang("mr", "Marathi", "मराठी"),
    lang("ms", "Malay", "Bahasa Melayu"),
    lang("mt", "Maltese", "Malti"),
    lang("my", "Burmese", "ဗမာစာ"),
    lang("na", "Nauru", "Dorerin Naoero"),
    lang("nb", "Norwegian Bokmål", "Norsk bokmål"),
    lang("nd", "Northern Ndebele", "isiNdebele"),
    lang("ne", "Nepali", "नेपाली"),
    lang("ng", "Ndonga", "Owambo"),
    lang("nl", "Dutch", "Nederlands"),
    lang("nn", "Norwegian Nynorsk", "Norsk nynorsk"),
    lang("no", "Norwegian", "Norsk"),
    lang("nr", "Southern Ndebele", "isiNdebele"),
    lang("nv", "Navajo", "Diné bizaad"),
    lang("ny", "Chichewa", "chiCheŵa"),
    lang("oc", "Occitan", "occitan"),
    lang("oj", "Ojibwe", "ᐊᓂᔑᓈᐯᒧᐎᓐ"),
    lang("om", "Oromo", "Afaan Oromoo"),
    lang("or", "Oriya", "ଓଡ଼ିଆ"),
    lang("os", "Ossetian", "ирон æвзаг"),
    lang("pa", "Panjabi", "ਪੰਜਾਬੀ"),
    lang("pi", "Pāli", "पाऴि"),
    lang("pl", "Polish", "polski"),
    lang("ps", "Pashto", "پښتو"),
    lang("pt", "Portuguese", "Português"),
    lang("qu", "Quechua", "Runa Simi"),
    lang("rm", "Romansh", "rumantsch grischun"),
    lang("rn", "Kirundi", "Ikirundi"),
    lang("ro", "Romanian", "Română"),
    lang("ru", "Russian", "Русский"),
    lang("rw", "Kinyarwanda", "Ikinyarwanda"),
    lang("sa", "Sanskrit", "संस्कृतम्"),
    lang("sc", "Sardinian", "sardu"),
    lang("sd", "Sindhi", "सिन्धी"),
    lang("se", "Northern Sami", "Davvisámegiella"),
    lang("sg", "Sango", "yângâ tî sängö"),
    lang("si", "Sinhala", "සිංහල"),
    lang("sk", "Slovak", "slovenčina"),
    lang("sl", "Slovenian", "slovenščina"),
    lang("sm", "Samoan", "gagana faa Samoa"),
    lang("sn", "Shona", "chiShona"),
    lang("so", "Somali", "Soomaaliga"),
    lang("sq", "Albanian", "Shqip"),
    lang("sr", "Serbian", "српски језик"),
    lang("ss", "Swati", "SiSwati"),
    lang("st", "Southern Sotho", "Sesotho"),
    lang("su", "Sundanese", "Basa Sunda"),
    lang("sv", "Swedish", "Svenska"),
    lang("sw", "Swahili", "Kiswahili"),
    lang("ta", "Tamil", "தமிழ்"),
    lang("te", "Telugu", "తెలుగు"),
    lang("tg", "Tajik", "тоҷикӣ"),
    lang("th", "Thai", "ไทย"),
    lang("ti", "Tigrinya", "ትግርኛ"),
    lang("tk", "Turkmen", "Türkmen"),
    lang("tl", "Tagalog", "Wikang Tagalog"),
    lang("tn", "Tswana", "Setswana"),
    lang("to", "Tonga", "faka Tonga"),
    lang("tr", "Turkish", "Türkçe"),
    lang("ts", "Tsonga", "Xitsonga"),
    lang("tt", "Tatar", "татар теле"),
    lang("tw", "Twi", "Twi"),
    lang("ty", "Tahitian", "Reo Tahiti"),
    lang("ug", "Uyghur", "ئۇيغۇرچە‎"),
    lang("uk", "Ukrainian", "Українська"),
    lang("ur", "Urdu", "اردو"),
    lang("uz", "Uzbek", "Ўзбек"),
    lang("ve", "Venda", "Tshivenḓa"),
    lang("vi", "Vietnamese", "Tiếng Việt"),
    lang("vo", "Volapük", "Volapük"),
    lang("wa", "Walloon", "walon"),
    lang("wo", "Wolof", "Wollof"),
    lang("xh", "Xhosa", "isiXhosa"),
    lang("yi", "Yiddish", "ייִדיש"),
    lang("yo", "Yoruba", "Yorùbá"),
    lang("za", "Zhuang", "Saɯ cueŋƅ"),
    lang("zh", "Chinese", "中文"),
    lang("zu", "Zulu", "isiZulu"),
    // Provider codes outside ISO 639-1
    lang("zh-CN", "Simplified Chinese", "简体中文"),
    lang("zh-TW", "Traditional Chinese", "繁體中文"),
    lang("iw", "Hebrew", "עברית"),
    lang("jw", "Javanese", "basa Jawa"),
    lang("fil", "Filipino", "Filipino"),
    lang("haw", "Hawaiian", "ʻŌlelo Hawaiʻi"),
    lang("hmn", "Hmong", "Hmoob"),
    lang("ceb", "Cebuano", "Binisaya"),
    lang("ckb", "Sorani Kurdish", "کوردیی ناوەندی"),
    lang("mni-Mtei", "Meiteilon", "ꯃꯤꯇꯩꯂꯣꯟ"),
];

/// Extra spellings people use that aren't a table name
static ALIASES: &[(&str, &str)] = &[
    ("brazilian portuguese", "pt"),
    ("chinese simplified", "zh-CN"),
    ("chinese traditional", "zh-TW"),
    ("mandarin", "zh-CN"),
    ("farsi", "fa"),
    ("punjabi", "pa"),
    ("maori", "mi"),
    ("kurmanji", "ku"),
    ("castilian", "es"),
    ("flemish", "nl"),
];

/// Looks a language up by code or English name, ignoring case
pub fn lookup(token: &str) -> Option<&'static Language> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    if let Some(language) = LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(token)) {
        return Some(language);
    }

    let wanted = token.to_lowercase();
    if let Some(language) = LANGUAGES.iter().find(|l| l.name.to_lowercase() == wanted) {
        return Some(language);
    }

    ALIASES
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .and_then(|(_, code)| LANGUAGES.iter().find(|l| l.code == *code))
}

/// Word count of the longest name or alias in the table
pub fn max_name_words() -> usize {
    *MAX_NAME_WORDS
}

pub fn is_known(token: &str) -> bool {
    lookup(token).is_some()
}

/// Canonical code for `token`, or the token itself when the table doesn't know it
pub fn resolve(token: &str) -> LanguageCode {
    match lookup(token) {
        Some(language) => language.code.to_string(),
        None => token.trim().to_string(),
    }
}

/// Human readable English name for `code`, falling back to the code
pub fn display_name(code: &str) -> String {
    LANGUAGES
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(code))
        .map(|l| l.name.to_string())
        .unwrap_or_else(|| code.to_string())
}

pub fn native_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(code))
        .map(|l| l.native_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_code_and_name() {
        assert_eq!(resolve("fr"), "fr");
        assert_eq!(resolve("FR"), "fr");
        assert_eq!(resolve("french"), "fr");
        assert_eq!(resolve("German"), "de");
    }

    #[test]
    fn test_max_name_words_covers_every_name() {
        assert_eq!(max_name_words(), 3);
        assert_eq!(resolve("Old Church Slavonic"), "cu");
    }

    #[test]
    fn test_resolve_multi_word_names() {
        assert_eq!(resolve("scottish gaelic"), "gd");
        assert_eq!(resolve("Brazilian Portuguese"), "pt");
        assert_eq!(resolve("chinese traditional"), "zh-TW");
        assert_eq!(resolve("norwegian bokmål"), "nb");
    }

    #[test]
    fn test_resolve_passes_unknown_tokens_through() {
        assert_eq!(resolve("klingon"), "klingon");
        assert_eq!(resolve("xx"), "xx");
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for token in ["en", "french", "zh-tw", "klingon", "Scottish Gaelic"] {
            let once = resolve(token);
            assert_eq!(resolve(&once), once, "token {token}");
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("zh-CN"), "Simplified Chinese");
        assert_eq!(display_name("zh-cn"), "Simplified Chinese");
        assert_eq!(display_name("xx"), "xx");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(native_name("fr"), Some("Français"));
        assert_eq!(native_name("xx"), None);
    }

    #[test]
    fn test_unknown_marker_is_not_a_language() {
        assert!(!is_known(UNKNOWN_MARKER));
        assert!(!is_known(""));
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in LANGUAGES.iter().enumerate() {
            for b in &LANGUAGES[i + 1..] {
                assert!(!a.code.eq_ignore_ascii_case(b.code), "duplicate {}", a.code);
            }
        }
    }
}
