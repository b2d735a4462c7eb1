use once_cell::sync::Lazy;
use serde::Deserialize;

static LANG_PACK: Lazy<LangPack> = Lazy::new(|| {
    serde_json::from_str(include_str!("lang.json")).expect("Failed to parse lang.json")
});

#[derive(Debug, Deserialize)]
pub struct LangPack {
    pub usage_title: LangItem,
    pub usage_summary: LangItem,
    pub usage_help: LangItem,
    pub usage_link: LangItem,
    pub usage_replace: LangItem,
    pub missing_argument: LangItem,
    pub unknown_flag: LangItem,
    pub replace_font: LangItem,
    pub font_linked: LangItem,
    pub link_failed: LangItem,
    pub key_open_failed: LangItem,
    pub font_detected: LangItem,
    pub no_font_detected: LangItem,
    pub unsupported_platform: LangItem,
    pub error_occurred: LangItem,
}

#[derive(Debug, Deserialize)]
pub struct LangItem {
    pub zh: String,
    pub en: String,
}

impl LangItem {
    pub fn get_translation(&self, lang: &str) -> &str {
        match lang {
            "zh" => &self.zh,
            _ => &self.en,
        }
    }
}

pub fn get_lang() -> &'static str {
    static LANG: Lazy<String> = Lazy::new(|| {
        sys_locale::get_locale().unwrap_or_else(|| "en-US".into())
    });
    lang_prefix(&LANG)
}

fn lang_prefix(locale: &str) -> &str {
    locale.split(['-', '_']).next().unwrap_or("en")
}

pub fn get_pack() -> &'static LangPack {
    &LANG_PACK
}

pub fn translate(item: &LangItem) -> &str {
    item.get_translation(get_lang())
}
