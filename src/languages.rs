//! 语言表模块
//!
//! 提供语言代码到规范语言名称（小写全称）的静态映射，
//! 以及用户输入到语言代码的解析。

// 本地模块导入
use crate::error::Result;
use crate::translation_error;

/// 语言表条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageEntry {
    /// 语言代码 (如: fr, zh-cn)
    pub code: &'static str,
    /// 规范语言名称
    pub name: &'static str,
}

const fn entry(code: &'static str, name: &'static str) -> LanguageEntry {
    LanguageEntry { code, name }
}

/// 支持的语言，按原始顺序排列
pub const LANGUAGES: &[LanguageEntry] = &[
    entry("af", "afrikaans"),
    entry("sq", "albanian"),
    entry("am", "amharic"),
    entry("ar", "arabic"),
    entry("hy", "armenian"),
    entry("az", "azerbaijani"),
    entry("eu", "basque"),
    entry("be", "belarusian"),
    entry("bn", "bengali"),
    entry("bs", "bosnian"),
    entry("bg", "bulgarian"),
    entry("ca", "catalan"),
    entry("ceb", "cebuano"),
    entry("ny", "chichewa"),
    entry("zh-cn", "chinese (simplified)"),
    entry("zh-tw", "chinese (traditional)"),
    entry("co", "corsican"),
    entry("hr", "croatian"),
    entry("cs", "czech"),
    entry("da", "danish"),
    entry("nl", "dutch"),
    entry("en", "english"),
    entry("eo", "esperanto"),
    entry("et", "estonian"),
    entry("tl", "filipino"),
    entry("fi", "finnish"),
    entry("fr", "french"),
    entry("fy", "frisian"),
    entry("gl", "galician"),
    entry("ka", "georgian"),
    entry("de", "german"),
    entry("el", "greek"),
    entry("gu", "gujarati"),
    entry("ht", "haitian creole"),
    entry("ha", "hausa"),
    entry("haw", "hawaiian"),
    entry("iw", "hebrew"),
    entry("he", "hebrew"),
    entry("hi", "hindi"),
    entry("hmn", "hmong"),
    entry("hu", "hungarian"),
    entry("is", "icelandic"),
    entry("ig", "igbo"),
    entry("id", "indonesian"),
    entry("ga", "irish"),
    entry("it", "italian"),
    entry("ja", "japanese"),
    entry("jw", "javanese"),
    entry("kn", "kannada"),
    entry("kk", "kazakh"),
    entry("km", "khmer"),
    entry("ko", "korean"),
    entry("ku", "kurdish (kurmanji)"),
    entry("ky", "kyrgyz"),
    entry("lo", "lao"),
    entry("la", "latin"),
    entry("lv", "latvian"),
    entry("lt", "lithuanian"),
    entry("lb", "luxembourgish"),
    entry("mk", "macedonian"),
    entry("mg", "malagasy"),
    entry("ms", "malay"),
    entry("ml", "malayalam"),
    entry("mt", "maltese"),
    entry("mi", "maori"),
    entry("mr", "marathi"),
    entry("mn", "mongolian"),
    entry("my", "myanmar (burmese)"),
    entry("ne", "nepali"),
    entry("no", "norwegian"),
    entry("or", "odia"),
    entry("ps", "pashto"),
    entry("fa", "persian"),
    entry("pl", "polish"),
    entry("pt", "portuguese"),
    entry("pa", "punjabi"),
    entry("ro", "romanian"),
    entry("ru", "russian"),
    entry("sm", "samoan"),
    entry("gd", "scots gaelic"),
    entry("sr", "serbian"),
    entry("st", "sesotho"),
    entry("sn", "shona"),
    entry("sd", "sindhi"),
    entry("si", "sinhala"),
    entry("sk", "slovak"),
    entry("sl", "slovenian"),
    entry("so", "somali"),
    entry("es", "spanish"),
    entry("su", "sundanese"),
    entry("sw", "swahili"),
    entry("sv", "swedish"),
    entry("tg", "tajik"),
    entry("ta", "tamil"),
    entry("te", "telugu"),
    entry("th", "thai"),
    entry("tr", "turkish"),
    entry("uk", "ukrainian"),
    entry("ur", "urdu"),
    entry("ug", "uyghur"),
    entry("uz", "uzbek"),
    entry("vi", "vietnamese"),
    entry("cy", "welsh"),
    entry("xh", "xhosa"),
    entry("yi", "yiddish"),
    entry("yo", "yoruba"),
    entry("zu", "zulu"),
];

/// 多个代码共用同一名称时的首选代码
const PREFERRED_CODES: &[(&str, &str)] = &[("hebrew", "he")];

/// 将用户输入解析为语言代码
///
/// 按表顺序取第一个名称包含输入的语言；没有名称匹配时才把输入当作语言代码。
/// 名称对应多个代码时返回首选代码，例如 `hebrew` 总是返回 `he`。
pub fn resolve(input: &str) -> Result<&'static str> {
    let query = input.trim().to_lowercase();
    if query.is_empty() {
        return Err(translation_error!(language, input));
    }

    if let Some(found) = LANGUAGES.iter().find(|lang| lang.name.contains(query.as_str())) {
        return Ok(preferred_code(found.name));
    }

    LANGUAGES
        .iter()
        .find(|lang| lang.code == query)
        .map(|found| found.code)
        .ok_or_else(|| translation_error!(language, input))
}

/// 解析命令行给出的语言：精确的语言代码优先，其余按 [`resolve`] 处理
///
/// `--lang fr` 应得到法语，而按名称子串 `fr` 会先命中 afrikaans。
pub fn resolve_code_or_name(input: &str) -> Result<&'static str> {
    let query = input.trim().to_lowercase();
    match LANGUAGES.iter().find(|lang| lang.code == query) {
        Some(found) => Ok(found.code),
        None => resolve(input),
    }
}

/// 名称对应的首选代码
fn preferred_code(name: &'static str) -> &'static str {
    if let Some((_, code)) = PREFERRED_CODES.iter().find(|(n, _)| *n == name) {
        return code;
    }

    LANGUAGES
        .iter()
        .find(|lang| lang.name == name)
        .map(|lang| lang.code)
        .unwrap_or(name)
}

/// 查找语言代码对应的名称
pub fn name_of(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
        .map(|lang| lang.name)
}

/// 判断语言代码是否在表中
pub fn is_known_code(code: &str) -> bool {
    name_of(code).is_some()
}

/// 按名称排序的语言列表（名称相同时按代码排序）
pub fn sorted_by_name() -> Vec<&'static LanguageEntry> {
    let mut entries: Vec<&LanguageEntry> = LANGUAGES.iter().collect();
    entries.sort_by(|a, b| a.name.cmp(b.name).then(a.code.cmp(b.code)));
    entries
}

/// 生成 `help` 列表中的一行，例如 `Chinese (Simplified) (zh-cn)`
pub fn display_line(entry: &LanguageEntry) -> String {
    format!("{} ({})", title_case(entry.name), entry.code)
}

fn title_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize = true;
    for c in name.chars() {
        if capitalize && c.is_alphabetic() {
            result.extend(c.to_uppercase());
            capitalize = false;
        } else {
            result.push(c);
        }
        if !c.is_alphabetic() {
            capitalize = true;
        }
    }
    result
}
