//! 翻译服务适配模块
//!
//! 每个翻译服务对应 [`Backend`] 的一个变体，[`Translator`] 负责
//! 创建客户端、验证密钥以及单次翻译调用。
//! [`Translator::translate`] 是唯一的失败隔离边界：任何错误都只记录日志并返回 `None`。

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};
use url::Url;

// 本地模块导入
use crate::constants::{api_config, deepl_api_url, service_config};
use crate::error::{Result, TranslationError};
use crate::languages;
use crate::translation_error;

/// 支持的翻译服务，编号与菜单一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Google,
    MyMemory,
    DeepL,
    Qcri,
    Linguee,
    Pons,
    Yandex,
    Libre,
}

impl Backend {
    /// 菜单顺序的全部服务
    pub const ALL: [Backend; 8] = [
        Backend::Google,
        Backend::MyMemory,
        Backend::DeepL,
        Backend::Qcri,
        Backend::Linguee,
        Backend::Pons,
        Backend::Yandex,
        Backend::Libre,
    ];

    /// 菜单编号（从1开始）
    pub fn id(self) -> u8 {
        match self {
            Backend::Google => 1,
            Backend::MyMemory => 2,
            Backend::DeepL => 3,
            Backend::Qcri => 4,
            Backend::Linguee => 5,
            Backend::Pons => 6,
            Backend::Yandex => 7,
            Backend::Libre => 8,
        }
    }

    /// 根据菜单编号选择服务
    pub fn from_id(id: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.id() == id)
            .ok_or_else(|| translation_error!(selection, id, "Invalid translator selection."))
    }

    /// 菜单中显示的名称
    pub fn display_name(self) -> &'static str {
        match self {
            Backend::Google => "GoogleTranslator",
            Backend::MyMemory => "MyMemoryTranslator",
            Backend::DeepL => "DeeplTranslator",
            Backend::Qcri => "QcriTranslator",
            Backend::Linguee => "LingueeTranslator",
            Backend::Pons => "PonsTranslator",
            Backend::Yandex => "YandexTranslator",
            Backend::Libre => "LibreTranslator",
        }
    }

    /// 密钥文件中的服务名：显示名称去掉 `Translator` 后缀并转小写
    pub fn service_key(self) -> String {
        self.display_name()
            .trim_end_matches("Translator")
            .to_lowercase()
    }

    /// 是否必须提供API密钥
    pub fn requires_api_key(self) -> bool {
        matches!(self, Backend::DeepL | Backend::Qcri | Backend::Yandex)
    }

    /// 将语言表中的代码转换为该服务接受的形式
    pub fn language_code(self, code: &str) -> String {
        let code = code.to_lowercase();
        match self {
            Backend::Google | Backend::MyMemory => match code.as_str() {
                "zh-cn" => "zh-CN".to_string(),
                "zh-tw" => "zh-TW".to_string(),
                _ => code,
            },
            Backend::DeepL => match code.as_str() {
                "zh-cn" | "zh-tw" => "ZH".to_string(),
                "en" => "EN-US".to_string(),
                "pt" => "PT-PT".to_string(),
                _ => code.to_uppercase(),
            },
            Backend::Yandex => match code.as_str() {
                "zh-cn" | "zh-tw" => "zh".to_string(),
                "iw" => "he".to_string(),
                _ => code,
            },
            Backend::Libre => match code.as_str() {
                "zh-cn" => "zh".to_string(),
                "zh-tw" => "zt".to_string(),
                "iw" => "he".to_string(),
                _ => code,
            },
            Backend::Qcri => code,
            Backend::Linguee | Backend::Pons => languages::name_of(&code)
                .and_then(|name| name.split_whitespace().next())
                .unwrap_or(code.as_str())
                .to_string(),
        }
    }
}

/// 翻译客户端选项
#[derive(Debug, Clone)]
pub struct TranslatorOptions {
    /// 单次请求超时时间
    pub timeout: Duration,
    /// LibreTranslate实例地址
    pub libre_url: String,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(service_config::REQUEST_TIMEOUT_SECONDS),
            libre_url: api_config::DEFAULT_LIBRE_URL.to_string(),
        }
    }
}

/// 单元格翻译接口
///
/// 批处理流水线只依赖这个接口。返回的错误只影响当前单元格：
/// 流水线记录失败原因并保留原文，不会中止运行。
#[async_trait]
pub trait CellTranslator: Send + Sync {
    /// 翻译单个文本
    async fn translate_cell(&self, text: &str) -> Result<String>;
}

/// 绑定到某个服务和目标语言的翻译客户端
#[derive(Debug, Clone)]
pub struct Translator {
    backend: Backend,
    target: String,
    api_key: Option<String>,
    options: TranslatorOptions,
    client: Client,
    /// 词典服务的页面提取规则
    page: Option<PagePatterns>,
}

impl Translator {
    /// 创建翻译客户端
    ///
    /// 需要密钥的服务会先用固定示例文本发起一次验证调用，
    /// 调用出错或没有返回结果时返回 `InvalidCredential`。
    pub async fn create(
        backend: Backend,
        target_code: &str,
        api_key: Option<&str>,
        options: TranslatorOptions,
    ) -> Result<Self> {
        let translator = Self::build(backend, target_code, api_key, options)?;

        if backend.requires_api_key() {
            translator.validate().await?;
            info!("🔑 {} API密钥验证通过", backend.display_name());
        }

        Ok(translator)
    }

    /// 创建客户端但不发起验证调用
    pub fn build(
        backend: Backend,
        target_code: &str,
        api_key: Option<&str>,
        options: TranslatorOptions,
    ) -> Result<Self> {
        let api_key = api_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(str::to_string);

        if backend.requires_api_key() && api_key.is_none() {
            return Err(translation_error!(
                credential,
                backend.service_key(),
                "未提供API密钥"
            ));
        }

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(concat!("sheets-translator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            backend,
            target: backend.language_code(target_code),
            api_key,
            options,
            client,
            page: PagePatterns::for_backend(backend)?,
        })
    }

    /// 当前使用的服务
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// 服务接受的目标语言代码
    pub fn target(&self) -> &str {
        &self.target
    }

    /// 用示例文本验证API密钥
    pub async fn validate(&self) -> Result<()> {
        match self.try_translate(service_config::VALIDATION_SAMPLE).await {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("❌ API密钥验证失败: {}", e);
                Err(translation_error!(
                    credential,
                    self.backend.service_key(),
                    format!("Invalid API key provided. {}", e)
                ))
            }
        }
    }

    /// 翻译文本，失败时记录日志并返回 `None`
    pub async fn translate(&self, text: &str) -> Option<String> {
        match self.try_translate(text).await {
            Ok(translated) => Some(translated),
            Err(e) => {
                warn!("Failed to translate text due to: {}", e);
                None
            }
        }
    }

    /// 单次翻译调用，不做重试
    pub async fn try_translate(&self, text: &str) -> Result<String> {
        debug!("{} -> {}: {}", self.backend.display_name(), self.target, text);

        let translated = match self.backend {
            Backend::Google => self.translate_google(text).await,
            Backend::MyMemory => self.translate_mymemory(text).await,
            Backend::DeepL => self.translate_deepl(text).await,
            Backend::Qcri => self.translate_qcri(text).await,
            Backend::Linguee => self.translate_linguee(text).await,
            Backend::Pons => self.translate_pons(text).await,
            Backend::Yandex => self.translate_yandex(text).await,
            Backend::Libre => self.translate_libre(text).await,
        }
        .map_err(|e| match e {
            TranslationError::TranslationFailure { .. } => e,
            other => translation_error!(translation, text, other),
        })?;

        if translated.trim().is_empty() {
            return Err(translation_error!(translation, text, "翻译服务未返回结果"));
        }
        Ok(translated)
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(translation_error!(network, body, status.as_u16()));
        }
        Ok(response.text().await?)
    }

    async fn translate_google(&self, text: &str) -> Result<String> {
        let request = self.client.get(api_config::GOOGLE_API_URL).query(&[
            ("client", "gtx"),
            ("sl", "auto"),
            ("tl", self.target.as_str()),
            ("dt", "t"),
            ("q", text),
        ]);
        parse_google(&self.send(request).await?)
    }

    async fn translate_mymemory(&self, text: &str) -> Result<String> {
        let langpair = format!("autodetect|{}", self.target);
        let request = self
            .client
            .get(api_config::MYMEMORY_API_URL)
            .query(&[("q", text), ("langpair", langpair.as_str())]);
        parse_mymemory(&self.send(request).await?)
    }

    async fn translate_deepl(&self, text: &str) -> Result<String> {
        let request = self
            .client
            .post(deepl_api_url(self.api_key()))
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key()))
            .form(&[("text", text), ("target_lang", self.target.as_str())]);
        parse_deepl(&self.send(request).await?)
    }

    async fn translate_qcri(&self, text: &str) -> Result<String> {
        let langpair = format!("en-{}", self.target);
        let request = self.client.get(api_config::QCRI_API_URL).query(&[
            ("key", self.api_key()),
            ("langpair", langpair.as_str()),
            ("domain", "general"),
            ("text", text),
        ]);
        parse_qcri(&self.send(request).await?)
    }

    async fn translate_linguee(&self, text: &str) -> Result<String> {
        let url = linguee_url(&self.target, text)?;
        let html = self.send(self.client.get(url)).await?;
        self.first_entry("Linguee", &html)
    }

    async fn translate_pons(&self, text: &str) -> Result<String> {
        let url = pons_url(&self.target, text)?;
        let html = self.send(self.client.get(url)).await?;
        self.first_entry("Pons", &html)
    }

    fn first_entry(&self, service: &str, html: &str) -> Result<String> {
        self.page
            .as_ref()
            .ok_or_else(|| translation_error!(config, "page", format!("{} 未配置页面规则", service)))?
            .first_entry(html)
            .ok_or_else(|| malformed(service, "页面中没有释义"))
    }

    async fn translate_yandex(&self, text: &str) -> Result<String> {
        let request = self.client.get(api_config::YANDEX_API_URL).query(&[
            ("key", self.api_key()),
            ("text", text),
            ("lang", self.target.as_str()),
        ]);
        parse_yandex(&self.send(request).await?)
    }

    async fn translate_libre(&self, text: &str) -> Result<String> {
        let mut body = json!({
            "q": text,
            "source": "auto",
            "target": self.target,
            "format": "text",
        });
        if let Some(key) = &self.api_key {
            body["api_key"] = json!(key);
        }

        let endpoint = format!("{}/translate", self.options.libre_url.trim_end_matches('/'));
        let request = self.client.post(endpoint).json(&body);
        parse_libre(&self.send(request).await?)
    }
}

#[async_trait]
impl CellTranslator for Translator {
    async fn translate_cell(&self, text: &str) -> Result<String> {
        self.try_translate(text).await.map_err(|e| {
            warn!("Failed to translate text due to: {}", e);
            e
        })
    }
}

fn malformed(service: &str, details: impl std::fmt::Display) -> TranslationError {
    translation_error!(network, format!("{} 响应格式错误: {}", service, details))
}

/// 解析Google响应：`[[["译文","原文",...],...],...]`，拼接所有片段
pub(crate) fn parse_google(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body).map_err(|e| malformed("Google", e))?;
    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("Google", "缺少翻译片段"))?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

/// 解析MyMemory响应
pub(crate) fn parse_mymemory(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct MyMemoryResponse {
        response_data: MyMemoryData,
        #[serde(default)]
        response_status: Value,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct MyMemoryData {
        translated_text: String,
    }

    let response: MyMemoryResponse =
        serde_json::from_str(body).map_err(|e| malformed("MyMemory", e))?;

    let status = match &response.response_status {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => Some(200),
    };
    if status != Some(200) {
        return Err(malformed("MyMemory", response.response_data.translated_text));
    }
    Ok(response.response_data.translated_text)
}

/// 解析DeepL响应
pub(crate) fn parse_deepl(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    struct DeepLResponse {
        translations: Vec<DeepLTranslation>,
    }

    #[derive(Deserialize)]
    struct DeepLTranslation {
        text: String,
    }

    let response: DeepLResponse = serde_json::from_str(body).map_err(|e| malformed("DeepL", e))?;
    response
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| malformed("DeepL", "translations为空"))
}

/// 解析QCRI响应
pub(crate) fn parse_qcri(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct QcriResponse {
        translated_text: Option<String>,
    }

    let response: QcriResponse = serde_json::from_str(body).map_err(|e| malformed("QCRI", e))?;
    response
        .translated_text
        .ok_or_else(|| malformed("QCRI", "缺少translatedText"))
}

/// 解析Yandex响应
pub(crate) fn parse_yandex(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    struct YandexResponse {
        #[serde(default)]
        text: Vec<String>,
    }

    let response: YandexResponse =
        serde_json::from_str(body).map_err(|e| malformed("Yandex", e))?;
    response
        .text
        .into_iter()
        .next()
        .ok_or_else(|| malformed("Yandex", "text为空"))
}

/// 解析LibreTranslate响应
pub(crate) fn parse_libre(body: &str) -> Result<String> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct LibreResponse {
        translated_text: Option<String>,
        error: Option<String>,
    }

    let response: LibreResponse = serde_json::from_str(body).map_err(|e| malformed("Libre", e))?;
    match (response.translated_text, response.error) {
        (Some(text), _) => Ok(text),
        (None, Some(error)) => Err(malformed("Libre", error)),
        (None, None) => Err(malformed("Libre", "缺少translatedText")),
    }
}

fn linguee_url(target_name: &str, text: &str) -> Result<Url> {
    let base = format!(
        "{}/{}-{}/search",
        api_config::LINGUEE_BASE_URL,
        service_config::DICTIONARY_SOURCE_LANG,
        target_name
    );
    Url::parse_with_params(&base, &[("source", "auto"), ("query", text)])
        .map_err(|e| translation_error!(config, "linguee_url", e))
}

fn pons_url(target_name: &str, text: &str) -> Result<Url> {
    let mut url =
        Url::parse(api_config::PONS_BASE_URL).map_err(|e| translation_error!(config, "pons_url", e))?;
    url.path_segments_mut()
        .map_err(|_| translation_error!(config, "pons_url", "地址不能作为路径前缀"))?
        .push(&format!(
            "{}-{}",
            service_config::DICTIONARY_SOURCE_LANG,
            target_name
        ))
        .push(text);
    Ok(url)
}

const LINGUEE_ENTRY: &str = r#"(?s)<a[^>]*class="dictLink[^"]*"[^>]*>(.*?)</a>"#;
const PONS_ENTRY: &str = r#"(?s)<div class="target"[^>]*>(.*?)</div>"#;
const HTML_TAG: &str = r"<[^>]+>";

/// 词典页面的提取规则，创建客户端时编译一次
#[derive(Debug, Clone)]
struct PagePatterns {
    entry: Regex,
    tags: Regex,
}

impl PagePatterns {
    /// 只有词典服务需要页面规则
    fn for_backend(backend: Backend) -> Result<Option<Self>> {
        let entry = match backend {
            Backend::Linguee => LINGUEE_ENTRY,
            Backend::Pons => PONS_ENTRY,
            _ => return Ok(None),
        };
        Ok(Some(Self {
            entry: compile(entry)?,
            tags: compile(HTML_TAG)?,
        }))
    }

    /// 页面中第一个非空释义
    fn first_entry(&self, html: &str) -> Option<String> {
        self.entry
            .captures_iter(html)
            .filter_map(|caps| caps.get(1))
            .map(|m| self.strip_tags(m.as_str()))
            .find(|text| !text.is_empty())
    }

    fn strip_tags(&self, fragment: &str) -> String {
        self.tags
            .replace_all(fragment, "")
            .replace("&nbsp;", " ")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| translation_error!(config, "page_pattern", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_ids() {
        for (index, backend) in Backend::ALL.iter().enumerate() {
            assert_eq!(backend.id() as usize, index + 1);
            assert_eq!(Backend::from_id(backend.id()).unwrap(), *backend);
        }
        assert!(matches!(
            Backend::from_id(0),
            Err(TranslationError::InvalidSelection { .. })
        ));
        assert!(Backend::from_id(9).is_err());
    }

    #[test]
    fn test_service_keys() {
        assert_eq!(Backend::DeepL.service_key(), "deepl");
        assert_eq!(Backend::Qcri.service_key(), "qcri");
        assert_eq!(Backend::Yandex.service_key(), "yandex");
        assert_eq!(Backend::MyMemory.service_key(), "mymemory");
    }

    #[test]
    fn test_requires_api_key() {
        let keyed: Vec<u8> = Backend::ALL
            .iter()
            .filter(|b| b.requires_api_key())
            .map(|b| b.id())
            .collect();
        assert_eq!(keyed, vec![3, 4, 7]);
    }

    #[test]
    fn test_language_code_mapping() {
        assert_eq!(Backend::Google.language_code("zh-cn"), "zh-CN");
        assert_eq!(Backend::Google.language_code("fr"), "fr");
        assert_eq!(Backend::DeepL.language_code("de"), "DE");
        assert_eq!(Backend::DeepL.language_code("zh-tw"), "ZH");
        assert_eq!(Backend::Libre.language_code("iw"), "he");
        assert_eq!(Backend::Pons.language_code("zh-cn"), "chinese");
        assert_eq!(Backend::Linguee.language_code("fr"), "french");
    }

    #[test]
    fn test_build_requires_key_for_authenticated_backends() {
        let err = Translator::build(Backend::DeepL, "fr", None, TranslatorOptions::default())
            .unwrap_err();
        assert!(matches!(err, TranslationError::InvalidCredential { .. }));

        let err = Translator::build(Backend::Yandex, "fr", Some("   "), TranslatorOptions::default())
            .unwrap_err();
        assert!(matches!(err, TranslationError::InvalidCredential { .. }));

        let translator =
            Translator::build(Backend::Google, "zh-cn", None, TranslatorOptions::default()).unwrap();
        assert_eq!(translator.target(), "zh-CN");
    }

    #[tokio::test]
    async fn test_create_without_key_fails_before_network() {
        let result = Translator::create(Backend::Qcri, "ar", None, TranslatorOptions::default()).await;
        assert!(matches!(result, Err(TranslationError::InvalidCredential { .. })));
    }

    #[tokio::test]
    async fn test_translate_contains_failures() {
        let options = TranslatorOptions {
            timeout: Duration::from_millis(500),
            libre_url: "http://127.0.0.1:9".to_string(),
        };
        let translator = Translator::build(Backend::Libre, "fr", None, options).unwrap();
        assert_eq!(translator.translate("Hello").await, None);
        assert!(matches!(
            translator.try_translate("Hello").await,
            Err(TranslationError::TranslationFailure { .. })
        ));
    }

    #[tokio::test]
    async fn test_validate_unreachable_service_is_invalid_credential() {
        let options = TranslatorOptions {
            timeout: Duration::from_millis(500),
            libre_url: "http://127.0.0.1:9".to_string(),
        };
        let translator =
            Translator::build(Backend::Libre, "fr", Some("secret"), options).unwrap();
        match translator.validate().await {
            Err(TranslationError::InvalidCredential { service, .. }) => {
                assert_eq!(service, "libre")
            }
            other => panic!("expected InvalidCredential, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_cell_carries_reason() {
        let options = TranslatorOptions {
            timeout: Duration::from_millis(500),
            libre_url: "http://127.0.0.1:9".to_string(),
        };
        let translator = Translator::build(Backend::Libre, "fr", None, options).unwrap();
        assert!(matches!(
            translator.translate_cell("Hello").await,
            Err(TranslationError::TranslationFailure { .. })
        ));
    }

    #[test]
    fn test_parse_google() {
        let body = r#"[[["Bonjour ","Hello ",null,null,10],["le monde","world",null,null,10]],null,"en"]"#;
        assert_eq!(parse_google(body).unwrap(), "Bonjour le monde");
        assert!(parse_google("{}").is_err());
        assert!(parse_google("not json").is_err());
    }

    #[test]
    fn test_parse_mymemory() {
        let body = r#"{"responseData":{"translatedText":"Bonjour","match":1},"responseStatus":200}"#;
        assert_eq!(parse_mymemory(body).unwrap(), "Bonjour");

        let quota = r#"{"responseData":{"translatedText":"MYMEMORY WARNING"},"responseStatus":"429"}"#;
        assert!(parse_mymemory(quota).is_err());
    }

    #[test]
    fn test_parse_deepl() {
        let body = r#"{"translations":[{"detected_source_language":"EN","text":"Hallo"}]}"#;
        assert_eq!(parse_deepl(body).unwrap(), "Hallo");
        assert!(parse_deepl(r#"{"translations":[]}"#).is_err());
    }

    #[test]
    fn test_parse_qcri_yandex_libre() {
        assert_eq!(
            parse_qcri(r#"{"success":true,"translatedText":"مرحبا"}"#).unwrap(),
            "مرحبا"
        );
        assert_eq!(
            parse_yandex(r#"{"code":200,"lang":"en-ru","text":["Привет"]}"#).unwrap(),
            "Привет"
        );
        assert!(parse_yandex(r#"{"code":401,"message":"API key is invalid"}"#).is_err());
        assert_eq!(parse_libre(r#"{"translatedText":"Hola"}"#).unwrap(), "Hola");
        assert!(parse_libre(r#"{"error":"Invalid API key"}"#).is_err());
    }

    #[test]
    fn test_dictionary_page_entries() {
        let linguee = PagePatterns::for_backend(Backend::Linguee).unwrap().unwrap();
        let html = r#"<div><a class="dictLink featured" href="/x">bonjour</a>
            <a class="dictLink" href="/y">salut</a></div>"#;
        assert_eq!(linguee.first_entry(html).as_deref(), Some("bonjour"));

        let pons = PagePatterns::for_backend(Backend::Pons).unwrap().unwrap();
        let html = r#"<div class="source">hello</div>
            <div class="target">
                <a href="/french/bonjour">bonjour</a> &amp; salut
            </div>"#;
        assert_eq!(pons.first_entry(html).as_deref(), Some("bonjour & salut"));
        assert_eq!(pons.first_entry("<html></html>"), None);

        assert!(PagePatterns::for_backend(Backend::Google).unwrap().is_none());
    }

    #[test]
    fn test_dictionary_translator_reports_missing_entry() {
        let translator =
            Translator::build(Backend::Pons, "fr", None, TranslatorOptions::default()).unwrap();
        assert!(matches!(
            translator.first_entry("Pons", "<html></html>"),
            Err(TranslationError::Network { .. })
        ));
    }

    #[test]
    fn test_dictionary_urls() {
        let url = pons_url("french", "good morning").unwrap();
        assert_eq!(
            url.as_str(),
            "https://en.pons.com/translate/english-french/good%20morning"
        );

        let url = linguee_url("german", "hello").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.linguee.com/english-german/search?source=auto&query=hello"
        );
    }
}
