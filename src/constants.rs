/// 翻译服务与文件布局常量
///
/// 该文件定义了翻译服务地址、超时设置和默认文件名，方便统一管理和维护

/// 翻译服务地址配置
pub mod api_config {
    /// Google免费翻译接口
    pub const GOOGLE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

    /// MyMemory翻译接口
    pub const MYMEMORY_API_URL: &str = "https://api.mymemory.translated.net/get";

    /// DeepL免费版接口（密钥以 `:fx` 结尾）
    pub const DEEPL_FREE_API_URL: &str = "https://api-free.deepl.com/v2/translate";

    /// DeepL专业版接口
    pub const DEEPL_PRO_API_URL: &str = "https://api.deepl.com/v2/translate";

    /// QCRI翻译接口
    pub const QCRI_API_URL: &str = "https://mt.qcri.org/api/v1/translate";

    /// Linguee词典页面
    pub const LINGUEE_BASE_URL: &str = "https://www.linguee.com";

    /// PONS词典页面
    pub const PONS_BASE_URL: &str = "https://en.pons.com/translate";

    /// Yandex翻译接口
    pub const YANDEX_API_URL: &str = "https://translate.yandex.net/api/v1.5/tr.json/translate";

    /// LibreTranslate默认实例
    pub const DEFAULT_LIBRE_URL: &str = "https://libretranslate.com";
}

/// 翻译服务配置
pub mod service_config {
    /// 单次请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

    /// 验证API密钥时使用的示例文本
    pub const VALIDATION_SAMPLE: &str = "Hello";

    /// 每翻译多少个单元格输出一次进度
    pub const PROGRESS_INTERVAL: usize = 50;

    /// 词典类服务的固定源语言
    pub const DICTIONARY_SOURCE_LANG: &str = "english";
}

/// 文件布局配置
pub mod file_config {
    /// API密钥文件
    pub const API_KEYS_FILE: &str = "api_keys.txt";

    /// 单列模式输入文件
    pub const COLUMN_INPUT_FILE: &str = "input_data_one_column.xlsx";

    /// 全表模式输入文件
    pub const ALL_SHEETS_INPUT_FILE: &str = "input_data_all.xlsx";

    /// 单列模式输出目录
    pub const COLUMN_OUTPUT_DIR: &str = "column";

    /// 全表模式输出目录
    pub const ALL_SHEETS_OUTPUT_DIR: &str = "all";

    /// 单列模式输出的工作表名
    pub const COLUMN_SHEET_NAME: &str = "Translated";

    /// 单列模式原文列标题
    pub const INPUT_COLUMN_LABEL: &str = "Input Text";

    /// 单列模式译文列标题
    pub const TRANSLATED_COLUMN_LABEL: &str = "Translated Text";

    /// 输出文件名中的时间戳格式
    pub const TIMESTAMP_FORMAT: &str = "%Y.%m.%d-%H.%M.%S";

    /// Excel工作表名最大长度
    pub const MAX_SHEET_NAME_LEN: usize = 31;
}

/// 判断服务地址是否有效
pub fn is_valid_api_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// DeepL密钥对应的接口地址
pub fn deepl_api_url(api_key: &str) -> &'static str {
    if api_key.ends_with(":fx") {
        api_config::DEEPL_FREE_API_URL
    } else {
        api_config::DEEPL_PRO_API_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_validation() {
        assert!(is_valid_api_url("https://libretranslate.com"));
        assert!(is_valid_api_url("http://localhost:5000"));
        assert!(!is_valid_api_url("ftp://example.com"));
        assert!(!is_valid_api_url("invalid-url"));
    }

    #[test]
    fn test_deepl_endpoint_selection() {
        assert_eq!(deepl_api_url("abc:fx"), api_config::DEEPL_FREE_API_URL);
        assert_eq!(deepl_api_url("abc"), api_config::DEEPL_PRO_API_URL);
    }
}
