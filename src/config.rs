//! 配置管理模块
//!
//! 提供CLI参数解析和经过验证的运行配置

// 标准库导入
use std::path::PathBuf;
use std::time::Duration;

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::constants::{api_config, file_config, is_valid_api_url, service_config};
use crate::error::Result;
use crate::languages;
use crate::pipeline::Mode;
use crate::translation_error;
use crate::translator::{Backend, TranslatorOptions};

/// 运行配置
///
/// 在流水线开始前完成验证，交互提示只负责补全缺失的字段，
/// 因此也可以完全通过命令行参数或代码构建（无交互运行、测试）。
///
/// # Examples
///
/// ```rust
/// use sheets_translator::config::RunConfig;
/// use sheets_translator::pipeline::Mode;
/// use sheets_translator::translator::Backend;
///
/// let config = RunConfig::new(Backend::Google, "fr", Mode::Column, "report")
///     .with_timeout_secs(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 翻译服务
    backend: Backend,
    /// 目标语言代码（语言表中的代码）
    target_lang: String,
    /// API密钥
    api_key: Option<String>,
    /// 翻译模式
    mode: Mode,
    /// 输出文件名（不含扩展名）
    output_name: String,
    /// 输入工作簿，默认由模式决定
    input: Option<PathBuf>,
    /// 输出根目录，模式子目录建在其下
    output_root: PathBuf,
    /// 单次请求超时（秒）
    timeout_secs: u64,
    /// LibreTranslate实例地址
    libre_url: String,
}

impl RunConfig {
    /// 创建新的配置实例，其余字段使用默认值
    pub fn new(backend: Backend, target_lang: &str, mode: Mode, output_name: &str) -> Self {
        Self {
            backend,
            target_lang: target_lang.to_string(),
            api_key: None,
            mode,
            output_name: output_name.to_string(),
            input: None,
            output_root: PathBuf::new(),
            timeout_secs: service_config::REQUEST_TIMEOUT_SECONDS,
            libre_url: api_config::DEFAULT_LIBRE_URL.to_string(),
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    /// 实际读取的输入工作簿
    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| self.mode.default_input())
    }

    /// 模式对应的输出目录
    pub fn output_dir(&self) -> PathBuf {
        self.output_root.join(self.mode.directory())
    }

    /// 翻译客户端选项
    pub fn translator_options(&self) -> TranslatorOptions {
        TranslatorOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            libre_url: self.libre_url.clone(),
        }
    }

    /// 设置API密钥
    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// 设置输入工作簿
    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = input;
        self
    }

    /// 设置输出根目录
    pub fn with_output_root(mut self, root: PathBuf) -> Self {
        self.output_root = root;
        self
    }

    /// 设置请求超时
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// 设置LibreTranslate地址
    pub fn with_libre_url(mut self, url: &str) -> Self {
        self.libre_url = url.to_string();
        self
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if !languages::is_known_code(&self.target_lang) {
            return Err(translation_error!(
                config,
                "target_lang",
                format!("未知的语言代码: {}", self.target_lang)
            ));
        }

        if self.output_name.trim().is_empty() {
            return Err(translation_error!(config, "output_name", "输出文件名不能为空"));
        }

        if self.timeout_secs == 0 {
            return Err(translation_error!(config, "timeout", "超时时间必须大于0"));
        }

        if self.backend.requires_api_key()
            && self.api_key.as_deref().map_or(true, |key| key.trim().is_empty())
        {
            return Err(translation_error!(
                config,
                "api_key",
                format!("{} 需要API密钥", self.backend.display_name())
            ));
        }

        if self.backend == Backend::Libre && !is_valid_api_url(&self.libre_url) {
            return Err(translation_error!(
                config,
                "libre_url",
                format!("无效的服务地址: {}", self.libre_url)
            ));
        }

        Ok(())
    }
}

/// CLI参数结构
///
/// 未通过参数给出的选项会在运行时交互询问。
#[derive(Parser, Debug)]
#[command(author, version, about = "表格翻译工具 - 逐个单元格翻译xlsx并输出新的工作簿", long_about = None)]
pub struct Cli {
    /// 翻译服务编号 (1-8)
    #[arg(short, long, value_name = "NUMBER")]
    pub backend: Option<u8>,

    /// 目标语言名称或代码 (如: french, fr, zh-cn)
    #[arg(short, long, value_name = "LANGUAGE")]
    pub lang: Option<String>,

    /// API密钥（会保存到密钥文件）
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// 直接输入新的API密钥，替换已保存的密钥
    #[arg(long)]
    pub update_key: bool,

    /// 翻译模式: 1 = 第一列, 2 = 全部工作表
    #[arg(short, long, value_name = "1|2")]
    pub mode: Option<String>,

    /// 输出文件名（不含扩展名）
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// 输入工作簿路径（默认按模式选择固定文件名）
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// 输出根目录
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// API密钥文件
    #[arg(long, value_name = "FILE", default_value = file_config::API_KEYS_FILE)]
    pub keys_file: PathBuf,

    /// 单次请求超时时间（秒）
    #[arg(long, default_value_t = service_config::REQUEST_TIMEOUT_SECONDS)]
    pub timeout: u64,

    /// LibreTranslate实例地址
    #[arg(long, default_value = api_config::DEFAULT_LIBRE_URL)]
    pub libre_url: String,

    /// 列出所有支持的语言后退出
    #[arg(long)]
    pub list_languages: bool,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (仅输出错误)
    #[arg(short, long)]
    pub quiet: bool,

    /// 显示运行统计
    #[arg(long)]
    pub stats: bool,
}
