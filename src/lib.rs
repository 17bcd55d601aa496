//! Sheets Translator - 表格翻译工具库
//!
//! 这个库提供了语言解析、API密钥存储、翻译服务适配、逐单元格批量翻译和xlsx输出等核心功能。

pub mod config;
pub mod console;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod languages;
pub mod pipeline;
pub mod sheet;
pub mod stats;
pub mod translator;
pub mod utils;
pub mod writer;

pub use error::{Result, TranslationError};
pub use pipeline::{Mode, ModeOutput};
pub use sheet::{CellValue, Table};
pub use translator::{Backend, CellTranslator, Translator};
