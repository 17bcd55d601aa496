//! 统一错误处理模块
//!
//! 提供表格翻译工具的统一错误类型定义和处理机制

// 标准库导入
use std::fmt;

// 第三方crate导入
use anyhow::Error as AnyhowError;

/// 表格翻译统一错误类型
///
/// 致命错误（选择无效、密钥无效）直接终止运行；
/// 单元格级别的翻译失败只在翻译器内部出现，由批处理流水线降级为保留原文。
#[derive(Debug)]
pub enum TranslationError {
    /// 翻译服务编号或模式选择无效
    InvalidSelection {
        /// 用户输入
        input: String,
        /// 失败原因
        reason: String,
    },

    /// API密钥未通过验证调用
    InvalidCredential {
        /// 服务名称（凭据文件中的键）
        service: String,
        /// 失败原因
        reason: String,
    },

    /// 单个文本翻译失败
    TranslationFailure {
        /// 原文
        text: String,
        /// 失败原因
        reason: String,
    },

    /// 输入无法匹配任何语言
    UnsupportedLanguage {
        /// 用户输入
        input: String,
    },

    /// 网络请求相关错误
    Network {
        /// 错误消息
        message: String,
        /// HTTP状态码（如果适用）
        status_code: Option<u16>,
    },

    /// 文件操作相关错误
    FileOperation {
        /// 文件路径
        path: String,
        /// 操作类型（读取、写入、创建等）
        operation: String,
        /// 底层错误信息
        source: String,
    },

    /// 工作簿读写错误
    Spreadsheet {
        /// 工作簿路径
        path: String,
        /// 具体错误信息
        details: String,
    },

    /// 配置相关错误
    Configuration {
        /// 配置项名称
        field: String,
        /// 错误原因
        reason: String,
    },

    /// 内部处理错误（包装anyhow::Error）
    Internal {
        /// 包装的错误
        source: AnyhowError,
    },
}

impl TranslationError {
    /// 是否为必须终止运行的错误
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            TranslationError::TranslationFailure { .. }
                | TranslationError::UnsupportedLanguage { .. }
        )
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::InvalidSelection { input, reason } => {
                write!(f, "选择无效 [{}]: {}", input, reason)
            }
            TranslationError::InvalidCredential { service, reason } => {
                write!(f, "API密钥无效 [{}]: {}", service, reason)
            }
            TranslationError::TranslationFailure { text, reason } => {
                write!(f, "翻译失败 [{}]: {}", text, reason)
            }
            TranslationError::UnsupportedLanguage { input } => {
                write!(f, "不支持的目标语言: {}", input)
            }
            TranslationError::Network { message, status_code } => {
                if let Some(code) = status_code {
                    write!(f, "网络请求失败 [{}]: {}", code, message)
                } else {
                    write!(f, "网络请求失败: {}", message)
                }
            }
            TranslationError::FileOperation { path, operation, source } => {
                write!(f, "文件{}操作失败 [{}]: {}", operation, path, source)
            }
            TranslationError::Spreadsheet { path, details } => {
                write!(f, "工作簿处理失败 [{}]: {}", path, details)
            }
            TranslationError::Configuration { field, reason } => {
                write!(f, "配置错误 [{}]: {}", field, reason)
            }
            TranslationError::Internal { source } => {
                write!(f, "内部处理错误: {}", source)
            }
        }
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationError::Internal { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// 表格翻译结果类型别名
pub type Result<T> = std::result::Result<T, TranslationError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! translation_error {
    (selection, $input:expr, $reason:expr) => {
        $crate::error::TranslationError::InvalidSelection {
            input: $input.to_string(),
            reason: $reason.to_string(),
        }
    };
    (credential, $service:expr, $reason:expr) => {
        $crate::error::TranslationError::InvalidCredential {
            service: $service.to_string(),
            reason: $reason.to_string(),
        }
    };
    (translation, $text:expr, $reason:expr) => {
        $crate::error::TranslationError::TranslationFailure {
            text: $text.to_string(),
            reason: $reason.to_string(),
        }
    };
    (language, $input:expr) => {
        $crate::error::TranslationError::UnsupportedLanguage {
            input: $input.to_string(),
        }
    };
    (network, $msg:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: None,
        }
    };
    (network, $msg:expr, $code:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: Some($code),
        }
    };
    (file_op, $path:expr, $op:expr, $source:expr) => {
        $crate::error::TranslationError::FileOperation {
            path: $path.to_string(),
            operation: $op.to_string(),
            source: $source.to_string(),
        }
    };
    (spreadsheet, $path:expr, $details:expr) => {
        $crate::error::TranslationError::Spreadsheet {
            path: $path.to_string(),
            details: $details.to_string(),
        }
    };
    (config, $field:expr, $reason:expr) => {
        $crate::error::TranslationError::Configuration {
            field: $field.to_string(),
            reason: $reason.to_string(),
        }
    };
}

/// 从anyhow::Error转换为TranslationError
impl From<AnyhowError> for TranslationError {
    fn from(error: AnyhowError) -> Self {
        TranslationError::Internal { source: error }
    }
}

/// 从reqwest::Error转换为TranslationError
impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        TranslationError::Network {
            message: error.to_string(),
            status_code,
        }
    }
}

/// 从std::io::Error转换为TranslationError
impl From<std::io::Error> for TranslationError {
    fn from(error: std::io::Error) -> Self {
        TranslationError::FileOperation {
            path: "unknown".to_string(),
            operation: "io".to_string(),
            source: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslationError::Network {
            message: "Connection failed".to_string(),
            status_code: Some(500),
        };

        assert_eq!(format!("{}", err), "网络请求失败 [500]: Connection failed");

        let err = translation_error!(selection, "9", "编号超出范围");
        assert_eq!(err.to_string(), "选择无效 [9]: 编号超出范围");
    }

    #[test]
    fn test_error_macro() {
        let err = translation_error!(credential, "deepl", "验证调用无返回");
        match err {
            TranslationError::InvalidCredential { service, reason } => {
                assert_eq!(service, "deepl");
                assert_eq!(reason, "验证调用无返回");
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_fatal_classification() {
        assert!(translation_error!(selection, "0", "x").is_fatal());
        assert!(translation_error!(credential, "qcri", "x").is_fatal());
        assert!(!translation_error!(translation, "Hello", "timeout").is_fatal());
        assert!(!translation_error!(language, "klingon").is_fatal());
    }

    #[test]
    fn test_anyhow_conversion() {
        let anyhow_err = anyhow::anyhow!("Test anyhow error");
        let translation_err: TranslationError = anyhow_err.into();

        match translation_err {
            TranslationError::Internal { .. } => {}
            _ => panic!("Wrong error type"),
        }
    }
}
