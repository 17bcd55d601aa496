//! API密钥存储模块
//!
//! 密钥以 `service=key` 的形式逐行保存在纯文本文件中。
//! 每次保存都会重写整个文件，仅适用于单进程顺序访问。

// 标准库导入
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

// 第三方crate导入
use tracing::{debug, info, warn};

// 本地模块导入
use crate::console::Prompter;
use crate::constants::file_config;
use crate::error::Result;
use crate::translation_error;

/// 基于纯文本文件的密钥存储
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(file_config::API_KEYS_FILE)
    }
}

impl CredentialStore {
    /// 使用指定文件创建密钥存储
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// 密钥文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 读取全部密钥
    ///
    /// 文件不存在或无法读取时返回空映射，不会报错。
    pub fn load(&self) -> BTreeMap<String, String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("密钥文件不可用 {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        let mut keys = BTreeMap::new();
        for (line_no, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match line.split_once('=') {
                Some((service, key)) => {
                    keys.insert(service.to_string(), key.to_string());
                }
                None => warn!(
                    "⚠️  忽略格式错误的密钥行 {}:{}",
                    self.path.display(),
                    line_no + 1
                ),
            }
        }
        keys
    }

    /// 获取单个服务的密钥
    pub fn get(&self, service: &str) -> Option<String> {
        self.load().remove(service)
    }

    /// 保存密钥：合并到现有映射后重写整个文件
    pub fn save(&self, service: &str, key: &str) -> Result<()> {
        let mut keys = self.load();
        keys.insert(service.to_string(), key.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                translation_error!(file_op, parent.display(), "创建目录", e)
            })?;
        }

        let content: String = keys
            .iter()
            .map(|(service, key)| format!("{}={}\n", service, key))
            .collect();

        fs::write(&self.path, content)
            .map_err(|e| translation_error!(file_op, self.path.display(), "写入", e))?;

        debug!("已保存 {} 的密钥到 {}", service, self.path.display());
        Ok(())
    }

    /// 交互式获取密钥
    ///
    /// 已有密钥时仅在用户明确回答 `yes` 后替换；没有密钥时要求输入并立即保存。
    pub fn prompt_update(&self, service: &str, prompter: &mut dyn Prompter) -> Result<String> {
        let service_name = title_case(service);

        if let Some(current) = self.get(service) {
            let answer = prompter.ask(&format!(
                "Current API key found for {}. Would you like to update it? (yes/no): ",
                service_name
            ))?;
            if answer.eq_ignore_ascii_case("yes") {
                let new_key = prompter.ask("Enter the new API key: ")?;
                self.save(service, &new_key)?;
                info!("🔑 已更新 {} 的API密钥", service_name);
                return Ok(new_key);
            }
            return Ok(current);
        }

        let new_key = prompter.ask(&format!("Enter the API key for {}: ", service_name))?;
        self.save(service, &new_key)?;
        info!("🔑 已保存 {} 的API密钥", service_name);
        Ok(new_key)
    }

    /// 确定本次运行使用的密钥
    ///
    /// 命令行显式给出的密钥直接保存并使用；否则走交互流程。
    /// `force_update` 为真时跳过 yes/no 询问，直接要求输入新密钥。
    pub fn resolve_key(
        &self,
        service: &str,
        explicit: Option<&str>,
        force_update: bool,
        prompter: &mut dyn Prompter,
    ) -> Result<String> {
        if let Some(key) = explicit {
            self.save(service, key)?;
            return Ok(key.to_string());
        }

        if force_update {
            let new_key = prompter.ask("Enter the new API key: ")?;
            self.save(service, &new_key)?;
            return Ok(new_key);
        }

        self.prompt_update(service, prompter)
    }
}

fn title_case(service: &str) -> String {
    let mut chars = service.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
