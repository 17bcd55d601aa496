//! 交互式控制台模块
//!
//! 命令行参数缺失时，通过控制台提示补全运行配置。
//! 输入来源抽象为 [`Prompter`]，方便在测试中使用脚本化输入。

// 标准库导入
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

// 本地模块导入
use crate::error::Result;
use crate::languages;
use crate::translation_error;
use crate::translator::Backend;

/// 控制台提示接口
pub trait Prompter {
    /// 输出提示并读取一行输入（已去除首尾空白）
    fn ask(&mut self, question: &str) -> Result<String>;

    /// 输出一行信息
    fn say(&mut self, message: &str);
}

/// 基于标准输入输出的提示器
#[derive(Debug, Default)]
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        print!("{}", question);
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(translation_error!(file_op, "stdin", "读取", "输入已结束"));
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        println!("{}", message);
    }
}

/// 按预设答案依次回答的提示器
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// 记录所有提问和输出
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    /// 使用预设答案创建提示器
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.transcript.push(question.to_string());
        self.answers
            .pop_front()
            .map(|answer| answer.trim().to_string())
            .ok_or_else(|| translation_error!(file_op, "script", "读取", "预设答案已用完"))
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}

/// 选择翻译服务
pub fn choose_backend(prompter: &mut dyn Prompter) -> Result<Backend> {
    prompter.say("Select a translator from the following options:");
    for backend in Backend::ALL {
        prompter.say(&format!("{}: {}", backend.id(), backend.display_name()));
    }

    let answer = prompter.ask("Select a translator by number: ")?;
    let id = answer
        .parse::<u8>()
        .map_err(|_| translation_error!(selection, answer, "请输入翻译服务编号"))?;
    Backend::from_id(id)
}

/// 选择目标语言，输入 `help` 列出全部语言，无法识别时重新提示
pub fn choose_language(prompter: &mut dyn Prompter) -> Result<&'static str> {
    loop {
        let answer = prompter.ask(
            "Enter the language you want to translate your text into or type 'help' to list all languages: ",
        )?;

        if answer.eq_ignore_ascii_case("help") {
            prompter.say("Available languages:");
            for entry in languages::sorted_by_name() {
                prompter.say(&languages::display_line(entry));
            }
            continue;
        }

        match languages::resolve(&answer) {
            Ok(code) => return Ok(code),
            Err(e) if !e.is_fatal() => {
                prompter.say(
                    "Sorry, the selected language isn't supported for translation. Please try again.",
                );
            }
            Err(e) => return Err(e),
        }
    }
}

/// 选择翻译模式原始输入
pub fn choose_mode(prompter: &mut dyn Prompter) -> Result<String> {
    prompter.ask("Do you want to translate the first column (1) or all sheets (2)?: ")
}

/// 输入输出文件名（不含扩展名）
pub fn choose_output_name(prompter: &mut dyn Prompter) -> Result<String> {
    prompter.ask("Enter a name for the output file (without extension): ")
}
