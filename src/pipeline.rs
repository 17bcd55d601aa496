//! 批量翻译流水线
//!
//! 逐个单元格调用翻译器，失败时保留原文并记录失败位置。
//! 所有调用严格按行优先、列按输入顺序依次进行，不并发、不去重。

// 标准库导入
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// 第三方crate导入
use tracing::{debug, info};

// 本地模块导入
use crate::constants::{file_config, service_config};
use crate::error::{Result, TranslationError};
use crate::sheet::{CellValue, Table};
use crate::translation_error;
use crate::translator::CellTranslator;

/// 翻译模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 只翻译第一列
    Column,
    /// 翻译所有工作表的所有单元格
    AllSheets,
}

impl Mode {
    /// 解析用户输入的 `1` 或 `2`
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(Mode::Column),
            "2" => Ok(Mode::AllSheets),
            other => Err(translation_error!(
                selection,
                other,
                "Invalid input. Please specify '1' for column or '2' for all sheets."
            )),
        }
    }

    /// 输出子目录
    pub fn directory(self) -> &'static str {
        match self {
            Mode::Column => file_config::COLUMN_OUTPUT_DIR,
            Mode::AllSheets => file_config::ALL_SHEETS_OUTPUT_DIR,
        }
    }

    /// 默认输入文件
    pub fn default_input(self) -> PathBuf {
        PathBuf::from(match self {
            Mode::Column => file_config::COLUMN_INPUT_FILE,
            Mode::AllSheets => file_config::ALL_SHEETS_INPUT_FILE,
        })
    }

    /// 输出是否包含标题行
    pub fn writes_header(self) -> bool {
        matches!(self, Mode::Column)
    }
}

/// 单个失败单元格
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    /// 数据行序号（从0开始）
    pub row: usize,
    /// 列标识
    pub column: String,
    /// 失败原因
    pub reason: String,
}

/// 单元格计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellCounts {
    /// 遍历的单元格总数
    pub total: usize,
    /// 翻译成功
    pub translated: usize,
    /// 翻译失败（保留原文）
    pub failed: usize,
    /// 非文本单元格，未发送翻译
    pub skipped: usize,
}

impl CellCounts {
    fn merge(&mut self, other: CellCounts) {
        self.total += other.total;
        self.translated += other.translated;
        self.failed += other.failed;
        self.skipped += other.skipped;
    }
}

/// 单列模式结果
#[derive(Debug, Clone)]
pub struct ColumnReport {
    /// 两列输出：原文与译文
    pub table: Table,
    /// 失败的行序号
    pub failed_rows: Vec<usize>,
    /// 失败明细
    pub failures: Vec<FailureRecord>,
    pub counts: CellCounts,
}

/// 全表模式结果
#[derive(Debug, Clone, Default)]
pub struct SheetsReport {
    /// 翻译后的工作表，顺序与输入一致
    pub tables: Vec<Table>,
    /// 按工作表分组的失败位置，只包含存在失败的工作表
    pub failed_sheets: BTreeMap<String, Vec<(usize, String)>>,
    /// 失败明细
    pub failures: Vec<FailureRecord>,
    pub counts: CellCounts,
}

/// 单个单元格的处理结果
enum Outcome {
    Translated(CellValue),
    /// 原值与失败原因
    Failed(CellValue, String),
    Skipped(CellValue),
}

/// 失败原因：翻译失败只取原因部分，其余错误取完整描述
fn failure_reason(error: &TranslationError) -> String {
    match error {
        TranslationError::TranslationFailure { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

async fn translate_value<T>(value: &CellValue, translator: &T) -> Outcome
where
    T: CellTranslator + ?Sized,
{
    match value.as_text() {
        Some(text) => match translator.translate_cell(text).await {
            Ok(translated) if !translated.is_empty() => {
                Outcome::Translated(CellValue::Text(translated))
            }
            Ok(_) => Outcome::Failed(value.clone(), "empty translation".to_string()),
            Err(e) => Outcome::Failed(value.clone(), failure_reason(&e)),
        },
        None => Outcome::Skipped(value.clone()),
    }
}

fn log_progress(label: &str, done: usize, total: usize) {
    if done % service_config::PROGRESS_INTERVAL == 0 || done == total {
        info!("⏳ {}: {}/{}", label, done, total);
    }
}

/// 单列模式：翻译第一列
///
/// 输出表包含 `Input Text` 与 `Translated Text` 两列。
/// 翻译失败时译文列保留原文，并记录行序号；非文本单元格原样复制，不计为失败。
pub async fn translate_column<T>(table: &Table, translator: &T) -> ColumnReport
where
    T: CellTranslator + ?Sized,
{
    let inputs = table.column(0);
    let total = inputs.len();

    let mut rows = Vec::with_capacity(total);
    let mut failed_rows = Vec::new();
    let mut failures = Vec::new();
    let mut counts = CellCounts::default();

    for (index, original) in inputs.into_iter().enumerate() {
        counts.total += 1;
        let translated = match translate_value(&original, translator).await {
            Outcome::Translated(value) => {
                counts.translated += 1;
                value
            }
            Outcome::Failed(value, reason) => {
                counts.failed += 1;
                debug!("第 {} 行翻译失败，保留原文: {}", index, reason);
                failed_rows.push(index);
                failures.push(FailureRecord {
                    row: index,
                    column: file_config::INPUT_COLUMN_LABEL.to_string(),
                    reason,
                });
                value
            }
            Outcome::Skipped(value) => {
                counts.skipped += 1;
                value
            }
        };
        rows.push(vec![original, translated]);
        log_progress("Translating column", index + 1, total);
    }

    let table = Table {
        name: file_config::COLUMN_SHEET_NAME.to_string(),
        headers: Some(vec![
            file_config::INPUT_COLUMN_LABEL.to_string(),
            file_config::TRANSLATED_COLUMN_LABEL.to_string(),
        ]),
        rows,
    };

    ColumnReport {
        table,
        failed_rows,
        failures,
        counts,
    }
}

/// 翻译单个工作表的全部单元格，返回译后表、失败位置和计数
async fn translate_sheet<T>(
    table: &Table,
    translator: &T,
) -> (Table, Vec<(usize, String)>, Vec<FailureRecord>, CellCounts)
where
    T: CellTranslator + ?Sized,
{
    let mut translated = table.clone();
    let mut failed = Vec::new();
    let mut failures = Vec::new();
    let mut counts = CellCounts::default();
    let total = table.rows.len();
    let label = format!("Translating {}", table.name);

    for (row_index, row) in translated.rows.iter_mut().enumerate() {
        for (col_index, cell) in row.iter_mut().enumerate() {
            counts.total += 1;
            match translate_value(cell, translator).await {
                Outcome::Translated(value) => {
                    counts.translated += 1;
                    *cell = value;
                }
                Outcome::Failed(_, reason) => {
                    counts.failed += 1;
                    let column = table.column_id(col_index);
                    debug!(
                        "{} 第 {} 行 {} 列翻译失败，保留原文: {}",
                        table.name, row_index, column, reason
                    );
                    failures.push(FailureRecord {
                        row: row_index,
                        column: column.clone(),
                        reason,
                    });
                    failed.push((row_index, column));
                }
                Outcome::Skipped(_) => counts.skipped += 1,
            }
        }
        log_progress(&label, row_index + 1, total);
    }

    (translated, failed, failures, counts)
}

/// 全表模式：依次翻译所有工作表的所有文本单元格
pub async fn translate_all_sheets<T>(tables: &[Table], translator: &T) -> SheetsReport
where
    T: CellTranslator + ?Sized,
{
    let mut report = SheetsReport::default();

    for table in tables {
        let (translated, failed, failures, counts) = translate_sheet(table, translator).await;
        if !failed.is_empty() {
            report.failed_sheets.insert(table.name.clone(), failed);
        }
        report.failures.extend(failures);
        report.counts.merge(counts);
        report.tables.push(translated);
    }

    report
}

/// 按模式读取输入工作簿
///
/// 单列模式只返回一个表（第一个工作表的第一列），全表模式返回所有工作表。
pub fn load_input(mode: Mode, input: &Path) -> Result<Vec<Table>> {
    match mode {
        Mode::Column => Ok(vec![crate::sheet::read_first_column(input)?]),
        Mode::AllSheets => crate::sheet::read_all_sheets(input),
    }
}

/// 执行对应模式的翻译，返回要写出的表和失败摘要
pub async fn translate_input<T>(mode: Mode, tables: &[Table], translator: &T) -> ModeOutput
where
    T: CellTranslator + ?Sized,
{
    match mode {
        Mode::Column => {
            let empty = Table::default();
            let table = tables.first().unwrap_or(&empty);
            let report = translate_column(table, translator).await;
            let failure_summary = (!report.failed_rows.is_empty()).then(|| {
                format!(
                    "Failed to translate the following rows: {:?}",
                    report.failed_rows
                )
            });
            ModeOutput {
                tables: vec![report.table],
                counts: report.counts,
                failure_summary,
            }
        }
        Mode::AllSheets => {
            let report = translate_all_sheets(tables, translator).await;
            let failure_summary = (!report.failed_sheets.is_empty()).then(|| {
                format!(
                    "Failed to translate the following cells in sheets: {:?}",
                    report.failed_sheets
                )
            });
            ModeOutput {
                tables: report.tables,
                counts: report.counts,
                failure_summary,
            }
        }
    }
}

/// 某个模式的运行输出
#[derive(Debug, Clone)]
pub struct ModeOutput {
    /// 待写出的表
    pub tables: Vec<Table>,
    /// 单元格计数
    pub counts: CellCounts,
    /// 失败摘要（没有失败时为 `None`）
    pub failure_summary: Option<String>,
}
