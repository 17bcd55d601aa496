//! 表格数据模块
//!
//! 定义内存中的表格结构，并通过 umya-spreadsheet 读取输入工作簿。

// 标准库导入
use std::fmt;
use std::path::Path;

// 第三方crate导入
use tracing::debug;
use umya_spreadsheet::{Cell, NumberingFormat, Worksheet};

// 本地模块导入
use crate::error::Result;
use crate::translation_error;

/// 单元格取值
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// 文本，唯一需要翻译的类型
    Text(String),
    /// 数值（常规格式）
    Number(f64),
    /// 带数字格式的数值，例如日期 `yyyy-mm-dd`；写出时恢复格式
    Formatted { value: f64, format_code: String },
    /// 布尔值
    Bool(bool),
    /// 错误值（如 `#DIV/0!`），原样保留
    Error(String),
    /// 空单元格
    Empty,
}

impl CellValue {
    /// 文本内容（非文本返回 `None`）
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) | CellValue::Error(text) => write!(f, "{}", text),
            CellValue::Number(n) | CellValue::Formatted { value: n, .. } => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// 内存中的工作表
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    /// 工作表名称
    pub name: String,
    /// 列标题；`None` 表示按位置识别列
    pub headers: Option<Vec<String>>,
    /// 数据行
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 创建没有标题的空表
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            headers: None,
            rows: Vec::new(),
        }
    }

    /// 设置列标题
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// 追加一行
    pub fn with_row(mut self, row: Vec<CellValue>) -> Self {
        self.rows.push(row);
        self
    }

    /// 列标识：有标题时用标题，否则用列字母
    pub fn column_id(&self, index: usize) -> String {
        self.headers
            .as_ref()
            .and_then(|headers| headers.get(index))
            .cloned()
            .unwrap_or_else(|| column_letter(index))
    }

    /// 读取单元格，越界视为空
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&CellValue::Empty)
    }

    /// 单列的所有值
    pub fn column(&self, index: usize) -> Vec<CellValue> {
        (0..self.rows.len())
            .map(|row| self.cell(row, index).clone())
            .collect()
    }
}

/// 列序号转列字母（0 → A，25 → Z，26 → AA）
pub fn column_letter(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn open_workbook(path: &Path) -> Result<umya_spreadsheet::Spreadsheet> {
    if !path.is_file() {
        return Err(translation_error!(
            file_op,
            path.display(),
            "读取",
            "输入文件不存在"
        ));
    }
    umya_spreadsheet::reader::xlsx::read(path)
        .map_err(|e| translation_error!(spreadsheet, path.display(), e))
}

fn convert_cell(cell: Option<&Cell>) -> CellValue {
    let Some(cell) = cell else {
        return CellValue::Empty;
    };

    let value = cell.get_value();
    if value.is_empty() {
        return CellValue::Empty;
    }

    match cell.get_data_type() {
        "s" | "str" | "inlineStr" => CellValue::Text(value.into_owned()),
        "b" => CellValue::Bool(value.eq_ignore_ascii_case("true") || value == "1"),
        "e" => CellValue::Error(value.into_owned()),
        "n" => match cell.get_value_number().or_else(|| value.parse().ok()) {
            Some(n) => match number_format(cell) {
                Some(format_code) => CellValue::Formatted {
                    value: n,
                    format_code,
                },
                None => CellValue::Number(n),
            },
            None => CellValue::Text(value.into_owned()),
        },
        _ => match value.parse::<f64>() {
            Ok(n) => CellValue::Number(n),
            Err(_) => CellValue::Text(value.into_owned()),
        },
    }
}

/// 非常规的数字格式代码
fn number_format(cell: &Cell) -> Option<String> {
    cell.get_style()
        .get_number_format()
        .map(NumberingFormat::get_format_code)
        .filter(|code| !code.is_empty() && *code != NumberingFormat::FORMAT_GENERAL)
        .map(str::to_string)
}

fn read_rows(sheet: &Worksheet, columns: u32, first_row: u32) -> Vec<Vec<CellValue>> {
    let (_, highest_row) = sheet.get_highest_column_and_row();
    (first_row..=highest_row)
        .map(|row| {
            (1..=columns)
                .map(|col| convert_cell(sheet.get_cell((col, row))))
                .collect()
        })
        .collect()
}

/// 读取第一个工作表的第一列
///
/// 第一行视为标题（任意内容）并丢弃，其余行为数据。
pub fn read_first_column<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let book = open_workbook(path)?;
    let sheet = book
        .get_sheet_collection()
        .first()
        .ok_or_else(|| translation_error!(spreadsheet, path.display(), "工作簿中没有工作表"))?;

    let rows = read_rows(sheet, 1, 2);
    debug!("读取单列数据 {}: {} 行", path.display(), rows.len());

    Ok(Table {
        name: sheet.get_name().to_string(),
        headers: None,
        rows,
    })
}

/// 读取全部工作表的全部单元格
///
/// 不区分标题行，每一行（包括第一行）都作为数据，列按位置以字母标识。
pub fn read_all_sheets<P: AsRef<Path>>(path: P) -> Result<Vec<Table>> {
    let path = path.as_ref();
    let book = open_workbook(path)?;

    let tables: Vec<Table> = book
        .get_sheet_collection()
        .iter()
        .map(|sheet| {
            let (highest_col, _) = sheet.get_highest_column_and_row();
            let rows = read_rows(sheet, highest_col, 1);
            debug!("读取工作表 {}: {} 行 {} 列", sheet.get_name(), rows.len(), highest_col);
            Table {
                name: sheet.get_name().to_string(),
                headers: None,
                rows,
            }
        })
        .collect();

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(1), "B");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(701), "ZZ");
        assert_eq!(column_letter(702), "AAA");
    }

    #[test]
    fn test_table_column_ids() {
        let table = Table::new("A").with_row(vec!["x".into(), 1.into()]);
        assert_eq!(table.column_id(1), "B");

        let table = table.with_headers(["Input Text"]);
        assert_eq!(table.column_id(0), "Input Text");
        assert_eq!(table.column_id(1), "B");
    }

    #[test]
    fn test_cell_out_of_range_is_empty() {
        let table = Table::new("A").with_row(vec!["x".into()]);
        assert!(table.cell(0, 5).is_empty());
        assert!(table.cell(3, 0).is_empty());
        assert_eq!(table.cell(0, 0).as_text(), Some("x"));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::from(true).to_string(), "TRUE");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_formatted_number_display() {
        let date = CellValue::Formatted {
            value: 45292.0,
            format_code: "yyyy-mm-dd".to_string(),
        };
        assert_eq!(date.to_string(), "45292");
        assert_eq!(date.as_text(), None);
    }

    #[test]
    fn test_read_keeps_cell_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kinds.xlsx");
        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        {
            let sheet = book.new_sheet("Kinds").unwrap();
            sheet.get_cell_mut((1, 1)).set_value_string("text");
            sheet.get_cell_mut((2, 1)).set_value_number(1.5);
            sheet.get_cell_mut((3, 1)).set_value_bool(true);
            sheet.get_cell_mut((4, 1)).set_error("#VALUE!");
            let date = sheet.get_cell_mut((5, 1));
            date.set_value_number(45292);
            date.get_style_mut()
                .get_number_format_mut()
                .set_format_code(NumberingFormat::FORMAT_DATE_YYYYMMDD);
        }
        umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();

        let tables = read_all_sheets(&path).unwrap();
        assert_eq!(
            tables[0].rows[0],
            vec![
                CellValue::from("text"),
                CellValue::from(1.5),
                CellValue::from(true),
                CellValue::Error("#VALUE!".to_string()),
                CellValue::Formatted {
                    value: 45292.0,
                    format_code: "yyyy-mm-dd".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_all_sheets(dir.path().join("missing.xlsx")).unwrap_err();
        assert!(matches!(
            err,
            crate::error::TranslationError::FileOperation { .. }
        ));
    }
}
