//! 输出写入模块
//!
//! 负责生成带时间戳的输出路径、创建输出目录，并把结果表写入同一个工作簿。

// 标准库导入
use std::fs;
use std::path::{Path, PathBuf};

// 第三方crate导入
use chrono::{DateTime, Local};
use tracing::{debug, info};
use umya_spreadsheet::Worksheet;

// 本地模块导入
use crate::constants::file_config;
use crate::error::Result;
use crate::sheet::{CellValue, Table};
use crate::translation_error;

/// 当前时间戳，格式如 `2024.05.01-13.45.09`
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format(file_config::TIMESTAMP_FORMAT).to_string()
}

/// 生成输出路径：`{目录}/{名称}_{时间戳}.xlsx`
pub fn output_path<P: AsRef<Path>>(directory: P, name: &str, timestamp: &str) -> PathBuf {
    directory
        .as_ref()
        .join(format!("{}_{}.xlsx", name.trim(), timestamp))
}

/// 确保目录存在，已存在时不报错
pub fn ensure_directory<P: AsRef<Path>>(directory: P) -> Result<()> {
    let directory = directory.as_ref();
    if directory.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(directory)
        .map_err(|e| translation_error!(file_op, directory.display(), "创建目录", e))?;
    debug!("输出目录就绪: {}", directory.display());
    Ok(())
}

/// 截断为Excel允许的工作表名
fn sheet_title(name: &str, index: usize) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            ':' | '\\' | '/' | '?' | '*' | '[' | ']' => '_',
            other => other,
        })
        .take(file_config::MAX_SHEET_NAME_LEN)
        .collect();

    if cleaned.trim().is_empty() {
        format!("Sheet{}", index + 1)
    } else {
        cleaned
    }
}

fn write_value(sheet: &mut Worksheet, col: u32, row: u32, value: &CellValue) {
    match value {
        CellValue::Text(text) => {
            sheet.get_cell_mut((col, row)).set_value_string(text.as_str());
        }
        CellValue::Error(code) => {
            sheet.get_cell_mut((col, row)).set_error(code.as_str());
        }
        CellValue::Number(n) => {
            sheet.get_cell_mut((col, row)).set_value_number(*n);
        }
        CellValue::Formatted { value, format_code } => {
            let cell = sheet.get_cell_mut((col, row));
            cell.set_value_number(*value);
            cell.get_style_mut()
                .get_number_format_mut()
                .set_format_code(format_code.as_str());
        }
        CellValue::Bool(b) => {
            sheet.get_cell_mut((col, row)).set_value_bool(*b);
        }
        CellValue::Empty => {}
    }
}

fn fill_sheet(sheet: &mut Worksheet, table: &Table, include_header: bool) {
    let mut row_number: u32 = 1;

    if include_header {
        if let Some(headers) = &table.headers {
            for (col, header) in headers.iter().enumerate() {
                sheet
                    .get_cell_mut((col as u32 + 1, row_number))
                    .set_value_string(header.as_str());
            }
            row_number += 1;
        }
    }

    for row in &table.rows {
        for (col, value) in row.iter().enumerate() {
            write_value(sheet, col as u32 + 1, row_number, value);
        }
        row_number += 1;
    }
}

/// 把所有表写入同一个工作簿，每个表一个工作表
///
/// 写入前会创建目标目录。`include_header` 为真且表带标题时写出标题行。
pub fn write_workbook<P: AsRef<Path>>(path: P, tables: &[Table], include_header: bool) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    for (index, table) in tables.iter().enumerate() {
        let title = sheet_title(&table.name, index);
        let sheet = book
            .new_sheet(title.as_str())
            .map_err(|e| translation_error!(spreadsheet, path.display(), format!("{}: {}", title, e)))?;
        fill_sheet(sheet, table, include_header);
    }

    if tables.is_empty() {
        book.new_sheet("Sheet1")
            .map_err(|e| translation_error!(spreadsheet, path.display(), e))?;
    }

    umya_spreadsheet::writer::xlsx::write(&book, path)
        .map_err(|e| translation_error!(spreadsheet, path.display(), e))?;

    info!("💾 已写入 {} 个工作表: {}", tables.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_format() {
        let now = Local.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap();
        assert_eq!(timestamp(now), "2024.05.01-13.45.09");
    }

    #[test]
    fn test_output_path() {
        let path = output_path("column", "report", "2024.05.01-13.45.09");
        assert_eq!(path, PathBuf::from("column/report_2024.05.01-13.45.09.xlsx"));
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("all");
        ensure_directory(&target).unwrap();
        ensure_directory(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_sheet_title() {
        assert_eq!(sheet_title("Data", 0), "Data");
        assert_eq!(sheet_title("a/b", 0), "a_b");
        assert_eq!(sheet_title("", 2), "Sheet3");
        assert_eq!(sheet_title(&"x".repeat(40), 0).len(), 31);
    }

    #[test]
    fn test_non_text_cells_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all").join("kinds.xlsx");
        let date = CellValue::Formatted {
            value: 45292.0,
            format_code: "yyyy-mm-dd".to_string(),
        };
        let table = Table::new("Kinds").with_row(vec![
            date.clone(),
            CellValue::Error("#VALUE!".to_string()),
            CellValue::from(7),
            CellValue::from(false),
        ]);

        write_workbook(&path, &[table.clone()], false).unwrap();

        let book = umya_spreadsheet::reader::xlsx::read(&path).unwrap();
        let sheet = &book.get_sheet_collection()[0];
        let date_cell = sheet.get_cell((1, 1)).unwrap();
        assert_eq!(date_cell.get_value_number(), Some(45292.0));
        assert_eq!(
            date_cell
                .get_style()
                .get_number_format()
                .map(|f| f.get_format_code().to_string()),
            Some("yyyy-mm-dd".to_string())
        );
        assert_eq!(sheet.get_cell((2, 1)).unwrap().get_data_type(), "e");

        let written = crate::sheet::read_all_sheets(&path).unwrap();
        assert_eq!(written[0].rows, table.rows);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("column").join("out_1.xlsx");
        let table = Table::new("Translated")
            .with_headers(["Input Text", "Translated Text"])
            .with_row(vec!["Hello".into(), "Bonjour".into()]);

        write_workbook(&path, &[table], true).unwrap();
        assert!(path.is_file());
    }
}
