//! 端到端流程测试：写入真实的xlsx输入，经流水线翻译后写出并重新读取

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use sheets_translator::pipeline::{self, Mode};
use sheets_translator::sheet::{read_all_sheets, CellValue};
use sheets_translator::translator::CellTranslator;
use sheets_translator::Result;
use sheets_translator::writer;

/// 测试用翻译器：固定映射，未登记的文本视为失败
struct Dictionary(BTreeMap<&'static str, &'static str>);

#[async_trait]
impl CellTranslator for Dictionary {
    async fn translate_cell(&self, text: &str) -> Result<String> {
        self.0
            .get(text)
            .map(|t| t.to_string())
            .ok_or_else(|| sheets_translator::translation_error!(translation, text, "unknown word"))
    }
}

fn french() -> Dictionary {
    Dictionary(
        [("Hello", "Bonjour"), ("Cat", "Chat"), ("Dog", "Chien")]
            .into_iter()
            .collect(),
    )
}

fn write_column_input(path: &Path) {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    let sheet = book.new_sheet("Sheet1").unwrap();
    sheet.get_cell_mut((1, 1)).set_value_string("Original header");
    sheet.get_cell_mut((1, 2)).set_value_string("Hello");
    sheet.get_cell_mut((1, 3)).set_value_number(42);
    sheet.get_cell_mut((1, 4)).set_value_string("World");
    // 第二列不属于单列模式的输入
    sheet.get_cell_mut((2, 2)).set_value_string("Cat");
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

fn write_all_sheets_input(path: &Path) {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();
    {
        let sheet = book.new_sheet("A").unwrap();
        sheet.get_cell_mut((1, 1)).set_value_string("Hello");
        sheet.get_cell_mut((2, 1)).set_value_string("Cat");
        sheet.get_cell_mut((1, 2)).set_value_number(3);
        sheet.get_cell_mut((2, 2)).set_value_string("Unknown");
    }
    {
        let sheet = book.new_sheet("B").unwrap();
        sheet.get_cell_mut((1, 1)).set_value_string("Dog");
    }
    umya_spreadsheet::writer::xlsx::write(&book, path).unwrap();
}

#[tokio::test]
async fn column_mode_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input_data_one_column.xlsx");
    write_column_input(&input);

    let tables = pipeline::load_input(Mode::Column, &input).unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(
        tables[0].column(0),
        vec![
            CellValue::from("Hello"),
            CellValue::from(42),
            CellValue::from("World")
        ]
    );

    let output = pipeline::translate_input(Mode::Column, &tables, &french()).await;
    assert_eq!(
        output.failure_summary.as_deref(),
        Some("Failed to translate the following rows: [2]")
    );

    let out_dir = dir.path().join(Mode::Column.directory());
    let out_path = writer::output_path(&out_dir, "result", "2024.01.02-03.04.05");
    writer::write_workbook(&out_path, &output.tables, Mode::Column.writes_header()).unwrap();
    assert!(out_path.ends_with("column/result_2024.01.02-03.04.05.xlsx"));

    let written = read_all_sheets(&out_path).unwrap();
    assert_eq!(written.len(), 1);
    let sheet = &written[0];
    assert_eq!(sheet.name, "Translated");
    assert_eq!(sheet.cell(0, 0).as_text(), Some("Input Text"));
    assert_eq!(sheet.cell(0, 1).as_text(), Some("Translated Text"));
    assert_eq!(
        sheet.column(1)[1..].to_vec(),
        vec![
            CellValue::from("Bonjour"),
            CellValue::from(42),
            CellValue::from("World")
        ]
    );
}

#[tokio::test]
async fn all_sheets_mode_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input_data_all.xlsx");
    write_all_sheets_input(&input);

    let tables = pipeline::load_input(Mode::AllSheets, &input).unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);

    let report = pipeline::translate_all_sheets(&tables, &french()).await;
    let mut expected = BTreeMap::new();
    expected.insert("A".to_string(), vec![(1, "B".to_string())]);
    assert_eq!(report.failed_sheets, expected);

    let out_path = dir.path().join("all").join("result.xlsx");
    writer::write_workbook(&out_path, &report.tables, Mode::AllSheets.writes_header()).unwrap();

    let written = read_all_sheets(&out_path).unwrap();
    assert_eq!(written.len(), 2);
    // 不写标题行，单元格位置与输入一致
    assert_eq!(written[0].cell(0, 0).as_text(), Some("Bonjour"));
    assert_eq!(written[0].cell(0, 1).as_text(), Some("Chat"));
    assert_eq!(written[0].cell(1, 0), &CellValue::from(3));
    assert_eq!(written[0].cell(1, 1).as_text(), Some("Unknown"));
    assert_eq!(written[1].cell(0, 0).as_text(), Some("Chien"));
}
