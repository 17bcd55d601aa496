use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::{error, info, warn};

use sheets_translator::config::{Cli, RunConfig};
use sheets_translator::console::{self, Prompter, StdinPrompter};
use sheets_translator::credentials::CredentialStore;
use sheets_translator::languages;
use sheets_translator::pipeline::{self, Mode};
use sheets_translator::stats::{format_duration, print_run_stats, RunStats};
use sheets_translator::translator::{Backend, Translator};
use sheets_translator::utils::{init_logging, sanitize_file_stem, validate_input_file};
use sheets_translator::writer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    if cli.list_languages {
        for entry in languages::sorted_by_name() {
            println!("{}", languages::display_line(entry));
        }
        return Ok(());
    }

    if !cli.quiet {
        println!("{}", "-".repeat(40));
        println!("Welcome to the Sheets Translator!");
    }

    let total_start = Instant::now();

    match translate_workbook(&cli).await {
        Ok((output_path, stats)) => {
            let total_duration = total_start.elapsed();
            println!("File saved successfully: {}", output_path.display());

            if !cli.quiet {
                info!("✅ 翻译完成！总耗时: {}", format_duration(total_duration));
            }

            // 显示运行统计
            if cli.stats || cli.verbose {
                print_run_stats(&stats, total_duration);
            }
        }
        Err(e) => {
            error!("❌ 翻译失败: {:#}", e);
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// 根据命令行参数补全配置，缺失项交互询问
fn resolve_config(cli: &Cli, prompter: &mut dyn Prompter) -> Result<RunConfig> {
    let backend = match cli.backend {
        Some(id) => Backend::from_id(id)?,
        None => console::choose_backend(prompter)?,
    };

    let store = CredentialStore::new(&cli.keys_file);
    let service = backend.service_key();
    let api_key = if backend.requires_api_key() {
        Some(store.resolve_key(&service, cli.api_key.as_deref(), cli.update_key, prompter)?)
    } else {
        // 可选密钥（如LibreTranslate）只取命令行或已保存的值
        cli.api_key.clone().or_else(|| store.get(&service))
    };

    let target_lang = match &cli.lang {
        Some(lang) => languages::resolve_code_or_name(lang)?,
        None => console::choose_language(prompter)?,
    };

    let mode = match &cli.mode {
        Some(mode) => Mode::parse(mode)?,
        None => Mode::parse(&console::choose_mode(prompter)?)?,
    };

    let output_name = match &cli.name {
        Some(name) => name.clone(),
        None => console::choose_output_name(prompter)?,
    };

    let config = RunConfig::new(backend, target_lang, mode, &sanitize_file_stem(&output_name))
        .with_api_key(api_key)
        .with_input(cli.input.clone())
        .with_output_root(cli.output_dir.clone())
        .with_timeout_secs(cli.timeout)
        .with_libre_url(&cli.libre_url);

    config.validate()?;
    Ok(config)
}

/// 翻译核心流程：配置 → 翻译器 → 读取 → 逐单元格翻译 → 写出
async fn translate_workbook(cli: &Cli) -> Result<(PathBuf, RunStats)> {
    // 输出文件名中的时间戳在启动时确定
    let timestamp = writer::timestamp(Local::now());
    let mut stats = RunStats::default();

    let config_start = Instant::now();
    let mut prompter = StdinPrompter;
    let config = resolve_config(cli, &mut prompter)?;
    stats.config_time = config_start.elapsed();

    info!("🌐 翻译服务: {}", config.backend().display_name());
    info!(
        "🔤 目标语言: {} ({})",
        languages::name_of(config.target_lang()).unwrap_or_default(),
        config.target_lang()
    );

    let translator_start = Instant::now();
    let translator = Translator::create(
        config.backend(),
        config.target_lang(),
        config.api_key(),
        config.translator_options(),
    )
    .await
    .context("创建翻译器失败")?;
    stats.translator_init_time = translator_start.elapsed();

    let input_path = config.input_path();
    validate_input_file(&input_path)?;
    info!("📂 输入文件: {}", input_path.display());

    let read_start = Instant::now();
    let tables = pipeline::load_input(config.mode(), &input_path)
        .with_context(|| format!("读取工作簿失败: {}", input_path.display()))?;
    stats.read_time = read_start.elapsed();

    let translate_start = Instant::now();
    let output = pipeline::translate_input(config.mode(), &tables, &translator).await;
    stats.translation_time = translate_start.elapsed();
    stats.counts = output.counts;

    let output_path = writer::output_path(config.output_dir(), config.output_name(), &timestamp);
    let write_start = Instant::now();
    writer::write_workbook(&output_path, &output.tables, config.mode().writes_header())
        .with_context(|| format!("写入文件失败: {}", output_path.display()))?;
    stats.write_time = write_start.elapsed();
    stats.sheets_written = output.tables.len();

    if let Some(summary) = &output.failure_summary {
        warn!("⚠️  {} 个单元格翻译失败，已保留原文", output.counts.failed);
        println!("{}", summary);
    }

    Ok((output_path, stats))
}
