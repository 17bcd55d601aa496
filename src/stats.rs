use std::time::Duration;

use crate::pipeline::CellCounts;

/// 运行统计
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub config_time: Duration,
    pub translator_init_time: Duration,
    pub read_time: Duration,
    pub translation_time: Duration,
    pub write_time: Duration,
    pub counts: CellCounts,
    pub sheets_written: usize,
}

impl RunStats {
    /// 翻译成功率（百分比），没有文本单元格时为100
    pub fn success_rate(&self) -> f64 {
        let attempted = self.counts.translated + self.counts.failed;
        if attempted == 0 {
            100.0
        } else {
            self.counts.translated as f64 / attempted as f64 * 100.0
        }
    }
}

/// 打印运行统计
pub fn print_run_stats(stats: &RunStats, total_duration: Duration) {
    println!("\n📊 运行统计报告:");
    println!("═══════════════════════════════════════");

    // 时间分解
    println!("⏱️  时间分解:");
    println!("   配置创建: {}", format_duration(stats.config_time));
    println!(
        "   翻译器初始化: {}",
        format_duration(stats.translator_init_time)
    );
    println!("   文件读取: {}", format_duration(stats.read_time));
    println!("   翻译执行: {}", format_duration(stats.translation_time));
    println!("   文件写入: {}", format_duration(stats.write_time));
    println!("   总耗时: {}", format_duration(total_duration));

    // 单元格统计
    println!("\n🔤 单元格统计:");
    println!("   遍历单元格: {} 个", stats.counts.total);
    println!("   翻译成功: {} 个", stats.counts.translated);
    println!("   翻译失败: {} 个", stats.counts.failed);
    println!("   非文本跳过: {} 个", stats.counts.skipped);
    println!("   写出工作表: {} 个", stats.sheets_written);
    println!("   成功率: {:.1}%", stats.success_rate());

    if stats.counts.translated > 0 && !stats.translation_time.is_zero() {
        println!(
            "   平均每个单元格: {}",
            format_duration(stats.translation_time / stats.counts.translated as u32)
        );
    }
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}
