use chrono::{Datelike, NaiveDate};

use crate::models::{BarPosition, GanttBar, ProgressBand, ScheduleEntry};

/// 每月按 31 天近似 (保持画面刻度一致, 不使用实际天数)
const DAYS_PER_MONTH: f64 = 31.0;
const MONTH_WIDTH_PERCENT: f64 = 100.0 / 12.0;
/// 最小宽度, 保证极短工期仍可见
const MIN_WIDTH_PERCENT: f64 = 2.0;

/// period 缺失时的默认工期 (年度)
const FALLBACK_START: (i32, u32, u32) = (2024, 4, 1);
const FALLBACK_END: (i32, u32, u32) = (2025, 3, 31);
const PERIOD_SEPARATOR: char = '〜';

/// 计算年间工程表中横条的位置, 任一日期缺失时返回 None
pub fn position(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<BarPosition> {
    let (start, end) = (start?, end?);
    let left_percent = month_offset_percent(start);
    let end_percent = month_offset_percent(end);

    Some(BarPosition {
        left_percent,
        width_percent: (end_percent - left_percent).max(MIN_WIDTH_PERCENT),
    })
}

fn month_offset_percent(date: NaiveDate) -> f64 {
    (date.month0() as f64 + date.day() as f64 / DAYS_PER_MONTH) * MONTH_WIDTH_PERCENT
}

/// 解析日期, 支持 `YYYY-MM-DD` 及以其开头的 ISO 日期时间 (取字面日期, 不按本地时区换算)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let head = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// 将案件的 period (`開始〜終了`) 拆分为起止日期, 缺失部分使用默认年度
pub fn period_bounds(period: Option<&str>) -> (NaiveDate, NaiveDate) {
    let mut parts = period.unwrap_or("").splitn(2, PERIOD_SEPARATOR);
    let start = parts
        .next()
        .filter(|s| !s.trim().is_empty())
        .and_then(parse_date)
        .unwrap_or_else(|| ymd(FALLBACK_START));
    let end = parts
        .next()
        .filter(|s| !s.trim().is_empty())
        .and_then(parse_date)
        .unwrap_or_else(|| ymd(FALLBACK_END));
    (start, end)
}

fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// 生成工程条列表 (保持输入顺序)
pub fn layout(entries: &[ScheduleEntry]) -> Vec<GanttBar> {
    let bars: Vec<GanttBar> = entries
        .iter()
        .map(|e| GanttBar {
            id: e.id.clone(),
            position: position(e.start_date, e.end_date),
            progress_rate: e.progress_rate,
            band: ProgressBand::from_rate(e.progress_rate),
        })
        .collect();

    let hidden = bars.iter().filter(|b| b.position.is_none()).count();
    if hidden > 0 {
        tracing::debug!("工程条: {} 条, 其中 {} 条缺少日期未绘制", bars.len(), hidden);
    }
    bars
}
