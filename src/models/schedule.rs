use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 年间工程表中的横条位置 (百分比)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPosition {
    pub left_percent: f64,
    pub width_percent: f64,
}

/// 进度档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    High,    // >= 80
    Medium,  // >= 50
    Low,
}

impl ProgressBand {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 80.0 {
            ProgressBand::High
        } else if rate >= 50.0 {
            ProgressBand::Medium
        } else {
            ProgressBand::Low
        }
    }
}

/// 工程条目
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress_rate: f64,
}

/// 工程条 (position 为 None 时不绘制)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GanttBar {
    pub id: String,
    pub position: Option<BarPosition>,
    pub progress_rate: f64,
    pub band: ProgressBand,
}
