use serde::{Deserialize, Serialize};

/// Icon shown on a KPI tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiIcon {
    Users,
    Briefcase,
    Calendar,
    CheckCircle,
    XCircle,
    Clock,
    TrendingUp,
    Award,
}

impl KpiIcon {
    /// Glyph used by text renderers such as the CLI.
    pub fn glyph(self) -> &'static str {
        match self {
            KpiIcon::Users => "👥",
            KpiIcon::Briefcase => "💼",
            KpiIcon::Calendar => "📅",
            KpiIcon::CheckCircle => "✅",
            KpiIcon::XCircle => "❌",
            KpiIcon::Clock => "⏳",
            KpiIcon::TrendingUp => "📈",
            KpiIcon::Award => "🏆",
        }
    }
}

/// A single metric tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub icon: KpiIcon,
    pub title: String,
    pub value: String,
}

impl KpiCard {
    pub fn new(icon: KpiIcon, title: impl Into<String>, value: impl ToString) -> Self {
        Self {
            icon,
            title: title.into(),
            value: value.to_string(),
        }
    }
}
