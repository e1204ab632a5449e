use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Minimum Ubuntu CVE priority reported by the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Untriaged,
    Low,
    Medium,
    #[default]
    High,
    Critical,
    All,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Untriaged => "untriaged",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
            Priority::All => "all",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "untriaged" => Ok(Priority::Untriaged),
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            "all" => Ok(Priority::All),
            _ => Err(format!(
                "Invalid priority: {}. Please specify 'untriaged', 'low', 'medium', 'high', 'critical' or 'all'",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
