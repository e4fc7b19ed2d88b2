use std::fmt;
use std::str::FromStr;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Named filter preset mapping to a fixed category-membership rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// CPU, Memory and IO parameters.
    Performance,
    /// Thermal parameters.
    Power,
}

impl Intent {
    pub const ALL: [Intent; 2] = [Intent::Performance, Intent::Power];

    /// Leaf categories the preset narrows to.
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Intent::Performance => &["CPU", "Memory", "IO"],
            Intent::Power => &["Thermal"],
        }
    }

    /// Breadcrumb label, e.g. `"Performance"`.
    pub fn label(self) -> &'static str {
        match self {
            Intent::Performance => "Performance",
            Intent::Power => "Power",
        }
    }

    /// Only the performance preset drops a previously selected category.
    pub fn clears_selected_category(self) -> bool {
        matches!(self, Intent::Performance)
    }

    pub fn includes(self, category: &str) -> bool {
        self.categories().iter().any(|c| *c == category)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Performance => write!(f, "performance"),
            Intent::Power => write!(f, "power"),
        }
    }
}

impl FromStr for Intent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "performance" => Ok(Intent::Performance),
            "power" => Ok(Intent::Power),
            other => bail!("unknown intent '{}' (expected 'performance' or 'power')", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Performance".parse::<Intent>().unwrap(), Intent::Performance);
        assert_eq!(" power ".parse::<Intent>().unwrap(), Intent::Power);
        assert!("speed".parse::<Intent>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for intent in Intent::ALL {
            assert_eq!(intent.to_string().parse::<Intent>().unwrap(), intent);
        }
    }

    #[test]
    fn membership() {
        assert!(Intent::Performance.includes("IO"));
        assert!(!Intent::Performance.includes("Thermal"));
        assert!(Intent::Power.includes("Thermal"));
    }
}
