use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCategoryError;
use crate::text::capitalize;

/// Help-page group a bot command belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionCategory {
    Command,
    General,
    Guild,
    Moderation,
}

impl OptionCategory {
    /// Every category, in declaration order.
    pub const ALL: [OptionCategory; 4] = [
        OptionCategory::Command,
        OptionCategory::General,
        OptionCategory::Guild,
        OptionCategory::Moderation,
    ];

    /// Upper-case constant name, e.g. `"MODERATION"`.
    pub fn label(&self) -> &'static str {
        match self {
            OptionCategory::Command => "COMMAND",
            OptionCategory::General => "GENERAL",
            OptionCategory::Guild => "GUILD",
            OptionCategory::Moderation => "MODERATION",
        }
    }
}

impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&capitalize(self.label()))
    }
}

impl FromStr for OptionCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OptionCategory::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_capitalised_label() {
        let shown: Vec<String> = OptionCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(shown, vec!["Command", "General", "Guild", "Moderation"]);
    }

    #[test]
    fn parses_any_casing() {
        for category in OptionCategory::ALL {
            assert_eq!(category.label().parse::<OptionCategory>(), Ok(category));
            assert_eq!(category.to_string().parse::<OptionCategory>(), Ok(category));
            assert_eq!(
                category.label().to_lowercase().parse::<OptionCategory>(),
                Ok(category)
            );
        }
        assert_eq!("mOdErAtIoN".parse::<OptionCategory>(), Ok(OptionCategory::Moderation));
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "admin".parse::<OptionCategory>().expect_err("not a category");
        assert_eq!(err, ParseCategoryError("admin".into()));
        assert_eq!(err.to_string(), "unknown option category: \"admin\"");
        assert!(" guild".parse::<OptionCategory>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_label() {
        let json = serde_json::to_string(&OptionCategory::Guild).expect("serialize");
        assert_eq!(json, "\"guild\"");
        let back: OptionCategory = serde_json::from_str("\"moderation\"").expect("deserialize");
        assert_eq!(back, OptionCategory::Moderation);
    }
}
