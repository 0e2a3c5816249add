use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Page size. `Unbounded` turns paging off and shows every row on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ItemsPerPageRepr", into = "ItemsPerPageRepr")]
pub enum ItemsPerPage {
    Limited(NonZeroUsize),
    Unbounded,
}

impl ItemsPerPage {
    pub const DEFAULT: usize = 10;

    pub fn limited(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(ItemsPerPage::Limited)
    }

    pub fn limit(&self) -> Option<usize> {
        match self {
            ItemsPerPage::Limited(n) => Some(n.get()),
            ItemsPerPage::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, ItemsPerPage::Unbounded)
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        ItemsPerPage::Limited(NonZeroUsize::new(Self::DEFAULT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemsPerPage::Limited(n) => write!(f, "{}", n),
            ItemsPerPage::Unbounded => write!(f, "all"),
        }
    }
}

impl FromStr for ItemsPerPage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "all" | "unbounded" | "infinity" | "inf" => Ok(ItemsPerPage::Unbounded),
            other => other
                .parse::<usize>()
                .ok()
                .and_then(ItemsPerPage::limited)
                .ok_or_else(|| Error::InvalidItemsPerPage(trimmed.to_string())),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum ItemsPerPageRepr {
    Count(u64),
    Word(String),
}

impl TryFrom<ItemsPerPageRepr> for ItemsPerPage {
    type Error = Error;

    fn try_from(repr: ItemsPerPageRepr) -> Result<Self, Self::Error> {
        match repr {
            ItemsPerPageRepr::Count(n) => usize::try_from(n)
                .ok()
                .and_then(ItemsPerPage::limited)
                .ok_or_else(|| Error::InvalidItemsPerPage(n.to_string())),
            ItemsPerPageRepr::Word(word) => word.parse(),
        }
    }
}

impl From<ItemsPerPage> for ItemsPerPageRepr {
    fn from(value: ItemsPerPage) -> Self {
        match value {
            ItemsPerPage::Limited(n) => ItemsPerPageRepr::Count(n.get() as u64),
            ItemsPerPage::Unbounded => ItemsPerPageRepr::Word("all".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ten() {
        assert_eq!(ItemsPerPage::default().limit(), Some(10));
    }

    #[test]
    fn test_parse() {
        assert_eq!("25".parse::<ItemsPerPage>().unwrap().limit(), Some(25));
        assert_eq!("All".parse::<ItemsPerPage>().unwrap(), ItemsPerPage::Unbounded);
        assert_eq!(
            "infinity".parse::<ItemsPerPage>().unwrap(),
            ItemsPerPage::Unbounded
        );
        assert!(matches!(
            "0".parse::<ItemsPerPage>(),
            Err(Error::InvalidItemsPerPage(_))
        ));
        assert!("ten".parse::<ItemsPerPage>().is_err());
    }

    #[test]
    fn test_serde_accepts_number_or_word() {
        let limited: ItemsPerPage = serde_json::from_str("5").unwrap();
        assert_eq!(limited.limit(), Some(5));

        let unbounded: ItemsPerPage = serde_json::from_str("\"all\"").unwrap();
        assert!(unbounded.is_unbounded());
        assert_eq!(serde_json::to_string(&unbounded).unwrap(), "\"all\"");

        assert!(serde_json::from_str::<ItemsPerPage>("0").is_err());
    }
}
