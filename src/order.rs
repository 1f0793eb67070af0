use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::SortError;

/// Ordering rule applied to complete lines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Ascending lexicographic, a strict prefix sorts first
    Ascending,
    /// Descending lexicographic, a longer line sorts before its prefix
    Descending,
    /// Ascending by the last character, then the one before it and so on. When one line is a
    /// suffix of the other the shorter line sorts first
    LastLetter,
}

const ACCEPTED: &str = "Ascending, Descending, LastLetter";

impl Order {
    /// All built-in rules in their reporting order
    pub fn all() -> [Order; 3] {
        [Order::Ascending, Order::Descending, Order::LastLetter]
    }

    /// Name used for output files and reports
    pub fn name(&self) -> &'static str {
        match self {
            Order::Ascending => "Ascending",
            Order::Descending => "Descending",
            Order::LastLetter => "LastLetter",
        }
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Order {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascending" | "asc" => Ok(Order::Ascending),
            "descending" | "desc" => Ok(Order::Descending),
            "lastletter" | "last-letter" | "last_letter" => Ok(Order::LastLetter),
            _ => Err(SortError::invalid_argument(format!(
                "unrecognized ordering rule '{}', must be one of: {}",
                s, ACCEPTED
            ))),
        }
    }
}
