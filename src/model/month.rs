use std::{fmt, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::model::error::LedgerError;

/// Calendar month a record is filed under. Serialized by its English name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January, Month::February, Month::March, Month::April,
        Month::May, Month::June, Month::July, Month::August,
        Month::September, Month::October, Month::November, Month::December
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December"
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Month {
    type Err = LedgerError;

    // Exact match only, the stored keys are the literal names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Month::ALL.iter()
            .find(|month| month.name() == s)
            .copied()
            .ok_or_else(|| LedgerError::InvalidMonth(s.to_owned()))
    }
}
