use std::fmt;
use std::str::FromStr;

/// Display locale for month labels and money formatting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

const MONTHS_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const MONTHS_EN_US: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// The fixed 12-entry month abbreviation table, January first.
    pub fn month_abbreviations(&self) -> &'static [&'static str; 12] {
        match self {
            Self::PtBr => &MONTHS_PT_BR,
            Self::EnUs => &MONTHS_EN_US,
        }
    }

    /// Abbreviation for a 0-based month index. Out-of-range indices yield `None`.
    pub fn month_abbreviation(&self, month_index: usize) -> Option<&'static str> {
        self.month_abbreviations().get(month_index).copied()
    }

    /// Reverse lookup of [`Locale::month_abbreviation`], case-insensitive.
    pub fn month_index(&self, abbreviation: &str) -> Option<usize> {
        self.month_abbreviations()
            .iter()
            .position(|m| m.eq_ignore_ascii_case(abbreviation.trim()))
    }

    /// Thousands and decimal separators.
    pub fn separators(&self) -> (char, char) {
        match self {
            Self::PtBr => ('.', ','),
            Self::EnUs => (',', '.'),
        }
    }
}
