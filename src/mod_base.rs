use std::{fmt, str::FromStr};

/// ModBase
///
/// The modified base types that can be summarised. Each type is tied to the canonical
/// reference base it modifies and to the single letter code used for it in the MM tag.
///
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ModBase {
    #[default]
    FiveMC,
    FiveHmC,
    FiveFC,
    FiveCaC,
    FiveHmU,
    FiveFU,
    FiveCaU,
    SixMA,
    FiveOxoG,
    Xao,
}

impl ModBase {
    pub const ALL: [Self; 10] = [
        Self::FiveMC,
        Self::FiveHmC,
        Self::FiveFC,
        Self::FiveCaC,
        Self::FiveHmU,
        Self::FiveFU,
        Self::FiveCaU,
        Self::SixMA,
        Self::FiveOxoG,
        Self::Xao,
    ];

    /// Short user facing selector (as given to --mod_base)
    pub fn abbrev(&self) -> &'static str {
        match self {
            Self::FiveMC => "5mC",
            Self::FiveHmC => "5hmC",
            Self::FiveFC => "5fC",
            Self::FiveCaC => "5caC",
            Self::FiveHmU => "5hmU",
            Self::FiveFU => "5fU",
            Self::FiveCaU => "5caU",
            Self::SixMA => "6mA",
            Self::FiveOxoG => "5oxoG",
            Self::Xao => "Xao",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FiveMC => "5-methylcytosine",
            Self::FiveHmC => "5-hydroxymethylcytosine",
            Self::FiveFC => "5-formylcytosine",
            Self::FiveCaC => "5-carboxylcytosine",
            Self::FiveHmU => "5-hydroxymethyluracil",
            Self::FiveFU => "5-formyluracil",
            Self::FiveCaU => "5-carboxyluracil",
            Self::SixMA => "6-methyladenine",
            Self::FiveOxoG => "8-oxoguanine",
            Self::Xao => "xanthosine",
        }
    }

    /// Canonical reference base
    pub fn base(&self) -> u8 {
        match self {
            Self::FiveMC | Self::FiveHmC | Self::FiveFC | Self::FiveCaC => b'C',
            Self::FiveHmU | Self::FiveFU | Self::FiveCaU => b'T',
            Self::SixMA => b'A',
            Self::FiveOxoG => b'G',
            Self::Xao => b'N',
        }
    }

    /// MM tag code
    pub fn code(&self) -> u8 {
        match self {
            Self::FiveMC => b'm',
            Self::FiveHmC => b'h',
            Self::FiveFC => b'f',
            Self::FiveCaC => b'c',
            Self::FiveHmU => b'g',
            Self::FiveFU => b'e',
            Self::FiveCaU => b'b',
            Self::SixMA => b'a',
            Self::FiveOxoG => b'o',
            Self::Xao => b'n',
        }
    }

    pub fn is_cytosine(&self) -> bool {
        self.base() == b'C'
    }

    /// Exact (case sensitive) lookup by abbreviation
    pub fn from_abbrev(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.abbrev() == s)
    }

    /// Comma separated list of all abbreviations (for help text)
    pub fn abbrev_list() -> String {
        Self::ALL
            .iter()
            .map(|m| m.abbrev())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ModBase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_abbrev(s).ok_or_else(|| s.to_owned())
    }
}

impl fmt::Display for ModBase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn abbreviations_are_unique() {
        let hs: HashSet<_> = ModBase::ALL.iter().map(|m| m.abbrev()).collect();
        assert_eq!(hs.len(), ModBase::ALL.len());
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(ModBase::from_abbrev("6mA"), Some(ModBase::SixMA));
        assert_eq!(ModBase::from_abbrev("5hmC"), Some(ModBase::FiveHmC));
        assert_eq!(ModBase::from_abbrev("5MC"), None);
        assert_eq!(ModBase::from_abbrev("5mC "), None);
        assert_eq!(ModBase::from_abbrev(""), None);
        assert!("5mc".parse::<ModBase>().is_err());
    }

    #[test]
    fn lookup_round_trips_every_entry() {
        for m in ModBase::ALL {
            assert_eq!(m.abbrev().parse::<ModBase>(), Ok(m));
            assert_eq!(format!("{}", m), m.abbrev());
        }
    }

    #[test]
    fn default_is_5mc() {
        let m = ModBase::default();
        assert_eq!(m.abbrev(), "5mC");
        assert_eq!(m.base(), b'C');
        assert_eq!(m.code(), b'm');
        assert!(m.is_cytosine());
    }

    #[test]
    fn reference_bases() {
        let cyt: Vec<_> = ModBase::ALL.iter().filter(|m| m.is_cytosine()).collect();
        assert_eq!(cyt.len(), 4);
        assert_eq!(ModBase::SixMA.base(), b'A');
        assert_eq!(ModBase::FiveOxoG.base(), b'G');
        assert_eq!(ModBase::FiveCaU.base(), b'T');
    }

    #[test]
    fn help_list() {
        let s = ModBase::abbrev_list();
        assert!(s.starts_with("5mC, 5hmC"));
        assert!(s.ends_with("5oxoG, Xao"));
    }
}
