//! Module navigation and switching.

use graha_core::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One dashboard module. Each holds its own record store and query
/// state; switching modules never resets the module left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    Assets,
    Requests,
    Schedules,
    Finance,
    Projects,
    Energy,
    Certifications,
    Experience,
}

impl Module {
    pub fn title(&self) -> &'static str {
        match self {
            Module::Assets => "Aset",
            Module::Requests => "Permintaan",
            Module::Schedules => "Jadwal Perawatan",
            Module::Finance => "Keuangan",
            Module::Projects => "Proyek",
            Module::Energy => "Energi",
            Module::Certifications => "Sertifikasi",
            Module::Experience => "Pengalaman Penghuni",
        }
    }

    /// Stable key used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            Module::Assets => "assets",
            Module::Requests => "requests",
            Module::Schedules => "schedules",
            Module::Finance => "finance",
            Module::Projects => "projects",
            Module::Energy => "energy",
            Module::Certifications => "certifications",
            Module::Experience => "experience",
        }
    }

    pub fn all() -> &'static [Module] {
        &[
            Module::Assets,
            Module::Requests,
            Module::Schedules,
            Module::Finance,
            Module::Projects,
            Module::Energy,
            Module::Certifications,
            Module::Experience,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|m| m == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Module> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Module {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Module {
        let all = Self::all();
        let idx = self.index();
        all[if idx == 0 { all.len() - 1 } else { idx - 1 }]
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Module {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::all()
            .iter()
            .find(|m| m.key() == key)
            .copied()
            .ok_or_else(|| ParseError::new("Module", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Module::Experience.next(), Module::Assets);
        assert_eq!(Module::Assets.previous(), Module::Experience);
    }

    #[test]
    fn test_index_round_trip() {
        for module in Module::all() {
            assert_eq!(Module::from_index(module.index()), Some(*module));
        }
    }

    #[test]
    fn test_from_str_accepts_config_keys() {
        assert_eq!("assets".parse::<Module>().unwrap(), Module::Assets);
        assert_eq!(" Finance ".parse::<Module>().unwrap(), Module::Finance);
        assert!("payroll".parse::<Module>().is_err());
    }

    #[test]
    fn test_titles_are_distinct() {
        let mut titles: Vec<_> = Module::all().iter().map(|m| m.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), Module::all().len());
    }
}
