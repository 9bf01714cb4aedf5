//! The five anatomical colon regions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Anatomical colon region, ordered proximal to distal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    Ascending,
    Transverse,
    Descending,
    Sigmoid,
    Rectum,
}

impl Region {
    /// All regions in anatomical (proximal → distal) order.
    pub const ALL: [Region; 5] = [
        Region::Ascending,
        Region::Transverse,
        Region::Descending,
        Region::Sigmoid,
        Region::Rectum,
    ];

    /// 0-based anatomical index (Ascending = 0 … Rectum = 4).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Transverse => "Transverse",
            Self::Descending => "Descending",
            Self::Sigmoid => "Sigmoid",
            Self::Rectum => "Rectum",
        }
    }

    /// Case-insensitive lookup; a trailing `:` is tolerated.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().trim_end_matches(':');
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.name().eq_ignore_ascii_case(name))
    }

    /// Regions proximal to this one (lower index).
    pub fn proximal(self) -> &'static [Region] {
        &Self::ALL[..self.index()]
    }

    /// This region and every region distal to it.
    pub fn and_distal(self) -> &'static [Region] {
        &Self::ALL[self.index()..]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_index() {
        for (i, r) in Region::ALL.iter().enumerate() {
            assert_eq!(r.index(), i);
            assert_eq!(Region::from_index(i), Some(*r));
        }
        assert!(Region::Ascending < Region::Rectum);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Region::from_name("sigmoid"), Some(Region::Sigmoid));
        assert_eq!(Region::from_name("Transverse:"), Some(Region::Transverse));
        assert_eq!(Region::from_name("Cecum"), None);
    }

    #[test]
    fn test_proximal_and_distal() {
        assert_eq!(Region::Descending.proximal(), &[Region::Ascending, Region::Transverse]);
        assert_eq!(Region::Sigmoid.and_distal(), &[Region::Sigmoid, Region::Rectum]);
        assert!(Region::Ascending.proximal().is_empty());
    }
}
