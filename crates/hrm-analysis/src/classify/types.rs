//! Classification result types.

use std::fmt;

use serde::Serialize;

use hrm_core::types::Region;

/// Propagation direction of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Direction {
    Anterograde,
    Retrograde,
    Simultaneous,
}

impl Direction {
    pub const ALL: [Direction; 3] = [
        Direction::Simultaneous,
        Direction::Retrograde,
        Direction::Anterograde,
    ];

    /// Single-letter code used in pattern sheets.
    pub fn code(self) -> char {
        match self {
            Self::Anterograde => 'a',
            Self::Retrograde => 'r',
            Self::Simultaneous => 's',
        }
    }

    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'a' => Some(Self::Anterograde),
            'r' => Some(Self::Retrograde),
            's' => Some(Self::Simultaneous),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LengthCategory {
    Long,
    #[default]
    Short,
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Long => "Long",
            Self::Short => "Short",
        })
    }
}

/// Classification of one pattern row.
///
/// `Default` is the safe fallback used when a row cannot be read: short,
/// no direction, zero velocity, no amplitudes, no HAPC/HARPC.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Classification {
    pub length_category: LengthCategory,
    pub direction: Option<Direction>,
    pub velocity: f64,
    /// Positive sensor readings in sensor order.
    pub amplitudes: Vec<f64>,
    pub is_hapc: bool,
    pub is_harpc: bool,
    pub starting_region: Option<Region>,
    pub ending_region: Option<Region>,
}

impl Classification {
    /// Attach resolved regions.
    pub fn located(self, starting_region: Region, ending_region: Region) -> Self {
        Self {
            starting_region: Some(starting_region),
            ending_region: Some(ending_region),
            ..self
        }
    }

    pub fn is_long(&self) -> bool {
        self.length_category == LengthCategory::Long
    }
}
