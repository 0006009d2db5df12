use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Wind {
    East = 0,
    South = 1,
    West = 2,
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Wind::East => "東",
                Wind::South => "南",
                Wind::West => "西",
            }
        )
    }
}

impl TryFrom<u32> for Wind {
    type Error = u32;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Wind::iter().nth(index as usize).ok_or(index)
    }
}

const HAND_NUMERALS: [&str; 10] = ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"];

/// Builds the label shown for a deal, e.g. `東一局\n0本場`.
///
/// Returns `None` when the wind or hand index is outside the known tables.
pub fn round_label(chang: u32, ju: u32, ben: u32) -> Option<String> {
    let wind = Wind::try_from(chang).ok()?;
    let numeral = HAND_NUMERALS.get(ju as usize)?;
    Some(format!("{wind}{numeral}局\n{ben}本場"))
}
