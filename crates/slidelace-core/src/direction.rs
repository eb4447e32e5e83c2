//! Primitive blank-tile moves.

use derive_more::Display;

/// A single primitive move of the blank tile.
///
/// A move names the neighbor the blank swaps with: [`Direction::Up`] swaps
/// the blank with the tile one row above it, and so on. Move strings use
/// the one-letter alphabet `u`, `d`, `l`, `r`.
///
/// # Examples
///
/// ```
/// use slidelace_core::Direction;
///
/// let direction = Direction::from_char('u');
/// assert_eq!(direction, Direction::Up);
/// assert_eq!(direction.opposite(), Direction::Down);
/// assert_eq!(direction.to_string(), "u");
/// ```
// `Default` is required by `tinyvec::ArrayVec` element types.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    /// Swap the blank with the tile one row above.
    #[default]
    #[display("u")]
    Up,
    /// Swap the blank with the tile one row below.
    #[display("d")]
    Down,
    /// Swap the blank with the tile one column to the left.
    #[display("l")]
    Left,
    /// Swap the blank with the tile one column to the right.
    #[display("r")]
    Right,
}

impl Direction {
    /// All directions, in `u`, `d`, `l`, `r` order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Creates a direction from its move character.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is not one of `u`, `d`, `l`, `r`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slidelace_core::Direction;
    ///
    /// assert_eq!(Direction::from_char('d'), Direction::Down);
    /// ```
    ///
    /// ```should_panic
    /// use slidelace_core::Direction;
    ///
    /// // This will panic
    /// let _ = Direction::from_char('x');
    /// ```
    #[must_use]
    pub fn from_char(symbol: char) -> Self {
        match Self::try_from_char(symbol) {
            Some(direction) => direction,
            None => panic!("invalid move symbol: {symbol:?}"),
        }
    }

    /// Creates a direction from its move character, or `None` if the
    /// character is outside the move alphabet.
    #[must_use]
    pub const fn try_from_char(symbol: char) -> Option<Self> {
        match symbol {
            'u' => Some(Self::Up),
            'd' => Some(Self::Down),
            'l' => Some(Self::Left),
            'r' => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the move character for this direction.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Up => 'u',
            Self::Down => 'd',
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }

    /// Returns the direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
