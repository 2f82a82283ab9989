// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation directions and the boundary conversions between them.

/// Direction of a focus or touch search.
///
/// Two families exist and are never mixed in one call: the absolute directions
/// ([`AbsoluteDirection`]) drive geometric search, and the relative directions
/// ([`RelativeDirection`]) drive reading-order traversal. Use [`Direction::kind`]
/// to split a value into its family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller x.
    Left,
    /// Towards smaller y.
    Up,
    /// Towards larger x.
    Right,
    /// Towards larger y.
    Down,
    /// Next element in traversal order (for example, Tab).
    Forward,
    /// Previous element in traversal order (for example, Shift+Tab).
    Backward,
}

/// The geometric directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AbsoluteDirection {
    /// Towards smaller x.
    Left,
    /// Towards smaller y.
    Up,
    /// Towards larger x.
    Right,
    /// Towards larger y.
    Down,
}

/// The traversal-order directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RelativeDirection {
    /// Next element in traversal order.
    Forward,
    /// Previous element in traversal order.
    Backward,
}

/// A [`Direction`] split into its family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DirectionKind {
    /// Left, Up, Right or Down.
    Absolute(AbsoluteDirection),
    /// Forward or Backward.
    Relative(RelativeDirection),
}

/// Contract violations at the [`Direction`] boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DirectionError {
    /// A raw direction code that names no direction.
    #[error("unknown focus direction code {0}")]
    UnknownCode(u32),
    /// A relative direction was passed where only Left, Up, Right or Down are valid.
    #[error("direction {0:?} is not one of left, up, right, down")]
    NotAbsolute(Direction),
    /// An absolute direction was passed where only Forward or Backward are valid.
    #[error("direction {0:?} is not forward or backward")]
    NotRelative(Direction),
}

impl Direction {
    /// Raw code for [`Direction::Backward`].
    pub const CODE_BACKWARD: u32 = 0x0000_0001;
    /// Raw code for [`Direction::Forward`].
    pub const CODE_FORWARD: u32 = 0x0000_0002;
    /// Raw code for [`Direction::Left`].
    pub const CODE_LEFT: u32 = 0x0000_0011;
    /// Raw code for [`Direction::Up`].
    pub const CODE_UP: u32 = 0x0000_0021;
    /// Raw code for [`Direction::Right`].
    pub const CODE_RIGHT: u32 = 0x0000_0042;
    /// Raw code for [`Direction::Down`].
    pub const CODE_DOWN: u32 = 0x0000_0082;

    /// Split into the absolute or relative family.
    pub const fn kind(self) -> DirectionKind {
        match self {
            Self::Left => DirectionKind::Absolute(AbsoluteDirection::Left),
            Self::Up => DirectionKind::Absolute(AbsoluteDirection::Up),
            Self::Right => DirectionKind::Absolute(AbsoluteDirection::Right),
            Self::Down => DirectionKind::Absolute(AbsoluteDirection::Down),
            Self::Forward => DirectionKind::Relative(RelativeDirection::Forward),
            Self::Backward => DirectionKind::Relative(RelativeDirection::Backward),
        }
    }

    /// Whether stepping in this direction moves towards later elements.
    ///
    /// Cluster traversal treats Right and Down like Forward, and Left and Up like
    /// Backward.
    pub const fn advances(self) -> bool {
        match self {
            Self::Forward | Self::Right | Self::Down => true,
            Self::Backward | Self::Left | Self::Up => false,
        }
    }

    /// The raw code of this direction.
    pub const fn code(self) -> u32 {
        match self {
            Self::Left => Self::CODE_LEFT,
            Self::Up => Self::CODE_UP,
            Self::Right => Self::CODE_RIGHT,
            Self::Down => Self::CODE_DOWN,
            Self::Forward => Self::CODE_FORWARD,
            Self::Backward => Self::CODE_BACKWARD,
        }
    }
}

impl TryFrom<u32> for Direction {
    type Error = DirectionError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            Self::CODE_LEFT => Ok(Self::Left),
            Self::CODE_UP => Ok(Self::Up),
            Self::CODE_RIGHT => Ok(Self::Right),
            Self::CODE_DOWN => Ok(Self::Down),
            Self::CODE_FORWARD => Ok(Self::Forward),
            Self::CODE_BACKWARD => Ok(Self::Backward),
            other => Err(DirectionError::UnknownCode(other)),
        }
    }
}

impl AbsoluteDirection {
    /// All four directions, in `Left, Up, Right, Down` order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Whether the major axis is horizontal.
    pub const fn is_horizontal(self) -> bool {
        match self {
            Self::Left | Self::Right => true,
            Self::Up | Self::Down => false,
        }
    }
}

impl RelativeDirection {
    /// Map to the absolute direction it reads as on screen.
    ///
    /// Forward reads as Right in left-to-right layouts and as Left in mirrored
    /// ones. This mapping belongs at the caller boundary; the search itself
    /// never mixes the two families.
    pub const fn to_absolute(self, mirrored: bool) -> AbsoluteDirection {
        match (self, mirrored) {
            (Self::Forward, false) | (Self::Backward, true) => AbsoluteDirection::Right,
            (Self::Forward, true) | (Self::Backward, false) => AbsoluteDirection::Left,
        }
    }
}

impl From<AbsoluteDirection> for Direction {
    fn from(direction: AbsoluteDirection) -> Self {
        match direction {
            AbsoluteDirection::Left => Self::Left,
            AbsoluteDirection::Up => Self::Up,
            AbsoluteDirection::Right => Self::Right,
            AbsoluteDirection::Down => Self::Down,
        }
    }
}

impl From<RelativeDirection> for Direction {
    fn from(direction: RelativeDirection) -> Self {
        match direction {
            RelativeDirection::Forward => Self::Forward,
            RelativeDirection::Backward => Self::Backward,
        }
    }
}

impl TryFrom<Direction> for AbsoluteDirection {
    type Error = DirectionError;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction.kind() {
            DirectionKind::Absolute(absolute) => Ok(absolute),
            DirectionKind::Relative(_) => Err(DirectionError::NotAbsolute(direction)),
        }
    }
}

impl TryFrom<Direction> for RelativeDirection {
    type Error = DirectionError;

    fn try_from(direction: Direction) -> Result<Self, Self::Error> {
        match direction.kind() {
            DirectionKind::Relative(relative) => Ok(relative),
            DirectionKind::Absolute(_) => Err(DirectionError::NotRelative(direction)),
        }
    }
}
