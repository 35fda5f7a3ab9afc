//! Commands the interlock issues to doors.

use std::fmt;

use al_core::DoorId;

/// An actuation command.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Open,
    Close,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Open  => f.write_str("open"),
            Action::Close => f.write_str("close"),
        }
    }
}

/// A command that was issued to a specific door.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Actuation {
    pub door:   DoorId,
    pub action: Action,
}

impl Actuation {
    #[inline]
    pub fn open(door: DoorId) -> Self {
        Self { door, action: Action::Open }
    }

    #[inline]
    pub fn close(door: DoorId) -> Self {
        Self { door, action: Action::Close }
    }
}

impl fmt::Display for Actuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.door)
    }
}
