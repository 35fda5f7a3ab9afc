//! `SimDoor` — an in-memory [`DoorHandle`] for tests and simulated hosts.
//!
//! Clones share state, so a test (or a simulated crew member) can keep one
//! clone to flip the sensor by hand while the registry holds another.

use std::cell::RefCell;
use std::rc::Rc;

use al_core::GridPos;

use crate::{Action, DoorHandle};

#[derive(Debug, Default)]
struct SimDoorState {
    open:     bool,
    jammed:   bool,
    commands: Vec<Action>,
}

/// Simulated door panel.
///
/// Commands take effect immediately unless the door is
/// [jammed][Self::set_jammed], in which case they are recorded but the
/// sensor does not move.
#[derive(Clone, Debug)]
pub struct SimDoor {
    position: GridPos,
    state:    Rc<RefCell<SimDoorState>>,
}

impl SimDoor {
    /// A closed door at `position`.
    pub fn new(position: GridPos) -> Self {
        Self {
            position,
            state: Rc::new(RefCell::new(SimDoorState::default())),
        }
    }

    /// A door at `position` whose sensor starts at `open`.
    pub fn with_open(position: GridPos, open: bool) -> Self {
        let door = Self::new(position);
        door.set_open(open);
        door
    }

    /// Move the door by hand, bypassing the command channel.
    pub fn set_open(&self, open: bool) {
        self.state.borrow_mut().open = open;
    }

    /// While jammed, commands are recorded but do not move the door.
    pub fn set_jammed(&self, jammed: bool) {
        self.state.borrow_mut().jammed = jammed;
    }

    /// Every command received so far, oldest first.
    pub fn commands(&self) -> Vec<Action> {
        self.state.borrow().commands.clone()
    }

    /// Drain the command log.
    pub fn take_commands(&self) -> Vec<Action> {
        std::mem::take(&mut self.state.borrow_mut().commands)
    }

    fn command(&self, action: Action) {
        let mut state = self.state.borrow_mut();
        state.commands.push(action);
        if !state.jammed {
            state.open = action == Action::Open;
        }
    }
}

impl DoorHandle for SimDoor {
    fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    fn position(&self) -> GridPos {
        self.position
    }

    fn open(&mut self) {
        self.command(Action::Open);
    }

    fn close(&mut self) {
        self.command(Action::Close);
    }
}
