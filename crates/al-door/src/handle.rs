//! The host/engine boundary for one door.

use al_core::GridPos;

/// Capability the host exposes for a single physical door.
///
/// Actuation is fire-and-forget: the host gives no acknowledgement and no
/// failure signal.  Whether a command took effect is only observable through
/// later [`is_open`][Self::is_open] reads.
///
/// # Example
///
/// ```rust,ignore
/// struct BlockDoor { block: HostBlockRef }
///
/// impl DoorHandle for BlockDoor {
///     fn is_open(&self) -> bool { self.block.open() }
///     fn position(&self) -> GridPos { self.block.cell().into() }
///     fn open(&mut self) { self.block.apply_action("Open_On") }
///     fn close(&mut self) { self.block.apply_action("Open_Off") }
/// }
/// ```
pub trait DoorHandle {
    /// Current open/closed sensor reading.
    fn is_open(&self) -> bool;

    /// Fixed cell the door occupies.  Must not change over the door's life.
    fn position(&self) -> GridPos;

    /// Command the door to open.
    fn open(&mut self);

    /// Command the door to close.
    fn close(&mut self);
}
