//! The two-door interlock rule.

use tracing::warn;

use al_door::{Actuation, Door, DoorHandle};

/// Evaluate one pair for this tick, appending every command issued to
/// `issued`.
///
/// For each side holding a request to open, looking at the other side:
///
/// | other side             | action                          |
/// |------------------------|---------------------------------|
/// | closed, not closing    | open the requesting side        |
/// | open, not closing      | close the other side, then this |
/// | closing                | wait                            |
///
/// The outside rule runs first and the inside rule sees its effects, so when
/// both sides request in the same tick, outside wins.
pub fn check_pair<H: DoorHandle>(
    outside: &mut Door<H>,
    inside:  &mut Door<H>,
    issued:  &mut Vec<Actuation>,
) {
    guard_side(outside, inside, issued);
    guard_side(inside, outside, issued);
}

fn guard_side<H: DoorHandle>(
    requester: &mut Door<H>,
    other:     &mut Door<H>,
    issued:    &mut Vec<Actuation>,
) {
    if !requester.request_to_open() || other.is_closing() {
        return;
    }

    if other.is_open() {
        warn!(
            requester = %requester.id(),
            other = %other.id(),
            "both sides of airlock open, closing both"
        );
        issued.push(other.close());
        issued.push(requester.close());
    } else {
        issued.push(requester.open());
    }
}
