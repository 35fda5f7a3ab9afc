//! Simulated station: named door panels grouped into airlocks, plus a crew
//! that works them by hand.

use al_control::DoorSource;
use al_core::{GridPos, SimRng};
use al_door::{DoorHandle, SimDoor};

/// Spacing between neighbouring airlocks along the hull.
const AIRLOCK_SPACING: i32 = 10;

/// A door panel as the host sees it: a display name and the panel itself.
pub struct NamedDoor {
    pub name:  String,
    pub panel: SimDoor,
}

/// Every door on the station, in hull order.
pub struct Station {
    doors: Vec<NamedDoor>,
}

impl Station {
    /// `personnel` airlocks tagged `personnel_tag` along y = 0, `cargo`
    /// airlocks tagged `cargo_tag` along y = 40, and one stray door carrying
    /// the personnel tag with nothing to pair with.
    pub fn build(personnel: usize, personnel_tag: &str, cargo: usize, cargo_tag: &str) -> Self {
        let mut doors = Vec::with_capacity(2 * (personnel + cargo) + 1);
        push_airlocks(&mut doors, personnel, 0, "Airlock", personnel_tag);
        push_airlocks(&mut doors, cargo, 40, "Cargo bay", cargo_tag);
        doors.push(NamedDoor {
            name:  format!("Maintenance hatch {personnel_tag}"),
            panel: SimDoor::new(GridPos::new(0, 80, 0)),
        });
        Self { doors }
    }

    pub fn doors(&self) -> &[NamedDoor] {
        &self.doors
    }
}

fn push_airlocks(doors: &mut Vec<NamedDoor>, count: usize, y: i32, label: &str, tag: &str) {
    for i in 0..count {
        let x = i as i32 * AIRLOCK_SPACING;
        doors.push(NamedDoor {
            name:  format!("{label} {i} outer {tag}"),
            panel: SimDoor::new(GridPos::new(x, y, 0)),
        });
        doors.push(NamedDoor {
            name:  format!("{label} {i} inner {tag}"),
            panel: SimDoor::new(GridPos::new(x + 1, y, 0)),
        });
    }
}

impl DoorSource for Station {
    type Handle = SimDoor;

    /// Doors whose name contains `tag`, in hull order.
    fn discover(&mut self, tag: &str) -> Vec<SimDoor> {
        self.doors
            .iter()
            .filter(|d| d.name.contains(tag))
            .map(|d| d.panel.clone())
            .collect()
    }
}

/// Crew members pushing door buttons by hand.
pub struct Crew {
    rng:      SimRng,
    activity: f64,
    /// Manual operations so far.
    pub moves: u64,
}

impl Crew {
    pub fn new(rng: SimRng, activity: f64) -> Self {
        Self { rng, activity, moves: 0 }
    }

    /// One tick of crew activity.  Each airlock-sized group of doors sees a
    /// manual operation with probability `activity`: a closed door is
    /// opened, an open one is closed behind them.
    pub fn act(&mut self, station: &Station) {
        for group in station.doors().chunks(2) {
            if !self.rng.gen_bool(self.activity) {
                continue;
            }
            let Some(door) = self.rng.choose(group) else {
                continue;
            };
            door.panel.set_open(!door.panel.is_open());
            self.moves += 1;
        }
    }
}
