//! station — airlock interlock demo.
//!
//! Builds a small station of tagged door panels, lets a simulated crew work
//! them by hand, and runs the interlock once per tick.  Halfway through the
//! run the host hands the program a different tag, which drops every
//! personnel door and picks up the cargo bays instead.
//!
//! Usage: `station [config.json]`.  Set `RUST_LOG=debug` to see every
//! command issued.

mod config;
mod world;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use al_control::{AirlockObserver, ProgramBuilder, TickReport};
use al_core::{SimRng, Tick};
use al_door::{Actuation, DoorSnapshot};
use al_output::{CsvWriter, OutputWriter, TraceObserver};

use config::StationConfig;
use world::{Crew, Station};

// ── Observer wrapper to count events ─────────────────────────────────────────

struct Tally<W: OutputWriter> {
    inner:         TraceObserver<W>,
    opens:         u64,
    closes:        u64,
    resets:        u64,
    snapshot_rows: u64,
    /// Ticks that ended with both doors of some pair open.
    breaches:      u64,
}

impl<W: OutputWriter> Tally<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, opens: 0, closes: 0, resets: 0, snapshot_rows: 0, breaches: 0 }
    }
}

impl<W: OutputWriter> AirlockObserver for Tally<W> {
    fn on_tag_switch(&mut self, old: &str, new: &str) {
        self.inner.on_tag_switch(old, new);
    }

    fn on_actuation(&mut self, tick: Tick, actuation: &Actuation) {
        self.inner.on_actuation(tick, actuation);
    }

    fn on_snapshot(&mut self, tick: Tick, doors: &[DoorSnapshot]) {
        self.snapshot_rows += doors.len() as u64;
        self.inner.on_snapshot(tick, doors);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.opens += report.opens() as u64;
        self.closes += report.closes() as u64;
        if report.reset {
            self.resets += 1;
        }
        self.inner.on_tick_end(report);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Configuration.
    let config = match std::env::args().nth(1) {
        Some(path) => StationConfig::load(Path::new(&path))?,
        None => StationConfig::default(),
    };
    let personnel_tag = config.interlock.default_tag.clone();
    let cargo_tag = config.switch_tag.clone().unwrap_or_else(|| "[cargo]".into());
    info!(
        seed = config.seed,
        ticks = config.total_ticks,
        airlocks = config.airlocks,
        cargo = config.cargo_airlocks,
        "starting station"
    );

    // 2. World and crew.
    let station = Station::build(config.airlocks, &personnel_tag, config.cargo_airlocks, &cargo_tag);
    println!("Station: {} door panels", station.doors().len());
    let mut root_rng = SimRng::new(config.seed);
    let mut crew = Crew::new(root_rng.child(1), config.crew_activity);

    // 3. Program.
    let mut program = ProgramBuilder::new(station).config(config.interlock.clone()).build()?;

    // 4. Output.
    std::fs::create_dir_all(&config.output_dir)?;
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = Tally::new(TraceObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    for t in 0..config.total_ticks {
        let argument = config
            .switch_tag
            .as_deref()
            .filter(|_| t == config.switch_at_tick);
        let report = program.invoke(argument, &mut obs);

        let registry = program.airlocks().registry();
        let breached = report.pairs.iter().any(|pair| {
            let open = |id| registry.get(id).is_some_and(|d| d.is_open());
            open(pair.outside) && open(pair.inside)
        });
        if breached {
            obs.breaches += 1;
        }

        crew.act(program.source());
    }
    let elapsed = t0.elapsed();

    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "trace output incomplete");
    }

    // 6. Summary.
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  crew moves          : {}", crew.moves);
    println!("  opens issued        : {}", obs.opens);
    println!("  closes issued       : {}", obs.closes);
    println!("  tag resets          : {}", obs.resets);
    println!("  ticks ending open   : {}", obs.breaches);
    println!("  door_snapshots.csv  : {} rows", obs.snapshot_rows);
    println!();

    // 7. Final door table for the active tag.
    println!("Active tag: {}", program.tag());
    println!("{:<12} {:<6} {:<8} {:<8}", "Door", "Open", "Request", "Cooldown");
    println!("{}", "-".repeat(38));
    for door in program.airlocks().registry().iter() {
        println!(
            "{:<12} {:<6} {:<8} {:<8}",
            door.id().to_string(),
            if door.is_open() { "yes" } else { "no" },
            if door.request_to_open() { "yes" } else { "no" },
            door.cooldown_ticks(),
        );
    }

    Ok(())
}
