//! `AirlockProgram<S>` — the host-facing invocation surface.

use tracing::info;

use al_core::{AirlockConfig, Tick};

use crate::{AirlockObserver, Airlocks, DoorSource, TickReport};

/// Owns the discovery collaborator and the active [`Airlocks`], and runs one
/// tick per [`invoke`][Self::invoke].
///
/// Create via [`ProgramBuilder`][crate::ProgramBuilder].
pub struct AirlockProgram<S: DoorSource> {
    pub(crate) config:   AirlockConfig,
    pub(crate) source:   S,
    pub(crate) airlocks: Airlocks<S::Handle>,
    pub(crate) clock:    Tick,
}

impl<S: DoorSource> AirlockProgram<S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &AirlockConfig {
        &self.config
    }

    /// The tag currently in effect.
    #[inline]
    pub fn tag(&self) -> &str {
        self.airlocks.tag()
    }

    #[inline]
    pub fn airlocks(&self) -> &Airlocks<S::Handle> {
        &self.airlocks
    }

    /// The tick the next invocation will run as.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    // ── Invocation ────────────────────────────────────────────────────────

    /// Run one tick.
    ///
    /// A non-empty `argument` that differs from the active tag replaces all
    /// door state with a fresh registry under the new tag before anything
    /// else happens.  `None` or `Some("")` keeps the current tag.
    pub fn invoke<O: AirlockObserver>(&mut self, argument: Option<&str>, observer: &mut O) -> TickReport {
        let now = self.clock;
        observer.on_tick_start(now);

        let mut reset = false;
        if let Some(tag) = argument.filter(|a| !a.is_empty() && *a != self.airlocks.tag()) {
            info!(old = %self.airlocks.tag(), new = %tag, "airlock tag switched, discarding door state");
            observer.on_tag_switch(self.airlocks.tag(), tag);
            self.airlocks = Airlocks::new(tag, self.config.cooldown_ticks);
            reset = true;
        }

        let discovered = self.source.discover(self.airlocks.tag());
        let mut report = self.airlocks.run(now, discovered);
        report.reset = reset;

        for actuation in &report.actuations {
            observer.on_actuation(now, actuation);
        }
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.airlocks.registry().snapshots());
        }
        observer.on_tick_end(&report);

        self.clock.advance();
        report
    }

    /// Run `n` ticks with no argument.
    pub fn run_ticks<O: AirlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.invoke(None, observer);
        }
    }
}
