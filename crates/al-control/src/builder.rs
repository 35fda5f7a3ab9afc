//! Fluent builder for constructing an [`AirlockProgram`].

use al_core::{AirlockConfig, Tick};

use crate::{AirlockProgram, Airlocks, ControlError, ControlResult, DoorSource};

/// Fluent builder for [`AirlockProgram<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                          |
/// |-----------------|----------------------------------|
/// | `.config(c)`    | `AirlockConfig::default()`       |
/// | `.tag(t)`       | `config.default_tag`             |
/// | `.start_tick(t)`| `Tick::ZERO`                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut program = ProgramBuilder::new(source)
///     .config(config)
///     .tag("[lock-b]")
///     .build()?;
/// program.invoke(None, &mut NoopObserver);
/// ```
pub struct ProgramBuilder<S: DoorSource> {
    source:     S,
    config:     AirlockConfig,
    tag:        Option<String>,
    start_tick: Tick,
}

impl<S: DoorSource> ProgramBuilder<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            config:     AirlockConfig::default(),
            tag:        None,
            start_tick: Tick::ZERO,
        }
    }

    pub fn config(mut self, config: AirlockConfig) -> Self {
        self.config = config;
        self
    }

    /// Start under `tag` instead of the configured default.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate the configuration and return a ready-to-invoke program.
    pub fn build(self) -> ControlResult<AirlockProgram<S>> {
        self.config.validate()?;

        let tag = self.tag.unwrap_or_else(|| self.config.default_tag.clone());
        if tag.is_empty() {
            return Err(ControlError::EmptyTag);
        }

        Ok(AirlockProgram {
            airlocks: Airlocks::new(tag, self.config.cooldown_ticks),
            config:   self.config,
            source:   self.source,
            clock:    self.start_tick,
        })
    }
}
