//! Shared context passed to section modules

use chrono::{DateTime, Local};

use crate::core::command::{CommandSink, DashboardCommand, NoopSink};
use crate::ui::layout::Tier;

/// Shared context available to all section modules
pub struct Context {
    /// Current layout tier, derived from the viewport width
    pub tier: Tier,

    /// Wall-clock time of the last tick
    pub now: DateTime<Local>,

    /// Receiver for mutation intents raised by sections
    pub sink: Box<dyn CommandSink>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            tier: Tier::Desktop,
            now: Local::now(),
            sink: Box::new(NoopSink),
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a mutation intent to the configured sink
    pub fn submit(&mut self, command: DashboardCommand) {
        self.sink.submit(command);
    }
}
