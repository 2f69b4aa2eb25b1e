use anyhow::{Context, Result};
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Raised once by Ctrl+C (or SIGTERM); read by the render loop between ticks.
#[derive(Clone, Debug, Default)]
pub(crate) struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Route SIGINT and SIGTERM to this flag instead of killing the process.
    pub(crate) fn install(&self) -> Result<()> {
        for sig in [SIGINT, SIGTERM] {
            signal_hook::flag::register(sig, Arc::clone(&self.flag))
                .with_context(|| format!("could not register handler for signal {sig}"))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn raise(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub(crate) fn is_raised(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
