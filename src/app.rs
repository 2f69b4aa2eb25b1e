use crate::config::{resolve, Cli, Settings};
use crate::interrupt::Interrupt;
use crate::model::OrbitState;
use crate::render::Console;
use crate::sim::step;
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StopReason {
    Interrupted,
    FrameLimit,
    OutputClosed,
}

pub(crate) struct App<W: Write> {
    settings: Settings,
    console: Console<W>,
    interrupt: Interrupt,
    state: OrbitState,
    frame_limit: Option<u64>,
    quiet: bool,
}

impl<W: Write> App<W> {
    pub(crate) fn new(
        settings: Settings,
        out: W,
        interrupt: Interrupt,
        frame_limit: Option<u64>,
        quiet: bool,
    ) -> Self {
        let console = Console::new(out, settings.margin);
        Self {
            settings,
            console,
            interrupt,
            state: OrbitState::default(),
            frame_limit,
            quiet,
        }
    }

    pub(crate) fn run(&mut self) -> anyhow::Result<StopReason> {
        if !self.quiet {
            if let Some(reason) = closed(self.console.banner())? {
                return Ok(reason);
            }
        }

        let reason = self.render_loop()?;
        log::info!("stopping: {reason:?}");

        if !self.quiet && reason != StopReason::OutputClosed {
            closed(self.console.farewell())?;
        }
        Ok(reason)
    }

    fn render_loop(&mut self) -> anyhow::Result<StopReason> {
        let interval = self.settings.interval();
        let mut frames: u64 = 0;

        loop {
            if self.interrupt.is_raised() {
                return Ok(StopReason::Interrupted);
            }
            if self.frame_limit.is_some_and(|n| frames >= n) {
                return Ok(StopReason::FrameLimit);
            }

            let (next, frame) = step(self.state, &self.settings);
            self.state = next;
            log::trace!("frame {frames} angle {:.3}", self.state.angle);

            if let Some(reason) = closed(self.console.present(&frame))? {
                return Ok(reason);
            }
            frames += 1;

            // no trailing pause once the last requested frame is out
            if self.frame_limit.is_some_and(|n| frames >= n) {
                continue;
            }
            pause(interval, &self.interrupt);
        }
    }
}

/// A vanished reader ends the run like an interrupt would; other write errors propagate.
fn closed(res: io::Result<()>) -> anyhow::Result<Option<StopReason>> {
    match res {
        Ok(()) => Ok(None),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("stdout closed: {e}");
            Ok(Some(StopReason::OutputClosed))
        }
        Err(e) => Err(e).context("could not write to stdout"),
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = resolve(&cli)?;
    log::debug!("settings: {settings:?}");

    let interrupt = Interrupt::new();
    interrupt.install()?;

    let stdout = io::stdout();
    let mut app = App::new(settings, stdout.lock(), interrupt, cli.frames, cli.quiet);
    app.run()?;
    Ok(())
}

/* -----------------------------
   Tick pacing
------------------------------ */

/// Block for `target`, waking early once the interrupt is raised.
fn pause(target: Duration, interrupt: &Interrupt) {
    let end = Instant::now() + target;
    loop {
        if interrupt.is_raised() {
            break;
        }
        let t = Instant::now();
        if t >= end {
            break;
        }
        std::thread::sleep((end - t).min(Duration::from_millis(10)));
    }
}
