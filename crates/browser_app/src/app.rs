use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use browser_core::{update, AppState, Msg, QueryState};
use browser_engine::EngineHandle;
use browser_logging::{browser_info, browser_warn};

use crate::commands::{parse_command, Command, HELP};
use crate::config::load_config;
use crate::effects::EffectRunner;
use crate::{logging, render};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Single owner of the session state. Every message goes through
/// [`App::dispatch`], which runs the resulting effects and re-renders when
/// the state reports a visible change.
pub struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(query: QueryState, engine: EngineHandle, out: W) -> Self {
        Self {
            state: AppState::with_query(query),
            runner: EffectRunner::new(engine),
            out,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);
        if was_dirty {
            self.render()?;
        }
        Ok(())
    }

    /// Feeds every completion already reported by the engine.
    pub fn pump_engine(&mut self) -> io::Result<()> {
        for msg in self.runner.drain() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Blocks until the latest fetch has been applied or `timeout` passes.
    /// Returns whether the state settled.
    pub fn wait_idle(&mut self, timeout: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + timeout;
        while self.state.results().loading {
            let now = Instant::now();
            if now >= deadline {
                return Ok(false);
            }
            if let Some(msg) = self.runner.next_timeout(deadline - now) {
                self.dispatch(msg)?;
            }
        }
        Ok(true)
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    fn render(&mut self) -> io::Result<()> {
        let view = self.state.view();
        for line in render::render(&view) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Runs the interactive browser on stdin/stdout until `quit` or end of input.
pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd);
    logging::initialize(config.log_destination);
    browser_info!("Starting question browser against {}", config.backend_url);

    let engine = EngineHandle::new(config.fetch_settings())?;
    let mut app = App::new(config.initial_query(), engine, io::stdout());
    app.write_line(HELP)?;
    app.dispatch(Msg::SessionStarted)?;

    let lines = spawn_stdin_reader();
    loop {
        match lines.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_command(&line) {
                Ok(Command::Dispatch(msg)) => app.dispatch(msg)?,
                Ok(Command::Help) => app.write_line(HELP)?,
                Ok(Command::Quit) => break,
                Err(err) => app.write_line(&err.to_string())?,
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                // End of input: let the last query land before exiting.
                let timeout = config.fetch_settings().request_timeout;
                if !app.wait_idle(timeout)? {
                    browser_warn!("Exiting with a fetch still in flight");
                }
                break;
            }
        }
        app.pump_engine()?;
    }

    browser_info!("Question browser stopped");
    Ok(())
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    browser_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
    });
    rx
}
