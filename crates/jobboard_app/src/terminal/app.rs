use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use board_logging::{board_debug, board_info};
use chrono::Utc;
use jobboard_core::options::options_for;
use jobboard_core::{update, AppState, FetchStatus, Msg};

use super::config::AppConfig;
use super::effects::{EffectRunner, Notice};
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::{render, render_options};

/// Everything the dispatch loop reacts to, from stdin or from the engine.
pub enum Inbox {
    Msg(Msg),
    Line(String),
    InputClosed,
}

pub fn run_app(config: &AppConfig, mount_params: Option<String>) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<Inbox>();
    let runner = EffectRunner::new(config.fetch_settings(), tx.clone())?;

    let mut app = App::new(AppState::with_page_size(config.page_size), runner, io::stdout());
    board_info!("starting against {}", config.base_url);
    writeln!(app.out, "{HELP}")?;

    // Mount is queued ahead of any stdin line or end of input.
    let _ = tx.send(Inbox::Msg(Msg::Mounted {
        params: mount_params,
    }));
    spawn_stdin_reader(tx)?;

    while let Ok(item) = rx.recv() {
        if !app.step(item)? {
            break;
        }
    }
    board_info!("exiting");
    Ok(())
}

fn spawn_stdin_reader(tx: mpsc::Sender<Inbox>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(Inbox::Line(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(Inbox::InputClosed);
        })?;
    Ok(())
}

struct App<W: Write> {
    state: AppState,
    runner: EffectRunner,
    out: W,
    input_closed: bool,
}

impl<W: Write> App<W> {
    fn new(state: AppState, runner: EffectRunner, out: W) -> Self {
        Self {
            state,
            runner,
            out,
            input_closed: false,
        }
    }

    /// Handles one inbox item. Returns false once the loop should stop.
    ///
    /// After stdin closes the loop keeps draining until the pending fetch
    /// has completed, so piped input still sees its results.
    fn step(&mut self, item: Inbox) -> io::Result<bool> {
        match item {
            Inbox::Msg(msg) => self.dispatch_msg(msg)?,
            Inbox::Line(line) => {
                if !self.handle_line(&line)? {
                    return Ok(false);
                }
            }
            Inbox::InputClosed => {
                board_debug!("input closed");
                self.input_closed = true;
            }
        }
        Ok(!self.input_closed || self.awaiting_fetch())
    }

    fn awaiting_fetch(&self) -> bool {
        *self.state.fetch_status() == FetchStatus::Loading
    }

    /// Returns false when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        match parse_command(line) {
            Ok(None) => {}
            Ok(Some(Command::Dispatch(msg))) => self.dispatch_msg(msg)?,
            Ok(Some(Command::ToggleLocal)) => {
                let on = !self.state.filters().local();
                self.dispatch_msg(Msg::LocalToggled(on))?;
            }
            Ok(Some(Command::ShowOptions(key))) => {
                let current = self.state.filters().get(key);
                write!(self.out, "{}", render_options(key, current, &options_for(key)))?;
            }
            Ok(Some(Command::Help)) => writeln!(self.out, "{HELP}")?,
            Ok(Some(Command::Quit)) => return Ok(false),
            Err(err) => writeln!(self.out, "! {err}")?,
        }
        Ok(true)
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        board_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        for notice in self.runner.run(effects) {
            self.show_notice(&notice)?;
        }
        if let Some(view) = view {
            write!(self.out, "\n{}", render(&view, Utc::now()))?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn show_notice(&mut self, notice: &Notice) -> io::Result<()> {
        match notice {
            // OSC 0 sets the terminal window title.
            Notice::Title(title) => write!(self.out, "\x1b]0;{title}\x07")?,
            Notice::Scrolled { top } => {
                writeln!(self.out, "(quick apply: jumped to offset {top})")?
            }
            Notice::OpenExternally(link) => writeln!(self.out, "Open in your browser: {link}")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use jobboard_core::{Effect, JobsPage};
    use jobboard_engine::FetchSettings;

    use super::*;

    fn loading_app() -> (App<Vec<u8>>, u64) {
        let (state, effects) = update(AppState::new(), Msg::Mounted { params: None });
        let request_id = effects
            .iter()
            .find_map(|effect| match effect {
                Effect::FetchJobs { request_id, .. } => Some(*request_id),
                _ => None,
            })
            .expect("mount fetches");
        let (tx, _rx) = mpsc::channel();
        let runner = EffectRunner::new(FetchSettings::default(), tx).expect("runner");
        (App::new(state, runner, Vec::new()), request_id)
    }

    #[test]
    fn completion_after_input_closed_is_rendered() {
        let (mut app, request_id) = loading_app();

        assert!(app.step(Inbox::InputClosed).unwrap());
        let keep_running = app
            .step(Inbox::Msg(Msg::FetchSucceeded {
                request_id,
                page: JobsPage {
                    jobs: Vec::new(),
                    total: 0,
                },
            }))
            .unwrap();

        assert!(!keep_running);
        let out = String::from_utf8(app.out).unwrap();
        assert!(out.contains("No Jobs Found"), "{out}");
    }

    #[test]
    fn stale_completion_keeps_waiting() {
        let (mut app, request_id) = loading_app();

        assert!(app.step(Inbox::InputClosed).unwrap());
        let keep_running = app
            .step(Inbox::Msg(Msg::FetchFailed {
                request_id: request_id + 1,
                reason: "cancelled".to_string(),
            }))
            .unwrap();
        assert!(keep_running);
    }

    #[test]
    fn quit_stops_while_loading() {
        let (mut app, _) = loading_app();
        assert!(!app.step(Inbox::Line("quit".to_string())).unwrap());
    }
}
