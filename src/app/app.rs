use std::io;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::Result;
use ratatui::crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, CrosstermBackend},
    style::Stylize,
    text::Line,
    widgets::{Block, BorderType, Borders},
};
use ratatui_macros::span;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_textarea::{Input, Key};

use crate::config::Configuration;
use crate::config::constants::{TASK_PANEL_MAX_ROWS, TASK_PANEL_WIDTH};
use crate::fetch::task_path;
use crate::models::{Action, Event, SessionSnapshot};

use super::services::{EventService, TaskService};
use super::ui::{AskActions, InputBox, TaskPanel};

#[derive(Default)]
pub struct InitProps {
    pub message_id: String,
    pub actions: Vec<Action>,
}

pub struct App<'a> {
    event_tx: mpsc::UnboundedSender<Event>,
    events: &'a mut EventService,

    session: SessionSnapshot,
    input: InputBox<'a>,
    ask: AskActions,
    task_panel: TaskPanel,

    tasks: TaskService,
    compact_width: u16,

    cancel_token: CancellationToken,
}

impl<'a> App<'a> {
    pub fn new(
        config: &Configuration,
        events: &'a mut EventService,
        tasks: TaskService,
        cancel_token: CancellationToken,
        init_props: InitProps,
    ) -> App<'a> {
        let event_tx = events.event_tx();

        let mut input = InputBox::default().with_max_rows(config.ui.max_input_rows);
        let submit_tx = event_tx.clone();
        input.set_on_enter(Box::new(move |text| {
            let _ = submit_tx.send(Event::InputSubmitted(text));
        }));

        App {
            event_tx,
            events,
            session: SessionSnapshot::default(),
            input,
            ask: AskActions::new(init_props.message_id, init_props.actions),
            task_panel: TaskPanel::default(),
            tasks,
            compact_width: config.ui.compact_width,
            cancel_token,
        }
    }

    /// Handle for transports to push session updates into the UI loop.
    pub fn event_tx(&self) -> mpsc::UnboundedSender<Event> {
        self.event_tx.clone()
    }

    pub async fn run(&mut self) -> Result<()> {
        let stdout = io::stdout();
        let mut stdout = stdout.lock();

        enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;

        let term_backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(term_backend)?;
        let result = self.start_loop(&mut terminal).await;

        self.cancel_token.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn start_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            match self.events.next().await {
                Event::Quit => break,
                Event::SessionUpdate(snapshot) => self.apply_session(snapshot).await,
                Event::TaskFetchStarted(path) => self.task_panel.on_fetch_started(&path),
                Event::TaskFetchFinished { path, result } => {
                    self.task_panel.on_fetch_finished(&path, &result)
                }
                Event::InputSubmitted(text) => {
                    log::info!("input submitted ({} chars)", text.len());
                    self.input.set_value("");
                }
                Event::KeyboardEnter => {
                    if self.ask.showing(&self.session) {
                        self.ask.choose(&self.session);
                    } else {
                        self.input.handle_event(&Event::KeyboardEnter);
                    }
                }
                Event::KeyboardTab => {
                    if self.ask.showing(&self.session) {
                        self.ask.focus_next(&self.session);
                    } else {
                        self.input.handle_event(&Event::KeyboardCharInput(Input {
                            key: Key::Tab,
                            ..Default::default()
                        }));
                    }
                }
                Event::KeyboardBackTab => {
                    if self.ask.showing(&self.session) {
                        self.ask.focus_prev(&self.session);
                    }
                }
                Event::UiScrollUp => self.task_panel.scroll_up(),
                Event::UiScrollDown => self.task_panel.scroll_down(),
                event @ (Event::KeyboardCharInput(_)
                | Event::KeyboardNewLine
                | Event::KeyboardPaste(_)) => self.input.handle_event(&event),
                _ => {}
            }
        }
        Ok(())
    }

    /// Adopt a fresh session snapshot and follow its latest task list.
    async fn apply_session(&mut self, snapshot: SessionSnapshot) {
        self.session = snapshot;

        let path = self
            .session
            .latest_tasklist()
            .and_then(|tasklist| task_path(&tasklist.url));

        if path.as_deref() != self.task_panel.path() {
            let cached = match &path {
                Some(p) => self.tasks.cache().peek(p).await,
                None => None,
            };
            self.task_panel.set_path(path.clone(), cached);
            if let Some(path) = path {
                self.tasks.spawn_fetch(path);
            }
        }
    }

    fn render(&mut self, f: &mut Frame<'_>) {
        let area = f.area();
        let compact = area.width < self.compact_width;
        let input_height = self.input.height();
        let ask_height = self.ask.height(&self.session);

        if compact {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(self.task_panel.compact_height()),
                    Constraint::Min(1),
                    Constraint::Length(ask_height),
                    Constraint::Length(input_height),
                ])
                .split(area);

            self.task_panel.render(f, layout[0], true);
            render_conversation(f, layout[1]);
            self.ask.render(f, layout[2], &self.session);
            self.input.render(f, layout[3]);
            return;
        }

        let panel_width = if self.task_panel.visible() {
            TASK_PANEL_WIDTH
        } else {
            0
        };
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Min(1), Constraint::Length(panel_width)])
            .split(area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(1),
                Constraint::Length(ask_height),
                Constraint::Length(input_height),
            ])
            .split(columns[0]);

        render_conversation(f, rows[0]);
        self.ask.render(f, rows[1], &self.session);
        self.input.render(f, rows[2]);

        if self.task_panel.visible() {
            let panel_area = Rect {
                height: columns[1].height.min(TASK_PANEL_MAX_ROWS + 2),
                ..columns[1]
            };
            self.task_panel.render(f, panel_area, false);
        }
    }
}

// The message history itself belongs to the embedding application; this
// shell only frames the area it would occupy.
fn render_conversation(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Line::from(" Conversation ").bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Line::from(span!("Waiting for the session to produce messages...").dim()),
        Rect {
            height: inner.height.min(1),
            ..inner
        },
    );
}
