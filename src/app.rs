use crate::calendar::{DateWindow, Direction, WeekStrip, STRIP_LINES, STRIP_WIDTH};
use crate::help::Help;
use crate::sessions::{ProgressRing, Seed, SessionList, SessionStore, Status};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::Widget,
    Terminal,
};
use std::io::{self, Write};
use time::Date;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<W> {
    window: W,
    sessions: SessionStore,
    seed: Seed,
    today: Date,
    // Index into `sessions` of the session that toggle & remove act on
    cursor: usize,
    state: AppState,
}

impl<W: DateWindow> App<W> {
    pub(crate) fn new(window: W, today: Date, seed: Seed) -> App<W> {
        App {
            window,
            sessions: SessionStore::new(seed),
            seed,
            today,
            cursor: 0,
            state: AppState::Tracking,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        io::Error: From<B::Error>,
    {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key or asked for
    // something that can't be done
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Tracking => match key {
                KeyCode::Char('h') | KeyCode::Left => self.navigate(Direction::Previous),
                KeyCode::Char('l') | KeyCode::Right => self.navigate(Direction::Next),
                KeyCode::Char(c @ '1'..='7') => self.select_nth(c),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.jump_to_today();
                    true
                }
                KeyCode::Char('j') | KeyCode::Down => self.cursor_down(),
                KeyCode::Char('k') | KeyCode::Up => self.cursor_up(),
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle(),
                KeyCode::Char('a') => {
                    self.add();
                    true
                }
                KeyCode::Char('x') | KeyCode::Delete => self.remove(),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Tracking;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        let before = self.window.selected();
        match self.window.navigate(direction) {
            Ok(()) => {
                let (year, month) = self.window.header();
                debug!(?direction, year, %month, "moved calendar one {}", W::STEP);
                self.day_changed(before);
                true
            }
            Err(e) => {
                warn!(?direction, "cannot move calendar: {e}");
                false
            }
        }
    }

    // `c` is one of '1' through '7'
    fn select_nth(&mut self, c: char) -> bool {
        let Some(date) = c
            .to_digit(10)
            .and_then(|n| usize::try_from(n).ok())
            .and_then(|n| self.window.compute_week().get(n.checked_sub(1)?).copied())
            .and_then(|cell| cell.date())
        else {
            return false;
        };
        let before = self.window.selected();
        self.window.select_date(date);
        self.day_changed(before);
        true
    }

    fn jump_to_today(&mut self) {
        let before = self.window.selected();
        self.window.jump_to(self.today);
        self.day_changed(before);
    }

    fn day_changed(&mut self, before: Date) {
        let after = self.window.selected();
        if after != before {
            debug!(%before, %after, "selected date changed");
            if W::RESETS_SESSIONS {
                self.sessions.replace(self.seed.sessions());
                self.cursor = 0;
                info!(date = %after, sessions = self.sessions.len(), "started new session list");
            }
        }
    }

    fn cursor_down(&mut self) -> bool {
        if self.cursor + 1 < self.sessions.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn cursor_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    fn toggle(&mut self) -> bool {
        let Some(id) = self.sessions.sessions().get(self.cursor).map(|s| s.id) else {
            return false;
        };
        self.sessions.toggle(id);
        if let Some(s) = self.sessions.get(id) {
            let progress = self.sessions.progress();
            debug!(
                id,
                status = ?s.status,
                completed = progress.completed,
                total = progress.total,
                "toggled session"
            );
        }
        true
    }

    fn add(&mut self) {
        let id = self.sessions.add();
        self.cursor = self.sessions.len() - 1;
        debug!(id, "added session");
    }

    // Only failed sessions offer a remove marker, so only they can be removed
    fn remove(&mut self) -> bool {
        match self.sessions.sessions().get(self.cursor) {
            Some(s) if s.status == Status::Failed => {
                let id = s.id;
                self.sessions.remove(id);
                self.cursor = self.cursor.min(self.sessions.len().saturating_sub(1));
                debug!(id, "removed session");
                true
            }
            _ => false,
        }
    }
}

impl<W: DateWindow> Widget for &App<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let [column] = Layout::horizontal([STRIP_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [strip_area, _, list_area, progress_area] = Layout::vertical([
            Constraint::Length(STRIP_LINES),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(column);
        WeekStrip(&self.window).render(strip_area, buf);
        SessionList {
            store: &self.sessions,
            cursor: self.cursor,
        }
        .render(list_area, buf);
        ProgressRing(self.sessions.progress()).render(progress_area, buf);
        if self.state == AppState::Helping {
            Help {
                step: W::STEP,
                style: BASE_STYLE,
            }
            .render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Tracking,
    Helping,
    Quitting,
}
