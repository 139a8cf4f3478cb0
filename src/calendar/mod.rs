mod anchor;
mod offset;
mod util;
mod widget;
pub(crate) use self::anchor::AnchorWindow;
pub(crate) use self::offset::OffsetWindow;
use self::util::DayCell;
pub(crate) use self::widget::{WeekStrip, STRIP_LINES, STRIP_WIDTH};
use thiserror::Error;
use time::{Date, Month};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) type Week = [DayCell; DAYS_IN_WEEK];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Previous,
    Next,
}

/// A strategy for deciding which seven days are on screen and which one is
/// selected
pub(crate) trait DateWindow {
    /// Unit that `navigate()` moves by, for display in the help screen
    const STEP: &'static str;

    /// Whether moving the selection to another day starts a fresh session
    /// list
    const RESETS_SESSIONS: bool;

    fn compute_week(&self) -> Week;

    fn navigate(&mut self, direction: Direction) -> Result<(), OutOfTimeError>;

    fn select_date(&mut self, date: Date);

    fn selected(&self) -> Date;

    /// The year & month named in the title line
    fn header(&self) -> (i32, Month);

    fn jump_to(&mut self, date: Date);
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
