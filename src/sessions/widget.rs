use super::store::{Progress, SessionStore, Status};
use crate::canvas::{BufferCanvas, ACS_HLINE};
use crate::theme::sessions::{
    COMPLETED_STYLE, CURSOR_STYLE, EMPTY_STYLE, FAILED_STYLE, HEADING_STYLE, REMOVE_STYLE,
    RING_EMPTY_STYLE, RING_FILLED_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Number of lines above the first session
const HEADER_LINES: u16 = 2;

/// Column at which a session's status icon is drawn
const ICON_COL: u16 = 7;

/// Column at which the remove marker of a failed session is drawn
const REMOVE_COL: u16 = 9;

const REMOVE_MARKER: &str = "[x]";

const EMPTY_TEXT: &str = "Press a to add a session";

/// Number of cells in the progress ring
pub(crate) const RING_CELLS: u16 = 20;

const RING_FILLED: char = '█';
const RING_EMPTY: char = '░';

/// Column at which the progress ring starts
const RING_COL: u16 = 9;

/// Column at which the percentage is drawn
const PERCENT_COL: u16 = RING_COL + RING_CELLS + 1;

/*
 * Sessions                          5 total
 * ─────────────────────────────────────────
 * >   1  ✓
 *     2  ✓
 *     3
 *     4  × [x]
 *     5
 */

/// The list of sessions, scrolled so that the session under the cursor is
/// visible.  Only failed sessions are drawn with a remove marker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SessionList<'a> {
    pub(crate) store: &'a SessionStore,
    pub(crate) cursor: usize,
}

impl SessionList<'_> {
    // Index of the first session drawn when `rows` sessions fit on screen
    fn first_visible(&self, rows: usize) -> usize {
        (self.cursor + 1).saturating_sub(rows)
    }
}

impl Widget for SessionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(0, 0, "Sessions", Some(HEADING_STYLE));
        canvas.rprint(0, format!("{} total", self.store.len()), None);
        canvas.hline(1, 0, ACS_HLINE, canvas.width());
        if self.store.is_empty() {
            canvas.mvprint(HEADER_LINES, 0, EMPTY_TEXT, Some(EMPTY_STYLE));
            return;
        }
        let rows = usize::from(canvas.height().saturating_sub(HEADER_LINES));
        let first = self.first_visible(rows);
        let visible = self.store.sessions().iter().enumerate().skip(first);
        for (y, (i, session)) in std::iter::zip(HEADER_LINES.., visible).take(rows) {
            let (marker, style) = if i == self.cursor {
                ('>', Some(CURSOR_STYLE))
            } else {
                (' ', None)
            };
            canvas.mvprint(y, 0, format!("{marker} {:>3}", session.id), style);
            match session.status {
                Status::Incomplete => (),
                Status::Completed => canvas.mvprint(y, ICON_COL, "✓", Some(COMPLETED_STYLE)),
                Status::Failed => {
                    canvas.mvprint(y, ICON_COL, "×", Some(FAILED_STYLE));
                    canvas.mvprint(y, REMOVE_COL, REMOVE_MARKER, Some(REMOVE_STYLE));
                }
            }
        }
    }
}

/// A single-line stand-in for a circular progress indicator: a ring of
/// `RING_CELLS` cells, filled in proportion to the completed sessions,
/// followed by the percentage
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct ProgressRing(pub(crate) Progress);

impl Widget for ProgressRing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let empty = self.0.dash_offset(RING_CELLS);
        let filled = RING_CELLS - empty;
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(0, 0, "Progress", None);
        canvas.mvprint(
            0,
            RING_COL,
            String::from(RING_FILLED).repeat(filled.into()),
            Some(RING_FILLED_STYLE),
        );
        canvas.mvprint(
            0,
            RING_COL + filled,
            String::from(RING_EMPTY).repeat(empty.into()),
            Some(RING_EMPTY_STYLE),
        );
        canvas.mvprint(0, PERCENT_COL, format!("{:>3}%", self.0.percentage), None);
    }
}
