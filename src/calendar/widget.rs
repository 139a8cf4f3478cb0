use super::util::weekday_abbrev;
use super::DateWindow;
use crate::canvas::{BufferCanvas, ACS_HLINE};
use crate::theme::{
    calendar::{OTHER_MONTH_STYLE, SELECTED_STYLE, WEEKDAY_STYLE},
    BASE_STYLE, TITLE_STYLE,
};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Number of columns per day
pub(crate) const DAY_WIDTH: u16 = 6;

/// Width of the strip in columns
pub(crate) const STRIP_WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines taken up by the title, its rule, the weekday names, and the
/// days
pub(crate) const STRIP_LINES: u16 = 4;

/*
 * December 2024
 * ──────────────────────────────────────────
 *  Sun   Mon   Tue   Wed   Thu   Fri   Sat
 *  15    16    17   [18]   19    20    21
 */

/// The title line and the seven days currently in a window
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WeekStrip<'a, W>(pub(crate) &'a W);

impl<W: DateWindow> Widget for WeekStrip<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (year, month) = self.0.header();
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.mvprint(0, 0, format!("{month} {year}"), Some(TITLE_STYLE));
        canvas.hline(1, 0, ACS_HLINE, STRIP_WIDTH);
        let week = self.0.compute_week();
        for (i, cell) in std::iter::zip(0u16.., week) {
            let x = i * DAY_WIDTH;
            canvas.mvprint(
                2,
                x,
                format!(" {}", weekday_abbrev(cell.weekday)),
                Some(WEEKDAY_STYLE),
            );
            let style = if cell.selected {
                SELECTED_STYLE
            } else if cell.in_current_month {
                BASE_STYLE
            } else {
                OTHER_MONTH_STYLE
            };
            let s = cell.show(style);
            canvas.mvprint(3, x, s.content, Some(s.style));
        }
    }
}
