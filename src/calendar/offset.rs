use super::util::{first_day, first_of_month, next_month, prev_month, DayCell};
use super::{DateWindow, Direction, OutOfTimeError, Week};
use time::{Date, Month, Weekday};

/// A week-at-a-time window described by the day number its first cell has in
/// the current month.  Day numbers outside the current month spill over into
/// the months on either side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OffsetWindow {
    // Invariant: -6 < week_start <= number of days in the current month
    week_start: i16,
    // Invariant: always the first of a month
    month_start: Date,
    selected: Date,
}

impl OffsetWindow {
    /// Create a window showing the Sunday-start week containing `selected`
    pub(crate) fn new(selected: Date) -> Self {
        let mut this = OffsetWindow {
            week_start: 1,
            month_start: first_of_month(selected),
            selected,
        };
        this.jump_to(selected);
        this
    }

    fn cell(&self, n: i16) -> DayCell {
        let (year, month) = self.header();
        let current_len = i16::from(month.length(year));
        let (day, month, year) = if n <= 0 {
            let (py, pm) = prev_month(year, month);
            (i16::from(pm.length(py)) + n, pm, py)
        } else if n > current_len {
            let (ny, nm) = next_month(year, month);
            (n - current_len, nm, ny)
        } else {
            (n, month, year)
        };
        let day = u8::try_from(day).expect("spilled-over day number should be a valid day");
        DayCell {
            day,
            month,
            year,
            weekday: self.weekday_of(n),
            selected: self.selected.year() == year
                && self.selected.month() == month
                && self.selected.day() == day,
            in_current_month: (year, month) == self.header(),
        }
    }

    // Weekday of day number `n` of the current month, counting backwards and
    // forwards from the first
    fn weekday_of(&self, n: i16) -> Weekday {
        let shift =
            u8::try_from((n - 1).rem_euclid(7)).expect("remainder mod 7 should fit in a u8");
        self.month_start.weekday().nth_next(shift)
    }
}

impl DateWindow for OffsetWindow {
    const STEP: &'static str = "week";

    const RESETS_SESSIONS: bool = false;

    fn compute_week(&self) -> Week {
        [0, 1, 2, 3, 4, 5, 6].map(|i| self.cell(self.week_start + i))
    }

    fn navigate(&mut self, direction: Direction) -> Result<(), OutOfTimeError> {
        let (year, month) = self.header();
        match direction {
            Direction::Previous => {
                let start = self.week_start - 7;
                if start <= 0 {
                    let (py, pm) = prev_month(year, month);
                    self.month_start = first_day(py, pm).ok_or(OutOfTimeError)?;
                    self.week_start = start + i16::from(pm.length(py));
                } else {
                    self.week_start = start;
                }
            }
            Direction::Next => {
                let current_len = i16::from(month.length(year));
                let start = self.week_start + 7;
                if start > current_len {
                    let (ny, nm) = next_month(year, month);
                    self.month_start = first_day(ny, nm).ok_or(OutOfTimeError)?;
                    self.week_start = start - current_len;
                } else {
                    self.week_start = start;
                }
            }
        }
        Ok(())
    }

    // Selecting a day from a neighboring month makes that month current
    // without moving the week on screen: `week_start` is re-based into the
    // new month rather than kept as-is, which would show a different week of
    // the new month.  Selecting a day that is not on screen at all recenters
    // the window on it.
    fn select_date(&mut self, date: Date) {
        if !self
            .compute_week()
            .iter()
            .any(|cell| cell.date() == Some(date))
        {
            self.jump_to(date);
            return;
        }
        let (year, month) = self.header();
        let target = (date.year(), date.month());
        if target == prev_month(year, month) {
            let (py, pm) = target;
            self.week_start += i16::from(pm.length(py));
            self.month_start = first_of_month(date);
        } else if target == next_month(year, month) {
            self.week_start -= i16::from(month.length(year));
            self.month_start = first_of_month(date);
        }
        self.selected = date;
    }

    fn selected(&self) -> Date {
        self.selected
    }

    fn header(&self) -> (i32, Month) {
        (self.month_start.year(), self.month_start.month())
    }

    fn jump_to(&mut self, date: Date) {
        self.selected = date;
        self.month_start = first_of_month(date);
        self.week_start =
            i16::from(date.day()) - i16::from(date.weekday().number_days_from_sunday());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month::*;

    fn days(week: &Week) -> Vec<(i32, Month, u8)> {
        week.iter().map(|c| (c.year, c.month, c.day)).collect()
    }

    #[test]
    fn test_spill_into_previous_year() {
        let window = OffsetWindow {
            week_start: -3,
            month_start: date!(2024 - 01 - 01),
            selected: date!(2024 - 01 - 15),
        };
        let week = window.compute_week();
        assert_eq!(
            days(&week),
            vec![
                (2023, December, 28),
                (2023, December, 29),
                (2023, December, 30),
                (2023, December, 31),
                (2024, January, 1),
                (2024, January, 2),
                (2024, January, 3),
            ]
        );
        assert_eq!(week[0].weekday, Weekday::Thursday);
        assert_eq!(week[4].weekday, Weekday::Monday);
        assert!(!week[3].in_current_month);
        assert!(week[4].in_current_month);
        assert!(week.iter().all(|c| !c.selected));
    }

    #[test]
    fn test_new_starts_on_sunday() {
        let window = OffsetWindow::new(date!(2024 - 12 - 18));
        let week = window.compute_week();
        assert_eq!(window.week_start, 15);
        assert_eq!(week[0].weekday, Weekday::Sunday);
        assert_eq!(week[0].day, 15);
        assert_eq!(week[6].day, 21);
        let selected = week.iter().filter(|c| c.selected).collect::<Vec<_>>();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date(), Some(date!(2024 - 12 - 18)));
        assert_eq!(window.header(), (2024, December));
    }

    #[test]
    fn test_new_on_first_of_january() {
        let window = OffsetWindow::new(date!(2025 - 01 - 01));
        assert_eq!(window.week_start, -2);
        assert_eq!(
            days(&window.compute_week()),
            vec![
                (2024, December, 29),
                (2024, December, 30),
                (2024, December, 31),
                (2025, January, 1),
                (2025, January, 2),
                (2025, January, 3),
                (2025, January, 4),
            ]
        );
        assert_eq!(window.header(), (2025, January));
    }

    #[test]
    fn test_new_on_last_of_december() {
        let window = OffsetWindow::new(date!(2024 - 12 - 31));
        assert_eq!(window.week_start, 29);
        assert_eq!(
            days(&window.compute_week()),
            vec![
                (2024, December, 29),
                (2024, December, 30),
                (2024, December, 31),
                (2025, January, 1),
                (2025, January, 2),
                (2025, January, 3),
                (2025, January, 4),
            ]
        );
        assert_eq!(window.header(), (2024, December));
    }

    #[test]
    fn test_next_within_month() {
        let mut window = OffsetWindow {
            week_start: 12,
            month_start: date!(2024 - 12 - 01),
            selected: date!(2024 - 12 - 15),
        };
        assert_eq!(window.navigate(Direction::Next), Ok(()));
        assert_eq!(window.week_start, 19);
        assert_eq!(window.header(), (2024, December));
        assert_eq!(window.selected(), date!(2024 - 12 - 15));
    }

    #[test]
    fn test_next_across_year() {
        let mut window = OffsetWindow {
            week_start: 26,
            month_start: date!(2024 - 12 - 01),
            selected: date!(2024 - 12 - 15),
        };
        assert_eq!(window.navigate(Direction::Next), Ok(()));
        assert_eq!(window.week_start, 2);
        assert_eq!(window.header(), (2025, January));
        let week = window.compute_week();
        assert_eq!(week[0].date(), Some(date!(2025 - 01 - 02)));
        assert_eq!(week[6].date(), Some(date!(2025 - 01 - 08)));
    }

    #[test]
    fn test_previous_across_year() {
        let mut window = OffsetWindow::new(date!(2025 - 01 - 01));
        assert_eq!(window.navigate(Direction::Previous), Ok(()));
        assert_eq!(window.week_start, 22);
        assert_eq!(window.header(), (2024, December));
        let week = window.compute_week();
        assert_eq!(week[0].date(), Some(date!(2024 - 12 - 22)));
        assert_eq!(week[6].date(), Some(date!(2024 - 12 - 28)));
    }

    #[test]
    fn test_previous_then_next_returns_to_same_days() {
        let start = OffsetWindow::new(date!(2024 - 03 - 02));
        let mut window = start;
        for _ in 0..10 {
            window.navigate(Direction::Previous).unwrap();
        }
        assert_eq!(window.header(), (2023, December));
        for _ in 0..10 {
            window.navigate(Direction::Next).unwrap();
        }
        assert_eq!(days(&window.compute_week()), days(&start.compute_week()));
        assert_eq!(window.selected(), start.selected());
    }

    #[test]
    fn test_weeks_are_contiguous() {
        let mut window = OffsetWindow::new(date!(2023 - 11 - 16));
        let mut last = window.compute_week()[6].date().unwrap();
        for _ in 0..60 {
            window.navigate(Direction::Next).unwrap();
            let week = window.compute_week();
            assert_eq!(week[0].date(), last.next_day());
            for pair in week.windows(2) {
                assert_eq!(pair[0].date().unwrap().next_day(), pair[1].date());
            }
            last = week[6].date().unwrap();
        }
    }

    #[test]
    fn test_leap_february() {
        let mut window = OffsetWindow {
            week_start: 26,
            month_start: date!(2024 - 02 - 01),
            selected: date!(2024 - 02 - 29),
        };
        assert_eq!(
            days(&window.compute_week()),
            vec![
                (2024, February, 26),
                (2024, February, 27),
                (2024, February, 28),
                (2024, February, 29),
                (2024, March, 1),
                (2024, March, 2),
                (2024, March, 3),
            ]
        );
        assert_eq!(window.navigate(Direction::Next), Ok(()));
        assert_eq!(window.week_start, 4);
        assert_eq!(window.header(), (2024, March));
    }

    #[test]
    fn test_century_februaries() {
        let window = OffsetWindow {
            week_start: 26,
            month_start: date!(1900 - 02 - 01),
            selected: date!(1900 - 02 - 26),
        };
        assert_eq!(
            days(&window.compute_week())[2..5],
            [(1900, February, 28), (1900, March, 1), (1900, March, 2)]
        );
        let mut window = OffsetWindow {
            week_start: 26,
            month_start: date!(2000 - 02 - 01),
            selected: date!(2000 - 02 - 26),
        };
        assert_eq!(
            days(&window.compute_week())[2..5],
            [(2000, February, 28), (2000, February, 29), (2000, March, 1)]
        );
        assert_eq!(window.navigate(Direction::Next), Ok(()));
        assert_eq!(window.week_start, 4);
        assert_eq!(window.header(), (2000, March));
    }

    #[test]
    fn test_select_previous_month_cell() {
        let mut window = OffsetWindow::new(date!(2025 - 01 - 01));
        let before = days(&window.compute_week());
        window.select_date(date!(2024 - 12 - 30));
        assert_eq!(window.header(), (2024, December));
        assert_eq!(window.week_start, 29);
        assert_eq!(days(&window.compute_week()), before);
        assert_eq!(window.selected(), date!(2024 - 12 - 30));
        assert!(window.compute_week()[1].selected);
    }

    #[test]
    fn test_select_next_month_cell() {
        let mut window = OffsetWindow::new(date!(2024 - 12 - 31));
        let before = days(&window.compute_week());
        window.select_date(date!(2025 - 01 - 03));
        assert_eq!(window.header(), (2025, January));
        assert_eq!(window.week_start, -2);
        assert_eq!(days(&window.compute_week()), before);
        assert!(window.compute_week()[5].selected);
    }

    #[test]
    fn test_select_same_month_cell() {
        let mut window = OffsetWindow::new(date!(2024 - 12 - 18));
        window.select_date(date!(2024 - 12 - 20));
        assert_eq!(window.week_start, 15);
        assert_eq!(window.selected(), date!(2024 - 12 - 20));
    }

    #[test]
    fn test_select_off_screen_recenters() {
        let mut window = OffsetWindow::new(date!(2024 - 12 - 18));
        window.select_date(date!(2024 - 02 - 29));
        assert_eq!(window.header(), (2024, February));
        assert_eq!(window.week_start, 25);
        assert_eq!(window.compute_week()[0].weekday, Weekday::Sunday);
        assert_eq!(window.selected(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_end_of_time() {
        let mut window = OffsetWindow::new(date!(9999 - 12 - 31));
        let before = window;
        assert_eq!(window.navigate(Direction::Next), Err(OutOfTimeError));
        assert_eq!(window, before);
        assert_eq!(window.compute_week().len(), 7);
    }

    #[test]
    fn test_beginning_of_time() {
        let mut window = OffsetWindow {
            week_start: 1,
            month_start: Date::MIN,
            selected: Date::MIN,
        };
        let before = window;
        assert_eq!(window.navigate(Direction::Previous), Err(OutOfTimeError));
        assert_eq!(window, before);
    }
}
