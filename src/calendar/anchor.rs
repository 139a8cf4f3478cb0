use super::util::DayCell;
use super::{DateWindow, Direction, OutOfTimeError, Week};
use time::{Date, Duration, Month};

/// A window on the Monday-to-Sunday week containing a single anchor date.
/// The anchor is always the selected date, and moving it by a day recomputes
/// the whole week.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct AnchorWindow {
    // Invariant: at least six days away from either end of the calendar, so
    // that every week around it exists
    current: Date,
}

impl AnchorWindow {
    pub(crate) fn new(date: Date) -> Self {
        AnchorWindow {
            current: clamp_anchor(date),
        }
    }

    // Sunday counts as the seventh day of its week, not the first
    fn monday(&self) -> Date {
        let back = i64::from(self.current.weekday().number_days_from_monday());
        self.current
            .checked_sub(Duration::days(back))
            .expect("anchor should be clamped away from the start of time")
    }
}

impl DateWindow for AnchorWindow {
    const STEP: &'static str = "day";

    const RESETS_SESSIONS: bool = true;

    fn compute_week(&self) -> Week {
        let monday = self.monday();
        [0, 1, 2, 3, 4, 5, 6].map(|i| {
            let date = monday
                .checked_add(Duration::days(i))
                .expect("anchor should be clamped away from the end of time");
            DayCell::from_date(
                date,
                date == self.current,
                (date.year(), date.month()) == self.header(),
            )
        })
    }

    fn navigate(&mut self, direction: Direction) -> Result<(), OutOfTimeError> {
        let date = match direction {
            Direction::Previous => self.current.previous_day(),
            Direction::Next => self.current.next_day(),
        };
        self.current = date
            .filter(|&d| clamp_anchor(d) == d)
            .ok_or(OutOfTimeError)?;
        Ok(())
    }

    fn select_date(&mut self, date: Date) {
        self.current = clamp_anchor(date);
    }

    fn selected(&self) -> Date {
        self.current
    }

    fn header(&self) -> (i32, Month) {
        (self.current.year(), self.current.month())
    }

    fn jump_to(&mut self, date: Date) {
        self.select_date(date);
    }
}

fn clamp_anchor(date: Date) -> Date {
    let earliest = Date::MIN.checked_add(Duration::days(6)).unwrap_or(Date::MIN);
    let latest = Date::MAX.checked_sub(Duration::days(6)).unwrap_or(Date::MAX);
    date.clamp(earliest, latest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Weekday;

    fn dates(week: &Week) -> Vec<Date> {
        week.iter().map(|c| c.date().unwrap()).collect()
    }

    #[test]
    fn test_sunday_is_last_day_of_week() {
        let window = AnchorWindow::new(date!(2024 - 12 - 15));
        let week = window.compute_week();
        assert_eq!(week[0].date(), Some(date!(2024 - 12 - 09)));
        assert_eq!(week[0].weekday, Weekday::Monday);
        assert_eq!(week[6].date(), Some(date!(2024 - 12 - 15)));
        assert!(week[6].selected);
        assert_eq!(week.iter().filter(|c| c.selected).count(), 1);
    }

    #[test]
    fn test_monday_starts_week() {
        let window = AnchorWindow::new(date!(2024 - 12 - 16));
        let week = window.compute_week();
        assert_eq!(week[0].date(), Some(date!(2024 - 12 - 16)));
        assert!(week[0].selected);
        assert_eq!(week[6].date(), Some(date!(2024 - 12 - 22)));
    }

    #[test]
    fn test_last_of_december() {
        let window = AnchorWindow::new(date!(2024 - 12 - 31));
        let week = window.compute_week();
        assert_eq!(
            dates(&week),
            vec![
                date!(2024 - 12 - 30),
                date!(2024 - 12 - 31),
                date!(2025 - 01 - 01),
                date!(2025 - 01 - 02),
                date!(2025 - 01 - 03),
                date!(2025 - 01 - 04),
                date!(2025 - 01 - 05),
            ]
        );
        assert!(week[1].in_current_month);
        assert!(!week[2].in_current_month);
        assert_eq!(window.header(), (2024, Month::December));
    }

    #[test]
    fn test_first_of_january() {
        let window = AnchorWindow::new(date!(2025 - 01 - 01));
        let week = window.compute_week();
        assert_eq!(week[0].date(), Some(date!(2024 - 12 - 30)));
        assert_eq!(week[6].date(), Some(date!(2025 - 01 - 05)));
        assert!(!week[0].in_current_month);
        assert!(week[2].in_current_month);
        assert!(week[2].selected);
        assert_eq!(window.header(), (2025, Month::January));
    }

    #[test]
    fn test_navigate_recomputes_week() {
        let mut window = AnchorWindow::new(date!(2024 - 12 - 15));
        assert_eq!(window.navigate(Direction::Next), Ok(()));
        assert_eq!(window.selected(), date!(2024 - 12 - 16));
        assert_eq!(window.compute_week()[0].date(), Some(date!(2024 - 12 - 16)));
        assert_eq!(window.navigate(Direction::Previous), Ok(()));
        assert_eq!(window.navigate(Direction::Previous), Ok(()));
        assert_eq!(window.selected(), date!(2024 - 12 - 14));
        assert_eq!(window.compute_week()[0].date(), Some(date!(2024 - 12 - 09)));
    }

    #[test]
    fn test_leap_day() {
        let mut window = AnchorWindow::new(date!(2024 - 02 - 28));
        window.navigate(Direction::Next).unwrap();
        assert_eq!(window.selected(), date!(2024 - 02 - 29));
        window.navigate(Direction::Next).unwrap();
        assert_eq!(window.selected(), date!(2024 - 03 - 01));
        assert_eq!(window.header(), (2024, Month::March));
    }

    #[test]
    fn test_select_date() {
        let mut window = AnchorWindow::new(date!(2024 - 12 - 15));
        window.select_date(date!(2024 - 12 - 11));
        assert_eq!(window.selected(), date!(2024 - 12 - 11));
        assert!(window.compute_week()[2].selected);
    }

    #[test]
    fn test_end_of_time() {
        let mut window = AnchorWindow::new(Date::MAX);
        assert_eq!(window.selected(), date!(9999 - 12 - 25));
        assert_eq!(window.compute_week().len(), 7);
        assert_eq!(window.navigate(Direction::Next), Err(OutOfTimeError));
        assert_eq!(window.selected(), date!(9999 - 12 - 25));
        assert_eq!(window.navigate(Direction::Previous), Ok(()));
    }

    #[test]
    fn test_beginning_of_time() {
        let mut window = AnchorWindow::new(Date::MIN);
        assert_eq!(window.compute_week().len(), 7);
        assert_eq!(window.navigate(Direction::Previous), Err(OutOfTimeError));
    }
}
