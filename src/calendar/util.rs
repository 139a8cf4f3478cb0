use ratatui::{style::Style, text::Span};
use time::{Date, Month, Weekday};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) day: u8,
    pub(crate) month: Month,
    pub(crate) year: i32,
    pub(crate) weekday: Weekday,
    pub(crate) selected: bool,
    pub(crate) in_current_month: bool,
}

impl DayCell {
    pub(super) fn from_date(date: Date, selected: bool, in_current_month: bool) -> Self {
        DayCell {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            weekday: date.weekday(),
            selected,
            in_current_month,
        }
    }

    /// Returns `None` if the cell lies past either end of the supported
    /// calendar (possible only for the offset window at year ±9999)
    pub(crate) fn date(&self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, self.day).ok()
    }

    pub(crate) fn show(&self, style: Style) -> Span<'static> {
        let s = if self.selected {
            format!("[{:2}]", self.day)
        } else {
            format!(" {:2} ", self.day)
        };
        Span::styled(s, style)
    }
}

pub(crate) fn weekday_abbrev(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

pub(super) fn first_day(year: i32, month: Month) -> Option<Date> {
    Date::from_calendar_date(year, month, 1).ok()
}

pub(super) fn first_of_month(date: Date) -> Date {
    date.replace_day(1).expect("every month should have a first day")
}

/// Month and year of the month before `month` of `year`
pub(super) fn prev_month(year: i32, month: Month) -> (i32, Month) {
    if month == Month::January {
        (year - 1, Month::December)
    } else {
        (year, month.previous())
    }
}

/// Month and year of the month after `month` of `year`
pub(super) fn next_month(year: i32, month: Month) -> (i32, Month) {
    if month == Month::December {
        (year + 1, Month::January)
    } else {
        (year, month.next())
    }
}
