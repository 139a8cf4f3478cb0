use ratatui::{
    buffer::Buffer,
    layout::{Flex, HorizontalAlignment, Layout, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

/// Overlay listing the key bindings.  `step` is what the left & right keys
/// move the calendar by ("week" or "day").
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Help {
    pub(crate) step: &'static str,
    pub(crate) style: Style,
}

impl Help {
    fn lines(&self) -> Vec<String> {
        vec![
            format!("h, LEFT         Previous {}", self.step),
            format!("l, RIGHT        Next {}", self.step),
            String::from("1-7             Select day"),
            String::from("0, HOME         Jump to today"),
            String::from("k, UP           Previous session"),
            String::from("j, DOWN         Next session"),
            String::from("SPACE, ENTER    Toggle session"),
            String::from("a               Add session"),
            String::from("x, DELETE       Remove failed session"),
            String::from("?               Show this help"),
            String::from("q, ESC          Quit"),
            String::new(),
            String::from("Press the Any Key to dismiss."),
        ]
    }
}

impl Widget for Help {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(self.lines().into_iter().map(Line::raw).collect::<Vec<_>>());
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height)
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .min(area.width)
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Commands ")
                    .title_alignment(HorizontalAlignment::Center),
            )
            .style(self.style);
        let [help_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [help_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(help_area);
        let outer_area = Rect {
            x: help_area.x.saturating_sub(1),
            y: help_area.y,
            width: help_area.width.saturating_add(2),
            height: help_area.height,
        }
        .intersection(area);
        Clear.render(outer_area, buf);
        Block::new().style(self.style).render(outer_area, buf);
        para.render(help_area, buf);
    }
}
