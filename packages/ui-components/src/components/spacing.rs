use iced::widget::{horizontal_rule, Space};
use iced::Element;

/// Vertical gap between form fields
pub fn spacing<'a, Message: 'a>(size: u16) -> Element<'a, Message> {
    Space::with_height(size).into()
}

/// Thin horizontal line between groups of fields
pub fn separator<'a, Message: 'a>() -> Element<'a, Message> {
    horizontal_rule(1).into()
}
