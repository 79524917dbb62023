//! Labeled text leaves

use iced::font::{Font, Weight};
use iced::widget::text;
use iced::Element;

const TITLE_COLOR: iced::Color = iced::Color::BLACK;

/// Heading text, e.g. the panel title
pub fn heading<'a, Message: 'a>(
    content: &str,
    size: u16,
    weight: Weight,
    uppercase: bool,
) -> Element<'a, Message> {
    let content = if uppercase {
        content.to_uppercase()
    } else {
        content.to_string()
    };

    text(content)
        .size(size)
        .font(Font {
            weight,
            ..Font::DEFAULT
        })
        .style(iced::theme::Text::Color(TITLE_COLOR))
        .into()
}

/// Small uppercase caption above a form control
pub fn field_title<'a, Message: 'a>(title: &str) -> Element<'a, Message> {
    heading(title, 12, Weight::Bold, true)
}
