//! Round toggle button that opens and closes the side panel

use iced::widget::{button, container, text};
use iced::{Element, Length, Theme};

/// Diameter of the toggle button
pub const ARROW_BUTTON_SIZE: f32 = 48.0;

/// Arrow toggle; points left while the panel is open
pub fn arrow_button<'a, Message: Clone + 'a>(
    is_open: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let glyph = if is_open { "←" } else { "→" };

    let label = container(text(glyph).size(22))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y();

    button(label)
        .width(Length::Fixed(ARROW_BUTTON_SIZE))
        .height(Length::Fixed(ARROW_BUTTON_SIZE))
        .padding(0)
        .style(iced::theme::Button::Custom(Box::new(ArrowButtonStyle { is_open })))
        .on_press(on_press)
        .into()
}

struct ArrowButtonStyle {
    is_open: bool,
}

impl button::StyleSheet for ArrowButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        let background = if self.is_open {
            iced::Color::from_rgb8(0xFE, 0xAF, 0xE8)
        } else {
            iced::Color::BLACK
        };

        button::Appearance {
            background: Some(iced::Background::Color(background)),
            text_color: if self.is_open {
                iced::Color::BLACK
            } else {
                iced::Color::WHITE
            },
            border: iced::Border {
                color: iced::Color::TRANSPARENT,
                width: 0.0,
                radius: (ARROW_BUTTON_SIZE / 2.0).into(),
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let mut active = self.active(style);
        active.border.width = 2.0;
        active.border.color = iced::Color::from_rgb8(0xFD, 0x24, 0xAF);
        active
    }
}
