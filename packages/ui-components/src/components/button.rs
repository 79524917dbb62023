use iced::widget::{button, text};
use iced::Length;

/// Form action button ("Apply")
pub fn primary_button<'a, Message: Clone>(
    label: &'a str,
    on_press: Message,
) -> button::Button<'a, Message> {
    action_button(label, on_press).style(iced::theme::Button::Primary)
}

/// Secondary form action ("Reset")
pub fn secondary_button<'a, Message: Clone>(
    label: &'a str,
    on_press: Message,
) -> button::Button<'a, Message> {
    action_button(label, on_press).style(iced::theme::Button::Secondary)
}

fn action_button<'a, Message: Clone>(
    label: &'a str,
    on_press: Message,
) -> button::Button<'a, Message> {
    button(
        text(label.to_uppercase())
            .size(16)
            .horizontal_alignment(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fixed(140.0))
    .padding([14, 24])
    .on_press(on_press)
}
