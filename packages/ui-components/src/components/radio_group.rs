//! Radio group bound to an option catalog

use super::text::field_title;
use folio_core::CatalogOption;
use iced::widget::{column, radio, Row};
use iced::{Alignment, Element};

/// Titled row of radio buttons, one per catalog option
pub fn radio_group<'a, T, Message>(
    title: &str,
    selected: T,
    on_change: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: CatalogOption,
    Message: Clone + 'a,
{
    let buttons: Vec<Element<'a, Message>> = T::catalog()
        .iter()
        .map(|option| {
            radio(option.label(), *option, Some(selected), |value| on_change(value))
                .size(18.0)
                .text_size(16.0)
                .into()
        })
        .collect();

    column![
        field_title(title),
        Row::with_children(buttons)
            .spacing(24)
            .align_items(Alignment::Center),
    ]
    .spacing(12)
    .into()
}
