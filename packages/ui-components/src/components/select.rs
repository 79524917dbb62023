//! Single-select field bound to an option catalog

use super::text::field_title;
use folio_core::CatalogOption;
use iced::widget::{column, pick_list};
use iced::{Element, Length};

/// Titled dropdown over every option of `T`'s catalog
///
/// Only catalog entries can be picked, so the emitted value is always valid.
pub fn select<'a, T, Message>(
    title: &str,
    selected: T,
    on_change: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: CatalogOption,
    Message: Clone + 'a,
{
    let list = pick_list(T::catalog().to_vec(), Some(selected), on_change)
        .width(Length::Fill)
        .padding([10, 14])
        .text_size(16.0);

    column![field_title(title), list].spacing(12).into()
}
