//! Top-level layout: article with the settings panel sliding in over it

use super::article_view::article_view;
use crate::app::{FolioApp, Message};
use iced::widget::container;
use iced::{Element, Length};

pub fn main_view(app: &FolioApp) -> Element<'_, Message> {
    let article = article_view(&app.article, &app.article_state);

    container(app.form.view_over(article, Message::Form))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
