//! Article rendered with the committed presentation settings

use crate::app::Message;
use crate::article::Article;
use folio_core::{ArticleState, Rgb};
use iced::font::Weight;
use iced::widget::{container, scrollable, text, Column};
use iced::{Element, Font, Length, Theme};

fn to_color(rgb: Rgb) -> iced::Color {
    iced::Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

pub fn article_view<'a>(article: &'a Article, state: &ArticleState) -> Element<'a, Message> {
    let font = Font::with_name(state.font_family.family_name());
    let color = to_color(state.font_color.rgb());
    let size = state.font_size.pixels();

    let title: Element<'a, Message> = text(&article.title)
        .size(size * 2)
        .font(Font {
            weight: Weight::Bold,
            ..font
        })
        .style(iced::theme::Text::Color(color))
        .into();

    let body = article.paragraphs.iter().map(|paragraph| -> Element<'a, Message> {
        text(paragraph)
            .size(size)
            .line_height(1.5)
            .font(font)
            .style(iced::theme::Text::Color(color))
            .into()
    });

    let children: Vec<_> = std::iter::once(title).chain(body).collect();
    let content = Column::with_children(children)
        .spacing(size)
        .padding([48, 40])
        .max_width(f32::from(state.content_width.pixels()));

    let page = container(content).width(Length::Fill).center_x();

    container(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(PageBackground {
            color: to_color(state.background_color.rgb()),
        })))
        .into()
}

struct PageBackground {
    color: iced::Color,
}

impl container::StyleSheet for PageBackground {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(iced::Background::Color(self.color)),
            ..Default::default()
        }
    }
}
