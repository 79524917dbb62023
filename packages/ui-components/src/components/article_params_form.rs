//! Article parameters side panel
//!
//! A collapsible form for the article's presentation settings. Edits go to
//! a local draft; "Apply" hands the draft to the host view and "Reset"
//! restores the default snapshot in both places.

use super::arrow_button::arrow_button;
use super::button::{primary_button, secondary_button};
use super::panel::{pointer_subscription, PanelGeometry, PanelVisibility, PointerEvent};
use super::radio_group::radio_group;
use super::select::select;
use super::spacing::{separator, spacing};
use super::text::heading;
use folio_core::{ArticleState, Selection, Slot};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{column, container, row, scrollable, Space};
use iced::{Element, Length, Subscription, Theme};
use iced_aw::Modal;
use tracing::debug;

const FIELD_SPACING: u16 = 50;

/// Messages from the article parameters form
#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    /// Toggle button pressed
    Toggle,
    /// A field picked a new option
    Select(Selection),
    /// Form submitted
    Apply,
    /// Form reset
    Reset,
    /// Global pointer event, delivered only while open
    Pointer(PointerEvent),
}

/// Side panel form holding a draft [`ArticleState`]
#[derive(Debug, Clone)]
pub struct ArticleParamsForm {
    draft: ArticleState,
    defaults: ArticleState,
    visibility: PanelVisibility,
    geometry: PanelGeometry,
}

impl Default for ArticleParamsForm {
    fn default() -> Self {
        Self::new(ArticleState::default())
    }
}

impl ArticleParamsForm {
    /// Closed form whose draft starts at `defaults`
    pub fn new(defaults: ArticleState) -> Self {
        Self {
            draft: defaults,
            defaults,
            visibility: PanelVisibility::new(),
            geometry: PanelGeometry::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn is_listening(&self) -> bool {
        self.visibility.is_listening()
    }

    /// Working copy edited by the fields
    pub fn draft(&self) -> &ArticleState {
        &self.draft
    }

    /// Snapshot restored by reset
    pub fn defaults(&self) -> &ArticleState {
        &self.defaults
    }

    pub fn geometry(&self) -> &PanelGeometry {
        &self.geometry
    }

    /// Handle a form message
    ///
    /// Returns the snapshot the host must apply, if any. Only `Apply` and
    /// `Reset` produce one.
    pub fn update(&mut self, message: FormMessage) -> Option<ArticleState> {
        match message {
            FormMessage::Toggle => {
                self.visibility.toggle();
                None
            }
            FormMessage::Select(selection) => {
                debug!(
                    "Draft {} set to {:?}",
                    selection.slot(),
                    selection.value()
                );
                self.draft = self.draft.with(selection);
                None
            }
            FormMessage::Apply => {
                debug!("Applying article settings: {:?}", self.draft);
                Some(self.draft)
            }
            FormMessage::Reset => {
                debug!("Resetting article settings to defaults");
                self.draft = self.defaults;
                Some(self.defaults)
            }
            FormMessage::Pointer(event) => {
                self.visibility.handle_pointer(event, &self.geometry);
                None
            }
        }
    }

    /// Pointer listener, present only while the panel is open
    pub fn subscription(&self) -> Subscription<FormMessage> {
        if self.visibility.is_listening() {
            pointer_subscription().map(FormMessage::Pointer)
        } else {
            Subscription::none()
        }
    }

    /// Lay the form over `content`
    ///
    /// The toggle column sits left of `content`. While open, the panel and
    /// its toggle are drawn on top, so `content` keeps its layout.
    pub fn view_over<'a, Message>(
        &'a self,
        content: impl Into<Element<'a, Message>>,
        on_message: fn(FormMessage) -> Message,
    ) -> Element<'a, Message>
    where
        Message: Clone + 'a,
    {
        let underlay =
            row![self.toggle().map(on_message), content.into()].height(Length::Fill);

        let overlay = self.is_open().then(|| {
            let open = row![self.panel(), self.toggle()].height(Length::Fill);
            Element::from(open).map(on_message)
        });

        Modal::new(underlay, overlay)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top)
            .into()
    }

    fn toggle(&self) -> Element<'_, FormMessage> {
        container(arrow_button(self.is_open(), FormMessage::Toggle))
            .width(Length::Fixed(self.geometry.toggle_width))
            .padding([20, 0])
            .center_x()
            .into()
    }

    fn panel(&self) -> Element<'_, FormMessage> {
        let draft = &self.draft;

        let actions = row![
            Space::with_width(Length::Fill),
            secondary_button("Reset", FormMessage::Reset),
            primary_button("Apply", FormMessage::Apply),
        ]
        .spacing(12);

        let form = column![
            heading("Set parameters", 31, Weight::ExtraBold, true),
            spacing(FIELD_SPACING),
            select(Slot::FontFamily.title(), draft.font_family, |o| {
                FormMessage::Select(Selection::FontFamily(o))
            }),
            spacing(FIELD_SPACING),
            radio_group(Slot::FontSize.title(), draft.font_size, |o| {
                FormMessage::Select(Selection::FontSize(o))
            }),
            spacing(FIELD_SPACING),
            select(Slot::FontColor.title(), draft.font_color, |o| {
                FormMessage::Select(Selection::FontColor(o))
            }),
            spacing(FIELD_SPACING),
            separator(),
            spacing(FIELD_SPACING),
            select(Slot::BackgroundColor.title(), draft.background_color, |o| {
                FormMessage::Select(Selection::BackgroundColor(o))
            }),
            spacing(FIELD_SPACING),
            select(Slot::ContentWidth.title(), draft.content_width, |o| {
                FormMessage::Select(Selection::ContentWidth(o))
            }),
            spacing(FIELD_SPACING),
            actions,
        ]
        .padding([50, 40]);

        container(scrollable(form))
            .width(Length::Fixed(self.geometry.panel_width))
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(PanelStyle)))
            .into()
    }
}

struct PanelStyle;

impl container::StyleSheet for PanelStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(iced::Background::Color(iced::Color::WHITE)),
            text_color: Some(iced::Color::BLACK),
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                offset: iced::Vector::new(4.0, 0.0),
                blur_radius: 16.0,
            },
            ..Default::default()
        }
    }
}
