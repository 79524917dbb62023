//! Article viewer hosting the presentation settings panel

use crate::article::Article;
use crate::ui::main_view;
use folio_core::{ArticleState, FolioConfig};
use folio_ui::{ArticleParamsForm, FormMessage};
use iced::{executor, Application, Command, Element, Subscription, Theme};
use tracing::{debug, info, warn};

pub struct FolioApp {
    pub config: FolioConfig,
    /// Settings currently applied to the article
    pub article_state: ArticleState,
    pub form: ArticleParamsForm,
    pub article: Article,
}

#[derive(Debug, Clone)]
pub enum Message {
    ArticleLoaded(Result<Article, String>),
    Form(FormMessage),
}

impl FolioApp {
    /// Commit a snapshot handed over by the settings panel
    pub fn set_article_state(&mut self, state: ArticleState) {
        let changed = state.diff(&self.article_state);
        info!("Article settings applied, changed slots: {:?}", changed);
        self.article_state = state;
    }
}

impl Application for FolioApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = FolioConfig;

    fn new(config: FolioConfig) -> (Self, Command<Message>) {
        info!("Initializing Folio application");

        let command = match config.article_path.clone() {
            Some(path) => Command::perform(
                async move { Article::load(path).await.map_err(|e| e.to_string()) },
                Message::ArticleLoaded,
            ),
            None => Command::none(),
        };

        (
            Self {
                article_state: config.defaults,
                form: ArticleParamsForm::new(config.defaults),
                article: Article::default(),
                config,
            },
            command,
        )
    }

    fn title(&self) -> String {
        if self.article.title.is_empty() {
            "Folio".to_string()
        } else {
            format!("Folio - {}", self.article.title)
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ArticleLoaded(Ok(article)) => {
                self.article = article;
            }
            Message::ArticleLoaded(Err(error)) => {
                warn!(
                    "Failed to load article {:?}, keeping sample: {}",
                    self.config.article_path, error
                );
            }
            Message::Form(message) => {
                if !matches!(message, FormMessage::Pointer(_)) {
                    debug!("Handling form message: {:?}", message);
                }
                if let Some(state) = self.form.update(message) {
                    self.set_article_state(state);
                }
            }
        }
        Command::none()
    }

    fn view(&self) -> Element<Message> {
        main_view(self)
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        self.form.subscription().map(Message::Form)
    }
}

impl Default for FolioApp {
    fn default() -> Self {
        let (app, _) = Self::new(FolioConfig::default());
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{FontFamily, Selection};

    #[test]
    fn test_apply_reaches_article() {
        let mut app = FolioApp::default();
        app.update(Message::Form(FormMessage::Toggle));
        app.update(Message::Form(FormMessage::Select(Selection::FontFamily(
            FontFamily::PtSerif,
        ))));
        assert_eq!(app.article_state, ArticleState::default());

        app.update(Message::Form(FormMessage::Apply));
        assert_eq!(app.article_state.font_family, FontFamily::PtSerif);
        assert!(app.form.is_open());
    }

    #[test]
    fn test_reset_uses_configured_defaults() {
        let config = FolioConfig {
            defaults: ArticleState::default().with_font_family(FontFamily::Ubuntu),
            ..FolioConfig::default()
        };
        let (mut app, _) = FolioApp::new(config);
        assert_eq!(app.article_state.font_family, FontFamily::Ubuntu);

        app.update(Message::Form(FormMessage::Select(Selection::FontFamily(
            FontFamily::DaysOne,
        ))));
        app.update(Message::Form(FormMessage::Apply));
        app.update(Message::Form(FormMessage::Reset));

        assert_eq!(app.article_state.font_family, FontFamily::Ubuntu);
        assert_eq!(app.form.draft(), &app.article_state);
    }

    #[test]
    fn test_failed_article_load_keeps_sample() {
        let mut app = FolioApp::default();
        app.update(Message::ArticleLoaded(Err("missing".to_string())));
        assert_eq!(app.article, Article::default());
        assert_eq!(app.title(), "Folio - Reading on a screen");
    }
}
