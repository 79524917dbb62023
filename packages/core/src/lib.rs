pub mod article_state;
pub mod config;
pub mod error;
pub mod options;

pub use article_state::{ArticleState, Selection};
pub use config::{FolioConfig, WindowConfig};
pub use error::{FolioError, FolioResult};
pub use options::{
    BackgroundColor, CatalogOption, ContentWidth, FontColor, FontFamily, FontSize, Rgb, Slot,
};
