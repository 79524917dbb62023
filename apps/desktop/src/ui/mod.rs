mod article_view;
mod main;

pub use main::main_view;
