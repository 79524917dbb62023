//! Article content shown by the viewer

use folio_core::FolioResult;
use std::path::Path;
use tracing::info;

const SAMPLE_ARTICLE: &str = "\
Reading on a screen

Long-form text asks more of a screen than a headline does. Line length, the \
weight of the letters and the contrast between ink and page decide whether a \
reader gets through the third paragraph or drifts off after the first.

Typographers have argued about these details for centuries. A line of about \
sixty to seventy characters is usually easiest to follow; much wider and the \
eye loses its place on the way back to the left margin, much narrower and the \
rhythm of reading turns choppy.

Colour matters as much as measure. Pure black on pure white is crisp but can \
feel harsh in a dark room, while low-contrast pairings look elegant and tire \
the eyes within minutes. There is no single right answer, which is why this \
viewer lets you choose.

Open the panel on the left, try a different typeface or background, and press \
Apply. Reset brings everything back to where it started.";

/// A titled sequence of paragraphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Default for Article {
    fn default() -> Self {
        Self::parse(SAMPLE_ARTICLE)
    }
}

impl Article {
    /// Split plain text into a title (first non-empty line) and paragraphs
    /// separated by blank lines
    pub fn parse(source: &str) -> Self {
        let mut blocks = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in source.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !current.is_empty() {
                    blocks.push(join_words(&current));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            blocks.push(join_words(&current));
        }

        let mut blocks = blocks.into_iter();
        let title = blocks.next().unwrap_or_default();
        Self {
            title,
            paragraphs: blocks.collect(),
        }
    }

    /// Read and parse an article file
    pub async fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let source = tokio::fs::read_to_string(path).await?;
        let article = Self::parse(&source);
        info!(
            "Loaded article {:?} ({} paragraphs) from {:?}",
            article.title,
            article.paragraphs.len(),
            path
        );
        Ok(article)
    }
}

/// Collapse a block of lines into one whitespace-normalized paragraph
fn join_words(lines: &[&str]) -> String {
    lines
        .iter()
        .flat_map(|line| line.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_article() {
        let article = Article::default();
        assert_eq!(article.title, "Reading on a screen");
        assert_eq!(article.paragraphs.len(), 4);
        assert!(article.paragraphs[0].starts_with("Long-form text"));
    }

    #[test]
    fn test_parse_collapses_whitespace_and_blank_blocks() {
        let article = Article::parse("\n\nTitle\n\n\n\nfirst\nline   two\n\n  \n\nsecond");
        assert_eq!(article.title, "Title");
        assert_eq!(article.paragraphs, vec!["first line two", "second"]);
    }

    #[test]
    fn test_parse_whitespace_only_separator_lines() {
        let article = Article::parse("Title\n \t\nfirst\n  \nsecond\r\n\r\nthird");
        assert_eq!(article.title, "Title");
        assert_eq!(article.paragraphs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_parse_empty() {
        let article = Article::parse("");
        assert!(article.title.is_empty());
        assert!(article.paragraphs.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = Article::load("/nonexistent/folio/article.txt").await;
        assert!(matches!(result, Err(folio_core::FolioError::Io(_))));
    }
}
