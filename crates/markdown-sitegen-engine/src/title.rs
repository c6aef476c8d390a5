use crate::parsing::blocks::kinds::Heading;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("No level 1 heading found")]
    MissingTitle,
}

/// Returns the text of the first `# ` line in the document, trimmed.
///
/// Only level 1 headings count; `## Sub` is skipped.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .find(|line| Heading::level(line) == Some(1))
        .map(|line| Heading::content(line).to_string())
        .ok_or(TitleError::MissingTitle)
}
