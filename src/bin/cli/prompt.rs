use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearchStatus, PromptViMode};

/// Shows the book the page is currently on.
#[derive(Default)]
pub struct BookviewPrompt {
    pub book: Option<String>,
}

impl Prompt for BookviewPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        match &self.book {
            Some(book) => Cow::Owned(format!("bookview [{book}] ")),
            None => Cow::Borrowed("bookview "),
        }
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, prompt_mode: PromptEditMode) -> Cow<str> {
        match prompt_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => "> ".into(),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                PromptViMode::Normal => "> ".into(),
                PromptViMode::Insert => ": ".into(),
            },
            PromptEditMode::Custom(str) => format!("({})", str).into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed(":> ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: reedline::PromptHistorySearch,
    ) -> Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
