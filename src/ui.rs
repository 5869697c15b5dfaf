use std::fmt;

use colored::Colorize;
use inquire::{InquireError, Select, Text};

use crate::error::AppError;

/// A selectable item offered to the user
pub struct Choice {
    /// Text shown for the item
    pub label: String,
    /// Optional secondary text shown alongside the label
    pub description: Option<String>,
}

impl Choice {
    pub fn new(label: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(label: impl Into<String>, description: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({description})", self.label),
            None => write!(f, "{}", self.label),
        }
    }
}

/// Styling for the mode indicator line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorStyle {
    Neutral,
    Warning,
}

/// Interactive surface the commit workflow drives.
///
/// Prompt methods return `Ok(None)` when the user dismisses the prompt;
/// dismissal is a normal outcome, not an error.
pub trait Ui {
    fn prompt_text(&mut self, prompt: &str, initial: Option<&str>)
        -> Result<Option<String>, AppError>;
    fn prompt_choice(&mut self, prompt: &str, items: Vec<Choice>)
        -> Result<Option<usize>, AppError>;
    fn notify_info(&mut self, text: &str);
    fn notify_error(&mut self, text: &str);
    fn set_indicator(&mut self, text: &str, style: IndicatorStyle);
}

/// Terminal implementation backed by `inquire` prompts
pub struct InquireUi;

impl Ui for InquireUi {
    fn prompt_text(
        &mut self,
        prompt: &str,
        initial: Option<&str>,
    ) -> Result<Option<String>, AppError> {
        let message = format!("{}", prompt.blue());
        let mut text = Text::new(&message);
        if let Some(initial) = initial {
            text = text.with_initial_value(initial);
        }
        Ok(text.prompt_skippable()?)
    }

    fn prompt_choice(
        &mut self,
        prompt: &str,
        items: Vec<Choice>,
    ) -> Result<Option<usize>, AppError> {
        let message = format!("{}", prompt.blue());
        let selection = match Select::new(&message, items).raw_prompt() {
            Ok(answer) => Some(answer),
            Err(InquireError::OperationCanceled) => None,
            Err(err) => return Err(err.into()),
        };
        Ok(selection.map(|item| item.index))
    }

    fn notify_info(&mut self, text: &str) {
        println!("{}", text.green());
    }

    fn notify_error(&mut self, text: &str) {
        println!("{}", text.red());
    }

    fn set_indicator(&mut self, text: &str, style: IndicatorStyle) {
        match style {
            IndicatorStyle::Warning => println!("{}", text.yellow()),
            IndicatorStyle::Neutral => println!("{}", text.blue()),
        }
    }
}
