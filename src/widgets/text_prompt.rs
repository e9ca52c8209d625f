//! Single-line text prompt with an inline validation line beneath it.

use crossterm::style::Stylize;

use crate::core::component::{Component, Renderable};
use crate::core::input_event::{is_printable, Key};
use crate::core::terminal::Terminal;
use crate::render::surface::RenderSurface;

pub const DEFAULT_SEPARATOR: &str = "›";
pub const DEFAULT_WARNING: &str = "Please enter a value";

/// Result of checking the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(Option<String>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }
}

pub type Validator = Box<dyn Fn(&str) -> Validation>;

/// Fails on an empty buffer with `message`.
pub fn non_empty(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.is_empty() {
            Validation::Invalid(Some(message.clone()))
        } else {
            Validation::Valid
        }
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPromptOptions {
    /// Key the answer is stored under by hosts that run several prompts.
    pub name: String,
    pub message: String,
}

impl TextPromptOptions {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub struct TextPromptTheme {
    pub message: Box<dyn Fn(&str) -> String>,
    pub separator: Box<dyn Fn(&str) -> String>,
    pub value: Box<dyn Fn(&str) -> String>,
    pub warning: Box<dyn Fn(&str) -> String>,
}

impl Default for TextPromptTheme {
    fn default() -> Self {
        Self {
            message: Box::new(|text| text.bold().to_string()),
            separator: Box::new(|text| text.dark_grey().to_string()),
            value: Box::new(|text| text.blue().to_string()),
            warning: Box::new(|text| text.red().to_string()),
        }
    }
}

/// Append-only single-line input.
///
/// `cursor` counts characters and always equals the buffer length after an edit;
/// there is no caret movement within the buffer.
pub struct TextPrompt<T: Terminal> {
    surface: RenderSurface<T>,
    options: TextPromptOptions,
    theme: TextPromptTheme,
    validator: Validator,
    buffer: String,
    cursor: usize,
    on_submit: Option<Box<dyn FnMut(String)>>,
}

impl<T: Terminal> TextPrompt<T> {
    pub fn new(surface: RenderSurface<T>, options: TextPromptOptions) -> Self {
        Self {
            surface,
            options,
            theme: TextPromptTheme::default(),
            validator: non_empty(DEFAULT_WARNING),
            buffer: String::new(),
            cursor: 0,
            on_submit: None,
        }
    }

    pub fn with_theme(mut self, theme: TextPromptTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    pub fn set_on_submit(&mut self, handler: Option<Box<dyn FnMut(String)>>) {
        self.on_submit = handler;
    }

    pub fn name(&self) -> &str {
        &self.options.name
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn surface(&self) -> &RenderSurface<T> {
        &self.surface
    }

    pub fn validate(&self) -> Validation {
        (self.validator)(&self.buffer)
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let keep = self
            .buffer
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.buffer.len());
        self.buffer.truncate(keep);
    }

    fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.cursor += text.chars().count();
    }

    fn submit(&mut self) {
        let validation = self.validate();
        if !validation.is_valid() {
            tracing::debug!(name = %self.options.name, "prompt submit rejected");
            return;
        }
        tracing::debug!(name = %self.options.name, "prompt submitted");
        if let Some(handler) = self.on_submit.as_mut() {
            handler(self.buffer.clone());
        }
    }
}

impl<T: Terminal> Renderable for TextPrompt<T> {
    /// The save/restore pair brackets exactly the validation-line write so the
    /// visible cursor ends at the end of the input line.
    fn render(&mut self) {
        let surface = &self.surface;

        surface.erase_current_line();
        surface.move_to_column(0);

        let mut line = (self.theme.message)(&self.options.message);
        line.push_str(&(self.theme.separator)(DEFAULT_SEPARATOR));
        line.push(' ');
        line.push_str(&(self.theme.value)(&self.buffer));
        surface.print(&line);

        surface.save_cursor();
        surface.move_down(1);
        surface.move_to_column(0);
        match self.validate() {
            Validation::Valid | Validation::Invalid(None) => surface.erase_current_line(),
            Validation::Invalid(Some(message)) => {
                surface.erase_current_line();
                surface.print(&(self.theme.warning)(&message));
            }
        }
        surface.restore_cursor();

        surface.flush();
    }
}

impl<T: Terminal> Component for TextPrompt<T> {
    fn on_key_input(&mut self, raw: &str, key: &Key) {
        if key.is("backspace") {
            self.backspace();
        } else if key.is("return") || key.is("enter") {
            self.submit();
        }

        if is_printable(raw) {
            self.append(raw);
        }

        tracing::trace!(cursor = self.cursor, "prompt edited");
        self.render();
    }
}
