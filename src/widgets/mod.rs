//! Interactive widgets.

pub mod scroll_list;
pub mod text_prompt;

pub use scroll_list::{ListAction, ScrollList, ScrollListOptions, ScrollListTheme};
pub use text_prompt::{
    non_empty, TextPrompt, TextPromptOptions, TextPromptTheme, Validation, Validator,
};
