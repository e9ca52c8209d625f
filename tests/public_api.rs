#![allow(unused_imports)]

use tape_prompt::{
    decode_key_event, is_control_char, is_printable, non_empty, poll_key, read_key, Component,
    EnvConfig, Error, Key, ListAction, MemoryTerminal, Position, ProcessTerminal, RawModeGuard,
    RedrawMode, RenderSurface, Renderable, Result, ScrollList, ScrollListOptions,
    ScrollListTheme, Terminal, TerminalSize, TextPrompt, TextPromptOptions, TextPromptTheme,
    Validation, Validator,
};

#[test]
fn public_api_exports_compile() {}

#[test]
fn widgets_are_usable_as_trait_objects() {
    let surface = RenderSurface::new(MemoryTerminal::new(20, 4));
    let list = ScrollList::new(surface.clone(), vec!["a".to_string(), "b".to_string()]);
    let prompt = TextPrompt::new(surface, TextPromptOptions::new("n", "N"));

    let mut widgets: Vec<Box<dyn Component>> = vec![Box::new(list), Box::new(prompt)];
    for widget in widgets.iter_mut() {
        widget.on_key_input("\x1b[B", &Key::named("down"));
        widget.render();
    }
}
