//! Ask for a name; Enter submits once the buffer is non-empty, Ctrl+C quits.

use std::cell::RefCell;
use std::rc::Rc;

use tape_prompt::{
    read_key, Component, EnvConfig, ProcessTerminal, RawModeGuard, RenderSurface, Renderable,
    TextPrompt, TextPromptOptions,
};

fn main() -> tape_prompt::Result<()> {
    let config = EnvConfig::from_env()?;
    let _logging = tape_prompt::logging::init(&config)?;

    let surface = RenderSurface::new(ProcessTerminal::new());
    let answer: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let mut prompt = TextPrompt::new(
        surface.clone(),
        TextPromptOptions::new("name", "What is your name"),
    );
    let answer_ref = answer.clone();
    prompt.set_on_submit(Some(Box::new(move |value| {
        *answer_ref.borrow_mut() = Some(value);
    })));

    let raw_mode = RawModeGuard::enable()?;
    // The warning row must exist below the input row, even on the last line.
    surface.reserve_rows_below(1);
    prompt.render();

    loop {
        let Some((raw, key)) = read_key()? else {
            continue;
        };
        if key.is_ctrl_c() {
            break;
        }
        prompt.on_key_input(&raw, &key);
        if answer.borrow().is_some() {
            break;
        }
    }

    drop(raw_mode);
    surface.print("\r\n\r\n");
    if let Some(value) = answer.borrow().as_deref() {
        surface.print(&format!("{}: {value}\r\n", prompt.name()));
    }
    surface.flush();
    Ok(())
}
