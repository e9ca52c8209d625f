//! Full-screen list of 100 rows. Up/Down to move, Enter to pick, Ctrl+C to quit.

use std::cell::RefCell;
use std::rc::Rc;

use tape_prompt::{
    read_key, Component, EnvConfig, ProcessTerminal, RawModeGuard, RenderSurface, ScrollList,
    ScrollListOptions, ScrollListTheme,
};

fn main() -> tape_prompt::Result<()> {
    let config = EnvConfig::from_env()?;
    let _logging = tape_prompt::logging::init(&config)?;

    let items: Vec<String> = (1..=100).map(|i| format!("Item {i:>3}")).collect();
    let picked: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let surface = RenderSurface::new(ProcessTerminal::new());
    let raw_mode = RawModeGuard::enable()?;

    let mut list = ScrollList::with_options(
        surface.clone(),
        items,
        ScrollListOptions::from(&config),
        ScrollListTheme::default(),
    );
    let picked_ref = picked.clone();
    list.set_on_select(Some(Box::new(move |_, item| {
        *picked_ref.borrow_mut() = Some(item.to_string());
    })));

    loop {
        let Some((raw, key)) = read_key()? else {
            continue;
        };
        if key.is_ctrl_c() {
            break;
        }
        list.on_key_input(&raw, &key);
        if picked.borrow().is_some() {
            break;
        }
    }

    drop(raw_mode);
    let rows = surface.terminal_size().rows;
    surface.move_cursor_to(tape_prompt::Position::row_start(rows.saturating_sub(1)));
    if let Some(item) = picked.borrow().as_deref() {
        surface.print(&format!("\r\nPicked: {item}\r\n"));
    }
    surface.flush();
    Ok(())
}
