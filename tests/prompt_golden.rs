mod screen;

use std::cell::RefCell;
use std::rc::Rc;

use screen::Screen;
use tape_prompt::{
    Component, Key, MemoryTerminal, Renderable, RenderSurface, TextPrompt, TextPromptOptions,
    TextPromptTheme,
};

fn plain_theme() -> TextPromptTheme {
    TextPromptTheme {
        message: Box::new(|text| text.to_string()),
        separator: Box::new(|text| text.to_string()),
        value: Box::new(|text| text.to_string()),
        warning: Box::new(|text| format!("!{text}")),
    }
}

fn shared_term() -> Rc<RefCell<MemoryTerminal>> {
    Rc::new(RefCell::new(MemoryTerminal::new(40, 5)))
}

fn type_char(prompt: &mut TextPrompt<MemoryTerminal>, ch: char) {
    let raw = ch.to_string();
    prompt.on_key_input(&raw, &Key::named(raw.clone()));
}

fn assert_golden(actual: &str, name: &str) {
    let expected = fixture::read_golden(name);
    assert_eq!(
        actual,
        expected,
        "{name}: got {}",
        fixture::escape(actual)
    );
}

#[test]
fn golden_empty_prompt() {
    let term = shared_term();
    let mut prompt = TextPrompt::new(
        RenderSurface::from_shared(term.clone()),
        TextPromptOptions::new("name", "Name"),
    )
    .with_theme(plain_theme());
    prompt.render();
    assert_golden(term.borrow().output(), "prompt_empty_render.txt");
}

#[test]
fn golden_after_typing() {
    let term = shared_term();
    let mut prompt = TextPrompt::new(
        RenderSurface::from_shared(term.clone()),
        TextPromptOptions::new("name", "Name"),
    )
    .with_theme(plain_theme());
    type_char(&mut prompt, 'J');
    term.borrow_mut().take_output();
    type_char(&mut prompt, 'o');
    assert_golden(term.borrow().output(), "prompt_valid_render.txt");
}

#[test]
fn cursor_stays_on_input_line_across_warning_toggle() {
    let term = shared_term();
    let mut screen = Screen::new(40, 5);
    let mut prompt = TextPrompt::new(
        RenderSurface::from_shared(term.clone()),
        TextPromptOptions::new("name", "Your name"),
    );

    prompt.render();
    screen.feed(&term.borrow_mut().take_output());
    assert_eq!(screen.line(0), "Your name›");
    assert_eq!(screen.line(1), "Please enter a value");
    assert_eq!(screen.cursor(), ("Your name› ".chars().count(), 0));

    for ch in "Ada".chars() {
        type_char(&mut prompt, ch);
    }
    screen.feed(&term.borrow_mut().take_output());
    assert_eq!(screen.line(0), "Your name› Ada");
    assert_eq!(screen.line(1), "");
    assert_eq!(screen.cursor(), ("Your name› Ada".chars().count(), 0));

    for _ in 0..3 {
        prompt.on_key_input("\x7f", &Key::named("backspace"));
    }
    screen.feed(&term.borrow_mut().take_output());
    assert_eq!(prompt.value(), "");
    assert_eq!(prompt.cursor(), 0);
    assert_eq!(screen.line(0), "Your name›");
    assert_eq!(screen.line(1), "Please enter a value");
    assert_eq!(screen.cursor(), ("Your name› ".chars().count(), 0));
}

#[test]
fn prompt_started_on_the_bottom_row_keeps_its_input_visible() {
    let term = Rc::new(RefCell::new(MemoryTerminal::new(40, 3)));
    let mut screen = Screen::new(40, 3);
    screen.feed("one\r\ntwo\r\n");
    assert_eq!(screen.cursor(), (0, 2));

    let surface = RenderSurface::from_shared(term.clone());
    let mut prompt = TextPrompt::new(surface.clone(), TextPromptOptions::new("name", "Name"))
        .with_theme(plain_theme());
    surface.reserve_rows_below(1);
    prompt.render();
    for ch in "Ada".chars() {
        type_char(&mut prompt, ch);
    }
    screen.feed(&term.borrow_mut().take_output());

    assert_eq!(prompt.value(), "Ada");
    assert_eq!(screen.lines(), vec!["two", "Name› Ada", ""]);
    assert_eq!(screen.cursor(), ("Name› Ada".chars().count(), 1));

    prompt.on_key_input("\x7f", &Key::named("backspace"));
    prompt.on_key_input("\x7f", &Key::named("backspace"));
    prompt.on_key_input("\x7f", &Key::named("backspace"));
    screen.feed(&term.borrow_mut().take_output());
    assert_eq!(screen.lines(), vec!["two", "Name›", "!Please enter a value"]);
}

#[test]
fn malformed_keys_still_render() {
    let term = shared_term();
    let mut prompt = TextPrompt::new(
        RenderSurface::from_shared(term.clone()),
        TextPromptOptions::new("name", "Name"),
    )
    .with_theme(plain_theme());
    prompt.on_key_input("", &Key::default());
    assert_eq!(prompt.value(), "");
    assert_golden(term.borrow().output(), "prompt_empty_render.txt");
}

#[test]
fn prompt_and_list_share_one_sink() {
    let term = shared_term();
    let surface = RenderSurface::from_shared(term.clone());
    let mut prompt = TextPrompt::new(surface.clone(), TextPromptOptions::new("q", "Q"))
        .with_theme(plain_theme());
    prompt.render();
    let before = term.borrow().output().len();
    let _list = tape_prompt::ScrollList::new(surface, vec!["x".to_string()]);
    assert!(term.borrow().output().len() > before);
    assert_eq!(Rc::strong_count(&term), 3);
}
