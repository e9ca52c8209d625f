//! Full-screen scrollable list.

use crossterm::style::Stylize;

use crate::config::{EnvConfig, RedrawMode};
use crate::core::component::{Component, Renderable};
use crate::core::cursor::Position;
use crate::core::input_event::Key;
use crate::core::terminal::{Terminal, TerminalSize};
use crate::render::frame::Frame;
use crate::render::surface::RenderSurface;

pub struct ScrollListTheme {
    /// Styles the selected row, already padded to the terminal width.
    pub selected_row: Box<dyn Fn(&str) -> String>,
}

impl Default for ScrollListTheme {
    fn default() -> Self {
        Self {
            selected_row: Box::new(|text| text.on_blue().to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollListOptions {
    pub redraw: RedrawMode,
    /// Rows kept below the selection before the window scrolls down.
    pub bottom_margin: u16,
}

impl From<&EnvConfig> for ScrollListOptions {
    fn from(config: &EnvConfig) -> Self {
        Self {
            redraw: config.redraw,
            bottom_margin: config.list_bottom_margin,
        }
    }
}

/// Operations reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Up,
    Down,
    Confirm,
}

impl ListAction {
    pub fn from_key(key: &Key) -> Option<Self> {
        match key.name()? {
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "return" | "enter" => Some(Self::Confirm),
            _ => None,
        }
    }
}

/// Keyboard-navigable list that owns the whole screen.
///
/// Invariant after every navigation (given a constant, non-zero row count):
/// `scroll_top <= selected_index <= scroll_top + rows - 1`.
pub struct ScrollList<T: Terminal> {
    surface: RenderSurface<T>,
    items: Vec<String>,
    /// `None` iff `items` is empty.
    selected_index: Option<usize>,
    scroll_top: usize,
    options: ScrollListOptions,
    theme: ScrollListTheme,
    last_frame: Option<Frame>,
    on_select: Option<Box<dyn FnMut(usize, &str)>>,
    on_selection_change: Option<Box<dyn FnMut(usize, &str)>>,
}

impl<T: Terminal> ScrollList<T> {
    /// Build the list and draw it immediately.
    pub fn new(surface: RenderSurface<T>, items: Vec<String>) -> Self {
        Self::with_options(
            surface,
            items,
            ScrollListOptions::default(),
            ScrollListTheme::default(),
        )
    }

    pub fn with_options(
        surface: RenderSurface<T>,
        items: Vec<String>,
        options: ScrollListOptions,
        theme: ScrollListTheme,
    ) -> Self {
        let selected_index = if items.is_empty() { None } else { Some(0) };
        let mut list = Self {
            surface,
            items,
            selected_index,
            scroll_top: 0,
            options,
            theme,
            last_frame: None,
            on_select: None,
            on_selection_change: None,
        };
        list.render();
        list
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn surface(&self) -> &RenderSurface<T> {
        &self.surface
    }

    pub fn set_on_select(&mut self, handler: Option<Box<dyn FnMut(usize, &str)>>) {
        self.on_select = handler;
    }

    pub fn set_on_selection_change(&mut self, handler: Option<Box<dyn FnMut(usize, &str)>>) {
        self.on_selection_change = handler;
    }

    pub fn select_up(&mut self) {
        self.move_selection(false);
        self.render();
    }

    pub fn select_down(&mut self) {
        self.move_selection(true);
        self.render();
    }

    /// Hand the current item to the `on_select` handler. No redraw.
    pub fn confirm(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };
        if let (Some(item), Some(handler)) = (self.items.get(index), self.on_select.as_mut()) {
            tracing::debug!(index, "scroll list confirmed");
            handler(index, item);
        }
    }

    fn move_selection(&mut self, down: bool) {
        let Some(current) = self.selected_index else {
            return;
        };
        let last = self.items.len().saturating_sub(1);
        let next = if down {
            (current + 1).min(last)
        } else {
            current.saturating_sub(1)
        };
        self.selected_index = Some(next);
        self.fit_scroll(next);

        tracing::trace!(
            selected = next,
            scroll_top = self.scroll_top,
            "scroll list navigated"
        );

        if next != current {
            if let (Some(item), Some(handler)) =
                (self.items.get(next), self.on_selection_change.as_mut())
            {
                handler(next, item);
            }
        }
    }

    /// Single-step window adjustment; one line of movement per keypress.
    fn fit_scroll(&mut self, selected: usize) {
        let rows = usize::from(self.surface.terminal_size().rows);
        let margin = usize::from(self.options.bottom_margin);

        if selected < self.scroll_top {
            self.scroll_top -= 1;
        } else if selected + 1 + margin > self.scroll_top + rows {
            self.scroll_top += 1;
        }
        // Tiny terminals would otherwise push the window past the selection.
        self.scroll_top = self.scroll_top.min(selected);
    }

    fn visible_rows(&self, size: TerminalSize) -> Vec<String> {
        if size.is_empty() {
            return Vec::new();
        }
        self.items
            .iter()
            .enumerate()
            .skip(self.scroll_top)
            .take(usize::from(size.rows))
            .map(|(index, item)| {
                if Some(index) == self.selected_index {
                    self.highlight(item, size.columns)
                } else {
                    item.clone()
                }
            })
            .collect()
    }

    fn highlight(&self, item: &str, columns: u16) -> String {
        let pad = usize::from(columns).saturating_sub(item.chars().count());
        (self.theme.selected_row)(&format!("{item}{}", " ".repeat(pad)))
    }

    fn paint_row(&self, row: usize, content: &str) {
        let row = row as u16;
        self.surface.clear_line(row);
        if !content.is_empty() {
            self.surface.print_at(content, Position::row_start(row));
        }
    }
}

impl<T: Terminal> Renderable for ScrollList<T> {
    fn render(&mut self) {
        // Read once so clearing and slicing agree within this frame.
        let size = self.surface.terminal_size();
        let frame = Frame::new(size, self.visible_rows(size));

        match self.options.redraw {
            RedrawMode::FullClear => {
                for row in 0..size.rows {
                    self.surface.clear_line(row);
                }
                for (row, content) in frame.rows().iter().enumerate() {
                    if !content.is_empty() {
                        self.surface.print_at(content, Position::row_start(row as u16));
                    }
                }
            }
            RedrawMode::DirtyRows => {
                let dirty = frame.dirty_rows(self.last_frame.as_ref());
                tracing::trace!(dirty = dirty.len(), "scroll list dirty rows");
                for row in dirty {
                    self.paint_row(row, &frame.rows()[row]);
                }
            }
        }

        self.surface.flush();
        self.last_frame = Some(frame);
    }
}

impl<T: Terminal> Component for ScrollList<T> {
    fn on_key_input(&mut self, _raw: &str, key: &Key) {
        match ListAction::from_key(key) {
            Some(ListAction::Up) => self.select_up(),
            Some(ListAction::Down) => self.select_down(),
            Some(ListAction::Confirm) => self.confirm(),
            None => tracing::trace!(key = ?key.name(), "scroll list ignored key"),
        }
    }
}
