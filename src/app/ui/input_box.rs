#[cfg(test)]
#[path = "input_box_test.rs"]
mod tests;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding},
};
use tui_textarea::{CursorMove, TextArea};

use crate::config::constants::MAX_INPUT_ROWS;
use crate::models::Event;

pub type SubmitHandler = Box<dyn FnMut(String) + Send>;
pub type PasteHandler = Box<dyn FnMut(String) + Send>;

/// Multi-line input that grows with its content up to a row cap.
///
/// Content is caller-controlled through `value`/`set_value`. Enter submits
/// through the installed handler while Shift/Alt+Enter always inserts a
/// newline; paste goes through the installed paste handler when present.
/// Installing a handler replaces the previous one, so there is never more
/// than one subscriber and nothing to leak on teardown.
pub struct InputBox<'a> {
    input: TextArea<'a>,
    title: String,
    placeholder: String,
    max_rows: u16,

    on_enter: Option<SubmitHandler>,
    on_paste: Option<PasteHandler>,
}

impl<'a> InputBox<'a> {
    pub fn with_title(mut self, title: &str) -> InputBox<'a> {
        if !title.is_empty() {
            self.title = title.to_string();
            self.input = self.build_input("");
        }
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> InputBox<'a> {
        if !placeholder.is_empty() {
            self.placeholder = placeholder.to_string();
            self.input = self.build_input("");
        }
        self
    }

    pub fn with_max_rows(mut self, max_rows: u16) -> InputBox<'a> {
        self.max_rows = max_rows.max(1);
        self
    }

    /// Replace the submit handler. Passing a new handler detaches the old
    /// one; handlers never stack.
    pub fn set_on_enter(&mut self, handler: SubmitHandler) {
        self.on_enter = Some(handler);
    }

    /// Replace the paste handler. Same single-subscriber rule as
    /// `set_on_enter`.
    pub fn set_on_paste(&mut self, handler: PasteHandler) {
        self.on_paste = Some(handler);
    }

    pub fn value(&self) -> String {
        self.input.lines().join("\n")
    }

    pub fn set_value(&mut self, text: impl Into<String>) {
        self.input = self.build_input(&text.into());
    }

    /// Rows the box wants on screen: content height clamped to the cap,
    /// plus the border frame.
    pub fn height(&self) -> u16 {
        let rows = self.input.lines().len().max(1) as u16;
        rows.min(self.max_rows) + 2
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyboardCharInput(input) => {
                self.input.input(input.clone());
            }
            Event::KeyboardNewLine => self.input.insert_newline(),
            Event::KeyboardEnter => match self.on_enter.as_mut() {
                Some(handler) => handler(self.input.lines().join("\n")),
                None => self.input.insert_newline(),
            },
            Event::KeyboardPaste(text) => match self.on_paste.as_mut() {
                Some(handler) => handler(text.clone()),
                None => {
                    self.input.insert_str(text);
                }
            },
            _ => {}
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        f.render_widget(&self.input, area);
    }

    fn build_input(&self, text: &str) -> TextArea<'a> {
        let mut text_area = TextArea::from(text.lines());
        let block = Block::default()
            .title(Line::from(self.title.clone()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_alignment(Alignment::Left)
            .padding(Padding::symmetric(1, 0));
        text_area.set_block(block);
        text_area.set_placeholder_text(&self.placeholder);
        text_area.move_cursor(CursorMove::End);
        text_area
    }
}

impl Default for InputBox<'_> {
    fn default() -> Self {
        let mut input_box = Self {
            input: TextArea::default(),
            title: " Input ".to_string(),
            placeholder: "Type your message here...".to_string(),
            max_rows: MAX_INPUT_ROWS,
            on_enter: None,
            on_paste: None,
        };
        input_box.input = input_box.build_input("");
        input_box
    }
}
