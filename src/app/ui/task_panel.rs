#[cfg(test)]
#[path = "task_panel_test.rs"]
mod tests;

use std::sync::Arc;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Padding},
};
use ratatui_macros::span;

use crate::fetch::FetchError;
use crate::models::{Task, TaskList};

use super::utils;

/// Card showing the latest task list: a status badge plus either the single
/// highlighted task (compact layout) or the full scrollable list.
///
/// The panel tracks which relative path it is currently showing; fetch
/// results that arrive for any other path are discarded, so a superseded
/// response can never overwrite the current view.
#[derive(Default)]
pub struct TaskPanel {
    path: Option<String>,
    data: Option<Arc<TaskList>>,
    loading: bool,
    error: Option<FetchError>,
    scroll: usize,
}

impl TaskPanel {
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn visible(&self) -> bool {
        self.path.is_some()
    }

    /// Point the panel at a new path. `cached` is whatever the fetch cache
    /// already holds for that key; with no cached value the next fetch
    /// renders as loading.
    pub fn set_path(&mut self, path: Option<String>, cached: Option<Arc<TaskList>>) {
        if self.path == path {
            return;
        }
        self.path = path;
        self.data = cached;
        self.loading = false;
        self.error = None;
        self.scroll = 0;
    }

    pub fn on_fetch_started(&mut self, path: &str) {
        if self.path.as_deref() == Some(path) {
            self.loading = true;
        }
    }

    pub fn on_fetch_finished(&mut self, path: &str, result: &Result<Arc<TaskList>, FetchError>) {
        if self.path.as_deref() != Some(path) {
            // Superseded by a newer path while this request was in flight.
            return;
        }
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(Arc::clone(data));
                self.error = None;
            }
            Err(err) => self.error = Some(err.clone()),
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // Clamped against the list length at render time.
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Rows the compact card needs; zero when there is nothing to show.
    pub fn compact_height(&self) -> u16 {
        if self.path.is_none() {
            return 0;
        }
        if self.loading && self.data.is_none() {
            return 1;
        }
        if self.error.is_some() {
            return 1;
        }
        match &self.data {
            Some(list) if list.highlighted_index().is_some() => 3,
            Some(_) => 2,
            None => 0,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, compact: bool) {
        if self.path.is_none() || area.height == 0 {
            return;
        }

        if self.loading && self.data.is_none() {
            f.render_widget(Line::from(span!("Loading tasks...").dim().italic()), area);
            return;
        }

        if self.error.is_some() {
            f.render_widget(Line::from(span!("Error loading tasks").red()), area);
            return;
        }

        let Some(list) = self.data.clone() else {
            return;
        };

        let block = Block::default()
            .title(Line::from(" Tasks ").bold())
            .title_top(badge(&list.status).right_aligned())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::symmetric(1, 0));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.height == 0 {
            return;
        }

        if compact {
            if let Some(index) = list.highlighted_index() {
                let line = task_line(index + 1, &list.tasks[index], inner.width);
                f.render_widget(line, Rect { height: 1, ..inner });
            }
            return;
        }

        let viewport = inner.height as usize;
        self.scroll = self.scroll.min(list.tasks.len().saturating_sub(viewport));
        let items: Vec<ListItem> = list
            .tasks
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(viewport)
            .map(|(index, task)| ListItem::new(task_line(index + 1, task, inner.width)))
            .collect();
        f.render_widget(List::new(items), inner);
    }
}

fn badge(status: &str) -> Line<'_> {
    let status = if status.is_empty() { "?" } else { status };
    Line::from(Span::styled(
        format!(" {} ", status),
        Style::default().reversed(),
    ))
}

fn task_line<'a>(position: usize, task: &Task, max_width: u16) -> Line<'a> {
    let title = utils::truncate_to_width(&task.title, (max_width as usize).saturating_sub(6));
    Line::from(vec![
        span!("{:>2}. ", position).dim(),
        Span::styled(
            task.status.icon().to_string(),
            Style::default().fg(task.status.color()),
        ),
        span!(" "),
        span!("{}", title),
    ])
}
