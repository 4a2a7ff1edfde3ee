#[cfg(test)]
#[path = "ask_actions_test.rs"]
mod tests;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
};
use ratatui_macros::span;

use crate::config::constants::TOOLTIP_DELAY;
use crate::models::{Action, SessionSnapshot};

/// Row of buttons for a pending ask request, filtered to the actions of one
/// message. The session owner clears the request after a choice; this
/// component never mutates its own visibility.
pub struct AskActions {
    message_id: String,
    actions: Vec<Action>,

    focused: usize,
    focused_at: Option<DateTime<Utc>>,
}

impl AskActions {
    pub fn new(message_id: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            message_id: message_id.into(),
            actions,
            focused: 0,
            focused_at: None,
        }
    }

    /// Swap in the actions of another message.
    pub fn set_message(&mut self, message_id: impl Into<String>, actions: Vec<Action>) {
        self.message_id = message_id.into();
        self.actions = actions;
        self.focused = 0;
        self.focused_at = None;
    }

    pub fn showing(&self, session: &SessionSnapshot) -> bool {
        session.ask.as_ref().is_some_and(|ask| ask.is_action()) && !self.actions.is_empty()
    }

    /// Actions belonging to this message whose ids the ask request accepts,
    /// input order preserved.
    pub fn visible<'s>(&'s self, session: &'s SessionSnapshot) -> Vec<&'s Action> {
        let Some(ask) = session.ask.as_ref() else {
            return vec![];
        };
        self.actions
            .iter()
            .filter(|a| a.for_id == self.message_id && ask.accepts(&a.id))
            .collect()
    }

    pub fn height(&self, session: &SessionSnapshot) -> u16 {
        if self.showing(session) && !self.visible(session).is_empty() {
            2
        } else {
            0
        }
    }

    pub fn focus_next(&mut self, session: &SessionSnapshot) {
        self.move_focus(session, 1);
    }

    pub fn focus_prev(&mut self, session: &SessionSnapshot) {
        self.move_focus(session, -1);
    }

    /// Invoke the ask callback with the focused action. Disabled while the
    /// session is loading; a missing ask request makes this a no-op.
    pub fn choose(&self, session: &SessionSnapshot) {
        if session.loading || !self.showing(session) {
            return;
        }
        let Some(ask) = session.ask.as_ref() else {
            return;
        };
        let visible = self.visible(session);
        if let Some(action) = visible.get(self.focused) {
            (ask.callback)(action);
        }
    }

    /// Tooltip of the focused action once it has been focused for the
    /// reveal delay.
    pub fn tooltip_at<'s>(
        &'s self,
        session: &'s SessionSnapshot,
        now: DateTime<Utc>,
    ) -> Option<&'s str> {
        let focused_at = self.focused_at?;
        let elapsed = now.signed_duration_since(focused_at);
        if elapsed.num_milliseconds() < TOOLTIP_DELAY.as_millis() as i64 {
            return None;
        }
        self.visible(session)
            .get(self.focused)
            .and_then(|a| a.tooltip.as_deref())
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, session: &SessionSnapshot) {
        if !self.showing(session) {
            self.focused = 0;
            self.focused_at = None;
            return;
        }

        let count = self.visible(session).len();
        if count == 0 {
            return;
        }
        self.focused = self.focused.min(count - 1);
        if self.focused_at.is_none() {
            // First frame the row appears counts as the focus start.
            self.focused_at = Some(Utc::now());
        }

        let visible = self.visible(session);
        let mut spans: Vec<Span> = vec![];
        for (i, action) in visible.iter().enumerate() {
            let mut style = Style::default();
            if session.loading {
                style = style.dim();
            } else if i == self.focused {
                style = style.reversed().bold();
            }
            spans.push(Span::styled(button_text(action), style));
            spans.push(span!(" "));
        }
        f.render_widget(Line::from(spans), row(area, 0));

        if area.height > 1 {
            if let Some(tooltip) = self.tooltip_at(session, Utc::now()) {
                let line = Line::from(span!("{}", tooltip).dim().italic());
                f.render_widget(line, row(area, 1));
            }
        }
    }

    fn move_focus(&mut self, session: &SessionSnapshot, step: isize) {
        let count = self.visible(session).len();
        if count == 0 {
            return;
        }
        let count = count as isize;
        self.focused = ((self.focused as isize + step).rem_euclid(count)) as usize;
        self.focused_at = Some(Utc::now());
    }
}

fn row(area: Rect, offset: u16) -> Rect {
    Rect {
        y: area.y + offset,
        height: 1,
        ..area
    }
}

/// Text shown on a button. Icon-bearing actions use the label as-is, even
/// when absent; the two branches are not collapsed on purpose.
fn button_content(action: &Action) -> String {
    if action.icon.is_some() {
        action.label.clone().unwrap_or_default()
    } else {
        action.label.clone().unwrap_or_else(|| action.name.clone())
    }
}

fn button_text(action: &Action) -> String {
    let content = button_content(action);
    // Icons are URLs the terminal cannot load; show a marker in their place.
    let inner = match action.icon {
        Some(_) if content.is_empty() => "▪".to_string(),
        Some(_) => format!("▪ {}", content),
        None => content,
    };
    format!("[ {} ]", inner)
}
