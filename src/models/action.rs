use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A choice offered to the user, attached to one message.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Action {
    pub id: String,

    /// Id of the message this action belongs to.
    #[serde(rename = "forId")]
    pub for_id: String,

    pub name: String,

    #[serde(default)]
    pub label: Option<String>,

    /// Icon URL. Terminals cannot load it; a marker is rendered instead.
    #[serde(default)]
    pub icon: Option<String>,

    #[serde(default)]
    pub tooltip: Option<String>,
}

impl Action {
    pub fn new(id: impl Into<String>, for_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            for_id: for_id.into(),
            name: name.into(),
            label: None,
            icon: None,
            tooltip: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

/// What kind of answer a pending ask request expects, and which action ids
/// are eligible.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AskSpec {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub keys: Option<Vec<String>>,
}

pub const ASK_KIND_ACTION: &str = "action";

pub type AskCallback = Arc<dyn Fn(&Action) + Send + Sync>;

/// A pending request for the user to pick an action. Created and cleared by
/// the session owner; the UI only reads it and invokes the callback.
#[derive(Clone)]
pub struct AskRequest {
    pub spec: AskSpec,
    pub callback: AskCallback,
}

impl AskRequest {
    pub fn new(spec: AskSpec, callback: AskCallback) -> Self {
        Self { spec, callback }
    }

    pub fn is_action(&self) -> bool {
        self.spec.kind == ASK_KIND_ACTION
    }

    pub fn accepts(&self, action_id: &str) -> bool {
        self.spec
            .keys
            .as_ref()
            .is_some_and(|keys| keys.iter().any(|k| k == action_id))
    }
}

impl fmt::Debug for AskRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AskRequest")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}
