use serde::{Deserialize, Serialize};
use std::fmt;

/// Route segment (and draft id) for a note that has no server record yet.
pub(crate) const NEW_NOTE_ID: &str = "new";

/// Note identifier as the backend sends it.
///
/// The notes API assigns integer ids, while unsaved drafts carry the `"new"` sentinel.
/// Both shapes must round-trip unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum NoteId {
    Number(i64),
    Text(String),
}

impl NoteId {
    pub fn new_sentinel() -> Self {
        Self::Text(NEW_NOTE_ID.to_string())
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Note {
    pub id: NoteId,

    /// `None` until loaded or typed; `Some("")` is an explicitly emptied note.
    #[serde(default)]
    pub body: Option<String>,

    /// Server-owned fields (`updated`, `created`, ...). Never touched by the editor,
    /// but carried back on update.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Note {
    /// A fresh local draft for `id` with the given text.
    pub fn draft(id: NoteId, body: String) -> Self {
        Self {
            id,
            body: Some(body),
            extra: serde_json::Map::new(),
        }
    }

    pub fn updated(&self) -> Option<&str> {
        self.extra.get("updated").and_then(|v| v.as_str())
    }
}

/// Editor route context: `/note/new` or `/note/{id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RouteId {
    New,
    Existing(String),
}

impl RouteId {
    pub fn parse(segment: &str) -> Self {
        if segment == NEW_NOTE_ID {
            Self::New
        } else {
            Self::Existing(segment.to_string())
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Self::New)
    }

    /// Id stamped onto a draft created by typing before any load completed.
    pub fn draft_id(&self) -> NoteId {
        match self {
            Self::New => NoteId::new_sentinel(),
            Self::Existing(id) => match id.parse::<i64>() {
                Ok(n) => NoteId::Number(n),
                Err(_) => NoteId::Text(id.clone()),
            },
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => f.write_str(NEW_NOTE_ID),
            Self::Existing(id) => f.write_str(id),
        }
    }
}
