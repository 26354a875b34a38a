//! Todo record and the request body shape used for create and update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored Todo. `id` never changes once the store has assigned it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Incoming Todo body. Every field may be omitted on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order: Option<i64>,
}

impl TodoPayload {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    pub(crate) fn into_todo(self, id: i64) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
            order: self.order,
        }
    }
}
