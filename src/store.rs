//! In-memory Todo store. One mutex guards the whole collection; it is held only
//! for the duration of a single operation.

use crate::error::{AppError, ConfigError};
use crate::model::{Todo, TodoPayload};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Inner {
    /// Insertion order.
    todos: Vec<Todo>,
    /// Highest id ever stored; fresh ids are allocated above it so deleted ids are not reused.
    last_id: i64,
}

impl Inner {
    fn position(&self, id: i64) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    /// Next id above `last_id`. Once that reaches `i64::MAX`, falls back to the lowest unused positive id.
    fn next_id(&mut self) -> Result<i64, AppError> {
        if let Some(id) = self.last_id.checked_add(1) {
            self.last_id = id;
            return Ok(id);
        }
        let used: HashSet<i64> = self.todos.iter().map(|t| t.id).collect();
        (1..=i64::MAX)
            .find(|id| !used.contains(id))
            .ok_or_else(|| AppError::BadRequest("no free todo id".into()))
    }
}

#[derive(Debug, Default)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `todos`, keeping their ids.
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        let mut inner = Inner::default();
        for todo in todos {
            if !seen.insert(todo.id) {
                return Err(ConfigError::DuplicateId(todo.id));
            }
            inner.last_id = inner.last_id.max(todo.id);
            inner.todos.push(todo);
        }
        Ok(Self {
            inner: Mutex::new(inner),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, AppError> {
        self.inner
            .lock()
            .map_err(|_| AppError::Internal("todo store lock poisoned".into()))
    }

    /// All todos in insertion order.
    pub fn get_all(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.lock()?.todos.clone())
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<Todo>, AppError> {
        let guard = self.lock()?;
        Ok(guard.todos.iter().find(|t| t.id == id).cloned())
    }

    /// Insert a new todo. A supplied id is kept when free; otherwise a fresh one is assigned.
    pub fn add(&self, payload: TodoPayload) -> Result<Todo, AppError> {
        let mut guard = self.lock()?;
        let id = match payload.id {
            Some(id) if guard.position(id).is_none() => {
                guard.last_id = guard.last_id.max(id);
                id
            }
            _ => guard.next_id()?,
        };
        let todo = payload.into_todo(id);
        guard.todos.push(todo.clone());
        tracing::debug!(id, "todo stored");
        Ok(todo)
    }

    /// Replace the fields of the todo at `id`. The stored id is kept; `payload.id` is ignored.
    pub fn update_by_id(&self, id: i64, payload: TodoPayload) -> Result<Todo, AppError> {
        let mut guard = self.lock()?;
        let pos = guard.position(id).ok_or_else(|| AppError::todo_not_found(id))?;
        let updated = payload.into_todo(id);
        guard.todos[pos] = updated.clone();
        Ok(updated)
    }

    /// Remove the todo at `id` and return it.
    pub fn delete_by_id(&self, id: i64) -> Result<Todo, AppError> {
        let mut guard = self.lock()?;
        let pos = guard.position(id).ok_or_else(|| AppError::todo_not_found(id))?;
        Ok(guard.todos.remove(pos))
    }

    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.lock()?.todos.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.len()? == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id,
            title: title.into(),
            completed: false,
            order: None,
        }
    }

    #[test]
    fn get_all_keeps_insertion_order() {
        let store = TodoStore::new();
        store.add(TodoPayload::new("b", false).with_id(9)).unwrap();
        store.add(TodoPayload::new("a", true)).unwrap();
        let titles: Vec<_> = store.get_all().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn add_assigns_ids_from_one() {
        let store = TodoStore::new();
        let first = store.add(TodoPayload::new("first", false)).unwrap();
        let second = store.add(TodoPayload::new("second", false)).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn add_keeps_free_supplied_id() {
        let store = TodoStore::new();
        let stored = store
            .add(TodoPayload::new("Test", true).with_id(5).with_order(10))
            .unwrap();
        assert_eq!(stored, Todo { id: 5, title: "Test".into(), completed: true, order: Some(10) });
        assert_eq!(store.add(TodoPayload::new("next", false)).unwrap().id, 6);
    }

    #[test]
    fn add_reassigns_taken_id() {
        let store = TodoStore::new();
        store.add(TodoPayload::new("one", false).with_id(5)).unwrap();
        let dup = store.add(TodoPayload::new("two", false).with_id(5)).unwrap();
        assert_eq!(dup.id, 6);
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let store = TodoStore::new();
        let a = store.add(TodoPayload::new("a", false)).unwrap();
        store.delete_by_id(a.id).unwrap();
        let b = store.add(TodoPayload::new("b", false)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn find_by_id_absent_is_none() {
        let store = TodoStore::with_todos(vec![todo(5, "Test")]).unwrap();
        assert_eq!(store.find_by_id(5).unwrap().map(|t| t.title), Some("Test".to_string()));
        assert!(store.find_by_id(3).unwrap().is_none());
    }

    #[test]
    fn update_keeps_stored_id() {
        let store = TodoStore::with_todos(vec![todo(5, "Test")]).unwrap();
        let updated = store
            .update_by_id(5, TodoPayload::new("title", true).with_id(42))
            .unwrap();
        assert_eq!(updated.id, 5);
        assert_eq!(store.find_by_id(5).unwrap(), Some(updated));
        assert!(store.find_by_id(42).unwrap().is_none());
    }

    #[test]
    fn update_and_delete_missing_are_not_found() {
        let store = TodoStore::with_todos(vec![todo(5, "Test")]).unwrap();
        assert!(matches!(
            store.update_by_id(3, TodoPayload::default()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(store.delete_by_id(3), Err(AppError::NotFound(_))));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn delete_is_terminal() {
        let store = TodoStore::with_todos(vec![todo(5, "Test")]).unwrap();
        assert_eq!(store.delete_by_id(5).unwrap().id, 5);
        assert!(store.is_empty().unwrap());
        assert!(matches!(store.delete_by_id(5), Err(AppError::NotFound(_))));
        assert!(matches!(
            store.update_by_id(5, TodoPayload::default()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn add_after_max_id_uses_lowest_free_id() {
        let store = TodoStore::new();
        store.add(TodoPayload::new("one", false)).unwrap();
        let max = store.add(TodoPayload::new("max", false).with_id(i64::MAX)).unwrap();
        assert_eq!(max.id, i64::MAX);

        let next = store.add(TodoPayload::new("next", false)).unwrap();
        assert_eq!(next.id, 2);
        let dup = store.add(TodoPayload::new("dup", false).with_id(i64::MAX)).unwrap();
        assert_eq!(dup.id, 3);
        assert_eq!(store.len().unwrap(), 4);
        assert!(store.get_all().is_ok());
    }

    #[test]
    fn seeded_max_id_does_not_break_add() {
        let store = TodoStore::with_todos(vec![todo(i64::MAX, "max")]).unwrap();
        assert_eq!(store.add(TodoPayload::default()).unwrap().id, 1);
    }

    #[test]
    fn with_todos_rejects_duplicate_ids() {
        let err = TodoStore::with_todos(vec![todo(1, "a"), todo(1, "b")]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateId(1)));
    }

    #[test]
    fn with_todos_allocates_above_seeded_ids() {
        let store = TodoStore::with_todos(vec![todo(7, "a"), todo(3, "b")]).unwrap();
        assert_eq!(store.add(TodoPayload::default()).unwrap().id, 8);
    }
}
