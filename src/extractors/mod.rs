pub mod todo_id;

pub use todo_id::TodoId;
