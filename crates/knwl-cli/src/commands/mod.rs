//! Command implementations.

pub mod classes;
pub mod graph;
pub mod load;
pub mod maintenance;

pub use self::classes::{execute_class, execute_classes};
pub use self::graph::execute_graph;
pub use self::load::execute_load;
pub use self::maintenance::{execute_clear, execute_count};
