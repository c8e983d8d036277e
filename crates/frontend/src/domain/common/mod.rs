pub mod named_list;
pub mod options;

pub use named_list::{named_list_view, NamedResource};
