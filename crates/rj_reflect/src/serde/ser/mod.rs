mod driver;
mod node_writer;

pub use driver::SerializeDriver;
pub use node_writer::{push, push_field, to_string, to_value};
