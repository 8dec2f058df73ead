mod cursor;
mod node_reader;

pub use cursor::{from_str, from_value, pull_field, pull_next};
pub use node_reader::pull;
