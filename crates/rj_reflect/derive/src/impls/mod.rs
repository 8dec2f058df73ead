// -----------------------------------------------------------------------------
// Modules

mod struct_kind;
mod trait_json;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use struct_kind::impl_struct;

use trait_json::{impl_trait_from_json, impl_trait_to_json};
use trait_typed::{impl_trait_record, impl_trait_typed};
