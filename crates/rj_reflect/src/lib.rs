#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    rj_cfg::define_alias! {
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::rj_reflect::...` paths, which must also resolve
// inside this crate's own unit tests.
extern crate self as rj_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod document;

pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use document::JsonSerializable;
pub use info::{Category, Record, Typed};
pub use ops::{FromJson, ToJson};
pub use rj_reflect_derive as derive;
pub use serde::{DeserializeError, Error};
