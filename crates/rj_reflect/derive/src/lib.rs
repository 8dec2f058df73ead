//! See [`Record`](macro@Record).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` implements the following traits for a struct with
/// named fields:
///
/// - `Typed` (category `Record`)
/// - `Record` (the ordered field table)
/// - `Struct` and `ToJson`
/// - `StructMut` and `FromJson`
///
/// Fields are listed in declaration order, which is also the order of the
/// serialized object keys.
///
/// Enums, unions, tuple structs and unit structs are rejected, as are
/// structs without any serialized field.
///
/// ## Implementation Control
///
/// The deserialization half can be disabled, e.g. for records that hold
/// borrowed data such as `&'static str`:
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(FromJson = false)]
/// struct Label {
///     text: &'static str,
/// }
/// ```
///
/// ## Key Names
///
/// By default a field is keyed by its identifier. `rename_all` changes the
/// rule for the whole struct, `rename` overrides a single field:
///
/// ```rust, ignore
/// #[derive(Record)]
/// #[record(rename_all = "camelCase")]
/// struct Player {
///     display_name: String,        // "displayName"
///     #[record(rename = "hp")]
///     hit_points: u32,             // "hp"
/// }
/// ```
///
/// Available rules: `"camelCase"`, `"snake_case"`, `"PascalCase"`,
/// `"SCREAMING_SNAKE_CASE"` and `"kebab-case"`. Two fields with the same key
/// are rejected.
///
/// These attributes can only be applied at the type level, except `rename`.
///
/// ## Skipped Fields
///
/// `#[record(skip)]` leaves a field out of the table: it is never serialized
/// and never touched by deserialization.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Session {
///     user: String,
///     #[record(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Generics
///
/// Every field type that mentions a type parameter is bounded by the traits
/// each implementation needs, so `Page<T>` is `ToJson` whenever `T` is.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Page<T> {
///     index: u32,
///     items: Vec<T>,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
