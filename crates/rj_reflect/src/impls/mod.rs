//! Implementations of the engine traits for standard types.
//!
//! ## Implemented Menu
//!
//! - native:
//!     - `bool`
//!     - `i8`-`i128`, `u8`-`u128`, `isize`, `usize`, `f32`, `f64`
//!     - `str` (serialize only)
//!     - `[T; N]`, `[T]` (serialize only)
//!     - `&T`, `&mut T`, classified as `T`
//! - alloc:
//!     - `String`, `Cow<'_, str>`
//!     - `Vec<T>`, `VecDeque<T>`, `LinkedList<T>`
//!     - `Box<T>`, classified as `T`; `Box<str>` and `Box<[T]>` are
//!       serialize only
//!     - `Rc<T>`, `Arc<T>`, classified as `T` (serialize only)
//!
//! Records get their implementations from `#[derive(Record)]`.
//!
//! Deserializing into a sequence requires `T: Default`: every element is
//! created with `T::default()` and then populated from its node.
//!
//! Text is deserialized into growable storage only. `Box<str>` cannot be
//! resized in place, so it is not a target; use `String` or `Box<String>`:
//!
//! ```
//! use rj_reflect::serde::pull;
//! use serde_json::json;
//!
//! let mut text: Box<String> = Box::default();
//! pull(&mut text, &json!("loaded")).unwrap();
//! assert_eq!(text.as_str(), "loaded");
//! ```
//!
//! ```compile_fail
//! use rj_reflect::serde::pull;
//! use serde_json::json;
//!
//! let mut text: Box<str> = "fixed".into();
//! pull(&mut text, &json!("loaded")).unwrap();
//! ```

// -----------------------------------------------------------------------------
// Modules

mod alloc;
mod native;
