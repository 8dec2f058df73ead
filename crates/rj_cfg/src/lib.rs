//! Compilation control macros shared by the `rj_*` crates.
//!
//! [`define_alias!`] turns a `#[cfg(...)]` predicate into a macro that either
//! keeps or drops the code handed to it:
//!
//! ```
//! pub mod cfg {
//!     rj_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(any())] => never,
//!     }
//! }
//!
//! let mut hits = 0;
//! cfg::never! { hits += 10; }
//! cfg::debug! {
//!     if { hits += 1; } else { hits += 2; }
//! }
//! assert!(hits == 1 || hits == 2);
//! assert!(!cfg::never!());
//! ```
#![no_std]

/// Define one alias macro per `#[cfg(...)] => name` pair.
///
/// Each alias accepts three forms:
///
/// - `alias!()` evaluates to `true` or `false`.
/// - `alias! { if { .. } else { .. } }` keeps exactly one branch.
/// - `alias! { .. }` keeps or drops the whole body.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $alias:ident),+ $(,)?) => {
        $(
            $crate::define_alias!(@single #[cfg($meta)] => $alias);
        )+
    };
    (@single #[cfg($meta:meta)] => $alias:ident) => {
        #[cfg($meta)]
        #[doc = concat!("Keeps the provided code, `#[cfg(", stringify!($meta), ")]` is active.")]
        pub use $crate::enabled as $alias;

        #[cfg(not($meta))]
        #[doc = concat!("Drops the provided code, `#[cfg(", stringify!($meta), ")]` is inactive.")]
        pub use $crate::disabled as $alias;
    };
}

/// Alias body for an active predicate.
#[doc(hidden)]
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($then:tt)* } else { $($else:tt)* }) => { $($then)* };
    ($($tokens:tt)*) => { $($tokens)* };
}

/// Alias body for an inactive predicate.
#[doc(hidden)]
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($then:tt)* } else { $($else:tt)* }) => { $($else)* };
    ($($tokens:tt)*) => {};
}
