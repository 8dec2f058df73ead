use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for one of the `rj_*` crates as seen
/// from the caller's Cargo.toml.
///
/// Derive macros emit absolute paths such as `::rj_reflect::ops::Struct`.
/// Whether that path is valid depends on how the invoking crate pulled the
/// engine in, so the manifest is consulted once per macro invocation.
///
/// # Example
///
/// ```rust
/// # use rj_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("rj_reflect"));
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies` (directly, or under
///    another key through `package = "..."`), return `::key`.
/// 2. If the requested crate name begins with `rj_` and the target crate
///    depends on the umbrella crate `refjson`, return `::refjson::short_name`
///    (e.g. `rj_reflect` -> `::refjson::reflect`).
/// 3. If the requested crate name begins with `rj_` and the target crate
///    depends on the alias `rj`, return `::rj::short_name`.
/// 4. Repeat step 1-3 in `dev-dependencies`.
/// 5. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
///
/// A crate that runs its own derive inside its unit tests resolves to step 5,
/// so it needs `extern crate self as rj_reflect;` in its root.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const UMBRELLA_NAME: &str = "refjson";
const SHORT_UMBRELLA_NAME: &str = "rj";
const MEMBER_PREFIX: &str = "rj_";

impl Manifest {
    #[inline(never)]
    fn get_manifest_path() -> PathBuf {
        env::var_os("CARGO_MANIFEST_DIR")
            .map(|path| {
                let mut path = PathBuf::from(path);
                path.push("Cargo.toml");
                assert!(
                    path.exists(),
                    "Cargo manifest does not exist at path {}",
                    path.display(),
                );
                path
            })
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.")
    }

    #[inline(never)]
    fn get_manifest_modified_time(
        cargo_manifest_path: &Path,
    ) -> Result<SystemTime, std::io::Error> {
        std::fs::metadata(cargo_manifest_path).and_then(|metadata| metadata.modified())
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Document<Box<str>> {
        let manifest = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()))
            .into_boxed_str();
        Self::parse_manifest(manifest)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()))
    }

    #[inline]
    fn parse_manifest(text: Box<str>) -> Result<Document<Box<str>>, toml_edit::TomlError> {
        Document::parse(text)
    }

    #[inline]
    fn parse_str<T: syn::parse::Parse>(path: &str) -> T {
        syn::parse_str(path).unwrap()
    }

    // The key under which `name` is visible to the caller, honoring renames.
    fn dependency_key<'t>(deps: &'t Table, name: &str) -> Option<&'t str> {
        if let Some((key, _)) = deps.get_key_value(name) {
            return Some(key.get());
        }
        deps.iter()
            .find(|(_, item)| item.get("package").and_then(Item::as_str) == Some(name))
            .map(|(key, _)| key)
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(key) = Self::dependency_key(deps, name) {
            return Some(Self::parse_str(&format!("::{}", key.replace('-', "_"))));
        }

        let module = name.strip_prefix(MEMBER_PREFIX)?;

        [UMBRELLA_NAME, SHORT_UMBRELLA_NAME]
            .into_iter()
            .find_map(|umbrella| Self::dependency_key(deps, umbrella))
            .map(|key| {
                let mut path = Self::parse_str::<syn::Path>(&format!("::{}", key.replace('-', "_")));
                path.segments.push(Self::parse_str(module));
                path
            })
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .filter_map(|section| match self.manifest.get(section) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .next()
            .unwrap_or_else(|| Self::parse_str(&format!("::{name}")))
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml.
    ///
    /// Parsed manifests are cached per path and invalidated when the file's
    /// modification time changes. Callers should still invoke this once per
    /// macro invocation and pass the returned [`syn::Path`] around.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let manifest_path = Self::get_manifest_path();
        let modified_time = Self::get_manifest_modified_time(&manifest_path)
            .expect("The Cargo.toml should have a modified time.");

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;
    use std::time::SystemTime;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Manifest::parse_manifest(text.into()).unwrap(),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn resolve(text: &str, name: &str) -> String {
        manifest(text)
            .get_crate_path(name)
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn direct_dependency() {
        let text = "[dependencies]\nrj_reflect = { path = \"../rj_reflect\" }\n";
        assert_eq!(resolve(text, "rj_reflect"), "::rj_reflect");
    }

    #[test]
    fn renamed_dependency() {
        let text = "[dependencies]\nmy-json = { package = \"rj_reflect\", version = \"0.0.1\" }\n";
        assert_eq!(resolve(text, "rj_reflect"), "::my_json");
    }

    #[test]
    fn umbrella_dependency() {
        let text = "[dependencies]\nrefjson = \"0.0.1\"\n";
        assert_eq!(resolve(text, "rj_reflect"), "::refjson::reflect");

        let text = "[dev-dependencies]\nrj = { package = \"refjson\", version = \"0.0.1\" }\n";
        assert_eq!(resolve(text, "rj_reflect"), "::rj::reflect");
    }

    #[test]
    fn fallback() {
        assert_eq!(resolve("[package]\nname = \"x\"\n", "rj_reflect"), "::rj_reflect");
    }
}
