use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// The caller's parsed `Cargo.toml`, used to find how generated code must
/// name a `jm_*` crate.
///
/// # Example
///
/// ```no_run
/// # use jm_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("jm_json"));
/// ```
///
/// # Resolution rules
///
/// 1. `name` is listed in `dependencies`: `::name`.
/// 2. `name` starts with `jm_` and the caller depends on `jm_core`:
///    `::jm_core::short_name` (e.g. `jm_json` -> `::jm_core::json`).
/// 3. Repeat 1-2 in `dev-dependencies`.
/// 4. Otherwise `::name`.
///
/// A crate naming itself should declare `extern crate self as name;` so that
/// rule 4 also works inside the crate and its doctests.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const CORE_NAME: &str = "jm_core";
const PREFIX: &str = "jm_";

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read(path: &Path) -> Option<Document<Box<str>>> {
        let text = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(text).ok()
    }

    fn parse_path(text: &str) -> Option<syn::Path> {
        syn::parse_str(text).ok()
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Self::parse_path(&format!("::{name}"));
        }
        let short = name.strip_prefix(PREFIX)?;
        if deps.contains_key(CORE_NAME) {
            return Self::parse_path(&format!("::{CORE_NAME}::{short}"));
        }
        None
    }

    /// Returns the path under which the caller can reach crate `name`.
    ///
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = self.manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }
        Self::fallback(name)
    }

    fn fallback(name: &str) -> syn::Path {
        let ident = syn::Ident::new(name, Span::call_site());
        syn::Path {
            leading_colon: Some(Default::default()),
            segments: core::iter::once(syn::PathSegment::from(ident)).collect(),
        }
    }

    /// Runs `func` with the caller's manifest, cached per manifest path and
    /// modification time.
    ///
    /// Parsing the manifest is not cheap; proc-macros should call this once
    /// per expansion and pass the resulting path around.
    ///
    /// When no manifest can be read (e.g. outside cargo), `func` receives an
    /// empty manifest, so every lookup falls back to `::name`.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(path) = Self::manifest_path() else {
            return func(&Self::empty());
        };
        let modified_time = Self::modified_time(&path).unwrap_or(SystemTime::UNIX_EPOCH);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(manifest) = manifests.get(&path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }
        drop(manifests);

        let Some(document) = Self::read(&path) else {
            return func(&Self::empty());
        };
        let manifest = Manifest {
            manifest: document,
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }

    fn empty() -> Self {
        Self {
            manifest: Document::parse(Box::<str>::from(""))
                .unwrap_or_else(|_| unreachable!("an empty manifest is valid TOML")),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }
}
