//! Source hygiene for the gallery core.
//!
//! Scans `src/` (test files excluded) for code that would crash the page,
//! swallow an error, bypass the `log` facade, pull a browser binding into the
//! core, or scatter user-facing text outside `consts.rs`.

use std::fs;
use std::path::{Path, PathBuf};

struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    fn name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Code lines containing `pattern`; comment lines are skipped.
    fn hits(&self, pattern: &str) -> usize {
        self.content
            .lines()
            .filter(|line| !line.trim_start().starts_with("//"))
            .filter(|line| line.contains(pattern))
            .count()
    }
}

fn library_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found; run from the gallery crate root");
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

/// Files where `pattern` occurs, with per-file counts.
fn offenders<'a>(files: &'a [SourceFile], pattern: &str) -> Vec<(&'a str, usize)> {
    files
        .iter()
        .map(|f| (f.name(), f.hits(pattern)))
        .filter(|(_, n)| *n > 0)
        .collect()
}

fn assert_absent(files: &[SourceFile], patterns: &[&str], hint: &str) {
    for pattern in patterns {
        let found = offenders(files, pattern);
        assert!(found.is_empty(), "`{pattern}` in library code ({hint}): {found:?}");
    }
}

// =============================================================
// Panics
// =============================================================

#[test]
fn library_code_does_not_panic() {
    assert_absent(
        &library_sources(),
        &[".unwrap()", "panic!(", "unreachable!(", "todo!(", "unimplemented!("],
        "propagate a GalleryError or fall back instead",
    );
}

#[test]
fn expect_is_reserved_for_the_video_id_pattern() {
    let files = library_sources();
    let found = offenders(&files, ".expect(");
    assert!(
        found.iter().all(|(name, n)| *name == "youtube.rs" && *n == 1),
        "only the compiled pattern in youtube.rs may use .expect(): {found:?}"
    );
}

// =============================================================
// Error and log discipline
// =============================================================

#[test]
fn errors_are_not_discarded_unread() {
    assert_absent(&library_sources(), &["let _ =", ".ok()"], "log the error or match on it");
}

#[test]
fn output_goes_through_log() {
    assert_absent(&library_sources(), &["println!(", "eprintln!(", "dbg!("], "use log::debug!/warn!");
}

// =============================================================
// Crate boundaries
// =============================================================

#[test]
fn core_has_no_browser_bindings() {
    assert_absent(
        &library_sources(),
        &["web_sys", "wasm_bindgen", "leptos", "gloo_"],
        "browser code belongs in the client crate",
    );
}

/// String values declared under the user-facing text heading of `consts.rs`.
fn user_facing_strings(consts: &SourceFile) -> Vec<String> {
    consts
        .content
        .lines()
        .skip_while(|line| !line.contains("User-facing text"))
        .filter(|line| line.trim_start().starts_with("pub const"))
        .filter_map(|line| {
            let start = line.find('"')?;
            let end = line.rfind('"')?;
            (end > start).then(|| line[start..=end].to_owned())
        })
        .collect()
}

#[test]
fn user_facing_text_lives_in_consts() {
    let files = library_sources();
    let consts = files.iter().find(|f| f.name() == "consts.rs").expect("consts.rs missing");
    let strings = user_facing_strings(consts);
    assert!(strings.len() >= 6, "user-facing text section not found in consts.rs");

    for literal in &strings {
        let copies: Vec<&str> = files
            .iter()
            .filter(|f| f.name() != "consts.rs" && f.hits(literal) > 0)
            .map(SourceFile::name)
            .collect();
        assert!(copies.is_empty(), "{literal} duplicated outside consts.rs in {copies:?}");
    }
}
