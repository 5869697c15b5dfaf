use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::AppError;
use crate::validation::{validate_alias_name, validate_user_email, validate_user_name};

/// Per-user Git configuration file in the home directory
const GIT_CONFIG_FILE: &str = ".gitconfig";
/// Config section holding alias definitions
const ALIAS_SECTION: &str = "alias";

/// Alias names mapped to their raw definition strings, as currently
/// recorded in the config file.
pub type AliasSet = BTreeMap<String, String>;

/// A named Git identity shortcut.
///
/// The definition is generated once at creation time and written verbatim;
/// it is never parsed back into its name/email parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    /// Alias name, the key under `[alias]`
    pub name: String,
    /// Display name the alias commits under (user.name)
    pub user_name: String,
    /// Email address the alias commits under (user.email)
    pub user_email: String,
    /// Literal command fragment recorded as the alias value
    pub definition: String,
}

impl AliasEntry {
    fn new(name: &str, user_name: &str, user_email: &str) -> Self {
        let definition = format!("!git -c user.name='{user_name}' -c user.email='{user_email}'");
        AliasEntry {
            name: name.to_string(),
            user_name: user_name.to_string(),
            user_email: user_email.to_string(),
            definition,
        }
    }

    /// The `key = value` line written to the config file
    fn config_line(&self) -> String {
        format!("    {} = {}", self.name, self.definition)
    }
}

/// Read/modify access to the `[alias]` section of a Git config file.
///
/// The set is rebuilt from the file on every read; nothing is cached.
pub struct AliasStore {
    path: PathBuf,
}

impl AliasStore {
    /// Store over the conventional per-user config file
    pub fn global() -> Result<Self, AppError> {
        let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        Ok(AliasStore {
            path: home_dir.join(GIT_CONFIG_FILE),
        })
    }

    /// Store over an explicit config file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        AliasStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses the current alias set out of the config file.
    ///
    /// A missing or unreadable file reads as an empty set; the condition is
    /// logged, never surfaced to the caller.
    pub fn load(&self) -> AliasSet {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_aliases(&contents),
            Err(err) => {
                debug!("could not read {}: {err}", self.path.display());
                AliasSet::new()
            }
        }
    }

    /// Records a new identity alias in the config file.
    ///
    /// Inputs are re-validated before any file I/O, so the programmatic path
    /// is as guarded as the interactive one. A missing file reads as empty,
    /// but an existing file that cannot be read fails the whole operation —
    /// contrast with [`AliasStore::load`].
    pub fn create(
        &self,
        name: &str,
        user_name: &str,
        user_email: &str,
    ) -> Result<AliasEntry, AppError> {
        validate_alias_name(name)?;
        validate_user_name(user_name)?;
        validate_user_email(user_email)?;

        let entry = AliasEntry::new(name, user_name, user_email);

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => {
                return Err(AppError::AliasWrite {
                    alias: name.to_string(),
                    source: err,
                });
            }
        };

        let updated = insert_alias_line(&contents, &entry.config_line());
        fs::write(&self.path, updated).map_err(|err| AppError::AliasWrite {
            alias: name.to_string(),
            source: err,
        })?;

        Ok(entry)
    }
}

/// Extracts the `[alias]` section's `key = value` pairs from config text.
///
/// A trimmed line of the exact form `[section]` opens a new section; inside
/// the alias section, any line containing `=` splits at the first `=` into a
/// trimmed key and value. Everything else is ignored.
pub fn parse_aliases(contents: &str) -> AliasSet {
    let mut aliases = AliasSet::new();
    let mut in_alias_section = false;

    for line in contents.lines() {
        let line = line.trim();
        if let Some(section) = section_name(line) {
            in_alias_section = section.eq_ignore_ascii_case(ALIAS_SECTION);
        } else if let Some((key, value)) = line.split_once('=') {
            if in_alias_section {
                aliases.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    aliases
}

fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// Splices an alias line into config text, preserving all other content.
///
/// With an existing `[alias]` section the line lands at the end of that
/// section's key lines; otherwise a fresh section is appended to the file.
fn insert_alias_line(contents: &str, line: &str) -> String {
    let mut in_alias_section = false;
    let mut offset = 0;
    let mut insert_at = None;

    for segment in contents.split_inclusive('\n') {
        if let Some(section) = section_name(segment.trim()) {
            if in_alias_section {
                insert_at = Some(offset);
                break;
            }
            in_alias_section = section.eq_ignore_ascii_case(ALIAS_SECTION);
        }
        offset += segment.len();
    }

    match (insert_at, in_alias_section) {
        // another section follows: splice before its header line
        (Some(at), _) => format!("{}{line}\n{}", &contents[..at], &contents[at..]),
        // alias section runs to the end of the file
        (None, true) => {
            let mut updated = contents.to_string();
            if !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(line);
            updated.push('\n');
            updated
        }
        // no alias section anywhere
        (None, false) => format!("{contents}\n[{ALIAS_SECTION}]\n{line}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> AliasStore {
        AliasStore::at(dir.path().join(".gitconfig"))
    }

    #[test]
    fn parse_reads_every_alias_pair() {
        let contents = "[alias]\n  wip = !git status\nproj1= !git -c user.name='A'\n   proj2   =   value  \n";
        let aliases = parse_aliases(contents);

        assert_eq!(aliases.len(), 3);
        assert_eq!(aliases["wip"], "!git status");
        assert_eq!(aliases["proj1"], "!git -c user.name='A'");
        assert_eq!(aliases["proj2"], "value");
    }

    #[test]
    fn parse_ignores_non_alias_sections() {
        let contents = "[user]\n    name = Someone\n[alias]\n    wip = !git status\n[core]\n    editor = vim\n";
        let aliases = parse_aliases(contents);

        assert_eq!(aliases.len(), 1);
        assert!(aliases.contains_key("wip"));
        assert!(!aliases.contains_key("name"));
        assert!(!aliases.contains_key("editor"));
    }

    #[test]
    fn parse_ignores_lines_before_any_section() {
        let aliases = parse_aliases("stray = value\n[alias]\n    wip = ok\n");
        assert_eq!(aliases.len(), 1);
        assert!(!aliases.contains_key("stray"));
    }

    #[test]
    fn parse_section_header_matches_case_insensitively() {
        let aliases = parse_aliases("[Alias]\n    wip = ok\n");
        assert_eq!(aliases["wip"], "ok");
    }

    #[test]
    fn parse_splits_at_first_equals_only() {
        let aliases = parse_aliases("[alias]\n    wip = !git -c user.name='A=B'\n");
        assert_eq!(aliases["wip"], "!git -c user.name='A=B'");
    }

    #[test]
    fn parse_skips_lines_without_equals() {
        let aliases = parse_aliases("[alias]\n    just some words\n    wip = ok\n");
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn load_missing_file_yields_empty_set() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert!(store.load().is_empty());
    }

    #[test]
    fn create_appends_fresh_section_byte_exactly() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let original = "[user]\n    name = Someone\n    email = s@example.com\n";
        fs::write(store.path(), original).unwrap();

        store.create("proj1", "Alice", "a@x.com").unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        let expected = format!(
            "{original}\n[alias]\n    proj1 = !git -c user.name='Alice' -c user.email='a@x.com'\n"
        );
        assert_eq!(written, expected);
    }

    #[test]
    fn create_starts_file_when_missing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.create("proj1", "Alice", "a@x.com").unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "\n[alias]\n    proj1 = !git -c user.name='Alice' -c user.email='a@x.com'\n"
        );
    }

    #[test]
    fn create_inserts_at_end_of_existing_section() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            "[alias]\n    old = !git status\n[user]\n    name = Someone\n",
        )
        .unwrap();

        store.create("proj1", "Alice", "a@x.com").unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "[alias]\n    old = !git status\n    proj1 = !git -c user.name='Alice' -c user.email='a@x.com'\n[user]\n    name = Someone\n"
        );
    }

    #[test]
    fn create_inserts_when_alias_section_is_last() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "[user]\n    name = Someone\n[alias]\n    old = !git status").unwrap();

        store.create("proj1", "Alice", "a@x.com").unwrap();

        let written = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "[user]\n    name = Someone\n[alias]\n    old = !git status\n    proj1 = !git -c user.name='Alice' -c user.email='a@x.com'\n"
        );
    }

    #[test]
    fn create_rejects_whitespace_name_before_any_io() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.create("has space", "Alice", "a@x.com").unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn create_rejects_email_without_at_before_any_io() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.create("ok", "Alice", "not-an-email").unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(!store.path().exists());
    }

    #[test]
    fn create_rejects_empty_user_name() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.create("ok", "", "a@x.com").unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn created_alias_is_visible_to_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entry = store.create("proj1", "Alice", "a@x.com").unwrap();
        let aliases = store.load();

        assert_eq!(aliases["proj1"], entry.definition);
        assert_eq!(
            entry.definition,
            "!git -c user.name='Alice' -c user.email='a@x.com'"
        );
    }
}
