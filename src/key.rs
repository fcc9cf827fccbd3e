//! API key discovery.
//!
//! MyRadio keys live in small text files holding one line. The search order
//! is:
//!
//! 1. the file named by the `MYRADIOKEYFILE` environment variable;
//! 2. `.myradio.key` in the current directory;
//! 3. `.myradio.key` in the user's home directory;
//! 4. `/etc/myradio.key`;
//! 5. `/usr/local/etc/myradio.key`.
//!
//! [`find`] works on an explicit list of candidates so that it can be tested
//! without touching the environment; [`locate`] builds the default list.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use thiserror::Error;
use veil::Redact;

/// Environment variable naming the key file to try first.
pub const KEY_FILE_ENV: &str = "MYRADIOKEYFILE";

/// Fixed key file locations, tried in order after [`KEY_FILE_ENV`].
pub const KEY_FILES: [&str; 4] = [
    ".myradio.key",
    "${HOME}/.myradio.key",
    "/etc/myradio.key",
    "/usr/local/etc/myradio.key",
];

/// Key files are a single line; anything bigger is not a key file.
const MAX_KEY_FILE_SIZE: u64 = 1024;

#[derive(Error, Debug)]
pub enum Error {
    #[error("couldn't find any API key file (tried {})", display_paths(.0))]
    NotFound(Vec<PathBuf>),
}

fn display_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return String::from("nothing");
    }

    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A MyRadio API key.
///
/// The key is redacted from `Debug` output so that it does not end up in
/// logs.
#[derive(Clone, PartialEq, Eq, Hash, Redact)]
#[redact(all)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reads a key from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is suspiciously large,
    /// or holds nothing but whitespace.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        check(path)?;

        let contents = fs::read_to_string(path)?;
        contents.parse()
    }
}

impl FromStr for ApiKey {
    type Err = io::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "API key is empty",
            ));
        }

        Ok(Self(key.to_owned()))
    }
}

fn check(path: &Path) -> io::Result<()> {
    // Prevent out-of-memory condition: key files should be small.
    let file_size = fs::metadata(path)?.len();
    if file_size > MAX_KEY_FILE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} is too large", path.display()),
        ));
    }

    Ok(())
}

/// Returns the first key that can be read from `candidates`, in order.
///
/// Unreadable, oversized and empty files are skipped.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when no candidate yields a key.
pub fn find<I, P>(candidates: I) -> Result<ApiKey, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut tried = Vec::new();
    for candidate in candidates {
        let path = candidate.as_ref();
        match ApiKey::from_file(path) {
            Ok(key) => {
                debug!("using API key from {}", path.display());
                return Ok(key);
            }
            Err(e) => {
                trace!("no API key in {}: {e}", path.display());
                tried.push(path.to_path_buf());
            }
        }
    }

    Err(Error::NotFound(tried))
}

/// The default candidate list: [`KEY_FILE_ENV`] if set and non-empty, then
/// [`KEY_FILES`].
///
/// Paths referencing `${HOME}` are left out when `HOME` is not set.
#[must_use]
pub fn candidates() -> Vec<PathBuf> {
    let home = env::var("HOME").ok().filter(|home| !home.is_empty());
    default_candidates(env::var_os(KEY_FILE_ENV).map(PathBuf::from), home.as_deref())
}

fn default_candidates(key_file: Option<PathBuf>, home: Option<&str>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = key_file
        .filter(|path| !path.as_os_str().is_empty())
        .into_iter()
        .collect();

    for path in KEY_FILES {
        if path.contains("${HOME}") {
            if let Some(home) = home {
                candidates.push(PathBuf::from(path.replace("${HOME}", home)));
            }
        } else {
            candidates.push(PathBuf::from(path));
        }
    }

    candidates
}

/// Finds an API key in the default locations.
///
/// # Errors
///
/// Returns [`Error::NotFound`] when none of the [`candidates`] holds a key.
pub fn locate() -> Result<ApiKey, Error> {
    find(candidates())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn key_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn key_is_trimmed() {
        let file = key_file("THIS-KEY-HAS-SOME-LINE-BREAKS\n\n");
        let key = ApiKey::from_file(file.path()).unwrap();
        assert_eq!(key.as_str(), "THIS-KEY-HAS-SOME-LINE-BREAKS");
    }

    #[test]
    fn inner_spaces_are_kept() {
        let file = key_file("  this has spaces in it \n");
        let key = ApiKey::from_file(file.path()).unwrap();
        assert_eq!(key.as_str(), "this has spaces in it");
    }

    #[test]
    fn blank_file_is_not_a_key() {
        let file = key_file(" \n");
        let err = ApiKey::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn oversized_file_is_rejected() {
        let file = key_file(&"k".repeat(2048));
        assert!(ApiKey::from_file(file.path()).is_err());
    }

    #[test]
    fn find_skips_missing_and_blank_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(".shouldntexist.key");
        let blank = key_file("\n");
        let good = key_file("THIS-IS-A-TEST-KEY-THAT-WILL-NOT-WORK\n");

        let key = find([missing.as_path(), blank.path(), good.path()]).unwrap();
        assert_eq!(key.as_str(), "THIS-IS-A-TEST-KEY-THAT-WILL-NOT-WORK");
    }

    #[test]
    fn find_reports_everything_it_tried() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.key");
        let second = dir.path().join("b.key");

        let Error::NotFound(tried) = find([&first, &second]).unwrap_err();
        assert_eq!(tried, vec![first, second]);
    }

    #[test]
    fn env_file_comes_first_and_home_is_expanded() {
        let candidates =
            default_candidates(Some(PathBuf::from("/run/secrets/key")), Some("/home/ury"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/run/secrets/key"),
                PathBuf::from(".myradio.key"),
                PathBuf::from("/home/ury/.myradio.key"),
                PathBuf::from("/etc/myradio.key"),
                PathBuf::from("/usr/local/etc/myradio.key"),
            ]
        );
    }

    #[test]
    fn unset_sources_are_left_out() {
        let candidates = default_candidates(Some(PathBuf::new()), None);
        assert_eq!(
            candidates,
            vec![
                PathBuf::from(".myradio.key"),
                PathBuf::from("/etc/myradio.key"),
                PathBuf::from("/usr/local/etc/myradio.key"),
            ]
        );
    }

    #[test]
    fn debug_output_is_redacted() {
        let key: ApiKey = "super-secret".parse().unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
    }
}
