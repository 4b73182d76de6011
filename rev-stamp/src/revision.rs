use std::{
    fmt,
    path::Path,
    process::{Command, Stdio},
    sync::OnceLock,
};

use log::{debug, info};
use regex::Regex;

use crate::QueryError;

/// The program queried for the revision of a working copy, if nothing else is configured.
pub const DEFAULT_PROGRAM: &str = "svnversion";

/// The revision used whenever the real one cannot be determined.
pub const FALLBACK_REVISION: &str = "0";

/// Skips an optional `low:` prefix and captures the ASCII digits that follow, i.e., the most
/// recent revision of a mixed-revision working copy.
const REVISION_PATTERN: &str = r"^(?:.*:)?([0-9]+)";

/// A revision of a working copy. Only ever treated as text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Revision {
    /// The revision digits, or `"0"` for the fallback.
    value: String,

    /// True if the real revision could not be determined.
    fallback: bool,
}

impl Revision {
    /// Returns the sentinel revision `"0"`.
    pub fn fallback() -> Revision {
        Revision {
            value: FALLBACK_REVISION.to_owned(),
            fallback: true,
        }
    }

    /// Returns the revision as string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns true if the real revision could not be determined and the sentinel is used.
    /// A working copy that really is at revision `0` is not a fallback.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<&str> for Revision {
    fn from(value: &str) -> Self {
        Revision {
            value: value.to_owned(),
            fallback: false,
        }
    }
}

/// A capability for querying the raw revision information of a working copy.
pub trait RevisionQuery {
    /// Returns the name of the queried program, used for log messages.
    fn program(&self) -> &str;

    /// Queries the revision information of the given working copy and returns the raw output.
    ///
    /// # Arguments
    /// * `working_copy` - The path to the local working copy.
    fn query(&self, working_copy: &Path) -> std::result::Result<String, QueryError>;
}

/// Queries the revision by running `svnversion <working copy> -c`.
#[derive(Clone, Debug)]
pub struct SvnVersion {
    /// The program to launch.
    program: String,
}

impl SvnVersion {
    /// Creates a new query that launches the given program instead of `svnversion`.
    ///
    /// # Arguments
    /// * `program` - The name or path of the program.
    pub fn with_program(program: &str) -> SvnVersion {
        SvnVersion {
            program: program.to_owned(),
        }
    }
}

impl Default for SvnVersion {
    fn default() -> Self {
        SvnVersion::with_program(DEFAULT_PROGRAM)
    }
}

impl RevisionQuery for SvnVersion {
    fn program(&self) -> &str {
        &self.program
    }

    fn query(&self, working_copy: &Path) -> std::result::Result<String, QueryError> {
        debug!("Run {} {:?} -c...", self.program, working_copy);

        // The exit status is ignored, whatever the tool printed is handed to the parser.
        let output = Command::new(&self.program)
            .arg(working_copy)
            .arg("-c")
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| QueryError::Launch(self.program.clone(), err))?;

        debug!("Run {}...DONE with {}", self.program, output.status);

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

fn revision_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(REVISION_PATTERN).expect("revision pattern is valid"))
}

/// Extracts the revision number from the output of `svnversion -c`.
/// Returns None, if the output does not start with a revision.
///
/// # Arguments
/// * `output` - The raw output of the tool.
pub fn parse_revision(output: &str) -> Option<&str> {
    revision_regex()
        .captures(output)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Resolves the revision of the given working copy. Never fails, falls back to `"0"` if the tool
/// cannot be launched or its output does not contain a revision.
///
/// # Arguments
/// * `query` - The query used to obtain the raw revision information.
/// * `working_copy` - The path to the local working copy.
pub fn resolve_revision<Q: RevisionQuery + ?Sized>(query: &Q, working_copy: &Path) -> Revision {
    let output = match query.query(working_copy) {
        Ok(output) => output,
        Err(err) => {
            debug!("Query failed: {:?}", err);
            info!(
                "The {} program could not be found. Using {} as the revision number. \
                 You should have the SVN client tools installed and on your path. If you are \
                 using a graphical SVN client, you must still install the SVN command-line client.",
                query.program(),
                FALLBACK_REVISION
            );

            return Revision::fallback();
        }
    };

    info!("revision string = {}", output.trim_end());

    match parse_revision(&output) {
        Some(revision) => {
            info!("revision = {}", revision);
            Revision::from(revision)
        }
        None => {
            info!("Couldn't find revision number, using {}.", FALLBACK_REVISION);
            Revision::fallback()
        }
    }
}
