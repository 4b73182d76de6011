use std::{
    convert::Infallible,
    fs::File,
    io::{Read, Write},
    path::Path,
    str::FromStr,
    sync::Arc,
};

use crate::{Error, Result};

/// The placeholder replaced by the revision.
pub const REVISION_TOKEN: &str = "$revision$";

/// A text template with zero or more revision placeholders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    /// The full text of the template.
    contents: String,
}

impl Template {
    /// Reads the template from the given file.
    ///
    /// # Arguments
    /// * `path` - The path to the template file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Template> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|err| Error::FailedOpenFile(Arc::new(err), path.display().to_string()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| Error::FailedReadFile(Arc::new(err), path.display().to_string()))?;

        Ok(Template { contents })
    }

    /// Returns the full text of the template.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Returns the number of revision placeholders in the template.
    pub fn num_placeholders(&self) -> usize {
        self.contents.matches(REVISION_TOKEN).count()
    }

    /// Returns the template text with every placeholder replaced by the given revision.
    ///
    /// # Arguments
    /// * `revision` - The revision to insert.
    pub fn render(&self, revision: &str) -> String {
        self.contents.replace(REVISION_TOKEN, revision)
    }
}

impl FromStr for Template {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Template {
            contents: s.to_owned(),
        })
    }
}

/// Writes the given text to the writer.
///
/// # Arguments
/// * `writer` - The writer to write to.
/// * `text` - The text to write.
pub fn write_output<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()?;

    Ok(())
}

/// Writes the given text to the file, creating it or truncating existing content.
///
/// # Arguments
/// * `path` - The path of the output file.
/// * `text` - The text to write.
pub fn write_output_file<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .map_err(|err| Error::FailedCreateFile(Arc::new(err), path.display().to_string()))?;

    write_output(&mut file, text).map_err(|err| match err {
        Error::IO(err) => Error::FailedWriteFile(err, path.display().to_string()),
        err => err,
    })
}
