mod error;
pub mod revision;
mod stamp;
pub mod template;

pub use error::*;
pub use revision::{resolve_revision, Revision, RevisionQuery, SvnVersion};
pub use stamp::stamp;
pub use template::{Template, REVISION_TOKEN};
