use std::path::Path;

use log::info;

use crate::{
    revision::{resolve_revision, Revision, RevisionQuery},
    template::{write_output_file, Template},
    Result,
};

/// Stamps the template with the revision of the working copy and writes the result.
/// Returns the revision that has been inserted.
///
/// The steps run strictly in order: resolve the revision, read the template, replace the
/// placeholders and write the output. Only resolving the revision recovers from errors, a
/// template that cannot be read returns before the output file is touched.
///
/// # Arguments
/// * `query` - The query used to obtain the revision.
/// * `working_copy` - The path to the local working copy.
/// * `template_file` - The path to the template file.
/// * `output_file` - The path to the output file.
pub fn stamp<Q, P1, P2, P3>(
    query: &Q,
    working_copy: P1,
    template_file: P2,
    output_file: P3,
) -> Result<Revision>
where
    Q: RevisionQuery + ?Sized,
    P1: AsRef<Path>,
    P2: AsRef<Path>,
    P3: AsRef<Path>,
{
    let working_copy = working_copy.as_ref();
    let template_file = template_file.as_ref();
    let output_file = output_file.as_ref();

    info!("local copy dir = {}", working_copy.display());
    info!("template file path = {}", template_file.display());
    info!("output file path = {}", output_file.display());

    let revision = resolve_revision(query, working_copy);

    info!("Read template...");
    let template = Template::from_file(template_file)?;
    info!(
        "Read template...DONE, {} placeholder(s)",
        template.num_placeholders()
    );

    info!("Write output...");
    let text = template.render(revision.as_str());
    write_output_file(output_file, &text)?;
    info!("Write output...DONE");

    info!("Version template replacement successful");

    Ok(revision)
}
