use std::fs::{self, File};
use std::path::{Path, PathBuf};

use noodles::bam;
use noodles::sam;
use thiserror::Error;
use tracing::debug;

use crate::classify::batch::TriageResult;
use crate::core::types::{BAD_QUALITY_BUCKET, OTHER_BUCKET};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write one BAM file per bucket into `output_dir`.
///
/// Every bucket gets a file, empty or not: one `<label>.bam` per group in
/// definition order, then `others.bam` and `bad_quality.bam`. Records are
/// written back unchanged, under the input file's header, in their original
/// stored order (bucket member lists are ascending read indices). Returns the
/// written paths.
///
/// # Errors
///
/// Returns `ReportError::Io` if the directory cannot be created or a file
/// cannot be written.
pub fn write_bucket_bams(
    output_dir: &Path,
    header: &sam::Header,
    records: &[bam::Record],
    result: &TriageResult,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(output_dir)?;

    let mut written = Vec::with_capacity(result.groups.len() + 2);

    for bucket in &result.groups {
        written.push(write_bucket(
            output_dir,
            bucket.label.as_str(),
            header,
            records,
            &bucket.members,
        )?);
    }
    written.push(write_bucket(
        output_dir,
        OTHER_BUCKET,
        header,
        records,
        &result.other,
    )?);
    written.push(write_bucket(
        output_dir,
        BAD_QUALITY_BUCKET,
        header,
        records,
        &result.bad_quality,
    )?);

    Ok(written)
}

fn write_bucket(
    output_dir: &Path,
    bucket: &str,
    header: &sam::Header,
    records: &[bam::Record],
    members: &[usize],
) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(format!("{}.bam", file_safe_name(bucket)));

    let mut writer = bam::io::Writer::new(File::create(&path)?);
    writer.write_header(header)?;
    for &read_index in members {
        writer.write_record(header, &records[read_index])?;
    }
    writer.get_mut().try_finish()?;

    debug!(path = %path.display(), reads = members.len(), "wrote bucket");
    Ok(path)
}

/// Group labels come from user-supplied definition files; keep file names to
/// a safe character set.
fn file_safe_name(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
