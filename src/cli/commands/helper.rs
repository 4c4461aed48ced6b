use anyhow::Result;

use super::FileFailure;
use crate::cli::report;
use crate::core::{self, SourceFile};

/// Run `process` on every file in order.
///
/// A failing file aborts the whole run unless `keep_going` is set, in which
/// case it is reported, recorded in `failures`, and the loop continues.
pub fn process_files<T, F>(
    files: &[SourceFile],
    keep_going: bool,
    failures: &mut Vec<FileFailure>,
    mut process: F,
) -> Result<Vec<T>>
where
    F: FnMut(&SourceFile) -> core::Result<T>,
{
    let mut done = Vec::with_capacity(files.len());

    for file in files {
        match process(file) {
            Ok(value) => done.push(value),
            Err(err) if keep_going => {
                report::print_failure(&file.relative, &err);
                failures.push(FileFailure {
                    relative: file.relative.clone(),
                    error: err.to_string(),
                });
            }
            Err(err) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("Failed to process {}", file.relative)));
            }
        }
    }

    Ok(done)
}

pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
