// SPDX-License-Identifier: Apache-2.0

//! `packbench run` - load a payload, run the benchmark, print results.

use std::path::PathBuf;

use packbench_core::{BenchRunner, BenchSession, JsonReporter};

use crate::table;

pub fn execute(
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    no_verify: bool,
) -> anyhow::Result<()> {
    let mut session =
        BenchSession::new().with_runner(BenchRunner::new().verify_roundtrip(!no_verify));

    match &file {
        Some(path) => {
            session.load_file(path)?;
            tracing::info!(path = %path.display(), "loaded payload from file");
        }
        None => {
            session.load_sample()?;
            tracing::info!("loaded built-in sample payload");
        }
    }

    let report = session.run()?.clone();
    table::print_report(&report);

    if let Some(dir) = output {
        let reporter = JsonReporter::new(&dir)?;
        let path = reporter.save(&report)?;
        tracing::info!(path = %path.display(), "report saved");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_run_command_with_file_and_output_dir() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(br#"{"a":[1,2,3]}"#).unwrap();
        let out = tempfile::TempDir::new().unwrap();

        execute(
            Some(file.path().to_path_buf()),
            Some(out.path().to_path_buf()),
            false,
        )
        .unwrap();

        let reports: Vec<_> = std::fs::read_dir(out.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn test_run_command_missing_file_fails() {
        let err = execute(Some(PathBuf::from("/nonexistent/payload.json")), None, false)
            .unwrap_err();
        assert!(err.to_string().contains("payload"));
    }
}
