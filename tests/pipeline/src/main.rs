fn main() {
    println!("Run `cargo test -p pipeline-e2e` to execute the end-to-end pipeline tests.");
}

#[cfg(all(test, unix))]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use symdeploy_assets::{collect_artifacts, group_artifacts};
    use symdeploy_manifest::{MANIFEST_FILE_NAME, UpdateManifest};
    use symdeploy_staging::{RuntimeMap, ScratchArea, correlate};
    use symdeploy_uploader::{UploadEnv, UploadError, upload_staged};
    use tempfile::TempDir;

    /// Writes a fake upload tool that appends its argv to `log` and
    /// exits with `exit_code`.
    fn write_fake_tool(dir: &Path, log: &Path, exit_code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let tool = dir.join("fake-upload-tool");
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {exit_code}\n",
            log.display()
        );
        fs::write(&tool, script).unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        tool
    }

    fn tool_invocations(log: &Path) -> Vec<String> {
        if !log.exists() {
            return Vec::new();
        }
        fs::read_to_string(log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Runs the whole pipeline over `root` with a fixed project and the
    /// given tool, in the same order as the CLI: scratch preparation
    /// before the source walk, manifest load, correlation, upload.
    fn run_pipeline(root: &Path, tool: &Path) -> Result<RuntimeMap, UploadError> {
        let env = UploadEnv {
            project: "my-app".into(),
            auth_token: "secret-token".into(),
            tool: tool.to_string_lossy().into_owned(),
        };

        let scratch = ScratchArea::prepare(root).unwrap();
        let artifacts = collect_artifacts(root).unwrap();
        let groups = group_artifacts(artifacts);
        let manifest = UpdateManifest::load(&UpdateManifest::manifest_path(root)).unwrap();
        let runtimes = correlate(&groups, &manifest.updates, &scratch).unwrap();

        upload_staged(scratch.dir(), &runtimes, &env)?;
        Ok(runtimes)
    }

    fn write_manifest(root: &Path, records: &str) {
        fs::write(
            root.join(MANIFEST_FILE_NAME),
            format!("{{\"updates\": [{records}]}}"),
        )
        .unwrap();
    }

    #[test]
    fn android_bundle_uploads_by_release_tag() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("app.js"), b"plain bundle").unwrap();
        fs::write(root.path().join("app.js.map"), b"{}").unwrap();
        fs::write(root.path().join("index.android.bundle"), b"android bundle").unwrap();
        fs::write(root.path().join("index.android.bundle.map"), b"{}").unwrap();
        write_manifest(
            root.path(),
            r#"{"id": "u1", "platform": "android", "runtimeVersion": "1.2.0"}"#,
        );

        let log = root.path().join("tool.log");
        let tool = write_fake_tool(root.path(), &log, 0);
        let runtimes = run_pipeline(root.path(), &tool).unwrap();

        assert_eq!(runtimes["android-update-id-u1.bundle"], "1.2.0");

        let calls = tool_invocations(&log);
        assert_eq!(calls.len(), 1);
        let scratch = root.path().join(".tmp");
        assert_eq!(
            calls[0],
            format!(
                "upload --project my-app --release 1.2.0 {} {}",
                scratch.join("android-update-id-u1.bundle").display(),
                scratch.join("android-update-id-u1.bundle.map").display(),
            )
        );
    }

    #[test]
    fn hermes_group_uploads_with_debug_id() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("index.ios.hbc"), b"bytecode").unwrap();
        fs::write(root.path().join("index.ios.hbc.map"), b"{}").unwrap();
        write_manifest(
            root.path(),
            r#"{"id": "u7", "platform": "ios", "runtimeVersion": "3.0.0"}"#,
        );

        let log = root.path().join("tool.log");
        let tool = write_fake_tool(root.path(), &log, 0);
        run_pipeline(root.path(), &tool).unwrap();

        let calls = tool_invocations(&log);
        assert_eq!(calls.len(), 1);
        assert!(calls[0].contains("--debug-id"));
        assert!(calls[0].contains("--release 3.0.0"));
    }

    #[test]
    fn unmatched_platform_skips_without_aborting() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("index.android.bundle"), b"bundle").unwrap();
        fs::write(root.path().join("index.android.bundle.map"), b"{}").unwrap();
        write_manifest(
            root.path(),
            r#"{"id": "u1", "platform": "ios", "runtimeVersion": "1.0.0"},
               {"id": "u2", "platform": "android", "runtimeVersion": "1.0.0"}"#,
        );

        let log = root.path().join("tool.log");
        let tool = write_fake_tool(root.path(), &log, 0);
        let runtimes = run_pipeline(root.path(), &tool).unwrap();

        // One of two records matched: one upload, run completed.
        assert_eq!(runtimes.len(), 1);
        assert_eq!(tool_invocations(&log).len(), 1);
    }

    #[test]
    fn failing_upload_aborts_remaining_groups() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("index.android.bundle"), b"bundle").unwrap();
        fs::write(root.path().join("index.ios.bundle"), b"bundle").unwrap();
        write_manifest(
            root.path(),
            r#"{"id": "a1", "platform": "android", "runtimeVersion": "1.0.0"},
               {"id": "i1", "platform": "ios", "runtimeVersion": "1.0.0"}"#,
        );

        let log = root.path().join("tool.log");
        let tool = write_fake_tool(root.path(), &log, 1);
        let result = run_pipeline(root.path(), &tool);

        match result {
            Err(UploadError::UploadFailed { group, .. }) => {
                assert_eq!(group, "android-update-id-a1.bundle");
            }
            other => panic!("expected upload failure, got {other:?}"),
        }
        // Fail-fast: only the first group was attempted.
        assert_eq!(tool_invocations(&log).len(), 1);
    }

    #[test]
    fn stale_scratch_files_never_reach_a_group() {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("index.android.bundle"), b"bundle").unwrap();
        write_manifest(
            root.path(),
            r#"{"id": "u1", "platform": "android", "runtimeVersion": "1.0.0"}"#,
        );

        // Leftovers from a crashed run.
        let stale_dir = root.path().join(".tmp");
        fs::create_dir_all(&stale_dir).unwrap();
        fs::write(stale_dir.join("android-update-id-dead.bundle"), b"stale").unwrap();

        let log = root.path().join("tool.log");
        let tool = write_fake_tool(root.path(), &log, 0);
        run_pipeline(root.path(), &tool).unwrap();

        let calls = tool_invocations(&log);
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].contains("dead"));
        assert!(!stale_dir.join("android-update-id-dead.bundle").exists());
    }
}
