use anyhow::Context;
use derive_new::new;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

const STATUS_ARGS: [&str; 2] = ["status", "--porcelain"];
const REF_LISTING_ARGS: [&str; 2] = [
    "for-each-ref",
    "--format=%(objecttype) %(refname) %(objectname) %(upstream)",
];

/// A query that exceeds this deadline fails instead of blocking the scan.
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Captured-output git queries against an explicit target directory.
///
/// The target is passed per invocation, so no ambient working-directory
/// state exists to save and restore between directories.
#[derive(Debug, Default, new)]
pub struct GitClient;

impl GitClient {
    /// Short-form change listing, one `<2-char-code> <path>` record per line.
    pub async fn porcelain_status(&self, dir: &Path) -> anyhow::Result<String> {
        self.run_capture(dir, &STATUS_ARGS).await
    }

    /// Every ref as `<kind> <refname> <objectid> <upstream>`, the upstream
    /// field empty for refs without one.
    pub async fn ref_listing(&self, dir: &Path) -> anyhow::Result<String> {
        self.run_capture(dir, &REF_LISTING_ARGS).await
    }

    async fn run_capture(&self, dir: &Path, args: &[&str]) -> anyhow::Result<String> {
        debug!("running git {:?} in {:?}", args, dir);

        let output = tokio::time::timeout(
            QUERY_TIMEOUT,
            Command::new("git").args(args).current_dir(dir).output(),
        )
        .await
        .with_context(|| format!("git {} timed out in {:?}", args.join(" "), dir))?
        .with_context(|| format!("failed to run git {} in {:?}", args.join(" "), dir))?;

        if !output.status.success() {
            anyhow::bail!(
                "git {} failed in {:?} ({}): {}",
                args.join(" "),
                dir,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("git {} produced non-utf8 output", args.join(" ")))
    }
}
