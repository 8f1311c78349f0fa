use crate::areas::scanner::Scanner;
use crate::areas::workspace::Workspace;
use crate::artifacts::probe::VcsKind;
use crate::artifacts::refs::divergence;
use crate::artifacts::refs::ref_graph::RefGraph;
use crate::artifacts::report::{DirectoryReport, FleetSummary};
use colored::Colorize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

const RULE_WIDTH: usize = 80;

impl Scanner {
    /// Walk the fleet and render one report block per directory.
    ///
    /// If the root itself is a git working copy, it is the single subject
    /// of analysis and a failure there is fatal. Otherwise every immediate
    /// subdirectory is analyzed independently, in name order, and a query
    /// failure inside one directory marks it dirty without aborting the
    /// rest of the scan.
    pub async fn scan(&self) -> anyhow::Result<FleetSummary> {
        let root_entries = self.workspace().list_dir()?;
        let mut summary = FleetSummary::default();

        if VcsKind::probe(&root_entries) == VcsKind::Git {
            writeln!(self.writer(), "Root directory is a git repository.\n")?;

            let report = self
                .analyze_repository(&self.root_dir_name(), self.workspace().path())
                .await?;
            self.render_report(&report)?;
            summary.record(&report);
        } else {
            let sub_dir_names = self.workspace().subdirectory_names()?;
            writeln!(self.writer(), "Subdirectories found: {}\n", sub_dir_names.len())?;

            for dir_name in sub_dir_names {
                let report = self.analyze_directory(&dir_name).await?;
                self.render_report(&report)?;
                summary.record(&report);
            }
        }

        writeln!(self.writer(), "{}", summary)?;

        Ok(summary)
    }

    /// Classify one subdirectory and, when it is a git working copy, run
    /// the status and ref queries against it. Query failures are confined
    /// to the directory; a listing failure still aborts the scan.
    async fn analyze_directory(&self, dir_name: &str) -> anyhow::Result<DirectoryReport> {
        let dir_path = self.workspace().subdirectory_path(dir_name);
        let entries = Workspace::list_entries(&dir_path)?;
        let vcs = VcsKind::probe(&entries);

        if !vcs.is_analyzable() {
            return Ok(DirectoryReport::aggregate(
                dir_name.to_string(),
                vcs,
                None,
                Vec::new(),
            ));
        }

        match self.analyze_repository(dir_name, &dir_path).await {
            Ok(report) => Ok(report),
            Err(error) => {
                warn!("analysis of {:?} failed: {:#}", dir_path, error);
                Ok(DirectoryReport::failed(dir_name.to_string(), &error))
            }
        }
    }

    /// Run both queries against a known git working copy and fold the
    /// parsed results into a report.
    async fn analyze_repository(
        &self,
        dir_name: &str,
        dir_path: &Path,
    ) -> anyhow::Result<DirectoryReport> {
        debug!("analyzing repository {:?}", dir_path);

        let status_raw = self.git().porcelain_status(dir_path).await?;
        let change_set = self.status_parser().parse(&status_raw);

        let refs_raw = self.git().ref_listing(dir_path).await?;
        let ref_graph = RefGraph::parse(&refs_raw);
        let verdicts = divergence::analyze(&ref_graph);

        Ok(DirectoryReport::aggregate(
            dir_name.to_string(),
            VcsKind::Git,
            Some(change_set),
            verdicts,
        ))
    }

    fn render_report(&self, report: &DirectoryReport) -> anyhow::Result<()> {
        if self.options().only_dirty && !report.is_dirty() {
            return Ok(());
        }

        let mut writer = self.writer();
        writeln!(writer, "> {}: {}", report.dir_name().yellow(), report.vcs())?;

        if let Some(change_set) = report.change_set() {
            writeln!(writer, "  status: {}", change_set)?;
        }

        for verdict in report.verdicts() {
            writeln!(
                writer,
                "{}{} {}",
                "  > ".bright_black(),
                verdict.branch,
                verdict.relation
            )?;
        }

        if let Some(error) = report.error() {
            writeln!(writer, "  {} {}", "error:".red(), error)?;
        }

        writeln!(writer, "{}", "-".repeat(RULE_WIDTH).bright_black())?;

        Ok(())
    }

    fn root_dir_name(&self) -> String {
        self.workspace()
            .path()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string())
    }
}
