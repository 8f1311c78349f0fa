use crate::areas::git::GitClient;
use crate::areas::workspace::Workspace;
use crate::artifacts::status::parser::StatusParser;
use anyhow::Context;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Render and filtering options for one scan.
#[derive(Debug, Clone, Copy, Default, new)]
pub struct ScanOptions {
    /// Omit clean directories from the rendered report. They are still
    /// counted in the summary.
    pub only_dirty: bool,
}

/// Coordinates one fleet scan: owns the root workspace, the git query
/// client, the status parser, and the output writer.
pub struct Scanner {
    workspace: Workspace,
    git: GitClient,
    status_parser: StatusParser,
    options: ScanOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Scanner {
    pub fn new(
        path: &str,
        options: ScanOptions,
        writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("Directory {:?} not found", path))?;

        Ok(Scanner {
            workspace: Workspace::new(path.into_boxed_path()),
            git: GitClient::new(),
            status_parser: StatusParser::new()?,
            options,
            writer: RefCell::new(writer),
        })
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn git(&self) -> &GitClient {
        &self.git
    }

    pub fn status_parser(&self) -> &StatusParser {
        &self.status_parser
    }

    pub fn options(&self) -> ScanOptions {
        self.options
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
