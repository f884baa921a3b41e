//! Copying the specification, skill templates and scripts into a target.

use super::agents::Agent;
use super::data_dir::{DataDir, SPEC_FILE};
use crate::console::Reporter;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Directory under the install root holding the spec and scripts
pub const PROSE_DIR: &str = ".prose";

/// Per-step file counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallSummary {
    pub installed: usize,
    pub upgraded: usize,
    pub failed: usize,
}

impl InstallSummary {
    pub fn copied(&self) -> usize {
        self.installed + self.upgraded
    }

    pub fn add(&mut self, other: InstallSummary) {
        self.installed += other.installed;
        self.upgraded += other.upgraded;
        self.failed += other.failed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyAction {
    Installed,
    Upgraded,
}

impl CopyAction {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Installed => "Installed",
            Self::Upgraded => "Upgraded",
        }
    }
}

/// Copy one file, creating parent directories. Existing files are overwritten.
fn copy_file(src: &Path, dest: &Path) -> Result<CopyAction> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let action = if dest.exists() {
        CopyAction::Upgraded
    } else {
        CopyAction::Installed
    };

    fs::copy(src, dest)
        .with_context(|| format!("copying {} to {}", src.display(), dest.display()))?;
    Ok(action)
}

/// Mirror every file under `src_dir` into `dest_dir`, reporting each one as
/// `"<action> <label> → <path>"`.
fn copy_tree(
    src_dir: &Path,
    dest_dir: &Path,
    label: &str,
    reporter: &dyn Reporter,
) -> Result<InstallSummary> {
    let mut summary = InstallSummary::default();

    for entry in WalkDir::new(src_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", src_dir.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let rel = entry.path().strip_prefix(src_dir)?;
        let dest = dest_dir.join(rel);
        reporter.verbose(&format!("{} -> {}", entry.path().display(), dest.display()));

        match copy_file(entry.path(), &dest) {
            Ok(CopyAction::Installed) => {
                reporter.ok(&format!("Installed {} → {}", label, dest.display()));
                summary.installed += 1;
            }
            Ok(CopyAction::Upgraded) => {
                reporter.ok(&format!("Upgraded {} → {}", label, dest.display()));
                summary.upgraded += 1;
            }
            Err(e) => {
                reporter.err(&format!("Failed to install {} → {}: {:#}", label, dest.display(), e));
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Install (or upgrade) the language specification into `<target>/.prose/`.
pub fn install_spec(target: &Path, data: &DataDir, reporter: &dyn Reporter) -> Result<InstallSummary> {
    let src = data.spec_file();
    if !src.exists() {
        bail!("Specification source not found: {}", src.display());
    }

    let dest = target.join(PROSE_DIR).join(SPEC_FILE);
    let action = copy_file(&src, &dest)?;
    reporter.ok(&format!("{} specification → {}", action.as_str(), dest.display()));

    let mut summary = InstallSummary::default();
    match action {
        CopyAction::Installed => summary.installed += 1,
        CopyAction::Upgraded => summary.upgraded += 1,
    }
    Ok(summary)
}

/// Install the skill templates into the agent's skill directory.
pub fn install_skills(
    target: &Path,
    agent: Agent,
    data: &DataDir,
    reporter: &dyn Reporter,
) -> Result<InstallSummary> {
    let src_dir = data.skills_template_dir();
    if !src_dir.exists() {
        bail!("Skills template directory not found: {}", src_dir.display());
    }

    let dest_dir = target.join(agent.skill_path());
    let summary = copy_tree(&src_dir, &dest_dir, "skill", reporter)?;
    if summary.copied() == 0 && summary.failed == 0 {
        reporter.warn("No skill template files found to install.");
    }
    Ok(summary)
}

/// Install bundled scripts into `<target>/.prose/scripts/`.
///
/// A missing scripts directory is not an error; it is reported and skipped.
pub fn install_scripts(target: &Path, data: &DataDir, reporter: &dyn Reporter) -> Result<InstallSummary> {
    let src_dir = data.scripts_dir();
    if !src_dir.exists() {
        reporter.warn("Scripts source directory not found, skipping.");
        return Ok(InstallSummary::default());
    }

    let dest_dir = target.join(PROSE_DIR).join("scripts");
    let summary = copy_tree(&src_dir, &dest_dir, "script", reporter)?;
    if summary.copied() == 0 && summary.failed == 0 {
        reporter.warn("No script files found to install.");
    }
    Ok(summary)
}
