//! Installs the prose-lang specification, agent skills and helper scripts
//! into a project (local scope) or the home directory (global scope).

pub mod agents;
pub mod copy;
pub mod data_dir;

pub use agents::{Agent, Scope};
pub use copy::{install_scripts, install_skills, install_spec, InstallSummary, PROSE_DIR};
pub use data_dir::DataDir;

use crate::console::{Reporter, BOLD, RESET};
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Everything one install run needs
#[derive(Debug, Clone)]
pub struct InstallOptions {
    pub scope: Scope,
    pub agent: Agent,
    pub target: PathBuf,
    pub data: DataDir,
}

impl InstallOptions {
    /// Options for `scope`, targeting the scope's root directory.
    pub fn for_scope(scope: Scope, agent: Agent, data: DataDir) -> Result<Self> {
        Ok(Self {
            scope,
            agent,
            target: scope.target_root()?,
            data,
        })
    }
}

/// Run the three install steps in order: specification, skills, scripts.
///
/// A missing specification or skills directory aborts the run. Individual
/// file failures are reported as they happen and fail the run at the end.
pub fn run_install(options: &InstallOptions, reporter: &dyn Reporter) -> Result<InstallSummary> {
    reporter.verbose(&format!("data directory: {}", options.data.root().display()));

    let mut total = InstallSummary::default();

    reporter.info(&format!("{}Installing specification …{}", BOLD, RESET));
    total.add(install_spec(&options.target, &options.data, reporter)?);

    reporter.info(&format!(
        "{}Installing {} agent skills …{}",
        BOLD, options.agent, RESET
    ));
    total.add(install_skills(
        &options.target,
        options.agent,
        &options.data,
        reporter,
    )?);

    reporter.info(&format!("{}Installing scripts …{}", BOLD, RESET));
    total.add(install_scripts(&options.target, &options.data, reporter)?);

    if total.failed > 0 {
        bail!("{} file(s) failed to install", total.failed);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Level, RecordingReporter};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_install_all_steps() {
        let data = TempDir::new().unwrap();
        fs::write(data.path().join("specification.md"), "# Spec\n").unwrap();
        fs::create_dir_all(data.path().join("skills-template/prose-lang")).unwrap();
        fs::write(data.path().join("skills-template/prose-lang/SKILL.md"), "skill").unwrap();
        fs::create_dir_all(data.path().join("scripts")).unwrap();
        fs::write(data.path().join("scripts/check_sync.sh"), "#!/bin/sh\n").unwrap();

        let target = TempDir::new().unwrap();
        let options = InstallOptions {
            scope: Scope::Local,
            agent: Agent::Claude,
            target: target.path().to_path_buf(),
            data: DataDir::new(data.path()),
        };

        let summary = run_install(&options, &RecordingReporter::new()).unwrap();
        assert_eq!(summary.installed, 3);
        assert!(target.path().join(".prose/specification.md").is_file());
        assert!(target
            .path()
            .join(".claude/skills/prose-lang/SKILL.md")
            .is_file());
        assert!(target.path().join(".prose/scripts/check_sync.sh").is_file());

        let again = run_install(&options, &RecordingReporter::new()).unwrap();
        assert_eq!(again.upgraded, 3);
        assert_eq!(again.installed, 0);
    }

    #[test]
    fn test_run_install_fails_after_file_error() {
        let data = TempDir::new().unwrap();
        fs::write(data.path().join("specification.md"), "# Spec\n").unwrap();
        fs::create_dir_all(data.path().join("skills-template/prose-lang")).unwrap();
        fs::write(data.path().join("skills-template/prose-lang/SKILL.md"), "skill").unwrap();
        fs::create_dir_all(data.path().join("scripts")).unwrap();
        fs::write(data.path().join("scripts/check_sync.sh"), "#!/bin/sh\n").unwrap();

        let target = TempDir::new().unwrap();
        fs::create_dir_all(target.path().join(".gemini/skills/prose-lang/SKILL.md")).unwrap();
        let options = InstallOptions {
            scope: Scope::Local,
            agent: Agent::Gemini,
            target: target.path().to_path_buf(),
            data: DataDir::new(data.path()),
        };
        let reporter = RecordingReporter::new();

        let err = run_install(&options, &reporter).unwrap_err();
        assert_eq!(err.to_string(), "1 file(s) failed to install");
        assert_eq!(reporter.at(Level::Err).len(), 1);
        // Later steps still ran.
        assert!(target.path().join(".prose/specification.md").is_file());
        assert!(target.path().join(".prose/scripts/check_sync.sh").is_file());
    }

    #[test]
    fn test_run_install_stops_on_missing_spec() {
        let data = TempDir::new().unwrap();
        fs::create_dir_all(data.path().join("skills-template")).unwrap();
        let target = TempDir::new().unwrap();
        let options = InstallOptions {
            scope: Scope::Local,
            agent: Agent::Codex,
            target: target.path().to_path_buf(),
            data: DataDir::new(data.path()),
        };

        assert!(run_install(&options, &RecordingReporter::new()).is_err());
        assert!(!target.path().join(".codex").exists());
    }
}
