//! Install scopes and the agents skills can be installed for.

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where files are installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Current working directory
    Local,
    /// Home directory
    Global,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Global => "global",
        }
    }

    /// Root directory files are installed under
    pub fn target_root(&self) -> Result<PathBuf> {
        match self {
            Self::Local => Ok(std::env::current_dir()?),
            Self::Global => {
                dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))
            }
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// AI agent whose skill directory receives the templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Antigravity,
    Claude,
    Codex,
    Copilot,
    Gemini,
}

impl Agent {
    /// All agents, sorted by name
    pub const ALL: [Agent; 5] = [
        Agent::Antigravity,
        Agent::Claude,
        Agent::Codex,
        Agent::Copilot,
        Agent::Gemini,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Antigravity => "antigravity",
            Self::Claude => "claude",
            Self::Codex => "codex",
            Self::Copilot => "copilot",
            Self::Gemini => "gemini",
        }
    }

    /// Skill directory relative to the install root
    pub fn skill_path(&self) -> &'static str {
        match self {
            Self::Antigravity => ".agent/skills",
            Self::Claude => ".claude/skills",
            Self::Codex => ".codex/skills",
            Self::Copilot => ".github/instructions",
            Self::Gemini => ".gemini/skills",
        }
    }
}

impl std::fmt::Display for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
