use crate::prelude::*;
use std::path::Path;

/// Commands exposed to the selection host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Create selections from an index file
    NdxLoad,
    /// Save all selections to an index file
    NdxSave,
}

/// Result of running a host command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    Loaded(LoadReport),
    Saved(usize),
}

impl HostCommand {
    pub const ALL: [HostCommand; 2] = [HostCommand::NdxLoad, HostCommand::NdxSave];

    /// Name under which the command is registered in the host
    pub fn name(&self) -> &'static str {
        match self {
            Self::NdxLoad => "ndx_load",
            Self::NdxSave => "ndx_save",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn run(
        &self,
        host: &mut impl SelectionHost,
        path: impl AsRef<Path>,
        opts: &HostOptions,
    ) -> Result<CommandOutcome, HostError> {
        match self {
            Self::NdxLoad => Ok(CommandOutcome::Loaded(load_index_file(host, path, opts)?)),
            Self::NdxSave => Ok(CommandOutcome::Saved(save_index_file(&*host, path, opts)?)),
        }
    }
}

/// Runs host command by its registered name
pub fn run_command(
    name: &str,
    host: &mut impl SelectionHost,
    path: impl AsRef<Path>,
    opts: &HostOptions,
) -> Result<CommandOutcome, HostError> {
    HostCommand::from_name(name)
        .ok_or_else(|| HostError::UnknownCommand(name.to_owned()))?
        .run(host, path, opts)
}
