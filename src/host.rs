use crate::prelude::*;
use itertools::Itertools;
use sorted_vec::SortedSet;
use std::{collections::HashMap, path::Path};
use thiserror::Error;

#[cfg(not(test))]
use log::{info, warn}; // Use log crate when building application

#[cfg(test)]
use std::{println as info, println as warn};

//############################################################
//#  Selection host interface
//############################################################

/// How the indices passed to [SelectionHost::select] are combined
/// with an existing selection of the same name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Selection is created anew from the given indices
    Replace,
    /// Indices are added to the existing selection
    Extend,
}

/// Program that keeps named atom selections,
/// typically a molecular visualizer.
pub trait SelectionHost {
    fn select(&mut self, name: &str, indices: &[i64], mode: SelectMode) -> Result<(), HostError>;

    /// Names of all selections known to the host
    fn selection_names(&self) -> Result<Vec<String>, HostError>;

    fn selection_indices(&self, name: &str) -> Result<Vec<i64>, HostError>;

    /// Resets the active (implicit) selection of the host
    fn clear_active(&mut self) -> Result<(), HostError>;
}

#[derive(Debug, Error)]
pub enum HostError {
    #[error("selection '{0}' does not exist")]
    UnknownSelection(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("selection host failed: {0}")]
    Backend(String),

    #[error(transparent)]
    Ndx(#[from] NdxError),
}

/// Converts a group name to a name acceptable for host selections.
/// `&` and `|` are reserved in selection expressions.
pub fn selection_name(group: &str) -> String {
    group.replace('&', "_and_").replace('|', "_or_")
}

//############################################################
//#  Loading and saving
//############################################################

/// Summary of loading index groups into the host
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    /// Names of created selections in the order of creation
    pub selections: Vec<String>,
    /// Groups that were not loaded because they are empty
    pub skipped: Vec<String>,
    /// Total number of selection calls issued to the host
    pub host_calls: usize,
}

/// Number of host calls needed to load a group of `n` indices
pub fn host_calls_for(n: usize, opts: &HostOptions) -> usize {
    n.div_ceil(opts.chunk_size.max(1))
}

/// Creates host selections from index groups.
///
/// Groups are loaded in the given order, each distinct name once.
/// Large groups are passed to the host in chunks of `opts.chunk_size`.
/// If the host fails, selections created before the failure are kept
/// and the active selection is still cleared.
pub fn load_groups<S: AsRef<str>>(
    host: &mut impl SelectionHost,
    groups: &IndexTable,
    order: &[S],
    opts: &HostOptions,
) -> Result<LoadReport, HostError> {
    let mut report = LoadReport::default();
    let res = push_groups(host, groups, order, opts, &mut report);
    host.clear_active()?;
    res.map(|_| report)
}

fn push_groups<S: AsRef<str>>(
    host: &mut impl SelectionHost,
    groups: &IndexTable,
    order: &[S],
    opts: &HostOptions,
    report: &mut LoadReport,
) -> Result<(), HostError> {
    for name in order.iter().map(|s| s.as_ref()).unique() {
        let Some(content) = groups.get(name) else {
            continue;
        };
        let sel_name = selection_name(name);
        if content.is_empty() {
            warn!("Group {name} is empty");
            report.skipped.push(name.to_owned());
            continue;
        }

        info!("Selection of {sel_name}");
        for (i, chunk) in content.chunks(opts.chunk_size.max(1)).enumerate() {
            let mode = if i == 0 {
                SelectMode::Replace
            } else {
                SelectMode::Extend
            };
            host.select(&sel_name, chunk, mode)?;
            report.host_calls += 1;
        }
        report.selections.push(sel_name);
    }
    Ok(())
}

/// Reads an index file and creates host selections from its groups
pub fn load_index_file(
    host: &mut impl SelectionHost,
    path: impl AsRef<Path>,
    opts: &HostOptions,
) -> Result<LoadReport, HostError> {
    let path = path.as_ref();
    let ndx = NdxFile::open(path)?;
    let report = load_groups(host, ndx.groups(), ndx.group_order(), opts)?;
    info!("Loading of {} done", path.display());
    Ok(report)
}

/// Collects all host selections as index groups.
///
/// The implicit selection of the host is dropped if it is empty.
pub fn collect_groups(
    host: &impl SelectionHost,
    opts: &HostOptions,
) -> Result<(IndexTable, Vec<String>), HostError> {
    let mut groups = IndexTable::new();
    let mut names = Vec::new();
    for name in host.selection_names()? {
        let indices = host.selection_indices(&name)?;
        if name == opts.implicit_selection && indices.is_empty() {
            continue;
        }
        groups.insert(name.clone(), indices);
        names.push(name);
    }
    Ok((groups, names))
}

/// Writes all host selections to an index file.
/// Returns the number of written groups.
pub fn save_index_file(
    host: &impl SelectionHost,
    path: impl AsRef<Path>,
    opts: &HostOptions,
) -> Result<usize, HostError> {
    let path = path.as_ref();
    let (groups, names) = collect_groups(host, opts)?;
    NdxFile::from_parts(groups, names.clone()).save(path)?;
    info!("{} written with {} groups in it", path.display(), names.len());
    Ok(names.len())
}

//############################################################
//#  In-memory host
//############################################################

/// Selection host keeping selections in memory.
///
/// Selections are sets of indices, so the order and duplicates of
/// the loaded groups are not preserved.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    names: Vec<String>,
    selections: HashMap<String, SortedSet<i64>>,
    implicit: String,
}

impl MemoryHost {
    pub fn new(opts: &HostOptions) -> Self {
        Self {
            names: Vec::new(),
            selections: HashMap::new(),
            implicit: opts.implicit_selection.clone(),
        }
    }

    pub fn remove(&mut self, name: &str) -> Result<(), HostError> {
        self.selections
            .remove(name)
            .ok_or_else(|| HostError::UnknownSelection(name.to_owned()))?;
        self.names.retain(|n| n != name);
        Ok(())
    }

    fn set(&mut self, name: &str, index: SortedSet<i64>) {
        if !self.selections.contains_key(name) {
            self.names.push(name.to_owned());
        }
        self.selections.insert(name.to_owned(), index);
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new(&HostOptions::default())
    }
}

impl SelectionHost for MemoryHost {
    fn select(&mut self, name: &str, indices: &[i64], mode: SelectMode) -> Result<(), HostError> {
        if name.is_empty() || name.contains(['&', '|']) {
            return Err(HostError::Backend(format!("invalid selection name '{name}'")));
        }
        let index = match (mode, self.selections.get(name)) {
            (SelectMode::Extend, Some(cur)) => {
                SortedSet::from_unsorted(cur.iter().chain(indices).copied().collect())
            }
            _ => SortedSet::from_unsorted(indices.to_vec()),
        };
        self.set(name, index);
        Ok(())
    }

    fn selection_names(&self) -> Result<Vec<String>, HostError> {
        Ok(self.names.clone())
    }

    fn selection_indices(&self, name: &str) -> Result<Vec<i64>, HostError> {
        self.selections
            .get(name)
            .map(|s| s.to_vec())
            .ok_or_else(|| HostError::UnknownSelection(name.to_owned()))
    }

    fn clear_active(&mut self) -> Result<(), HostError> {
        let implicit = self.implicit.clone();
        self.set(&implicit, SortedSet::new());
        Ok(())
    }
}

//############################################################
//#  Tests
//############################################################
