use itertools::Itertools;
use log::debug;
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    num::ParseIntError,
    path::Path,
};
use thiserror::Error;

/// Maximal width of the index lines written to ndx files
pub const NDX_LINE_WIDTH: usize = 60;

/// Mapping from group name to its atom indices
pub type IndexTable = HashMap<String, Vec<i64>>;

/// Errors related to reading and writing Gromacs index files
#[derive(Debug, Error)]
pub enum NdxError {
    #[error("group {0} not found")]
    NoGroup(String),

    #[error("malformed index '{token}' at line {line} in group {group}")]
    MalformedInteger {
        token: String,
        line: usize,
        group: String,
        #[source]
        source: ParseIntError,
    },

    #[error("error reading or writing ndx data")]
    Io(#[from] std::io::Error),

    #[error("error accessing ndx file {0}")]
    NdxIo(std::path::PathBuf, #[source] std::io::Error),
}

/// Parses a Gromacs index file.
///
/// Returns the index groups and the list of group names in the order
/// of their headers. A header that appears several times re-opens the same
/// group and is listed each time. Lines before the first header are ignored.
pub fn read_ndx(reader: impl BufRead) -> Result<(IndexTable, Vec<String>), NdxError> {
    let mut groups = IndexTable::new();
    let mut order = Vec::new();
    let mut current_group: Option<String> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;

        if line.contains('[') {
            let name = line.replace(['[', ']'], "").trim().to_owned();
            debug!("ndx group '{name}' at line {}", i + 1);
            // Existing list is kept, so that re-opened groups accumulate
            groups.entry(name.clone()).or_default();
            order.push(name.clone());
            current_group = Some(name);
        } else if let Some(group_name) = &current_group {
            let numbers = line
                .split_whitespace()
                .map(|s| {
                    s.parse::<i64>().map_err(|e| NdxError::MalformedInteger {
                        token: s.to_owned(),
                        line: i + 1,
                        group: group_name.clone(),
                        source: e,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            // Entry is always created together with the header
            if let Some(list) = groups.get_mut(group_name) {
                list.extend(numbers);
            }
        }
    }

    Ok((groups, order))
}

/// Writes index groups in Gromacs ndx format.
///
/// If `group_filter` is given only the listed groups are written in the
/// listed order. Names absent from `groups` are skipped silently.
/// Without a filter all groups are written sorted by name.
pub fn write_ndx<S: AsRef<str>>(
    groups: &IndexTable,
    mut writer: impl Write,
    group_filter: Option<&[S]>,
) -> Result<(), NdxError> {
    let names: Vec<&str> = match group_filter {
        Some(filter) => filter
            .iter()
            .map(|s| s.as_ref())
            .filter(|name| groups.contains_key(*name))
            .collect(),
        None => groups.keys().map(|s| s.as_str()).sorted().collect(),
    };

    for name in names {
        let indices = &groups[name];
        debug!("writing ndx group '{name}' with {} indices", indices.len());
        writeln!(writer, "[ {name} ]")?;
        for l in wrap_indices(indices, NDX_LINE_WIDTH) {
            writeln!(writer, "{l}")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Joins indices with spaces and splits the result into lines
/// not longer than `width`. Numbers are never split.
pub fn wrap_indices(indices: &[i64], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = String::new();
    for ind in indices {
        let tok = ind.to_string();
        if !cur.is_empty() && cur.len() + 1 + tok.len() > width {
            lines.push(std::mem::take(&mut cur));
        }
        if !cur.is_empty() {
            cur.push(' ');
        }
        cur.push_str(&tok);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

/// Representation of Gromacs index files
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NdxFile {
    groups: IndexTable,
    order: Vec<String>,
}

impl NdxFile {
    /// Creates a new NdxFile by parsing a Gromacs index file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NdxError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| NdxError::NdxIo(path.to_owned(), e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, NdxError> {
        let (groups, order) = read_ndx(reader)?;
        Ok(Self { groups, order })
    }

    /// Builds an index from groups and their order.
    /// Names in `order` without a group get an empty one.
    pub fn from_parts(mut groups: IndexTable, order: Vec<String>) -> Self {
        for name in &order {
            groups.entry(name.clone()).or_default();
        }
        Self { groups, order }
    }

    /// Get an index group by name
    pub fn get_group(&self, name: impl AsRef<str>) -> Result<&[i64], NdxError> {
        let gr = name.as_ref();
        self.groups
            .get(gr)
            .map(|v| v.as_slice())
            .ok_or_else(|| NdxError::NoGroup(gr.to_owned()))
    }

    /// Group names as they appear in file headers, including repeated ones
    pub fn group_order(&self) -> &[String] {
        &self.order
    }

    pub fn groups(&self) -> &IndexTable {
        &self.groups
    }

    /// Iterates over groups in file order, each distinct name once
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i64])> {
        self.order
            .iter()
            .unique()
            .map(|name| (name.as_str(), self.groups[name].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Writes the groups in file order
    pub fn write(&self, writer: impl Write) -> Result<(), NdxError> {
        let order = self.order.iter().unique().collect::<Vec<_>>();
        write_ndx(&self.groups, writer, Some(order.as_slice()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), NdxError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| NdxError::NdxIo(path.to_owned(), e))?;
        self.write(BufWriter::new(file))
    }
}

//############################################################
//#  Tests
//############################################################
