//! Reading and writing of Gromacs index (ndx) files and their exchange
//! with the named atom selections of molecular visualizers.

pub mod commands;
pub mod host;
pub mod host_options;
pub mod ndx_file;

pub mod prelude {
    pub use crate::commands::*;
    pub use crate::host::*;
    pub use crate::host_options::*;
    pub use crate::ndx_file::*;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn greeting(tool: &str) {
    use comfy_table::modifiers::UTF8_ROUND_CORNERS;
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Attribute, Cell, Table};

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .add_row(vec![
            Cell::new("molndx - Gromacs index files for molecular visualizers")
                .add_attributes(vec![Attribute::Bold]),
        ])
        .add_row(vec![env!("CARGO_PKG_AUTHORS")])
        .add_row(vec![format!("molndx version: {VERSION}")])
        .add_row(vec![format!("Tool: {tool}")]);
    println!("{table}");
}
