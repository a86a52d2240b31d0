use std::collections::HashSet;
use std::fmt::Write;

use crate::detection::{ComponentTable, RankedComponents};
use crate::raster::{BinaryMask, LabelGrid};

/// Render the ranked components, one line each, followed by the total.
pub fn render_report(ranked: &RankedComponents) -> String {
    render_lines(ranked.iter().map(|c| (c.label, c.pixels)), ranked.len())
}

/// Render a component table in label (discovery) order, followed by the total.
pub fn render_table(table: &ComponentTable) -> String {
    render_lines(table.iter().map(|(&l, &p)| (l, p)), table.len())
}

fn render_lines(entries: impl Iterator<Item = (u32, usize)>, total: usize) -> String {
    let mut out = String::new();
    for (label, pixels) in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "Connected Component {label}, number of pixels = {pixels}");
    }
    let _ = write!(out, "Total number of connected components = {total}");
    out
}

/// Mask of the cells belonging to the `top_n` largest components.
///
/// The labels are taken from `ranked`, so this works for any labeling.
/// `top_n` larger than the number of components selects all of them.
pub fn visualize(grid: &LabelGrid, ranked: &RankedComponents, top_n: usize) -> BinaryMask {
    let keep: HashSet<u32> = ranked.top_labels(top_n).into_iter().collect();
    grid.mapv(|label| label != 0 && keep.contains(&label))
}
