use std::collections::BTreeMap;

use crate::raster::LabelGrid;

/// Pixel count per component label, in ascending label order.
pub type ComponentTable = BTreeMap<u32, usize>;

/// Size of a single connected component.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentStats {
    /// Label assigned to the component by the labeler.
    pub label: u32,
    /// Number of pixels in the component.
    pub pixels: usize,
}

/// Components ordered by descending pixel count, ties by ascending label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedComponents {
    entries: Vec<ComponentStats>,
}

impl RankedComponents {
    pub fn entries(&self) -> &[ComponentStats] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentStats> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels of the `n` largest components. Clamps to the number available.
    pub fn top_labels(&self, n: usize) -> Vec<u32> {
        self.entries.iter().take(n).map(|c| c.label).collect()
    }
}

impl<'a> IntoIterator for &'a RankedComponents {
    type Item = &'a ComponentStats;
    type IntoIter = std::slice::Iter<'a, ComponentStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count the pixels of every nonzero label in a single scan of the grid.
pub fn tabulate(grid: &LabelGrid) -> ComponentTable {
    let mut table = ComponentTable::new();
    for &label in grid.iter().filter(|&&l| l != 0) {
        *table.entry(label).or_insert(0) += 1;
    }
    table
}

/// Order a component table by descending pixel count.
///
/// The sort is stable and the table iterates in ascending label order, so
/// components of equal size keep their discovery order.
pub fn rank_table(table: &ComponentTable) -> RankedComponents {
    let mut entries: Vec<ComponentStats> = table
        .iter()
        .map(|(&label, &pixels)| ComponentStats { label, pixels })
        .collect();
    entries.sort_by(|a, b| b.pixels.cmp(&a.pixels));
    RankedComponents { entries }
}

/// Tabulate and rank the components of a label grid.
pub fn rank(grid: &LabelGrid) -> RankedComponents {
    rank_table(&tabulate(grid))
}
