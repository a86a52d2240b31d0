use std::collections::VecDeque;

use ndarray::Array2;
use tracing::debug;

use crate::consts::LABEL_PROGRESS_CHECKPOINTS;
use crate::error::{PavemapError, Result};
use crate::pipeline::{NoOpReporter, PipelineStage, ProgressReporter};
use crate::raster::{BinaryMask, LabelGrid};

/// Offsets of the 8 neighbours of a cell, as (d_row, d_col).
const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Label the 8-connected foreground components of `mask`.
///
/// Returns the label grid and the number of components found. See
/// [`label_components_reported`].
pub fn label_components(mask: &BinaryMask) -> Result<(LabelGrid, u32)> {
    label_components_reported(mask, &NoOpReporter)
}

/// Label the 8-connected foreground components of `mask`, reporting row
/// progress to `reporter`.
///
/// Cells are scanned in row-major order. Every unlabeled foreground cell
/// seeds a new component, which is flood-filled breadth-first from a FIFO
/// queue. Labels start at 1 and increase in discovery order with no gaps;
/// background cells stay 0.
///
/// A cell is labeled before it is enqueued, so each cell enters the queue at
/// most once and the whole pass is O(h * w).
pub fn label_components_reported(
    mask: &BinaryMask,
    reporter: &dyn ProgressReporter,
) -> Result<(LabelGrid, u32)> {
    let (h, w) = mask.dim();
    if h == 0 || w == 0 {
        return Err(PavemapError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let mut labels = Array2::<u32>::zeros((h, w));
    let mut queue: VecDeque<(usize, usize)> = VecDeque::new();
    let mut next_label: u32 = 0;

    let rows_per_checkpoint = h.div_ceil(LABEL_PROGRESS_CHECKPOINTS);
    reporter.begin_stage(PipelineStage::Labeling, Some(h));

    for row in 0..h {
        for col in 0..w {
            if !mask[[row, col]] || labels[[row, col]] != 0 {
                continue;
            }

            next_label += 1;
            labels[[row, col]] = next_label;
            queue.push_back((row, col));

            while let Some((r, c)) = queue.pop_front() {
                for &(dr, dc) in &NEIGHBOURS_8 {
                    let Some(nr) = r.checked_add_signed(dr) else {
                        continue;
                    };
                    let Some(nc) = c.checked_add_signed(dc) else {
                        continue;
                    };
                    if nr >= h || nc >= w {
                        continue;
                    }
                    if mask[[nr, nc]] && labels[[nr, nc]] == 0 {
                        labels[[nr, nc]] = next_label;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }

        let rows_done = row + 1;
        if rows_done % rows_per_checkpoint == 0 || rows_done == h {
            reporter.advance(rows_done);
        }
    }

    reporter.finish_stage();
    debug!(height = h, width = w, components = next_label, "Labeling complete");
    Ok((labels, next_label))
}
