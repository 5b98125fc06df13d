//! Immutable captured board configurations.
//!
//! A snapshot records which piece instance owns each filled cell at the
//! moment a search branch reaches volume zero. Everything the post-filter
//! pipeline needs is derived once at capture time: the distinct placed
//! pieces, the sorted label multiset, and whether the configuration is
//! separable along some axis.

use crate::pieces::Piece;

/// An immutable recorded solution configuration.
#[derive(Debug, Clone)]
pub struct Snapshot {
    len_z: usize,
    len_y: usize,
    len_x: usize,
    /// Per-cell slot into `pieces`, scan order `(z, y, x)`; `None` outside
    /// the filled region.
    cells: Vec<Option<u16>>,
    /// Distinct placed piece instances, in first-seen scan order.
    pieces: Vec<Piece>,
    /// Sorted label multiset of `pieces`.
    labels: Vec<String>,
    separable: bool,
}

impl Snapshot {
    pub(crate) fn new(
        len_z: usize,
        len_y: usize,
        len_x: usize,
        cells: Vec<Option<u16>>,
        pieces: Vec<Piece>,
    ) -> Self {
        let mut labels: Vec<String> = pieces.iter().map(|piece| piece.label().to_owned()).collect();
        labels.sort();
        let separable = compute_separable(len_z, len_y, len_x, &cells, pieces.len());
        Self {
            len_z,
            len_y,
            len_x,
            cells,
            pieces,
            labels,
            separable,
        }
    }

    /// Distinct placed pieces, first-seen order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Sorted label multiset.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the filled region splits along a single axis into two
    /// independently filled slabs with no piece straddling the cut.
    pub fn is_separable(&self) -> bool {
        self.separable
    }

    /// Order-insensitive equality on the label multiset. This is the
    /// grouping identity for solutions; cell-level layout is ignored.
    pub fn has_same_labels(&self, labels: &[String]) -> bool {
        self.labels == labels
    }

    /// The label multiset with one occurrence of `label` replaced by the
    /// labels of `compound`, sorted. Used to detect solutions that only
    /// differ from this one by breaking a piece into an equivalent
    /// combination of smaller ones.
    pub fn exchanged_labels(&self, label: &str, compound: &Snapshot) -> Vec<String> {
        let mut exchanged = self.labels.clone();
        if let Some(at) = exchanged.iter().position(|own| own == label) {
            exchanged.remove(at);
        }
        exchanged.extend(compound.labels.iter().cloned());
        exchanged.sort();
        exchanged
    }

    /// One-line label-multiset summary, e.g. `"2 rS, yT"`. The count is
    /// omitted when a label occurs exactly once.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut at = 0;
        while at < self.labels.len() {
            let label = &self.labels[at];
            let count = self.labels[at..].iter().take_while(|own| *own == label).count();
            if count == 1 {
                parts.push(label.clone());
            } else {
                parts.push(format!("{count} {label}"));
            }
            at += count;
        }
        parts.join(", ")
    }

    /// Multi-line per-layer grid dump annotated with piece labels.
    ///
    /// One block per y layer, rows along z, columns along x; unfilled cells
    /// print as dots. Diagnostic output for the driver, not part of the
    /// solving pipeline.
    pub fn render(&self) -> String {
        let width = self
            .pieces
            .iter()
            .map(|piece| piece.label().len())
            .max()
            .unwrap_or(1);

        let mut output = String::new();
        for y in 0..self.len_y {
            for z in 0..self.len_z {
                for x in 0..self.len_x {
                    let cell = self.cells[(z * self.len_y + y) * self.len_x + x];
                    match cell {
                        Some(slot) => {
                            let label = self.pieces[slot as usize].label();
                            output.push_str(&format!("{label:<width$} "));
                        }
                        None => output.push_str(&format!("{:<width$} ", ".")),
                    }
                }
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }
}

/// Decides axis-separability from the per-slot extents.
///
/// The configuration is separable when some cut plane perpendicular to one
/// axis leaves filled cells on both sides and no piece instance crosses it.
fn compute_separable(
    len_z: usize,
    len_y: usize,
    len_x: usize,
    cells: &[Option<u16>],
    piece_count: usize,
) -> bool {
    // min/max occupied coordinate per piece instance, per axis (z, y, x)
    let mut extents = vec![[(i32::MAX, i32::MIN); 3]; piece_count];
    for z in 0..len_z as i32 {
        for y in 0..len_y as i32 {
            for x in 0..len_x as i32 {
                let offset = ((z as usize) * len_y + y as usize) * len_x + x as usize;
                if let Some(slot) = cells[offset] {
                    let extent = &mut extents[slot as usize];
                    for (axis, value) in [(0, z), (1, y), (2, x)] {
                        extent[axis].0 = extent[axis].0.min(value);
                        extent[axis].1 = extent[axis].1.max(value);
                    }
                }
            }
        }
    }

    for (axis, len) in [(0, len_z), (1, len_y), (2, len_x)] {
        for cut in 1..len as i32 {
            let mut below = false;
            let mut above = false;
            let mut straddles = false;
            for extent in &extents {
                let (min, max) = extent[axis];
                if max < cut {
                    below = true;
                } else if min >= cut {
                    above = true;
                } else {
                    straddles = true;
                    break;
                }
            }
            if !straddles && below && above {
                return true;
            }
        }
    }
    false
}
