//! Compress-and-merge of a single line.
//!
//! A line is read in the direction of travel: index 0 is the edge the tiles
//! slide toward. The transform never needs to know which direction that is.

/// Result of merging one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineMerge {
    /// New cell values, same length as the input.
    pub cells: Vec<u64>,
    /// Sum of every tile produced by a merge.
    pub score: u64,
}

/// Slide all tiles toward index 0 and merge equal neighbours.
///
/// Zeros are dropped first. The remaining tiles are scanned once from the
/// front: an equal pair becomes one tile of twice the value and the scan
/// skips past both, so a merged tile is never merged again in the same
/// pass. The result is padded with zeros back to the input length.
///
/// ```
/// use rust_2048::rules::merge_line;
///
/// let merge = merge_line(&[2, 2, 2, 2]);
/// assert_eq!(merge.cells, vec![4, 4, 0, 0]);
/// assert_eq!(merge.score, 8);
/// ```
#[must_use]
pub fn merge_line(line: &[u64]) -> LineMerge {
    let tiles: Vec<u64> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut cells = Vec::with_capacity(line.len());
    let mut score = 0;

    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let merged = tiles[i] * 2;
            cells.push(merged);
            score += merged;
            i += 2;
        } else {
            cells.push(tiles[i]);
            i += 1;
        }
    }

    cells.resize(line.len(), 0);
    LineMerge { cells, score }
}
