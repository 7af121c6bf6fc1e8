//! # Covering zeros with lines
//!
//! The zeros of a reduced cost matrix form a bipartite graph between rows and columns. A minimum
//! set of rows and columns covering all zeros has as many lines as a maximum matching of that
//! graph has edges, and such a cover can be read off a maximum matching by marking rows and
//! columns along alternating paths.

/// Positions of the zeros of a square matrix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Zeros {
    entries: Vec<Vec<bool>>,
}

impl Zeros {
    pub(crate) fn new(entries: Vec<Vec<bool>>) -> Self {
        debug_assert!(entries.iter().all(|row| row.len() == entries.len()));

        Self { entries }
    }

    pub(crate) fn size(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_zero(&self, row: usize, column: usize) -> bool {
        self.entries[row][column]
    }
}

/// Rows and columns whose lines together cross out every zero.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Cover {
    pub(crate) rows: Vec<bool>,
    pub(crate) columns: Vec<bool>,
}

impl Cover {
    /// Number of lines.
    pub(crate) fn size(&self) -> usize {
        self.rows.iter().chain(&self.columns).filter(|&&covered| covered).count()
    }

    pub(crate) fn is_covered(&self, row: usize, column: usize) -> bool {
        self.rows[row] || self.columns[column]
    }
}

/// Zeros that are assigned to each other, at most one per row and one per column.
#[derive(Clone, Debug)]
struct Matching {
    column_of_row: Vec<Option<usize>>,
    row_of_column: Vec<Option<usize>>,
}

impl Matching {
    fn new(size: usize) -> Self {
        Self {
            column_of_row: vec![None; size],
            row_of_column: vec![None; size],
        }
    }

    fn assign(&mut self, row: usize, column: usize) {
        self.column_of_row[row] = Some(column);
        self.row_of_column[column] = Some(row);
    }

    fn size(&self) -> usize {
        self.column_of_row.iter().flatten().count()
    }

    /// Zeros in a row whose row and column are both unassigned.
    fn free_zeros_in_row(&self, zeros: &Zeros, row: usize) -> Vec<usize> {
        if self.column_of_row[row].is_some() {
            return Vec::new();
        }
        (0..zeros.size())
            .filter(|&column| zeros.is_zero(row, column) && self.row_of_column[column].is_none())
            .collect()
    }

    /// Zeros in a column whose row and column are both unassigned.
    fn free_zeros_in_column(&self, zeros: &Zeros, column: usize) -> Vec<usize> {
        if self.row_of_column[column].is_some() {
            return Vec::new();
        }
        (0..zeros.size())
            .filter(|&row| zeros.is_zero(row, column) && self.column_of_row[row].is_none())
            .collect()
    }

    /// Try to assign `row` by reassigning along an alternating path.
    ///
    /// # Arguments
    ///
    /// * `available`: Columns that may be used.
    /// * `visited`: Columns already tried in this search.
    fn augment(&mut self, zeros: &Zeros, row: usize, available: &[bool], visited: &mut [bool]) -> bool {
        for column in 0..zeros.size() {
            if !zeros.is_zero(row, column) || !available[column] || visited[column] {
                continue;
            }
            visited[column] = true;

            let reassigned = match self.row_of_column[column] {
                None => true,
                Some(other) => self.augment(zeros, other, available, visited),
            };
            if reassigned {
                self.assign(row, column);
                return true;
            }
        }

        false
    }

    /// Grow the matching until it is maximum among the available rows and columns.
    fn maximize(&mut self, zeros: &Zeros, rows: &[bool], columns: &[bool]) {
        for row in 0..zeros.size() {
            if rows[row] && self.column_of_row[row].is_none() {
                let mut visited = vec![false; zeros.size()];
                self.augment(zeros, row, columns, &mut visited);
            }
        }
    }
}

/// A cover with the least possible number of lines.
///
/// Zeros are first assigned greedily: rows and then columns with exactly one free zero, repeated
/// while that makes progress, followed by the first free zero of every remaining row. The greedy
/// assignment is then extended along alternating paths to a maximum one. Finally, unassigned rows
/// are marked, columns with a zero in a marked row are marked and rows assigned in a marked column
/// are marked, until nothing changes. The unmarked rows and the marked columns form the cover.
pub(crate) fn find_minimum_cover(zeros: &Zeros) -> Cover {
    let size = zeros.size();
    let mut matching = Matching::new(size);

    for _ in 0..size {
        let mut modifications = 0;
        for row in 0..size {
            if let [column] = matching.free_zeros_in_row(zeros, row)[..] {
                matching.assign(row, column);
                modifications += 1;
            }
        }
        for column in 0..size {
            if let [row] = matching.free_zeros_in_column(zeros, column)[..] {
                matching.assign(row, column);
                modifications += 1;
            }
        }

        if modifications == 0 {
            break;
        }
    }
    for row in 0..size {
        if let Some(&column) = matching.free_zeros_in_row(zeros, row).first() {
            matching.assign(row, column);
        }
    }

    let all = vec![true; size];
    matching.maximize(zeros, &all, &all);

    let mut marked_rows = matching.column_of_row.iter().map(Option::is_none).collect::<Vec<_>>();
    let mut marked_columns = vec![false; size];
    loop {
        let mut modifications = 0;
        for column in 0..size {
            if !marked_columns[column] && (0..size).any(|row| marked_rows[row] && zeros.is_zero(row, column)) {
                marked_columns[column] = true;
                modifications += 1;
            }
        }
        for row in 0..size {
            let assigned_in_marked_column = matching.column_of_row[row].is_some_and(|column| marked_columns[column]);
            if !marked_rows[row] && assigned_in_marked_column {
                marked_rows[row] = true;
                modifications += 1;
            }
        }

        if modifications == 0 {
            break;
        }
    }

    let cover = Cover {
        rows: marked_rows.into_iter().map(|marked| !marked).collect(),
        columns: marked_columns,
    };
    debug_assert_eq!(cover.size(), matching.size());
    cover
}

/// Whether every available row can be assigned to a distinct available column through a zero.
pub(crate) fn has_perfect_matching(zeros: &Zeros, rows: &[bool], columns: &[bool]) -> bool {
    let mut matching = Matching::new(zeros.size());
    matching.maximize(zeros, rows, columns);

    matching.size() == rows.iter().filter(|&&available| available).count()
}

#[cfg(test)]
mod test {
    use crate::algorithm::assignment::cover::{Cover, find_minimum_cover, has_perfect_matching, Zeros};

    fn zeros(pattern: &[&str]) -> Zeros {
        Zeros::new(pattern.iter().map(|row| row.chars().map(|c| c == '0').collect()).collect())
    }

    fn assert_covers(zeros: &Zeros, cover: &Cover) {
        for row in 0..zeros.size() {
            for column in 0..zeros.size() {
                if zeros.is_zero(row, column) {
                    assert!(cover.is_covered(row, column));
                }
            }
        }
    }

    #[test]
    fn diagonal() {
        let zeros = zeros(&["0xx", "x0x", "xx0"]);
        let cover = find_minimum_cover(&zeros);
        assert_eq!(cover.size(), 3);
        assert_covers(&zeros, &cover);
    }

    #[test]
    fn greedy_is_not_enough() {
        // Assigning (0, 0) first blocks row 1, the maximum matching has size 2 anyway.
        let zeros = zeros(&["00x", "0xx", "xxx"]);
        let cover = find_minimum_cover(&zeros);
        assert_eq!(cover.size(), 2);
        assert_covers(&zeros, &cover);
    }

    #[test]
    fn single_line() {
        let zeros = zeros(&["000", "xxx", "xxx"]);
        let cover = find_minimum_cover(&zeros);
        assert_eq!(cover, Cover { rows: vec![true, false, false], columns: vec![false; 3] });
    }

    #[test]
    fn needs_augmenting_path() {
        let zeros = zeros(&["00xx", "0xxx", "x00x", "xx00"]);
        let cover = find_minimum_cover(&zeros);
        assert_eq!(cover.size(), 4);
        assert_covers(&zeros, &cover);
    }

    #[test]
    fn perfect_matching() {
        let zeros = zeros(&["00", "0x"]);
        assert!(has_perfect_matching(&zeros, &[true, true], &[true, true]));
        assert!(!has_perfect_matching(&zeros, &[true, true], &[false, true]));
        assert!(has_perfect_matching(&zeros, &[true, false], &[false, true]));
    }
}
