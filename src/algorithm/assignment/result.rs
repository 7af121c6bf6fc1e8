//! # Reading an assignment off a reduced matrix
use crate::algorithm::assignment::cover::{has_perfect_matching, Zeros};
use crate::error::{Error, Result};

/// Select one zero in every row and column.
///
/// Columns and then rows with a single free zero are assigned first. When there are none, the
/// first free zero is taken, scanning column by column and row by row within a column, that still
/// allows all remaining rows to be assigned.
///
/// # Return value
///
/// `(row, column)` pairs, sorted by row.
///
/// # Errors
///
/// `IllegalState` if the zeros don't admit a perfect assignment.
pub(crate) fn select_assignment(zeros: &Zeros) -> Result<Vec<(usize, usize)>> {
    let size = zeros.size();
    let mut free_rows = vec![true; size];
    let mut free_columns = vec![true; size];
    let mut assignment = Vec::with_capacity(size);

    while assignment.len() < size {
        let free_in_column = |column: usize| (0..size)
            .filter(|&row| free_rows[row] && zeros.is_zero(row, column))
            .collect::<Vec<_>>();
        let free_in_row = |row: usize| (0..size)
            .filter(|&column| free_columns[column] && zeros.is_zero(row, column))
            .collect::<Vec<_>>();

        let lonely_in_column = (0..size)
            .filter(|&column| free_columns[column])
            .find_map(|column| match free_in_column(column)[..] {
                [row] => Some((row, column)),
                _ => None,
            });
        let lonely_in_row = || (0..size)
            .filter(|&row| free_rows[row])
            .find_map(|row| match free_in_row(row)[..] {
                [column] => Some((row, column)),
                _ => None,
            });

        let (row, column) = match lonely_in_column.or_else(lonely_in_row) {
            Some(position) => position,
            None => first_extendable(zeros, &free_rows, &free_columns)
                .ok_or_else(|| Error::IllegalState("Reduced matrix has no complete assignment".to_string()))?,
        };

        free_rows[row] = false;
        free_columns[column] = false;
        assignment.push((row, column));
    }

    assignment.sort_unstable();
    Ok(assignment)
}

/// First free zero, column by column, after which the remaining rows can still be assigned.
fn first_extendable(zeros: &Zeros, free_rows: &[bool], free_columns: &[bool]) -> Option<(usize, usize)> {
    let size = zeros.size();
    for column in (0..size).filter(|&column| free_columns[column]) {
        for row in (0..size).filter(|&row| free_rows[row] && zeros.is_zero(row, column)) {
            let mut rows = free_rows.to_vec();
            let mut columns = free_columns.to_vec();
            rows[row] = false;
            columns[column] = false;
            if has_perfect_matching(zeros, &rows, &columns) {
                return Some((row, column));
            }
        }
    }

    None
}
