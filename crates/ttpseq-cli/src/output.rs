use serde::Serialize;
use ttpseq_core::matrix::TransitionMatrix;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    // Print header
    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    // Print separator
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    // Print rows
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}

/// Render a transition matrix as a grid: one column per destination tactic
/// (sorted), one row per source tactic (sorted), zero-filled cells. An
/// empty matrix prints headers only.
pub fn print_matrix(matrix: &TransitionMatrix) {
    let destinations: Vec<&str> = matrix.destinations().into_iter().collect();

    let mut headers: Vec<&str> = vec!["Transitioned to"];
    headers.extend(&destinations);

    let rows: Vec<Vec<String>> = matrix
        .sources()
        .map(|from| {
            let mut row = vec![format!("From {from}")];
            row.extend(
                destinations
                    .iter()
                    .map(|to| matrix.count(from, to).to_string()),
            );
            row
        })
        .collect();

    print_table(&headers, &rows);
}
