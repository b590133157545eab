use std::io::{self, Write};

use crate::dfs::Traversal;

/// Format the result line, e.g. `DFS traversal starting from node 1: 1 2 3 4 5 `.
///
/// Every id is followed by a single space, including the last one.
pub fn render_line(label: &str, start: usize, traversal: &Traversal) -> String {
    let order: String = traversal
        .visited_order
        .iter()
        .map(|n| format!("{} ", n))
        .collect();
    format!("{} {}: {}", label, start, order)
}

/// Write the result line as-is, with no newline.
pub fn write_report<W: Write>(
    out: &mut W,
    label: &str,
    start: usize,
    traversal: &Traversal,
) -> io::Result<()> {
    write!(out, "{}", render_line(label, start, traversal))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_space_separated_ids() {
        let traversal = Traversal {
            visited_order: vec![1, 2, 3],
            ..Traversal::default()
        };
        assert_eq!(render_line("Order from", 1, &traversal), "Order from 1: 1 2 3 ");
    }

    #[test]
    fn writes_line_without_newline() {
        let traversal = Traversal {
            visited_order: vec![4],
            ..Traversal::default()
        };
        let mut buf = Vec::new();
        write_report(&mut buf, "L", 4, &traversal).unwrap();
        assert_eq!(buf, b"L 4: 4 ");
    }
}
