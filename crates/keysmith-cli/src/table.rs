//! Minimal Unicode box-drawing tables for terminal output.
//!
//! Renders the "fancy outline" layout: double-line outer border and header
//! divider, no dividers between data rows.
//!
//! ```text
//! ╒════════╤═══════╕
//! │ Chord  │ Triad │
//! ╞════════╪═══════╡
//! │ C      │ C E G │
//! ╘════════╧═══════╛
//! ```
//!
//! Cell widths are computed from character counts, so colored (ANSI-escaped)
//! strings must not be placed in cells.

/// Horizontal alignment of cell contents within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Render a table with a header row and any number of data rows. Every row
/// must have as many cells as the header.
pub fn render(header: &[String], rows: &[Vec<String>], align: Align) -> String {
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    border(&mut out, &widths, '╒', '╤', '╕');
    row_line(&mut out, header, &widths, align);
    border(&mut out, &widths, '╞', '╪', '╡');
    for row in rows {
        row_line(&mut out, row, &widths, align);
    }
    border(&mut out, &widths, '╘', '╧', '╛');
    out
}

fn border(out: &mut String, widths: &[usize], left: char, junction: char, right: char) {
    out.push(left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(junction);
        }
        // One space of padding on each side of the cell.
        for _ in 0..width + 2 {
            out.push('═');
        }
    }
    out.push(right);
    out.push('\n');
}

fn row_line(out: &mut String, cells: &[String], widths: &[usize], align: Align) {
    out.push('│');
    for (cell, &width) in cells.iter().zip(widths) {
        let len = cell.chars().count();
        let (pad_left, pad_right) = match align {
            Align::Left => (0, width - len),
            Align::Center => {
                let left = (width - len) / 2;
                (left, width - len - left)
            }
        };
        out.push(' ');
        for _ in 0..pad_left {
            out.push(' ');
        }
        out.push_str(cell);
        for _ in 0..pad_right {
            out.push(' ');
        }
        out.push(' ');
        out.push('│');
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_left_aligned() {
        let rendered = render(
            &cells(&["Chord", "Triad"]),
            &[cells(&["C", "C E G"]), cells(&["Dm", "D F A"])],
            Align::Left,
        );
        let expected = "\
╒═══════╤═══════╕
│ Chord │ Triad │
╞═══════╪═══════╡
│ C     │ C E G │
│ Dm    │ D F A │
╘═══════╧═══════╛
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_centered() {
        let rendered = render(
            &cells(&["1", "2"]),
            &[cells(&["C#", "D#"])],
            Align::Center,
        );
        let expected = "\
╒════╤════╕
│ 1  │ 2  │
╞════╪════╡
│ C# │ D# │
╘════╧════╛
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_glyph_widths_count_as_one_column() {
        let rendered = render(&cells(&["Chord"]), &[cells(&["B°"])], Align::Left);
        let expected = "\
╒═══════╕
│ Chord │
╞═══════╡
│ B°    │
╘═══════╛
";
        assert_eq!(rendered, expected);
    }
}
