use std::io::{self, Write};

const MIN_WIDTH: usize = 6;
const PADDING: usize = 3;

/// Rows collected over a pass, aligned and written in one go.
///
/// Every cell except the last one of a line is padded to the widest cell of
/// its column plus [`PADDING`], never narrower than [`MIN_WIDTH`]. The last
/// cell is written as is.
#[derive(Debug, Clone, Default)]
pub struct OutputTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn render(&self) -> String {
        let lines = std::iter::once(&self.header)
            .filter(|header| !header.is_empty())
            .chain(self.rows.iter())
            .collect::<Vec<_>>();

        let mut widths = Vec::<usize>::new();
        for line in &lines {
            for (index, cell) in line.iter().enumerate().take(line.len().saturating_sub(1)) {
                let width = (visible_width(cell) + PADDING).max(MIN_WIDTH);
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }

        let mut out = String::new();
        for line in lines {
            let last = line.len().saturating_sub(1);
            for (index, cell) in line.iter().enumerate() {
                out.push_str(cell);
                if index < last {
                    let fill = widths[index].saturating_sub(visible_width(cell));
                    out.extend(std::iter::repeat_n(' ', fill));
                }
            }
            out.push('\n');
        }
        out
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()
    }
}

pub fn visible_width(cell: &str) -> usize {
    let mut width = 0;
    let mut chars = cell.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            if chars.next() == Some('[') {
                for code in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&code) {
                        break;
                    }
                }
            }
            continue;
        }
        width += 1;
    }
    width
}
