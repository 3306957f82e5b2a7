//! Header-driven TSV tables.
//!
//! Cells are never quoted or escaped: a row is split on `\t` and written
//! back joined by `\t`.

use anyhow::{Result, bail};

/// Prefix marking a quote that could not be resolved.
pub const QUOTE_NOT_FOUND_PREFIX: &str = "QUOTE_NOT_FOUND: ";

const QUOTE_NOT_FOUND_MARKER: &str = "QUOTE_NOT_FOUND";

pub fn is_not_found(quote: &str) -> bool {
    quote.contains(QUOTE_NOT_FOUND_MARKER)
}

/// `QUOTE_NOT_FOUND: <quote>`, without doubling an existing prefix.
pub fn mark_not_found(quote: &str) -> String {
    format!("{QUOTE_NOT_FOUND_PREFIX}{}", strip_not_found(quote))
}

pub fn strip_not_found(quote: &str) -> &str {
    quote.strip_prefix(QUOTE_NOT_FOUND_PREFIX).unwrap_or(quote)
}

/// Column supplying the quote of a row, by header name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteColumn {
    Quote,
    OrigQuote,
    OrigWords,
    OrigWord,
}

impl QuoteColumn {
    const PRIORITY: [QuoteColumn; 4] = [
        QuoteColumn::Quote,
        QuoteColumn::OrigQuote,
        QuoteColumn::OrigWords,
        QuoteColumn::OrigWord,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuoteColumn::Quote => "Quote",
            QuoteColumn::OrigQuote => "OrigQuote",
            QuoteColumn::OrigWords => "OrigWords",
            QuoteColumn::OrigWord => "OrigWord",
        }
    }

    /// First quote column present in `columns`, with its index.
    pub fn detect(columns: &[String]) -> Option<(QuoteColumn, usize)> {
        Self::PRIORITY.into_iter().find_map(|column| {
            columns
                .iter()
                .position(|name| name == column.name())
                .map(|index| (column, index))
        })
    }
}

/// Read-only view of one row.
#[derive(Debug, Clone, Copy)]
pub struct TsvRecord<'a> {
    pub index: usize,
    /// 1-based line of the row in the parsed content.
    pub line: usize,
    columns: &'a [String],
    cells: &'a [String],
}

impl<'a> TsvRecord<'a> {
    /// Cell under `column`, or `""` when the column or cell is missing.
    pub fn get(&self, column: &str) -> &'a str {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.cells.get(index))
            .map_or("", String::as_str)
    }

    pub fn cell(&self, index: usize) -> &'a str {
        self.cells.get(index).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Source line (1-based) of each row; blank lines are not rows.
    pub lines: Vec<usize>,
}

impl TsvTable {
    /// The first non-empty line is the header; blank lines are skipped and
    /// short rows are padded to the header width.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header)) = lines.next() else {
            bail!("TSV content has no header row");
        };
        let columns: Vec<String> = header.split('\t').map(String::from).collect();

        let (line_numbers, rows): (Vec<usize>, Vec<Vec<String>>) = lines
            .map(|(number, line)| {
                let mut cells: Vec<String> = line.split('\t').map(String::from).collect();
                if cells.len() < columns.len() {
                    cells.resize(columns.len(), String::new());
                }
                (number + 1, cells)
            })
            .unzip();

        Ok(Self {
            columns,
            rows,
            lines: line_numbers,
        })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn records(&self) -> impl Iterator<Item = TsvRecord<'_>> {
        self.rows.iter().enumerate().map(|(index, cells)| TsvRecord {
            index,
            line: self.lines.get(index).copied().unwrap_or(index + 2),
            columns: &self.columns,
            cells,
        })
    }

    pub fn set(&mut self, row: usize, column: usize, value: impl Into<String>) {
        if let Some(cells) = self.rows.get_mut(row) {
            if cells.len() <= column {
                cells.resize(column + 1, String::new());
            }
            cells[column] = value.into();
        }
    }

    /// Indices of a quote/occurrence column pair, inserting both if the
    /// quote column is absent.
    ///
    /// New columns go right after the last `GLOccurrence*` column, else after
    /// `Occurrence`, else at the end.
    pub fn ensure_column_pair(&mut self, quote: &str, occurrence: &str) -> (usize, usize) {
        if let Some(quote_index) = self.column_index(quote) {
            let occurrence_index = match self.column_index(occurrence) {
                Some(index) => index,
                None => {
                    self.insert_column(quote_index + 1, occurrence);
                    quote_index + 1
                }
            };
            return (quote_index, occurrence_index);
        }

        let anchor = self
            .columns
            .iter()
            .rposition(|column| column.starts_with("GLOccurrence"))
            .or_else(|| self.column_index("Occurrence"));
        let at = anchor.map_or(self.columns.len(), |index| index + 1);

        self.insert_column(at, quote);
        self.insert_column(at + 1, occurrence);
        (at, at + 1)
    }

    fn insert_column(&mut self, at: usize, name: &str) {
        self.columns.insert(at, name.to_string());
        for cells in &mut self.rows {
            if cells.len() < at {
                cells.resize(at, String::new());
            }
            cells.insert(at, String::new());
        }
    }

    /// Header plus rows, tab-joined, each line terminated by `\n`.
    pub fn to_tsv(&self) -> String {
        let mut out = self.columns.join("\t");
        out.push('\n');
        for cells in &self.rows {
            out.push_str(&cells.join("\t"));
            out.push('\n');
        }
        out
    }
}
