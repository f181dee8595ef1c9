//! A table of lengths and capacities, for showing how collections share and grow their storage.
//!
//! # Examples
//! ```
//! # use slice_lib::collections::contiguous::DynamicArray;
//! # use slice_lib::collections::report::CapacityReport;
//! let arr = DynamicArray::from([1, 2, 3, 4, 5, 6, 7, 8]);
//! let report = CapacityReport::new()
//!     .row("arr", &arr)
//!     .row("arr[3..5]", &arr.window(3..5));
//!
//! assert_eq!(report.to_string(), "\
//! +-------------------------------+
//! | Name      | Length | Capacity |
//! +-------------------------------+
//! | arr       | 8      | 8        |
//! | arr[3..5] | 2      | 5        |
//! +-------------------------------+
//! ");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::collections::contiguous::DynamicArray;
use crate::collections::traits::Contiguous;

const HEADINGS: [&str; 3] = ["Name", "Length", "Capacity"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    name: String,
    len: usize,
    cap: usize,
}

/// Rows of names, lengths and capacities, rendered as a bordered table by [`Display`]. Each column
/// is as wide as its widest cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityReport {
    rows: DynamicArray<Row>,
}

impl CapacityReport {
    /// Creates a report with no rows.
    pub const fn new() -> CapacityReport {
        CapacityReport {
            rows: DynamicArray::new(),
        }
    }

    /// Adds a row for `collection`, labelled `name`.
    pub fn row<C: Contiguous + ?Sized>(mut self, name: impl Into<String>, collection: &C) -> Self {
        self.push_row(name, collection);
        self
    }

    /// Adds a row for `collection`, labelled `name`, in place.
    pub fn push_row<C: Contiguous + ?Sized>(&mut self, name: impl Into<String>, collection: &C) {
        self.rows.push(Row {
            name: name.into(),
            len: collection.len(),
            cap: collection.cap(),
        });
    }

    /// Returns the number of rows in the report.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the report has no rows.
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> [usize; 3] {
        let mut widths = HEADINGS.map(str::len);

        for row in self.rows.iter() {
            widths[0] = widths[0].max(row.name.chars().count());
            widths[1] = widths[1].max(row.len.to_string().len());
            widths[2] = widths[2].max(row.cap.to_string().len());
        }

        widths
    }
}

impl Display for CapacityReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [name_w, len_w, cap_w] = self.widths();
        let header = format!(
            "| {:<name_w$} | {:<len_w$} | {:<cap_w$} |",
            HEADINGS[0], HEADINGS[1], HEADINGS[2],
        );
        let divider = format!("+{}+", "-".repeat(header.chars().count() - 2));

        writeln!(f, "{divider}")?;
        writeln!(f, "{header}")?;
        writeln!(f, "{divider}")?;
        for row in self.rows.iter() {
            writeln!(f, "| {:<name_w$} | {:<len_w$} | {:<cap_w$} |", row.name, row.len, row.cap)?;
        }
        writeln!(f, "{divider}")
    }
}
