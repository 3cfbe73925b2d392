//! Pure grid layout. Produces the cell/row-break sequence the grid component
//! renders, independent of any DOM.

use crate::model::{pixel_dimension, side_len};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridItem {
    /// One checkbox at `(row, column)`.
    Cell { row: u32, column: u32 },
    /// End of `row`.
    RowBreak { row: u32 },
}

impl GridItem {
    /// Render key, unique within one layout: `"r.c"` for cells, `"r"` for breaks.
    pub fn key(&self) -> String {
        match self {
            GridItem::Cell { row, column } => format!("{row}.{column}"),
            GridItem::RowBreak { row } => row.to_string(),
        }
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, GridItem::Cell { .. })
    }
}

/// Layout for one render. Cheap to build and copy; iterate it as often as needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    side: u32,
    pixels: u32,
}

impl GridLayout {
    pub fn new(size: Option<i64>) -> Self {
        Self {
            side: side_len(size),
            pixels: pixel_dimension(size),
        }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Width and height of the container in pixels.
    pub fn pixel_dimension(&self) -> u32 {
        self.pixels
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }

    pub fn is_empty(&self) -> bool {
        self.side == 0
    }

    pub fn items(&self) -> GridItems {
        GridItems {
            side: self.side,
            row: 0,
            column: 0,
        }
    }
}

impl IntoIterator for GridLayout {
    type Item = GridItem;
    type IntoIter = GridItems;

    fn into_iter(self) -> GridItems {
        self.items()
    }
}

/// Row-major walk over a layout; each row's cells are followed by its break.
#[derive(Clone, Debug)]
pub struct GridItems {
    side: u32,
    row: u32,
    column: u32,
}

impl Iterator for GridItems {
    type Item = GridItem;

    fn next(&mut self) -> Option<GridItem> {
        if self.row >= self.side {
            return None;
        }
        if self.column < self.side {
            let item = GridItem::Cell {
                row: self.row,
                column: self.column,
            };
            self.column += 1;
            return Some(item);
        }
        let item = GridItem::RowBreak { row: self.row };
        self.row += 1;
        self.column = 0;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let side = self.side as usize;
        let row_len = side + 1;
        let done = (self.row as usize).saturating_mul(row_len) + self.column as usize;
        let remaining = side.saturating_mul(row_len).saturating_sub(done);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridItems {}
