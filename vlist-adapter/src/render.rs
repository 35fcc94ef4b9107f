/// One materialized row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row<N> {
    pub index: usize,
    /// Absolute start of the row inside the scroll track.
    pub start: u64,
    pub size: u32,
    pub node: N,
}

/// Output of one render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Frame<N> {
    /// Rows positioned inside a track of `total_height`.
    ///
    /// Hosts either place each row at `start`, or translate the whole block by `offset_y` and
    /// stack the rows; both keep native scrollbar behavior.
    Rows {
        total_height: u64,
        offset_y: u64,
        rows: Vec<Row<N>>,
    },
    /// The collection is empty.
    Empty { message: String },
}

impl<N> Frame<N> {
    pub fn rows(&self) -> &[Row<N>] {
        match self {
            Self::Rows { rows, .. } => rows,
            Self::Empty { .. } => &[],
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}
