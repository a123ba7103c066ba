/// Running words through a [`TransitionMatrix`].
pub mod run;

/// A complete deterministic transition function `states × symbols → states`, stored as a dense
/// row-major matrix. Row `q` holds the successors of state `q`, one column per symbol of the
/// alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionMatrix {
    states: usize,
    width: usize,
    cells: Vec<usize>,
}

impl TransitionMatrix {
    /// Assembles a matrix with `width` columns from its rows. Every row must have exactly `width`
    /// entries and every entry must be a valid row index, which is ensured by
    /// [`crate::automaton::DFABuilder`].
    pub(crate) fn from_rows<I>(width: usize, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<usize>>,
    {
        let mut states = 0;
        let mut cells = vec![];
        for row in rows {
            debug_assert_eq!(row.len(), width);
            cells.extend(row);
            states += 1;
        }
        Self {
            states,
            width,
            cells,
        }
    }

    /// Assembles a matrix from its cells in row-major order. `cells` must hold `states * width`
    /// entries.
    pub(crate) fn from_cells(states: usize, width: usize, cells: Vec<usize>) -> Self {
        debug_assert_eq!(cells.len(), states * width);
        Self {
            states,
            width,
            cells,
        }
    }

    /// The number of rows, i.e. states.
    pub fn size(&self) -> usize {
        self.states
    }

    /// The number of columns, i.e. symbols.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The successors of `state`, indexed by column. `state` must be a valid row.
    pub(crate) fn row(&self, state: usize) -> &[usize] {
        &self.cells[state * self.width..(state + 1) * self.width]
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.states).map(|state| self.row(state))
    }

    /// The successor of `state` on the symbol in column `column`, both of which must be in range.
    pub(crate) fn successor(&self, state: usize, column: usize) -> usize {
        self.cells[state * self.width + column]
    }

    /// Keeps only the rows listed in `order`, which become rows `0, 1, ...` of the result. Every
    /// successor is translated through `renumbering`, which must map every successor of a kept
    /// row to its new index.
    pub(crate) fn restrict(&self, order: &[usize], renumbering: &[Option<usize>]) -> Self {
        Self::from_rows(
            self.width,
            order.iter().map(|&old| {
                self.row(old)
                    .iter()
                    .map(|&target| renumbering[target].unwrap_or(target))
                    .collect()
            }),
        )
    }

    /// Returns a string representation of the transition table, with a header row and one row
    /// per state. The first cell of each row is produced by `state_decorator`, the remaining ones
    /// by `target_decorator`.
    pub fn build_transition_table<H, SD, TD>(
        &self,
        header: H,
        state_decorator: SD,
        target_decorator: TD,
    ) -> String
    where
        H: IntoIterator<Item = String>,
        SD: Fn(usize) -> String,
        TD: Fn(usize) -> String,
    {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(std::iter::once("State".to_string()).chain(header));
        for (state, row) in self.rows().enumerate() {
            builder.push_record(
                std::iter::once(state_decorator(state))
                    .chain(row.iter().map(|&target| target_decorator(target))),
            );
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}
