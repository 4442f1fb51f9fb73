//! Display surface: fixes the common presentation options and packages
//! columns, rows and paging/filter state into a [`GridView`].

use crate::binder::{PagingMode, ViewState, filter_model, row_count};
use crate::models::{
    Density, DisplayOptions, DisplayRow, FilterMode, GridView, PaginationState, QueryState,
    SortItem,
};

use super::columns::{Column, GridRow};

/// Container height of every grid, in pixels.
pub const GRID_HEIGHT: u32 = 800;

/// Presentation options shared by every grid.
pub fn display_options() -> DisplayOptions {
    DisplayOptions {
        density: Density::Compact,
        height: GRID_HEIGHT,
        width: "100%",
    }
}

/// Render every row through every column.
pub fn render_rows<R: GridRow>(columns: &[Column<R>], rows: &[R]) -> Vec<DisplayRow> {
    rows.iter()
        .map(|row| DisplayRow {
            id: row.row_id(),
            class: row.row_class(),
            cells: columns
                .iter()
                .map(|column| (column.field, column.render_cell(row)))
                .collect(),
        })
        .collect()
}

/// Builder for one grid view.
pub struct GridSurface<'a, R> {
    columns: &'a [Column<R>],
    query: &'a QueryState,
    mode: PagingMode,
    sort_model: Vec<SortItem>,
}

impl<'a, R: GridRow> GridSurface<'a, R> {
    pub fn new(columns: &'a [Column<R>], query: &'a QueryState, mode: PagingMode) -> Self {
        Self {
            columns,
            query,
            mode,
            sort_model: Vec::new(),
        }
    }

    pub fn sort_model(mut self, sort_model: Vec<SortItem>) -> Self {
        self.sort_model = sort_model;
        self
    }

    /// Build the view for the given list-view state.
    ///
    /// `rows` is `None` while nothing has been fetched. An errored view never
    /// carries rows, even if some were passed.
    pub fn render(self, state: ViewState, rows: Option<&[R]>, loading: bool) -> GridView {
        let rows = if state == ViewState::Error { None } else { rows };
        let fetched = rows.map(<[R]>::len);

        GridView {
            options: display_options(),
            columns: self.columns.iter().map(Column::spec).collect(),
            rows: rows
                .map(|rows| render_rows(self.columns, rows))
                .unwrap_or_default(),
            loading: loading || state == ViewState::Loading,
            view_state: state,
            pagination: PaginationState {
                mode: self.mode,
                page: self.query.page,
                page_size: self.query.page_size,
                row_count: row_count(self.mode, fetched),
                hide_footer_row_count: self.mode == PagingMode::Server,
            },
            filter_mode: FilterMode::Client,
            filter_model: filter_model(self.query),
            sort_model: self.sort_model,
        }
    }
}
