//! Column descriptors and the per-cell value pipeline.
//!
//! Every column names its data source explicitly: a [`ValueSource::Field`]
//! reads the row's same-named field, a [`ValueSource::Derived`] computes a
//! value from the whole row. Both are plain function pointers, so a column can
//! never mutate the row it reads.

use crate::models::{Cell, CellValue, ColumnKind, ColumnSpec};

use super::format::{format_date, format_duration};

/// Where a column's raw value comes from.
pub enum ValueSource<R> {
    /// The row's same-named field.
    Field(fn(&R) -> CellValue),
    /// A value computed from the row.
    Derived(fn(&R) -> CellValue),
}

/// One column of a grid over rows of type `R`.
pub struct Column<R> {
    pub field: &'static str,
    pub header_name: Option<&'static str>,
    pub width: Option<u16>,
    pub kind: ColumnKind,
    pub source: ValueSource<R>,
    /// Style class for the cell, computed from its raw value.
    pub cell_class: Option<fn(&CellValue) -> String>,
    pub tooltip: Option<fn(&R) -> Option<String>>,
    pub href: Option<fn(&R, &CellValue) -> Option<String>>,
}

impl<R> Column<R> {
    /// Column reading the row's same-named field.
    pub fn field(field: &'static str, kind: ColumnKind, getter: fn(&R) -> CellValue) -> Self {
        Self::new(field, kind, ValueSource::Field(getter))
    }

    /// Column computing its value from the row.
    pub fn derived(field: &'static str, kind: ColumnKind, getter: fn(&R) -> CellValue) -> Self {
        Self::new(field, kind, ValueSource::Derived(getter))
    }

    fn new(field: &'static str, kind: ColumnKind, source: ValueSource<R>) -> Self {
        Self {
            field,
            header_name: None,
            width: None,
            kind,
            source,
            cell_class: None,
            tooltip: None,
            href: None,
        }
    }

    pub fn header(mut self, header_name: &'static str) -> Self {
        self.header_name = Some(header_name);
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn cell_class(mut self, classifier: fn(&CellValue) -> String) -> Self {
        self.cell_class = Some(classifier);
        self
    }

    pub fn tooltip(mut self, tooltip: fn(&R) -> Option<String>) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    pub fn href(mut self, href: fn(&R, &CellValue) -> Option<String>) -> Self {
        self.href = Some(href);
        self
    }

    /// Raw value of this column for `row`.
    pub fn get_value(&self, row: &R) -> CellValue {
        match &self.source {
            ValueSource::Field(getter) | ValueSource::Derived(getter) => getter(row),
        }
    }

    /// Display string for a raw value of this column.
    pub fn format_value(&self, value: &CellValue) -> String {
        match (self.kind, value) {
            (_, CellValue::Absent) => String::new(),
            (ColumnKind::Date, CellValue::Text(s)) => format_date(Some(s)),
            (ColumnKind::Date, CellValue::Int(_)) => String::new(),
            (ColumnKind::Duration, CellValue::Int(n)) => format_duration(Some(*n)),
            (ColumnKind::Duration, CellValue::Text(_)) => String::new(),
            // Rendered as icons by the widget.
            (_, CellValue::Links(_)) => String::new(),
            (_, CellValue::Text(s)) => s.clone(),
            (_, CellValue::Int(n)) => n.to_string(),
        }
    }

    /// Full cell: raw value, display string and optional decorations.
    pub fn render_cell(&self, row: &R) -> Cell {
        let value = self.get_value(row);
        let display = self.format_value(&value);
        let class = self.cell_class.map(|classify| classify(&value));
        let tooltip = self.tooltip.and_then(|tooltip| tooltip(row));
        let href = self.href.and_then(|href| href(row, &value));

        Cell {
            value,
            display,
            class,
            tooltip,
            href,
        }
    }

    /// Header description sent to the widget.
    pub fn spec(&self) -> ColumnSpec {
        ColumnSpec {
            field: self.field,
            header_name: self.header_name,
            width: self.width,
            kind: self.kind,
        }
    }
}

/// A row type that can be shown in a grid.
pub trait GridRow {
    /// Stable identifier of the row.
    fn row_id(&self) -> String;

    /// Style class of the whole row, if any.
    fn row_class(&self) -> Option<String> {
        None
    }
}
