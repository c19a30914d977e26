//! # Tool Context
//!
//! Read-only view of editor state handed to interactive tools. Tools read
//! the snapping grid and display unit from here and never change them.

use crate::bounded::BoundedEdit;
use crate::diagnostics::DiagnosticSink;
use pcb_board::{GridProperties, GridType};
use pcb_units::{LengthUnit, PositiveLength};
use std::sync::Arc;

/// Editor state visible to tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolContext {
    grid: GridProperties,
}

impl ToolContext {
    /// Context using the given grid settings.
    pub fn new(grid: GridProperties) -> Self {
        Self { grid }
    }

    /// Active grid spacing.
    pub fn grid_interval(&self) -> PositiveLength {
        self.grid.interval
    }

    /// Unit lengths are shown in by default.
    pub fn default_length_unit(&self) -> LengthUnit {
        self.grid.unit
    }

    /// How the active grid is drawn.
    pub fn grid_type(&self) -> GridType {
        self.grid.grid_type
    }

    /// An edit preloaded with the grid interval, shown in the default unit.
    pub fn grid_interval_edit(&self, sink: Arc<dyn DiagnosticSink>) -> BoundedEdit<PositiveLength> {
        let mut edit = BoundedEdit::positive_length(sink);
        edit.set_unit(self.default_length_unit());
        edit.set_value(self.grid_interval());
        edit
    }
}

impl From<GridProperties> for ToolContext {
    fn from(grid: GridProperties) -> Self {
        Self::new(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let context = ToolContext::default();
        assert_eq!(context.grid_interval().to_nm(), 635_000);
        assert_eq!(context.default_length_unit(), LengthUnit::Millimeters);
        assert_eq!(context.grid_type(), GridType::Lines);
    }

    #[test]
    fn test_grid_interval_edit() {
        let grid = GridProperties {
            grid_type: GridType::Dots,
            interval: PositiveLength::new(2_540_000).unwrap(),
            unit: LengthUnit::Inches,
        };
        let context = ToolContext::from(grid);
        let edit = context.grid_interval_edit(Arc::new(CollectingSink::new()));
        assert_eq!(edit.value(), grid.interval);
        assert_eq!(edit.unit(), LengthUnit::Inches);
        assert_relative_eq!(edit.display_value(), 0.1);
    }
}
