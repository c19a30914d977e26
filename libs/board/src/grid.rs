//! # Grid Properties
//!
//! Grid shown behind the board and used for snapping.
//!
//! ```text
//! (grid (type lines) (interval 0.635) (unit millimeters))
//! ```

use config::constants::DEFAULT_GRID_INTERVAL;
use pcb_sexpr::{token_text, Atom, AtomError, FormatError, FromAtom, List, ToAtom};
use pcb_units::{LengthUnit, PositiveLength};
use serde::{Deserialize, Serialize};

/// Keyword of the grid list.
pub const GRID_KEYWORD: &str = "grid";

/// How the grid is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridType {
    /// No grid is drawn.
    Off,
    /// Continuous grid lines.
    #[default]
    Lines,
    /// A dot at each grid point.
    Dots,
}

impl GridType {
    /// Token used in files.
    pub const fn file_token(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Lines => "lines",
            Self::Dots => "dots",
        }
    }
}

impl FromAtom for GridType {
    fn from_atom(atom: &Atom) -> Result<Self, AtomError> {
        match token_text(atom)? {
            "off" => Ok(Self::Off),
            "lines" => Ok(Self::Lines),
            "dots" => Ok(Self::Dots),
            other => Err(AtomError::new(format!("unknown grid type '{other}'"))),
        }
    }
}

impl ToAtom for GridType {
    fn to_atom(&self) -> Atom {
        Atom::token(self.file_token())
    }
}

const DEFAULT_INTERVAL: PositiveLength = match PositiveLength::new(DEFAULT_GRID_INTERVAL) {
    Ok(interval) => interval,
    Err(_) => panic!("default grid interval must be positive"),
};

/// Grid settings of a board view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridProperties {
    /// How the grid is drawn.
    pub grid_type: GridType,
    /// Spacing between grid points.
    pub interval: PositiveLength,
    /// Unit lengths are shown in.
    pub unit: LengthUnit,
}

impl Default for GridProperties {
    fn default() -> Self {
        Self {
            grid_type: GridType::default(),
            interval: DEFAULT_INTERVAL,
            unit: LengthUnit::default(),
        }
    }
}

impl GridProperties {
    /// Load from a `grid` list.
    ///
    /// ## Errors
    ///
    /// Every field is required; a zero or negative interval is rejected.
    pub fn from_list(list: &List) -> Result<Self, FormatError> {
        Ok(Self {
            grid_type: list.value_of("type")?,
            interval: list.value_of("interval")?,
            unit: list.value_of("unit")?,
        })
    }

    /// A fresh `grid` list.
    pub fn serialize(&self) -> List {
        List::new(GRID_KEYWORD)
            .with_value("type", &self.grid_type)
            .with_value("interval", &self.interval)
            .with_value("unit", &self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcb_sexpr::{parse, FormatErrorKind};

    #[test]
    fn test_default() {
        let grid = GridProperties::default();
        assert_eq!(grid.grid_type, GridType::Lines);
        assert_eq!(grid.interval.to_nm(), 635_000);
        assert_eq!(grid.unit, LengthUnit::Millimeters);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            GridProperties::default().serialize().to_canonical_string(),
            "(grid\n (type lines)\n (interval 0.635)\n (unit millimeters)\n)"
        );
    }

    #[test]
    fn test_from_list() {
        let list = parse("(grid (type dots) (interval 2.54) (unit mils))").unwrap();
        let grid = GridProperties::from_list(&list).unwrap();
        assert_eq!(grid.grid_type, GridType::Dots);
        assert_eq!(grid.interval.to_nm(), 2_540_000);
        assert_eq!(grid.unit, LengthUnit::Mils);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let list = parse("(grid (type off) (interval 0.0) (unit inches))").unwrap();
        let error = GridProperties::from_list(&list).unwrap_err();
        assert!(matches!(
            error.kind,
            FormatErrorKind::InvalidValue { ref keyword, .. } if keyword == "interval"
        ));
        assert_eq!(error.column(), Some(28));
    }

    #[test]
    fn test_unknown_grid_type() {
        let list = parse("(grid (type hex) (interval 1.0) (unit millimeters))").unwrap();
        let error = GridProperties::from_list(&list).unwrap_err();
        assert!(error.to_string().contains("unknown grid type 'hex'"));
    }
}
