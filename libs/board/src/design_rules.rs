//! # Board Design Rules
//!
//! Manufacturing constraints attached to a board. Each rule family is a
//! ratio applied to a reference size (pad size or drill diameter) whose
//! result is clamped into a `[min, max]` length range.
//!
//! ## File Shape
//!
//! ```text
//! (design_rules
//!  (stopmask_clearance_ratio 0.0)
//!  (stopmask_clearance_min 0.1)
//!  (stopmask_clearance_max 0.1)
//!  (stopmask_max_via_drill_diameter 0.5)
//!  ...
//!  (via_annular_ring_max 2.0)
//! )
//! ```
//!
//! Fields are always written in the same order, so equal rules give
//! byte-identical text.

use config::constants::{
    DEFAULT_PAD_ANNULAR_RING_MAX, DEFAULT_PAD_ANNULAR_RING_MIN, DEFAULT_PAD_ANNULAR_RING_RATIO,
    DEFAULT_SOLDERPASTE_CLEARANCE_MAX, DEFAULT_SOLDERPASTE_CLEARANCE_MIN,
    DEFAULT_SOLDERPASTE_CLEARANCE_RATIO, DEFAULT_STOPMASK_CLEARANCE_MAX,
    DEFAULT_STOPMASK_CLEARANCE_MIN, DEFAULT_STOPMASK_CLEARANCE_RATIO,
    DEFAULT_STOPMASK_MAX_VIA_DRILL_DIAMETER, DEFAULT_VIA_ANNULAR_RING_MAX,
    DEFAULT_VIA_ANNULAR_RING_MIN, DEFAULT_VIA_ANNULAR_RING_RATIO,
};
use pcb_sexpr::{FormatError, FormatErrorKind, List, Spanned};
use pcb_units::{RangeError, UnsignedLength, UnsignedRatio};
use serde::{Deserialize, Serialize};

// =============================================================================
// KEYWORDS
// =============================================================================

/// Field keywords of one ratio rule.
struct RuleKeywords {
    ratio: &'static str,
    min: &'static str,
    max: &'static str,
}

const STOP_MASK_CLEARANCE: RuleKeywords = RuleKeywords {
    ratio: "stopmask_clearance_ratio",
    min: "stopmask_clearance_min",
    max: "stopmask_clearance_max",
};

const STOP_MASK_MAX_VIA_DRILL_DIAMETER: &str = "stopmask_max_via_drill_diameter";

const SOLDER_PASTE_CLEARANCE: RuleKeywords = RuleKeywords {
    ratio: "solderpaste_clearance_ratio",
    min: "solderpaste_clearance_min",
    max: "solderpaste_clearance_max",
};

const PAD_ANNULAR_RING: RuleKeywords = RuleKeywords {
    ratio: "pad_annular_ring_ratio",
    min: "pad_annular_ring_min",
    max: "pad_annular_ring_max",
};

const VIA_ANNULAR_RING: RuleKeywords = RuleKeywords {
    ratio: "via_annular_ring_ratio",
    min: "via_annular_ring_min",
    max: "via_annular_ring_max",
};

/// Keyword of the list written by [`BoardDesignRules::serialize`].
pub const DESIGN_RULES_KEYWORD: &str = "design_rules";

// =============================================================================
// LENGTH BOUNDS
// =============================================================================

/// A `[min, max]` length range with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct LengthBounds {
    min: UnsignedLength,
    max: UnsignedLength,
}

#[derive(Deserialize)]
struct RawBounds {
    min: UnsignedLength,
    max: UnsignedLength,
}

impl TryFrom<RawBounds> for LengthBounds {
    type Error = RangeError;

    fn try_from(raw: RawBounds) -> Result<Self, RangeError> {
        Self::new(raw.min, raw.max)
    }
}

impl LengthBounds {
    /// Create a range.
    ///
    /// ## Errors
    ///
    /// [`RangeError::InvertedBounds`] if `min > max`.
    pub const fn new(min: UnsignedLength, max: UnsignedLength) -> Result<Self, RangeError> {
        if min.to_nm() > max.to_nm() {
            return Err(RangeError::InvertedBounds {
                min: min.to_nm(),
                max: max.to_nm(),
            });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub const fn min(&self) -> UnsignedLength {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> UnsignedLength {
        self.max
    }

    /// Clamp `value` into the range.
    pub fn clamp(&self, value: UnsignedLength) -> UnsignedLength {
        value.clamp(self.min, self.max)
    }
}

// =============================================================================
// RATIO RULE
// =============================================================================

/// A ratio plus the range its result is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatioRule {
    ratio: UnsignedRatio,
    bounds: LengthBounds,
}

impl RatioRule {
    /// Create a rule.
    pub const fn new(ratio: UnsignedRatio, bounds: LengthBounds) -> Self {
        Self { ratio, bounds }
    }

    /// Ratio applied to the reference size.
    pub const fn ratio(&self) -> UnsignedRatio {
        self.ratio
    }

    /// Range the result is clamped into.
    pub const fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    /// `clamp(size × ratio, min, max)` in integer arithmetic.
    ///
    /// ```rust
    /// use pcb_board::{LengthBounds, RatioRule};
    /// use pcb_units::{UnsignedLength, UnsignedRatio};
    ///
    /// let bounds = LengthBounds::new(
    ///     UnsignedLength::new(250_000).unwrap(),
    ///     UnsignedLength::new(2_000_000).unwrap(),
    /// )
    /// .unwrap();
    /// let rule = RatioRule::new(UnsignedRatio::new(25_000).unwrap(), bounds);
    ///
    /// let drill = UnsignedLength::new(2_000_000).unwrap();
    /// assert_eq!(rule.calculate(drill).to_nm(), 500_000);
    /// ```
    pub fn calculate(&self, size: UnsignedLength) -> UnsignedLength {
        self.bounds.clamp(size.scaled(self.ratio))
    }

    fn from_list(list: &List, keywords: &RuleKeywords) -> Result<Self, FormatError> {
        let ratio = list.value_of(keywords.ratio)?;
        let min = list.value_of(keywords.min)?;
        let max_list = list.child(keywords.max)?;
        let max: UnsignedLength = max_list.value()?;
        let bounds = LengthBounds::new(min, max).map_err(|error| {
            FormatError::at(
                FormatErrorKind::InvalidValue {
                    keyword: keywords.max.to_string(),
                    value: max.to_mm_string(),
                    reason: error.to_string(),
                },
                max_list.span(),
            )
        })?;
        Ok(Self::new(ratio, bounds))
    }

    fn serialize_into(&self, list: &mut List, keywords: &RuleKeywords) {
        list.push_value(keywords.ratio, &self.ratio);
        list.push_value(keywords.min, &self.bounds.min);
        list.push_value(keywords.max, &self.bounds.max);
    }
}

// =============================================================================
// FACTORY DEFAULTS
// =============================================================================

// Evaluated at compile time; a bad constant fails the build.
const fn default_length(nanometers: i64) -> UnsignedLength {
    match UnsignedLength::new(nanometers) {
        Ok(length) => length,
        Err(_) => panic!("default length must not be negative"),
    }
}

const fn default_rule(ratio: i64, min: i64, max: i64) -> RatioRule {
    let ratio = match UnsignedRatio::new(ratio) {
        Ok(ratio) => ratio,
        Err(_) => panic!("default ratio must not be negative"),
    };
    match LengthBounds::new(default_length(min), default_length(max)) {
        Ok(bounds) => RatioRule::new(ratio, bounds),
        Err(_) => panic!("default bounds must be ordered"),
    }
}

const DEFAULT_STOP_MASK_CLEARANCE: RatioRule = default_rule(
    DEFAULT_STOPMASK_CLEARANCE_RATIO,
    DEFAULT_STOPMASK_CLEARANCE_MIN,
    DEFAULT_STOPMASK_CLEARANCE_MAX,
);

const DEFAULT_SOLDER_PASTE_CLEARANCE: RatioRule = default_rule(
    DEFAULT_SOLDERPASTE_CLEARANCE_RATIO,
    DEFAULT_SOLDERPASTE_CLEARANCE_MIN,
    DEFAULT_SOLDERPASTE_CLEARANCE_MAX,
);

const DEFAULT_PAD_ANNULAR_RING: RatioRule = default_rule(
    DEFAULT_PAD_ANNULAR_RING_RATIO,
    DEFAULT_PAD_ANNULAR_RING_MIN,
    DEFAULT_PAD_ANNULAR_RING_MAX,
);

const DEFAULT_VIA_ANNULAR_RING: RatioRule = default_rule(
    DEFAULT_VIA_ANNULAR_RING_RATIO,
    DEFAULT_VIA_ANNULAR_RING_MIN,
    DEFAULT_VIA_ANNULAR_RING_MAX,
);

// =============================================================================
// BOARD DESIGN RULES
// =============================================================================

/// Manufacturing design rules of a board.
///
/// Single-owner mutable aggregate; all mutation goes through `&mut self`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardDesignRules {
    stop_mask_clearance: RatioRule,
    stop_mask_max_via_drill_diameter: UnsignedLength,
    solder_paste_clearance: RatioRule,
    pad_annular_ring: RatioRule,
    via_annular_ring: RatioRule,
}

impl Default for BoardDesignRules {
    fn default() -> Self {
        Self {
            stop_mask_clearance: DEFAULT_STOP_MASK_CLEARANCE,
            stop_mask_max_via_drill_diameter: default_length(
                DEFAULT_STOPMASK_MAX_VIA_DRILL_DIAMETER,
            ),
            solder_paste_clearance: DEFAULT_SOLDER_PASTE_CLEARANCE,
            pad_annular_ring: DEFAULT_PAD_ANNULAR_RING,
            via_annular_ring: DEFAULT_VIA_ANNULAR_RING,
        }
    }
}

impl BoardDesignRules {
    /// Rules with factory defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a list holding the thirteen rule fields.
    ///
    /// The wrapper keyword is not checked, so rules can live under any
    /// parent list.
    ///
    /// ## Errors
    ///
    /// Any missing, duplicated or unreadable field fails the whole load,
    /// as does a rule whose `min` exceeds its `max`.
    pub fn from_list(list: &List) -> Result<Self, FormatError> {
        let rules = Self {
            stop_mask_clearance: RatioRule::from_list(list, &STOP_MASK_CLEARANCE)?,
            stop_mask_max_via_drill_diameter: list.value_of(STOP_MASK_MAX_VIA_DRILL_DIAMETER)?,
            solder_paste_clearance: RatioRule::from_list(list, &SOLDER_PASTE_CLEARANCE)?,
            pad_annular_ring: RatioRule::from_list(list, &PAD_ANNULAR_RING)?,
            via_annular_ring: RatioRule::from_list(list, &VIA_ANNULAR_RING)?,
        };
        tracing::debug!(keyword = list.keyword(), "loaded board design rules");
        Ok(rules)
    }

    /// Reset every field to its factory default.
    pub fn restore_defaults(&mut self) {
        *self = Self::default();
    }

    /// Append the thirteen rule fields to `list` in file order.
    pub fn serialize_into(&self, list: &mut List) {
        self.stop_mask_clearance
            .serialize_into(list, &STOP_MASK_CLEARANCE);
        list.push_value(
            STOP_MASK_MAX_VIA_DRILL_DIAMETER,
            &self.stop_mask_max_via_drill_diameter,
        );
        self.solder_paste_clearance
            .serialize_into(list, &SOLDER_PASTE_CLEARANCE);
        self.pad_annular_ring.serialize_into(list, &PAD_ANNULAR_RING);
        self.via_annular_ring.serialize_into(list, &VIA_ANNULAR_RING);
    }

    /// A fresh `design_rules` list.
    pub fn serialize(&self) -> List {
        let mut list = List::new(DESIGN_RULES_KEYWORD);
        self.serialize_into(&mut list);
        list
    }

    // -------------------------------------------------------------------------
    // Stop mask
    // -------------------------------------------------------------------------

    /// Share of the pad size added as stop mask clearance.
    pub fn stop_mask_clearance_ratio(&self) -> UnsignedRatio {
        self.stop_mask_clearance.ratio
    }

    /// Limits applied to the scaled stop mask clearance.
    pub fn stop_mask_clearance_bounds(&self) -> LengthBounds {
        self.stop_mask_clearance.bounds
    }

    /// Largest via drill that stays tented.
    pub fn stop_mask_max_via_drill_diameter(&self) -> UnsignedLength {
        self.stop_mask_max_via_drill_diameter
    }

    /// Replace the stop mask clearance ratio.
    pub fn set_stop_mask_clearance_ratio(&mut self, ratio: UnsignedRatio) {
        self.stop_mask_clearance.ratio = ratio;
    }

    /// Set both bounds at once. On error nothing changes.
    pub fn set_stop_mask_clearance_bounds(
        &mut self,
        min: UnsignedLength,
        max: UnsignedLength,
    ) -> Result<(), RangeError> {
        self.stop_mask_clearance.bounds = LengthBounds::new(min, max)?;
        Ok(())
    }

    /// Replace the largest tented via drill.
    pub fn set_stop_mask_max_via_drill_diameter(&mut self, diameter: UnsignedLength) {
        self.stop_mask_max_via_drill_diameter = diameter;
    }

    /// Stop mask clearance for a pad of the given size.
    pub fn stop_mask_clearance(&self, pad_size: UnsignedLength) -> UnsignedLength {
        self.stop_mask_clearance.calculate(pad_size)
    }

    /// Whether a via with this drill gets a stop mask opening; smaller vias
    /// stay tented.
    pub fn does_via_require_stop_mask(&self, drill_diameter: UnsignedLength) -> bool {
        drill_diameter > self.stop_mask_max_via_drill_diameter
    }

    // -------------------------------------------------------------------------
    // Solder paste
    // -------------------------------------------------------------------------

    /// Share of the pad size removed from the solder paste.
    pub fn solder_paste_clearance_ratio(&self) -> UnsignedRatio {
        self.solder_paste_clearance.ratio
    }

    /// Limits applied to the scaled solder paste clearance.
    pub fn solder_paste_clearance_bounds(&self) -> LengthBounds {
        self.solder_paste_clearance.bounds
    }

    /// Replace the solder paste clearance ratio.
    pub fn set_solder_paste_clearance_ratio(&mut self, ratio: UnsignedRatio) {
        self.solder_paste_clearance.ratio = ratio;
    }

    /// Set both bounds at once. On error nothing changes.
    pub fn set_solder_paste_clearance_bounds(
        &mut self,
        min: UnsignedLength,
        max: UnsignedLength,
    ) -> Result<(), RangeError> {
        self.solder_paste_clearance.bounds = LengthBounds::new(min, max)?;
        Ok(())
    }

    /// Solder paste clearance for a pad of the given size.
    pub fn solder_paste_clearance(&self, pad_size: UnsignedLength) -> UnsignedLength {
        self.solder_paste_clearance.calculate(pad_size)
    }

    // -------------------------------------------------------------------------
    // Annular rings
    // -------------------------------------------------------------------------

    /// Share of the drill diameter used as pad annular ring.
    pub fn pad_annular_ring_ratio(&self) -> UnsignedRatio {
        self.pad_annular_ring.ratio
    }

    /// Limits applied to the scaled pad annular ring.
    pub fn pad_annular_ring_bounds(&self) -> LengthBounds {
        self.pad_annular_ring.bounds
    }

    /// Replace the pad annular ring ratio.
    pub fn set_pad_annular_ring_ratio(&mut self, ratio: UnsignedRatio) {
        self.pad_annular_ring.ratio = ratio;
    }

    /// Set both bounds at once. On error nothing changes.
    pub fn set_pad_annular_ring_bounds(
        &mut self,
        min: UnsignedLength,
        max: UnsignedLength,
    ) -> Result<(), RangeError> {
        self.pad_annular_ring.bounds = LengthBounds::new(min, max)?;
        Ok(())
    }

    /// Annular ring width for a pad with the given drill.
    pub fn pad_annular_ring(&self, drill_diameter: UnsignedLength) -> UnsignedLength {
        self.pad_annular_ring.calculate(drill_diameter)
    }

    /// Share of the drill diameter used as via annular ring.
    pub fn via_annular_ring_ratio(&self) -> UnsignedRatio {
        self.via_annular_ring.ratio
    }

    /// Limits applied to the scaled via annular ring.
    pub fn via_annular_ring_bounds(&self) -> LengthBounds {
        self.via_annular_ring.bounds
    }

    /// Replace the via annular ring ratio.
    pub fn set_via_annular_ring_ratio(&mut self, ratio: UnsignedRatio) {
        self.via_annular_ring.ratio = ratio;
    }

    /// Set both bounds at once. On error nothing changes.
    pub fn set_via_annular_ring_bounds(
        &mut self,
        min: UnsignedLength,
        max: UnsignedLength,
    ) -> Result<(), RangeError> {
        self.via_annular_ring.bounds = LengthBounds::new(min, max)?;
        Ok(())
    }

    /// Annular ring width for a via with the given drill.
    pub fn via_annular_ring(&self, drill_diameter: UnsignedLength) -> UnsignedLength {
        self.via_annular_ring.calculate(drill_diameter)
    }
}

impl TryFrom<&List> for BoardDesignRules {
    type Error = FormatError;

    fn try_from(list: &List) -> Result<Self, FormatError> {
        Self::from_list(list)
    }
}

// =============================================================================
// TESTS
// =============================================================================
