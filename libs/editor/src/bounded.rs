//! # Bounded Edit
//!
//! A constrained value with an editable `[min, max]` range, as presented by
//! a numeric input field.
//!
//! Two ways in, two policies:
//!
//! - [`BoundedEdit::set_value`] is for values coming from the document.
//!   They are stored exactly and the range widens to include them, so
//!   loading a file never alters its content.
//! - [`BoundedEdit::apply_user_edit`] and [`BoundedEdit::apply_user_value`]
//!   are for user input. The result is clamped into the range by comparing
//!   integers, never floats.

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use config::constants::{DEFAULT_EDIT_MAX, DEFAULT_EDIT_MIN};
use pcb_units::{Length, LengthUnit, PositiveLength, RangeError, UnsignedLength};
use std::fmt;
use std::sync::Arc;

// =============================================================================
// QUANTITY
// =============================================================================

/// A value that can be shown in a length unit and read back.
pub trait Quantity: Copy + Ord + fmt::Debug + Into<i64> {
    /// Magnitude in `unit`.
    fn to_display(self, unit: LengthUnit) -> f64;

    /// Value from a magnitude in `unit`, rounded to the base unit.
    ///
    /// ## Errors
    ///
    /// Fails if the magnitude is out of range or violates the type's
    /// invariant.
    fn from_display(value: f64, unit: LengthUnit) -> Result<Self, RangeError>;
}

impl Quantity for Length {
    fn to_display(self, unit: LengthUnit) -> f64 {
        unit.to_unit(self)
    }

    fn from_display(value: f64, unit: LengthUnit) -> Result<Self, RangeError> {
        unit.from_unit(value)
    }
}

impl Quantity for UnsignedLength {
    fn to_display(self, unit: LengthUnit) -> f64 {
        unit.to_unit(self.get())
    }

    fn from_display(value: f64, unit: LengthUnit) -> Result<Self, RangeError> {
        Self::try_from(unit.from_unit(value)?)
    }
}

impl Quantity for PositiveLength {
    fn to_display(self, unit: LengthUnit) -> f64 {
        unit.to_unit(self.get())
    }

    fn from_display(value: f64, unit: LengthUnit) -> Result<Self, RangeError> {
        Self::try_from(unit.from_unit(value)?)
    }
}

// =============================================================================
// BOUNDED EDIT
// =============================================================================

type Listener<T> = Box<dyn FnMut(T) + Send>;

/// Value plus editable range, with change notification.
pub struct BoundedEdit<T: Quantity> {
    min: T,
    max: T,
    value: T,
    unit: LengthUnit,
    sink: Arc<dyn DiagnosticSink>,
    listeners: Vec<Listener<T>>,
}

impl<T: Quantity> BoundedEdit<T> {
    /// Create an edit.
    ///
    /// A `value` outside `[min, max]` widens the range, as with
    /// [`set_value`](Self::set_value).
    ///
    /// ## Errors
    ///
    /// [`RangeError::InvertedBounds`] if `min > max`.
    pub fn new(min: T, max: T, value: T, sink: Arc<dyn DiagnosticSink>) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvertedBounds {
                min: min.into(),
                max: max.into(),
            });
        }
        Ok(Self {
            min: min.min(value),
            max: max.max(value),
            value,
            unit: LengthUnit::default(),
            sink,
            listeners: Vec::new(),
        })
    }

    /// Current value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Lower bound, possibly widened by [`Self::set_value`].
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound, possibly widened by [`Self::set_value`].
    pub fn max(&self) -> T {
        self.max
    }

    /// Unit the value is displayed in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Change the display unit. The stored value is untouched.
    pub fn set_unit(&mut self, unit: LengthUnit) {
        self.unit = unit;
    }

    /// Current value in the display unit.
    pub fn display_value(&self) -> f64 {
        self.value.to_display(self.unit)
    }

    /// Lower bound in the display unit.
    pub fn display_min(&self) -> f64 {
        self.min.to_display(self.unit)
    }

    /// Upper bound in the display unit.
    pub fn display_max(&self) -> f64 {
        self.max.to_display(self.unit)
    }

    /// Store a document value exactly, widening the range if needed.
    pub fn set_value(&mut self, value: T) {
        if value == self.value {
            return;
        }
        self.value = value;
        // Clipping here would modify the document without user interaction.
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.notify();
    }

    /// Apply a magnitude typed by the user in the current unit.
    ///
    /// A magnitude the type cannot hold is reported to the sink as a
    /// warning and ignored.
    pub fn apply_user_edit(&mut self, displayed: f64) {
        match T::from_display(displayed, self.unit) {
            Ok(value) => self.apply_user_value(value),
            Err(error) => self.sink.report(Diagnostic::warning(format!(
                "invalid value entered: {displayed} {}: {error}",
                self.unit.short_name()
            ))),
        }
    }

    /// Apply a user value, clamped into the range.
    pub fn apply_user_value(&mut self, value: T) {
        let clamped = value.clamp(self.min, self.max);
        if clamped != self.value {
            self.value = clamped;
            self.notify();
        }
    }

    /// Register a callback receiving every new value.
    pub fn on_value_changed(&mut self, callback: impl FnMut(T) + Send + 'static) {
        self.listeners.push(Box::new(callback));
    }

    fn notify(&mut self) {
        let value = self.value;
        for listener in &mut self.listeners {
            listener(value);
        }
    }
}

impl BoundedEdit<PositiveLength> {
    /// Edit for a positive length with the default range (1 nm to 2 m),
    /// starting at the minimum.
    pub fn positive_length(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            min: DEFAULT_POSITIVE_MIN,
            max: DEFAULT_POSITIVE_MAX,
            value: DEFAULT_POSITIVE_MIN,
            unit: LengthUnit::default(),
            sink,
            listeners: Vec::new(),
        }
    }
}

const DEFAULT_POSITIVE_MIN: PositiveLength = match PositiveLength::new(DEFAULT_EDIT_MIN) {
    Ok(length) => length,
    Err(_) => panic!("default edit minimum must be positive"),
};

const DEFAULT_POSITIVE_MAX: PositiveLength = match PositiveLength::new(DEFAULT_EDIT_MAX) {
    Ok(length) => length,
    Err(_) => panic!("default edit maximum must be positive"),
};

impl<T: Quantity> fmt::Debug for BoundedEdit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedEdit")
            .field("min", &self.min)
            .field("max", &self.max)
            .field("value", &self.value)
            .field("unit", &self.unit)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, Severity};
    use approx::assert_relative_eq;
    use std::sync::Mutex;

    fn positive(nm: i64) -> PositiveLength {
        PositiveLength::new(nm).unwrap()
    }

    fn edit() -> (BoundedEdit<PositiveLength>, Arc<CollectingSink>) {
        let sink = Arc::new(CollectingSink::new());
        (BoundedEdit::positive_length(sink.clone()), sink)
    }

    fn record(edit: &mut BoundedEdit<PositiveLength>) -> Arc<Mutex<Vec<i64>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let target = seen.clone();
        edit.on_value_changed(move |value| target.lock().unwrap().push(value.to_nm()));
        seen
    }

    #[test]
    fn test_default_range() {
        let (edit, _) = edit();
        assert_eq!(edit.min(), positive(1));
        assert_eq!(edit.max(), positive(2_000_000_000));
        assert_eq!(edit.value(), positive(1));
        assert_eq!(edit.unit(), LengthUnit::Millimeters);
    }

    #[test]
    fn test_set_value_widens_instead_of_clipping() {
        let (mut edit, _) = edit();
        let seen = record(&mut edit);

        edit.set_value(positive(5_000_000_000));
        assert_eq!(edit.value(), positive(5_000_000_000));
        assert_eq!(edit.max(), positive(5_000_000_000));
        assert_eq!(edit.min(), positive(1));
        assert_eq!(*seen.lock().unwrap(), vec![5_000_000_000]);
    }

    #[test]
    fn test_set_value_widens_lower_bound() {
        let sink = Arc::new(CollectingSink::new());
        let mut edit =
            BoundedEdit::new(positive(100), positive(200), positive(150), sink).unwrap();
        edit.set_value(positive(50));
        assert_eq!(edit.min(), positive(50));
        assert_eq!(edit.max(), positive(200));
    }

    #[test]
    fn test_set_equal_value_does_not_notify() {
        let (mut edit, _) = edit();
        let seen = record(&mut edit);
        edit.set_value(positive(1));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_user_edit_is_clamped() {
        let (mut edit, sink) = edit();
        let seen = record(&mut edit);

        // 6000 mm is above the 2000 mm maximum.
        edit.apply_user_edit(6_000.0);
        assert_eq!(edit.value(), edit.max());
        assert_eq!(edit.value(), positive(2_000_000_000));
        assert_eq!(*seen.lock().unwrap(), vec![2_000_000_000]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_user_edit_in_other_unit() {
        let (mut edit, _) = edit();
        edit.set_unit(LengthUnit::Mils);
        edit.apply_user_edit(10.0);
        assert_eq!(edit.value(), positive(254_000));
        assert_relative_eq!(edit.display_value(), 10.0);
    }

    #[test]
    fn test_invalid_user_edit_is_reported_and_ignored() {
        let (mut edit, sink) = edit();
        edit.set_value(positive(635_000));
        let seen = record(&mut edit);

        edit.apply_user_edit(0.0);
        edit.apply_user_edit(-1.0);
        edit.apply_user_edit(f64::NAN);

        assert_eq!(edit.value(), positive(635_000));
        assert!(seen.lock().unwrap().is_empty());
        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 3);
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
        assert!(diagnostics[0].message.contains("greater than zero"));
    }

    #[test]
    fn test_unit_change_keeps_value() {
        let (mut edit, _) = edit();
        edit.set_value(positive(25_400_000));
        edit.set_unit(LengthUnit::Inches);
        assert_eq!(edit.value(), positive(25_400_000));
        assert_relative_eq!(edit.display_value(), 1.0);
        assert_relative_eq!(edit.display_max(), 2_000_000_000.0 / 25_400_000.0);
        edit.set_unit(LengthUnit::Millimeters);
        assert_relative_eq!(edit.display_min(), 0.000001);
    }

    #[test]
    fn test_inverted_bounds() {
        let sink = Arc::new(CollectingSink::new());
        let error = BoundedEdit::new(Length::new(2), Length::new(1), Length::ZERO, sink).unwrap_err();
        assert_eq!(error, RangeError::InvertedBounds { min: 2, max: 1 });
    }

    #[test]
    fn test_initial_value_widens() {
        let sink = Arc::new(CollectingSink::new());
        let edit =
            BoundedEdit::new(Length::new(-10), Length::new(10), Length::new(42), sink).unwrap();
        assert_eq!(edit.max(), Length::new(42));
        assert_eq!(edit.min(), Length::new(-10));
    }

    #[test]
    fn test_apply_user_value_clamps_low() {
        let sink = Arc::new(CollectingSink::new());
        let zero = UnsignedLength::ZERO;
        let mut edit = BoundedEdit::new(
            UnsignedLength::new(100).unwrap(),
            UnsignedLength::new(200).unwrap(),
            UnsignedLength::new(150).unwrap(),
            sink,
        )
        .unwrap();
        edit.apply_user_value(zero);
        assert_eq!(edit.value().to_nm(), 100);
    }
}
