use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Semantic class attached to every drawn element for external styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementClass {
    /// Time-axis labels and vertical gridlines (`x`).
    TimeAxis,
    /// Value-axis labels and horizontal gridlines (`y`).
    ValueAxis,
    /// The value gridline sitting exactly at zero (`y axis`).
    ZeroLine,
    /// Line-mode value stems (`v`).
    ValueMark,
    /// Bar-mode rectangles; drawn without a class.
    Bar,
}

impl ElementClass {
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::TimeAxis => Some("x"),
            Self::ValueAxis => Some("y"),
            Self::ZeroLine => Some("y axis"),
            Self::ValueMark => Some("v"),
            Self::Bar => None,
        }
    }
}

fn ensure_finite(kind: &str, coords: &[f64]) -> ChartResult<()> {
    if coords.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{kind} coordinates must be finite"
        )))
    }
}

/// Segment from `(x1, y1)` to `(x2, y2)` in plot coordinates.
///
/// Gridlines and stems are always axis-aligned, but nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub class: ElementClass,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, class: ElementClass) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            class,
        }
    }

    /// Vertical segment at `x` between two y positions.
    #[must_use]
    pub const fn vertical(x: f64, y_from: f64, y_to: f64, class: ElementClass) -> Self {
        Self::new(x, y_from, x, y_to, class)
    }

    /// Horizontal segment at `y` between two x positions.
    #[must_use]
    pub const fn horizontal(y: f64, x_from: f64, x_to: f64, class: ElementClass) -> Self {
        Self::new(x_from, y, x_to, y, class)
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("line", &[self.x1, self.y1, self.x2, self.y2])
    }
}

/// Rectangle with top-left corner `(x, y)` in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub class: ElementClass,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, class: ElementClass) -> Self {
        Self {
            x,
            y,
            width,
            height,
            class,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure_finite("rect", &[self.x, self.y, self.width, self.height])?;
        // Zero height is a bar sitting on the baseline.
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "rect size must be >= 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Horizontal anchoring of a label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Axis label anchored at `(x, y)` in plot coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub h_align: TextHAlign,
    pub class: ElementClass,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        h_align: TextHAlign,
        class: ElementClass,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            h_align,
            class,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("label text is empty".to_owned()));
        }
        ensure_finite("label", &[self.x, self.y])
    }
}

#[cfg(test)]
mod tests {
    use super::{ElementClass, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

    #[test]
    fn bar_class_is_unstyled() {
        assert_eq!(ElementClass::Bar.class_name(), None);
        assert_eq!(ElementClass::ZeroLine.class_name(), Some("y axis"));
    }

    #[test]
    fn flat_bars_are_valid_but_negative_sizes_are_not() {
        let flat = RectPrimitive::new(0.0, 10.0, 4.0, 0.0, ElementClass::Bar);
        let inverted = RectPrimitive::new(0.0, 10.0, 4.0, -1.0, ElementClass::Bar);
        assert!(flat.validate().is_ok());
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let line = LinePrimitive::vertical(f64::NAN, 0.0, 1.0, ElementClass::ValueMark);
        assert!(line.validate().is_err());

        let label = TextPrimitive::new("", 0.0, 0.0, TextHAlign::Left, ElementClass::TimeAxis);
        assert!(label.validate().is_err());
    }
}
