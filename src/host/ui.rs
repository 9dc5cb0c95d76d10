//! Label measurement and app badge helpers

#[cfg(test)]
use mockall::automock;

use tracing::debug;

/// Width and height in points
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    pub size: f64,
}

/// The parts of a text label that affect its laid-out height
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: Option<String>,
    pub font: Font,
    pub width: f64,
}

/// Lays out text with the platform's text engine
#[cfg_attr(test, automock)]
pub trait TextMeasurer: Send + Sync {
    /// Bounding rectangle of `text` laid out in `font` within `bounds`,
    /// wrapping lines at `bounds.width`
    fn bounding_rect(&self, text: &str, font: &Font, bounds: Size) -> Size;
}

/// Receives app icon badge updates
#[cfg_attr(test, automock)]
pub trait BadgeSink: Send + Sync {
    fn set_badge_number(&self, number: u32);
}

/// Height the label's text needs at the label's current width.
///
/// A label without text measures `0.0`.
pub fn label_height<M>(measurer: &M, label: &Label) -> f64
where
    M: TextMeasurer + ?Sized,
{
    let Some(text) = label.text.as_deref() else {
        return 0.0;
    };

    let bounds = Size::new(label.width, f64::MAX);
    measurer.bounding_rect(text, &label.font, bounds).height
}

/// Set the app icon badge. `0` removes it.
pub fn set_app_badge<S>(sink: &S, number: u32)
where
    S: BadgeSink + ?Sized,
{
    debug!("Setting app badge to {}", number);
    sink.set_badge_number(number);
}
