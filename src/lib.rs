//! textfit - Auto-scale element font size to track rendered width
//!
//! Attaches to elements of a visual tree and sets their font size
//! proportionally to their current pixel width, recomputing on viewport
//! resize behind a trailing-edge debounce. The sizing ratio comes from a
//! disposable probe: an invisible clone of the target measured at a fixed
//! 96px reference size.
//!
//! # Example
//!
//! ```rust
//! use textfit::{attach, Document};
//!
//! let mut doc = Document::new(1000.0);
//! let title = doc.create_element("h1");
//! doc.set_text(title, "Hello");
//! doc.set_width_fraction(title, 0.5);
//! doc.append_to_body(title);
//!
//! let scaler = attach(&mut doc, "h1").unwrap();
//! assert_eq!(scaler.targets().len(), 1);
//! assert_eq!(doc.style(title, "font-size"), Some("166.67px"));
//! ```
//!
//! After attaching, forward viewport resize events to
//! [`AutoScaler::notify_resize`] and drive [`AutoScaler::tick`] from the
//! host event loop; each attachment recomputes once per quiet interval.

pub mod debounce;
pub mod dom;
pub mod scale;
pub mod scaler;
pub mod scenario;
pub mod types;

pub use debounce::Debouncer;
pub use dom::{Document, NodeId};
pub use scaler::{measure_at_reference_size, recompute, AutoScaler};
pub use scenario::run_scenario;
pub use types::{ScaleConfig, ScaleOptions, DEBOUNCE_INTERVAL_MS, REFERENCE_FONT_SIZE};

/// Attach to every element matching `selector` with the default
/// configuration (scale 1, unbounded).
pub fn attach(doc: &mut Document, selector: &str) -> Result<AutoScaler, String> {
    AutoScaler::attach(doc, selector, None)
}

/// Attach with configuration overrides; unset keys keep their defaults.
///
/// # Example
/// ```rust
/// use textfit::{attach_with, Document, ScaleOptions};
///
/// let mut doc = Document::new(600.0);
/// let h = doc.create_element("h2");
/// doc.set_text(h, "clamped");
/// doc.append_to_body(h);
///
/// let opts: ScaleOptions =
///     serde_json::from_str(r#"{ "maxFontSize": 40 }"#).unwrap();
/// attach_with(&mut doc, "h2", &opts).unwrap();
/// assert_eq!(doc.style(h, "font-size"), Some("40px"));
/// ```
pub fn attach_with(
    doc: &mut Document,
    selector: &str,
    options: &ScaleOptions,
) -> Result<AutoScaler, String> {
    AutoScaler::attach(doc, selector, Some(options))
}
