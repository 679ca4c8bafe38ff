//! Attach/recompute cycle: measure the target against a reference-size
//! probe, scale, clamp, apply, and repeat behind a debounced resize signal.

use crate::debounce::Debouncer;
use crate::dom::{parse_selector, Document, NodeId};
use crate::scale::{candidate_font_size, clamp_font_size, fmt_px};
use crate::types::{ScaleConfig, ScaleOptions, PRE_MEASURE_FONT_SIZE, REFERENCE_FONT_SIZE};

/// One scaled element: its resolved configuration and its own debouncer,
/// so bursts on one attachment never delay another.
#[derive(Debug)]
pub struct Attachment {
    target: NodeId,
    config: ScaleConfig,
    debouncer: Debouncer,
}

impl Attachment {
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn config(&self) -> &ScaleConfig {
        &self.config
    }
}

/// Auto-scales the font size of every element matched at attach time.
///
/// The host wires this to its event loop: forward viewport resize events to
/// [`AutoScaler::notify_resize`] and call [`AutoScaler::tick`] as time
/// advances. Sizing happens once synchronously on attach and then only when
/// a debounce interval elapses with no further resize events.
#[derive(Debug)]
pub struct AutoScaler {
    attachments: Vec<Attachment>,
}

impl AutoScaler {
    /// Resolve the configuration, match `selector`, and size each matched
    /// element once. A selector matching nothing attaches nothing (and is
    /// not an error); only unsupported selector syntax fails.
    pub fn attach(
        doc: &mut Document,
        selector: &str,
        options: Option<&ScaleOptions>,
    ) -> Result<Self, String> {
        let selector = parse_selector(selector)?;
        let config = ScaleConfig::resolve(options);

        let mut attachments = Vec::new();
        for target in doc.query_selector_all(&selector) {
            recompute(doc, target, &config);
            attachments.push(Attachment {
                target,
                config,
                debouncer: Debouncer::default(),
            });
        }
        Ok(Self { attachments })
    }

    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    pub fn targets(&self) -> Vec<NodeId> {
        self.attachments.iter().map(|a| a.target).collect()
    }

    /// The viewport resize signal. Arms (or re-arms) every attachment's
    /// debouncer; nothing is recomputed until the interval elapses.
    pub fn notify_resize(&mut self, now_ms: u64) {
        for attachment in &mut self.attachments {
            attachment.debouncer.trigger(now_ms);
        }
    }

    /// Run recompute for every attachment whose debounce deadline has
    /// elapsed. Returns how many recomputes ran.
    pub fn tick(&mut self, doc: &mut Document, now_ms: u64) -> usize {
        let mut ran = 0;
        for attachment in &mut self.attachments {
            if attachment.debouncer.poll(now_ms) {
                recompute(doc, attachment.target, &attachment.config);
                ran += 1;
            }
        }
        ran
    }
}

/// Width of the target's content at `reference_size`, measured through a
/// disposable probe.
///
/// The probe is a deep clone of the target forced to `display:inline` so it
/// shrink-wraps its text, hosted in a 1px-high overflow-clipped mask so
/// nothing on the page moves while it exists. The mask is removed before
/// returning; no other caller can ever observe it.
pub fn measure_at_reference_size(doc: &mut Document, target: NodeId, reference_size: f64) -> f64 {
    let mask = doc.create_element("div");
    doc.set_style(mask, "height", "1px");
    doc.set_style(mask, "overflow", "hidden");
    doc.append_to_body(mask);

    let probe = doc.clone_subtree(target);
    doc.set_style(probe, "display", "inline");
    doc.set_style(probe, "font-size", &format!("{}px", fmt_px(reference_size)));
    doc.append_child(mask, probe);

    let width = doc.width(probe);
    doc.remove(mask);
    width
}

/// One sizing pass: probe, measure, scale, clamp, apply.
///
/// Returns whether a size was applied. When the probe measures zero wide
/// (no renderable content) the target is left untouched instead of being
/// assigned the NaN the division would produce.
pub fn recompute(doc: &mut Document, target: NodeId, config: &ScaleConfig) -> bool {
    let probe_width = measure_at_reference_size(doc, target, REFERENCE_FONT_SIZE);
    if probe_width == 0.0 {
        return false;
    }

    doc.set_style(target, "font-size", PRE_MEASURE_FONT_SIZE);
    let target_width = doc.width(target);

    let candidate = candidate_font_size(config.scale, REFERENCE_FONT_SIZE, target_width, probe_width);
    let size = clamp_font_size(candidate, config);
    doc.set_style(target, "font-size", &format!("{}px", fmt_px(size)));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEBOUNCE_INTERVAL_MS;

    /// 1000px viewport, h1#title "Hello world" at 80% width.
    /// probe = 11 chars * 96 * 0.6 = 633.6; candidate = 96 * 800 / 633.6.
    fn heading_doc() -> (Document, NodeId) {
        let mut doc = Document::new(1000.0);
        let h1 = doc.create_element("h1");
        doc.set_id(h1, "title");
        doc.set_text(h1, "Hello world");
        doc.set_width_fraction(h1, 0.8);
        doc.append_to_body(h1);
        (doc, h1)
    }

    #[test]
    fn test_attach_sizes_immediately() {
        let (mut doc, h1) = heading_doc();
        let scaler = AutoScaler::attach(&mut doc, "#title", None).unwrap();
        assert_eq!(scaler.targets(), vec![h1]);
        assert_eq!(doc.style(h1, "font-size"), Some("121.21px"));
    }

    #[test]
    fn test_attach_matches_multiple_targets_independently() {
        let mut doc = Document::new(1000.0);
        let a = doc.create_element("p");
        doc.set_text(a, "Scale me");
        doc.set_width_fraction(a, 0.5);
        doc.append_to_body(a);
        let b = doc.create_element("p");
        doc.set_text(b, "Scale me");
        doc.set_width_px(b, 240.0);
        doc.append_to_body(b);

        let scaler = AutoScaler::attach(&mut doc, "p", None).unwrap();
        assert_eq!(scaler.targets(), vec![a, b]);
        // probe = 8 * 96 * 0.6 = 460.8
        assert_eq!(doc.style(a, "font-size"), Some("104.17px"));
        assert_eq!(doc.style(b, "font-size"), Some("50px"));
    }

    #[test]
    fn test_attach_with_no_matches_is_empty_not_error() {
        let (mut doc, _) = heading_doc();
        let scaler = AutoScaler::attach(&mut doc, ".missing", None).unwrap();
        assert!(scaler.targets().is_empty());
    }

    #[test]
    fn test_attach_rejects_bad_selector() {
        let (mut doc, _) = heading_doc();
        assert!(AutoScaler::attach(&mut doc, "div > p", None).is_err());
    }

    #[test]
    fn test_recompute_idempotent_on_stable_width() {
        let (mut doc, h1) = heading_doc();
        let config = ScaleConfig::default();
        assert!(recompute(&mut doc, h1, &config));
        let first = doc.style(h1, "font-size").unwrap().to_string();
        assert!(recompute(&mut doc, h1, &config));
        assert_eq!(doc.style(h1, "font-size").unwrap(), first);
    }

    #[test]
    fn test_recompute_applies_clamp() {
        let (mut doc, h1) = heading_doc();
        let config = ScaleConfig {
            scale: 1.0,
            min_font_size: 10.0,
            max_font_size: 20.0,
        };
        recompute(&mut doc, h1, &config);
        assert_eq!(doc.style(h1, "font-size"), Some("20px"));
    }

    #[test]
    fn test_zero_width_probe_leaves_font_size_unchanged() {
        let mut doc = Document::new(1000.0);
        let empty = doc.create_element("h1");
        doc.set_style(empty, "font-size", "24px");
        doc.append_to_body(empty);

        assert!(!recompute(&mut doc, empty, &ScaleConfig::default()));
        assert_eq!(doc.style(empty, "font-size"), Some("24px"));
    }

    #[test]
    fn test_mask_and_probe_are_gone_after_recompute() {
        let (mut doc, h1) = heading_doc();
        recompute(&mut doc, h1, &ScaleConfig::default());
        // Nothing but the target is attached afterwards.
        let divs = doc.query_selector_all(&parse_selector("div").unwrap());
        assert!(divs.is_empty());
        let headings = doc.query_selector_all(&parse_selector("h1").unwrap());
        assert_eq!(headings, vec![h1]);
    }

    #[test]
    fn test_resize_burst_collapses_to_one_recompute() {
        let (mut doc, h1) = heading_doc();
        let mut scaler = AutoScaler::attach(&mut doc, "#title", None).unwrap();
        let initial = doc.style(h1, "font-size").unwrap().to_string();

        // 10 resize events within one debounce interval, shrinking as they go.
        for (i, width) in (0..10).map(|i| (i, 1000.0 - 50.0 * i as f64)) {
            doc.set_viewport_width(width);
            scaler.notify_resize(i as u64);
            assert_eq!(scaler.tick(&mut doc, i as u64), 0);
        }
        // Nothing ran yet; the size is still the initial one.
        assert_eq!(doc.style(h1, "font-size").unwrap(), initial);

        // One interval after the last event: exactly one recompute, using
        // the final viewport width (550px -> target 440px).
        let ran = scaler.tick(&mut doc, 9 + DEBOUNCE_INTERVAL_MS);
        assert_eq!(ran, 1);
        // 96 * 440 / 633.6
        assert_eq!(doc.style(h1, "font-size"), Some("66.67px"));
        // And nothing more fires afterwards.
        assert_eq!(scaler.tick(&mut doc, 10_000), 0);
    }

    #[test]
    fn test_spaced_resizes_recompute_twice() {
        let (mut doc, _) = heading_doc();
        let mut scaler = AutoScaler::attach(&mut doc, "#title", None).unwrap();

        doc.set_viewport_width(500.0);
        scaler.notify_resize(0);
        assert_eq!(scaler.tick(&mut doc, 150), 1);

        doc.set_viewport_width(750.0);
        scaler.notify_resize(300);
        assert_eq!(scaler.tick(&mut doc, 450), 1);
    }

    #[test]
    fn test_scale_option_halves_size() {
        let (mut doc, h1) = heading_doc();
        let config = ScaleConfig {
            scale: 0.5,
            ..ScaleConfig::default()
        };
        recompute(&mut doc, h1, &config);
        assert_eq!(doc.style(h1, "font-size"), Some("60.61px"));
    }

    #[test]
    fn test_measure_uses_reference_size() {
        let (mut doc, h1) = heading_doc();
        let at_96 = measure_at_reference_size(&mut doc, h1, 96.0);
        let at_48 = measure_at_reference_size(&mut doc, h1, 48.0);
        assert!((at_96 - 633.6).abs() < 1e-9);
        assert!((at_96 - 2.0 * at_48).abs() < 1e-9);
    }
}
