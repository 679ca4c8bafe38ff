//! JSON scenario runner shared by the demo binary and the integration
//! fixtures: build a document, attach scalers, replay a timeline of resize
//! and wait events, and report font sizes after every step.

use serde::Deserialize;

use crate::dom::Document;
use crate::scale::fmt_px;
use crate::scaler::AutoScaler;
use crate::types::ScaleOptions;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub viewport_width: f64,
    pub elements: Vec<ElementSpec>,
    pub attach: Vec<AttachSpec>,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub text: String,
    /// Explicit block width in px.
    #[serde(default)]
    pub width: Option<f64>,
    /// Block width as a fraction of the viewport.
    #[serde(default)]
    pub width_fraction: Option<f64>,
    /// Initial inline font-size in px.
    #[serde(default)]
    pub font_size: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AttachSpec {
    pub selector: String,
    #[serde(default)]
    pub options: Option<ScaleOptions>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    Resize { viewport_width: f64 },
    Wait { ms: u64 },
}

/// Run a JSON scenario and return the step-by-step report.
pub fn run_scenario(input: &str) -> Result<String, String> {
    let scenario: Scenario =
        serde_json::from_str(input).map_err(|e| format!("Invalid scenario: {e}"))?;

    let mut doc = Document::new(scenario.viewport_width);
    for spec in &scenario.elements {
        let el = doc.create_element(&spec.tag);
        if let Some(id) = &spec.id {
            doc.set_id(el, id);
        }
        for class in &spec.classes {
            doc.add_class(el, class);
        }
        doc.set_text(el, &spec.text);
        if let Some(width) = spec.width {
            doc.set_width_px(el, width);
        }
        if let Some(fraction) = spec.width_fraction {
            doc.set_width_fraction(el, fraction);
        }
        if let Some(size) = spec.font_size {
            doc.set_style(el, "font-size", &format!("{}px", fmt_px(size)));
        }
        doc.append_to_body(el);
    }

    let mut scalers: Vec<(String, AutoScaler)> = Vec::new();
    for spec in &scenario.attach {
        let scaler = AutoScaler::attach(&mut doc, &spec.selector, spec.options.as_ref())?;
        scalers.push((spec.selector.clone(), scaler));
    }

    let mut out: Vec<String> = Vec::new();
    out.push("== attach".to_string());
    report(&doc, &scalers, &mut out);

    let mut now_ms: u64 = 0;
    for event in &scenario.events {
        match event {
            Event::Resize { viewport_width } => {
                doc.set_viewport_width(*viewport_width);
                for (_, scaler) in &mut scalers {
                    scaler.notify_resize(now_ms);
                }
                out.push(format!("== resize viewport={}", fmt_px(*viewport_width)));
            }
            Event::Wait { ms } => {
                now_ms += ms;
                for (_, scaler) in &mut scalers {
                    scaler.tick(&mut doc, now_ms);
                }
                out.push(format!("== wait {ms}ms"));
            }
        }
        report(&doc, &scalers, &mut out);
    }

    Ok(out.join("\n"))
}

fn report(doc: &Document, scalers: &[(String, AutoScaler)], out: &mut Vec<String>) {
    for (selector, scaler) in scalers {
        for (i, target) in scaler.targets().into_iter().enumerate() {
            out.push(format!(
                "{selector}[{i}] font-size: {}px",
                fmt_px(doc.font_size(target))
            ));
        }
    }
}
