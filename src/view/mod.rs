//! HTML page rendering
//!
//! One page: the input form, and below it the outcome of the last submission.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::features::{FeatureVector, FieldSpec};
use crate::model::{PredictionResult, QualityBand};

const TEMPLATE: &str = include_str!("templates/page.html");

/// What to show under the form
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    Prediction(PredictionResult),
    Failure(String),
}

/// Render the full page with `sample` pre-filled in the inputs
pub fn render_page(sample: &FeatureVector, banner: Option<&Banner>) -> String {
    TEMPLATE
        .replace("{{FIELDS}}", &render_fields(sample))
        .replace("{{RESULT}}", &banner.map(render_banner).unwrap_or_default())
}

fn render_fields(sample: &FeatureVector) -> String {
    sample
        .fields()
        .map(|(spec, value)| render_input(spec, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_input(spec: &FieldSpec, value: f64) -> String {
    let key = encode_double_quoted_attribute(spec.key);
    format!(
        r#"<p><label for="{key}">{label}</label><br><input type="number" id="{key}" name="{key}" min="{min}" max="{max}" step="{step}" value="{value}" required></p>"#,
        label = encode_text(spec.label),
        min = spec.format_value(spec.min),
        max = spec.format_value(spec.max),
        step = spec.format_value(spec.step()),
        value = spec.format_value(value),
    )
}

fn render_banner(banner: &Banner) -> String {
    match banner {
        Banner::Prediction(result) => {
            let balloons = if result.band.celebrate() {
                "<p class=\"balloons\" aria-hidden=\"true\">🎈🎈🎈🎈🎈</p>\n"
            } else {
                ""
            };
            format!(
                "<section class=\"result\">\n<p class=\"success\">🍷 <strong>Predicted Wine Quality:</strong> {score}</p>\n{balloons}<p class=\"band band-{band}\">{icon} {message}</p>\n</section>",
                score = result.score,
                band = band_class(result),
                icon = result.band.icon(),
                message = result.band.message(),
            )
        }
        Banner::Failure(message) => format!(
            "<section class=\"result\">\n<p class=\"error\" role=\"alert\">❌ Prediction failed: {}</p>\n</section>",
            encode_text(message)
        ),
    }
}

fn band_class(result: &PredictionResult) -> &'static str {
    match result.band {
        QualityBand::High => "high",
        QualityBand::Average => "average",
        QualityBand::Low => "low",
    }
}
