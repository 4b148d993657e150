use serde::Serialize;
use sri_core::models::results::SriLevel;
use sri_core::models::session::AssessmentSession;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Render a Tera template with any serializable context.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The fields of `context` become the template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    // Convert the context via serde_json
    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

const NO_RESULTS_TEXT: &str =
    "I just completed the SRI sexual repression index assessment and discovered some interesting things about myself!";

const FOOTER: &str = "\n\nSRI Sexual Repression Index - a self-assessment grounded in psychometrics\n\
Understand your sexual psychology a little better.\n\n#SRI #MentalHealth #SelfAwareness";

#[derive(Serialize)]
struct ShareContext {
    score: u8,
    label: &'static str,
}

fn templates(level: SriLevel) -> [&'static str; 3] {
    match level {
        SriLevel::VeryLow => [
            "My SRI score is {{ score }}, which is {{ label }}! Looks like I have a fairly open and healthy attitude toward sex.",
            "Just finished the SRI: {{ score }} ({{ label }})! Good to understand my sexual psychology better.",
            "SRI result: {{ score }}, {{ label }}. I feel fairly at ease with my sexuality!",
        ],
        SriLevel::Low => [
            "My SRI score: {{ score }} ({{ label }}), a fairly healthy place overall!",
            "Completed the SRI assessment and scored {{ score }}, which is {{ label }}. Learned something new about myself!",
            "SRI result: {{ score }}, {{ label }}. Sexual wellbeing looking good.",
        ],
        SriLevel::Moderate => [
            "My SRI score is {{ score }}, at the {{ label }} level. Maybe worth paying a bit more attention to my wellbeing.",
            "Just took the SRI: {{ score }} ({{ label }}). Found a few things worth thinking about!",
            "SRI done! Scored {{ score }}, {{ label }} level. This gave me a new perspective on myself.",
        ],
        SriLevel::High => [
            "Completed the SRI sexual repression index: {{ score }} ({{ label }}). Time to take better care of my wellbeing!",
            "My SRI score: {{ score }}, which is {{ label }}. This reminded me I need more self-care.",
            "SRI result: {{ score }} ({{ label }}). Ready to start looking after my mental health better!",
        ],
        SriLevel::VeryHigh => [
            "Just finished the SRI assessment: {{ score }} ({{ label }}). A reminder to pay more attention to my mental health.",
            "My SRI score is {{ score }}, {{ label }} level. A good opportunity for self-reflection.",
            "SRI result: {{ score }} ({{ label }}). Glad this tool helped me understand myself better.",
        ],
    }
}

/// Stable template choice for a session, so the same result always reads
/// the same way.
fn template_index(session_id: &str, count: usize) -> usize {
    session_id.bytes().map(usize::from).sum::<usize>() % count
}

/// Text for sharing a result on social media.
pub fn share_text(session: &AssessmentSession) -> Result<String, ExportError> {
    let Some(results) = &session.results else {
        return Ok(format!("{NO_RESULTS_TEXT}{FOOTER}"));
    };

    let level = results.sri.level;
    let candidates = templates(level);
    let index = template_index(&session.id, candidates.len());
    let context = ShareContext {
        score: results.sri.total_score,
        label: level.label(),
    };

    let headline = render_template(
        &format!("share_{}_{index}", level.as_str()),
        candidates[index],
        &context,
    )?;
    Ok(format!("{headline}{FOOTER}"))
}
