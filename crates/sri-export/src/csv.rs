use sri_core::models::export::ExportData;
use sri_core::models::session::AssessmentType;

use crate::error::ExportError;

/// Byte-order mark so spreadsheet applications pick UTF-8.
pub const BOM: char = '\u{FEFF}';

pub const HEADERS: [&str; 13] = [
    "Session ID",
    "Timestamp",
    "Assessment type",
    "Age group",
    "Gender",
    "Relationship status",
    "Sexual activity",
    "SRI score",
    "SRI level",
    "Sexual avoidance",
    "Sex guilt",
    "Sexual shame",
    "Inhibition dominance",
];

/// One row per export, every field quoted, dimensions to two decimals.
pub fn to_csv(exports: &[ExportData]) -> Result<String, ExportError> {
    if exports.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut lines = Vec::with_capacity(exports.len() + 1);
    lines.push(row(HEADERS.iter().map(|h| h.to_string())));
    for export in exports {
        lines.push(row(fields(export)));
    }

    let mut out = String::new();
    out.push(BOM);
    out.push_str(&lines.join("\n"));
    Ok(out)
}

fn fields(export: &ExportData) -> [String; 13] {
    let tier = match export.kind {
        AssessmentType::Quick => "Quick",
        AssessmentType::Full => "Full",
    };
    let dims = &export.results.dimensions;
    [
        export.session_id.clone(),
        export.timestamp.clone(),
        tier.to_string(),
        export.demographics.age.clone(),
        export.demographics.gender.clone(),
        export.demographics.relationship_status.clone(),
        export.demographics.sexual_activity.clone(),
        export.results.sri_score.to_string(),
        export.results.sri_level.to_string(),
        format!("{:.2}", dims.sos_reversed),
        format!("{:.2}", dims.sex_guilt),
        format!("{:.2}", dims.sexual_shame),
        format!("{:.2}", dims.sis_over_ses),
    ]
}

fn row(fields: impl IntoIterator<Item = String>) -> String {
    fields
        .into_iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}
