use crate::domain::model::{DiagnosisRecord, HistoryRecord, MedicineRecord};
use crate::utils::format::{
    clamp_confidence, confidence_bar, format_price, format_text, format_timestamp, truncate_chars,
};

const RULE_WIDTH: usize = 60;
const CONFIDENCE_BAR_WIDTH: usize = 20;
const CATALOGUE_DESCRIPTION_CHARS: usize = 100;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

pub fn severity_icon(severity: &str) -> &'static str {
    match severity.to_lowercase().as_str() {
        "mild" => "🙂",
        "moderate" => "😐",
        "severe" => "☹️",
        "critical" => "⚠️",
        _ => "❓",
    }
}

/// Titled box used for history, emergency guide and about pages.
pub fn render_modal(title: &str, content: &str) -> String {
    format!("{}\n {}\n{}\n{}\n{}", rule(), title, rule(), content.trim_end(), rule())
}

pub fn render_diagnosis(record: &DiagnosisRecord) -> String {
    let severity = or_default(record.severity.as_deref(), "unknown");
    let confidence = clamp_confidence(record.confidence.unwrap_or(0.0));

    let mut lines = vec![
        format!("🩺 Condition: {}", format_text(Some(record.disease.as_str()))),
        format!(
            "{} {} Severity",
            severity_icon(severity),
            format_text(Some(severity))
        ),
        format!(
            "🌿 Ayurvedic remedy: {}",
            or_default(record.ayurvedic.as_deref(), "No Ayurvedic remedy available")
        ),
        format!(
            "💊 Medicine suggestion: {}",
            or_default(record.medicine.as_deref(), "No medicine suggestion available")
        ),
        format!(
            "🎯 Confidence: {:.1}% {}",
            confidence,
            confidence_bar(confidence, CONFIDENCE_BAR_WIDTH)
        ),
    ];

    if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("📋 {}", description));
    }
    if let Some(precautions) = record.precautions.as_deref().filter(|p| !p.is_empty()) {
        lines.push(format!("🛡️ Precautions: {}", precautions));
    }

    lines.join("\n")
}

pub fn render_medicine(medicine: &MedicineRecord) -> String {
    [
        format!("💊 {}", format_text(Some(medicine.name.as_str()))),
        format!(
            "   Description:       {}",
            or_default(medicine.description.as_deref(), "Not available")
        ),
        format!(
            "   Dosage:            {}",
            or_default(medicine.dosage.as_deref(), "Consult healthcare provider")
        ),
        format!(
            "   Side effects:      {}",
            or_default(medicine.side_effects.as_deref(), "Not specified")
        ),
        format!(
            "   Contraindications: {}",
            or_default(medicine.contraindications.as_deref(), "Not specified")
        ),
        format!(
            "   Category:          {}",
            format_text(Some(or_default(medicine.category.as_deref(), "general")))
        ),
        format!("   Price:             ₹{}", format_price(medicine.price)),
    ]
    .join("\n")
}

pub fn render_medicine_not_found(name: &str) -> String {
    format!(
        "🔍 Medicine Not Found\n   We couldn't find \"{}\" in our database.\n   Try searching with a different name or check the spelling.",
        name
    )
}

pub fn render_medicine_catalogue(medicines: &[MedicineRecord]) -> String {
    if medicines.is_empty() {
        return "No medicines found in the database.".to_string();
    }

    let mut sections = vec![format!("💊 All Medicines ({} found)", medicines.len())];
    for medicine in medicines {
        let description = truncate_chars(
            or_default(medicine.description.as_deref(), "Not available"),
            CATALOGUE_DESCRIPTION_CHARS,
        );
        sections.push(format!(
            "{}\n   {}\n   Category: {}  Price: ₹{}",
            medicine.name,
            description,
            format_text(Some(or_default(medicine.category.as_deref(), "general"))),
            format_price(medicine.price)
        ));
    }
    sections.join("\n\n")
}

/// Records are expected newest first; numbering counts down to #1.
pub fn render_history(history: &[HistoryRecord]) -> String {
    if history.is_empty() {
        return render_modal(
            "Diagnosis History",
            "No History Found\nYou haven't made any diagnoses yet.",
        );
    }

    let entries: Vec<String> = history
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let when = record
                .created_at
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| "unknown date".to_string());
            let confidence = record
                .confidence_score
                .map(|c| format!("{:.1}%", clamp_confidence(c)))
                .unwrap_or_else(|| "N/A".to_string());

            format!(
                "Diagnosis #{}  ({})\n  Symptoms:  {}\n  Condition: {}\n  Confidence: {}\n  Ayurvedic remedy: {}\n  Medicine: {}",
                history.len() - index,
                when,
                record.symptoms,
                or_default(record.diagnosed_condition.as_deref(), "Not available"),
                confidence,
                or_default(record.ayurvedic_remedy.as_deref(), "Not available"),
                or_default(record.medicine_suggestion.as_deref(), "Not available"),
            )
        })
        .collect();

    render_modal("📜 Diagnosis History", &entries.join("\n\n"))
}

pub fn emergency_guide() -> String {
    let content = "\
⚠️ When to call emergency services
  • Difficulty breathing or shortness of breath
  • Chest pain or pressure
  • Severe allergic reaction
  • Loss of consciousness
  • Severe bleeding
  • Signs of stroke (FAST: Face, Arms, Speech, Time)

🚨 Emergency: 108 / 112
🏥 Ambulance: 108
☎️ Police:    100

Remember: this app is for informational purposes only.
Always consult healthcare professionals for serious symptoms.";
    render_modal("🚑 Emergency Medical Guide", content)
}

pub fn about() -> String {
    let content = "\
Medicino is a medical assistant that analyses symptoms and looks up
medicine information, pairing modern suggestions with Ayurvedic remedies.

Features:
  • Symptom diagnosis with confidence scoring
  • Medicine database with pricing
  • Ayurvedic treatment recommendations
  • Dictated symptom input via stdin
  • Diagnosis history
  • Emergency medical guidance

Disclaimer: for educational and informational purposes only. Not a
replacement for professional medical advice, diagnosis, or treatment.";
    render_modal("About Medicino", content)
}
