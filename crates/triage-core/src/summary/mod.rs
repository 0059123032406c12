//! Intake summary generation.
//!
//! Turns a finished clipboard into the one-paragraph summary attached to
//! the consultation case. Each category has its own template; anything
//! else gets a generic rendering of whatever facts were collected.

use crate::models::{slots, Category, Clipboard};

fn fact<'a>(clipboard: &'a Clipboard, slot: &str, fallback: &'a str) -> &'a str {
    clipboard.get(slot).unwrap_or(fallback)
}

/// Collect the values of every present slot in `names`, joined with ", ".
fn join_present(clipboard: &Clipboard, names: &[&str]) -> Option<String> {
    let values: Vec<&str> = names.iter().filter_map(|n| clipboard.get(n)).collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

/// Render the clipboard into a reviewer-facing summary.
pub fn summarize(clipboard: &Clipboard, category: Category) -> String {
    let duration = fact(clipboard, slots::DURATION, "unknown duration");
    let severity = fact(clipboard, slots::SEVERITY, "undetermined severity");

    match category {
        Category::Orthopedic => {
            let location = fact(clipboard, "location", "an extremity");
            let mechanism = fact(clipboard, "mechanism", "an injury");
            let mut summary = format!(
                "Patient presents with {location} injury following {mechanism}, \
                 reporting {severity} pain."
            );
            if let Some(deformity) = clipboard.get("deformity") {
                summary.push_str(&format!(" Noting {deformity}."));
            }
            if let Some(function) = clipboard.get("function") {
                summary.push_str(&format!(" Functionality is {function}."));
            }
            summary
        }
        Category::Gastrointestinal => {
            let symptoms = join_present(
                clipboard,
                &["vomiting", "bowel", "bloating", "stool_color"],
            )
            .unwrap_or_else(|| "GI symptoms".to_string());
            let triggers = fact(clipboard, slots::TRIGGERS, "unknown causes");
            format!(
                "Patient reports {symptoms} triggered by {triggers}, \
                 persisting for {duration} with {severity}."
            )
        }
        Category::Respiratory => {
            let onset = fact(clipboard, "onset", "onset");
            let kind = fact(clipboard, "type", "cough");
            let mut summary = format!(
                "Patient presents with {onset} respiratory symptoms, \
                 characterized by {kind}."
            );
            if let Some(sounds) = clipboard.get("sounds") {
                summary.push_str(&format!(" Breath sounds described as {sounds}."));
            }
            if let Some(sputum) = clipboard.get("sputum") {
                summary.push_str(&format!(" Sputum is {sputum}."));
            }
            summary
        }
        Category::Neurological => {
            let location = fact(clipboard, "location", "head/body");
            let sensation = fact(clipboard, slots::SENSATION, "neurological sensation");
            let mut summary =
                format!("Patient reports {sensation} involving {location} for {duration}.");
            if let Some(associated) = clipboard.get("associated_symptoms") {
                summary.push_str(&format!(" Associated with {associated}."));
            }
            if let Some(event) = clipboard.get("event") {
                summary.push_str(&format!(" Reports consciousness event: {event}."));
            }
            summary
        }
        Category::Dermatological => {
            let location = fact(clipboard, "location", "skin");
            let triggers = fact(clipboard, slots::TRIGGERS, "unknown triggers");
            let mut summary = if triggers == "no known triggers" {
                format!(
                    "Patient presents with cutaneous symptoms on {location}. \
                     No triggers reported."
                )
            } else {
                format!(
                    "Patient presents with cutaneous symptoms on {location}, \
                     triggered by {triggers}."
                )
            };
            if let Some(sensation) = clipboard.get(slots::SENSATION) {
                summary.push_str(&format!(" Reports sensation of {sensation}."));
            }
            if let Some(spread) = clipboard.get(slots::SPREAD) {
                summary.push_str(&format!(" Noting spread: {spread}."));
            }
            if let Some(signs) = clipboard.get("infection_signs") {
                summary.push_str(&format!(" Possible infection signs: {signs}."));
            }
            summary
        }
        Category::GeneralSystemic => {
            let names: Vec<&str> = clipboard
                .iter()
                .map(|(name, _)| name)
                .filter(|name| *name != slots::DURATION && *name != slots::SEVERITY)
                .collect();
            let symptoms = join_present(clipboard, &names)
                .unwrap_or_else(|| "general symptoms".to_string());
            format!("Patient reports {symptoms} for {duration} with {severity}.")
        }
    }
}
