use crate::models::Provider;
use std::collections::HashSet;

/// Curated specialty groups: UI-facing label and the lowercase needles that
/// place a specialty text into that group (substring match)
pub const SPECIALTY_GROUPS: &[(&str, &[&str])] = &[
    ("Chiro", &["chiro"]),
    ("PT", &["physical therapy", "physio", " pt ", " pt", "(pt)"]),
    ("Ortho", &["ortho", "orthop"]),
    ("Neuro", &["neuro"]),
    ("Spine", &["spine", "spinal"]),
    ("Foot/Ankle", &["foot", "ankle", "podiat"]),
    (
        "Hand Surgeon",
        &["hand surgeon", "hand & wrist", "upper extremity", "hand"],
    ),
    ("Post-Concussion", &["post-concussion", "concuss", "tbi"]),
    ("Heart", &["cardio", "heart"]),
    (
        "Pain Management",
        &[
            "pain management",
            "pain med",
            "interventional pain",
            "pm&r",
            "physiat",
        ],
    ),
    ("MRI/Imaging", &["mri", "radiology", "imaging", "x-ray", "ct"]),
    ("ENT", &["ent", "otolaryng"]),
    ("Ophthalmology", &["ophthalm", "eye"]),
    ("Dental/Oral", &["dental", "oral", "maxillofacial"]),
    (
        "Primary Care",
        &["primary care", "internal medicine", "family medicine"],
    ),
    ("Urgent Care", &["urgent care"]),
    ("Neurosurgery", &["neurosurg"]),
    ("Plastic/Reconstructive", &["plastic", "reconstructive"]),
    ("Psych/Behavioral", &["psychiat", "psychology", "behavioral"]),
];

/// Group labels whose needles match the given specialty text
///
/// The text is padded with spaces so needles like " pt " can anchor on word
/// boundaries without a tokenizer.
pub fn groups_for_text(specialty: &str) -> HashSet<&'static str> {
    let padded = format!(" {} ", specialty.to_lowercase());
    let mut matches = HashSet::new();
    for (label, needles) in SPECIALTY_GROUPS {
        if needles.iter().any(|needle| padded.contains(needle)) {
            matches.insert(*label);
        }
    }
    matches
}

/// Sorted group labels that actually occur in the dataset
pub fn available_groups(providers: &[Provider]) -> Vec<&'static str> {
    let mut found = HashSet::new();
    for provider in providers {
        found.extend(groups_for_text(&provider.specialty));
    }
    let mut labels: Vec<_> = found.into_iter().collect();
    labels.sort_unstable();
    labels
}

/// Resolve group labels to the concrete specialty values present in the
/// dataset, so the filter stage stays exact set membership
pub fn expand_groups(providers: &[Provider], labels: &[String]) -> HashSet<String> {
    if labels.is_empty() {
        return HashSet::new();
    }
    let wanted: HashSet<&str> = labels.iter().map(String::as_str).collect();

    providers
        .iter()
        .filter(|p| {
            groups_for_text(&p.specialty)
                .iter()
                .any(|label| wanted.contains(label))
        })
        .map(|p| p.specialty.clone())
        .collect()
}
