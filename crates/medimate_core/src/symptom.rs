//! Symptom rule engine.
//!
//! Deterministic classification: cluster membership against fixed category
//! lists plus a severity band, combined by a first-matching override chain.
//! No learning, no external calls - always returns a result for non-empty
//! symptom input (empty input is a caller precondition).

use serde::{Deserialize, Serialize};

use crate::types::SeverityBand;

/// Symptom labels that indicate a respiratory cluster.
const RESPIRATORY: &[&str] = &["Cough", "Shortness of Breath", "Chest Pain"];

/// Symptom labels that indicate a gastrointestinal cluster.
const GASTROINTESTINAL: &[&str] = &["Nausea", "Vomiting", "Stomach Pain", "Diarrhea"];

/// Symptom labels that indicate a neurological cluster.
const NEUROLOGICAL: &[&str] = &["Headache", "Dizziness", "Confusion"];

/// Symptom picker catalog, grouped by body system. Free-text symptoms
/// outside this catalog are accepted too; they just never match a cluster.
pub const SYMPTOM_CATEGORIES: &[(&str, &[&str])] = &[
    ("Neurological", &["Headache", "Dizziness", "Memory Issues", "Confusion", "Numbness"]),
    ("Respiratory", &["Cough", "Shortness of Breath", "Chest Pain", "Wheezing", "Throat Pain"]),
    ("Digestive", &["Nausea", "Vomiting", "Stomach Pain", "Diarrhea", "Constipation"]),
    ("Muscular", &["Muscle Pain", "Joint Pain", "Stiffness", "Weakness", "Cramps"]),
    ("General", &["Fever", "Fatigue", "Loss of Appetite", "Weight Loss", "Night Sweats"]),
];

/// Accepted duration answers.
pub const DURATIONS: &[&str] = &[
    "Less than a day",
    "1-3 days",
    "3-7 days",
    "1-2 weeks",
    "More than 2 weeks",
];

/// Structured input to the engine. Symptoms are expected to be deduplicated
/// by the caller; severity and emotional state are 1-10 scalars.
#[derive(Debug, Clone)]
pub struct SymptomInput {
    pub symptoms: Vec<String>,
    pub severity: u8,
    pub emotional_state: u8,
    pub duration: String,
}

/// The analysis result presented to the user and persisted to history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    pub condition: String,
    pub severity: SeverityBand,
    pub confidence: u8,
    pub description: String,
    pub recommendations: Vec<String>,
    pub suggested_tests: Vec<String>,
    pub lifestyle: Vec<String>,
}

fn matches_any(symptoms: &[String], cluster: &[&str]) -> bool {
    symptoms.iter().any(|s| cluster.contains(&s.as_str()))
}

/// Run the rule-based analysis.
pub fn analyze(input: &SymptomInput) -> SymptomAnalysis {
    let symptoms = &input.symptoms;
    let has_respiratory = matches_any(symptoms, RESPIRATORY);
    let has_fever = symptoms.iter().any(|s| s == "Fever");
    let has_gi = matches_any(symptoms, GASTROINTESTINAL);
    let has_neuro = matches_any(symptoms, NEUROLOGICAL);

    let mut band = SeverityBand::from_severity(input.severity);
    let mut condition = "General Health Concern";
    let mut confidence = 70u8;

    // First matching rule wins.
    if has_respiratory && has_fever {
        condition = "Possible Respiratory Infection";
        confidence = 85;
    } else if has_gi && symptoms.len() >= 2 {
        condition = "Possible Gastrointestinal Issue";
        confidence = 80;
    } else if has_neuro && input.severity >= 6 {
        condition = "Neurological Concern";
        // Raises the band to High, but never lowers Critical: severity >= 8
        // always stays Critical.
        band = band.max(SeverityBand::High);
        confidence = 75;
    } else if has_fever && symptoms.len() >= 3 {
        condition = "Possible Viral/Bacterial Infection";
        confidence = 82;
    }

    let mut recommendations = vec![
        "Stay hydrated and get adequate rest".to_string(),
        "Monitor your symptoms closely".to_string(),
        "Consider over-the-counter pain relief if appropriate".to_string(),
    ];
    if band == SeverityBand::Critical {
        recommendations.insert(0, "Seek immediate medical attention".to_string());
    } else if band == SeverityBand::High {
        recommendations
            .push("Schedule an appointment with your healthcare provider".to_string());
    }

    let mut suggested_tests = Vec::new();
    if has_respiratory {
        suggested_tests.push("Chest X-ray".to_string());
        suggested_tests.push("Complete Blood Count".to_string());
    }
    if has_fever {
        suggested_tests.push("Blood Culture".to_string());
        suggested_tests.push("Inflammatory Markers".to_string());
    }
    if has_gi {
        suggested_tests.push("Stool Analysis".to_string());
        suggested_tests.push("Abdominal Ultrasound".to_string());
    }

    let lifestyle = vec![
        "Maintain a balanced diet rich in vitamins".to_string(),
        "Get 7-8 hours of quality sleep".to_string(),
        "Practice stress management techniques".to_string(),
    ];

    SymptomAnalysis {
        condition: condition.to_string(),
        severity: band,
        confidence,
        description: format!(
            "Based on your symptoms and severity level, this appears to be a {} priority health concern.",
            band.as_str().to_lowercase()
        ),
        recommendations,
        suggested_tests,
        lifestyle,
    }
}
