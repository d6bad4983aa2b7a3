//! Mock medical-report analyzer.
//!
//! This is an explicit stand-in, not a real analyzer: it takes a file name
//! only, ignores content entirely (no OCR, no parsing), and returns the same
//! canned Complete Blood Panel findings for every input. Upload validation
//! is real; the "analysis" is a demo fixture.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum accepted upload size.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Accepted report file extensions (images and PDF).
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("unsupported file type '{0}' - please provide a JPG, PNG, or PDF file")]
    UnsupportedType(String),

    #[error("file is {0} bytes - reports must be 10MB or smaller")]
    TooLarge(u64),

    #[error("cannot read file: {0}")]
    Unreadable(#[from] std::io::Error),
}

/// Reject invalid uploads before any analysis runs.
pub fn validate_upload(path: &Path) -> Result<(), UploadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadError::UnsupportedType(extension));
    }

    let size = std::fs::metadata(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge(size));
    }

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    Normal,
    High,
    Low,
    Critical,
}

impl FindingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingStatus::Normal => "normal",
            FindingStatus::High => "high",
            FindingStatus::Low => "low",
            FindingStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportSeverity {
    Normal,
    Mild,
    Moderate,
    Severe,
}

impl ReportSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportSeverity::Normal => "normal",
            ReportSeverity::Mild => "mild",
            ReportSeverity::Moderate => "moderate",
            ReportSeverity::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub parameter: String,
    pub value: String,
    pub unit: String,
    pub normal_range: String,
    pub status: FindingStatus,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalysis {
    pub file_name: String,
    pub test_type: String,
    pub key_findings: Vec<Finding>,
    pub overall_assessment: String,
    pub recommendations: Vec<String>,
    pub suggested_tests: Vec<String>,
    pub severity: ReportSeverity,
    pub risk_factors: Vec<String>,
}

fn finding(
    parameter: &str,
    value: &str,
    unit: &str,
    normal_range: &str,
    status: FindingStatus,
    explanation: &str,
) -> Finding {
    Finding {
        parameter: parameter.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        normal_range: normal_range.to_string(),
        status,
        explanation: explanation.to_string(),
    }
}

/// Produce the canned demo analysis for any file name.
pub fn mock_analysis(file_name: &str) -> ReportAnalysis {
    let key_findings = vec![
        finding(
            "Total Cholesterol",
            "220",
            "mg/dL",
            "< 200",
            FindingStatus::High,
            "Your cholesterol level is above the recommended range, which may increase your risk of heart disease.",
        ),
        finding(
            "HDL Cholesterol",
            "45",
            "mg/dL",
            "40-60",
            FindingStatus::Normal,
            "Your HDL (good) cholesterol is within the normal range, which is beneficial for heart health.",
        ),
        finding(
            "Blood Glucose",
            "110",
            "mg/dL",
            "70-99",
            FindingStatus::High,
            "Your fasting glucose level is slightly elevated, which may indicate prediabetes.",
        ),
        finding(
            "Hemoglobin",
            "13.5",
            "g/dL",
            "12.0-15.5",
            FindingStatus::Normal,
            "Your hemoglobin level is normal, indicating healthy oxygen-carrying capacity.",
        ),
    ];

    ReportAnalysis {
        file_name: file_name.to_string(),
        test_type: "Complete Blood Panel".to_string(),
        key_findings,
        overall_assessment: "Your blood test shows some areas that need attention. While most values are normal, your cholesterol and glucose levels are slightly elevated.".to_string(),
        recommendations: vec![
            "Adopt a heart-healthy diet low in saturated fats".to_string(),
            "Increase physical activity to at least 150 minutes per week".to_string(),
            "Monitor your blood sugar levels regularly".to_string(),
            "Schedule a follow-up appointment with your doctor in 3 months".to_string(),
            "Consider consulting a nutritionist for personalized dietary advice".to_string(),
        ],
        suggested_tests: vec![
            "HbA1c Test (for diabetes screening)".to_string(),
            "Lipid Panel (follow-up in 3 months)".to_string(),
            "Thyroid Function Test".to_string(),
        ],
        severity: ReportSeverity::Mild,
        risk_factors: vec![
            "Elevated cholesterol may increase cardiovascular risk".to_string(),
            "Slightly high glucose may indicate insulin resistance".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mock_is_identical_for_any_input() {
        let a = mock_analysis("bloodwork.pdf");
        let b = mock_analysis("anything_else.png");
        assert_eq!(a.key_findings, b.key_findings);
        assert_eq!(a.overall_assessment, b.overall_assessment);
        assert_eq!(a.severity, ReportSeverity::Mild);
        assert_eq!(a.file_name, "bloodwork.pdf");
        assert_eq!(b.file_name, "anything_else.png");
    }

    #[test]
    fn test_mock_is_well_formed() {
        let analysis = mock_analysis("report.jpg");
        assert_eq!(analysis.key_findings.len(), 4);
        assert_eq!(analysis.recommendations.len(), 5);
        assert_eq!(analysis.suggested_tests.len(), 3);
        assert_eq!(analysis.risk_factors.len(), 2);
        for finding in &analysis.key_findings {
            assert!(!finding.parameter.is_empty());
            assert!(!finding.explanation.is_empty());
        }
    }

    #[test]
    fn test_validate_rejects_unsupported_extension() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        assert!(matches!(
            validate_upload(&path),
            Err(UploadError::UnsupportedType(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn test_validate_rejects_oversized_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("scan.pdf");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_UPLOAD_BYTES + 1).unwrap();

        assert!(matches!(validate_upload(&path), Err(UploadError::TooLarge(_))));
    }

    #[test]
    fn test_validate_accepts_small_pdf_case_insensitive() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("scan.PDF");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4").unwrap();

        assert!(validate_upload(&path).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_file() {
        let path = std::path::Path::new("/nonexistent/scan.pdf");
        assert!(matches!(validate_upload(path), Err(UploadError::Unreadable(_))));
    }
}
