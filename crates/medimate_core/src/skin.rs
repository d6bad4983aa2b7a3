//! Skin analysis rule engine.
//!
//! Derives a skin type from the questionnaire answers through an override
//! ladder, computes a 40-85 care score by subtracting fixed penalties from a
//! base of 85, and selects products from nested lookup tables. The daily
//! routine template and adoption schedule are identical for every user; only
//! products and tips vary. This mirrors the questionnaire it ships with.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Base care score before penalties.
const BASE_SCORE: i32 = 85;

/// Floor for the final score; penalties only subtract, so the result is
/// always within [40, 85].
const MIN_SCORE: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Exactly one option.
    Single,
    /// Any number of options.
    Multiple,
    /// A 1-10 rating.
    Scale,
}

/// One questionnaire entry. Ids are stable and referenced by the engine.
#[derive(Debug, Clone, Copy)]
pub struct SkinQuestion {
    pub id: u8,
    pub question: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [&'static str],
}

/// The 13-question skin questionnaire.
pub const QUESTIONS: &[SkinQuestion] = &[
    SkinQuestion {
        id: 1,
        question: "How would you describe your skin type?",
        kind: QuestionKind::Single,
        options: &["Oily", "Dry", "Combination", "Normal", "Sensitive"],
    },
    SkinQuestion {
        id: 2,
        question: "What are your main skin concerns? (Select all that apply)",
        kind: QuestionKind::Multiple,
        options: &[
            "Acne/Breakouts",
            "Dark Spots",
            "Fine Lines/Wrinkles",
            "Large Pores",
            "Dullness",
            "Redness/Irritation",
            "Uneven Texture",
            "Dark Circles",
        ],
    },
    SkinQuestion {
        id: 3,
        question: "How often do you break out?",
        kind: QuestionKind::Single,
        options: &[
            "Never",
            "Rarely (once a month)",
            "Sometimes (2-3 times a month)",
            "Often (weekly)",
            "Very often (daily)",
        ],
    },
    SkinQuestion {
        id: 4,
        question: "How does your skin feel by midday?",
        kind: QuestionKind::Single,
        options: &[
            "Very oily all over",
            "Oily in T-zone only",
            "Normal/comfortable",
            "Tight or dry",
            "Flaky or very dry",
        ],
    },
    SkinQuestion {
        id: 5,
        question: "How does your skin react to new products?",
        kind: QuestionKind::Single,
        options: &[
            "No reaction",
            "Mild irritation sometimes",
            "Often gets irritated",
            "Very sensitive, reacts easily",
            "Breaks out frequently",
        ],
    },
    SkinQuestion {
        id: 6,
        question: "What is your current skincare routine?",
        kind: QuestionKind::Single,
        options: &[
            "No routine",
            "Basic (cleanser only)",
            "Simple (cleanser + moisturizer)",
            "Moderate (3-4 products)",
            "Extensive (5+ products)",
        ],
    },
    SkinQuestion {
        id: 7,
        question: "How much time do you spend in the sun daily?",
        kind: QuestionKind::Single,
        options: &[
            "Less than 30 minutes",
            "30 minutes - 1 hour",
            "1-2 hours",
            "2-4 hours",
            "More than 4 hours",
        ],
    },
    SkinQuestion {
        id: 8,
        question: "Do you currently use sunscreen?",
        kind: QuestionKind::Single,
        options: &["Daily", "Sometimes", "Only when going out", "Rarely", "Never"],
    },
    SkinQuestion {
        id: 9,
        question: "How would you rate your stress levels?",
        kind: QuestionKind::Scale,
        options: &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
    },
    SkinQuestion {
        id: 10,
        question: "How many hours of sleep do you get per night?",
        kind: QuestionKind::Single,
        options: &[
            "Less than 5 hours",
            "5-6 hours",
            "6-7 hours",
            "7-8 hours",
            "More than 8 hours",
        ],
    },
    SkinQuestion {
        id: 11,
        question: "How often do you drink water daily?",
        kind: QuestionKind::Single,
        options: &[
            "Less than 4 glasses",
            "4-6 glasses",
            "6-8 glasses",
            "8-10 glasses",
            "More than 10 glasses",
        ],
    },
    SkinQuestion {
        id: 12,
        question: "What is your age range?",
        kind: QuestionKind::Single,
        options: &["Under 18", "18-25", "26-35", "36-45", "46-55", "Over 55"],
    },
    SkinQuestion {
        id: 13,
        question: "What is your primary skincare goal?",
        kind: QuestionKind::Single,
        options: &[
            "Prevent aging",
            "Clear acne",
            "Even skin tone",
            "Hydrate skin",
            "Reduce sensitivity",
            "General maintenance",
        ],
    },
];

/// An answer to one question.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    One(String),
    Many(Vec<String>),
}

/// Answers keyed by question id.
pub type SkinAnswers = BTreeMap<u8, Answer>;

fn single(answers: &SkinAnswers, id: u8) -> Option<&str> {
    match answers.get(&id) {
        Some(Answer::One(value)) => Some(value.as_str()),
        _ => None,
    }
}

fn multi(answers: &SkinAnswers, id: u8) -> Vec<String> {
    match answers.get(&id) {
        Some(Answer::Many(values)) => values.clone(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub description: String,
    pub usage: String,
}

fn product(name: &str, description: &str, usage: &str) -> Product {
    Product {
        name: name.to_string(),
        description: description.to_string(),
        usage: usage.to_string(),
    }
}

/// The five recommended products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSet {
    pub cleanser: Product,
    pub toner: Product,
    pub serum: Product,
    pub moisturizer: Product,
    pub sunscreen: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    pub step: u8,
    pub product: String,
    pub instruction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub morning: Vec<RoutineStep>,
    pub evening: Vec<RoutineStep>,
}

/// Full analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAnalysis {
    pub skin_type: String,
    pub primary_concerns: Vec<String>,
    pub skin_score: i32,
    pub recommendations: ProductSet,
    pub routine: Routine,
    pub tips: Vec<String>,
    pub schedule: String,
}

/// Run the questionnaire analysis.
pub fn analyze(answers: &SkinAnswers) -> SkinAnalysis {
    let skin_type = derive_skin_type(answers);
    let primary_concerns = multi(answers, 2);
    let skin_score = compute_score(answers);

    let recommendations = recommend_products(&skin_type, &primary_concerns);
    let tips = build_tips(&skin_type, &primary_concerns, answers);

    SkinAnalysis {
        skin_type,
        primary_concerns,
        skin_score,
        recommendations,
        routine: daily_routine(),
        tips,
        schedule: ADOPTION_SCHEDULE.to_string(),
    }
}

/// Self-report (Q1), overridden by midday feel (Q4), finally overridden by
/// high sensitivity (Q5). Later overrides win.
fn derive_skin_type(answers: &SkinAnswers) -> String {
    let mut skin_type = single(answers, 1).unwrap_or("Normal").to_string();

    if let Some(feel) = single(answers, 4) {
        if feel.contains("Very oily") {
            skin_type = "Oily".to_string();
        } else if feel.contains("Tight") || feel.contains("Flaky") {
            skin_type = "Dry".to_string();
        } else if feel.contains("T-zone") {
            skin_type = "Combination".to_string();
        }
    }

    if single(answers, 5).is_some_and(|s| s.contains("Very sensitive")) {
        skin_type = "Sensitive".to_string();
    }

    skin_type
}

fn compute_score(answers: &SkinAnswers) -> i32 {
    let mut score = BASE_SCORE;

    if single(answers, 3).is_some_and(|a| a.contains("Often") || a.contains("Very often")) {
        score -= 15;
    }
    if single(answers, 7).is_some_and(|a| a.contains("More than 4 hours")) {
        score -= 10;
    }
    if single(answers, 8).is_some_and(|a| a == "Never" || a == "Rarely") {
        score -= 20;
    }
    if single(answers, 9).and_then(|a| a.parse::<i32>().ok()).is_some_and(|n| n > 7) {
        score -= 10;
    }
    if single(answers, 10).is_some_and(|a| a.contains("Less than 5")) {
        score -= 10;
    }
    if single(answers, 11).is_some_and(|a| a.contains("Less than 4")) {
        score -= 10;
    }

    score.max(MIN_SCORE)
}

fn recommend_products(skin_type: &str, concerns: &[String]) -> ProductSet {
    let cleanser = match skin_type {
        "Oily" => product(
            "Salicylic Acid Foaming Cleanser",
            "Deep-cleansing foam that removes excess oil and unclogs pores",
            "Use twice daily, morning and evening",
        ),
        "Dry" => product(
            "Gentle Cream Cleanser",
            "Hydrating cleanser that removes impurities without stripping natural oils",
            "Use twice daily with lukewarm water",
        ),
        "Sensitive" => product(
            "Fragrance-Free Gentle Cleanser",
            "Mild, non-irritating formula perfect for sensitive skin",
            "Use once or twice daily as tolerated",
        ),
        _ => product(
            "Balanced pH Gel Cleanser",
            "Gentle yet effective cleanser suitable for all skin types",
            "Use twice daily, morning and evening",
        ),
    };

    let toner = match skin_type {
        "Oily" => product(
            "BHA Clarifying Toner",
            "Helps control oil production and minimize pores",
            "Apply with cotton pad after cleansing, evening only initially",
        ),
        "Dry" => product(
            "Hyaluronic Acid Hydrating Toner",
            "Provides deep hydration and plumps the skin",
            "Pat gently into skin after cleansing, twice daily",
        ),
        _ => product(
            "Rose Water Balancing Toner",
            "Natural toner that balances pH and provides gentle hydration",
            "Apply with cotton pad or pat into skin after cleansing",
        ),
    };

    // Serum follows the first matching concern, in priority order.
    let serum = if concerns.iter().any(|c| c == "Dark Spots") {
        product(
            "Vitamin C Brightening Serum",
            "Powerful antioxidant that fades dark spots and evens skin tone",
            "Apply in the morning before moisturizer, start 3x per week",
        )
    } else if concerns.iter().any(|c| c == "Fine Lines/Wrinkles") {
        product(
            "Retinol Anti-Aging Serum",
            "Stimulates cell turnover and reduces signs of aging",
            "Apply at night, start 2x per week and gradually increase",
        )
    } else if concerns.iter().any(|c| c == "Acne/Breakouts") {
        product(
            "Niacinamide Pore Refining Serum",
            "Reduces oil production and minimizes breakouts",
            "Apply twice daily after toner",
        )
    } else {
        product(
            "Hyaluronic Acid Hydrating Serum",
            "Provides intense hydration and plumps the skin",
            "Apply to damp skin before moisturizer, twice daily",
        )
    };

    let moisturizer = match skin_type {
        "Oily" => product(
            "Oil-Free Gel Moisturizer",
            "Lightweight, non-comedogenic formula that hydrates without clogging pores",
            "Apply twice daily as the last step in your routine",
        ),
        "Dry" => product(
            "Rich Ceramide Cream",
            "Deeply nourishing cream that restores the skin barrier",
            "Apply generously twice daily, especially after showering",
        ),
        _ => product(
            "Balanced Hydrating Lotion",
            "Perfect balance of hydration for normal to combination skin",
            "Apply twice daily after serum",
        ),
    };

    // Same sunscreen for everyone.
    let sunscreen = product(
        "Broad Spectrum SPF 30+ Sunscreen",
        "Essential protection against UV damage and premature aging",
        "Apply every morning as the final step, reapply every 2 hours",
    );

    ProductSet {
        cleanser,
        toner,
        serum,
        moisturizer,
        sunscreen,
    }
}

fn step(step: u8, product: &str, instruction: &str) -> RoutineStep {
    RoutineStep {
        step,
        product: product.to_string(),
        instruction: instruction.to_string(),
    }
}

/// The two-phase daily routine. Identical for every user regardless of skin
/// type or concerns.
fn daily_routine() -> Routine {
    Routine {
        morning: vec![
            step(1, "Gentle Cleanser", "Cleanse face with lukewarm water"),
            step(2, "Toner", "Apply toner to balance skin pH"),
            step(3, "Vitamin C Serum", "Apply serum for antioxidant protection"),
            step(4, "Moisturizer", "Hydrate and protect skin barrier"),
            step(5, "Sunscreen SPF 30+", "Apply generously for UV protection"),
        ],
        evening: vec![
            step(1, "Cleanser", "Remove makeup and daily impurities"),
            step(2, "Toner", "Prepare skin for treatment products"),
            step(3, "Treatment Serum", "Apply targeted treatment for concerns"),
            step(4, "Night Moisturizer", "Nourish and repair overnight"),
        ],
    }
}

fn build_tips(skin_type: &str, concerns: &[String], answers: &SkinAnswers) -> Vec<String> {
    let mut tips = vec![
        "Always patch test new products before full application".to_string(),
        "Introduce new products one at a time to monitor reactions".to_string(),
        "Be consistent with your routine for at least 4-6 weeks to see results".to_string(),
    ];

    if skin_type == "Oily" {
        tips.push("Avoid over-cleansing as it can increase oil production".to_string());
        tips.push("Use blotting papers instead of washing face multiple times".to_string());
    }

    if skin_type == "Dry" {
        tips.push("Apply moisturizer to damp skin to lock in hydration".to_string());
        tips.push("Use a humidifier in dry environments".to_string());
    }

    if concerns.iter().any(|c| c == "Acne/Breakouts") {
        tips.push("Avoid touching your face throughout the day".to_string());
        tips.push("Change pillowcases regularly to prevent bacteria buildup".to_string());
    }

    if single(answers, 8).is_some_and(|a| a == "Never" || a == "Rarely") {
        tips.push(
            "Sunscreen is crucial - UV damage is the #1 cause of premature aging".to_string(),
        );
    }

    tips
}

/// Fixed four-phase adoption schedule, identical for all users.
const ADOPTION_SCHEDULE: &str = "Week 1-2: Start with basic routine (cleanser, moisturizer, sunscreen)
Week 3-4: Introduce toner gradually
Week 5-6: Add serum 2-3 times per week
Week 7+: Full routine with all products as tolerated

Monthly: Assess skin changes and adjust products as needed
Quarterly: Consider professional skin consultation";

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral_answers() -> SkinAnswers {
        let mut answers = SkinAnswers::new();
        answers.insert(1, Answer::One("Normal".to_string()));
        answers.insert(2, Answer::Many(vec![]));
        answers.insert(3, Answer::One("Never".to_string()));
        answers.insert(4, Answer::One("Normal/comfortable".to_string()));
        answers.insert(5, Answer::One("No reaction".to_string()));
        answers.insert(6, Answer::One("Simple (cleanser + moisturizer)".to_string()));
        answers.insert(7, Answer::One("Less than 30 minutes".to_string()));
        answers.insert(8, Answer::One("Daily".to_string()));
        answers.insert(9, Answer::One("3".to_string()));
        answers.insert(10, Answer::One("7-8 hours".to_string()));
        answers.insert(11, Answer::One("6-8 glasses".to_string()));
        answers.insert(12, Answer::One("26-35".to_string()));
        answers.insert(13, Answer::One("General maintenance".to_string()));
        answers
    }

    #[test]
    fn test_neutral_answers_score_base() {
        let result = analyze(&neutral_answers());
        assert_eq!(result.skin_score, 85);
        assert_eq!(result.skin_type, "Normal");
    }

    #[test]
    fn test_score_example_sunscreen_never_breakouts_often() {
        let mut answers = neutral_answers();
        answers.insert(3, Answer::One("Often (weekly)".to_string()));
        answers.insert(8, Answer::One("Never".to_string()));
        let result = analyze(&answers);
        assert_eq!(result.skin_score, 50);
    }

    #[test]
    fn test_score_is_floored_at_40() {
        let mut answers = neutral_answers();
        answers.insert(3, Answer::One("Very often (daily)".to_string()));
        answers.insert(7, Answer::One("More than 4 hours".to_string()));
        answers.insert(8, Answer::One("Rarely".to_string()));
        answers.insert(9, Answer::One("9".to_string()));
        answers.insert(10, Answer::One("Less than 5 hours".to_string()));
        answers.insert(11, Answer::One("Less than 4 glasses".to_string()));
        // All penalties together would be 85 - 75 = 10
        let result = analyze(&answers);
        assert_eq!(result.skin_score, 40);
    }

    #[test]
    fn test_score_always_within_bounds() {
        // Exhaustive over the answers that feed the score
        for q3 in QUESTIONS[2].options {
            for q8 in QUESTIONS[7].options {
                for q9 in QUESTIONS[8].options {
                    let mut answers = neutral_answers();
                    answers.insert(3, Answer::One(q3.to_string()));
                    answers.insert(8, Answer::One(q8.to_string()));
                    answers.insert(9, Answer::One(q9.to_string()));
                    let score = analyze(&answers).skin_score;
                    assert!((40..=85).contains(&score), "score {} out of range", score);
                }
            }
        }
    }

    #[test]
    fn test_empty_answers_still_analyze() {
        let result = analyze(&SkinAnswers::new());
        assert_eq!(result.skin_type, "Normal");
        assert_eq!(result.skin_score, 85);
        assert!(result.primary_concerns.is_empty());
    }

    #[test]
    fn test_midday_feel_overrides_self_report() {
        let mut answers = neutral_answers();
        answers.insert(1, Answer::One("Dry".to_string()));
        answers.insert(4, Answer::One("Very oily all over".to_string()));
        assert_eq!(analyze(&answers).skin_type, "Oily");

        answers.insert(4, Answer::One("Oily in T-zone only".to_string()));
        assert_eq!(analyze(&answers).skin_type, "Combination");

        answers.insert(4, Answer::One("Flaky or very dry".to_string()));
        assert_eq!(analyze(&answers).skin_type, "Dry");
    }

    #[test]
    fn test_sensitivity_override_wins_last() {
        let mut answers = neutral_answers();
        answers.insert(1, Answer::One("Oily".to_string()));
        answers.insert(4, Answer::One("Very oily all over".to_string()));
        answers.insert(5, Answer::One("Very sensitive, reacts easily".to_string()));
        let result = analyze(&answers);
        assert_eq!(result.skin_type, "Sensitive");
        assert_eq!(result.recommendations.cleanser.name, "Fragrance-Free Gentle Cleanser");
    }

    #[test]
    fn test_serum_concern_priority_order() {
        let mut answers = neutral_answers();
        answers.insert(
            2,
            Answer::Many(vec![
                "Acne/Breakouts".to_string(),
                "Dark Spots".to_string(),
            ]),
        );
        // Dark Spots outranks Acne regardless of selection order
        let result = analyze(&answers);
        assert_eq!(result.recommendations.serum.name, "Vitamin C Brightening Serum");

        answers.insert(2, Answer::Many(vec!["Acne/Breakouts".to_string()]));
        let result = analyze(&answers);
        assert_eq!(result.recommendations.serum.name, "Niacinamide Pore Refining Serum");

        answers.insert(2, Answer::Many(vec!["Dullness".to_string()]));
        let result = analyze(&answers);
        assert_eq!(result.recommendations.serum.name, "Hyaluronic Acid Hydrating Serum");
    }

    #[test]
    fn test_sunscreen_is_constant() {
        let oily = analyze(&{
            let mut a = neutral_answers();
            a.insert(1, Answer::One("Oily".to_string()));
            a
        });
        let dry = analyze(&{
            let mut a = neutral_answers();
            a.insert(1, Answer::One("Dry".to_string()));
            a
        });
        assert_eq!(oily.recommendations.sunscreen, dry.recommendations.sunscreen);
    }

    #[test]
    fn test_routine_and_schedule_identical_for_everyone() {
        let a = analyze(&neutral_answers());
        let b = analyze(&{
            let mut ans = neutral_answers();
            ans.insert(1, Answer::One("Oily".to_string()));
            ans.insert(2, Answer::Many(vec!["Acne/Breakouts".to_string()]));
            ans
        });
        assert_eq!(a.routine, b.routine);
        assert_eq!(a.schedule, b.schedule);
        assert_eq!(a.routine.morning.len(), 5);
        assert_eq!(a.routine.evening.len(), 4);
    }

    #[test]
    fn test_conditional_tips() {
        let mut answers = neutral_answers();
        answers.insert(1, Answer::One("Oily".to_string()));
        answers.insert(2, Answer::Many(vec!["Acne/Breakouts".to_string()]));
        answers.insert(8, Answer::One("Rarely".to_string()));
        let tips = analyze(&answers).tips;
        // 3 universal + 2 oily + 2 acne + 1 sunscreen
        assert_eq!(tips.len(), 8);
        assert!(tips.iter().any(|t| t.contains("blotting papers")));
        assert!(tips.iter().any(|t| t.contains("pillowcases")));
        assert!(tips.iter().any(|t| t.contains("Sunscreen is crucial")));
    }

    #[test]
    fn test_questionnaire_shape() {
        assert_eq!(QUESTIONS.len(), 13);
        assert_eq!(QUESTIONS[1].kind, QuestionKind::Multiple);
        assert_eq!(QUESTIONS[8].kind, QuestionKind::Scale);
        for (i, q) in QUESTIONS.iter().enumerate() {
            assert_eq!(q.id as usize, i + 1);
            assert!(!q.options.is_empty());
        }
    }
}
