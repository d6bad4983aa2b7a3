//! Health knowledge quiz.

/// One multiple-choice question. `correct` indexes into `options`.
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

/// The fixed five-question bank, served in order.
pub const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        question: "How many glasses of water should you drink daily?",
        options: &["4-5 glasses", "8-10 glasses", "12-15 glasses", "2-3 glasses"],
        correct: 1,
        explanation: "Adults should drink 8-10 glasses of water daily to stay properly hydrated.",
    },
    QuizQuestion {
        question: "How many hours of sleep do adults need per night?",
        options: &["4-5 hours", "7-9 hours", "10-12 hours", "5-6 hours"],
        correct: 1,
        explanation: "Adults need 7-9 hours of quality sleep for optimal health and recovery.",
    },
    QuizQuestion {
        question: "Which vitamin is produced when skin is exposed to sunlight?",
        options: &["Vitamin A", "Vitamin C", "Vitamin D", "Vitamin E"],
        correct: 2,
        explanation: "Vitamin D is synthesized in the skin when exposed to UVB rays from sunlight.",
    },
    QuizQuestion {
        question: "How often should you exercise per week for good health?",
        options: &["Once a week", "150 minutes of moderate activity", "Every day intensely", "Only on weekends"],
        correct: 1,
        explanation: "WHO recommends at least 150 minutes of moderate aerobic activity per week.",
    },
    QuizQuestion {
        question: "What is the normal resting heart rate for adults?",
        options: &["40-50 bpm", "100-120 bpm", "60-100 bpm", "120-140 bpm"],
        correct: 2,
        explanation: "A normal resting heart rate for adults ranges from 60 to 100 beats per minute.",
    },
];

/// Count correct answers. `answers[i]` is the chosen option index for
/// question `i`; out-of-range or missing answers count as wrong.
pub fn score_quiz(answers: &[Option<usize>]) -> usize {
    QUESTIONS
        .iter()
        .zip(answers.iter().chain(std::iter::repeat(&None)))
        .filter(|(q, a)| **a == Some(q.correct))
        .count()
}

/// Verdict line for a final score.
pub fn verdict(score: usize, total: usize) -> &'static str {
    if score == total {
        "Perfect! You're a health expert!"
    } else if score as f64 >= total as f64 * 0.8 {
        "Great job! You know your health facts!"
    } else if score as f64 >= total as f64 * 0.6 {
        "Good work! Keep learning about health!"
    } else {
        "Keep studying! Health knowledge is important!"
    }
}
