//! Spaced-repetition review page
//!
//! Cards are a fixed demo deck and ratings only feed session stats; no
//! scheduling math runs here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardKind {
    Text,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
    pub node_id: String,
    pub node_title: String,
    pub difficulty: Difficulty,
    pub next_review: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewMode {
    Dashboard,
    Session,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewFilter {
    All,
    Urgent,
    Node,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Again, Rating::Hard, Rating::Good, Rating::Easy];

    pub fn is_correct(self) -> bool {
        matches!(self, Rating::Good | Rating::Easy)
    }

    pub fn xp(self) -> u32 {
        if self.is_correct() {
            10
        } else {
            2
        }
    }

    /// Shown under each rating button
    pub fn interval_label(self) -> &'static str {
        match self {
            Rating::Again => "1m",
            Rating::Hard => "10m",
            Rating::Good => "1d",
            Rating::Easy => "4d",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Again => "Mal",
            Rating::Hard => "Difícil",
            Rating::Good => "Bien",
            Rating::Easy => "Fácil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub correct: u32,
    pub xp_gained: u32,
    pub streak_saved: bool,
}

/// Headline numbers on the review dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOverview {
    pub due_today: u32,
    pub overdue: u32,
    pub estimated_time: &'static str,
    pub potential_xp: u32,
}

pub const OVERVIEW: ReviewOverview = ReviewOverview {
    due_today: 42,
    overdue: 18,
    estimated_time: "~12m",
    potential_xp: 80,
};

pub fn demo_deck() -> Vec<Flashcard> {
    let card = |id: &str,
                front: &str,
                back: &str,
                node_id: &str,
                node_title: &str,
                difficulty,
                kind| Flashcard {
        id: id.to_string(),
        front: front.to_string(),
        back: back.to_string(),
        node_id: node_id.to_string(),
        node_title: node_title.to_string(),
        difficulty,
        next_review: "2024-03-20".to_string(),
        kind,
    };

    vec![
        card(
            "f1",
            "¿Qué etiqueta HTML se usa para enlaces?",
            "<a> (anchor tag)",
            "html-basics",
            "HTML Básico",
            Difficulty::Easy,
            CardKind::Text,
        ),
        card(
            "f2",
            "¿Cuál es la diferencia entre ID y Class?",
            "ID es único por página, Class puede usarse en múltiples elementos.",
            "css-basics",
            "CSS Fundamentos",
            Difficulty::Medium,
            CardKind::Text,
        ),
        card(
            "f3",
            "<code>const x = 10; x = 20;</code>\n¿Qué pasa aquí?",
            "Error. No se puede reasignar una constante.",
            "js-syntax",
            "JS Sintaxis",
            Difficulty::Hard,
            CardKind::Code,
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct ReviewSession {
    mode: ReviewMode,
    filter: Option<ReviewFilter>,
    cards: Vec<Flashcard>,
    index: usize,
    show_answer: bool,
    stats: SessionStats,
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSession {
    pub fn new() -> Self {
        Self {
            mode: ReviewMode::Dashboard,
            filter: None,
            cards: Vec::new(),
            index: 0,
            show_answer: false,
            stats: SessionStats::default(),
        }
    }

    pub fn mode(&self) -> ReviewMode {
        self.mode
    }

    pub fn filter(&self) -> Option<ReviewFilter> {
        self.filter
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn answer_visible(&self) -> bool {
        self.show_answer
    }

    /// Every filter loads the full demo deck
    pub fn start(&mut self, filter: ReviewFilter) {
        self.filter = Some(filter);
        self.cards = demo_deck();
        self.index = 0;
        self.show_answer = false;
        self.stats = SessionStats::default();
        self.mode = ReviewMode::Session;
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.mode {
            ReviewMode::Session => self.cards.get(self.index),
            _ => None,
        }
    }

    pub fn reveal(&mut self) {
        if self.mode == ReviewMode::Session {
            self.show_answer = true;
        }
    }

    /// Score the current card and advance; the last card ends the session
    pub fn rate(&mut self, rating: Rating) {
        if self.mode != ReviewMode::Session || self.cards.is_empty() {
            return;
        }

        if rating.is_correct() {
            self.stats.correct += 1;
        }
        self.stats.xp_gained += rating.xp();

        if self.index + 1 >= self.cards.len() {
            self.mode = ReviewMode::Summary;
        } else {
            self.index += 1;
            self.show_answer = false;
        }
    }

    /// Leave a session or summary without further scoring
    pub fn abort(&mut self) {
        self.mode = ReviewMode::Dashboard;
    }

    /// Progress bar fill, counted from cards already answered
    pub fn progress_percent(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        self.index as f64 / self.cards.len() as f64 * 100.0
    }

    /// "Tarjeta N de M"
    pub fn position_label(&self) -> String {
        format!("Tarjeta {} de {}", self.index + 1, self.cards.len())
    }

    pub fn is_decaying_card(&self) -> bool {
        self.current_card()
            .is_some_and(|c| c.node_id == "js-syntax")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_session() {
        let mut review = ReviewSession::new();
        assert_eq!(review.mode(), ReviewMode::Dashboard);

        review.start(ReviewFilter::All);
        assert_eq!(review.mode(), ReviewMode::Session);
        assert_eq!(review.cards().len(), 3);
        assert_eq!(review.progress_percent(), 0.0);

        review.reveal();
        assert!(review.answer_visible());
        review.rate(Rating::Good);
        assert!(!review.answer_visible());
        assert_eq!(review.current_card().unwrap().id, "f2");

        review.rate(Rating::Again);
        assert!(review.is_decaying_card());
        review.rate(Rating::Easy);

        assert_eq!(review.mode(), ReviewMode::Summary);
        assert_eq!(
            review.stats(),
            SessionStats {
                correct: 2,
                xp_gained: 22,
                streak_saved: false
            }
        );

        review.abort();
        assert_eq!(review.mode(), ReviewMode::Dashboard);
    }

    #[test]
    fn test_restart_resets_stats() {
        let mut review = ReviewSession::new();
        review.start(ReviewFilter::Urgent);
        review.rate(Rating::Easy);
        review.abort();

        review.start(ReviewFilter::Node);
        assert_eq!(review.stats(), SessionStats::default());
        assert_eq!(review.position_label(), "Tarjeta 1 de 3");
        assert_eq!(review.filter(), Some(ReviewFilter::Node));
    }

    #[test]
    fn test_rating_outside_session_is_ignored() {
        let mut review = ReviewSession::new();
        review.rate(Rating::Good);
        assert_eq!(review.stats(), SessionStats::default());
        assert_eq!(review.mode(), ReviewMode::Dashboard);
    }

    #[test]
    fn test_interval_labels() {
        let labels: Vec<_> = Rating::ALL.iter().map(|r| r.interval_label()).collect();
        assert_eq!(labels, vec!["1m", "10m", "1d", "4d"]);
        assert_eq!(OVERVIEW.due_today, 42);
    }
}
