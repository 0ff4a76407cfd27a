// src/models/question.rs

use serde::Serialize;
use sqlx::prelude::FromRow;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,

    /// The prompt shown to the candidate.
    pub text: String,

    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,

    /// Label of the correct option: "a", "b", "c" or "d".
    pub correct: String,
}

/// The four labelled options of a question.
#[derive(Debug, Serialize)]
pub struct QuestionOptions {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

/// DTO for sending a question to the client (excludes the correct label).
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub text: String,
    pub options: QuestionOptions,
}

impl From<Question> for PublicQuestion {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            options: QuestionOptions {
                a: q.a,
                b: q.b,
                c: q.c,
                d: q.d,
            },
        }
    }
}

/// Response of `GET /api/questions/{index}`: either the question or `{"done": true}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuestionSlot {
    Question(PublicQuestion),
    Done { done: bool },
}

impl QuestionSlot {
    pub fn done() -> Self {
        QuestionSlot::Done { done: true }
    }
}

/// A question inserted by the startup seed.
#[derive(Debug, Clone, Copy)]
pub struct SeedQuestion {
    pub text: &'static str,
    pub a: &'static str,
    pub b: &'static str,
    pub c: &'static str,
    pub d: &'static str,
    pub correct: &'static str,
}

/// Seeded in this order when the question table is empty.
pub const SEED_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        text: "Qual número completa a sequência: 2, 4, 8, 16, ?",
        a: "18",
        b: "24",
        c: "32",
        d: "34",
        correct: "c",
    },
    SeedQuestion {
        text: "Se todos os bloops são razzies e todos os razzies são lazzies, todos os bloops são lazzies?",
        a: "Sim",
        b: "Não",
        c: "Talvez",
        d: "Apenas às vezes",
        correct: "a",
    },
    SeedQuestion {
        text: "Quantos lados tem um dodecágono?",
        a: "10",
        b: "12",
        c: "14",
        d: "8",
        correct: "b",
    },
];
