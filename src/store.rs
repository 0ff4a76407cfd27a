// src/store.rs

use std::str::FromStr;

use chrono::SubsecRound;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::{
    error::AppError,
    models::{
        candidate::{CandidateSummary, ScoreSummary},
        question::{Question, SEED_QUESTIONS},
    },
};

/// Handle to the quiz database.
///
/// Opened once at startup and cloned into the router state; clones share the same pool.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the SQLite database at `database_url`.
    ///
    /// Foreign keys are declared in the schema but not enforced, so an answer referencing an
    /// unknown candidate or question is still stored.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Ensures the schema exists and seeds the question set when it is empty.
    /// Safe to call more than once.
    pub async fn initialize(&self) -> Result<(), AppError> {
        tracing::info!("Applying schema...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;

        let seeded = self.seed_questions().await?;
        if seeded > 0 {
            tracing::info!("Seeded {} questions.", seeded);
        }
        Ok(())
    }

    /// Inserts the fixed question set if no question exists yet. Returns how many were inserted.
    async fn seed_questions(&self) -> Result<usize, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *tx)
            .await?;

        if count > 0 {
            return Ok(0);
        }

        for q in SEED_QUESTIONS {
            sqlx::query("INSERT INTO questions (text, a, b, c, d, correct) VALUES (?, ?, ?, ?, ?, ?)")
                .bind(q.text)
                .bind(q.a)
                .bind(q.b)
                .bind(q.c)
                .bind(q.d)
                .bind(q.correct)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(SEED_QUESTIONS.len())
    }

    pub async fn create_candidate(&self, name: &str, email: &str) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO candidates (name, email, start_time) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(chrono::Utc::now().naive_utc().trunc_subsecs(6))
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Returns the question at zero-based `index` in insertion order.
    pub async fn question_at(&self, index: i64) -> Result<Option<Question>, sqlx::Error> {
        if index < 0 {
            return Ok(None);
        }

        sqlx::query_as::<_, Question>(
            "SELECT id, text, a, b, c, d, correct FROM questions ORDER BY id LIMIT 1 OFFSET ?",
        )
        .bind(index)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn question_count(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn correct_answer(&self, question_id: i64) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT correct FROM questions WHERE id = ?")
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Stores one submission. Repeated submissions for the same question are all kept.
    pub async fn record_answer(
        &self,
        candidate_id: Option<i64>,
        question_id: Option<i64>,
        answer: Option<&str>,
        is_correct: bool,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO answers (candidate_id, question_id, answer, correct) VALUES (?, ?, ?, ?)",
        )
        .bind(candidate_id)
        .bind(question_id)
        .bind(answer)
        .bind(i64::from(is_correct))
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Score and answer count of one candidate; zero for unknown ids.
    pub async fn candidate_score(&self, candidate_id: i64) -> Result<ScoreSummary, sqlx::Error> {
        sqlx::query_as::<_, ScoreSummary>(
            r#"
            SELECT
                COALESCE(SUM(correct), 0) AS score,
                COUNT(*) AS total
            FROM answers
            WHERE candidate_id = ?
            "#,
        )
        .bind(candidate_id)
        .fetch_one(&self.pool)
        .await
    }

    /// All candidates with derived scores, newest first.
    pub async fn candidates_with_scores(&self) -> Result<Vec<CandidateSummary>, sqlx::Error> {
        sqlx::query_as::<_, CandidateSummary>(
            r#"
            SELECT
                c.id,
                c.name,
                c.email,
                c.start_time,
                COALESCE(SUM(a.correct), 0) AS score,
                COUNT(a.id) AS total
            FROM candidates c
            LEFT JOIN answers a ON a.candidate_id = c.id
            GROUP BY c.id
            ORDER BY c.start_time DESC, c.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
