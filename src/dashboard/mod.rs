use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::board::{BoardError, ScoreBoard};

#[derive(Clone)]
pub struct AppState {
    pub board: ScoreBoard,
}

/// Build the Axum router for the scoreboard service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summary", get(summary_handler))
        .route("/api/matches", post(start_handler))
        .route("/api/matches/score", post(update_score_handler))
        .route("/api/matches/finish", post(finish_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Serve the scoreboard HTML page.
async fn index_handler() -> Html<&'static str> {
    Html(SCOREBOARD_HTML)
}

#[derive(Debug, Deserialize)]
struct MatchRequest {
    home: String,
    away: String,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    home: String,
    away: String,
    home_score: i32,
    away_score: i32,
}

/// GET /api/summary
async fn summary_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let summary = state.board.summary();
    Json(summary.as_ref().clone())
}

/// POST /api/matches
async fn start_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MatchRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .board
        .start_match(&req.home, &req.away)
        .map(|m| (StatusCode::CREATED, Json(m)))
        .map_err(error_response)
}

/// POST /api/matches/score
async fn update_score_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScoreRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .board
        .update_score(&req.home, &req.away, req.home_score, req.away_score)
        .map(Json)
        .map_err(error_response)
}

/// POST /api/matches/finish
async fn finish_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MatchRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    state
        .board
        .finish_match(&req.home, &req.away)
        .map(Json)
        .map_err(error_response)
}

/// Map a board error onto the HTTP status the caller should see.
fn error_response(err: BoardError) -> (StatusCode, String) {
    let status = match err {
        BoardError::InvalidTeams(_) | BoardError::InvalidScore { .. } => StatusCode::BAD_REQUEST,
        BoardError::NotFound { .. } => StatusCode::NOT_FOUND,
        BoardError::AlreadyRunning { .. } | BoardError::NotActive { .. } => StatusCode::CONFLICT,
    };
    (status, err.to_string())
}

/// Embedded single-file scoreboard page (HTML + CSS + JS)
const SCOREBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Live Scoreboard</title>
<style>
  :root {
    --bg: #0f1117;
    --card: #1a1d27;
    --border: #2a2d3a;
    --accent: #6c63ff;
    --green: #00c896;
    --text: #e0e0e0;
    --muted: #8888aa;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: 'Segoe UI', system-ui, sans-serif; }
  header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
  header h1 { font-size: 1.4rem; font-weight: 700; }
  header .live { color: var(--green); font-size: 0.85rem; }
  main { max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
  .match { display: flex; align-items: center; justify-content: space-between; background: var(--card);
           border: 1px solid var(--border); border-radius: 8px; padding: 0.9rem 1.2rem; margin-bottom: 0.6rem; }
  .match .teams { font-weight: 600; }
  .match .score { font-size: 1.2rem; font-weight: 700; color: var(--accent); }
  .match .total { color: var(--muted); font-size: 0.8rem; margin-left: 0.8rem; }
  .empty { color: var(--muted); text-align: center; padding: 3rem 0; }
</style>
</head>
<body>
<header>
  <h1>Live Scoreboard</h1>
  <span class="live">&#9679; live</span>
</header>
<main id="summary"><div class="empty">No matches in progress</div></main>
<script>
async function refresh() {
  try {
    const res = await fetch('/api/summary');
    const matches = await res.json();
    const el = document.getElementById('summary');
    if (!matches.length) {
      el.innerHTML = '<div class="empty">No matches in progress</div>';
      return;
    }
    el.innerHTML = matches.map(m =>
      `<div class="match">
         <span class="teams">${m.home} &ndash; ${m.away}</span>
         <span><span class="score">${m.home_score} : ${m.away_score}</span>
         <span class="total">total ${m.home_score + m.away_score}</span></span>
       </div>`).join('');
  } catch (e) { /* server restarting; keep polling */ }
}
refresh();
setInterval(refresh, 2000);
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status_mapping() {
        let cases = [
            (BoardError::InvalidTeams("blank".into()), StatusCode::BAD_REQUEST),
            (BoardError::InvalidScore { home: -1, away: 0 }, StatusCode::BAD_REQUEST),
            (
                BoardError::NotFound { home: "A".into(), away: "B".into() },
                StatusCode::NOT_FOUND,
            ),
            (
                BoardError::AlreadyRunning { home: "A".into(), away: "B".into() },
                StatusCode::CONFLICT,
            ),
            (
                BoardError::NotActive { home: "A".into(), away: "B".into() },
                StatusCode::CONFLICT,
            ),
        ];
        for (err, expected) in cases {
            let (status, body) = error_response(err);
            assert_eq!(status, expected);
            assert!(!body.is_empty());
        }
    }
}
