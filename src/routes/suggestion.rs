use axum::{extract::State, Json};

use crate::server::AppState;
use crate::suggest::{suggest_or_apologize, Suggestion};

/// GET /api/suggestion
///
/// Never fails; provider errors become the connection-error card and an
/// empty provider answer is `null`.
pub async fn get_suggestion(State(state): State<AppState>) -> Json<Option<Suggestion>> {
    // Release the lock before calling out
    let user = state.store.read().await.user.clone();
    Json(suggest_or_apologize(state.suggestions.as_ref(), &user).await)
}
