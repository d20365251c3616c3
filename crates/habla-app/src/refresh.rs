use std::sync::Arc;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Keeps the autocomplete language list fresh until `shutdown` fires.
/// The first tick completes immediately, so the list is loaded at startup.
pub async fn refresh_languages(state: Arc<AppState>, shutdown: CancellationToken) {
    let period = state.config.translator.languages_refresh_interval();
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            _ = interval.tick() => {
                let translator = state.orchestrator.translator().as_ref();
                if let Err(e) = state.languages.refresh(translator).await {
                    tracing::error!("Failed to refresh supported languages: {e}");
                }
            }
        }
    }

    tracing::debug!("language refresh stopped");
}
