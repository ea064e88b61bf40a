use crate::{Effect, GalleryState, LoadPhase, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: GalleryState, msg: Msg) -> (GalleryState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageReady => {
            // The persisted order, if any, must win over the default first
            // batch, so the store is consulted before anything is realized.
            vec![Effect::ReadSavedOrder]
        }
        Msg::SavedOrderLoaded(saved) => {
            // An empty persisted array carries no arrangement; treat it like
            // absent state and take the standard batch path.
            match saved.filter(|order| !order.is_empty()) {
                Some(order) => {
                    state.restore_order(order);
                    vec![
                        Effect::RebuildGallery {
                            urls: state.displayed_urls(),
                        },
                        Effect::RelabelPositions,
                    ]
                }
                None => begin_batch_load(&mut state),
            }
        }
        Msg::ScrollNearBottom => match state.phase() {
            LoadPhase::Idle => begin_batch_load(&mut state),
            // The LoadingBatch gate and the Done terminal both swallow
            // scroll triggers.
            LoadPhase::LoadingBatch | LoadPhase::Done => Vec::new(),
        },
        Msg::BatchDelayElapsed => {
            if state.phase() == LoadPhase::LoadingBatch {
                let urls = state.commit_batch();
                vec![
                    Effect::AppendImages { urls },
                    Effect::HideLoadingIndicator,
                    Effect::RelabelPositions,
                ]
            } else {
                // Stray timer fire; an in-flight load cannot be cancelled but
                // nothing else schedules this message.
                Vec::new()
            }
        }
        Msg::ReorderCommitted(order) => {
            state.apply_reorder(order);
            vec![
                Effect::WriteSavedOrder {
                    order: state.displayed_urls(),
                },
                Effect::RelabelPositions,
            ]
        }
        Msg::ImageLoadFailed { index } => {
            if state.hide_slot(index) {
                vec![Effect::HideImage { index }]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Starts a batch load unless the cursor already covers the source list, in
/// which case the loader settles into `Done`.
fn begin_batch_load(state: &mut GalleryState) -> Vec<Effect> {
    if state.exhausted() {
        state.settle_phase();
        state.mark_dirty();
        return Vec::new();
    }
    state.begin_batch();
    vec![Effect::ShowLoadingIndicator, Effect::ScheduleBatchAppend]
}
