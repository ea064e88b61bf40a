use gallery_core::{update, Effect, GalleryState, Msg};
use pretty_assertions::assert_eq;

fn init_logging() {
    gallery_logging::initialize_for_tests();
}

fn urls(count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("https://img.example.com/{i}.jpg"))
        .collect()
}

fn loaded_state(count: usize, batch_size: usize) -> GalleryState {
    let state = GalleryState::new(urls(count), batch_size);
    let (state, _) = update(state, Msg::SavedOrderLoaded(None));
    let (state, _) = update(state, Msg::BatchDelayElapsed);
    state
}

#[test]
fn reorder_writes_the_scanned_order_and_relabels() {
    init_logging();
    let state = loaded_state(3, 50);
    let reordered: Vec<String> = state.displayed_urls().into_iter().rev().collect();

    let (state, effects) = update(state, Msg::ReorderCommitted(reordered.clone()));
    assert_eq!(
        effects,
        vec![
            Effect::WriteSavedOrder {
                order: reordered.clone()
            },
            Effect::RelabelPositions,
        ]
    );

    let view = state.view();
    assert_eq!(view.images[0].url, reordered[0]);
    assert_eq!(view.images[0].position, 1);
    assert_eq!(view.images[2].url, reordered[2]);
    assert_eq!(view.images[2].position, 3);
}

#[test]
fn hidden_flag_follows_its_url_through_a_reorder() {
    init_logging();
    let state = loaded_state(3, 50);
    let (state, effects) = update(state, Msg::ImageLoadFailed { index: 0 });
    assert_eq!(effects, vec![Effect::HideImage { index: 0 }]);
    let broken = state.view().images[0].url.clone();

    let reordered: Vec<String> = state.displayed_urls().into_iter().rev().collect();
    let (state, _) = update(state, Msg::ReorderCommitted(reordered));

    let view = state.view();
    let moved = view.images.iter().find(|row| row.url == broken).unwrap();
    assert!(moved.hidden);
    assert_eq!(moved.position, 3);
    assert!(view.images.iter().filter(|row| row.hidden).count() == 1);
}

#[test]
fn image_failure_hides_in_place_without_renumbering() {
    init_logging();
    let state = loaded_state(3, 50);
    let (state, _) = update(state, Msg::ImageLoadFailed { index: 1 });

    // Hidden slots keep their DOM position, so labels are untouched.
    let view = state.view();
    assert_eq!(
        view.images.iter().map(|row| row.position).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert!(view.images[1].hidden);
}

#[test]
fn stale_image_failure_index_is_ignored() {
    init_logging();
    let state = loaded_state(3, 50);
    let before = state.clone();
    let (state, effects) = update(state, Msg::ImageLoadFailed { index: 7 });
    assert!(effects.is_empty());
    assert_eq!(state, before);
}
