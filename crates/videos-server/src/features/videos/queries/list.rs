//! List videos query

use crate::models::VideoRecord;
use crate::store::VideoStore;

/// Query for every stored video, in insertion order
#[derive(Debug, Clone, Copy, Default)]
pub struct ListVideosQuery;

#[tracing::instrument(skip(store))]
pub fn handle(store: &VideoStore, _query: ListVideosQuery) -> Vec<VideoRecord> {
    let videos = store.list();
    tracing::debug!(count = videos.len(), "Videos listed");
    videos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shared::test_helpers::TestVideo;

    #[test]
    fn test_handle_empty_store() {
        assert!(handle(&VideoStore::new(), ListVideosQuery).is_empty());
    }

    #[test]
    fn test_handle_returns_all_in_order() {
        let store = VideoStore::new();
        let first = TestVideo::new("first", "a").insert(&store);
        let second = TestVideo::new("second", "b").insert(&store);

        assert_eq!(handle(&store, ListVideosQuery), vec![first, second]);
    }
}
