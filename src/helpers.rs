use strsim::levenshtein;

use crate::store::FeedStore;

/// Find the most similar ID from a list of candidates
pub fn find_similar_id<'a>(target: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter(|&&candidate| candidate != target)
        .map(|&candidate| (candidate, levenshtein(target, candidate)))
        .filter(|(_, distance)| *distance <= 2)
        .min_by_key(|(_, distance)| *distance)
        .map(|(id, _)| id)
}

/// Closest existing post id to one that matched nothing.
pub fn suggest_post_id(post_id: &str, store: &FeedStore) -> Option<String> {
    find_similar_id(post_id, &store.post_ids()).map(str::to_owned)
}
