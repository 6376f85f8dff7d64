/// Identifier given to the first post of an empty partition.
pub const FIRST_POST_ID: i64 = 0;

/// Computes the next post identifier from the highest one already stored.
pub fn next_post_id(highest: Option<i64>) -> i64 {
    match highest {
        Some(id) if id >= FIRST_POST_ID => id.saturating_add(1),
        _ => FIRST_POST_ID,
    }
}
