//! Cache key layout.

/// Key of the distinguished "latest comic" slot.
pub const LATEST: &str = "latest";

/// Key for a comic by provider identifier.
pub fn comic(id: u32) -> String {
    format!("comic-{id}")
}
