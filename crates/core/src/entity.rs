//! Entity trait: the named entity kind an action concerns.

/// Entity marker + name.
///
/// Implement this for domain types that travel as action payloads so call sites
/// can build actions without repeating the entity name as a string literal.
pub trait Entity {
    /// Name used as the action's `entity_name` (e.g. `"Hero"`).
    const ENTITY_NAME: &'static str;
}
