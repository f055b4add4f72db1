// ============================================================================
// Identifiers
// Random v4 UUID generation
// ============================================================================

use uuid::Uuid;

/// Generate a random v4 UUID.
pub fn new_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Generate a random v4 UUID in hyphenated string form.
pub fn new_uuid_string() -> String {
    new_uuid().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uuid_is_v4() {
        let id = new_uuid();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_new_uuid_string_shape() {
        let id = new_uuid_string();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }

    #[test]
    fn test_uuids_are_unique() {
        assert_ne!(new_uuid(), new_uuid());
    }
}
