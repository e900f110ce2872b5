use std::path::Path;

use crate::certificate::TrackingId;

pub fn generate_tracking_id() -> TrackingId {
    TrackingId::generate()
}

pub fn ensure_dirs(outcomes_folder: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(outcomes_folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_request_gets_a_new_identifier() {
        assert_ne!(generate_tracking_id(), generate_tracking_id());
    }

    #[test]
    fn ensure_dirs_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let outcomes = dir.path().join("outcomes/nested");
        ensure_dirs(&outcomes).unwrap();
        ensure_dirs(&outcomes).unwrap();
        assert!(outcomes.is_dir());
    }
}
