//! Tests for per-seed progress tracking

#[cfg(test)]
mod tests {
    use donjon::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use donjon::io::progress::ProgressManager;
    use std::time::Duration;

    // Tests a single seed stepping through every stage
    #[test]
    fn test_progress_single_seed() {
        let mut pm = ProgressManager::new();

        pm.initialize(1);
        pm.start_seed(0, 42, 7);
        for stage in 1..=7 {
            pm.update_stage(0, stage, "rooms");
        }
        pm.complete_seed(0, Duration::from_millis(5));
        pm.finish();

        assert_eq!(pm.seed_count(), 1);
    }

    // Tests default trait implementation
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();
        assert_eq!(pm.seed_count(), 0);
        pm.finish();
    }

    // Tests batch mode keeps tracking past the visible bars
    #[test]
    fn test_progress_batch_mode() {
        let mut pm = ProgressManager::new();
        let seed_count = MAX_INDIVIDUAL_PROGRESS_BARS + 3;
        pm.initialize(seed_count);

        for index in 0..seed_count {
            pm.start_seed(index, index as u64, 7);
            pm.update_stage(index, 3, "labels");
            pm.complete_seed(index, Duration::from_millis(1));
        }
        pm.finish();

        assert_eq!(pm.seed_count(), seed_count);
    }

    // Tests updates for unknown seeds are ignored
    #[test]
    fn test_progress_unknown_index() {
        let mut pm = ProgressManager::new();
        pm.initialize(2);

        pm.update_stage(5, 1, "rooms");
        pm.complete_seed(5, Duration::ZERO);
        assert_eq!(pm.seed_count(), 0);

        pm.start_seed(1, 3, 7);
        assert_eq!(pm.seed_count(), 2);
        pm.finish();
    }
}
