mod tests {
    use myrtio_ambient_light::filter::{MAX_WINDOW_SIZE, OutlierFilter};

    #[test]
    fn test_repeated_samples_are_never_outliers() {
        let mut filter: OutlierFilter = OutlierFilter::new(420, 10, 3.0);
        for _ in 0..25 {
            let observation = filter.observe(420);
            assert!(!observation.is_outlier);
            assert_eq!(observation.value, 420.0);
        }
        assert_eq!(filter.running_average(), 420.0);
        assert_eq!(filter.running_std_dev(), 0.0);
    }

    #[test]
    fn test_average_converges_after_one_window() {
        let mut filter: OutlierFilter = OutlierFilter::new(0, 10, 3.0);
        for _ in 0..10 {
            filter.observe(420);
        }
        assert_eq!(filter.running_average(), 420.0);
        assert!(!filter.observe(420).is_outlier);
    }

    #[test]
    fn test_running_sum_tracks_window() {
        let mut filter: OutlierFilter = OutlierFilter::new(7, 4, 3.0);
        assert_eq!(filter.sum(), 28);

        // Fewer observations than the window still include seeded values
        filter.observe(10);
        filter.observe(20);
        assert_eq!(filter.sum(), 10 + 20 + 7 + 7);

        filter.observe(30);
        filter.observe(40);
        filter.observe(50);
        assert_eq!(filter.sum(), 20 + 30 + 40 + 50);
        assert_eq!(filter.running_average(), 35.0);

        let window_sum: u32 = filter.samples().iter().map(|&s| u32::from(s)).sum();
        assert_eq!(filter.sum(), window_sum);
    }

    #[test]
    fn test_spike_is_replaced_by_previous_average() {
        let mut filter: OutlierFilter = OutlierFilter::new(100, 10, 3.0);
        let observation = filter.observe(60_000);
        assert!(observation.is_outlier);
        assert_eq!(observation.value, 100.0);
        assert_eq!(observation.sample, 60_000);

        // The spike still entered the window
        assert_eq!(filter.sum(), 900 + 60_000);
        assert_eq!(observation.running_average, 6090.0);
    }

    #[test]
    fn test_spike_with_loose_threshold() {
        let mut filter: OutlierFilter = OutlierFilter::new(100, 10, 40.0);
        assert!(filter.observe(60_000).is_outlier);
    }

    #[test]
    fn test_small_step_passes_loose_threshold() {
        // Window [110, 100 x 9]: mean 101, std 3, bound 40 * sqrt(0.3) ~ 21.9
        let mut filter: OutlierFilter = OutlierFilter::new(100, 10, 40.0);
        let observation = filter.observe(110);
        assert!(!observation.is_outlier);
        assert_eq!(observation.value, 110.0);
    }

    #[test]
    fn test_small_step_fails_tight_threshold() {
        // Same window, bound 3 * sqrt(0.3) ~ 1.6
        let mut filter: OutlierFilter = OutlierFilter::new(100, 10, 3.0);
        let observation = filter.observe(110);
        assert!(observation.is_outlier);
        assert_eq!(observation.value, 100.0);
    }

    #[test]
    fn test_single_slot_window_never_flags() {
        let mut filter: OutlierFilter = OutlierFilter::new(0, 1, 3.0);
        for sample in [0, 65_535, 3, 40_000, 1] {
            let observation = filter.observe(sample);
            assert!(!observation.is_outlier);
            assert_eq!(observation.value, f32::from(sample));
        }
    }

    #[test]
    fn test_std_dev_over_window() {
        let mut filter: OutlierFilter = OutlierFilter::new(0, 2, 3.0);
        filter.observe(10);
        assert_eq!(filter.running_average(), 5.0);
        assert_eq!(filter.running_std_dev(), 5.0);
    }

    #[test]
    fn test_large_window_keeps_configured_length() {
        let mut filter: OutlierFilter = OutlierFilter::new(0, 100, 3.0);
        assert_eq!(filter.window_size(), 100);
        for sample in 1..=100 {
            filter.observe(sample);
        }
        assert_eq!(filter.sum(), 5050);
        assert_eq!(filter.running_average(), 50.5);
    }

    #[test]
    fn test_window_size_is_clamped() {
        let filter: OutlierFilter = OutlierFilter::new(1, 0, 3.0);
        assert_eq!(filter.window_size(), 1);

        let filter: OutlierFilter = OutlierFilter::new(1, 1000, 3.0);
        assert_eq!(filter.window_size(), MAX_WINDOW_SIZE);

        let filter = OutlierFilter::<4>::new(1, 10, 3.0);
        assert_eq!(filter.window_size(), 4);
        assert_eq!(filter.sum(), 4);
    }
}
