mod tests {
    use std::{cell::Cell, rc::Rc};

    use embassy_time::{Duration, Instant};
    use myrtio_ambient_light::button::{ButtonEdges, ButtonLevel, Debouncer};

    #[derive(Clone, Default)]
    struct FakePin(Rc<Cell<bool>>);

    impl ButtonLevel for FakePin {
        fn is_pressed(&mut self) -> bool {
            self.0.get()
        }
    }

    fn debouncer(pin: &FakePin) -> Debouncer<FakePin> {
        Debouncer::with_interval(pin.clone(), Duration::from_millis(10), Instant::from_millis(0))
    }

    #[test]
    fn test_press_is_reported_once_after_settling() {
        let pin = FakePin::default();
        let mut button = debouncer(&pin);

        pin.0.set(true);
        button.update(Instant::from_millis(100));
        assert!(!button.rose());

        button.update(Instant::from_millis(110));
        assert!(button.rose());
        assert!(button.is_pressed());

        button.update(Instant::from_millis(120));
        assert!(!button.rose());
        assert!(button.is_pressed());
    }

    #[test]
    fn test_release_reports_fell_not_rose() {
        let pin = FakePin::default();
        let mut button = debouncer(&pin);

        pin.0.set(true);
        button.update(Instant::from_millis(100));
        button.update(Instant::from_millis(110));

        pin.0.set(false);
        button.update(Instant::from_millis(200));
        button.update(Instant::from_millis(215));
        assert!(!button.rose());
        assert!(button.fell());
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_bounce_restarts_settle_timer() {
        let pin = FakePin::default();
        let mut button = debouncer(&pin);

        pin.0.set(true);
        button.update(Instant::from_millis(100));
        pin.0.set(false);
        button.update(Instant::from_millis(105));
        pin.0.set(true);
        button.update(Instant::from_millis(108));

        button.update(Instant::from_millis(115));
        assert!(!button.rose());

        button.update(Instant::from_millis(118));
        assert!(button.rose());
    }

    #[test]
    fn test_button_held_at_startup_has_no_edge() {
        let pin = FakePin::default();
        pin.0.set(true);
        let mut button = debouncer(&pin);

        button.update(Instant::from_millis(50));
        assert!(!button.rose());
        assert!(button.is_pressed());
    }

    #[test]
    fn test_zero_interval_commits_immediately() {
        let pin = FakePin::default();
        let mut button = Debouncer::with_interval(pin.clone(), Duration::from_millis(0), Instant::from_millis(0));

        pin.0.set(true);
        button.update(Instant::from_millis(1));
        assert!(button.rose());
    }
}
