mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_ambient_light::color::{ColorWheel, Rgb, WHITE, wheel};

    const CYCLE: Duration = Duration::from_millis(300);

    #[test]
    fn test_wheel_boundaries() {
        assert_eq!(wheel(0), Rgb::new(0, 255, 0));
        assert_eq!(wheel(84), Rgb::new(252, 3, 0));
        assert_eq!(wheel(85), Rgb::new(255, 0, 0));
        assert_eq!(wheel(169), Rgb::new(3, 0, 252));
        assert_eq!(wheel(170), Rgb::new(0, 0, 255));
        assert_eq!(wheel(255), Rgb::new(0, 255, 0));
    }

    #[test]
    fn test_color_holds_within_cycle() {
        let mut wheel = ColorWheel::new(CYCLE, Instant::from_millis(0));
        assert_eq!(wheel.color(Instant::from_millis(100)), WHITE);
        assert_eq!(wheel.color(Instant::from_millis(299)), WHITE);
        assert_eq!(wheel.step(), 0);
    }

    #[test]
    fn test_color_advances_one_step_per_call() {
        let mut wheel = ColorWheel::new(CYCLE, Instant::from_millis(0));
        // Far past several cycles still advances a single step
        let color = wheel.color(Instant::from_millis(5_000));
        assert_eq!(wheel.step(), 1);
        assert_eq!(color, Rgb::new(3, 252, 0));

        assert_eq!(wheel.color(Instant::from_millis(5_100)), color);
        assert_eq!(wheel.color(Instant::from_millis(5_300)), Rgb::new(6, 249, 0));
        assert_eq!(wheel.step(), 2);
        assert_eq!(wheel.current(), Rgb::new(6, 249, 0));
    }

    #[test]
    fn test_step_wraps() {
        let mut wheel = ColorWheel::new(CYCLE, Instant::from_millis(0));
        let mut now = 0;
        for _ in 0..256 {
            now += 300;
            wheel.color(Instant::from_millis(now));
        }
        assert_eq!(wheel.step(), 0);
        assert_eq!(wheel.current(), Rgb::new(0, 255, 0));
    }
}
