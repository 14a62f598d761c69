pub mod temperature {
    use crate::stats::round1;

    /// Degree-Celsius suffix carried by every rendered temperature.
    pub const DEGREE_C: &str = "°C";

    /// Fahrenheit to Celsius, rounded to one decimal place.
    pub fn f2c(temp_f: f64) -> f64 {
        round1((temp_f - 32.0) * 5.0 / 9.0)
    }

    /// Renders an already-converted temperature as e.g. `7.2°C`.
    pub fn format_celsius(temp_c: f64) -> String {
        format!("{temp_c:.1}{DEGREE_C}")
    }

    #[test]
    fn test_temperature() {
        assert_eq!(f2c(212.0), 100.0);
        assert_eq!(f2c(32.0), 0.0);
        assert_eq!(f2c(50.0), 10.0);
        assert_eq!(f2c(100.0), 37.8);
        assert_eq!(f2c(0.0), -17.8);
    }

    #[test]
    fn test_format_celsius() {
        assert_eq!(format_celsius(7.2), "7.2°C");
        assert_eq!(format_celsius(0.0), "0.0°C");
        assert_eq!(format_celsius(-3.5), "-3.5°C");
    }
}
