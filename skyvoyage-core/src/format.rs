/// `445` -> `7h 25m`
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn format_stops(stops: u32) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(445), "7h 25m");
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(0), "0h 0m");
    }

    #[test]
    fn test_format_stops() {
        assert_eq!(format_stops(0), "Nonstop");
        assert_eq!(format_stops(1), "1 stop");
        assert_eq!(format_stops(2), "2 stops");
    }
}
