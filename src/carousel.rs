#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Self::Next),
            "ArrowLeft" => Some(Self::Previous),
            _ => None,
        }
    }
}

pub fn step_target(scroll_left: f64, card_width: f64, gap: f64, direction: Direction) -> f64 {
    let step = card_width + gap;
    match direction {
        Direction::Next => scroll_left + step,
        Direction::Previous => scroll_left - step,
    }
}

/// Share of the track already scrolled past, in percent. A track that does
/// not overflow reports 0.
pub fn progress_percent(scroll_left: f64, scroll_width: f64, client_width: f64) -> f64 {
    let range = scroll_width - client_width;
    if !range.is_finite() || range <= 0.0 {
        return 0.0;
    }

    (scroll_left / range * 100.0).clamp(0.0, 100.0)
}

pub fn progress_style(percent: f64) -> String {
    format!("width: {percent}%;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(progress_percent(0.0, 2_400.0, 800.0), 0.0);
        assert_eq!(progress_percent(1_600.0, 2_400.0, 800.0), 100.0);
        assert_eq!(progress_percent(400.0, 2_400.0, 800.0), 25.0);
    }

    #[test]
    fn non_overflowing_track_reports_zero() {
        assert_eq!(progress_percent(0.0, 800.0, 800.0), 0.0);
        assert_eq!(progress_percent(0.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(progress_percent(1_700.0, 2_400.0, 800.0), 100.0);
        assert_eq!(progress_percent(-30.0, 2_400.0, 800.0), 0.0);
    }

    #[test]
    fn steps_move_by_card_plus_gap() {
        assert_eq!(step_target(0.0, 300.0, 24.0, Direction::Next), 324.0);
        assert_eq!(step_target(648.0, 300.0, 24.0, Direction::Previous), 324.0);
    }

    #[test]
    fn arrow_keys_map_to_directions() {
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Next));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Previous));
        assert_eq!(Direction::from_key("ArrowUp"), None);
    }

    #[test]
    fn style_renders_percentage_width() {
        assert_eq!(progress_style(0.0), "width: 0%;");
        assert_eq!(progress_style(100.0), "width: 100%;");
    }
}
