use strum::{Display, EnumIter};

/// Meteorological season, northern hemisphere. Declaration order is the
/// fixed display order used by the seasonal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_month(month: u32) -> Season {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_total_and_balanced() {
        let mut counts = [0_usize; 4];
        for month in 1..=12 {
            counts[Season::from_month(month) as usize] += 1;
        }
        assert_eq!(counts, [3, 3, 3, 3]);
    }

    #[test]
    fn winter_wraps_the_year_boundary() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(1), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(11), Season::Autumn);
    }

    #[test]
    fn display_labels() {
        assert_eq!(Season::Winter.to_string(), "Winter");
        assert_eq!(Season::Autumn.to_string(), "Autumn");
    }
}
