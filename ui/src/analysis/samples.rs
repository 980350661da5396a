//! Preset farm coordinates for quick testing.

use crate::core::geolocation::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleLocation {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl SampleLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

pub const SAMPLE_LOCATIONS: [SampleLocation; 7] = [
    SampleLocation { name: "🌾 Punjab Wheat Farm", latitude: 30.9010, longitude: 75.8573 },
    SampleLocation { name: "🌶 Karnataka Spice Farm", latitude: 12.9716, longitude: 77.5946 },
    SampleLocation { name: "🍚 West Bengal Rice Field", latitude: 22.5726, longitude: 88.3639 },
    SampleLocation { name: "🌿 Kerala Tea Garden", latitude: 10.8505, longitude: 76.2711 },
    SampleLocation { name: "🌱 Maharashtra Cotton Farm", latitude: 20.7002, longitude: 77.0082 },
    SampleLocation { name: "🥜 Gujarat Groundnut Farm", latitude: 22.2587, longitude: 71.1924 },
    SampleLocation { name: "🌾 UP Sugarcane Field", latitude: 26.8467, longitude: 80.9462 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = SAMPLE_LOCATIONS.iter().map(|s| s.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SAMPLE_LOCATIONS.len());
    }

    #[test]
    fn coordinates_are_within_india() {
        for sample in SAMPLE_LOCATIONS {
            assert!((6.0..=37.0).contains(&sample.latitude), "{}", sample.name);
            assert!((68.0..=98.0).contains(&sample.longitude), "{}", sample.name);
        }
    }
}
