/// The tunable knobs of the heuristic evaluation
///
/// Every feature the heuristic looks at has its own weight here, and its own method that turns
/// the raw feature into the amount it adds to or takes away from the score.
///
/// ```rust
/// use pacman_rs::HeuristicWeights;
///
/// let weights = HeuristicWeights::default();
///
/// assert!((weights.food_count_penalty(80) - 1.0).abs() < 1e-9);
/// assert_eq!(weights.ghost_band_penalty(0), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeuristicWeights {
    /// Taken off the score for every food pellet still on the board
    ///
    /// Defaults to 1/80
    pub food_count: f64,
    /// Taken off the score for every capsule still on the board
    ///
    /// Defaults to 1
    pub capsule_count: f64,
    /// Divided by the distance to the nearest food and added to the score
    ///
    /// Defaults to 1
    pub food_proximity: f64,
    /// The distance used for the proximity bonus when there is no food left, or we are standing
    /// on it. Values below 1 are treated as 1
    pub zero_distance_substitute: u32,
    /// Ghosts this close or closer count as danger
    ///
    /// Defaults to 3
    pub danger_radius: u32,
    /// Penalty for a dangerous ghost, indexed by its distance. Ghosts further away than the last
    /// band cost nothing
    ///
    /// Defaults to `[4, 3, 2]`
    pub danger_bands: [f64; 3],
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            food_count: 1.0 / 80.0,
            capsule_count: 1.0,
            food_proximity: 1.0,
            zero_distance_substitute: 1,
            danger_radius: 3,
            danger_bands: [4.0, 3.0, 2.0],
        }
    }
}

impl HeuristicWeights {
    /// What the food still on the board costs
    pub fn food_count_penalty(&self, food_count: usize) -> f64 {
        food_count as f64 * self.food_count
    }

    /// What the capsules still on the board cost
    pub fn capsule_count_penalty(&self, capsule_count: usize) -> f64 {
        capsule_count as f64 * self.capsule_count
    }

    /// `food_proximity / distance`, with `None` meaning there is no food left
    pub fn food_proximity_bonus(&self, nearest_food: Option<u32>) -> f64 {
        let distance = match nearest_food {
            Some(0) | None => self.zero_distance_substitute,
            Some(d) => d,
        }
        .max(1);

        self.food_proximity / distance as f64
    }

    /// What a single ghost costs at this distance, ignoring the danger radius
    pub fn ghost_band_penalty(&self, ghost_distance: u32) -> f64 {
        self.danger_bands
            .get(ghost_distance as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Penalty for all the ghosts at once, given how far each of them is from us
    ///
    /// Nothing is taken off unless at least one ghost is inside the danger radius. Once one is,
    /// every ghost contributes its band penalty.
    pub fn danger_penalty(&self, ghost_distances: &[u32]) -> f64 {
        let danger = ghost_distances
            .iter()
            .filter(|d| **d <= self.danger_radius)
            .count();

        if danger == 0 {
            return 0.0;
        }

        ghost_distances
            .iter()
            .map(|d| self.ghost_band_penalty(*d))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_penalties() {
        let weights = HeuristicWeights::default();

        assert_eq!(weights.food_count_penalty(0), 0.0);
        assert!((weights.food_count_penalty(40) - 0.5).abs() < 1e-9);
        assert_eq!(weights.capsule_count_penalty(2), 2.0);
        assert!(weights.food_count_penalty(1) < weights.capsule_count_penalty(1));
    }

    #[test]
    fn test_food_proximity_bonus() {
        let weights = HeuristicWeights::default();

        assert_eq!(weights.food_proximity_bonus(Some(1)), 1.0);
        assert_eq!(weights.food_proximity_bonus(Some(4)), 0.25);
        assert_eq!(weights.food_proximity_bonus(Some(0)), 1.0);
        assert_eq!(weights.food_proximity_bonus(None), 1.0);

        for d in 1..20 {
            let closer = weights.food_proximity_bonus(Some(d));
            assert!(closer >= weights.food_proximity_bonus(Some(d + 1)));
        }
    }

    #[test]
    fn test_zero_substitute_never_divides_by_zero() {
        let weights = HeuristicWeights {
            zero_distance_substitute: 0,
            ..Default::default()
        };

        assert!(weights.food_proximity_bonus(Some(0)).is_finite());
        assert!(weights.food_proximity_bonus(None).is_finite());
    }

    #[test]
    fn test_danger_penalty() {
        let weights = HeuristicWeights::default();

        assert_eq!(weights.danger_penalty(&[]), 0.0);
        assert_eq!(weights.danger_penalty(&[4, 10]), 0.0);
        assert_eq!(weights.danger_penalty(&[3]), 0.0);
        assert_eq!(weights.danger_penalty(&[2]), 2.0);
        assert_eq!(weights.danger_penalty(&[1]), 3.0);
        assert_eq!(weights.danger_penalty(&[0]), 4.0);
        assert_eq!(weights.danger_penalty(&[0, 1, 7]), 7.0);
    }

    #[test]
    fn test_closer_ghosts_never_cost_less() {
        let weights = HeuristicWeights::default();

        for other in 0..6 {
            for d in 0..8 {
                let closer = weights.danger_penalty(&[d, other]);
                let further = weights.danger_penalty(&[d + 1, other]);
                assert!(closer >= further, "{} vs {} with another ghost at {}", d, d + 1, other);
            }
        }
    }

    #[test]
    fn test_deserialize_partial_weights() {
        let weights: HeuristicWeights =
            serde_json::from_str(r#"{"capsuleCount": 5.0, "dangerRadius": 2}"#).unwrap();

        assert_eq!(weights.capsule_count, 5.0);
        assert_eq!(weights.danger_radius, 2);
        assert_eq!(weights.food_count, HeuristicWeights::default().food_count);
        assert_eq!(weights.danger_bands, [4.0, 3.0, 2.0]);
    }
}
