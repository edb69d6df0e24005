use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// How the agents other than the root agent are expected to play
pub enum AdversaryModel {
    /// Every adversary picks the move that is worst for the root agent
    #[default]
    Minimax,
    /// Every adversary picks uniformly at random among its legal moves
    Expectimax,
}

impl AdversaryModel {
    /// The kind of node an adversary's turn turns into under this model
    pub fn adversary_node_kind(&self) -> NodeKind {
        match self {
            AdversaryModel::Minimax => NodeKind::Min,
            AdversaryModel::Expectimax => NodeKind::Chance,
        }
    }
}

impl fmt::Display for AdversaryModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdversaryModel::Minimax => write!(f, "minimax"),
            AdversaryModel::Expectimax => write!(f, "expectimax"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How the scores of a node's children are folded into the node's own score
pub enum NodeKind {
    /// The root agent's turn, take the highest child
    Max,
    /// A worst case adversary's turn, take the lowest child
    Min,
    /// A random adversary's turn, take the mean of the children
    Chance,
}

impl NodeKind {
    /// Fold child scores into a single score for this node
    ///
    /// Returns `None` when there are no children, there is nothing sensible to pick or average
    /// in that case.
    pub fn combine(&self, scores: impl IntoIterator<Item = f64>) -> Option<f64> {
        let mut scores = scores.into_iter().peekable();
        scores.peek()?;

        let combined = match self {
            NodeKind::Max => scores.fold(f64::NEG_INFINITY, f64::max),
            NodeKind::Min => scores.fold(f64::INFINITY, f64::min),
            NodeKind::Chance => {
                let (sum, count) = scores
                    .fold((0.0, 0usize), |(sum, count), s| (sum + s, count + 1));
                sum / count as f64
            }
        };

        Some(combined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_and_min() {
        assert_eq!(NodeKind::Max.combine([3.0, 12.0, 8.0]), Some(12.0));
        assert_eq!(NodeKind::Min.combine([3.0, 12.0, 8.0]), Some(3.0));
    }

    #[test]
    fn test_chance_is_the_mean() {
        let combined = NodeKind::Chance.combine([1.0, 2.0, 6.0]).unwrap();
        assert!((combined - 3.0).abs() < 1e-9);

        let combined = NodeKind::Chance.combine([-0.5]).unwrap();
        assert!((combined + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_children() {
        assert_eq!(NodeKind::Max.combine(Vec::<f64>::new()), None);
        assert_eq!(NodeKind::Min.combine(Vec::<f64>::new()), None);
        assert_eq!(NodeKind::Chance.combine(Vec::<f64>::new()), None);
    }

    #[test]
    fn test_adversary_node_kinds() {
        assert_eq!(AdversaryModel::default(), AdversaryModel::Minimax);
        assert_eq!(AdversaryModel::Minimax.adversary_node_kind(), NodeKind::Min);
        assert_eq!(AdversaryModel::Expectimax.adversary_node_kind(), NodeKind::Chance);
    }
}
