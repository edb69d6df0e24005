use text_trees::StringTreeNode;
use types::types::{AgentIndex, Move};

use super::NodeKind;

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a search
/// It contains all the information we generated about the game tree
pub enum SearchReturn {
    /// This is a non-leaf node in the game tree
    /// We have information about all the options we looked at as well as the combined score
    Node {
        /// Which agent was moving at this node
        agent_index: AgentIndex,
        /// How the children were folded into `score`
        kind: NodeKind,
        /// A 'recursive' look at all the moves under us
        /// This is in the order the game reported the legal actions in
        options: Vec<(Move, Self)>,
        /// The combined score of all the options
        score: f64,
    },
    /// Represents a leaf node in the game tree
    /// This happens when we reach a won or lost state, when we reach the maximum depth, or when
    /// the moving agent has no legal actions
    Leaf {
        #[allow(missing_docs)]
        score: f64,
    },
}

impl SearchReturn {
    /// Build a node out of its options, combining their scores according to `kind`
    ///
    /// Returns `None` if there are no options
    pub fn node(
        agent_index: AgentIndex,
        kind: NodeKind,
        options: Vec<(Move, SearchReturn)>,
    ) -> Option<Self> {
        let score = kind.combine(options.iter().map(|(_, r)| r.score()))?;

        Some(SearchReturn::Node {
            agent_index,
            kind,
            options,
            score,
        })
    }

    /// Returns the score for this node
    pub fn score(&self) -> f64 {
        match self {
            SearchReturn::Node { score, .. } => *score,
            SearchReturn::Leaf { score } => *score,
        }
    }

    /// The option the moving agent at this node goes with
    ///
    /// At a max node this is the first option with the strictly greatest score, at a min node
    /// the first option with the strictly lowest score. Later options that tie never replace an
    /// earlier one. Chance nodes and leaves don't pick anything
    pub fn chosen_option(&self) -> Option<&(Move, SearchReturn)> {
        match self {
            SearchReturn::Leaf { .. } => None,
            SearchReturn::Node {
                kind: NodeKind::Chance,
                ..
            } => None,
            SearchReturn::Node { kind, options, .. } => {
                let better = |candidate: f64, current: f64| {
                    if *kind == NodeKind::Max {
                        candidate > current
                    } else {
                        candidate < current
                    }
                };

                options
                    .iter()
                    .fold(None::<&(Move, SearchReturn)>, |chosen, option| match chosen {
                        Some(current) if !better(option.1.score(), current.1.score()) => {
                            Some(current)
                        }
                        _ => Some(option),
                    })
            }
        }
    }

    /// Returns the move the agent at this node should make
    /// If we are a leaf or a chance node, this will return None
    pub fn best_action(&self) -> Option<Move> {
        self.chosen_option().map(|(m, _)| *m)
    }

    /// Returns all the moves in the 'route' through the game tree that the search took
    /// This is useful for debugging as it shows each of the moves we and our opponents made during
    /// the search. The route stops at the first leaf or chance node
    pub fn chosen_route(&self) -> Vec<(AgentIndex, Move)> {
        match (self, self.chosen_option()) {
            (SearchReturn::Node { agent_index, .. }, Some((m, next))) => {
                let mut tail = next.chosen_route();
                tail.insert(0, (*agent_index, *m));
                tail
            }
            _ => vec![],
        }
    }

    /// Number of nodes in this tree, leaves included
    pub fn node_count(&self) -> usize {
        match self {
            SearchReturn::Leaf { .. } => 1,
            SearchReturn::Node { options, .. } => {
                1 + options.iter().map(|(_, r)| r.node_count()).sum::<usize>()
            }
        }
    }

    /// This returns a visual representation of the game tree that the search generated
    /// It shows the score, the moving agent and the move taken at each level
    pub fn to_text_tree(&self) -> String {
        format!("{}", self.to_text_tree_node("root".to_owned()))
    }

    fn to_text_tree_node(&self, label: String) -> StringTreeNode {
        match self {
            SearchReturn::Leaf { score } => StringTreeNode::new(format!("{} {:.3}", label, score)),
            SearchReturn::Node {
                agent_index,
                kind,
                options,
                score,
            } => {
                let mut node =
                    StringTreeNode::new(format!("{} {:?} {:.3}", label, kind, score));
                for (m, result) in options {
                    node.push_node(result.to_text_tree_node(format!("{} {}", agent_index, m)));
                }

                node
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(score: f64) -> SearchReturn {
        SearchReturn::Leaf { score }
    }

    #[test]
    fn test_max_node_keeps_first_of_ties() {
        let node = SearchReturn::node(
            0,
            NodeKind::Max,
            vec![
                (Move::North, leaf(1.0)),
                (Move::East, leaf(5.0)),
                (Move::West, leaf(5.0)),
            ],
        )
        .unwrap();

        assert_eq!(node.score(), 5.0);
        assert_eq!(node.best_action(), Some(Move::East));
    }

    #[test]
    fn test_min_node_picks_lowest() {
        let node = SearchReturn::node(
            1,
            NodeKind::Min,
            vec![
                (Move::North, leaf(4.0)),
                (Move::South, leaf(-2.0)),
                (Move::Stop, leaf(-2.0)),
            ],
        )
        .unwrap();

        assert_eq!(node.score(), -2.0);
        assert_eq!(node.best_action(), Some(Move::South));
    }

    #[test]
    fn test_chance_node_has_no_choice() {
        let node = SearchReturn::node(
            1,
            NodeKind::Chance,
            vec![(Move::North, leaf(4.0)), (Move::South, leaf(-2.0))],
        )
        .unwrap();

        assert_eq!(node.score(), 1.0);
        assert_eq!(node.best_action(), None);
        assert!(node.chosen_route().is_empty());
    }

    #[test]
    fn test_empty_node() {
        assert_eq!(SearchReturn::node(0, NodeKind::Max, vec![]), None);
    }

    #[test]
    fn test_chosen_route_and_count() {
        let ghost = SearchReturn::node(
            1,
            NodeKind::Min,
            vec![(Move::West, leaf(7.0)), (Move::East, leaf(3.0))],
        )
        .unwrap();
        let root = SearchReturn::node(
            0,
            NodeKind::Max,
            vec![(Move::Stop, leaf(1.0)), (Move::North, ghost)],
        )
        .unwrap();

        assert_eq!(root.score(), 3.0);
        assert_eq!(root.chosen_route(), vec![(0, Move::North), (1, Move::East)]);
        assert_eq!(root.node_count(), 5);

        let text = root.to_text_tree();
        assert!(text.contains("root Max 3.000"));
        assert!(text.contains("0 north Min 3.000"));
        assert!(text.contains("1 east 3.000"));
    }
}
