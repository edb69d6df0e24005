//! A tiny hand built game tree, so the search can be tested against known values without any
//! board rules getting in the way

use std::rc::Rc;

use types::types::*;

#[derive(Debug)]
pub(crate) struct TreeNode {
    value: f64,
    outcome: Option<bool>,
    children: Vec<(Move, Rc<TreeNode>)>,
}

/// A node with no children. Whoever is to move here has no legal actions
pub(crate) fn leaf(value: f64) -> Rc<TreeNode> {
    branch(value, vec![])
}

pub(crate) fn branch(value: f64, children: Vec<(Move, Rc<TreeNode>)>) -> Rc<TreeNode> {
    Rc::new(TreeNode {
        value,
        outcome: None,
        children,
    })
}

pub(crate) fn win(value: f64, children: Vec<(Move, Rc<TreeNode>)>) -> Rc<TreeNode> {
    Rc::new(TreeNode {
        value,
        outcome: Some(true),
        children,
    })
}

pub(crate) fn lose(value: f64, children: Vec<(Move, Rc<TreeNode>)>) -> Rc<TreeNode> {
    Rc::new(TreeNode {
        value,
        outcome: Some(false),
        children,
    })
}

/// A full tree where every node has `branching` children, `depth` levels deep
///
/// Values are spread out so that siblings rarely tie
pub(crate) fn uniform(branching: usize, depth: usize) -> Rc<TreeNode> {
    fn build(branching: usize, depth: usize, seed: u64) -> Rc<TreeNode> {
        let value = ((seed.wrapping_mul(2_654_435_761) % 1_000) as f64) / 10.0 - 50.0;

        if depth == 0 {
            return leaf(value);
        }

        let children = Move::all()
            .into_iter()
            .take(branching)
            .enumerate()
            .map(|(i, m)| {
                (
                    m,
                    build(branching, depth - 1, seed * branching as u64 + i as u64 + 1),
                )
            })
            .collect();

        branch(value, children)
    }

    build(branching, depth, 0)
}

/// Every agent walks the same tree, taking turns picking the next branch
#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    num_agents: usize,
    node: Rc<TreeNode>,
}

impl TreeGame {
    pub(crate) fn new(num_agents: usize, node: Rc<TreeNode>) -> Self {
        Self { num_agents, node }
    }

    pub(crate) fn value(&self) -> f64 {
        self.node.value
    }
}

impl AgentCountableGame for TreeGame {
    fn num_agents(&self) -> usize {
        self.num_agents
    }
}

impl LegalActionsGame for TreeGame {
    fn legal_actions(&self, _agent_index: AgentIndex) -> Vec<Move> {
        self.node.children.iter().map(|(m, _)| *m).collect()
    }
}

impl SuccessorGame for TreeGame {
    fn generate_successor(&self, _agent_index: AgentIndex, action: Move) -> Self {
        let node = self
            .node
            .children
            .iter()
            .find(|(m, _)| *m == action)
            .map(|(_, child)| child.clone())
            .unwrap_or_else(|| panic!("{} is not legal here", action));

        Self {
            num_agents: self.num_agents,
            node,
        }
    }
}

impl VictorDeterminableGame for TreeGame {
    fn is_win(&self) -> bool {
        self.node.outcome == Some(true)
    }

    fn is_lose(&self) -> bool {
        self.node.outcome == Some(false)
    }
}
