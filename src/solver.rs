//! A* graph search over the 8-puzzle state space.
//!
//! Nodes live in an arena owned by the search and refer to their parent by index,
//! so the search tree never needs shared ownership and a solution ancestor outlives
//! its frontier entry for free.
use crate::engine::{Board, BoardKey, Slide};
use crate::heuristics::{Heuristic, HeuristicKind};
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Index of a node in the search arena.
pub type NodeId = usize;

/// One generated state: a board plus its fixed `g`, `h`, `f` values.
///
/// All fields are set once when the node is built and never change afterwards.
#[derive(Clone, Debug)]
pub struct SearchNode {
    board: Board,
    parent: Option<NodeId>,
    slide: Option<Slide>,
    g: u32,
    h: u32,
    f: u32,
}

impl SearchNode {
    /// Builds the root node (`g = 0`).
    pub fn root(board: Board, heuristic: &Heuristic) -> Self {
        let h = heuristic.evaluate(&board);
        SearchNode {
            board,
            parent: None,
            slide: None,
            g: 0,
            h,
            f: h,
        }
    }

    /// Builds a child of `parent` reached by `slide` (`g = parent.g + 1`).
    pub fn child(
        board: Board,
        parent_id: NodeId,
        parent: &SearchNode,
        slide: Slide,
        heuristic: &Heuristic,
    ) -> Self {
        let g = parent.g + 1;
        let h = heuristic.evaluate(&board);
        SearchNode {
            board,
            parent: Some(parent_id),
            slide: Some(slide),
            g,
            h,
            f: g + h,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    pub fn f(&self) -> u32 {
        self.f
    }
}

/// How children that duplicate a board already waiting in the frontier are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Only the explored set is consulted; the same board may be queued more than
    /// once before its first expansion, and every queued copy is counted.
    #[default]
    ExploredOnly,
    /// A child is also dropped when the frontier already holds its board with a
    /// `g` no larger than the child's.
    SuppressFrontier,
}

/// Frontier ordering key: lower `f` first, then earlier insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FrontierKey {
    f: u32,
    sequence: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then(self.sequence.cmp(&other.sequence))
    }
}

#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-priority queue of node ids ordered by `(f, insertion sequence)`.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`. The sequence number
/// makes every key unique, which makes the pop order fully deterministic.
#[derive(Debug, Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, node: NodeId, f: u32) {
        let key = FrontierKey {
            f,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|e| e.node)
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_sequence = 0;
    }
}

/// The boards from the initial state to the goal, with the slides between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionPath {
    boards: Vec<Board>,
    slides: Vec<Slide>,
}

impl SolutionPath {
    /// Boards in order; index 0 is the initial board, the last is the goal.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// The slide applied between each pair of consecutive boards.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of moves on the path.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// `true` if the initial board was already the goal.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached.
    Solved(SolutionPath),
    /// The frontier emptied without reaching the goal (the board is unsolvable).
    NoSolution,
}

impl SearchOutcome {
    /// Returns the path if the search succeeded.
    pub fn path(&self) -> Option<&SolutionPath> {
        match self {
            SearchOutcome::Solved(path) => Some(path),
            SearchOutcome::NoSolution => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }
}

/// Machine-readable summary of one search run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub heuristic: HeuristicKind,
    pub solved: bool,
    pub moves: Option<usize>,
    pub generated: usize,
    pub expanded: usize,
    /// Canonical keys of the boards on the path, initial board first.
    pub path: Vec<String>,
    pub slides: Vec<Slide>,
}

/// A* graph search for one initial board under one heuristic.
///
/// # Examples
/// ```
/// use puzzle_search::engine::Board;
/// use puzzle_search::heuristics::Heuristic;
/// use puzzle_search::solver::AStarSearch;
///
/// let board = Board::from_grid([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
/// let mut search = AStarSearch::new(board, Heuristic::manhattan());
/// let outcome = search.run();
/// let path = outcome.path().unwrap();
/// assert_eq!(path.len(), 1);
/// assert!(path.boards().last().unwrap().is_goal());
/// assert_eq!(search.generated_count(), 4);
/// ```
#[derive(Debug)]
pub struct AStarSearch {
    initial: Board,
    heuristic: Heuristic,
    policy: DuplicatePolicy,
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    explored: HashSet<BoardKey>,
    /// Lowest `g` currently queued per board; only maintained under `SuppressFrontier`.
    queued_g: HashMap<BoardKey, u32>,
    generated: usize,
    expanded: usize,
}

impl AStarSearch {
    /// Prepares a search from `initial`; the root node is built and evaluated now,
    /// no search work happens until [`AStarSearch::run`].
    pub fn new(initial: Board, heuristic: Heuristic) -> Self {
        let root = SearchNode::root(initial, &heuristic);
        AStarSearch {
            initial,
            heuristic,
            policy: DuplicatePolicy::default(),
            nodes: vec![root],
            frontier: Frontier::default(),
            explored: HashSet::new(),
            queued_g: HashMap::new(),
            generated: 0,
            expanded: 0,
        }
    }

    /// Selects how frontier duplicates are treated.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// The root node, with its evaluated `h`.
    pub fn root(&self) -> &SearchNode {
        &self.nodes[0]
    }

    /// Number of nodes placed in the frontier during the last run, root included.
    pub fn generated_count(&self) -> usize {
        self.generated
    }

    /// Number of nodes expanded during the last run.
    pub fn expanded_count(&self) -> usize {
        self.expanded
    }

    /// Number of boards in the explored set after the last run.
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }

    /// Runs the search to completion.
    ///
    /// The goal test is applied to the frontier head before it is popped, so the goal
    /// node itself is never expanded or added to the explored set. Calling `run` again
    /// starts over and reproduces the same outcome and counts.
    pub fn run(&mut self) -> SearchOutcome {
        self.reset();
        self.frontier.push(0, self.nodes[0].f);
        self.note_queued(0);
        self.generated = 1;

        while let Some(id) = self.frontier.peek() {
            if self.nodes[id].board.is_goal() {
                let path = self.reconstruct_path(id);
                self.frontier.clear();
                return SearchOutcome::Solved(path);
            }

            self.frontier.pop();
            let key = self.nodes[id].board.key();
            // A board queued more than once is expanded only for its first copy.
            if !self.explored.insert(key) {
                continue;
            }
            self.expanded += 1;
            self.expand(id);
        }

        SearchOutcome::NoSolution
    }

    /// Runs the search and summarises it.
    pub fn run_report(&mut self) -> SearchReport {
        let outcome = self.run();
        self.report(&outcome)
    }

    /// Summarises `outcome`, which must come from this search's last run.
    pub fn report(&self, outcome: &SearchOutcome) -> SearchReport {
        let (path, slides) = match outcome.path() {
            Some(p) => (
                p.boards().iter().map(|b| b.key().to_string()).collect(),
                p.slides().to_vec(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        SearchReport {
            heuristic: self.heuristic.kind(),
            solved: outcome.is_solved(),
            moves: outcome.path().map(SolutionPath::len),
            generated: self.generated,
            expanded: self.expanded,
            path,
            slides,
        }
    }

    fn reset(&mut self) {
        self.nodes.truncate(1);
        self.frontier.clear();
        self.explored.clear();
        self.queued_g.clear();
        self.generated = 0;
        self.expanded = 0;
    }

    fn expand(&mut self, id: NodeId) {
        let board = self.nodes[id].board;
        for (slide, next) in board.successors() {
            let key = next.key();
            if self.explored.contains(&key) {
                continue;
            }

            let child = SearchNode::child(next, id, &self.nodes[id], slide, &self.heuristic);
            if self.policy == DuplicatePolicy::SuppressFrontier {
                if let Some(&queued) = self.queued_g.get(&key) {
                    if queued <= child.g {
                        continue;
                    }
                }
            }

            let f = child.f;
            let child_id = self.nodes.len();
            self.nodes.push(child);
            self.frontier.push(child_id, f);
            self.note_queued(child_id);
            self.generated += 1;
        }
    }

    fn note_queued(&mut self, id: NodeId) {
        if self.policy == DuplicatePolicy::SuppressFrontier {
            let node = &self.nodes[id];
            self.queued_g.insert(node.board.key(), node.g);
        }
    }

    /// Walks parent links from `goal` back to the root and reverses the chain.
    fn reconstruct_path(&self, goal: NodeId) -> SolutionPath {
        let mut boards = Vec::new();
        let mut slides = Vec::new();
        let mut step = Some(goal);
        while let Some(id) = step {
            let node = &self.nodes[id];
            boards.push(node.board);
            if let Some(slide) = node.slide {
                slides.push(slide);
            }
            step = node.parent;
        }
        boards.reverse();
        slides.reverse();
        SolutionPath { boards, slides }
    }

    /// Current number of entries waiting in the frontier.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }
}
