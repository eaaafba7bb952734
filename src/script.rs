//! Replaying scripted operations against a set of engines
//!
//! A script is a YAML (or JSON) list of [`Command`]s, each tagged by `op`:
//!
//! ```yaml
//! - op: graph_add_edge
//!   u: 1
//!   v: 2
//!   weight: 5
//! - op: graph_bfs
//!   start: 1
//! - op: tree_set_avl
//!   enabled: true
//! ```
//!
//! The [`Workbench`] owns one engine of each kind. The engines never see
//! each other; the workbench only routes commands and collects notifications.

use crate::config::EngineConfig;
use crate::error::{DsvizError, DsvizResult};
use crate::event::Notification;
use crate::graph::{GraphEngine, NodeId, Weight};
use crate::hash::{HashTableEngine, HashTableError};
use crate::heap::{BinaryHeapEngine, HeapMode};
use crate::list::LinkedListEngine;
use crate::tree::BalancedTreeEngine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// One public engine operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    GraphAddNode { id: NodeId },
    GraphAddEdge { u: NodeId, v: NodeId, weight: Weight },
    GraphRemoveNode { id: NodeId },
    GraphRemoveEdge { u: NodeId, v: NodeId },
    GraphBfs { start: NodeId },
    GraphDfs { start: NodeId },
    GraphMst { start: NodeId },
    GraphShortestPath { start: NodeId, end: NodeId },
    GraphClear,

    TreeInsert { value: i64 },
    TreeDelete { value: i64 },
    TreeSearch { value: i64 },
    TreeSetAvl { enabled: bool },
    TreeClear,

    /// Replace the table with a fresh one of `capacity` slots
    HashInit { capacity: usize },
    HashInsert { key: i64 },
    HashRemove { key: i64 },
    HashSearch { key: i64 },
    HashClear,

    HeapInsert { value: i64 },
    HeapExtract,
    HeapSetMode { mode: HeapMode },
    HeapClear,

    ListPushFront { value: i64 },
    ListClear,
}

impl Command {
    /// Which engine this command is routed to
    pub fn engine(&self) -> EngineName {
        use Command::*;
        match self {
            GraphAddNode { .. }
            | GraphAddEdge { .. }
            | GraphRemoveNode { .. }
            | GraphRemoveEdge { .. }
            | GraphBfs { .. }
            | GraphDfs { .. }
            | GraphMst { .. }
            | GraphShortestPath { .. }
            | GraphClear => EngineName::Graph,
            TreeInsert { .. } | TreeDelete { .. } | TreeSearch { .. } | TreeSetAvl { .. } | TreeClear => {
                EngineName::Tree
            }
            HashInit { .. } | HashInsert { .. } | HashRemove { .. } | HashSearch { .. } | HashClear => {
                EngineName::Hash
            }
            HeapInsert { .. } | HeapExtract | HeapSetMode { .. } | HeapClear => EngineName::Heap,
            ListPushFront { .. } | ListClear => EngineName::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineName {
    Graph,
    Tree,
    Hash,
    Heap,
    List,
}

/// A notification tagged with the command that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Zero-based position of the command in the script
    pub step: usize,
    pub engine: EngineName,
    #[serde(flatten)]
    pub notification: Notification,
}

/// A command the hash table refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub step: usize,
    pub command: Command,
    pub reason: HashTableError,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}: {}", self.step, self.reason)
    }
}

/// Everything a replay produced.
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub records: Vec<Record>,
    pub rejections: Vec<Rejection>,
}

impl ReplayReport {
    pub fn is_fully_applied(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Parse a YAML or JSON command list.
pub fn parse_script(text: &str) -> DsvizResult<Vec<Command>> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn load_script(path: &Path) -> DsvizResult<Vec<Command>> {
    let text = std::fs::read_to_string(path).map_err(|source| DsvizError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

/// One engine of each kind, built from an [`EngineConfig`].
#[derive(Debug)]
pub struct Workbench {
    pub graph: GraphEngine,
    pub tree: BalancedTreeEngine,
    pub hash: HashTableEngine,
    pub heap: BinaryHeapEngine,
    pub list: LinkedListEngine,
    steps: usize,
}

impl Workbench {
    /// Build every engine. Notifications from construction (the hash
    /// table's initial snapshot) are discarded.
    pub fn new(config: &EngineConfig) -> DsvizResult<Self> {
        let mut hash = HashTableEngine::new(config.hash_capacity)?;
        hash.drain_events();

        let mut tree = BalancedTreeEngine::new();
        if config.avl {
            tree.set_avl(true);
        }

        Ok(Self {
            graph: GraphEngine::new(),
            tree,
            hash,
            heap: BinaryHeapEngine::new(config.heap_mode),
            list: LinkedListEngine::new(config.list),
            steps: 0,
        })
    }

    /// Number of commands applied so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Apply one command and collect what it emitted.
    ///
    /// A refused hash insert is returned as a [`Rejection`] alongside the
    /// (empty) records; only a zero-capacity `hash_init` is an error.
    pub fn apply(&mut self, command: &Command) -> DsvizResult<(Vec<Record>, Option<Rejection>)> {
        let step = self.steps;
        self.steps += 1;
        debug!(step, ?command, "workbench: apply");

        let mut rejection = None;
        let notifications = match *command {
            Command::GraphAddNode { id } => {
                self.graph.add_node(id);
                self.graph.drain_events()
            }
            Command::GraphAddEdge { u, v, weight } => {
                self.graph.add_edge(u, v, weight);
                self.graph.drain_events()
            }
            Command::GraphRemoveNode { id } => {
                self.graph.remove_node(id);
                self.graph.drain_events()
            }
            Command::GraphRemoveEdge { u, v } => {
                self.graph.remove_edge(u, v);
                self.graph.drain_events()
            }
            Command::GraphBfs { start } => {
                self.graph.traverse_bfs(start);
                self.graph.drain_events()
            }
            Command::GraphDfs { start } => {
                self.graph.traverse_dfs(start);
                self.graph.drain_events()
            }
            Command::GraphMst { start } => {
                self.graph.minimum_spanning_tree(start);
                self.graph.drain_events()
            }
            Command::GraphShortestPath { start, end } => {
                self.graph.shortest_path(start, end);
                self.graph.drain_events()
            }
            Command::GraphClear => {
                self.graph.clear();
                self.graph.drain_events()
            }

            Command::TreeInsert { value } => {
                self.tree.insert(value);
                self.tree.drain_events()
            }
            Command::TreeDelete { value } => {
                self.tree.delete(value);
                self.tree.drain_events()
            }
            Command::TreeSearch { value } => {
                self.tree.search(value);
                self.tree.drain_events()
            }
            Command::TreeSetAvl { enabled } => {
                self.tree.set_avl(enabled);
                self.tree.drain_events()
            }
            Command::TreeClear => {
                self.tree.clear();
                self.tree.drain_events()
            }

            Command::HashInit { capacity } => {
                self.hash = HashTableEngine::new(capacity)?;
                self.hash.drain_events()
            }
            Command::HashInsert { key } => {
                if let Err(reason) = self.hash.insert(key) {
                    warn!(step, %reason, "workbench: hash insert refused");
                    rejection = Some(Rejection {
                        step,
                        command: command.clone(),
                        reason,
                    });
                }
                self.hash.drain_events()
            }
            Command::HashRemove { key } => {
                self.hash.remove(key);
                self.hash.drain_events()
            }
            Command::HashSearch { key } => {
                self.hash.search(key);
                self.hash.drain_events()
            }
            Command::HashClear => {
                self.hash.clear();
                self.hash.drain_events()
            }

            Command::HeapInsert { value } => {
                self.heap.insert(value);
                self.heap.drain_events()
            }
            Command::HeapExtract => {
                self.heap.extract_root();
                self.heap.drain_events()
            }
            Command::HeapSetMode { mode } => {
                self.heap.set_mode(mode);
                self.heap.drain_events()
            }
            Command::HeapClear => {
                self.heap.clear();
                self.heap.drain_events()
            }

            Command::ListPushFront { value } => {
                self.list.push_front(value);
                self.list.drain_events()
            }
            Command::ListClear => {
                self.list.clear();
                self.list.drain_events()
            }
        };

        let engine = command.engine();
        let records = notifications
            .into_iter()
            .map(|notification| Record {
                step,
                engine,
                notification,
            })
            .collect();
        Ok((records, rejection))
    }

    /// Apply every command in order. Stops at the first hard error.
    pub fn replay(&mut self, commands: &[Command]) -> DsvizResult<ReplayReport> {
        let mut report = ReplayReport::default();
        for command in commands {
            let (records, rejection) = self.apply(command)?;
            report.records.extend(records);
            report.rejections.extend(rejection);
        }
        Ok(report)
    }
}
