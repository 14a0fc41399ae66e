use super::entity::Entity;
use super::ids::IdGenerator;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Default base for server-assigned stacking order.
pub const DEFAULT_Z_INDEX_BASE: i64 = 1000;

/// Largest value CSS `z-index` accepts.
pub const MAX_Z_INDEX: i64 = i32::MAX as i64;

/// How far one client hint may move the counter past its current top.
pub const MAX_HINT_JUMP: i64 = 100_000;

struct Slot {
    seq: u64,
    entity: Entity,
}

struct State {
    entries: HashMap<String, Slot>,
    next_seq: u64,
    top_z: i64,
}

/// In-memory windows and folders, keyed by id.
///
/// One registry lives for the whole server process and is handed to request
/// handlers behind an `Arc`. Every operation takes the single lock for the
/// shortest possible time: [`Registry::list`] only holds the read lock while
/// cloning the snapshot, never while markup is rendered from it.
pub struct Registry {
    state: RwLock<State>,
    ids: IdGenerator,
}

impl Registry {
    pub fn new() -> Self {
        Self::with_z_index_base(DEFAULT_Z_INDEX_BASE)
    }

    /// Registry whose first [`Registry::allocate_z_index`] returns `base`.
    pub fn with_z_index_base(base: i64) -> Self {
        Self {
            state: RwLock::new(State {
                entries: HashMap::new(),
                next_seq: 0,
                top_z: base.saturating_sub(1),
            }),
            ids: IdGenerator::new(),
        }
    }

    /// Insert or replace the entity stored under its id.
    ///
    /// Returns the entity previously stored there, if any.
    pub fn insert(&self, entity: Entity) -> Option<Entity> {
        let id = entity.id().to_string();
        let mut state = self.state.write();
        let seq = state.next_seq;
        state.next_seq += 1;
        state.top_z = state.top_z.max(entity.z_index());
        let previous = state.entries.insert(id, Slot { seq, entity });
        debug!(entries = state.entries.len(), replaced = previous.is_some(), "entity inserted");
        previous.map(|slot| slot.entity)
    }

    /// Remove an entity. Unknown ids are ignored.
    pub fn remove(&self, id: &str) -> Option<Entity> {
        let removed = self.state.write().entries.remove(id).map(|slot| slot.entity);
        debug!(id = %id, removed = removed.is_some(), "entity remove");
        removed
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Entity> {
        self.state.read().entries.get(id).map(|slot| slot.entity.clone())
    }

    /// Snapshot of all entities, bottom of the stack first.
    ///
    /// Ties on z-index keep insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Entity> {
        let mut slots: Vec<(i64, u64, Entity)> = {
            let state = self.state.read();
            state
                .entries
                .values()
                .map(|slot| (slot.entity.z_index(), slot.seq, slot.entity.clone()))
                .collect()
        };
        slots.sort_by_key(|(z, seq, _)| (*z, *seq));
        slots.into_iter().map(|(_, _, entity)| entity).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fresh window id, unique for the life of the process.
    #[must_use]
    pub fn generate_id(&self) -> String {
        self.generate_id_with_prefix("window")
    }

    /// Fresh id with a custom prefix (e.g. `folder`).
    #[must_use]
    pub fn generate_id_with_prefix(&self, prefix: &str) -> String {
        self.ids.next(prefix)
    }

    /// Next stacking order for a new entity.
    ///
    /// The server owns stacking: below [`MAX_Z_INDEX`] every call returns a
    /// value strictly above anything allocated or inserted before. A client
    /// `hint` (the highest z-index it currently shows) can only push the
    /// counter further up, and by at most [`MAX_HINT_JUMP`] per call.
    pub fn allocate_z_index(&self, hint: Option<i64>) -> i64 {
        let mut state = self.state.write();
        let floor = state.top_z.saturating_add(1);
        let z = match hint {
            Some(h) => {
                let ceiling = state.top_z.saturating_add(MAX_HINT_JUMP);
                floor.max(h.min(ceiling).saturating_add(1))
            }
            None => floor,
        }
        .min(MAX_Z_INDEX);
        if z == MAX_Z_INDEX && state.top_z >= MAX_Z_INDEX {
            warn!(z_index = z, "z-index counter exhausted");
        }
        state.top_z = state.top_z.max(z);
        z
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
