//! Record repositories
//!
//! Feature views never own their records directly; they read and write
//! through a [`Repository`] injected into [`crate::AppState`]. The in-memory
//! implementation backs the dashboard today; a database or remote API can be
//! substituted without touching the views.
//!
//! # Invariants
//! - `create` and `update` validate the record before storing it.
//! - `create` assigns a fresh id and prepends, so `list` is newest first.
//! - Operations on an unknown id fail with [`Error::NotFound`].

use bizdash_core::prelude::*;
use bizdash_core::{Project, Record, RecordId, Report, Task, Transaction};

/// CRUD contract for one record type.
pub trait Repository<R: Record>: Send {
    /// Validate, assign an id and store. Returns the stored record.
    fn create(&mut self, record: R) -> Result<R>;

    fn get(&self, id: RecordId) -> Result<R>;

    /// All records, newest first
    fn list(&self) -> Result<Vec<R>>;

    /// Replace the stored record with the same id.
    fn update(&mut self, record: R) -> Result<R>;

    /// Remove and return the record.
    fn delete(&mut self, id: RecordId) -> Result<R>;
}

/// Process-local repository backed by a `Vec`.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<R> {
    records: Vec<R>,
    next_id: u64,
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from records in chronological order (oldest first).
    pub fn seeded(records: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: Send,
    {
        let mut repo = Self::new();
        for record in records {
            repo.create(record)?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: RecordId) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Error::not_found(R::KIND, id))
    }
}

impl<R: Record + Send> Repository<R> for InMemoryRepository<R> {
    fn create(&mut self, mut record: R) -> Result<R> {
        record.validate()?;

        let id = RecordId(self.next_id);
        self.next_id += 1;
        record.set_id(id);

        self.records.insert(0, record.clone());
        debug!("Created {} #{}", R::KIND, id);
        Ok(record)
    }

    fn get(&self, id: RecordId) -> Result<R> {
        let idx = self.position(id)?;
        Ok(self.records[idx].clone())
    }

    fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }

    fn update(&mut self, record: R) -> Result<R> {
        record.validate()?;
        let idx = self.position(record.id())?;
        self.records[idx] = record.clone();
        debug!("Updated {} #{}", R::KIND, record.id());
        Ok(record)
    }

    fn delete(&mut self, id: RecordId) -> Result<R> {
        let idx = self.position(id)?;
        let removed = self.records.remove(idx);
        debug!("Deleted {} #{}", R::KIND, id);
        Ok(removed)
    }
}

/// The record stores injected into the app shell.
pub struct Repositories {
    pub transactions: Box<dyn Repository<Transaction>>,
    pub reports: Box<dyn Repository<Report>>,
    pub projects: Box<dyn Repository<Project>>,
    pub tasks: Box<dyn Repository<Task>>,
}

impl Repositories {
    /// Empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            transactions: Box::new(InMemoryRepository::<Transaction>::new()),
            reports: Box::new(InMemoryRepository::<Report>::new()),
            projects: Box::new(InMemoryRepository::<Project>::new()),
            tasks: Box::new(InMemoryRepository::<Task>::new()),
        }
    }
}

impl std::fmt::Debug for Repositories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repositories").finish_non_exhaustive()
    }
}
