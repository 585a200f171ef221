use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::database::models::User;
use crate::database::{DatabaseError, Repository};

/// In-memory repository for handler tests. Counts lookups and delete attempts
/// so tests can assert which statements a request would have issued.
#[derive(Default)]
pub struct MemoryRepository {
    users: HashMap<i64, Option<i32>>,
    countries: Mutex<HashSet<i64>>,
    unavailable: AtomicBool,
    lookups: AtomicUsize,
    delete_attempts: AtomicUsize,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, id: i64, is_admin: Option<i32>) -> Self {
        self.users.insert(id, is_admin);
        self
    }

    pub fn with_country(self, id: i64) -> Self {
        self.countries.lock().unwrap().insert(id);
        self
    }

    /// Every call fails as if the pool could not hand out a connection
    pub fn unavailable(self) -> Self {
        self.unavailable.store(true, Ordering::SeqCst);
        self
    }

    pub fn has_country(&self, id: i64) -> bool {
        self.countries.lock().unwrap().contains(&id)
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn delete_attempts(&self) -> usize {
        self.delete_attempts.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), DatabaseError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn health_check(&self) -> Result<(), DatabaseError> {
        self.check_available()
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<User>, DatabaseError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self
            .users
            .get(&user_id)
            .map(|is_admin| User { id: user_id, is_admin: *is_admin }))
    }

    async fn delete_country(&self, country_id: i64) -> Result<u64, DatabaseError> {
        self.delete_attempts.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let removed = self.countries.lock().unwrap().remove(&country_id);
        Ok(u64::from(removed))
    }
}
