use crate::db::{DbPool, OrmConn};

/// Shared per-process handles. Both wrap the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let orm = crate::db::create_orm_conn(&pool);
        Self { pool, orm }
    }
}
