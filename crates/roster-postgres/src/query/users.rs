//! User repository: lifecycle operations and the range listing query.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use roster_core::{RangeQuery, SortOrder};

use crate::model::{NewUser, User};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for user database operations.
pub trait UserRepository {
    /// Inserts a new user record.
    fn create_user(&mut self, new_user: NewUser) -> impl Future<Output = PgResult<User>> + Send;

    /// Inserts a batch of user records.
    fn create_users(
        &mut self,
        new_users: Vec<NewUser>,
    ) -> impl Future<Output = PgResult<usize>> + Send;

    /// Finds a user by its identifier.
    fn find_user_by_id(
        &mut self,
        user_id: &str,
    ) -> impl Future<Output = PgResult<Option<User>>> + Send;

    /// Counts all user records.
    fn count_users(&mut self) -> impl Future<Output = PgResult<i64>> + Send;

    /// Lists users in a time range with deterministic tie-breaking.
    ///
    /// Translates the core pagination predicate into a single indexed
    /// query. For a continuation, the range stays fixed and the result is
    /// narrowed only at the resume-side boundary timestamp, where ids must
    /// be strictly past `after_id` in the traversal direction; the rest of
    /// the interval is taken as-is. Ordered by `(created_at, id)` in the
    /// requested direction, truncated to `limit`.
    fn list_users_in_range(
        &mut self,
        query: &RangeQuery,
    ) -> impl Future<Output = PgResult<Vec<User>>> + Send;
}

impl UserRepository for PgConnection {
    async fn create_user(&mut self, new_user: NewUser) -> PgResult<User> {
        use schema::users;

        let user = diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn create_users(&mut self, new_users: Vec<NewUser>) -> PgResult<usize> {
        use schema::users;

        let inserted = diesel::insert_into(users::table)
            .values(&new_users)
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(inserted)
    }

    async fn find_user_by_id(&mut self, user_id: &str) -> PgResult<Option<User>> {
        use schema::users::{self, dsl};

        let user = users::table
            .filter(dsl::id.eq(user_id))
            .select(User::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(user)
    }

    async fn count_users(&mut self) -> PgResult<i64> {
        use schema::users;

        let count = users::table
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(count)
    }

    async fn list_users_in_range(&mut self, query: &RangeQuery) -> PgResult<Vec<User>> {
        use schema::users::{self, dsl};

        let start = jiff_diesel::Timestamp::from(query.start);
        let end = jiff_diesel::Timestamp::from(query.end);

        let mut sql = users::table.into_boxed();

        sql = match (&query.after_id, query.order) {
            (None, _) => {
                sql.filter(dsl::created_at.ge(start.clone()).and(dsl::created_at.le(end)))
            }
            (Some(after_id), SortOrder::Asc) => sql.filter(
                // Tie-break slice at the start boundary, OR the untouched
                // remainder of the interval.
                dsl::created_at
                    .eq(start.clone())
                    .and(dsl::id.gt(after_id.clone()))
                    .or(dsl::created_at
                        .gt(start.clone())
                        .and(dsl::created_at.le(end))),
            ),
            (Some(after_id), SortOrder::Desc) => sql.filter(
                // Tie-break slice at the end boundary, OR the untouched
                // remainder of the interval.
                dsl::created_at
                    .eq(end.clone())
                    .and(dsl::id.lt(after_id.clone()))
                    .or(dsl::created_at
                        .ge(start.clone())
                        .and(dsl::created_at.lt(end.clone()))),
            ),
        };

        sql = match query.order {
            SortOrder::Asc => sql.order((dsl::created_at.asc(), dsl::id.asc())),
            SortOrder::Desc => sql.order((dsl::created_at.desc(), dsl::id.desc())),
        };

        let rows = sql
            .select(User::as_select())
            .limit(query.limit.max(0))
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(rows)
    }
}
