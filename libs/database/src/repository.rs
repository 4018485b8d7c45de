//! Generic CRUD over a SeaORM entity.
//!
//! Domain repositories wrap a `BaseRepository<entity::Entity>` and only add
//! what is specific to them (DTO conversion, error classification, joins).
//! The table and its columns come from the entity type parameter.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, Value,
};
use std::marker::PhantomData;

/// Primary key value type of an entity (`i32` for an `INT AUTO_INCREMENT` key)
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    PrimaryKeyOf<E>: Into<Value> + Clone + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Underlying connection, for queries the generic layer does not cover
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert a row and return the key the store assigned to it.
    pub async fn insert<A>(&self, model: A) -> Result<PrimaryKeyOf<E>, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + Send,
    {
        let result = E::insert(model).exec(&self.db).await?;
        Ok(result.last_insert_id)
    }

    pub async fn find_by_id(&self, id: PrimaryKeyOf<E>) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// Every row in store order
    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    pub async fn exists(&self, id: PrimaryKeyOf<E>) -> Result<bool, DbErr> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Overwrite the `Set` columns of `model` on the row keyed by `id`.
    ///
    /// Returns the affected row count. MySQL does not count rows whose values
    /// did not change, so `0` alone does not mean the row is missing.
    pub async fn update_by_id<A>(&self, id: PrimaryKeyOf<E>, model: A) -> Result<u64, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + Send,
    {
        let result = E::update_many()
            .set(model)
            .filter(Self::key_condition(id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Returns the affected row count; `0` when no row has that key.
    pub async fn delete_by_id(&self, id: PrimaryKeyOf<E>) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    fn key_condition(id: PrimaryKeyOf<E>) -> Condition {
        E::PrimaryKey::iter().fold(Condition::all(), |cond, key| {
            cond.add(key.into_column().eq(id.clone()))
        })
    }
}
