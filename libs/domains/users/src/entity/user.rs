use sea_orm::entity::prelude::*;

use crate::models::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub sub_date: DateTimeWithTimeZone,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Domain user carrying the ids of its favorite items
    pub fn into_user(self, favorites: Vec<super::favorite::Model>) -> User {
        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            sub_date: self.sub_date.into(),
            first_name: self.first_name,
            last_name: self.last_name,
            favorites: favorites.into_iter().map(|f| f.item_id).collect(),
        }
    }
}
