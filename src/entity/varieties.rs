use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "varieties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name_en: String,
    pub name_ar: String,
    pub origin: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
