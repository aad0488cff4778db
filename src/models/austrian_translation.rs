use diesel::{AsChangeset, Insertable, Queryable};

use crate::schema::austrian_translations;

#[derive(Queryable, Debug, Clone, PartialEq, Eq)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AustrianTranslation {
    pub id: i32,
    pub austrian: String,
    pub lookup_key: String,
    pub german: String,
    pub description: Option<String>,
    pub added_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Insertable)]
#[diesel(table_name = austrian_translations)]
pub struct NewAustrianTranslation<'a> {
    pub austrian: &'a str,
    pub lookup_key: &'a str,
    pub german: &'a str,
    pub description: Option<&'a str>,
    pub added_by: &'a str,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = austrian_translations, treat_none_as_null = true)]
pub struct AustrianTranslationUpdate<'a> {
    pub austrian: &'a str,
    pub german: &'a str,
    pub description: Option<&'a str>,
    pub added_by: &'a str,
    pub updated_at: &'a str,
}
