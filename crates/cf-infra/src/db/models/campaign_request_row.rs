use crate::db::schema::campaign_request;
use diesel::prelude::*;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = campaign_request)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignRequestRow {
    pub id: String,
    pub creator: String,
    pub name: String,
    pub description: String,
    pub goal: String,
    pub deadline_days: i32,
    pub id_image_url: String,
    pub cover_image_url: String,
    pub full_name: String,
    pub age: i32,
    pub is_emergency: bool,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub campaign_address: Option<String>,
    pub created_at: i64,
    pub deployed_at: Option<i64>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = campaign_request)]
pub struct NewCampaignRequestRow {
    pub id: String,
    pub creator: String,
    pub name: String,
    pub description: String,
    pub goal: String,
    pub deadline_days: i32,
    pub id_image_url: String,
    pub cover_image_url: String,
    pub full_name: String,
    pub age: i32,
    pub is_emergency: bool,
    pub status: String,
    pub created_at: i64,
}
