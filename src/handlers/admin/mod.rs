// handlers/admin/mod.rs - Administrative handlers
//
// The acting user is identified by the `user_id` field of the request body and
// must carry admin flag 1 in the users table. There is no session or token check.
pub mod country_delete;

pub use country_delete::country_delete;
