// handlers/mod.rs - HTTP handlers
//
// system: service info, health and fallback (no database writes)
// admin:  administrative operations authorized by the caller's admin flag
pub mod admin;
pub mod system;
