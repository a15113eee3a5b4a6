pub mod docs;
pub mod health;
pub mod predict;
pub mod root;
