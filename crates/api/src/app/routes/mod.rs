pub mod inventory;
pub mod recipes;
pub mod system;
