pub mod formulas;
pub mod quiz;
pub mod score;
pub mod sidebar;
pub mod toast;
