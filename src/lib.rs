pub mod toy;
pub mod ui;
