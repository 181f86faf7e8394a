use log::Level;

pub const BRAND_NAME: &str = "Fusion.";
pub const BRAND_LABEL: &str = "Project Fusion";
pub const COPYRIGHT_YEAR: u16 = 2025;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
