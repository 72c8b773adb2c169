pub mod models;
pub mod processing;
pub mod validation;
pub mod utils;
pub mod mrz_info;

pub use mrz_info::MrzInfo;
