pub mod json;
pub mod textmap;
