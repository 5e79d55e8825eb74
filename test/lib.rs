pub mod test;
pub mod utils;
