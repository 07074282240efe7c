pub mod browser;
pub mod csv_file;
pub mod replay;

pub use browser::*;
pub use csv_file::*;
pub use replay::*;
