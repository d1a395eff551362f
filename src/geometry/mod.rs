pub mod fit;
pub mod path;
pub mod ring;
