// bark shared type definitions

pub mod bookmark;
pub mod errors;
pub mod settings;
