mod club;
mod fixture;
mod standing;
mod summary;

pub use club::*;
pub use fixture::*;
pub use standing::*;
pub use summary::*;
