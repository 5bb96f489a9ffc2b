pub mod filing;
pub mod organization;

pub use self::filing::*;
pub use self::organization::*;
