pub mod ein;

pub use self::ein::*;
