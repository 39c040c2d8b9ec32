mod decl;
mod field;
mod member;

pub use self::decl::*;
pub use self::field::*;
pub use self::member::*;
