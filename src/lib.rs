//! Small value types governed by algebraic laws.
//!
//! - [`Bag`]: a mutable multiset whose moving operations conserve elements.
//! - [`cipher`]: a case-preserving ASCII rotation cipher.
//! - [`Vector2`]: an integer 2D vector.
//!
//! The three are independent of each other.

mod log;
mod snapshot;

pub mod bag;
pub mod cipher;
pub mod count;
pub mod vector;

pub use bag::Bag;
pub use cipher::{decode, encode, CipherError};
pub use count::Count;
pub use vector::{dot, Vector2};
