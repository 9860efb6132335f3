#[cfg(feature = "silent")]
macro_rules! debug {
  ($($x:tt)*) => {};
}
#[cfg(feature = "silent")]
pub(crate) use debug;

#[cfg(feature = "silent")]
macro_rules! trace {
  ($($x:tt)*) => {};
}
#[cfg(feature = "silent")]
pub(crate) use trace;

#[cfg(not(feature = "silent"))]
pub(crate) use log::{debug, trace};
