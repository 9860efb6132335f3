// Debug builds bind a copy of the multiset so post-conditions can be checked
// after the mutation. Release builds bind nothing and check nothing.
#[cfg(debug_assertions)]
macro_rules! snapshot {
    (let $name:ident = $e:expr) => {
        let $name = $e;
    };
}

#[cfg(not(debug_assertions))]
macro_rules! snapshot {
    (let $name:ident = $e:expr) => {};
}

#[cfg(debug_assertions)]
macro_rules! proof_assert {
    ($($x:tt)*) => { assert!($($x)*) };
}

#[cfg(not(debug_assertions))]
macro_rules! proof_assert {
    ($($x:tt)*) => {};
}

pub(crate) use {proof_assert, snapshot};
