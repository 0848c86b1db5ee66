pub mod result;

#[cfg(all(test, feature = "boxed"))]
pub mod alloc;
#[cfg(test)]
pub mod panic;
