//! End-to-end tests driving whole interactive sessions over in-memory
//! readers and writers.

#[cfg(test)]
mod session;
