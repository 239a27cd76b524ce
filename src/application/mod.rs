// Application layer - session use cases and authorization
pub mod authorization;
pub mod edit_session;
pub mod favorites;
pub mod persistence;
pub mod transition;

#[cfg(test)]
pub(crate) mod test_support;
