pub mod handlers;
pub mod page;
pub mod routes;
pub mod types;

#[cfg(test)]
mod tests;
