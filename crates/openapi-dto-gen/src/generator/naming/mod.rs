pub mod identifiers;
pub mod properties;

#[cfg(test)]
mod tests;
