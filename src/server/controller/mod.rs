pub mod status;
pub mod user;

#[cfg(test)]
mod test;
