pub mod util;

#[cfg(test)]
mod idx;
