use std::path::Path;

use anyhow::Result;

use super::read_json;
use crate::core::matrix::{self, ComplexMatrix};

pub fn main(input: &Path) -> Result<()> {
    let m: ComplexMatrix = read_json(input)?;
    println!("{}", matrix::to_display_string(&m));
    Ok(())
}
