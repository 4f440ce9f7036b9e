//! Built-in models.

mod house;
mod tree;

pub use house::{house, HOUSE};
pub use tree::{tree, TREE};

use cubeworld_core::Result;

use crate::model::Model;

/// All built-in models.
pub fn builtin() -> Result<Vec<Model>> {
    Ok(vec![house()?, tree()?])
}
