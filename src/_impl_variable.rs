use super::*;
use std::fmt::{Display, Error, Formatter};

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("x{}", self.0))
    }
}

impl Variable {
    /// Create the variable `x<id>`.
    pub fn new(id: u32) -> Variable {
        Variable(id)
    }

    /// The numeric suffix of this variable's name.
    pub fn id(&self) -> u32 {
        self.0
    }
}

impl From<u32> for Variable {
    fn from(id: u32) -> Self {
        Variable(id)
    }
}
