use std::env;
use std::path::Path;

use sprite2xml::{convert_file, ConvertError};

fn main() -> Result<(), ConvertError> {
    let sprite_file = env::args_os().nth(1).ok_or(ConvertError::MissingArgument)?;

    convert_file(Path::new(&sprite_file))?;
    Ok(())
}
