mod error;
mod ffi;
mod parse;
mod path;
mod sprite;

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::{debug, info};

pub use error::ConvertError;
pub use parse::parse_line;
pub use path::{xml_path_for, SPRITE_SUFFIX, XML_SUFFIX};
pub use sprite::{Attribute, SpriteDocument, ROOT_ELEMENT};

static INIT: Once = Once::new();

fn initialize_tracing() {
    INIT.call_once(|| {
        // the host program may already have installed a subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init();
    });
}

fn write_xml(xml: &str, path: &Path) -> Result<(), ConvertError> {
    let write_error = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(write_error)?;
    file.write_all(xml.as_bytes()).map_err(write_error)
}

/// Converts the contents of a sprite file to its XML form.
pub fn convert_str(data: &str) -> String {
    SpriteDocument::from_sprite(data).into_xml()
}

/// Converts `sprite_file` and writes the result next to it, returning the
/// path of the written XML file. An existing file is overwritten.
pub fn convert_file(sprite_file: &Path) -> Result<PathBuf, ConvertError> {
    initialize_tracing();
    info!("Converting file {:?}", sprite_file);

    let data = fs::read_to_string(sprite_file).map_err(|source| ConvertError::Read {
        path: sprite_file.to_path_buf(),
        source,
    })?;
    let document = SpriteDocument::from_sprite(&data);
    let attributes = document.attribute_count();
    debug!(
        "Read {} attribute(s) from {} line(s)",
        attributes,
        data.lines().count()
    );

    let xml_file = xml_path_for(sprite_file)?;
    write_xml(&document.into_xml(), &xml_file)?;
    info!("Wrote {} attribute(s) to {:?}", attributes, xml_file);

    Ok(xml_file)
}
