use anyhow::Result;

use crate::printing::print_coordinate;
use crate::utils::load_coordinate;

pub fn show_coordinate(coord_source: &str) -> Result<()> {
    let coordinate = load_coordinate(coord_source)?;
    print_coordinate(&coordinate);
    Ok(())
}
