use crate::cli::ElementsArgs;
use crate::error::{CliError, Result};
use nucleoseek::core::catalog;

pub fn run(args: ElementsArgs) -> Result<()> {
    let elements = catalog::all();
    if args.json {
        let rendered = serde_json::to_string_pretty(elements)
            .map_err(|e| CliError::Other(anyhow::Error::new(e)))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{:>3}  {:<2}  {:<13} {:>3} {:>3}", "Z", "Sym", "Name", "Row", "Col");
    for element in elements {
        println!(
            "{:>3}  {:<2}  {:<13} {:>3} {:>3}",
            element.atomic_number,
            element.symbol,
            element.name,
            element.display_row,
            element.display_column
        );
    }
    Ok(())
}
