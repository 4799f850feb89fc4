use clap::{Args, Parser, Subcommand};
use rtable_core::{
    ColumnHeader, OverflowPolicy, TableConfig, TableError, TableState, TableView, total_pages,
};
use serde_json::Value;
use std::io::BufRead;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rtable-cli")]
#[command(about = "Page through a JSON collection the way the table widget does")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableArgs {
    /// JSON file holding an array of rows
    #[arg(short, long)]
    input: PathBuf,
    /// Columns as key:width or key:width:Title, comma-separated
    #[arg(short, long, value_delimiter = ',', required = true)]
    columns: Vec<String>,
    /// JSON table config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Rows per page (overrides the config file)
    #[arg(long)]
    rows_per_page: Option<usize>,
    /// Zero-based page to open on
    #[arg(long, default_value = "0")]
    page: usize,
    /// Show every row once the cursor runs past the last page
    #[arg(long)]
    full_dataset_overflow: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of a collection
    Show(TableArgs),
    /// Navigate a collection interactively (n = next, p = previous, <row> = click, q = quit)
    Browse(TableArgs),
    /// Print the page count for a collection size
    Pages {
        /// Number of rows in the collection
        #[arg(long)]
        total: usize,
        /// Rows per page
        #[arg(long, default_value = "10")]
        rows_per_page: usize,
    },
}

fn load_config(args: &TableArgs) -> Result<TableConfig, TableError> {
    let mut config = match &args.config {
        Some(path) => TableConfig::load(path)?,
        None => TableConfig::default(),
    };
    if let Some(rows_per_page) = args.rows_per_page {
        config.rows_per_page = rows_per_page;
    }
    if args.full_dataset_overflow {
        config.overflow = OverflowPolicy::FullDataset;
    }
    config.validate()?;
    Ok(config)
}

fn load_rows(path: &Path) -> Result<Vec<Value>, TableError> {
    let contents = std::fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&contents)? {
        Value::Array(rows) => Ok(rows),
        _ => Err(TableError::InvalidRow(format!(
            "{} must contain a JSON array of rows",
            path.display()
        ))),
    }
}

fn build_table(
    args: &TableArgs,
) -> Result<(TableView<Value>, Vec<ColumnHeader>, Vec<Value>), TableError> {
    let config = load_config(args)?;
    let headers = args
        .columns
        .iter()
        .map(|spec| ColumnHeader::parse(spec))
        .collect::<Result<Vec<_>, _>>()?;
    let rows = load_rows(&args.input)?;
    log::debug!("Loaded {} rows from {}", rows.len(), args.input.display());
    Ok((TableView::new(config), headers, rows))
}

fn pad(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let used = cell.chars().count();
    cell.extend(std::iter::repeat_n(' ', width - used));
    cell
}

fn print_table(table: &TableView<Value>) -> Result<(), TableError> {
    let page = match table.snapshot() {
        TableState::Empty => {
            println!("No rows to display.");
            return Ok(());
        }
        TableState::Page(page) => page,
    };

    let widths: Vec<usize> = page
        .headers
        .iter()
        .map(|header| (header.width as usize).max(1))
        .collect();
    let header_line: Vec<String> = page
        .headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&header.title, *width))
        .collect();
    println!("     {}", header_line.join(" | "));

    for (offset, cells) in table.visible_cells()?.iter().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        println!("{:>3}. {}", offset + 1, line.join(" | "));
    }

    println!(
        "Page {}{}{}",
        page.indicator,
        if page.can_prev { "  [p] previous" } else { "" },
        if page.can_next { "  [n] next" } else { "" }
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show(args) => {
            let (mut table, headers, rows) = match build_table(&args) {
                Ok(parts) => parts,
                Err(e) => {
                    eprintln!("Failed to load table: {}", e);
                    std::process::exit(1);
                }
            };
            table.configure(headers, rows, args.page);
            print_table(&table)?;
        }
        Commands::Browse(args) => {
            let (mut table, headers, rows) = match build_table(&args) {
                Ok(parts) => parts,
                Err(e) => {
                    eprintln!("Failed to load table: {}", e);
                    std::process::exit(1);
                }
            };
            table.configure_with_click(headers, rows, args.page, |click| {
                println!(
                    "Clicked row {} (row {} on page {})",
                    click.row_index,
                    click.row_in_page + 1,
                    click.page_index + 1
                );
            });
            print_table(&table)?;

            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                match line.trim() {
                    "q" | "quit" => break,
                    "n" | "next" => {
                        table.next_page();
                    }
                    "p" | "prev" => {
                        table.prev_page();
                    }
                    "" => continue,
                    other => match other.parse::<usize>() {
                        Ok(row) if row >= 1 => {
                            if !table.click_row(row - 1) {
                                eprintln!("No row {} on this page", row);
                            }
                            continue;
                        }
                        _ => {
                            eprintln!("Unknown command '{}'", other);
                            continue;
                        }
                    },
                }
                print_table(&table)?;
            }

            if let Some(page_index) = table.page_index() {
                println!("Stopped on page index {}", page_index);
            }
        }
        Commands::Pages {
            total,
            rows_per_page,
        } => {
            if rows_per_page == 0 {
                eprintln!("--rows-per-page must be at least 1");
                std::process::exit(1);
            }
            println!("{}", total_pages(total, rows_per_page));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_truncates_and_fills() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdef", 3), "abc");
        assert_eq!(pad("", 2), "  ");
    }

    #[test]
    fn test_cli_parses_columns() {
        let cli = Cli::try_parse_from([
            "rtable-cli",
            "show",
            "--input",
            "rows.json",
            "--columns",
            "id:4,name:12:Name",
            "--rows-per-page",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.columns, vec!["id:4", "name:12:Name"]);
                assert_eq!(args.rows_per_page, Some(5));
                assert_eq!(args.page, 0);
                let config = load_config(&args).unwrap();
                assert_eq!(config.rows_per_page, 5);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_zero_rows_per_page_rejected() {
        let cli = Cli::try_parse_from([
            "rtable-cli",
            "browse",
            "-i",
            "rows.json",
            "-c",
            "id:4",
            "--rows-per-page",
            "0",
        ])
        .unwrap();
        match cli.command {
            Commands::Browse(args) => assert!(load_config(&args).is_err()),
            _ => panic!("expected browse"),
        }
    }
}
