use clap::{Parser, Subcommand};
use feedwright::{compile, output, records, template};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "feedwright")]
#[command(about = "RSS feed compiler for static websites")]
#[command(long_about = "\
RSS feed compiler for static websites

Your filesystem is the data source. One rss_root.json describes the site;
each directory of posts carries an rss_items.json describing its entries.
Records start as templates with placeholder values (TITLE, URL, ...) that
you replace in a text editor before compiling.

Site structure:

  site/
  ├── rss_root.json                # Site record (found by walking UP)
  ├── rss.xml                      # Compiled feed (written by `make`)
  ├── post.html
  ├── rss_items.json               # Entries for posts in this directory
  └── blog/
      └── 2026/
          ├── june-notes.html
          └── rss_items.json       # Found by walking DOWN from the root

An item's URL is derived from its location: the path from the configured
site root (rootDir) to its directory, appended to the site link, plus its
filename. Moving a post's directory moves its link.

Typical session:

  feedwright root                  # once per site, then edit rss_root.json
  feedwright post june-notes.html  # once per post, then edit rss_items.json
  feedwright check                 # list every unfilled field
  feedwright make                  # validate and write the feed")]
#[command(version)]
struct Cli {
    /// Starting directory for the root-record search
    #[arg(long, default_value = ".", global = true)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a template rss_root.json in the starting directory
    Root,
    /// Append a template entry for a post to this directory's rss_items.json
    Post {
        /// The post's HTML file name (e.g. june-notes.html)
        filename: String,
        /// Record pubDate at this UTC offset in hours (e.g. -7) instead of
        /// the machine's local timezone
        #[arg(long, allow_negative_numbers = true)]
        utc_offset: Option<i32>,
    },
    /// Compile the feed: discover, validate, and write rss.xml
    Make,
    /// Validate records and report every problem without writing anything
    Check {
        /// Check a single sidecar file instead of the whole tree
        path: Option<PathBuf>,
    },
    /// Add an empty <img> slot to each description in an item sidecar
    Img {
        /// The sidecar to edit (default: the starting directory's rss_items.json)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dir = cli.dir.canonicalize()?;

    match cli.command {
        Command::Root => {
            let path = template::create_root(&dir)?;
            println!("Wrote template root record to {}", path.display());
            println!("Edit it to fill in your site's title, link, and description.");
        }
        Command::Post {
            filename,
            utc_offset,
        } => {
            let path = template::create_post(&dir, &filename, utc_offset)?;
            println!("Added template entry for {filename} to {}", path.display());
            println!("Edit it to fill in the post's title and description.");
        }
        Command::Make => {
            let compiled = compile::make(&dir)?;
            std::fs::write(&compiled.output_path, &compiled.xml)?;
            output::print_make_output(&compiled);
        }
        Command::Check { path } => {
            let target = path.map(|p| if p.is_absolute() { p } else { dir.join(p) });
            let violations = compile::check(&dir, target.as_deref())?;
            output::print_check_report(&violations);
            if !violations.is_empty() {
                std::process::exit(1);
            }
        }
        Command::Img { path } => {
            let file = match path {
                Some(p) if p.is_absolute() => p,
                Some(p) => dir.join(p),
                None => dir.join(records::ITEMS_SIDECAR),
            };
            let wrapped = template::add_image_slots(&file)?;
            println!(
                "Added image slots to {} of {} description(s) in {}",
                wrapped,
                records::load_items(&file)?.len(),
                file.display()
            );
        }
    }

    Ok(())
}
