//! # webnlg-align
//!
//! Sentence-level alignment of the enriched WebNLG RDF-to-text corpus.
//!
//! ```sh
//! webnlg-align 0.1.0
//! sentence-level alignment of the WebNLG corpus.
//!
//! USAGE:
//!     webnlg-align <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     align     Align corpus splits into JSON lines files
//!     clean     Patch known-bad lines of the raw corpus files, in place
//!     help      Prints this message or the help of the given subcommand(s)
//!     schema    Print the JSON schema of aligned records
//!     tables    Print digests and sizes of the loaded tables
//! ```
//!
//! Logging is controlled by `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::sync::Arc;

use structopt::StructOpt;

use webnlg_align::alignment::AlignedSentence;
use webnlg_align::error::Error;
use webnlg_align::io::reader::Split;
use webnlg_align::pipelines::{self, Pipeline};
use webnlg_align::tables::Tables;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::WebnlgAlign::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::WebnlgAlign::Clean(c) => {
            let tables = Arc::new(Tables::load(c.tables.as_deref())?);
            let p = pipelines::Clean::new(c.src, tables);
            let summary = p.run()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }

        cli::WebnlgAlign::Align(a) => {
            let tables = Arc::new(Tables::load(a.tables.as_deref())?);
            let splits = if a.splits.is_empty() {
                Split::ALL.to_vec()
            } else {
                a.splits
            };
            let p = pipelines::Align::new(a.src, a.dst, splits, tables)
                .with_spelling(!a.no_spelling)
                .with_parallel(!a.sequential);
            for summary in p.run()? {
                println!("{}", serde_json::to_string(&summary)?);
            }
        }

        cli::WebnlgAlign::Tables(t) => {
            let tables = Tables::load(t.tables.as_deref())?;
            for info in tables.infos() {
                println!("{}\t{}\t{}", info.sha256, info.entries, info.name);
            }
        }

        cli::WebnlgAlign::Schema => {
            println!("{}", AlignedSentence::schema()?);
        }
    };
    Ok(())
}
