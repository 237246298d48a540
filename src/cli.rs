//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use webnlg_align::io::reader::Split;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "webnlg-align",
    about = "sentence-level alignment of the WebNLG corpus."
)]
/// Holds every command that is callable by the `webnlg-align` command.
pub enum WebnlgAlign {
    #[structopt(about = "Patch known-bad lines of the raw corpus files, in place")]
    Clean(Clean),
    #[structopt(about = "Align corpus splits into JSON lines files")]
    Align(Align),
    #[structopt(about = "Print digests and sizes of the loaded tables")]
    Tables(Tables),
    #[structopt(about = "Print the JSON schema of aligned records")]
    Schema,
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(parse(from_os_str), help = "raw corpus location (contains train/dev/test)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "tables",
        help = "directory of tables overriding the embedded ones"
    )]
    pub tables: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Align command and parameters.
///
/// ```sh
/// webnlg-align-align 0.1.0
/// Align corpus splits into JSON lines files
///
/// USAGE:
///     webnlg-align align [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///         --no-spelling    do not fix misspellings in sentence texts
///         --sequential     process files one at a time
///
/// OPTIONS:
///     -s, --split <splits>...    splits to align (train, dev, test). Defaults to all of them
///         --tables <tables>      directory of tables overriding the embedded ones
///
/// ARGS:
///     <src>    raw corpus location (contains train/dev/test)
///     <dst>    destination of the jsonl files
/// ```
pub struct Align {
    #[structopt(parse(from_os_str), help = "raw corpus location (contains train/dev/test)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination of the jsonl files")]
    pub dst: PathBuf,
    #[structopt(
        short = "s",
        long = "split",
        help = "splits to align (train, dev, test). Defaults to all of them"
    )]
    pub splits: Vec<Split>,
    #[structopt(
        parse(from_os_str),
        long = "tables",
        help = "directory of tables overriding the embedded ones"
    )]
    pub tables: Option<PathBuf>,
    #[structopt(long = "no-spelling", help = "do not fix misspellings in sentence texts")]
    pub no_spelling: bool,
    #[structopt(long = "sequential", help = "process files one at a time")]
    pub sequential: bool,
}

#[derive(Debug, StructOpt)]
pub struct Tables {
    #[structopt(
        parse(from_os_str),
        long = "tables",
        help = "directory of tables overriding the embedded ones"
    )]
    pub tables: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_align() {
        let opt = WebnlgAlign::from_iter_safe(&[
            "webnlg-align",
            "align",
            "raw",
            "out",
            "--split",
            "dev",
            "--split",
            "test",
            "--no-spelling",
        ])
        .unwrap();
        match opt {
            WebnlgAlign::Align(a) => {
                assert_eq!(a.splits, vec![Split::Dev, Split::Test]);
                assert!(a.no_spelling);
                assert!(!a.sequential);
                assert!(a.tables.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_split() {
        assert!(
            WebnlgAlign::from_iter_safe(&["webnlg-align", "align", "raw", "out", "-s", "valid2"])
                .is_err()
        );
    }
}
