use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "slnsync",
    about = "Interactively sync a .sln solution with its .slnx counterpart",
    version,
)]
pub struct Cli {
    /// Directory holding one .sln and one .slnx file (default: current
    /// directory), or two or more explicit solution file paths
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = Cli::try_parse_from(["slnsync"]).unwrap();
        assert!(cli.paths.is_empty());
    }

    #[test]
    fn parse_directory() {
        let cli = Cli::try_parse_from(["slnsync", "src/solution"]).unwrap();
        assert_eq!(cli.paths, vec![PathBuf::from("src/solution")]);
    }

    #[test]
    fn parse_file_pair() {
        let cli = Cli::try_parse_from(["slnsync", "App.sln", "App.slnx"]).unwrap();
        assert_eq!(cli.paths.len(), 2);
        assert_eq!(cli.paths[1], PathBuf::from("App.slnx"));
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["slnsync", "--force"]).is_err());
    }
}
