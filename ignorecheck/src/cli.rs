#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Check(Vec<String>), // paths to test against the configured rules
    Scan,
    Help,
}

impl Command {
    pub fn from_args() -> Self {
        Self::parse(
            std::env::args()
                .skip(1)
                .collect(),
        )
    }

    fn parse(args: Vec<String>) -> Self {
        match args
            .first()
            .map(String::as_str)
        {
            None | Some("--help" | "-h") => return Command::Help,
            Some("--scan") => return Command::Scan,
            Some(_) => {},
        }

        Command::Check(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse(args(&[])), Command::Help);
        assert_eq!(Command::parse(args(&["-h"])), Command::Help);
        assert_eq!(Command::parse(args(&["--scan"])), Command::Scan);
        assert_eq!(
            Command::parse(args(&["target/", "src/main.rs"])),
            Command::Check(args(&["target/", "src/main.rs"]))
        );
    }
}
